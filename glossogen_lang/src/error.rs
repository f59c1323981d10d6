// Error types for the language engine.
//
// Two families: configuration errors, raised synchronously while an
// inventory/structure/restriction/definition is being set up, and
// `Exhausted`, raised from a generation call whose rejection-sampling loop
// hit its attempt bound. Generation never raises configuration errors —
// everything about a language is validated before the first sample is drawn.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while configuring or running a language.
#[derive(Debug, Error)]
pub enum Error {
    /// A phoneme category tag was `?` or an unprintable character.
    #[error("invalid category tag {tag:?}: must be a printable character other than '?'")]
    InvalidTag { tag: char },

    /// A phoneme category was defined with no symbols.
    #[error("category {tag:?} has no phonemes")]
    EmptySource { tag: char },

    /// A weighted phoneme category contained a non-positive frequency.
    #[error("category {tag:?}: symbol {symbol:?} has non-positive frequency {frequency}")]
    InvalidFrequency {
        tag: char,
        symbol: String,
        frequency: f64,
    },

    /// A phoneme category was sampled that the inventory does not define.
    #[error("unknown phoneme category {tag:?}")]
    UnknownCategory { tag: char },

    /// A syllable structure template did not fully decompose into
    /// `tag('?')?` tokens over the inventory's categories.
    #[error("invalid syllable structure: {template:?}")]
    InvalidStructure { template: String },

    /// A restriction pattern used a category placeholder for an undefined
    /// category.
    #[error("restriction pattern references undefined category {tag:?}")]
    UnknownPlaceholder { tag: char },

    /// A restriction pattern failed to compile or match.
    #[error("invalid restriction pattern: {0}")]
    Pattern(#[from] Box<fancy_regex::Error>),

    /// A language definition could not be decoded from JSON.
    #[error("invalid language definition: {0}")]
    Definition(#[from] serde_json::Error),

    /// A min/max pair in a language definition was inverted or degenerate.
    #[error("invalid {what} bounds: {min}..={max}")]
    InvalidBounds {
        what: &'static str,
        min: usize,
        max: usize,
    },

    /// A rejection-sampling loop ran out of attempts.
    #[error("gave up generating a {what} after {attempts} attempts")]
    Exhausted { what: &'static str, attempts: usize },
}

impl From<fancy_regex::Error> for Error {
    fn from(err: fancy_regex::Error) -> Self {
        Error::Pattern(Box::new(err))
    }
}
