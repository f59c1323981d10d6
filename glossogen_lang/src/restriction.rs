// Restriction patterns: pronounceability vetoes over candidate syllables.
//
// A restriction is a regular expression; a candidate syllable that matches
// one anywhere (substring search, not full match) is rejected. Patterns may
// reference whole phoneme categories with `\C`-style placeholders, which are
// expanded at compile time into a bracket class of the category's symbols.
//
// Compilation is two-phase: first the pattern is scanned for escape runs —
// only an odd run of `\` immediately before a tag character activates a
// placeholder, so doubled escapes cancel out and stay literal — then each
// activated placeholder is replaced by the materialized character class and
// the result is handed to the regex engine. The engine is `fancy-regex`
// because the bundled doubled-sound pattern `(.)\1` needs backreferences.

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::phonemes::PhonemeInventory;

/// The placeholder escape character.
pub const CATEGORY_ESCAPE: char = '\\';

/// A compiled restriction, ready to test candidates.
#[derive(Debug, Clone)]
pub struct Restriction {
    pattern: String,
    regex: fancy_regex::Regex,
}

impl Restriction {
    /// Compile `pattern` against `inventory`.
    ///
    /// Category placeholders are expanded here, not at match time: the
    /// compiled matcher embeds the category's symbol set as it was when
    /// `compile` ran. Fails if a placeholder names an undefined category or
    /// if the expanded pattern is not a valid regular expression.
    pub fn compile(pattern: &str, inventory: &PhonemeInventory) -> Result<Self> {
        let expanded = expand_placeholders(pattern, inventory)?;
        let regex = fancy_regex::Regex::new(&expanded)?;
        Ok(Restriction {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as supplied to `compile`, before expansion.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Substring search: true when the restriction matches anywhere in
    /// `candidate`.
    pub fn is_match(&self, candidate: &str) -> Result<bool> {
        Ok(self.regex.is_match(candidate)?)
    }
}

/// Rewrite category placeholders into bracket classes.
///
/// Scans escape runs: an odd run followed by a defined category tag becomes
/// `run - 1` literal escapes plus the category's class; an odd run followed
/// by an undefined ASCII uppercase letter is a configuration error (a typo'd
/// category rather than a regex escape); everything else passes through
/// verbatim, so ordinary escapes like `\1`, `\d`, or `\b` keep their regex
/// meaning.
fn expand_placeholders(pattern: &str, inventory: &PhonemeInventory) -> Result<String> {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if c != CATEGORY_ESCAPE {
            out.push(c);
            continue;
        }
        let mut run = 1usize;
        while chars.peek() == Some(&CATEGORY_ESCAPE) {
            chars.next();
            run += 1;
        }
        if run % 2 == 1 {
            match chars.peek().copied() {
                Some(tag) if inventory.contains(tag) => {
                    chars.next();
                    for _ in 0..run - 1 {
                        out.push(CATEGORY_ESCAPE);
                    }
                    out.push_str(&character_class(inventory, tag));
                    continue;
                }
                Some(tag) if tag.is_ascii_uppercase() => {
                    return Err(Error::UnknownPlaceholder { tag });
                }
                _ => {}
            }
        }
        for _ in 0..run {
            out.push(CATEGORY_ESCAPE);
        }
    }
    Ok(out)
}

/// Bracket class over every character of every symbol in the category.
///
/// Multi-character symbols contribute each of their characters; duplicates
/// collapse and ordering inside the brackets is immaterial. Characters with
/// special meaning inside a class are escaped.
fn character_class(inventory: &PhonemeInventory, tag: char) -> String {
    let mut members: BTreeSet<char> = BTreeSet::new();
    if let Some(source) = inventory.get(tag) {
        for symbol in source.symbols() {
            members.extend(symbol.chars());
        }
    }
    let mut class = String::from("[");
    for member in members {
        if matches!(member, '\\' | '[' | ']' | '^' | '-') {
            class.push('\\');
        }
        class.push(member);
    }
    class.push(']');
    class
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonemes::PhonemeSource;

    fn inventory() -> PhonemeInventory {
        let mut inventory = PhonemeInventory::new();
        inventory.define('C', PhonemeSource::uniform("ptk")).unwrap();
        inventory.define('V', PhonemeSource::uniform("aiu")).unwrap();
        inventory
    }

    #[test]
    fn placeholder_expands_to_category_class() {
        let restriction = Restriction::compile(r"\C\V", &inventory()).unwrap();
        assert!(restriction.is_match("pa").unwrap());
        assert!(restriction.is_match("xku!").unwrap());
        assert!(!restriction.is_match("ap").unwrap());
    }

    #[test]
    fn doubled_escape_stays_literal() {
        // `\\C` is an escaped backslash followed by a literal C, not a
        // placeholder.
        let restriction = Restriction::compile(r"\\C", &inventory()).unwrap();
        assert!(restriction.is_match(r"a\Cb").unwrap());
        assert!(!restriction.is_match("pa").unwrap());
    }

    #[test]
    fn tripled_escape_activates_after_literal_backslash() {
        // `\\\C`: two escapes collapse to a literal backslash, the third
        // activates the placeholder.
        let restriction = Restriction::compile(r"\\\C", &inventory()).unwrap();
        assert!(restriction.is_match(r"a\pb").unwrap());
        assert!(!restriction.is_match(r"a\Cb").unwrap());
    }

    #[test]
    fn unknown_category_placeholder_fails() {
        let err = Restriction::compile(r"\X", &inventory());
        assert!(matches!(err, Err(Error::UnknownPlaceholder { tag: 'X' })));
    }

    #[test]
    fn ordinary_regex_escapes_pass_through() {
        let restriction = Restriction::compile(r"\d", &inventory()).unwrap();
        assert!(restriction.is_match("a1b").unwrap());
        assert!(!restriction.is_match("abc").unwrap());
    }

    #[test]
    fn backreference_matches_doubled_character() {
        let restriction = Restriction::compile(r"(.)\1", &inventory()).unwrap();
        assert!(restriction.is_match("foo").unwrap());
        assert!(restriction.is_match("pp").unwrap());
        assert!(!restriction.is_match("papa").unwrap());
    }

    #[test]
    fn matching_is_substring_search() {
        let restriction = Restriction::compile("pp", &inventory()).unwrap();
        assert!(restriction.is_match("appa").unwrap());
        assert!(!restriction.is_match("papa").unwrap());
    }

    #[test]
    fn invalid_expanded_pattern_fails_to_compile() {
        let err = Restriction::compile("(", &inventory());
        assert!(matches!(err, Err(Error::Pattern(_))));
    }

    #[test]
    fn pattern_accessor_returns_unexpanded_form() {
        let restriction = Restriction::compile(r"\C\C", &inventory()).unwrap();
        assert_eq!(restriction.pattern(), r"\C\C");
    }
}
