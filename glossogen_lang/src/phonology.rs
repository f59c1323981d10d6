// Syllable synthesis: rejection sampling over a structure template.
//
// A `Phonology` bundles an inventory, a parsed structure, and compiled
// restrictions. `make_syllable` builds a candidate by walking the structure
// (optional steps skipped on a fair coin), then tests the whole candidate
// against every restriction; any match discards the entire syllable and
// synthesis starts over. A single bad symbol therefore throws away the whole
// candidate, never just the one step.
//
// Termination is not structurally guaranteed — a restriction can match every
// reachable candidate — so the retry loop is bounded and overrunning the
// bound is an `Exhausted` error rather than a hang.

use glossogen_prng::LangRng;

use crate::error::{Error, Result};
use crate::phonemes::PhonemeInventory;
use crate::restriction::Restriction;
use crate::structure::SyllableStructure;

/// Default bound on rejection-sampling loops, here and in `Language`.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Everything needed to synthesize syllables for one language.
#[derive(Debug, Clone)]
pub struct Phonology {
    phonemes: PhonemeInventory,
    structure: SyllableStructure,
    restrictions: Vec<Restriction>,
    max_attempts: usize,
}

impl Phonology {
    /// Parse `structure` and compile `restrictions` against `phonemes`.
    ///
    /// All configuration errors surface here; a constructed `Phonology`
    /// only ever fails with `Exhausted` afterwards.
    pub fn new(
        phonemes: PhonemeInventory,
        structure: &str,
        restrictions: &[&str],
    ) -> Result<Self> {
        let structure = SyllableStructure::parse(structure, &phonemes)?;
        let restrictions = restrictions
            .iter()
            .map(|pattern| Restriction::compile(pattern, &phonemes))
            .collect::<Result<Vec<_>>>()?;
        Ok(Phonology {
            phonemes,
            structure,
            restrictions,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        })
    }

    /// Assemble a phonology from already-validated parts.
    pub fn from_parts(
        phonemes: PhonemeInventory,
        structure: SyllableStructure,
        restrictions: Vec<Restriction>,
    ) -> Self {
        Phonology {
            phonemes,
            structure,
            restrictions,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Override the rejection-sampling attempt bound.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// The inventory syllables are sampled from.
    pub fn phonemes(&self) -> &PhonemeInventory {
        &self.phonemes
    }

    /// The parsed structure template.
    pub fn structure(&self) -> &SyllableStructure {
        &self.structure
    }

    /// The compiled restrictions, in compile order.
    pub fn restrictions(&self) -> &[Restriction] {
        &self.restrictions
    }

    /// Generate one syllable.
    ///
    /// Each attempt samples a symbol per structure step (optional steps are
    /// dropped with probability 0.5) and accepts the candidate only if no
    /// restriction matches anywhere inside it.
    pub fn make_syllable(&self, rng: &mut LangRng) -> Result<String> {
        for _ in 0..self.max_attempts {
            let mut syllable = String::new();
            for step in self.structure.steps() {
                if step.optional && rng.chance(0.5) {
                    continue;
                }
                syllable.push_str(self.phonemes.sample(step.tag, rng)?);
            }
            if self.is_restricted(&syllable)? {
                continue;
            }
            return Ok(syllable);
        }
        Err(Error::Exhausted {
            what: "syllable",
            attempts: self.max_attempts,
        })
    }

    fn is_restricted(&self, candidate: &str) -> Result<bool> {
        for restriction in &self.restrictions {
            if restriction.is_match(candidate)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
