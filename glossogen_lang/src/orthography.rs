// Orthographies: render generated phoneme strings in a writing system.
//
// The synthesis engine never consults an orthography — it works on raw
// phoneme strings, with `.` marking syllable boundaries inside words.
// Orthographies are a display-side collaborator: callers hand generated
// text to `spell` when showing it to a reader.
//
// `SpellingOrthography` substitutes character by character, consulting its
// consonant map first, then its vowel map, then the bundled default
// spellings, and finally falling back to the character itself.
// `PhoneticOrthography` is the identity rendering, except that it drops the
// syllable-boundary markers.

use std::collections::BTreeMap;
use std::fmt;

use crate::language::SYLLABLE_SEPARATOR;
use crate::phonemes::PhonemeInventory;
use crate::presets;

/// A writing system for generated text.
///
/// The engine accepts any implementation, not only the bundled ones.
pub trait Orthography: fmt::Debug {
    /// Render `text` in this writing system.
    fn spell(&self, text: &str) -> String;

    /// Every renderable character for `phonemes`: `spell` applied to the
    /// sorted, deduplicated union of the inventory's symbols.
    fn alphabet(&self, phonemes: &PhonemeInventory) -> String {
        self.spell(&phonemes.all_symbols().concat())
    }
}

/// Character-substitution orthography with consonant and vowel overlays.
#[derive(Debug, Clone, Default)]
pub struct SpellingOrthography {
    consonants: BTreeMap<char, String>,
    vowels: BTreeMap<char, String>,
}

impl SpellingOrthography {
    /// Build from `(phoneme, spelling)` overlay tables.
    ///
    /// An empty overlay falls through to the bundled default spellings.
    pub fn new(consonants: &[(char, &str)], vowels: &[(char, &str)]) -> Self {
        let to_map = |pairs: &[(char, &str)]| {
            pairs
                .iter()
                .map(|(phoneme, spelling)| (*phoneme, spelling.to_string()))
                .collect()
        };
        SpellingOrthography {
            consonants: to_map(consonants),
            vowels: to_map(vowels),
        }
    }
}

impl Orthography for SpellingOrthography {
    fn spell(&self, text: &str) -> String {
        let mut spelled = String::with_capacity(text.len());
        for c in text.chars() {
            if let Some(s) = self.consonants.get(&c) {
                spelled.push_str(s);
            } else if let Some(s) = self.vowels.get(&c) {
                spelled.push_str(s);
            } else if let Some(s) = presets::default_spelling(c) {
                spelled.push_str(s);
            } else {
                spelled.push(c);
            }
        }
        spelled
    }
}

/// The identity orthography: phoneme strings unchanged, syllable-boundary
/// markers dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneticOrthography;

impl Orthography for PhoneticOrthography {
    fn spell(&self, text: &str) -> String {
        text.chars().filter(|c| *c != SYLLABLE_SEPARATOR).collect()
    }
}
