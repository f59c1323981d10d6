// Data-driven language definitions.
//
// A `LanguageDefinition` describes an entire language as plain data —
// phoneme categories, syllable structure, restrictions, and word/name
// tuning — and deserializes from JSON ("JSON string in, typed struct out").
// `build` turns a definition into a ready `Language`, performing every
// validation up front: a built language never raises configuration errors
// during generation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::language::Language;
use crate::phonemes::{PhonemeInventory, PhonemeSource};
use crate::phonology::Phonology;

/// A complete language described as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageDefinition {
    /// Category tag to phoneme source. JSON arrays are uniform sets, JSON
    /// objects are weighted distributions.
    pub phonemes: BTreeMap<char, PhonemeSource>,
    /// Syllable structure template, e.g. `"CVC?"`.
    pub structure: String,
    /// Restriction patterns compiled against the phoneme categories.
    #[serde(default)]
    pub restrictions: Vec<String>,
    /// Minimum syllables per word.
    #[serde(default = "default_one")]
    pub min_syllables: usize,
    /// Maximum syllables per word.
    #[serde(default = "default_one")]
    pub max_syllables: usize,
    /// Minimum accepted name length in characters.
    #[serde(default = "default_min_name_len")]
    pub min_name_len: usize,
    /// Maximum accepted name length in characters.
    #[serde(default = "default_max_name_len")]
    pub max_name_len: usize,
    /// String placed between the words of a composed name.
    #[serde(default = "default_joiner")]
    pub joiner: String,
    /// Fixed genitive particle; empty means "generate one".
    #[serde(default)]
    pub genitive: String,
    /// Fixed definitive particle; empty means "generate one".
    #[serde(default)]
    pub definitive: String,
}

fn default_one() -> usize {
    1
}

fn default_min_name_len() -> usize {
    5
}

fn default_max_name_len() -> usize {
    12
}

fn default_joiner() -> String {
    " ".to_string()
}

impl LanguageDefinition {
    /// Decode a definition from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the definition and build a generator from it.
    pub fn build(&self) -> Result<Language> {
        if self.min_syllables < 1 || self.min_syllables > self.max_syllables {
            return Err(Error::InvalidBounds {
                what: "syllable count",
                min: self.min_syllables,
                max: self.max_syllables,
            });
        }
        if self.min_name_len > self.max_name_len {
            return Err(Error::InvalidBounds {
                what: "name length",
                min: self.min_name_len,
                max: self.max_name_len,
            });
        }
        let mut inventory = PhonemeInventory::new();
        for (tag, source) in &self.phonemes {
            inventory.define(*tag, source.clone())?;
        }
        let patterns: Vec<&str> = self.restrictions.iter().map(String::as_str).collect();
        let phonology = Phonology::new(inventory, &self.structure, &patterns)?;
        Ok(Language::new(phonology)
            .with_syllables(self.min_syllables, self.max_syllables)
            .with_name_length(self.min_name_len, self.max_name_len)
            .with_joiner(&self.joiner)
            .with_genitive(&self.genitive)
            .with_definitive(&self.definitive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossogen_prng::LangRng;

    #[test]
    fn minimal_definition_builds_and_generates() {
        let definition = LanguageDefinition::from_json(
            r#"{
                "phonemes": {"C": ["p", "t", "k"], "V": ["a", "i"]},
                "structure": "CV"
            }"#,
        )
        .unwrap();
        assert_eq!(definition.min_syllables, 1);
        assert_eq!(definition.max_name_len, 12);
        assert_eq!(definition.joiner, " ");

        let mut language = definition.build().unwrap();
        let mut rng = LangRng::new(1);
        let word = language.word(Some("thing"), &mut rng).unwrap();
        assert_eq!(word.chars().count(), 2);
    }

    #[test]
    fn weighted_phonemes_deserialize_from_objects() {
        let definition = LanguageDefinition::from_json(
            r#"{
                "phonemes": {"C": {"p": 1.0, "t": 3.0}, "V": ["a"]},
                "structure": "CV"
            }"#,
        )
        .unwrap();
        assert_eq!(
            definition.phonemes[&'C'],
            PhonemeSource::weighted(&[("p", 1.0), ("t", 3.0)])
        );
        definition.build().unwrap();
    }

    #[test]
    fn unknown_structure_tag_fails_at_build() {
        let definition = LanguageDefinition::from_json(
            r#"{"phonemes": {"C": ["p"], "V": ["a"]}, "structure": "CXV"}"#,
        )
        .unwrap();
        assert!(matches!(
            definition.build(),
            Err(Error::InvalidStructure { .. })
        ));
    }

    #[test]
    fn unknown_restriction_placeholder_fails_at_build() {
        let definition = LanguageDefinition::from_json(
            r#"{
                "phonemes": {"C": ["p"], "V": ["a"]},
                "structure": "CV",
                "restrictions": ["\\X"]
            }"#,
        )
        .unwrap();
        assert!(matches!(
            definition.build(),
            Err(Error::UnknownPlaceholder { tag: 'X' })
        ));
    }

    #[test]
    fn inverted_syllable_bounds_fail_at_build() {
        let definition = LanguageDefinition::from_json(
            r#"{
                "phonemes": {"C": ["p"], "V": ["a"]},
                "structure": "CV",
                "min_syllables": 3,
                "max_syllables": 2
            }"#,
        )
        .unwrap();
        assert!(matches!(
            definition.build(),
            Err(Error::InvalidBounds {
                what: "syllable count",
                ..
            })
        ));
    }

    #[test]
    fn zero_minimum_syllables_fail_at_build() {
        let definition = LanguageDefinition::from_json(
            r#"{
                "phonemes": {"C": ["p"], "V": ["a"]},
                "structure": "CV",
                "min_syllables": 0,
                "max_syllables": 2
            }"#,
        )
        .unwrap();
        assert!(matches!(
            definition.build(),
            Err(Error::InvalidBounds { .. })
        ));
    }

    #[test]
    fn inverted_name_bounds_fail_at_build() {
        let definition = LanguageDefinition::from_json(
            r#"{
                "phonemes": {"C": ["p"], "V": ["a"]},
                "structure": "CV",
                "min_name_len": 20,
                "max_name_len": 4
            }"#,
        )
        .unwrap();
        assert!(matches!(
            definition.build(),
            Err(Error::InvalidBounds {
                what: "name length",
                ..
            })
        ));
    }

    #[test]
    fn malformed_json_is_a_definition_error() {
        let err = LanguageDefinition::from_json("{not json");
        assert!(matches!(err, Err(Error::Definition(_))));
    }

    #[test]
    fn definitions_roundtrip_through_json() {
        let definition = LanguageDefinition::from_json(
            r#"{
                "phonemes": {"C": ["p", "t"], "V": {"a": 2.0, "i": 1.0}},
                "structure": "CVC?",
                "restrictions": ["(.)\\1"],
                "min_syllables": 1,
                "max_syllables": 3,
                "joiner": "-",
                "genitive": "na"
            }"#,
        )
        .unwrap();
        let json = serde_json::to_string(&definition).unwrap();
        let decoded = LanguageDefinition::from_json(&json).unwrap();
        assert_eq!(decoded, definition);
    }

    #[test]
    fn fixed_particles_survive_into_generation() {
        let definition = LanguageDefinition::from_json(
            r#"{
                "phonemes": {"C": ["p", "t", "k", "m", "n", "l"], "V": ["a", "e", "i", "o", "u"]},
                "structure": "CVC",
                "min_name_len": 2,
                "max_name_len": 64,
                "genitive": "zoz",
                "definitive": "qeq"
            }"#,
        )
        .unwrap();
        let mut language = definition.build().unwrap();
        let mut rng = LangRng::new(2);
        for _ in 0..50 {
            language.name("city", &mut rng).unwrap();
        }
        // Fixed particles mean nothing was generated under "of"/"the".
        assert!(language.morphemes_for(Some("of")).is_empty());
        assert!(language.morphemes_for(Some("the")).is_empty());
    }
}
