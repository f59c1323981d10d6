// Invented-language generation: syllables, words, and names.
//
// The engine synthesizes plausible syllables for a made-up language by
// sampling phoneme symbols along a phonotactic structure template,
// rejection-sampling away candidates that violate pronounceability
// restrictions, then composing accepted syllables into words and names
// under reuse, uniqueness, and length constraints.
//
// Architecture, leaves first:
// - `error.rs`: the `Error` enum — configuration failures at setup time,
//   `Exhausted` when a bounded rejection loop gives up
// - `phonemes.rs`: `PhonemeInventory` — tagged categories of symbols,
//   uniform or frequency-weighted, with sampling
// - `structure.rs`: `SyllableStructure` — parsed `tag('?')?` templates
// - `restriction.rs`: `Restriction` — patterns with `\C` category
//   placeholders expanded into character classes at compile time
// - `phonology.rs`: `Phonology` — bounded rejection-sampling syllable
//   synthesis over the three pieces above
// - `language.rs`: `Language` — morpheme/word/name caches with weighted
//   reuse, pooled substring-uniqueness, and name composition
// - `orthography.rs`: display-side spelling (`Orthography` trait plus the
//   substitution and phonetic renderings)
// - `presets.rs`: bundled phoneme sets, structures, restriction sets,
//   spelling tables, and `random_language`
// - `definition.rs`: `LanguageDefinition` — a whole language as JSON
//
// **Critical constraint: determinism.** All randomness flows through
// `glossogen_prng::LangRng`, passed explicitly into every sampling call; a
// fixed seed reproduces the exact stream of syllables, words, and names.
// No HashMap is used anywhere in the crate.

pub mod definition;
pub mod error;
pub mod language;
pub mod orthography;
pub mod phonemes;
pub mod phonology;
pub mod presets;
pub mod restriction;
pub mod structure;

// Re-export key types at crate root for convenience.
pub use definition::LanguageDefinition;
pub use error::{Error, Result};
pub use language::{Language, SYLLABLE_SEPARATOR};
pub use orthography::{Orthography, PhoneticOrthography, SpellingOrthography};
pub use phonemes::{PhonemeInventory, PhonemeSource};
pub use phonology::{DEFAULT_MAX_ATTEMPTS, Phonology};
pub use restriction::{CATEGORY_ESCAPE, Restriction};
pub use structure::{StructureStep, SyllableStructure};

#[cfg(test)]
mod tests {
    use super::*;
    use glossogen_prng::LangRng;

    // End-to-end: a language assembled from the bundled presets produces a
    // stable, restriction-clean stream of names under a fixed seed.
    #[test]
    fn preset_language_end_to_end() {
        let build = || {
            let inventory = PhonemeInventory::default();
            let restrictions =
                presets::named(presets::RESTRICTION_SETS, "Double sounds").unwrap();
            let phonology = Phonology::new(inventory, "CVC?", restrictions).unwrap();
            Language::new(phonology)
                .with_syllables(1, 3)
                .with_name_length(2, 64)
        };

        let mut first = build();
        let mut second = build();
        let mut rng_a = LangRng::new(2718);
        let mut rng_b = LangRng::new(2718);
        for category in ["region", "city", "person", "river"] {
            for _ in 0..10 {
                let name = first.name(category, &mut rng_a).unwrap();
                assert_eq!(name, second.name(category, &mut rng_b).unwrap());
                assert!(!name.is_empty());
            }
        }

        // No accepted morpheme matches the doubled-sound restriction.
        for restriction in first.phonology().restrictions() {
            for morpheme in first.morphemes() {
                assert!(
                    !restriction.is_match(morpheme).unwrap(),
                    "morpheme {morpheme:?} matches {:?}",
                    restriction.pattern()
                );
            }
        }
    }
}
