// Phoneme inventory: named categories of sound symbols.
//
// A category is keyed by a single-character tag (`C`, `V`, ...) and holds
// either a uniform set of symbols or a weighted distribution of symbol
// relative frequencies. Category tags are what syllable structures and
// restriction placeholders refer to.
//
// Storage is a `BTreeMap` and weighted entries iterate in key order, so
// sampling walks a fixed order and the whole inventory is deterministic
// under a fixed `LangRng` seed (no HashMap anywhere in this crate).

use std::collections::{BTreeMap, BTreeSet};

use glossogen_prng::LangRng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The symbols of one phoneme category.
///
/// Deserializes untagged: a JSON array is a uniform set, a JSON object is a
/// weighted distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhonemeSource {
    /// Distinct symbols drawn with equal probability.
    Uniform(Vec<String>),
    /// Symbol mapped to its positive relative frequency.
    Weighted(BTreeMap<String, f64>),
}

impl PhonemeSource {
    /// Uniform set with one symbol per character of `symbols`.
    pub fn uniform(symbols: &str) -> Self {
        PhonemeSource::Uniform(symbols.chars().map(String::from).collect())
    }

    /// Weighted distribution from `(symbol, relative frequency)` pairs.
    pub fn weighted(pairs: &[(&str, f64)]) -> Self {
        PhonemeSource::Weighted(
            pairs
                .iter()
                .map(|(symbol, frequency)| (symbol.to_string(), *frequency))
                .collect(),
        )
    }

    /// Number of symbols in the category.
    pub fn len(&self) -> usize {
        match self {
            PhonemeSource::Uniform(symbols) => symbols.len(),
            PhonemeSource::Weighted(entries) => entries.len(),
        }
    }

    /// True when the category holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All symbols of the category, in its fixed iteration order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        match self {
            PhonemeSource::Uniform(symbols) => {
                Box::new(symbols.iter().map(String::as_str)) as Box<dyn Iterator<Item = &str> + '_>
            }
            PhonemeSource::Weighted(entries) => Box::new(entries.keys().map(String::as_str)),
        }
    }

    /// Sample one symbol.
    ///
    /// A uniform set is drawn with equal probability. A weighted distribution
    /// draws a continuous uniform value in `[0, total_weight]` and walks the
    /// entries in their fixed order, returning the first symbol whose
    /// cumulative frequency reaches the draw; the final entry absorbs the top
    /// of the range, including any floating-point shortfall.
    ///
    /// Panics if the category is empty (`PhonemeInventory::define` rejects
    /// empty sources, so inventory-held categories never are).
    pub fn sample(&self, rng: &mut LangRng) -> &str {
        assert!(!self.is_empty(), "sample: category must not be empty");
        match self {
            PhonemeSource::Uniform(symbols) => rng.pick(symbols).as_str(),
            PhonemeSource::Weighted(entries) => {
                let total: f64 = entries.values().sum();
                let draw = rng.next_f64() * total;
                let mut cumulative = 0.0;
                let mut chosen = "";
                for (symbol, frequency) in entries {
                    cumulative += frequency;
                    chosen = symbol.as_str();
                    if draw <= cumulative {
                        break;
                    }
                }
                chosen
            }
        }
    }
}

/// Mapping from category tag to phoneme source.
///
/// Tags are unique single characters; `?` is reserved for the optional
/// marker in syllable structures and can never name a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhonemeInventory {
    categories: BTreeMap<char, PhonemeSource>,
}

impl PhonemeInventory {
    /// An inventory with no categories.
    pub fn new() -> Self {
        PhonemeInventory {
            categories: BTreeMap::new(),
        }
    }

    /// Define (or replace) a category.
    ///
    /// Rejects the reserved `?` tag, whitespace/control tags, empty symbol
    /// collections, and non-positive weighted frequencies. Everything else is
    /// stored as-is, preserving whether the source is uniform or weighted.
    pub fn define(&mut self, tag: char, source: PhonemeSource) -> Result<()> {
        if tag == '?' || tag.is_whitespace() || tag.is_control() {
            return Err(Error::InvalidTag { tag });
        }
        if source.is_empty() {
            return Err(Error::EmptySource { tag });
        }
        if let PhonemeSource::Weighted(entries) = &source {
            for (symbol, frequency) in entries {
                if !(*frequency > 0.0) {
                    return Err(Error::InvalidFrequency {
                        tag,
                        symbol: symbol.clone(),
                        frequency: *frequency,
                    });
                }
            }
        }
        self.categories.insert(tag, source);
        Ok(())
    }

    /// True when `tag` names a defined category.
    pub fn contains(&self, tag: char) -> bool {
        self.categories.contains_key(&tag)
    }

    /// The source behind `tag`, if defined.
    pub fn get(&self, tag: char) -> Option<&PhonemeSource> {
        self.categories.get(&tag)
    }

    /// All defined category tags, in sorted order.
    pub fn categories(&self) -> Vec<char> {
        self.categories.keys().copied().collect()
    }

    /// Sample one symbol from the category named by `tag`.
    pub fn sample(&self, tag: char, rng: &mut LangRng) -> Result<&str> {
        let source = self
            .categories
            .get(&tag)
            .ok_or(Error::UnknownCategory { tag })?;
        Ok(source.sample(rng))
    }

    /// The sorted, duplicate-free union of symbols across all categories,
    /// with empty-string entries dropped.
    pub fn all_symbols(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self
            .categories
            .values()
            .flat_map(PhonemeSource::symbols)
            .filter(|symbol| !symbol.is_empty())
            .collect();
        unique.into_iter().map(String::from).collect()
    }
}

impl Default for PhonemeInventory {
    /// The bundled starter inventory: minimal consonants, the standard five
    /// vowels, `s` as the only sibilant, `m n` finals, and `r l` liquids.
    fn default() -> Self {
        crate::presets::standard_inventory()
    }
}
