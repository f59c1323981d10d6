// Lexicon generation: morphemes, words, and names on top of a phonology.
//
// A `Language` owns three append-only caches — morphemes, words, names —
// each keyed by an optional category string. Generation balances reuse
// against novelty: existing entries are returned with a probability that
// grows with the bucket's size, so a language develops recurring roots the
// way natural vocabularies do. New entries must survive a pooled
// substring-uniqueness check across the whole cache (a candidate that is a
// substring of, or contains, any prior entry in any bucket is rejected)
// before they are stored.
//
// Names are composed from one or two words plus optional genitive and
// definitive particles, capitalized, joined, and kept within configured
// length bounds. Every acceptance loop is bounded; overrunning the bound is
// an `Exhausted` error.
//
// All randomness comes through the `&mut LangRng` parameter, so a fixed
// seed reproduces the exact sequence of morphemes, words, and names.

use std::collections::BTreeMap;

use glossogen_prng::LangRng;

use crate::error::{Error, Result};
use crate::orthography::{Orthography, PhoneticOrthography};
use crate::phonology::{DEFAULT_MAX_ATTEMPTS, Phonology};

/// Marker between syllables inside a stored word.
pub const SYLLABLE_SEPARATOR: char = '.';

type Cache = BTreeMap<Option<String>, Vec<String>>;

/// Word and name generator for one invented language.
#[derive(Debug)]
pub struct Language {
    phonology: Phonology,
    orthography: Box<dyn Orthography>,
    min_syllables: usize,
    max_syllables: usize,
    min_name_len: usize,
    max_name_len: usize,
    joiner: String,
    genitive: Option<String>,
    definitive: Option<String>,
    max_attempts: usize,
    morphemes: Cache,
    words: Cache,
    names: Cache,
}

impl Language {
    /// A language over `phonology` with default tuning: one-syllable words,
    /// names of 5 to 12 characters joined with spaces, generated particles,
    /// and the phonetic (identity) orthography.
    pub fn new(phonology: Phonology) -> Self {
        Language {
            phonology,
            orthography: Box::new(PhoneticOrthography),
            min_syllables: 1,
            max_syllables: 1,
            min_name_len: 5,
            max_name_len: 12,
            joiner: " ".to_string(),
            genitive: None,
            definitive: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            morphemes: Cache::new(),
            words: Cache::new(),
            names: Cache::new(),
        }
    }

    /// Set the syllable-count range for words (inclusive).
    ///
    /// Panics if `min` is zero or exceeds `max`.
    pub fn with_syllables(mut self, min: usize, max: usize) -> Self {
        assert!(
            min >= 1 && min <= max,
            "with_syllables: need 1 <= min <= max"
        );
        self.min_syllables = min;
        self.max_syllables = max;
        self
    }

    /// Set the accepted name length range in characters (inclusive).
    ///
    /// Panics if `min` exceeds `max`.
    pub fn with_name_length(mut self, min: usize, max: usize) -> Self {
        assert!(min <= max, "with_name_length: need min <= max");
        self.min_name_len = min;
        self.max_name_len = max;
        self
    }

    /// Set the string placed between the words of a composed name.
    pub fn with_joiner(mut self, joiner: &str) -> Self {
        self.joiner = joiner.to_string();
        self
    }

    /// Fix the genitive particle. An empty string means "generate one".
    pub fn with_genitive(mut self, genitive: &str) -> Self {
        self.genitive = (!genitive.is_empty()).then(|| genitive.to_string());
        self
    }

    /// Fix the definitive particle. An empty string means "generate one".
    pub fn with_definitive(mut self, definitive: &str) -> Self {
        self.definitive = (!definitive.is_empty()).then(|| definitive.to_string());
        self
    }

    /// Override the acceptance-loop attempt bound.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Replace the display orthography.
    pub fn with_orthography(mut self, orthography: impl Orthography + 'static) -> Self {
        self.orthography = Box::new(orthography);
        self
    }

    /// The phonology this language draws syllables from.
    pub fn phonology(&self) -> &Phonology {
        &self.phonology
    }

    /// Render `text` through the language's orthography.
    pub fn spell(&self, text: &str) -> String {
        self.orthography.spell(text)
    }

    /// The language's full renderable alphabet.
    pub fn alphabet(&self) -> String {
        self.orthography.alphabet(self.phonology.phonemes())
    }

    /// Stored morphemes under `category` (empty if none yet).
    pub fn morphemes_for(&self, category: Option<&str>) -> &[String] {
        cache_bucket(&self.morphemes, category)
    }

    /// Stored words under `category` (empty if none yet).
    pub fn words_for(&self, category: Option<&str>) -> &[String] {
        cache_bucket(&self.words, category)
    }

    /// Stored names under `category` (empty if none yet).
    pub fn names_for(&self, category: Option<&str>) -> &[String] {
        cache_bucket(&self.names, category)
    }

    /// Every stored morpheme, pooled across categories.
    pub fn morphemes(&self) -> impl Iterator<Item = &str> {
        self.morphemes.values().flatten().map(String::as_str)
    }

    /// Every stored word, pooled across categories.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.values().flatten().map(String::as_str)
    }

    /// Every stored name, pooled across categories.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.values().flatten().map(String::as_str)
    }

    /// Fetch or create a morpheme under `category`.
    ///
    /// With `count` morphemes already in the bucket and a novelty bias of 10
    /// (uncategorized) or 1 (categorized), an integer draw from
    /// `[0, count + bias]` below `count` reuses a stored morpheme. Otherwise
    /// a fresh syllable is synthesized, rejected while it collides with any
    /// stored morpheme in any bucket, then stored and returned.
    pub fn morpheme(&mut self, category: Option<&str>, rng: &mut LangRng) -> Result<String> {
        let key = category.map(String::from);
        let bias = if category.is_none() { 10 } else { 1 };
        if let Some(bucket) = self.morphemes.get(&key) {
            if rng.range_usize_inclusive(0, bucket.len() + bias) < bucket.len() {
                return Ok(rng.pick(bucket).clone());
            }
        }
        for _ in 0..self.max_attempts {
            let candidate = self.phonology.make_syllable(rng)?;
            if collides(&self.morphemes, &candidate) {
                continue;
            }
            self.morphemes
                .entry(key.clone())
                .or_default()
                .push(candidate.clone());
            return Ok(candidate);
        }
        Err(Error::Exhausted {
            what: "morpheme",
            attempts: self.max_attempts,
        })
    }

    /// Assemble a brand-new word under `category`.
    ///
    /// Draws a syllable count from the configured range, takes all but the
    /// last syllable from the anonymous morpheme bucket, finishes with one
    /// morpheme under `category`, and joins with the syllable separator.
    pub fn make_word(&mut self, category: Option<&str>, rng: &mut LangRng) -> Result<String> {
        let count = rng.range_usize_inclusive(self.min_syllables, self.max_syllables);
        let mut syllables = Vec::with_capacity(count);
        for _ in 1..count {
            syllables.push(self.morpheme(None, rng)?);
        }
        syllables.push(self.morpheme(category, rng)?);
        Ok(syllables.join(&SYLLABLE_SEPARATOR.to_string()))
    }

    /// Fetch or create a word under `category`.
    ///
    /// Same reuse policy as `morpheme` with a novelty bias of 3
    /// (uncategorized) or 2 (categorized); new words must survive the pooled
    /// substring-uniqueness check against the whole word cache.
    pub fn word(&mut self, category: Option<&str>, rng: &mut LangRng) -> Result<String> {
        let key = category.map(String::from);
        let bias = if category.is_none() { 3 } else { 2 };
        if let Some(bucket) = self.words.get(&key) {
            if rng.range_usize_inclusive(0, bucket.len() + bias) < bucket.len() {
                return Ok(rng.pick(bucket).clone());
            }
        }
        for _ in 0..self.max_attempts {
            let candidate = self.make_word(category, rng)?;
            if collides(&self.words, &candidate) {
                continue;
            }
            self.words
                .entry(key.clone())
                .or_default()
                .push(candidate.clone());
            return Ok(candidate);
        }
        Err(Error::Exhausted {
            what: "word",
            attempts: self.max_attempts,
        })
    }

    /// Compose a new name under `category`.
    ///
    /// Half the time the name is one capitalized word; otherwise it is two
    /// distinct words (each tagged with `category` with probability 0.6),
    /// joined either directly or through the genitive particle — `region`
    /// names always join directly. One name in ten gains the definitive
    /// particle up front. The result must fall inside the configured length
    /// bounds and survive the pooled uniqueness check before it is stored.
    pub fn name(&mut self, category: &str, rng: &mut LangRng) -> Result<String> {
        let genitive = match self.genitive.clone() {
            Some(particle) => particle,
            None => self.morpheme(Some("of"), rng)?,
        };
        let definitive = match self.definitive.clone() {
            Some(particle) => particle,
            None => self.morpheme(Some("the"), rng)?,
        };

        for _ in 0..self.max_attempts {
            let mut name = if rng.chance(0.5) {
                capitalize(&self.word(Some(category), rng)?)
            } else {
                let first_tag = if rng.chance(0.6) { Some(category) } else { None };
                let second_tag = if rng.chance(0.6) { Some(category) } else { None };
                let first = capitalize(&self.word(first_tag, rng)?);
                let second = capitalize(&self.word(second_tag, rng)?);
                if first == second {
                    continue;
                }
                if category == "region" || rng.chance(0.5) {
                    [first, second].join(&self.joiner)
                } else {
                    [first, genitive.clone(), second].join(&self.joiner)
                }
            };
            if rng.chance(0.1) {
                name = capitalize(&[definitive.clone(), name].join(&self.joiner));
            }
            let name = name.trim().to_string();

            let length = name.chars().count();
            if length < self.min_name_len || length > self.max_name_len {
                continue;
            }
            if collides(&self.names, &name) {
                continue;
            }
            self.names
                .entry(Some(category.to_string()))
                .or_default()
                .push(name.clone());
            return Ok(name);
        }
        Err(Error::Exhausted {
            what: "name",
            attempts: self.max_attempts,
        })
    }
}

fn cache_bucket<'a>(cache: &'a Cache, category: Option<&str>) -> &'a [String] {
    cache
        .get(&category.map(String::from))
        .map_or(&[], Vec::as_slice)
}

/// Pooled uniqueness test: true when `candidate` is a substring of, or
/// contains, any entry in any bucket.
fn collides(cache: &Cache, candidate: &str) -> bool {
    cache
        .values()
        .flatten()
        .any(|stored| stored.contains(candidate) || candidate.contains(stored.as_str()))
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            format!("{}{}", upper, chars.as_str())
        }
    }
}
