// Bundled parameter tables: phoneme sets, syllable structures, restriction
// sets, spelling tables, and joiners that produce decent-looking naming
// languages out of the box.
//
// These are plain data — every table can be swapped for caller-supplied
// values, and the engine never assumes it is running on a bundled preset.
// `random_language` assembles a complete generator from randomly drawn
// presets.

use glossogen_prng::LangRng;

use crate::error::Result;
use crate::language::Language;
use crate::orthography::SpellingOrthography;
use crate::phonemes::{PhonemeInventory, PhonemeSource};
use crate::phonology::Phonology;

/// Named consonant sets, one symbol per character.
pub const CONSONANT_SETS: &[(&str, &str)] = &[
    ("Minimal", "ptkmnls"),
    ("English-ish", "ptkbdgmnlrsʃzʒʧ"),
    ("Pirahã (very simple)", "ptkmnh"),
    ("Hawaiian-ish", "hklmnpwʔ"),
    ("Greenlandic-ish", "ptkqvsgrmnŋlj"),
    ("Arabic-ish", "tksʃdbqɣxmnlrwj"),
    ("Arabic-lite", "tkdgmnsʃ"),
    ("English-lite", "ptkbdgmnszʒʧhjw"),
    ("Japanese-ish", "ksztdnhbpmyrw"),
];

/// Named sibilant sets.
pub const SIBILANT_SETS: &[(&str, &str)] = &[
    ("Just s", "s"),
    ("s ʃ", "sʃ"),
    ("s ʃ f", "sʃf"),
];

/// Named liquid sets.
pub const LIQUID_SETS: &[(&str, &str)] = &[
    ("r l", "rl"),
    ("Just r", "r"),
    ("Just l", "l"),
    ("w j", "wj"),
    ("r l w j", "rlwj"),
];

/// Named syllable-final consonant sets.
pub const FINAL_SETS: &[(&str, &str)] = &[
    ("m n", "mn"),
    ("s k", "sk"),
    ("m n ŋ", "mnŋ"),
    ("s ʃ z ʒ", "sʃzʒ"),
    ("Just n", "n"),
];

/// Named vowel sets. Uppercase vowels are long/accented variants that the
/// vowel spelling tables render with diacritics.
pub const VOWEL_SETS: &[(&str, &str)] = &[
    ("Standard 5-vowel", "aeiou"),
    ("3-vowel a i u", "aiu"),
    ("Extra A E I", "aeiouAEI"),
    ("Extra U", "aeiouU"),
    ("5-vowel a i u A I", "aiuAI"),
    ("3-vowel e o u", "eou"),
    ("Extra A O U", "aeiouAOU"),
];

/// Syllable structure templates over the standard category tags.
pub const SYLLABLE_STRUCTURES: &[&str] = &[
    "CVC",
    "CVV?C",
    "CVVC?",
    "CVC?",
    "CV",
    "VC",
    "CVF",
    "C?VC",
    "CVF?",
    "CL?VC",
    "CL?VF",
    "S?CVC",
    "S?CVF",
    "S?CVC?",
    "C?VF",
    "C?VC?",
    "C?VF?",
    "C?L?VC",
    "VC",
    "CVL?C?",
    "C?VL?C",
    "C?VLC?",
];

/// Named restriction sets. `\C`-style placeholders expand against whatever
/// inventory the set is compiled with.
pub const RESTRICTION_SETS: &[(&str, &[&str])] = &[
    ("None", &[]),
    ("Double sounds", &[r"(.)\1"]),
    (
        "Doubles and hard clusters",
        &[r"[sʃf][sʃ]", r"(ʃq)", r"(.)\1", r"(rl|lr|rw|wr|ww)"],
    ),
];

/// Fallback spellings applied when no overlay claims a phoneme.
pub const DEFAULT_SPELLINGS: &[(char, &str)] = &[
    ('ʃ', "sh"),
    ('ʒ', "zh"),
    ('ʧ', "ch"),
    ('ʤ', "j"),
    ('ŋ', "ng"),
    ('j', "y"),
    ('x', "kh"),
    ('ɣ', "gh"),
    ('ʔ', "‘"),
    ('A', "á"),
    ('E', "é"),
    ('I', "í"),
    ('O', "ó"),
    ('U', "ú"),
];

/// Named consonant spelling overlays.
pub const CONSONANT_SPELLINGS: &[(&str, &[(char, &str)])] = &[
    ("Default", &[]),
    (
        "Slavic",
        &[('ʃ', "š"), ('ʒ', "ž"), ('ʧ', "č"), ('ʤ', "ǧ"), ('j', "j")],
    ),
    (
        "German",
        &[
            ('ʃ', "sch"),
            ('ʒ', "zh"),
            ('ʧ', "tsch"),
            ('ʤ', "dz"),
            ('j', "j"),
            ('x', "ch"),
        ],
    ),
    (
        "French",
        &[('ʃ', "ch"), ('ʒ', "j"), ('ʧ', "tch"), ('ʤ', "dj"), ('x', "kh")],
    ),
    ("Chinese (pinyin)", &[('ʃ', "x"), ('ʧ', "q"), ('ʤ', "j")]),
    ("Japanese (romanji)", &[('ʃ', "sh")]),
];

/// Named vowel spelling overlays for the uppercase vowel variants.
pub const VOWEL_SPELLINGS: &[(&str, &[(char, &str)])] = &[
    ("Ácutes", &[]),
    (
        "Ümlauts",
        &[('A', "ä"), ('E', "ë"), ('I', "ï"), ('O', "ö"), ('U', "ü")],
    ),
    (
        "Welsh",
        &[('A', "â"), ('E', "ê"), ('I', "y"), ('O', "ô"), ('U', "w")],
    ),
    (
        "Diphthongs",
        &[('A', "au"), ('E', "ei"), ('I', "ie"), ('O', "ou"), ('U', "oo")],
    ),
    (
        "Doubles",
        &[('A', "aa"), ('E', "ee"), ('I', "ii"), ('O', "oo"), ('U', "uu")],
    ),
];

/// Word joiners for composed names. Space appears three times so it is drawn
/// three times as often as the hyphen.
pub const JOINERS: &[&str] = &[" ", " ", " ", "-"];

/// Look a value up by name in one of the preset tables.
pub fn named<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    table
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, value)| *value)
}

/// The bundled default spelling for `phoneme`, if any.
pub fn default_spelling(phoneme: char) -> Option<&'static str> {
    DEFAULT_SPELLINGS
        .iter()
        .find(|(entry, _)| *entry == phoneme)
        .map(|(_, spelling)| *spelling)
}

/// The starter inventory: minimal consonants, standard five vowels, `s`,
/// `m n` finals, and `r l` liquids under the standard tags.
pub fn standard_inventory() -> PhonemeInventory {
    let mut inventory = PhonemeInventory::new();
    let sets = [
        ('C', named(CONSONANT_SETS, "Minimal")),
        ('V', named(VOWEL_SETS, "Standard 5-vowel")),
        ('S', named(SIBILANT_SETS, "Just s")),
        ('F', named(FINAL_SETS, "m n")),
        ('L', named(LIQUID_SETS, "r l")),
    ];
    for (tag, symbols) in sets {
        let symbols = symbols.expect("bundled phoneme set is present");
        inventory
            .define(tag, PhonemeSource::uniform(symbols))
            .expect("bundled phoneme set is valid");
    }
    inventory
}

/// Assemble a language from randomly drawn presets.
///
/// Draws one set per category, a random structure, and random spelling
/// overlays; always applies the "Doubles and hard clusters" restrictions.
/// Short structures get an extra minimum syllable so words do not collapse
/// into near-identical fragments.
pub fn random_language(rng: &mut LangRng) -> Result<Language> {
    let mut phonemes = PhonemeInventory::new();
    phonemes.define('C', PhonemeSource::uniform(rng.pick(CONSONANT_SETS).1))?;
    phonemes.define('V', PhonemeSource::uniform(rng.pick(VOWEL_SETS).1))?;
    phonemes.define('S', PhonemeSource::uniform(rng.pick(SIBILANT_SETS).1))?;
    phonemes.define('F', PhonemeSource::uniform(rng.pick(FINAL_SETS).1))?;
    phonemes.define('L', PhonemeSource::uniform(rng.pick(LIQUID_SETS).1))?;

    let structure = *rng.pick(SYLLABLE_STRUCTURES);
    let restrictions =
        named(RESTRICTION_SETS, "Doubles and hard clusters").expect("bundled restriction set");
    let phonology = Phonology::new(phonemes, structure, restrictions)?;

    let orthography = SpellingOrthography::new(
        rng.pick(CONSONANT_SPELLINGS).1,
        rng.pick(VOWEL_SPELLINGS).1,
    );

    let mut min_syllables = rng.range_usize_inclusive(1, 3);
    if phonology.structure().steps().len() < 3 {
        min_syllables += 1;
    }
    let max_syllables = min_syllables + rng.range_usize_inclusive(1, 7);
    let joiner = *rng.pick(JOINERS);

    Ok(Language::new(phonology)
        .with_syllables(min_syllables, max_syllables)
        .with_joiner(joiner)
        .with_orthography(orthography))
}
