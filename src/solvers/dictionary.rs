//! Word list used by the anagram solver.
//!
//! The built-in list is frozen at first use. Lookups go through a per-length
//! index whose buckets keep the list's enumeration order, so "first match"
//! means the same thing whether or not the index is used.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static BUILTIN: Lazy<Dictionary> = Lazy::new(|| Dictionary::from_words(BUILTIN_WORDS.iter().copied()));

/// Order matters: on ambiguous scrambles the earliest entry wins. The list
/// intentionally keeps its duplicate (`FREEDOM`).
const BUILTIN_WORDS: &[&str] = &[
    "CRYSTAL", "HARMONY", "MYSTERY", "JOURNEY", "BALANCE", "PERFECT", "WEATHER", "RAINBOW", "DIAMOND", "SCIENCE",
    "HISTORY", "FANTASY", "GALLERY", "KITCHEN", "ORGANIC", "PREMIUM", "REALITY", "THERAPY", "VICTORY", "WESTERN",
    "ABILITY", "ANCIENT", "BILLION", "CABINET", "CAPTAIN", "CENTRAL", "CHAPTER", "CLIMATE", "COLLEGE", "COMFORT",
    "COMPANY", "CONCEPT", "CONDUCT", "CONFIRM", "CONNECT", "CONTENT", "CONTEXT", "CONTROL", "CONVERT", "CORRECT",
    "COUNTRY", "COURAGE", "CULTURE", "CURRENT", "DECIMAL", "DEFAULT", "DEFENSE", "DELIVER", "DIGITAL", "DISPLAY",
    "EMOTION", "EVENING", "EXAMINE", "EXAMPLE", "EXCITED", "EXPLAIN", "EXPRESS", "EXTREME", "FASHION", "FEATURE",
    "FICTION", "FINANCE", "FOREIGN", "FORMULA", "FORWARD", "FREEDOM", "GENUINE", "GRAPHIC", "HABITAT", "HEALING",
    "HEALTHY", "HELPFUL", "HOLIDAY", "IMAGINE", "IMPROVE", "INITIAL", "INSTALL", "JUSTICE", "KINGDOM", "LEADING",
    "LEATHER", "LIBRARY", "LIMITED", "MACHINE", "MASSIVE", "MEETING", "MINERAL", "MISSING", "MONSTER", "MORNING",
    "MUSICAL", "NATURAL", "NETWORK", "NEUTRAL", "NOTHING", "NUCLEAR", "OPINION", "OUTLINE", "OUTSIDE", "OVERALL",
    "PACKAGE", "PARTIAL", "PARTNER", "PASSAGE", "PASSIVE", "PATIENT", "PATTERN", "PAYMENT", "PENALTY", "PENSION",
    "PLASTIC", "POINTED", "POPULAR", "PORTION", "PRIMARY", "PRINTER", "PRIVATE", "PROBLEM", "PRODUCT", "PROGRAM",
    "PROJECT", "PROMISE", "PROTECT", "PROTEIN", "PROTEST", "PURPOSE", "QUALIFY", "QUARTER", "RADICAL", "RECOVER",
    "REGULAR", "RELATED", "RELEASE", "REMOVAL", "REPLACE", "REQUIRE", "RESERVE", "RESOLVE", "RESPECT", "RESTORE",
    "ROUTINE", "RUNNING", "SECTION", "SHELTER", "SIMILAR", "SOCIETY", "SOMEONE", "SPECIAL", "STATION", "STOMACH",
    "STORAGE", "STRANGE", "STUDENT", "SUBJECT", "SUMMARY", "SUPPORT", "SURFACE", "SURGERY", "SURVIVE", "TEACHER",
    "THEATRE", "THERMAL", "THOUGHT", "TONIGHT", "TOURISM", "TROUBLE", "TURNING", "TYPICAL", "UPDATED", "UTILITY",
    "VARIETY", "VEHICLE", "VENTURE", "VERSION", "VILLAGE", "VIOLENT", "VISIBLE", "WARNING", "WARRIOR", "WEBSITE",
    "WEDDING", "WEEKEND", "WELCOME", "WELFARE", "WILLING", "WINNING", "WITHOUT", "WITNESS", "WORKING", "WRITING",
    "YOUNGER", "THUNDER", "HUNDRED", "HUNTING", "HUSBAND", "LECTURE", "MARTIAL", "MILLION", "OBSCURE", "PREDICT",
    "QUANTUM", "REBUILD", "SCHOLAR", "WORSHIP", "ZEALOUS", "BLANKET", "BROWSER", "CENTURY", "CHICKEN", "COMPLEX",
    "COUNTER", "DOLPHIN", "ENDLESS", "FIFTEEN", "FREEDOM", "GORILLA",
];

/// An ordered, read-only word list indexed by character count.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    /// Character count -> indices into `words`, ascending.
    by_len: HashMap<usize, Vec<usize>>,
}

impl Dictionary {
    /// The process-wide built-in word list.
    pub fn builtin() -> &'static Dictionary {
        &BUILTIN
    }

    /// Build a dictionary from `words`, uppercased, in the given order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words.into_iter().map(|w| w.as_ref().to_uppercase()).collect();
        let mut by_len: HashMap<usize, Vec<usize>> = HashMap::new();
        for (idx, word) in words.iter().enumerate() {
            by_len.entry(word.chars().count()).or_default().push(idx);
        }
        Dictionary { words, by_len }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in enumeration order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words with exactly `len` characters, in enumeration order.
    pub fn words_of_len(&self, len: usize) -> impl Iterator<Item = &str> {
        self.by_len.get(&len).into_iter().flatten().map(|&idx| self.words[idx].as_str())
    }
}
