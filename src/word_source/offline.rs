use std::collections::HashMap;
use std::sync::Mutex;

use log::{debug, info, warn};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use rustrict::{CensorStr, Type};
use serde::Deserialize;

use super::{dedup_definitions, WordData, WordSource, WordSourceError};

const DICTIONARY: &str = include_str!("words.json");
pub const MAX_ATTEMPTS: u32 = 1000;

const DISTRESSING_TERMS: &[&str] = &[
    "malformed", "fetus", "foetus", "corpse", "cadaver", "death", "dead", "dying", "tumor",
    "tumour", "cancer", "disease", "deformity", "deformed", "murder", "suicide", "killing",
    "slaughter", "torture", "rape", "abuse", "violent", "blood", "bleeding", "wound", "injury",
    "mutilate", "dismember", "excrement", "feces", "faeces", "urine", "vomit", "pus",
    "infection", "infected",
];

const DISTRESSING_DOMAINS: &[&str] = &[
    "(medicine)", "(pathology)", "(surgery)", "(anatomy)", "(psychiatry)", "(military)",
    "(warfare)", "(slang)", "(vulgar)", "(offensive)",
];

#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub definitions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Dictionary {
    #[allow(dead_code)]
    name: String,
    words: Vec<DictionaryEntry>,
}

/// Why a dictionary entry was not handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Rejection {
    IncorrectLength,
    InvalidCharacters,
    ProfanityWord,
    NoDefinition,
    ProfanityDefinition,
    OffensiveContent,
    DistressingContent,
    DistressingDomain,
}

fn is_profane(text: &str) -> bool {
    text.is(Type::PROFANE & Type::MODERATE_OR_HIGHER)
}

/// Run an entry through the content filters, in order.
pub fn check_entry(entry: &DictionaryEntry, length: usize) -> Result<(), Rejection> {
    let word = entry.word.to_lowercase();
    if word.chars().count() != length {
        return Err(Rejection::IncorrectLength);
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Rejection::InvalidCharacters);
    }
    if is_profane(&word) {
        return Err(Rejection::ProfanityWord);
    }

    let Some(first) = entry.definitions.iter().find(|d| !d.trim().is_empty()) else {
        return Err(Rejection::NoDefinition);
    };
    let definition = first.to_lowercase();

    if is_profane(&definition) {
        return Err(Rejection::ProfanityDefinition);
    }

    if definition.contains("offensive") {
        return Err(Rejection::OffensiveContent);
    }
    if DISTRESSING_TERMS.iter().any(|t| definition.contains(t)) {
        return Err(Rejection::DistressingContent);
    }
    if DISTRESSING_DOMAINS.iter().any(|d| definition.contains(d)) {
        return Err(Rejection::DistressingDomain);
    }
    Ok(())
}

/// Word source backed by the bundled dictionary. Needs no network.
#[derive(Debug)]
pub struct OfflineWordSource {
    entries: Vec<DictionaryEntry>,
    rng: Mutex<StdRng>,
}

impl OfflineWordSource {
    pub fn new() -> Result<Self, WordSourceError> {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic selection, for tests.
    pub fn with_seed(seed: u64) -> Result<Self, WordSourceError> {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Result<Self, WordSourceError> {
        let dictionary: Dictionary = serde_json::from_str(DICTIONARY)?;
        Ok(Self::from_entries(dictionary.words, rng))
    }

    pub fn from_entries(entries: Vec<DictionaryEntry>, rng: StdRng) -> Self {
        Self {
            entries,
            rng: Mutex::new(rng),
        }
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }
}

impl WordSource for OfflineWordSource {
    fn fetch_word(&self, length: usize) -> Result<WordData, WordSourceError> {
        let candidates: Vec<&DictionaryEntry> = self
            .entries
            .iter()
            .filter(|e| e.word.chars().count() == length)
            .collect();
        if candidates.is_empty() {
            warn!("No offline words of length {}", length);
            return Err(WordSourceError::NoWords { length });
        }
        debug!("Found {} offline words of length {}", candidates.len(), length);

        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let mut filter_stats: HashMap<Rejection, u32> = HashMap::new();

        for attempt in 1..=MAX_ATTEMPTS {
            let Some(entry) = candidates.choose(&mut *rng) else {
                break;
            };
            match check_entry(entry, length) {
                Ok(()) => {
                    info!("Picked offline word after {} attempts", attempt);
                    debug!("Filter statistics: {:?}", filter_stats);
                    return Ok(WordData {
                        word: entry.word.to_uppercase(),
                        definitions: dedup_definitions(entry.definitions.iter().cloned()),
                        length,
                        attempts: attempt,
                    });
                }
                Err(reason) => *filter_stats.entry(reason).or_insert(0) += 1,
            }
        }

        warn!(
            "Failed to find valid word after {} attempts: {:?}",
            MAX_ATTEMPTS, filter_stats
        );
        Err(WordSourceError::Exhausted {
            attempts: MAX_ATTEMPTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn entry(word: &str, definition: &str) -> DictionaryEntry {
        DictionaryEntry {
            word: word.to_string(),
            definitions: vec![definition.to_string()],
        }
    }

    #[test]
    fn bundled_dictionary_covers_every_length() {
        let source = OfflineWordSource::with_seed(7).unwrap();
        for length in 3..=20 {
            let data = source.fetch_word(length).unwrap();
            assert_eq!(data.word.chars().count(), length);
            assert_eq!(data.length, length);
            assert!(data.word.chars().all(|c| c.is_ascii_uppercase()));
            assert!(!data.definitions.is_empty());
            assert!(data.attempts >= 1);
        }
    }

    #[test]
    fn same_seed_same_word() {
        let a = OfflineWordSource::with_seed(42).unwrap();
        let b = OfflineWordSource::with_seed(42).unwrap();
        assert_eq!(a.fetch_word(5).unwrap(), b.fetch_word(5).unwrap());
    }

    #[test]
    fn filters_in_order() {
        assert_eq!(check_entry(&entry("elephant", "five-toed pachyderm"), 8), Ok(()));
        assert_eq!(
            check_entry(&entry("cat", "feline"), 5),
            Err(Rejection::IncorrectLength)
        );
        assert_eq!(
            check_entry(&entry("test_word", "x"), 9),
            Err(Rejection::InvalidCharacters)
        );
        assert_eq!(
            check_entry(&entry("test-word", "x"), 9),
            Err(Rejection::InvalidCharacters)
        );
        assert_eq!(
            check_entry(&entry("shit", "x"), 4),
            Err(Rejection::ProfanityWord)
        );
        // The word is checked before the definition is looked at.
        assert_eq!(
            check_entry(&entry("shit", "  "), 4),
            Err(Rejection::ProfanityWord)
        );
        assert_eq!(
            check_entry(&entry("blank", "  "), 5),
            Err(Rejection::NoDefinition)
        );
        assert_eq!(
            check_entry(&entry("comet", "a shit load of ice and dust"), 5),
            Err(Rejection::ProfanityDefinition)
        );
        // Profanity outranks the later content checks.
        assert_eq!(
            check_entry(&entry("comet", "offensive shit"), 5),
            Err(Rejection::ProfanityDefinition)
        );
        assert_eq!(
            check_entry(&entry("slur", "an offensive term"), 4),
            Err(Rejection::OffensiveContent)
        );
        assert_eq!(
            check_entry(&entry("wound", "an injury to living tissue"), 5),
            Err(Rejection::DistressingContent)
        );
        assert_eq!(
            check_entry(&entry("grub", "(slang) a meal"), 4),
            Err(Rejection::DistressingDomain)
        );
    }

    #[test]
    fn never_hands_out_filtered_words() {
        let source = OfflineWordSource::with_seed(1).unwrap();
        for _ in 0..50 {
            assert_ne!(source.fetch_word(5).unwrap().word, "WOUND");
            assert_ne!(source.fetch_word(4).unwrap().word, "GRUB");
            assert_ne!(source.fetch_word(9).unwrap().word, "ICE-CREAM");
        }
    }

    #[test]
    fn no_candidates() {
        let source = OfflineWordSource::from_entries(
            vec![entry("cat", "feline")],
            StdRng::seed_from_u64(0),
        );
        assert_matches!(
            source.fetch_word(12),
            Err(WordSourceError::NoWords { length: 12 })
        );
    }

    #[test]
    fn exhausted_when_every_candidate_is_rejected() {
        let source = OfflineWordSource::from_entries(
            vec![entry("grub", "(slang) a meal")],
            StdRng::seed_from_u64(0),
        );
        assert_matches!(
            source.fetch_word(4),
            Err(WordSourceError::Exhausted { attempts: MAX_ATTEMPTS })
        );
    }
}
