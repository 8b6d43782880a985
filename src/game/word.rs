use std::collections::BTreeSet;
use std::fmt;

/// Uppercase a key press if it is a guessable letter.
///
/// Only ASCII letters are guesses. Both the secret word and every guess go
/// through uppercasing so comparisons are exact character matches.
pub fn normalize_letter(c: char) -> Option<char> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase())
    } else {
        None
    }
}

/// The hidden word of a session.
///
/// Stored uppercase. `Debug` only reports the length so the word never ends
/// up in logs while a game is running.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SecretWord(String);

impl SecretWord {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    /// Placeholder used when no word could be fetched.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }

    pub fn distinct_letters(&self) -> BTreeSet<char> {
        self.0.chars().collect()
    }

    /// One slot per character, `Some` when the slot may be shown.
    pub fn mask(&self, guessed: &BTreeSet<char>, reveal_all: bool) -> Vec<Option<char>> {
        self.0
            .chars()
            .map(|c| {
                if reveal_all || guessed.contains(&c) {
                    Some(c)
                } else {
                    None
                }
            })
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretWord(len={})", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_rejects_non_letters() {
        assert_eq!(normalize_letter('a'), Some('A'));
        assert_eq!(normalize_letter('Q'), Some('Q'));
        assert_eq!(normalize_letter('1'), None);
        assert_eq!(normalize_letter(' '), None);
        assert_eq!(normalize_letter('é'), None);
    }

    #[test]
    fn word_is_uppercased() {
        let word = SecretWord::new(" kitten ");
        assert_eq!(word.as_str(), "KITTEN");
        assert!(word.contains('T'));
        assert!(!word.contains('t'));
        assert_eq!(word.distinct_letters().len(), 5);
    }

    #[test]
    fn mask_reveals_every_occurrence() {
        let word = SecretWord::new("LEVEL");
        let guessed: BTreeSet<char> = ['E'].into_iter().collect();
        assert_eq!(
            word.mask(&guessed, false),
            vec![None, Some('E'), None, Some('E'), None]
        );
        assert!(word.mask(&guessed, true).iter().all(Option::is_some));
    }

    #[test]
    fn debug_hides_the_word() {
        let word = SecretWord::new("secret");
        assert_eq!(format!("{word:?}"), "SecretWord(len=6)");
    }
}
