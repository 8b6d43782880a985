use std::collections::BTreeSet;

use super::outcome::Status;
use super::word::SecretWord;

/// Letters guessed so far in a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Guesses {
    guessed: BTreeSet<char>,
    incorrect: Vec<char>,
}

impl Guesses {
    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Misses in the order they were made.
    pub fn incorrect(&self) -> &[char] {
        &self.incorrect
    }

    pub fn wrong_count(&self) -> usize {
        self.incorrect.len()
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NotPlaying,
    AlreadyGuessed,
    NotALetter,
}

/// What a single guess did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Hit,
    Miss,
    Ignored(IgnoreReason),
}

/// Apply one already-normalized letter to the guess sets.
///
/// Guessing while the game is not running, or guessing a letter twice, is a
/// no-op that hands back the sets unchanged.
pub fn evaluate(
    word: &SecretWord,
    guesses: &Guesses,
    status: Status,
    letter: char,
) -> (Guesses, Verdict) {
    if status != Status::Playing {
        return (guesses.clone(), Verdict::Ignored(IgnoreReason::NotPlaying));
    }
    if guesses.has_guessed(letter) {
        return (
            guesses.clone(),
            Verdict::Ignored(IgnoreReason::AlreadyGuessed),
        );
    }

    let mut next = guesses.clone();
    next.guessed.insert(letter);

    if word.contains(letter) {
        (next, Verdict::Hit)
    } else {
        next.incorrect.push(letter);
        (next, Verdict::Miss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn play(word: &SecretWord, letters: &str) -> Guesses {
        letters.chars().fold(Guesses::default(), |g, c| {
            evaluate(word, &g, Status::Playing, c).0
        })
    }

    #[test]
    fn hit_only_grows_guessed() {
        let word = SecretWord::new("CAT");
        let (next, verdict) = evaluate(&word, &Guesses::default(), Status::Playing, 'A');
        assert_eq!(verdict, Verdict::Hit);
        assert!(next.has_guessed('A'));
        assert!(next.incorrect().is_empty());
    }

    #[test]
    fn miss_grows_both_sets() {
        let word = SecretWord::new("CAT");
        let (next, verdict) = evaluate(&word, &Guesses::default(), Status::Playing, 'Z');
        assert_eq!(verdict, Verdict::Miss);
        assert!(next.has_guessed('Z'));
        assert_eq!(next.incorrect(), &['Z']);
    }

    #[test]
    fn misses_keep_guess_order() {
        let word = SecretWord::new("CAT");
        let guesses = play(&word, "ZQCM");
        assert_eq!(guesses.incorrect(), &['Z', 'Q', 'M']);
        assert_eq!(guesses.guessed().len(), 4);
    }

    #[test]
    fn repeated_letter_is_a_no_op() {
        let word = SecretWord::new("CAT");
        let guesses = play(&word, "ZC");
        for letter in ['Z', 'C'] {
            let (next, verdict) = evaluate(&word, &guesses, Status::Playing, letter);
            assert_eq!(next, guesses);
            assert_matches!(verdict, Verdict::Ignored(IgnoreReason::AlreadyGuessed));
        }
    }

    #[test]
    fn not_playing_is_a_no_op() {
        let word = SecretWord::new("CAT");
        for status in [Status::Loading, Status::Won, Status::Lost] {
            let (next, verdict) = evaluate(&word, &Guesses::default(), status, 'C');
            assert_eq!(next, Guesses::default());
            assert_matches!(verdict, Verdict::Ignored(IgnoreReason::NotPlaying));
        }
    }

    #[test]
    fn incorrect_is_subset_of_guessed_and_absent_from_word() {
        let word = SecretWord::new("BANANA");
        let guesses = play(&word, "QBXNZAY");
        for c in guesses.incorrect() {
            assert!(guesses.has_guessed(*c));
            assert!(!word.contains(*c));
        }
    }
}
