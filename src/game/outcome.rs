use super::difficulty::Difficulty;
use super::evaluator::Guesses;
use super::word::SecretWord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Status {
    Loading,
    Playing,
    Won,
    Lost,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Won | Status::Lost)
    }
}

/// Decide the game status from the post-guess sets.
///
/// Win is tested first. A winning guess is always a hit, so it can never be
/// the miss that exhausts the budget. An empty word (failed fetch) has no
/// letters left to find, so it is won as soon as a guess is resolved.
pub fn resolve(word: &SecretWord, guesses: &Guesses, difficulty: Difficulty) -> Status {
    let all_revealed = word
        .distinct_letters()
        .iter()
        .all(|c| guesses.has_guessed(*c));

    if all_revealed {
        Status::Won
    } else if guesses.wrong_count() >= difficulty.budget() {
        Status::Lost
    } else {
        Status::Playing
    }
}
