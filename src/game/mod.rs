//! Hangman rules: guess evaluation, win/loss resolution, figure reveal, and
//! the controller that ties one session together.

pub mod controller;
pub mod difficulty;
pub mod evaluator;
pub mod figure;
pub mod outcome;
pub mod word;

pub use controller::{
    FetchRequest, GameController, SessionToken, SessionView, Settings, DEFAULT_WORD_LENGTH,
    MAX_WORD_LENGTH, MIN_WORD_LENGTH,
};
pub use difficulty::{Difficulty, FigureStyle};
pub use evaluator::{evaluate, Guesses, IgnoreReason, Verdict};
pub use figure::{parts_to_draw, Part, PersonPart, Side, SpiderPart};
pub use outcome::{resolve, Status};
pub use word::{normalize_letter, SecretWord};
