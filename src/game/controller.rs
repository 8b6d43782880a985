use std::collections::BTreeSet;
use std::fmt;

use log::{debug, info, warn};

use super::difficulty::{Difficulty, FigureStyle};
use super::evaluator::{evaluate, Guesses, IgnoreReason, Verdict};
use super::figure::{parts_to_draw, Part};
use super::outcome::{resolve, Status};
use super::word::{normalize_letter, SecretWord};
use crate::word_source::{WordData, WordSource, WordSourceError};

pub const MIN_WORD_LENGTH: usize = 3;
pub const MAX_WORD_LENGTH: usize = 20;
pub const DEFAULT_WORD_LENGTH: usize = 5;

pub fn is_valid_word_length(n: usize) -> bool {
    (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&n)
}

/// Player-facing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub figure_style: FigureStyle,
    word_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            figure_style: FigureStyle::default(),
            word_length: DEFAULT_WORD_LENGTH,
        }
    }
}

impl Settings {
    pub fn new(difficulty: Difficulty, figure_style: FigureStyle) -> Self {
        Self {
            difficulty,
            figure_style,
            word_length: DEFAULT_WORD_LENGTH,
        }
    }

    /// `None` when `n` is outside 3..=20.
    pub fn with_word_length(self, n: usize) -> Option<Self> {
        is_valid_word_length(n).then_some(Self {
            word_length: n,
            ..self
        })
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }
}

/// Identity of a session. A fetched word is only accepted by the session
/// whose token it was requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionToken(u64);

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A word request the caller must run and hand back to
/// [`GameController::complete_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: SessionToken,
    pub length: usize,
}

#[derive(Debug)]
struct Session {
    token: SessionToken,
    word: SecretWord,
    definitions: Vec<String>,
    guesses: Guesses,
    status: Status,
}

impl Session {
    fn loading(token: SessionToken) -> Self {
        Self {
            token,
            word: SecretWord::empty(),
            definitions: Vec::new(),
            guesses: Guesses::default(),
            status: Status::Loading,
        }
    }
}

/// Read-only snapshot for the presentation layer.
///
/// The word and its definitions are only present once the game is over.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView<'a> {
    pub token: SessionToken,
    pub status: Status,
    pub masked_word: Vec<Option<char>>,
    pub word: Option<&'a str>,
    pub definitions: &'a [String],
    pub guessed: &'a BTreeSet<char>,
    pub incorrect: &'a [char],
    pub budget: usize,
    pub settings: Settings,
    pub error: Option<&'a str>,
    pub parts: &'static [Part],
}

impl SessionView<'_> {
    pub fn wrong_count(&self) -> usize {
        self.incorrect.len()
    }
}

/// Owns the active session and the settings.
#[derive(Debug)]
pub struct GameController {
    settings: Settings,
    session: Session,
    last_token: u64,
    error: Option<String>,
}

impl GameController {
    /// Starts in `Loading`; call [`start_new_game`](Self::start_new_game) to
    /// request the first word.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            session: Session::loading(SessionToken(0)),
            last_token: 0,
            error: None,
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn status(&self) -> Status {
        self.session.status
    }

    pub fn token(&self) -> SessionToken {
        self.session.token
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Throw away the current session and ask for a new word.
    pub fn start_new_game(&mut self) -> FetchRequest {
        self.last_token += 1;
        let token = SessionToken(self.last_token);
        self.session = Session::loading(token);
        self.error = None;
        info!(
            "Starting game {} (length {}, {})",
            token, self.settings.word_length, self.settings.difficulty
        );
        FetchRequest {
            token,
            length: self.settings.word_length,
        }
    }

    /// Install the outcome of a word request.
    ///
    /// Returns false and changes nothing when the request belongs to a
    /// session that has since been replaced. A failed request still starts
    /// the game, with an empty word and the error message on display.
    pub fn complete_fetch(
        &mut self,
        token: SessionToken,
        result: Result<WordData, WordSourceError>,
    ) -> bool {
        if token != self.session.token || self.session.status != Status::Loading {
            debug!(
                "Discarding word for {} (current session {})",
                token, self.session.token
            );
            return false;
        }

        match result {
            Ok(data) => {
                debug!("Game {} got a {}-letter word", token, data.length);
                self.session.word = SecretWord::new(&data.word);
                self.session.definitions = data.definitions;
            }
            Err(err) => {
                warn!("Word fetch for {} failed: {}", token, err);
                self.session.word = SecretWord::empty();
                self.session.definitions.clear();
                self.error = Some(err.to_string());
            }
        }
        self.session.guesses = Guesses::default();
        self.session.status = Status::Playing;
        true
    }

    /// Start a game and fetch its word on the calling thread.
    pub fn start_new_game_with(&mut self, source: &dyn WordSource) -> bool {
        let request = self.start_new_game();
        let result = source.fetch_word(request.length);
        self.complete_fetch(request.token, result)
    }

    /// Guess a letter. Keys that are not ASCII letters are ignored.
    pub fn submit_guess(&mut self, key: char) -> Verdict {
        let Some(letter) = normalize_letter(key) else {
            return Verdict::Ignored(IgnoreReason::NotALetter);
        };

        let (guesses, verdict) = evaluate(
            &self.session.word,
            &self.session.guesses,
            self.session.status,
            letter,
        );
        if let Verdict::Ignored(_) = verdict {
            return verdict;
        }

        let status = resolve(&self.session.word, &guesses, self.settings.difficulty);
        self.session.guesses = guesses;
        self.session.status = status;

        if status.is_terminal() {
            info!(
                "Game {} {} after {} wrong guesses",
                self.session.token,
                status,
                self.session.guesses.wrong_count()
            );
        }
        verdict
    }

    /// Takes effect at the next evaluated guess; the game keeps going.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
    }

    pub fn set_figure_style(&mut self, style: FigureStyle) {
        self.settings.figure_style = style;
    }

    /// Out-of-range lengths are ignored and reported as `false`.
    pub fn set_word_length(&mut self, n: usize) -> bool {
        match self.settings.with_word_length(n) {
            Some(settings) => {
                self.settings = settings;
                true
            }
            None => {
                debug!("Ignoring word length {}", n);
                false
            }
        }
    }

    pub fn view(&self) -> SessionView<'_> {
        let session = &self.session;
        let over = session.status.is_terminal();
        SessionView {
            token: session.token,
            status: session.status,
            masked_word: session.word.mask(session.guesses.guessed(), over),
            word: over.then(|| session.word.as_str()),
            definitions: if over { &session.definitions } else { &[] },
            guessed: session.guesses.guessed(),
            incorrect: session.guesses.incorrect(),
            budget: self.settings.difficulty.budget(),
            settings: self.settings,
            error: self.error.as_deref(),
            parts: parts_to_draw(
                session.guesses.wrong_count(),
                self.settings.difficulty,
                self.settings.figure_style,
            ),
        }
    }
}
