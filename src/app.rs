use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::{Difficulty, FetchRequest, FigureStyle, GameController, SessionToken, Settings};
use crate::word_source::{WordData, WordSourceError};

pub const SOURCE_URL: &str = "https://github.com/code-joshua/hangman";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Game,
    License,
}

/// What the main loop has to do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    None,
    Quit,
    Fetch(FetchRequest),
    OpenSource,
}

#[derive(Debug)]
pub struct App {
    pub controller: GameController,
    pub screen: Screen,
    pub spinner_frame: usize,
    pub license_scroll: u16,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            controller: GameController::new(settings),
            screen: Screen::Game,
            spinner_frame: 0,
            license_scroll: 0,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> AppAction {
        if key.kind != KeyEventKind::Press {
            return AppAction::None;
        }
        // ctrl+c to quit
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppAction::Quit;
        }

        match self.screen {
            Screen::License => {
                self.on_license_key(key);
                AppAction::None
            }
            Screen::Game => self.on_game_key(key),
        }
    }

    fn on_license_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                self.screen = Screen::Game;
                self.license_scroll = 0;
            }
            KeyCode::Up => self.license_scroll = self.license_scroll.saturating_sub(1),
            KeyCode::Down => self.license_scroll = self.license_scroll.saturating_add(1),
            KeyCode::PageUp => self.license_scroll = self.license_scroll.saturating_sub(10),
            KeyCode::PageDown => self.license_scroll = self.license_scroll.saturating_add(10),
            KeyCode::Home => self.license_scroll = 0,
            _ => {}
        }
    }

    fn on_game_key(&mut self, key: KeyEvent) -> AppAction {
        let ctrl_or_alt = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => AppAction::Quit,
            KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                AppAction::OpenSource
            }
            KeyCode::Enter => AppAction::Fetch(self.controller.start_new_game()),
            KeyCode::Left | KeyCode::Char('-') => self.change_word_length(-1),
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.change_word_length(1)
            }
            KeyCode::Char('1') => {
                self.controller.set_difficulty(Difficulty::Easy);
                AppAction::None
            }
            KeyCode::Char('2') => {
                self.controller.set_difficulty(Difficulty::Hard);
                AppAction::None
            }
            KeyCode::Char('3') => {
                self.controller.set_figure_style(FigureStyle::Person);
                AppAction::None
            }
            KeyCode::Char('4') => {
                self.controller.set_figure_style(FigureStyle::Spider);
                AppAction::None
            }
            KeyCode::Char('?') => {
                self.screen = Screen::License;
                AppAction::None
            }
            KeyCode::Char(c) if !ctrl_or_alt => {
                self.controller.submit_guess(c);
                AppAction::None
            }
            _ => AppAction::None,
        }
    }

    /// A new length needs a new word, so an accepted change starts a game.
    fn change_word_length(&mut self, delta: isize) -> AppAction {
        let current = self.controller.settings().word_length();
        match current.checked_add_signed(delta) {
            Some(next) if self.controller.set_word_length(next) => {
                AppAction::Fetch(self.controller.start_new_game())
            }
            _ => AppAction::None,
        }
    }

    /// Returns true when the screen needs redrawing.
    pub fn on_tick(&mut self) -> bool {
        if self.controller.status() == crate::game::Status::Loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
            true
        } else {
            false
        }
    }

    pub fn on_word_fetched(
        &mut self,
        token: SessionToken,
        result: Result<WordData, WordSourceError>,
    ) -> bool {
        self.controller.complete_fetch(token, result)
    }
}
