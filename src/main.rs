use clap::{builder::RangedU64ValueParser, error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use hangman::{
    app::SOURCE_URL,
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    game::{Difficulty, FigureStyle},
    logging,
    runtime::{spawn_fetch, CrosstermEventSource, FixedTicker, GameEvent, Runner},
    word_source::{HttpWordSource, OfflineWordSource, WordSource, WordSourceError},
    App, AppAction,
};
use log::{info, warn};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    sync::Arc,
    time::Duration,
};
use webbrowser::Browser;

const TICK_RATE_MS: u64 = 100;

/// guess the word before the figure is complete
#[derive(Parser, Debug, Clone)]
#[clap(version, about)]
pub struct Cli {
    /// number of letters in the secret word (3-20)
    #[clap(short = 'l', long, value_parser = RangedU64ValueParser::<usize>::new().range(3..=20))]
    length: Option<usize>,

    /// wrong-guess budget: easy allows 10, hard allows 6
    #[clap(short = 'd', long, value_enum)]
    difficulty: Option<Difficulty>,

    /// figure drawn for wrong guesses
    #[clap(short = 'f', long, value_enum)]
    figure: Option<FigureStyle>,

    /// base address of the word service
    #[clap(long, env = "HANGMAN_API_URL")]
    api_url: Option<String>,

    /// pick words from the bundled dictionary instead of the word service
    #[clap(long)]
    offline: bool,

    /// word service request timeout in seconds
    #[clap(long)]
    timeout: Option<u64>,

    /// config file to use instead of the default location
    #[clap(long)]
    config: Option<PathBuf>,

    /// write the resolved settings back to the config file
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }

    /// Flags win over whatever the config file says.
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(length) = self.length {
            cfg.word_length = length;
        }
        if let Some(difficulty) = self.difficulty {
            cfg.difficulty = difficulty;
        }
        if let Some(figure) = self.figure {
            cfg.figure_style = figure;
        }
        if let Some(url) = &self.api_url {
            cfg.api_url = url.clone();
        }
        if self.offline {
            cfg.offline = true;
        }
        if let Some(secs) = self.timeout {
            cfg.request_timeout_secs = secs;
        }
        cfg
    }
}

fn word_source(cfg: &Config) -> Result<Arc<dyn WordSource>, WordSourceError> {
    if cfg.offline {
        info!("Using the bundled dictionary");
        Ok(Arc::new(OfflineWordSource::new()?))
    } else {
        info!("Using word service at {}", cfg.api_url);
        Ok(Arc::new(HttpWordSource::new(
            &cfg.api_url,
            Duration::from_secs(cfg.request_timeout_secs),
        )?))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(path) = AppDirs::log_path() {
        // Still on the normal screen, so stderr is visible here.
        if let Err(e) = logging::init(&path) {
            eprintln!("logging disabled, cannot open {}: {}", path.display(), e);
        }
    }

    let store = cli.config_store();
    let cfg = cli.apply(store.load());
    if cli.save_config {
        store.save(&cfg)?;
        info!("Saved settings to {}", store.path().display());
    }

    let source = word_source(&cfg)?;
    let mut app = App::new(cfg.settings());

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app, source);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    source: Arc<dyn WordSource>,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    let request = app.controller.start_new_game();
    spawn_fetch(Arc::clone(&source), request, runner.sender());

    loop {
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;

        // Block until something changes what is on screen.
        loop {
            match runner.step() {
                GameEvent::Key(key) => {
                    match app.on_key(key) {
                        AppAction::Quit => return Ok(()),
                        AppAction::Fetch(request) => {
                            spawn_fetch(Arc::clone(&source), request, runner.sender());
                        }
                        AppAction::OpenSource => {
                            if Browser::is_available() {
                                if let Err(e) = webbrowser::open(SOURCE_URL) {
                                    warn!("Could not open {}: {}", SOURCE_URL, e);
                                }
                            }
                        }
                        AppAction::None => {}
                    }
                    break;
                }
                GameEvent::Resize => break,
                GameEvent::Tick => {
                    if app.on_tick() {
                        break;
                    }
                }
                GameEvent::WordFetched { token, result } => {
                    if app.on_word_fetched(token, result) {
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["hangman"]);
        assert_eq!(cli.length, None);
        assert_eq!(cli.difficulty, None);
        assert_eq!(cli.figure, None);
        assert!(!cli.offline);
        assert!(!cli.save_config);
    }

    #[test]
    fn test_cli_length_range() {
        let cli = Cli::parse_from(["hangman", "-l", "3"]);
        assert_eq!(cli.length, Some(3));
        let cli = Cli::parse_from(["hangman", "--length", "20"]);
        assert_eq!(cli.length, Some(20));

        assert!(Cli::try_parse_from(["hangman", "--length", "25"]).is_err());
        assert!(Cli::try_parse_from(["hangman", "--length", "2"]).is_err());
        assert!(Cli::try_parse_from(["hangman", "--length", "five"]).is_err());
    }

    #[test]
    fn test_cli_enums() {
        let cli = Cli::parse_from(["hangman", "-d", "hard", "-f", "spider"]);
        assert_eq!(cli.difficulty, Some(Difficulty::Hard));
        assert_eq!(cli.figure, Some(FigureStyle::Spider));

        assert!(Cli::try_parse_from(["hangman", "--difficulty", "nightmare"]).is_err());
        assert!(Cli::try_parse_from(["hangman", "--figure", "robot"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "hangman",
            "--length",
            "8",
            "--difficulty",
            "hard",
            "--api-url",
            "http://words.test",
            "--offline",
            "--timeout",
            "2",
        ]);
        let cfg = cli.apply(Config {
            figure_style: FigureStyle::Spider,
            ..Config::default()
        });
        assert_eq!(cfg.word_length, 8);
        assert_eq!(cfg.difficulty, Difficulty::Hard);
        assert_eq!(cfg.figure_style, FigureStyle::Spider);
        assert_eq!(cfg.api_url, "http://words.test");
        assert!(cfg.offline);
        assert_eq!(cfg.request_timeout_secs, 2);
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let cli = Cli::parse_from(["hangman"]);
        let stored = Config {
            word_length: 11,
            offline: true,
            ..Config::default()
        };
        let cfg = cli.apply(stored.clone());
        assert_eq!(cfg.word_length, 11);
        assert!(cfg.offline);
        assert_eq!(cfg.difficulty, stored.difficulty);
    }

    #[test]
    fn test_offline_source_builds() {
        let cfg = Config {
            offline: true,
            ..Config::default()
        };
        let source = word_source(&cfg).unwrap();
        let word = source.fetch_word(5).unwrap();
        assert_eq!(word.word.len(), 5);
    }

    #[test]
    fn test_cli_command_is_valid() {
        Cli::command().debug_assert();
    }
}
