use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};
use log::{debug, error};

use crate::game::{FetchRequest, SessionToken};
use crate::word_source::{WordData, WordSource, WordSourceError};

/// Everything the main loop reacts to, funnelled through one channel so
/// events are handled strictly one at a time.
#[derive(Debug)]
pub enum GameEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    WordFetched {
        token: SessionToken,
        result: Result<WordData, WordSourceError>,
    },
}

/// Source of events for the runner
pub trait GameEventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    /// Returns Ok(event) if an event arrives before the timeout, or Err(Timeout) if it expires.
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError>;

    /// Handle for posting events from other threads (word fetches).
    fn sender(&self) -> Sender<GameEvent>;
}

/// Production event source using crossterm
pub struct CrosstermEventSource {
    tx: Sender<GameEvent>,
    rx: Receiver<GameEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let key_tx = tx.clone();

        thread::spawn(move || loop {
            match event::read() {
                Ok(CtEvent::Key(key)) => {
                    if key_tx.send(GameEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(CtEvent::Resize(_, _)) => {
                    if key_tx.send(GameEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    error!("Terminal event reader stopped: {}", e);
                    break;
                }
            }
        });

        Self { tx, rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    fn sender(&self) -> Sender<GameEvent> {
        self.tx.clone()
    }
}

/// Channel-backed event source for tests
pub struct TestEventSource {
    tx: Sender<GameEvent>,
    rx: Receiver<GameEvent>,
}

impl TestEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }
}

impl Default for TestEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    fn sender(&self) -> Sender<GameEvent> {
        self.tx.clone()
    }
}

/// Configurable ticker interface
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Runner that advances the application one event/tick at a time
pub struct Runner<E: GameEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
}

impl<E: GameEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
        }
    }

    /// Blocks up to tick interval and returns the next event, or Tick on timeout
    pub fn step(&self) -> GameEvent {
        match self.event_source.recv_timeout(self.ticker.interval()) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => GameEvent::Tick,
        }
    }

    pub fn sender(&self) -> Sender<GameEvent> {
        self.event_source.sender()
    }
}

/// Run a word request on its own thread and post the result back.
///
/// The result carries the request's token; the controller decides whether it
/// is still wanted.
pub fn spawn_fetch(
    source: Arc<dyn WordSource>,
    request: FetchRequest,
    tx: Sender<GameEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let result = source.fetch_word(request.length);
        if tx
            .send(GameEvent::WordFetched {
                token: request.token,
                result,
            })
            .is_err()
        {
            debug!("Event loop gone before word for {} arrived", request.token);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameController, Settings};
    use assert_matches::assert_matches;

    struct Echo;

    impl WordSource for Echo {
        fn fetch_word(&self, length: usize) -> Result<WordData, WordSourceError> {
            Ok(WordData {
                word: "A".repeat(length),
                definitions: vec![],
                length,
                attempts: 1,
            })
        }
    }

    #[test]
    fn step_returns_tick_on_timeout() {
        let es = TestEventSource::new();
        let ticker = FixedTicker::new(Duration::from_millis(1));
        let runner = Runner::new(es, ticker);

        // With no events available, step should yield Tick
        assert_matches!(runner.step(), GameEvent::Tick);
    }

    #[test]
    fn step_passes_through_events() {
        let es = TestEventSource::new();
        es.sender().send(GameEvent::Resize).unwrap();
        let ticker = FixedTicker::new(Duration::from_millis(10));
        let runner = Runner::new(es, ticker);

        assert_matches!(runner.step(), GameEvent::Resize);
    }

    #[test]
    fn fetch_result_comes_back_through_the_channel() {
        let runner = Runner::new(
            TestEventSource::new(),
            FixedTicker::new(Duration::from_millis(500)),
        );
        let mut controller = GameController::new(Settings::default());
        let request = controller.start_new_game();

        spawn_fetch(Arc::new(Echo), request, runner.sender())
            .join()
            .unwrap();

        match runner.step() {
            GameEvent::WordFetched { token, result } => {
                assert_eq!(token, request.token);
                assert_eq!(result.unwrap().word.len(), request.length);
            }
            other => panic!("expected WordFetched, got {other:?}"),
        }
    }
}
