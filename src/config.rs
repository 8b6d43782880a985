use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::game::{Difficulty, FigureStyle, Settings, DEFAULT_WORD_LENGTH};
use crate::word_source::http::DEFAULT_API_URL;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub word_length: usize,
    pub difficulty: Difficulty,
    pub figure_style: FigureStyle,
    pub api_url: String,
    pub offline: bool,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            difficulty: Difficulty::Easy,
            figure_style: FigureStyle::Person,
            api_url: DEFAULT_API_URL.to_string(),
            offline: false,
            request_timeout_secs: 10,
        }
    }
}

impl Config {
    /// Game settings, falling back to the default length when the stored
    /// one is out of range.
    pub fn settings(&self) -> Settings {
        let base = Settings::new(self.difficulty, self.figure_style);
        base.with_word_length(self.word_length).unwrap_or_else(|| {
            warn!(
                "Configured word length {} is out of range, using {}",
                self.word_length, DEFAULT_WORD_LENGTH
            );
            base
        })
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Ignoring unreadable config {}: {}", self.path.display(), e);
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
