pub mod http;
pub mod offline;

pub use http::HttpWordSource;
pub use offline::OfflineWordSource;

use thiserror::Error;

/// A word handed out by a word source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordData {
    pub word: String,
    pub definitions: Vec<String>,
    pub length: usize,
    /// How many candidates the source tried. Informational only.
    pub attempts: u32,
}

/// Failure modes for word sources. All of them are recoverable.
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("could not reach the word service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unreadable word service response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("word service returned an unusable word {0:?}")]
    InvalidWord(String),
    #[error("No words of length {length} found")]
    NoWords { length: usize },
    #[error("Could not find a valid word after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

/// Something that can supply a secret word of a given length.
pub trait WordSource: Send + Sync {
    fn fetch_word(&self, length: usize) -> Result<WordData, WordSourceError>;
}

/// Drop duplicate and blank definitions, keeping first-seen order.
pub(crate) fn dedup_definitions<I>(definitions: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = Vec::new();
    for d in definitions {
        let d = d.trim().to_string();
        if !d.is_empty() && !out.contains(&d) {
            out.push(d);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_order() {
        let defs = dedup_definitions(
            ["b", "a", "b", " ", "c "]
                .into_iter()
                .map(String::from),
        );
        assert_eq!(defs, vec!["b", "a", "c"]);
    }

    #[test]
    fn status_error_displays_message_only() {
        let err = WordSourceError::Status {
            status: 500,
            message: "Failed to generate word".into(),
        };
        assert_eq!(err.to_string(), "Failed to generate word");
    }
}
