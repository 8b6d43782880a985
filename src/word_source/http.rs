use std::time::Duration;

use log::{debug, info, warn};
use serde::Deserialize;

use super::{dedup_definitions, WordData, WordSource, WordSourceError};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
const FALLBACK_ERROR: &str = "Failed to fetch word";

/// The service has shipped both `definition: "..."` and
/// `definitions: [...]`; either may appear in either field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DefinitionField {
    One(String),
    Many(Vec<String>),
}

impl DefinitionField {
    fn into_vec(self) -> Vec<String> {
        match self {
            DefinitionField::One(s) => vec![s],
            DefinitionField::Many(v) => v,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WordResponse {
    word: String,
    #[serde(default)]
    length: Option<usize>,
    #[serde(default)]
    definition: Option<DefinitionField>,
    #[serde(default)]
    definitions: Option<DefinitionField>,
    #[serde(default)]
    attempts: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
    message: Option<String>,
}

/// Client for `GET {base}/word?length=N`.
#[derive(Debug, Clone)]
pub struct HttpWordSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpWordSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, WordSourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl WordSource for HttpWordSource {
    fn fetch_word(&self, length: usize) -> Result<WordData, WordSourceError> {
        let url = format!("{}/word", self.base_url);
        info!("Requesting word of length {} from {}", length, url);

        let resp = self
            .client
            .get(&url)
            .query(&[("length", length)])
            .send()?;
        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            warn!("Word service answered {}", status);
            return Err(WordSourceError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_word_body(&body)
    }
}

fn error_message(body: &str) -> String {
    let parsed: ErrorResponse = serde_json::from_str(body).unwrap_or_default();
    match (parsed.error, parsed.message) {
        (Some(error), Some(message)) => format!("{error}: {message}"),
        (Some(error), None) => error,
        _ => FALLBACK_ERROR.to_string(),
    }
}

fn parse_word_body(body: &str) -> Result<WordData, WordSourceError> {
    let parsed: WordResponse = serde_json::from_str(body)?;

    let word = parsed.word.trim().to_uppercase();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(WordSourceError::InvalidWord(parsed.word));
    }

    let definitions = dedup_definitions(
        parsed
            .definition
            .into_iter()
            .chain(parsed.definitions)
            .flat_map(DefinitionField::into_vec),
    );
    let length = word.chars().count();
    if parsed.length.is_some_and(|l| l != length) {
        debug!("Reported length {:?} differs from word length {}", parsed.length, length);
    }

    Ok(WordData {
        word,
        definitions,
        length,
        attempts: parsed.attempts.unwrap_or(1),
    })
}
