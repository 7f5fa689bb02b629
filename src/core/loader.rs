//! # Card Loader
//!
//! Turns raw card data into `Card`s. Two shapes are accepted and told apart
//! by the top-level JSON value alone:
//!
//! ```text
//! Legacy (array)                    Chaptered (object)
//! [                                 {
//!   {"front": "नमस्ते",                "greetings": {
//!    "back": "hello"}                    "hello": {"hi": "नमस्ते", "en": "hello", "fi": "hei"}
//! ]                                    }
//!                                   }
//! ```
//!
//! Legacy pairs become bilingual cards in the `"legacy"` chapter. In the
//! chaptered shape a missing side falls back to the entry's own key.

use std::fmt;
use std::path::PathBuf;

use log::{debug, info, warn};
use serde_json::{Map, Value};

use crate::core::card::{Card, Language};

/// Chapter label given to every card from the legacy array shape.
pub const LEGACY_CHAPTER: &str = "legacy";

#[derive(Debug)]
pub enum LoadError {
    /// Reading the data file failed.
    Io(std::io::Error),
    /// Fetching the data URL failed (connection, non-2xx status, body read).
    Network(String),
    /// The data is not valid JSON.
    Parse(serde_json::Error),
    /// Valid JSON, but neither an array nor an object at the top level.
    Shape(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "card data I/O error: {e}"),
            LoadError::Network(msg) => write!(f, "card data network error: {msg}"),
            LoadError::Parse(e) => write!(f, "card data parse error: {e}"),
            LoadError::Shape(msg) => write!(f, "unsupported card data shape: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Where card data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` and `https://` strings are URLs, everything else is a path.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => f.write_str(url),
        }
    }
}

/// Load cards from a file or URL. One-shot: either every card or an error.
pub async fn load_source(source: &DataSource) -> Result<Vec<Card>, LoadError> {
    info!("Loading card data from {}", source);
    let body = match source {
        DataSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(LoadError::Io)?,
        DataSource::Url(url) => fetch_url(url).await?,
    };
    let cards = parse_records(&body)?;
    info!("Loaded {} cards from {}", cards.len(), source);
    Ok(cards)
}

async fn fetch_url(url: &str) -> Result<String, LoadError> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Network(format!(
            "HTTP {} from {}",
            status.as_u16(),
            url
        )));
    }

    response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))
}

/// Parse a JSON document into cards.
pub fn parse_records(json: &str) -> Result<Vec<Card>, LoadError> {
    let value: Value = serde_json::from_str(json).map_err(LoadError::Parse)?;
    convert_records(&value)
}

/// Convert an already-parsed JSON value into cards, detecting its shape.
pub fn convert_records(value: &Value) -> Result<Vec<Card>, LoadError> {
    match value {
        Value::Array(items) => {
            debug!("Detected legacy card shape ({} pairs)", items.len());
            Ok(items.iter().map(legacy_card).collect())
        }
        Value::Object(chapters) => {
            debug!("Detected chaptered card shape ({} chapters)", chapters.len());
            Ok(chaptered_cards(chapters))
        }
        other => Err(LoadError::Shape(format!(
            "expected an array or an object, found {}",
            json_kind(other)
        ))),
    }
}

/// Number of cards `convert_records` produces for `value`.
pub fn count_leaf_records(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(chapters) => chapters
            .values()
            .filter_map(Value::as_object)
            .map(Map::len)
            .sum(),
        _ => 0,
    }
}

fn legacy_card(item: &Value) -> Card {
    let text = |field: &str| {
        item.get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let front = text("front");
    let back = text("back");
    Card::new(front, back.clone(), "", LEGACY_CHAPTER, back)
}

fn chaptered_cards(chapters: &Map<String, Value>) -> Vec<Card> {
    let mut cards = Vec::new();

    for (chapter, entries) in chapters {
        let Some(entries) = entries.as_object() else {
            warn!("Skipping chapter '{}': expected an object of entries", chapter);
            continue;
        };

        for (key, leaf) in entries {
            let sides = leaf.as_object();
            if sides.is_none() {
                warn!("Entry '{}' in chapter '{}' is not an object; using its key for every side", key, chapter);
            }
            cards.push(Card::new(
                side_or_key(sides, Language::Hindi, key),
                side_or_key(sides, Language::English, key),
                side_or_key(sides, Language::Finnish, key),
                chapter.as_str(),
                key.as_str(),
            ));
        }
    }

    cards
}

/// Side text, or the entry key when the side is absent, empty or not a string.
fn side_or_key(sides: Option<&Map<String, Value>>, language: Language, key: &str) -> String {
    sides
        .and_then(|m| m.get(language.code()))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(key)
        .to_string()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
