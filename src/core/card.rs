//! # Cards
//!
//! A card is one vocabulary entry with a text for every supported language,
//! plus the chapter it came from. Cards are built once by the loader and
//! never mutated afterwards, so every field is private.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Shown in place of a side that has no text.
pub const MISSING_SIDE_TEXT: &str = "No translation available";

/// The fixed set of card sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Deserialize, Serialize)]
pub enum Language {
    #[value(name = "hi")]
    #[serde(rename = "hi")]
    Hindi,
    #[value(name = "en")]
    #[serde(rename = "en")]
    English,
    #[value(name = "fi")]
    #[serde(rename = "fi")]
    Finnish,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Hindi, Language::English, Language::Finnish];

    pub fn code(self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::English => "en",
            Language::Finnish => "fi",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::Hindi => "Hindi",
            Language::English => "English",
            Language::Finnish => "Finnish",
        }
    }

    /// Next language in `ALL`, wrapping around. Used by the cycle keys.
    pub fn next(self) -> Self {
        match self {
            Language::Hindi => Language::English,
            Language::English => Language::Finnish,
            Language::Finnish => Language::Hindi,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hi" | "hindi" => Ok(Language::Hindi),
            "en" | "english" => Ok(Language::English),
            "fi" | "finnish" => Ok(Language::Finnish),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    hi: String,
    en: String,
    fi: String,
    chapter: String,
    english_key: String,
}

impl Card {
    pub fn new(
        hi: impl Into<String>,
        en: impl Into<String>,
        fi: impl Into<String>,
        chapter: impl Into<String>,
        english_key: impl Into<String>,
    ) -> Self {
        Self {
            hi: hi.into(),
            en: en.into(),
            fi: fi.into(),
            chapter: chapter.into(),
            english_key: english_key.into(),
        }
    }

    /// Raw text for a side. May be empty (bilingual cards have no Finnish).
    pub fn side(&self, language: Language) -> &str {
        match language {
            Language::Hindi => &self.hi,
            Language::English => &self.en,
            Language::Finnish => &self.fi,
        }
    }

    /// Text for a side as it should be displayed: empty sides get the placeholder.
    pub fn display_side(&self, language: Language) -> &str {
        let text = self.side(language);
        if text.is_empty() { MISSING_SIDE_TEXT } else { text }
    }

    pub fn chapter(&self) -> &str {
        &self.chapter
    }

    pub fn english_key(&self) -> &str {
        &self.english_key
    }
}
