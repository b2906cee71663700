//! Data models for the flashcard drill

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{FlashcardError, Result};

/// Languages present in the word table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Source language of every card
    Italian,
    German,
    English,
}

impl Language {
    /// Column identifier used by the word table
    pub fn identifier(self) -> &'static str {
        match self {
            Self::Italian => "italian",
            Self::German => "german",
            Self::English => "english",
        }
    }

    /// Name shown to the learner
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Italian => "Italiano",
            Self::German => "Tedesco",
            Self::English => "Inglese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The two target columns a session can drill against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguagePair {
    /// Italiano ↔ Tedesco
    #[serde(alias = "italian-german")]
    German,
    /// Italiano ↔ Inglese
    #[serde(alias = "italian-english")]
    English,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::German
    }
}

impl LanguagePair {
    pub fn target(self) -> Language {
        match self {
            Self::German => Language::German,
            Self::English => Language::English,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::German => Self::English,
            Self::English => Self::German,
        }
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \u{2194} {}", Language::Italian, self.target())
    }
}

/// Which side of the pair is the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Italian prompt, target-language answer
    Forward,
    /// Target-language prompt, Italian answer
    Reverse,
}

impl Default for Direction {
    fn default() -> Self {
        Self::Forward
    }
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }

    /// (prompt, answer) languages for a pair
    pub fn languages(self, pair: LanguagePair) -> (Language, Language) {
        match self {
            Self::Forward => (Language::Italian, pair.target()),
            Self::Reverse => (pair.target(), Language::Italian),
        }
    }

    pub fn describe(self, pair: LanguagePair) -> String {
        let (front, back) = self.languages(pair);
        format!("{} \u{2192} {}", front, back)
    }
}

/// A word with its translations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    source_term: String,
    translations: BTreeMap<Language, String>,
}

impl Card {
    pub fn new(
        italian: impl Into<String>,
        german: impl Into<String>,
        english: impl Into<String>,
    ) -> Self {
        let mut translations = BTreeMap::new();
        translations.insert(Language::German, german.into());
        translations.insert(Language::English, english.into());
        Self {
            source_term: italian.into(),
            translations,
        }
    }

    /// The Italian term
    pub fn source_term(&self) -> &str {
        &self.source_term
    }

    /// The term in any language, Italian included
    pub fn term(&self, language: Language) -> &str {
        match language {
            Language::Italian => &self.source_term,
            other => self
                .translations
                .get(&other)
                .map(String::as_str)
                .unwrap_or_default(),
        }
    }

    pub fn translations(&self) -> &BTreeMap<Language, String> {
        &self.translations
    }

    /// Prompt and answer as shown for a pair and direction
    pub fn face(&self, pair: LanguagePair, direction: Direction) -> CardFace {
        let (front_language, back_language) = direction.languages(pair);
        CardFace {
            front_language,
            front: self.term(front_language).to_string(),
            back_language,
            back: self.term(back_language).to_string(),
        }
    }
}

/// A card as presented: the prompt side and the hidden side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFace {
    pub front_language: Language,
    pub front: String,
    pub back_language: Language,
    pub back: String,
}

/// Verdict the learner gives after revealing the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Judgment {
    Right,
    Wrong,
}

impl Judgment {
    pub fn is_right(self) -> bool {
        self == Self::Right
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Right => f.write_str("right"),
            Self::Wrong => f.write_str("wrong"),
        }
    }
}

/// Per-session settings. Changing any field resets the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    pub language_pair: LanguagePair,
    pub direction: Direction,
    /// Number of cards drawn; `None` drills the whole table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_size: Option<usize>,
}

impl SessionConfig {
    pub fn new(language_pair: LanguagePair, direction: Direction, sample_size: Option<usize>) -> Self {
        Self {
            language_pair,
            direction,
            sample_size,
        }
    }

    /// Number of cards to draw from a table of `available` words
    pub fn resolve_sample_size(&self, available: usize) -> Result<usize> {
        if available == 0 {
            return Err(FlashcardError::Configuration(
                "word table is empty".to_string(),
            ));
        }

        match self.sample_size {
            None => Ok(available),
            Some(0) => Err(FlashcardError::Configuration(
                "sample size must be at least 1".to_string(),
            )),
            Some(n) if n > available => Err(FlashcardError::Configuration(format!(
                "sample size {} exceeds the {} available words",
                n, available
            ))),
            Some(n) => Ok(n),
        }
    }
}
