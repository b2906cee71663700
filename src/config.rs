//! User settings
//!
//! Optional TOML file, by default `<config dir>/lupo/config.toml`:
//! ```toml
//! words = "data/master.csv"
//! language_pair = "german"   # or "english"
//! direction = "forward"      # or "reverse"
//! sample_size = 20           # omit to drill the whole table
//! ```
//! Every key is optional. Command-line flags override the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::flashcards::{Direction, LanguagePair, Result, SessionConfig};

/// Word table used when neither the settings file nor the command line names one
pub const DEFAULT_WORDS_FILE: &str = "data/master.csv";

const KNOWN_KEYS: [&str; 4] = ["words", "language_pair", "direction", "sample_size"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillSettings {
    #[serde(rename = "words", skip_serializing_if = "Option::is_none")]
    pub words_file: Option<PathBuf>,
    pub language_pair: LanguagePair,
    pub direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_size: Option<usize>,
}

impl DrillSettings {
    /// `<config dir>/lupo/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lupo").join("config.toml"))
    }

    /// Load the default settings file; a missing file means defaults
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            Some(path) => {
                log::debug!("No settings file at {:?}, using defaults", path);
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Load an explicit settings file; a missing file is an error
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&content)?;
        log::info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: toml::Table = toml::from_str(content)?;

        for key in raw.keys().filter(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            log::warn!("Ignoring unknown setting '{}'", key);
        }

        Ok(toml::Value::Table(raw).try_into()?)
    }

    /// Word table path, falling back to [`DEFAULT_WORDS_FILE`]
    pub fn words_path(&self) -> PathBuf {
        self.words_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORDS_FILE))
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(self.language_pair, self.direction, self.sample_size)
    }
}
