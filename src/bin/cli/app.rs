use std::path::PathBuf;

use anyhow::{Context, Result};

use lupo_lib::{Direction, DrillSettings, LanguagePair, Session, SessionConfig, WordTable};

/// Command-line values that take precedence over the settings file
#[derive(Debug, Default)]
pub struct Overrides {
    pub words_file: Option<PathBuf>,
    pub settings_file: Option<PathBuf>,
    pub language_pair: Option<LanguagePair>,
    pub direction: Option<Direction>,
    pub sample_size: Option<usize>,
    pub seed: Option<u64>,
}

/// Shared application state for CLI commands
pub struct App {
    pub words_path: PathBuf,
    pub table: WordTable,
    pub session_config: SessionConfig,
    pub seed: Option<u64>,
}

impl App {
    /// Resolve settings and load the word table
    pub fn new(overrides: Overrides) -> Result<Self> {
        let mut settings = match &overrides.settings_file {
            Some(path) => DrillSettings::load(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => DrillSettings::load_default().context("Failed to load settings")?,
        };

        if let Some(words) = overrides.words_file {
            settings.words_file = Some(words);
        }
        if let Some(pair) = overrides.language_pair {
            settings.language_pair = pair;
        }
        if let Some(direction) = overrides.direction {
            settings.direction = direction;
        }
        if overrides.sample_size.is_some() {
            settings.sample_size = overrides.sample_size;
        }

        let words_path = settings.words_path();
        let table = WordTable::load(&words_path)
            .with_context(|| format!("Failed to load word table {}", words_path.display()))?;

        Ok(Self {
            words_path,
            table,
            session_config: settings.session_config(),
            seed: overrides.seed,
        })
    }

    /// Build from an in-memory table
    #[cfg(test)]
    pub fn from_parts(table: WordTable, session_config: SessionConfig, seed: Option<u64>) -> Self {
        Self {
            words_path: PathBuf::from("memory"),
            table,
            session_config,
            seed,
        }
    }

    /// Start a session with the resolved configuration
    pub fn start_session(&self) -> Result<Session> {
        self.start_session_with(self.session_config)
    }

    pub fn start_session_with(&self, config: SessionConfig) -> Result<Session> {
        let session = match self.seed {
            Some(seed) => Session::seeded(&self.table, config, seed),
            None => Session::initialize(&self.table, config),
        };
        session.context("Invalid session configuration")
    }
}
