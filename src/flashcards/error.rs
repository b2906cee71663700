use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashcardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Malformed word table at row {row}: {message}")]
    DataFormat { row: usize, message: String },

    #[error("Session has ended; start a new session")]
    SessionEnded,
}

impl FlashcardError {
    pub(crate) fn data_format(row: usize, message: impl Into<String>) -> Self {
        Self::DataFormat {
            row,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlashcardError>;
