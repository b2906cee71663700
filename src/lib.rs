//! Lupo: an Italian vocabulary drill.
//!
//! The library owns the session logic (deck sampling, reinsertion of
//! missed cards, the performance ledger) and the word table loader. The
//! `lupo-cli` binary is the presentation layer on top of it.

pub mod config;
pub mod flashcards;

pub use config::DrillSettings;
pub use flashcards::{
    Card, Direction, FlashcardError, Judgment, Language, LanguagePair, Session, SessionConfig,
    SessionSummary, WordTable,
};
