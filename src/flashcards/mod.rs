//! Flashcard drill sessions for Lupo
//!
//! This module provides:
//! - The word table (CSV-backed, immutable for the lifetime of a session)
//! - Session deck management (sampling, cursor, reveal state)
//! - Reinsertion of missed cards later in the same session
//! - The per-word performance ledger and end-of-session summary

pub mod algorithm;
pub mod error;
pub mod ledger;
pub mod models;
pub mod session;
pub mod storage;

pub use error::{FlashcardError, Result};
pub use ledger::{JudgmentRecord, LedgerKey, PerformanceLedger, SessionSummary, WordSummary};
pub use models::*;
pub use session::Session;
pub use storage::WordTable;
