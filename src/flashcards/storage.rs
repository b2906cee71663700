//! Word table loading
//!
//! The table is a CSV file with a header row:
//! ```text
//! italian,german,english
//! gatto,Katze,cat
//! cane,Hund,dog
//! ```
//! Column order is free, headers are matched case-insensitively, and extra
//! columns are ignored. Every row needs a non-blank value in all three
//! required columns; anything else fails the whole load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::{FlashcardError, Result};
use super::models::{Card, Language};

const REQUIRED_COLUMNS: [Language; 3] = [Language::Italian, Language::German, Language::English];

/// Immutable, ordered collection of words a session samples from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTable {
    cards: Vec<Card>,
}

impl WordTable {
    /// Build a table from cards already in memory
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Load a CSV word table from disk
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let table = Self::from_reader(file)?;
        log::info!("Loaded {} words from {:?}", table.len(), path);
        Ok(table)
    }

    /// Parse CSV from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| FlashcardError::data_format(1, e.to_string()))?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let mut columns = [0usize; 3];
        for (slot, language) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h == language.identifier())
                .ok_or_else(|| {
                    FlashcardError::data_format(
                        1,
                        format!("missing required column '{}'", language.identifier()),
                    )
                })?;
        }

        let mut cards = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let fallback_row = row_idx + 2;
            let record = result.map_err(|e| {
                let row = e
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(fallback_row);
                FlashcardError::data_format(row, e.to_string())
            })?;

            let row = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(fallback_row);

            let italian = required_field(&record, columns[0], Language::Italian, row)?;
            let german = required_field(&record, columns[1], Language::German, row)?;
            let english = required_field(&record, columns[2], Language::English, row)?;
            cards.push(Card::new(italian, german, english));
        }

        if cards.is_empty() {
            return Err(FlashcardError::data_format(1, "word table has no rows"));
        }

        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for WordTable {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter.into_iter().collect())
    }
}

/// Trimmed, non-blank value of a required column
fn required_field(
    record: &csv::StringRecord,
    col: usize,
    language: Language,
    row: usize,
) -> Result<String> {
    record
        .get(col)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            FlashcardError::data_format(
                row,
                format!("missing value for '{}'", language.identifier()),
            )
        })
}
