//! Session deck manager
//!
//! A [`Session`] owns everything that changes during a drill: the working
//! deck (a random sample of the word table), the cursor, the reveal flag,
//! and the performance ledger. Cards judged wrong are copied back into the
//! unseen part of the deck (see [`super::algorithm`]), so the deck only
//! grows and the cursor only moves forward.
//!
//! State transitions:
//! ```text
//! initialize ──► active, hidden ──reveal──► active, revealed
//!                      ▲                          │
//!                      └──────── judge ◄──────────┘  (index += 1)
//! index == deck.len() ──► ended ──start_new_session──► active, hidden
//! ```
//!
//! Judging a card that has not been revealed reveals it first; the
//! judgment is still recorded. Revealing or judging after the end is an
//! error.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use super::algorithm::{reinsert_missed, Placement};
use super::error::{FlashcardError, Result};
use super::ledger::{LedgerKey, PerformanceLedger, SessionSummary};
use super::models::{Card, CardFace, Judgment, SessionConfig};
use super::storage::WordTable;

#[derive(Debug)]
pub struct Session<R = StdRng> {
    id: Uuid,
    config: SessionConfig,
    deck: Vec<Card>,
    index: usize,
    show_answer: bool,
    ledger: PerformanceLedger,
    started_at: DateTime<Utc>,
    rng: R,
}

impl Session<StdRng> {
    /// Start a session with an entropy-seeded generator
    pub fn initialize(table: &WordTable, config: SessionConfig) -> Result<Self> {
        Self::with_rng(table, config, StdRng::from_entropy())
    }

    /// Start a reproducible session
    pub fn seeded(table: &WordTable, config: SessionConfig, seed: u64) -> Result<Self> {
        Self::with_rng(table, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Start a session drawing from a caller-supplied generator
    pub fn with_rng(table: &WordTable, config: SessionConfig, mut rng: R) -> Result<Self> {
        let deck = draw_deck(table, &config, &mut rng)?;
        let session = Self {
            id: Uuid::new_v4(),
            config,
            deck,
            index: 0,
            show_answer: false,
            ledger: PerformanceLedger::new(),
            started_at: Utc::now(),
            rng,
        };

        log::info!(
            "Started session {} with {} of {} words ({}, {})",
            session.id,
            session.deck.len(),
            table.len(),
            config.language_pair,
            config.direction.describe(config.language_pair),
        );

        Ok(session)
    }

    /// Replace all session state with a fresh draw.
    ///
    /// On error the current session is left untouched.
    pub fn start_new_session(&mut self, table: &WordTable, config: SessionConfig) -> Result<()> {
        let deck = draw_deck(table, &config, &mut self.rng)?;

        self.id = Uuid::new_v4();
        self.config = config;
        self.deck = deck;
        self.index = 0;
        self.show_answer = false;
        self.ledger = PerformanceLedger::new();
        self.started_at = Utc::now();

        log::info!(
            "Started session {} with {} of {} words",
            self.id,
            self.deck.len(),
            table.len()
        );
        Ok(())
    }

    /// New draw with the current configuration
    pub fn restart(&mut self, table: &WordTable) -> Result<()> {
        self.start_new_session(table, self.config)
    }

    /// Show the hidden side of the current card
    pub fn reveal(&mut self) -> Result<()> {
        if self.is_ended() {
            return Err(FlashcardError::SessionEnded);
        }
        self.show_answer = true;
        Ok(())
    }

    /// Record a verdict on the current card and move to the next one.
    ///
    /// A wrong verdict copies the card back into the deck; the returned
    /// placement says where.
    pub fn judge(&mut self, judgment: Judgment) -> Result<Option<Placement>> {
        let face = self.face().ok_or(FlashcardError::SessionEnded)?;

        if !self.show_answer {
            log::debug!("'{}' judged before reveal, revealing first", face.front);
            self.show_answer = true;
        }

        self.ledger.record(LedgerKey::from(&face), judgment);

        let placement = match judgment {
            Judgment::Right => None,
            Judgment::Wrong => reinsert_missed(&mut self.deck, self.index, &mut self.rng),
        };

        if let Some(placement) = placement {
            log::debug!(
                "'{}' missed at {}, copy {:?} (deck now {})",
                face.front,
                self.index,
                placement,
                self.deck.len()
            );
        }

        self.index += 1;
        self.show_answer = false;

        Ok(placement)
    }
}

impl<R> Session<R> {
    /// The card under the cursor, `None` once the session has ended
    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.index)
    }

    /// Prompt and answer of the current card for this session's settings
    pub fn face(&self) -> Option<CardFace> {
        self.current_card()
            .map(|card| card.face(self.config.language_pair, self.config.direction))
    }

    pub fn is_ended(&self) -> bool {
        self.index >= self.deck.len()
    }

    /// Totals and per-word breakdown; valid at any point in the session
    pub fn summarize(&self) -> SessionSummary {
        let mut summary = self.ledger.summarize();
        summary.elapsed_secs = (Utc::now() - self.started_at).num_seconds();
        summary
    }

    /// (cards judged, deck length)
    pub fn progress(&self) -> (usize, usize) {
        (self.index.min(self.deck.len()), self.deck.len())
    }

    pub fn progress_ratio(&self) -> f64 {
        let (done, total) = self.progress();
        if total == 0 {
            1.0
        } else {
            done as f64 / total as f64
        }
    }

    pub fn remaining(&self) -> usize {
        self.deck.len().saturating_sub(self.index)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn show_answer(&self) -> bool {
        self.show_answer
    }

    pub fn ledger(&self) -> &PerformanceLedger {
        &self.ledger
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

/// Uniform sample without replacement, in random order
fn draw_deck<R: Rng + ?Sized>(
    table: &WordTable,
    config: &SessionConfig,
    rng: &mut R,
) -> Result<Vec<Card>> {
    let amount = config.resolve_sample_size(table.len())?;

    Ok(rand::seq::index::sample(rng, table.len(), amount)
        .into_iter()
        .filter_map(|i| table.get(i).cloned())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flashcards::algorithm::REINSERT_GAP;
    use crate::flashcards::models::{Direction, LanguagePair};
    use std::collections::HashSet;

    fn table(n: usize) -> WordTable {
        (0..n)
            .map(|i| Card::new(format!("parola{}", i), format!("Wort{}", i), format!("word{}", i)))
            .collect()
    }

    fn config(sample_size: Option<usize>) -> SessionConfig {
        SessionConfig::new(LanguagePair::German, Direction::Forward, sample_size)
    }

    fn answer(session: &mut Session, judgment: Judgment) -> Option<Placement> {
        session.reveal().unwrap();
        session.judge(judgment).unwrap()
    }

    #[test]
    fn test_all_right_ends_session() {
        let table = table(5);
        let mut session = Session::seeded(&table, config(Some(5)), 1).unwrap();

        assert_eq!(session.deck().len(), 5);
        assert_eq!(session.index(), 0);
        assert!(!session.show_answer());

        for _ in 0..5 {
            assert!(!session.is_ended());
            assert_eq!(answer(&mut session, Judgment::Right), None);
        }

        assert!(session.is_ended());
        assert!(session.current_card().is_none());
        let summary = session.summarize();
        assert_eq!(summary.right, 5);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.accuracy, 100.0);
    }

    #[test]
    fn test_wrong_inserts_inside_window() {
        let table = table(5);
        let mut session = Session::seeded(&table, config(None), 2).unwrap();
        let missed = session.current_card().unwrap().clone();

        let placement = answer(&mut session, Judgment::Wrong).unwrap();

        assert!(matches!(placement, Placement::Inserted(3) | Placement::Inserted(4)));
        assert_eq!(session.deck().len(), 6);
        assert_eq!(session.index(), 1);
        assert_eq!(session.deck()[placement.position()], missed);
        assert!(!session.show_answer());
    }

    #[test]
    fn test_wrong_near_end_appends() {
        let table = table(3);
        let mut session = Session::seeded(&table, config(None), 3).unwrap();
        let missed = session.current_card().unwrap().clone();

        let placement = answer(&mut session, Judgment::Wrong).unwrap();

        assert_eq!(placement, Placement::Appended(3));
        assert_eq!(session.deck().len(), 4);
        assert_eq!(session.deck()[3], missed);
        assert_eq!(session.index(), 1);
    }

    #[test]
    fn test_last_card_wrong_comes_back() {
        let table = table(1);
        let mut session = Session::seeded(&table, config(None), 4).unwrap();

        answer(&mut session, Judgment::Wrong);
        assert!(!session.is_ended());
        assert_eq!(session.deck().len(), 2);

        answer(&mut session, Judgment::Right);
        assert!(session.is_ended());
    }

    #[test]
    fn test_ledger_keys_by_direction() {
        let table = WordTable::from_cards(vec![Card::new("gatto", "Katze", "cat")]);
        let mut session = Session::seeded(&table, config(None), 5).unwrap();

        answer(&mut session, Judgment::Wrong);
        answer(&mut session, Judgment::Wrong);
        assert_eq!(
            session.ledger().stats(&LedgerKey::new("gatto", "Katze")).unwrap().wrong,
            2
        );

        let reverse = SessionConfig::new(LanguagePair::German, Direction::Reverse, None);
        session.start_new_session(&table, reverse).unwrap();
        answer(&mut session, Judgment::Wrong);

        assert!(session.ledger().stats(&LedgerKey::new("gatto", "Katze")).is_none());
        assert_eq!(
            session.ledger().stats(&LedgerKey::new("Katze", "gatto")).unwrap().wrong,
            1
        );
    }

    #[test]
    fn test_repeated_misses_accumulate_on_one_key() {
        let table = WordTable::from_cards(vec![Card::new("gatto", "Katze", "cat")]);
        let mut session = Session::seeded(&table, config(None), 6).unwrap();

        answer(&mut session, Judgment::Wrong);
        answer(&mut session, Judgment::Wrong);
        answer(&mut session, Judgment::Right);

        let summary = session.summarize();
        assert!(session.is_ended());
        assert_eq!(summary.words.len(), 1);
        assert_eq!(summary.words[0].prompt, "gatto");
        assert_eq!(summary.words[0].answer, "Katze");
        assert_eq!(summary.words[0].wrong, 2);
        assert_eq!(summary.words[0].right, 1);
    }

    #[test]
    fn test_invalid_configuration() {
        let table = table(4);

        assert!(matches!(
            Session::seeded(&table, config(Some(0)), 1),
            Err(FlashcardError::Configuration(_))
        ));
        assert!(matches!(
            Session::seeded(&table, config(Some(5)), 1),
            Err(FlashcardError::Configuration(_))
        ));
        assert!(matches!(
            Session::seeded(&WordTable::default(), config(None), 1),
            Err(FlashcardError::Configuration(_))
        ));
    }

    #[test]
    fn test_failed_restart_keeps_state() {
        let table = table(4);
        let mut session = Session::seeded(&table, config(None), 7).unwrap();
        answer(&mut session, Judgment::Right);
        let id = session.id();

        assert!(session.start_new_session(&table, config(Some(9))).is_err());
        assert_eq!(session.id(), id);
        assert_eq!(session.index(), 1);
        assert_eq!(session.ledger().total(), 1);
    }

    #[test]
    fn test_judge_before_reveal_auto_reveals() {
        let table = table(4);
        let mut session = Session::seeded(&table, config(None), 8).unwrap();

        assert!(!session.show_answer());
        session.judge(Judgment::Right).unwrap();

        assert_eq!(session.index(), 1);
        assert_eq!(session.ledger().total(), 1);
        assert!(!session.show_answer());
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let table = table(2);
        let mut session = Session::seeded(&table, config(None), 9).unwrap();

        session.reveal().unwrap();
        session.reveal().unwrap();
        assert!(session.show_answer());
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn test_ended_session_rejects_actions() {
        let table = table(1);
        let mut session = Session::seeded(&table, config(None), 10).unwrap();
        answer(&mut session, Judgment::Right);

        assert!(matches!(session.reveal(), Err(FlashcardError::SessionEnded)));
        assert!(matches!(
            session.judge(Judgment::Wrong),
            Err(FlashcardError::SessionEnded)
        ));
        assert_eq!(session.deck().len(), 1);
        assert_eq!(session.summarize().total, 1);
    }

    #[test]
    fn test_deck_invariants_under_random_judgments() {
        let table = table(12);
        let mut session = Session::seeded(&table, config(Some(8)), 11).unwrap();
        let mut coin = StdRng::seed_from_u64(99);
        let mut steps = 0;

        while !session.is_ended() {
            let before_len = session.deck().len();
            let before_index = session.index();
            let current = session.current_card().unwrap().clone();
            let judgment = if coin.gen_bool(0.4) {
                Judgment::Wrong
            } else {
                Judgment::Right
            };

            let placement = answer(&mut session, judgment);

            assert_eq!(session.index(), before_index + 1);
            match (judgment, placement) {
                (Judgment::Right, None) => assert_eq!(session.deck().len(), before_len),
                (Judgment::Wrong, Some(placement)) => {
                    assert_eq!(session.deck().len(), before_len + 1);
                    assert_eq!(session.deck()[placement.position()], current);
                    if before_len > before_index + REINSERT_GAP {
                        let p = placement.position();
                        assert!(p >= before_index + REINSERT_GAP && p <= before_len - 1);
                    } else {
                        assert_eq!(placement, Placement::Appended(before_len));
                    }
                }
                other => panic!("unexpected outcome {:?}", other),
            }

            steps += 1;
            assert!(steps < 10_000, "session did not terminate");
        }

        let summary = session.summarize();
        assert_eq!(summary.total, summary.right + summary.wrong);
        assert_eq!(summary.total, steps);
        assert_eq!(session.deck().len(), 8 + summary.wrong);
        let expected = summary.right as f64 / summary.total as f64 * 100.0;
        assert!((summary.accuracy - expected).abs() < 1e-9);
    }

    #[test]
    fn test_start_new_session_resets_everything() {
        let table = table(10);
        let mut session = Session::seeded(&table, config(Some(6)), 12).unwrap();

        for round in 0..2 {
            let first_id = session.id();
            while !session.is_ended() {
                let judgment = if session.index() % 3 == 0 {
                    Judgment::Wrong
                } else {
                    Judgment::Right
                };
                answer(&mut session, judgment);
            }
            let summary = session.summarize();
            assert_eq!(summary.total, summary.right + summary.wrong);

            session.start_new_session(&table, config(Some(4 + round))).unwrap();

            assert_ne!(session.id(), first_id);
            assert_eq!(session.index(), 0);
            assert!(!session.show_answer());
            assert!(session.ledger().is_empty());
            assert_eq!(session.deck().len(), 4 + round);

            let unique: HashSet<&str> = session.deck().iter().map(|c| c.source_term()).collect();
            assert_eq!(unique.len(), session.deck().len());
            assert!(session
                .deck()
                .iter()
                .all(|card| table.cards().contains(card)));
        }
    }

    #[test]
    fn test_full_table_is_permutation() {
        let table = table(20);
        let session = Session::seeded(&table, config(None), 13).unwrap();

        let mut drawn: Vec<&str> = session.deck().iter().map(|c| c.source_term()).collect();
        let mut expected: Vec<&str> = table.cards().iter().map(|c| c.source_term()).collect();
        drawn.sort();
        expected.sort();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_same_seed_same_deck() {
        let table = table(30);
        let a = Session::seeded(&table, config(Some(10)), 42).unwrap();
        let b = Session::seeded(&table, config(Some(10)), 42).unwrap();

        assert_eq!(a.deck(), b.deck());
    }

    #[test]
    fn test_progress() {
        let table = table(4);
        let mut session = Session::seeded(&table, config(None), 14).unwrap();
        assert_eq!(session.progress(), (0, 4));
        assert_eq!(session.progress_ratio(), 0.0);

        answer(&mut session, Judgment::Wrong);
        assert_eq!(session.progress(), (1, 5));
        assert_eq!(session.remaining(), 4);
    }

    #[test]
    fn test_restart_keeps_config() {
        let table = table(6);
        let reverse = SessionConfig::new(LanguagePair::English, Direction::Reverse, Some(3));
        let mut session = Session::seeded(&table, reverse, 15).unwrap();
        answer(&mut session, Judgment::Right);

        session.restart(&table).unwrap();

        assert_eq!(*session.config(), reverse);
        assert_eq!(session.deck().len(), 3);
        assert_eq!(session.index(), 0);
        let face = session.face().unwrap();
        assert!(face.front.starts_with("word"));
        assert!(face.back.starts_with("parola"));
    }
}
