use anyhow::Result;
use ratatui::prelude::Rect;

use lupo_lib::flashcards::{Judgment, Session, SessionConfig, SessionSummary};

use crate::app::App;

/// Cards added or removed per `+`/`-` press
pub const SAMPLE_STEP: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Drill,
    Summary,
}

pub struct TuiState {
    pub app: App,
    pub session: Session,
    pub mode: Mode,

    /// Verdict on the previous card, shown under the next prompt
    pub last_feedback: Option<Judgment>,
    pub summary_scroll: usize,

    // Card panel area for mouse hit-testing (updated each draw)
    pub card_area: Option<Rect>,

    pub flash_message: Option<String>,
    pub show_help: bool,
    pub quit: bool,
}

impl TuiState {
    pub fn new(app: App) -> Result<Self> {
        let session = app.start_session()?;
        Ok(Self {
            app,
            session,
            mode: Mode::Drill,
            last_feedback: None,
            summary_scroll: 0,
            card_area: None,
            flash_message: None,
            show_help: false,
            quit: false,
        })
    }

    pub fn summary(&self) -> SessionSummary {
        self.session.summarize()
    }

    pub fn reveal(&mut self) {
        if let Err(e) = self.session.reveal() {
            self.flash_message = Some(format!("Error: {}", e));
        }
    }

    /// Judge the current card; only after the answer has been revealed
    pub fn judge(&mut self, judgment: Judgment) {
        if !self.session.show_answer() {
            self.flash_message = Some("Reveal the answer first (Space)".to_string());
            return;
        }

        match self.session.judge(judgment) {
            Ok(_) => {
                self.last_feedback = Some(judgment);
                if self.session.is_ended() {
                    self.show_summary();
                }
            }
            Err(e) => {
                self.flash_message = Some(format!("Error: {}", e));
            }
        }
    }

    pub fn show_summary(&mut self) {
        self.mode = Mode::Summary;
        self.summary_scroll = 0;
    }

    /// Back to the cards of an unfinished session
    pub fn resume(&mut self) {
        if !self.session.is_ended() {
            self.mode = Mode::Drill;
        }
    }

    pub fn toggle_pair(&mut self) {
        let mut config = *self.session.config();
        config.language_pair = config.language_pair.toggled();
        self.apply_config(config);
    }

    pub fn toggle_direction(&mut self) {
        let mut config = *self.session.config();
        config.direction = config.direction.toggled();
        self.apply_config(config);
    }

    /// Grow or shrink the sample by [`SAMPLE_STEP`], within 1..=table size.
    ///
    /// Reaching the table size switches to drilling the whole table.
    pub fn adjust_sample(&mut self, grow: bool) {
        let available = self.app.table.len();
        let mut config = *self.session.config();
        let current = config.sample_size.unwrap_or(available);

        let next = if grow {
            current.saturating_add(SAMPLE_STEP).min(available)
        } else {
            current.saturating_sub(SAMPLE_STEP).max(1)
        };

        config.sample_size = if next >= available { None } else { Some(next) };
        if config != *self.session.config() {
            self.apply_config(config);
        }
    }

    /// Fresh draw with the current settings
    pub fn new_session(&mut self) {
        match self.session.restart(&self.app.table) {
            Ok(()) => {
                self.reset_view();
                self.flash_message = Some("New session".to_string());
            }
            Err(e) => {
                self.flash_message = Some(format!("Error: {}", e));
            }
        }
    }

    /// Any settings change starts a new session
    fn apply_config(&mut self, config: SessionConfig) {
        match self.session.start_new_session(&self.app.table, config) {
            Ok(()) => {
                self.app.session_config = config;
                self.reset_view();
                self.flash_message = Some(format!(
                    "New session: {} | {} | {} cards",
                    config.language_pair,
                    config.direction.describe(config.language_pair),
                    self.session.deck().len()
                ));
            }
            Err(e) => {
                self.flash_message = Some(format!("Error: {}", e));
            }
        }
    }

    fn reset_view(&mut self) {
        self.mode = Mode::Drill;
        self.last_feedback = None;
        self.summary_scroll = 0;
    }

    pub fn summary_scroll_down(&mut self, amount: usize) {
        let max = self.session.ledger().word_count().saturating_sub(1);
        self.summary_scroll = self.summary_scroll.saturating_add(amount).min(max);
    }

    pub fn summary_scroll_up(&mut self, amount: usize) {
        self.summary_scroll = self.summary_scroll.saturating_sub(amount);
    }
}
