//! Per-word performance tracking and the end-of-session summary

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::models::{CardFace, Judgment};

/// What was on screen when a judgment was made.
///
/// Keys on content rather than card identity, so a reinserted copy and the
/// original land on the same entry while the two directions stay apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerKey {
    pub prompt: String,
    pub answer: String,
}

impl LedgerKey {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }
}

impl From<&CardFace> for LedgerKey {
    fn from(face: &CardFace) -> Self {
        Self::new(face.front.clone(), face.back.clone())
    }
}

/// Right/wrong counters for one key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStats {
    pub right: u32,
    pub wrong: u32,
}

/// One judgment in the order it was made
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgmentRecord {
    pub prompt: String,
    pub answer: String,
    pub result: Judgment,
}

/// Counts per judged pair plus the chronological log
#[derive(Debug, Clone, Default)]
pub struct PerformanceLedger {
    counts: HashMap<LedgerKey, WordStats>,
    log: Vec<JudgmentRecord>,
}

impl PerformanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: LedgerKey, result: Judgment) {
        self.log.push(JudgmentRecord {
            prompt: key.prompt.clone(),
            answer: key.answer.clone(),
            result,
        });

        let stats = self.counts.entry(key).or_default();
        match result {
            Judgment::Right => stats.right += 1,
            Judgment::Wrong => stats.wrong += 1,
        }
    }

    pub fn stats(&self, key: &LedgerKey) -> Option<WordStats> {
        self.counts.get(key).copied()
    }

    pub fn log(&self) -> &[JudgmentRecord] {
        &self.log
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn total(&self) -> usize {
        self.log.len()
    }

    /// Number of distinct prompt/answer pairs judged so far
    pub fn word_count(&self) -> usize {
        self.counts.len()
    }

    /// Totals, accuracy, and the per-word table sorted worst first
    pub fn summarize(&self) -> SessionSummary {
        let right = self.log.iter().filter(|r| r.result.is_right()).count();
        let total = self.log.len();
        let wrong = total - right;

        let accuracy = if total > 0 {
            right as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        let mut words: Vec<WordSummary> = self
            .counts
            .iter()
            .map(|(key, stats)| WordSummary {
                prompt: key.prompt.clone(),
                answer: key.answer.clone(),
                right: stats.right,
                wrong: stats.wrong,
            })
            .collect();

        words.sort_by(|a, b| {
            b.wrong
                .cmp(&a.wrong)
                .then(a.right.cmp(&b.right))
                .then_with(|| a.prompt.cmp(&b.prompt))
                .then_with(|| a.answer.cmp(&b.answer))
        });

        SessionSummary {
            total,
            right,
            wrong,
            accuracy,
            words,
            history: self.log.clone(),
            elapsed_secs: 0,
        }
    }
}

/// One row of the per-word breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSummary {
    pub prompt: String,
    pub answer: String,
    pub right: u32,
    pub wrong: u32,
}

/// Statistics shown when a session ends (or on early exit)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub total: usize,
    pub right: usize,
    pub wrong: usize,
    /// Percentage of right judgments, 0 when nothing was judged
    pub accuracy: f64,
    pub words: Vec<WordSummary>,
    pub history: Vec<JudgmentRecord>,
    #[serde(default)]
    pub elapsed_secs: i64,
}

impl SessionSummary {
    /// "right/total (accuracy%)"
    pub fn score_line(&self) -> String {
        format!("{}/{} ({:.1}%)", self.right, self.total, self.accuracy)
    }
}
