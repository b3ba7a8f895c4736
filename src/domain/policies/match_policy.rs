//! Match Policy
//!
//! Decides when a similarity score counts as an exact match and which
//! candidate wins a tie. The scoring itself is pluggable via `SimilarityScorer`.

use serde::{Deserialize, Serialize};
use similar::{DiffOp, TextDiff};

use crate::error::{IngestError, IngestResult};

/// Scores how close two normalized names are, in `0.0..=1.0`.
pub trait SimilarityScorer {
    fn score(&self, a: &str, b: &str) -> f64;
}

/// Character-level matching ratio `2 * M / T`.
///
/// `M` is the number of chars in equal runs of a char diff and `T` the total
/// char count of both strings. Two empty strings score 1.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceRatio;

impl SimilarityScorer for SequenceRatio {
    fn score(&self, a: &str, b: &str) -> f64 {
        let total = a.chars().count() + b.chars().count();
        if total == 0 {
            return 1.0;
        }

        let diff = TextDiff::from_chars(a, b);
        let matched: usize = diff
            .ops()
            .iter()
            .map(|op| match op {
                DiffOp::Equal { len, .. } => *len,
                _ => 0,
            })
            .sum();

        2.0 * matched as f64 / total as f64
    }
}

/// Which candidate wins when two score the same
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// The lower slot id wins
    #[default]
    LowestId,
    /// The higher slot id wins
    HighestId,
}

/// Threshold and tie-break rule for exact matching
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchPolicy {
    threshold: f64,
    tie_break: TieBreak,
}

impl MatchPolicy {
    pub const DEFAULT_THRESHOLD: f64 = 0.85;

    pub fn new(threshold: f64, tie_break: TieBreak) -> IngestResult<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(IngestError::InvalidThreshold { value: threshold });
        }
        Ok(Self {
            threshold,
            tie_break,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Whether a score is high enough to count as an exact match
    pub fn accepts(&self, score: f64) -> bool {
        score >= self.threshold
    }

    /// Whether `(id, score)` should replace the current best candidate
    pub fn prefers(&self, id: u32, score: f64, best: Option<(u32, f64)>) -> bool {
        let Some((best_id, best_score)) = best else {
            return true;
        };
        if score != best_score {
            return score > best_score;
        }
        match self.tie_break {
            TieBreak::LowestId => id < best_id,
            TieBreak::HighestId => id > best_id,
        }
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            tie_break: TieBreak::default(),
        }
    }
}
