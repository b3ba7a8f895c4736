//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure functions that operate on domain entities.

mod match_policy;

pub use match_policy::{MatchPolicy, SequenceRatio, SimilarityScorer, TieBreak};
