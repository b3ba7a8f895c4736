//! Name Matcher Domain Service
//!
//! Scores an asset's normalized name against the unclaimed slot names and
//! returns at most one confident match.

use std::collections::BTreeMap;

use crate::domain::entities::SlotTable;
use crate::domain::policies::{MatchPolicy, SequenceRatio, SimilarityScorer};

/// A confident match between an asset and a slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameMatch {
    pub id: u32,
    pub score: f64,
}

/// Normalized slot names still available for matching.
///
/// Built from the slot table's name lookup; an id leaves the pool once an
/// asset claims it so no two assets match the same slot.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    names: BTreeMap<String, u32>,
}

impl CandidatePool {
    pub fn from_table(table: &SlotTable) -> Self {
        Self {
            names: table.name_index().clone(),
        }
    }

    /// Remove the name that maps to `id`
    pub fn claim(&mut self, id: u32) {
        self.names.retain(|_, candidate| *candidate != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.names.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Name matcher service
#[derive(Debug, Clone, Default)]
pub struct NameMatcher<S = SequenceRatio> {
    scorer: S,
    policy: MatchPolicy,
}

impl NameMatcher<SequenceRatio> {
    pub fn new(policy: MatchPolicy) -> Self {
        Self {
            scorer: SequenceRatio,
            policy,
        }
    }
}

impl<S: SimilarityScorer> NameMatcher<S> {
    pub fn with_scorer(scorer: S, policy: MatchPolicy) -> Self {
        Self { scorer, policy }
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Best candidate at or above the threshold, if any.
    pub fn best_match<'a>(
        &self,
        asset_name: &str,
        candidates: impl IntoIterator<Item = (&'a str, u32)>,
    ) -> Option<NameMatch> {
        let mut best: Option<(u32, f64)> = None;
        for (name, id) in candidates {
            let score = self.scorer.score(asset_name, name);
            if self.policy.prefers(id, score, best) {
                best = Some((id, score));
            }
        }

        best.filter(|(_, score)| self.policy.accepts(*score))
            .map(|(id, score)| NameMatch { id, score })
    }
}
