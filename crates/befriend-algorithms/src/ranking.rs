//! Recommendation ranking
//!
//! Scores every member of the candidate pool and orders the survivors by
//! score (highest first), then by name.

use super::candidates::candidate_pool;
use super::common::{FriendGraph, NetworkGraph};
use super::scoring::total_score;
use std::cmp::Ordering;

/// A recommended person and their combined score (always >= 1)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredCandidate {
    pub person: String,
    pub score: u32,
}

impl ScoredCandidate {
    pub fn new(person: impl Into<String>, score: u32) -> Self {
        Self {
            person: person.into(),
            score,
        }
    }
}

/// Recommendation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendConfig {
    /// Lowest score that is still recommended. Values below 1 act as 1.
    pub min_score: u32,
    /// Keep at most this many results (after sorting)
    pub limit: Option<usize>,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            min_score: 1,
            limit: None,
        }
    }
}

/// Recommend friends for `subject` using the default configuration.
pub fn recommend(
    subject: &str,
    friends: &FriendGraph,
    networks: &NetworkGraph,
) -> Vec<ScoredCandidate> {
    recommend_with(subject, friends, networks, &RecommendConfig::default())
}

/// Recommend friends for `subject`.
///
/// Zero-score candidates are never returned, whatever `min_score` says.
pub fn recommend_with(
    subject: &str,
    friends: &FriendGraph,
    networks: &NetworkGraph,
    config: &RecommendConfig,
) -> Vec<ScoredCandidate> {
    let min_score = config.min_score.max(1);

    let mut results: Vec<ScoredCandidate> = candidate_pool(subject, friends)
        .into_iter()
        .filter_map(|candidate| {
            let score = total_score(subject, candidate, friends, networks);
            (score >= min_score).then(|| ScoredCandidate::new(candidate, score))
        })
        .collect();

    results.sort_by(ranking_order);

    if let Some(limit) = config.limit {
        results.truncate(limit);
    }

    results
}

/// Score descending, then name ascending.
pub fn ranking_order(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.person.cmp(&b.person))
}
