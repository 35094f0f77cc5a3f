//! Recommendation module
//!
//! The scoring and ranking algorithms live in the `befriend-algorithms` crate.
//! This module provides the integration/adapter layer over [`SocialGraph`].

use crate::graph::{Person, SocialGraph};
use tracing::{debug, warn};

// Re-export algorithms
pub use befriend_algorithms::{
    candidate_pool, mutual_family_score, mutual_friend_score, mutual_network_score,
    ranking_order, score_breakdown, total_score, KeyPresence, RecommendConfig, ScoreBreakdown,
    ScoredCandidate,
};

/// Recommend friends for `subject`, best first.
///
/// Unknown subjects get recommendations too (they simply have no friends to
/// exclude); an empty graph yields none.
pub fn recommend(
    graph: &SocialGraph,
    subject: &Person,
    config: &RecommendConfig,
) -> Vec<ScoredCandidate> {
    if config.min_score == 0 {
        warn!("min_score 0 would recommend unrelated people; using 1");
    }

    let results = befriend_algorithms::recommend_with(
        subject.as_str(),
        graph.friends(),
        graph.networks(),
        config,
    );

    debug!(
        "Recommended {} people for {} (known: {})",
        results.len(),
        subject,
        graph.friends().contains(subject.as_str())
    );
    results
}

/// Per-rule scores for one (subject, candidate) pair.
pub fn explain(graph: &SocialGraph, subject: &Person, candidate: &Person) -> ScoreBreakdown {
    let breakdown = score_breakdown(
        subject.as_str(),
        candidate.as_str(),
        graph.friends(),
        graph.networks(),
    );
    debug!(
        "Score of {} for {}: {:?} ({:?})",
        candidate,
        subject,
        breakdown,
        KeyPresence::of(subject.as_str(), candidate.as_str(), graph.friends())
    );
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str) -> Person {
        Person::new(name).unwrap()
    }

    #[test]
    fn test_recommend_through_graph() {
        let graph = SocialGraph::from_lists(
            [
                ("Jay Pritchett", vec!["Gloria Pritchett"]),
                ("Gloria Pritchett", vec!["Jay Pritchett", "Manny Delgado"]),
                ("Manny Delgado", vec!["Gloria Pritchett"]),
            ],
            [
                ("Jay Pritchett", vec!["Golf Club"]),
                ("Manny Delgado", vec!["Golf Club"]),
            ],
        )
        .unwrap();

        let results = recommend(&graph, &person("Jay Pritchett"), &RecommendConfig::default());
        assert_eq!(results, vec![ScoredCandidate::new("Manny Delgado", 2)]);

        let breakdown = explain(&graph, &person("Jay Pritchett"), &person("Manny Delgado"));
        assert_eq!(breakdown.friend, 1);
        assert_eq!(breakdown.network, 1);
        assert_eq!(breakdown.family, 0);
    }

    #[test]
    fn test_zero_min_score_is_clamped() {
        let graph = SocialGraph::from_lists(
            [("Jay Pritchett", vec!["Gloria Pritchett"]), ("Luke Dunphy", vec![])],
            Vec::new(),
        )
        .unwrap();
        let config = RecommendConfig {
            min_score: 0,
            limit: None,
        };

        assert!(recommend(&graph, &person("Jay Pritchett"), &config).is_empty());
    }
}
