pub mod common;
pub mod candidates;
pub mod scoring;
pub mod ranking;

pub use common::{given_names, surname, FriendGraph, NetworkGraph};
pub use candidates::candidate_pool;
pub use scoring::{
    mutual_family_score, mutual_friend_score, mutual_network_score, score_breakdown, total_score,
    KeyPresence, ScoreBreakdown,
};
pub use ranking::{ranking_order, recommend, recommend_with, RecommendConfig, ScoredCandidate};
