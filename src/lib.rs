//! Befriend
//!
//! Friend recommendations for small in-memory social graphs. A candidate's
//! score for a subject combines three signals:
//!
//! - mutual friends (with graceful handling of one-sided friend data)
//! - shared affiliation groups ("networks")
//! - a one-point family bonus for a shared surname backed by any overlap
//!
//! Candidates are ranked by score (highest first), then by name.
//!
//! # Layout
//!
//! - `befriend-algorithms`: the pure scoring/ranking engine
//! - [`graph`]: validated names and the read-only [`SocialGraph`] snapshot
//! - [`profile`]: profile file ingestion
//! - [`algo`]: adapter running the engine over a [`SocialGraph`]
//! - [`config`]: YAML configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use befriend::{algo, Person, RecommendConfig, SocialGraph};
//!
//! let graph = SocialGraph::from_lists(
//!     [
//!         ("Jay Pritchett", vec!["Gloria Pritchett"]),
//!         ("Gloria Pritchett", vec!["Jay Pritchett", "Manny Delgado"]),
//!     ],
//!     [("Jay Pritchett", vec!["Chess Club"])],
//! )
//! .unwrap();
//!
//! let jay = Person::new("Jay Pritchett").unwrap();
//! let results = algo::recommend(&graph, &jay, &RecommendConfig::default());
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].person, "Manny Delgado");
//! assert_eq!(results[0].score, 1);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod graph;
pub mod profile;

// Re-export main types for convenience
pub use graph::{
    GraphError, GraphResult, GraphStatistics, Network, Person, SocialGraph, SocialGraphBuilder,
};

pub use algo::{RecommendConfig, ScoreBreakdown, ScoredCandidate};

pub use config::{Config, ConfigError, ConfigResult};

pub use profile::{
    convert_name, load_profiles, load_profiles_from_path, parse_profiles, ProfileError,
    ProfileResult,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
