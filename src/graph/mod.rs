//! Social graph data model
//!
//! This module holds:
//! - Validated person names and affiliation groups
//! - The read-only [`SocialGraph`] snapshot handed to the recommendation engine
//! - Reports over the snapshot (families, network membership, statistics)

pub mod store;
pub mod types;

// Re-export main types
pub use store::{GraphError, GraphResult, GraphStatistics, SocialGraph, SocialGraphBuilder};
pub use types::{Network, Person};
