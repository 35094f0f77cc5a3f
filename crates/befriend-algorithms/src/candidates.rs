//! Candidate enumeration
//!
//! The candidate pool is everyone mentioned anywhere in the friend graph who
//! is neither the subject nor already one of the subject's friends.

use super::common::FriendGraph;
use indexmap::IndexSet;

/// Build the candidate pool for `subject`.
///
/// Keys are visited first, then friend-list values; a person found both ways
/// appears once. An unknown subject simply has no friends to exclude.
pub fn candidate_pool<'g>(subject: &str, graph: &'g FriendGraph) -> IndexSet<&'g str> {
    let own_friends = graph.friends_of(subject);
    let is_candidate = |person: &str| person != subject && !own_friends.iter().any(|f| f == person);

    let mut pool = IndexSet::new();

    // 1. Keys
    for person in graph.people() {
        if is_candidate(person) {
            pool.insert(person);
        }
    }

    // 2. Friend-list values
    for (_, friends) in graph.iter() {
        for friend in friends {
            if is_candidate(friend) {
                pool.insert(friend.as_str());
            }
        }
    }

    pool
}
