//! Pairwise recommendation scoring
//!
//! A (subject, candidate) pair earns points from three independent rules:
//! mutual friends, shared networks, and a one-point family bonus. The parts
//! are summed without weighting.

use super::common::{surname, FriendGraph, NetworkGraph};
use rustc_hash::FxHashSet;

/// Which of the two people have an entry of their own in the friend graph.
///
/// Friend data is neither complete nor symmetric, so the mutual-friend rule
/// picks its evaluation mode from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPresence {
    BothKnown,
    SubjectKnown,
    CandidateKnown,
    NeitherKnown,
}

impl KeyPresence {
    pub fn of(subject: &str, candidate: &str, graph: &FriendGraph) -> Self {
        match (graph.contains(subject), graph.contains(candidate)) {
            (true, true) => KeyPresence::BothKnown,
            (true, false) => KeyPresence::SubjectKnown,
            (false, true) => KeyPresence::CandidateKnown,
            (false, false) => KeyPresence::NeitherKnown,
        }
    }
}

/// The three sub-scores of one (subject, candidate) pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    pub friend: u32,
    pub network: u32,
    /// Always 0 or 1
    pub family: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.friend + self.network + self.family
    }
}

/// Number of mutual friends between `subject` and `candidate`.
///
/// - Both are keys: people on both lists who are keys themselves and list
///   both of them back.
/// - Only one is a key: people on the known person's list who are keys and
///   list the other person.
/// - Neither is a key: 0.
pub fn mutual_friend_score(subject: &str, candidate: &str, graph: &FriendGraph) -> u32 {
    match KeyPresence::of(subject, candidate, graph) {
        KeyPresence::BothKnown => reciprocated_mutuals(subject, candidate, graph),
        KeyPresence::SubjectKnown => one_sided_mutuals(subject, candidate, graph),
        KeyPresence::CandidateKnown => one_sided_mutuals(candidate, subject, graph),
        KeyPresence::NeitherKnown => 0,
    }
}

fn reciprocated_mutuals(subject: &str, candidate: &str, graph: &FriendGraph) -> u32 {
    let candidate_friends = graph.friends_of(candidate);
    count_distinct(graph.friends_of(subject).iter().filter(|x| {
        candidate_friends.contains(*x) && graph.lists(x, subject) && graph.lists(x, candidate)
    }))
}

fn one_sided_mutuals(known: &str, other: &str, graph: &FriendGraph) -> u32 {
    // `lists` is false for non-keys, so intermediaries must be keys
    count_distinct(graph.friends_of(known).iter().filter(|x| graph.lists(x, other)))
}

fn count_distinct<'a>(people: impl Iterator<Item = &'a String>) -> u32 {
    let mut seen = FxHashSet::default();
    people.filter(|p| seen.insert(p.as_str())).count() as u32
}

/// Number of matching group names between the two membership lists.
///
/// Every group of `subject` scores once per occurrence in `candidate`'s list,
/// so repeated names count repeatedly. 0 if either person has no entry.
pub fn mutual_network_score(subject: &str, candidate: &str, networks: &NetworkGraph) -> u32 {
    match (networks.networks(subject), networks.networks(candidate)) {
        (Some(ours), Some(theirs)) => ours
            .iter()
            .map(|group| theirs.iter().filter(|other| *other == group).count() as u32)
            .sum(),
        _ => 0,
    }
}

/// 1 when the two share a surname and have at least one mutual friend or
/// network, otherwise 0.
pub fn mutual_family_score(
    subject: &str,
    candidate: &str,
    friends: &FriendGraph,
    networks: &NetworkGraph,
) -> u32 {
    family_bonus(
        subject,
        candidate,
        mutual_friend_score(subject, candidate, friends),
        mutual_network_score(subject, candidate, networks),
    )
}

fn family_bonus(subject: &str, candidate: &str, friend: u32, network: u32) -> u32 {
    u32::from(surname(subject) == surname(candidate) && (friend >= 1 || network >= 1))
}

/// All three sub-scores for one pair, computing each rule once.
pub fn score_breakdown(
    subject: &str,
    candidate: &str,
    friends: &FriendGraph,
    networks: &NetworkGraph,
) -> ScoreBreakdown {
    let friend = mutual_friend_score(subject, candidate, friends);
    let network = mutual_network_score(subject, candidate, networks);
    ScoreBreakdown {
        friend,
        network,
        family: family_bonus(subject, candidate, friend, network),
    }
}

/// Combined score of `candidate` as a recommendation for `subject`.
pub fn total_score(
    subject: &str,
    candidate: &str,
    friends: &FriendGraph,
    networks: &NetworkGraph,
) -> u32 {
    score_breakdown(subject, candidate, friends, networks).total()
}
