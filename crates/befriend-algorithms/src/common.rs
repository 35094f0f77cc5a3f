//! Shared utilities for recommendation algorithms
//!
//! Provides read-only, insertion-ordered views of the friendship and
//! affiliation data the scorers run over.

use indexmap::IndexMap;

/// Person → declared friends, in declaration order.
///
/// The mapping is not required to be symmetric: `A` may list `B` while `B`'s
/// list omits `A`, and some people only ever appear as friend-list values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FriendGraph {
    adjacency: IndexMap<String, Vec<String>>,
}

impl FriendGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Helper to create a FriendGraph from adjacency lists.
    ///
    /// Every key is kept even when its list is empty. Repeated friends are
    /// dropped, keeping the first occurrence.
    pub fn from_adjacency<I, P, F>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (P, F)>,
        P: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        let mut graph = Self::new();
        for (person, friends) in adjacency {
            let list = graph.adjacency.entry(person.into()).or_default();
            for friend in friends {
                let friend = friend.into();
                if !list.contains(&friend) {
                    list.push(friend);
                }
            }
        }
        graph
    }

    /// Give `person` an entry of their own, with no friends if they had none.
    pub fn add_person(&mut self, person: impl Into<String>) {
        self.adjacency.entry(person.into()).or_default();
    }

    /// Record that `person` lists `friend`. Returns false if already listed.
    pub fn insert(&mut self, person: impl Into<String>, friend: impl Into<String>) -> bool {
        let list = self.adjacency.entry(person.into()).or_default();
        let friend = friend.into();
        if list.contains(&friend) {
            return false;
        }
        list.push(friend);
        true
    }

    /// Whether `person` has an entry of their own (is a key).
    pub fn contains(&self, person: &str) -> bool {
        self.adjacency.contains_key(person)
    }

    /// Declared friends of `person`, or None if they are not a key.
    pub fn friends(&self, person: &str) -> Option<&[String]> {
        self.adjacency.get(person).map(Vec::as_slice)
    }

    /// Declared friends of `person`; unknown people have none.
    pub fn friends_of(&self, person: &str) -> &[String] {
        self.friends(person).unwrap_or(&[])
    }

    /// Whether `person`'s own list contains `other`.
    pub fn lists(&self, person: &str, other: &str) -> bool {
        self.friends_of(person).iter().any(|f| f == other)
    }

    /// People that are keys, in insertion order.
    pub fn people(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.adjacency
            .iter()
            .map(|(person, friends)| (person.as_str(), friends.as_slice()))
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Total number of (person, friend) entries across all lists
    pub fn friendship_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

/// Person → affiliation groups, in declaration order.
///
/// People without an entry belong to no group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NetworkGraph {
    memberships: IndexMap<String, Vec<String>>,
}

impl NetworkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Helper to create a NetworkGraph from membership lists.
    ///
    /// Unlike [`FriendGraph::from_adjacency`], lists are taken verbatim so that
    /// callers can observe how repeated group names are counted.
    pub fn from_memberships<I, P, N>(memberships: I) -> Self
    where
        I: IntoIterator<Item = (P, N)>,
        P: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let memberships: IndexMap<String, Vec<String>> = memberships
            .into_iter()
            .map(|(person, groups)| (person.into(), groups.into_iter().map(Into::into).collect()))
            .collect();
        Self { memberships }
    }

    /// Record that `person` belongs to `network`. Returns false if already recorded.
    pub fn insert(&mut self, person: impl Into<String>, network: impl Into<String>) -> bool {
        let list = self.memberships.entry(person.into()).or_default();
        let network = network.into();
        if list.contains(&network) {
            return false;
        }
        list.push(network);
        true
    }

    pub fn contains(&self, person: &str) -> bool {
        self.memberships.contains_key(person)
    }

    /// Groups of `person`, or None if they have no entry.
    pub fn networks(&self, person: &str) -> Option<&[String]> {
        self.memberships.get(person).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.memberships
            .iter()
            .map(|(person, groups)| (person.as_str(), groups.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.memberships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memberships.is_empty()
    }
}

/// Surname part of a display name: the text after the last space.
pub fn surname(name: &str) -> &str {
    match name.rfind(' ') {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}

/// Given-name part of a display name: everything before the last space.
pub fn given_names(name: &str) -> &str {
    match name.rfind(' ') {
        Some(idx) => &name[..idx],
        None => "",
    }
}
