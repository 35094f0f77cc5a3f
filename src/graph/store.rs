//! In-memory social graph snapshot
//!
//! A [`SocialGraph`] pairs the friendship and affiliation views consumed by
//! the recommendation algorithms. It is only ever built from validated
//! [`Person`] names, through [`SocialGraphBuilder`] or [`SocialGraph::from_lists`],
//! and is read-only once built.

use super::types::{Network, Person};
use befriend_algorithms::{given_names, surname, FriendGraph, NetworkGraph};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while building a social graph
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Invalid person name {0:?}: expected \"GivenName(s) Surname\"")]
    InvalidPersonName(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStatistics {
    /// Distinct people mentioned anywhere
    pub people: usize,
    /// People with a friend list of their own
    pub people_with_friends: usize,
    /// Total (person, friend) entries
    pub friendships: usize,
    /// Distinct affiliation groups
    pub networks: usize,
    pub average_friend_count: f64,
}

/// Read-only social graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialGraph {
    friends: FriendGraph,
    networks: NetworkGraph,
}

impl SocialGraph {
    pub fn builder() -> SocialGraphBuilder {
        SocialGraphBuilder::default()
    }

    /// Build a graph from plain name lists, validating every name.
    ///
    /// A person listed with no friends still gets an (empty) entry.
    pub fn from_lists<S: AsRef<str>>(
        friends: impl IntoIterator<Item = (S, Vec<S>)>,
        networks: impl IntoIterator<Item = (S, Vec<S>)>,
    ) -> GraphResult<Self> {
        let mut builder = Self::builder();

        for (person, list) in friends {
            let person = Person::new(person.as_ref())?;
            builder.add_person(&person);
            for friend in list {
                builder.add_friend(&person, &Person::new(friend.as_ref())?);
            }
        }

        for (person, groups) in networks {
            let person = Person::new(person.as_ref())?;
            for group in groups {
                builder.add_network(&person, &Network::new(group.as_ref()));
            }
        }

        Ok(builder.build())
    }

    pub fn friends(&self) -> &FriendGraph {
        &self.friends
    }

    pub fn networks(&self) -> &NetworkGraph {
        &self.networks
    }

    /// Whether `person` is mentioned anywhere in the graph
    pub fn contains(&self, person: &Person) -> bool {
        let name = person.as_str();
        self.friends.contains(name)
            || self.networks.contains(name)
            || self.friends.iter().any(|(_, list)| list.iter().any(|f| f == name))
    }

    /// Distinct people in first-seen order: friend-list keys with their
    /// friends, then people only known through networks.
    pub fn people(&self) -> IndexSet<&str> {
        let mut people = IndexSet::new();
        for (person, list) in self.friends.iter() {
            people.insert(person);
            people.extend(list.iter().map(String::as_str));
        }
        people.extend(self.networks.iter().map(|(person, _)| person));
        people
    }

    /// Mean friend-list length over people with a list of their own; 0.0 if none.
    pub fn average_friend_count(&self) -> f64 {
        if self.friends.is_empty() {
            return 0.0;
        }
        self.friends.friendship_count() as f64 / self.friends.len() as f64
    }

    /// Surname → sorted given names of everyone in the friend graph.
    ///
    /// Surnames appear in first-seen order.
    pub fn families(&self) -> IndexMap<String, Vec<String>> {
        let mut families: IndexMap<String, Vec<String>> = IndexMap::new();

        for (person, list) in self.friends.iter() {
            for name in std::iter::once(person).chain(list.iter().map(String::as_str)) {
                let members = families.entry(surname(name).to_string()).or_default();
                let given = given_names(name);
                if !members.iter().any(|m| m == given) {
                    members.push(given.to_string());
                }
            }
        }

        for members in families.values_mut() {
            members.sort();
        }
        families
    }

    /// Affiliation group → members, both in first-seen order.
    pub fn invert_networks(&self) -> IndexMap<String, Vec<String>> {
        let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
        for (person, networks) in self.networks.iter() {
            for network in networks {
                groups
                    .entry(network.clone())
                    .or_default()
                    .push(person.to_string());
            }
        }
        groups
    }

    /// Sorted friends of `person`'s friends, excluding `person`.
    ///
    /// Someone reachable through several friends appears once per friend.
    pub fn friends_of_friends(&self, person: &Person) -> Vec<String> {
        let name = person.as_str();
        let mut result: Vec<String> = self
            .friends
            .friends_of(name)
            .iter()
            .flat_map(|friend| self.friends.friends_of(friend))
            .filter(|other| *other != name)
            .cloned()
            .collect();
        result.sort();
        result
    }

    pub fn statistics(&self) -> GraphStatistics {
        let networks: IndexSet<&str> = self
            .networks
            .iter()
            .flat_map(|(_, groups)| groups.iter().map(String::as_str))
            .collect();

        GraphStatistics {
            people: self.people().len(),
            people_with_friends: self.friends.len(),
            friendships: self.friends.friendship_count(),
            networks: networks.len(),
            average_friend_count: self.average_friend_count(),
        }
    }
}

/// Incrementally assembles a [`SocialGraph`]
///
/// Friend and network additions are deduplicated per person, keeping the
/// first occurrence. Friendships are recorded one way only.
#[derive(Debug, Default)]
pub struct SocialGraphBuilder {
    friends: FriendGraph,
    networks: NetworkGraph,
}

impl SocialGraphBuilder {
    pub fn add_person(&mut self, person: &Person) -> &mut Self {
        self.friends.add_person(person.as_str());
        self
    }

    pub fn add_friend(&mut self, person: &Person, friend: &Person) -> &mut Self {
        self.friends.insert(person.as_str(), friend.as_str());
        self
    }

    pub fn add_network(&mut self, person: &Person, network: &Network) -> &mut Self {
        self.networks.insert(person.as_str(), network.as_str());
        self
    }

    pub fn build(self) -> SocialGraph {
        SocialGraph {
            friends: self.friends,
            networks: self.networks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str) -> Person {
        Person::new(name).unwrap()
    }

    fn sample_graph() -> SocialGraph {
        SocialGraph::from_lists(
            [
                ("Jay Pritchett", vec!["Claire Dunphy", "Gloria Pritchett", "Manny Delgado"]),
                ("Claire Dunphy", vec!["Jay Pritchett", "Mitchell Pritchett", "Phil Dunphy"]),
                ("Manny Delgado", vec!["Gloria Pritchett", "Jay Pritchett", "Luke Dunphy"]),
                ("Mitchell Pritchett", vec!["Cameron Tucker", "Claire Dunphy", "Luke Dunphy"]),
                ("Phil Dunphy", vec!["Claire Dunphy", "Luke Dunphy"]),
                ("Gloria Pritchett", vec!["Cameron Tucker", "Jay Pritchett", "Manny Delgado"]),
            ],
            [("Claire Dunphy", vec!["Parent Teacher Association"])],
        )
        .unwrap()
    }

    #[test]
    fn test_from_lists_rejects_bad_names() {
        let err = SocialGraph::from_lists(
            [("Jay Pritchett", vec!["Cher"])],
            Vec::new(),
        )
        .unwrap_err();
        assert_eq!(err, GraphError::InvalidPersonName("Cher".to_string()));

        let err = SocialGraph::from_lists(Vec::new(), [("Madonna", vec!["Chess Club"])])
            .unwrap_err();
        assert_eq!(err, GraphError::InvalidPersonName("Madonna".to_string()));
    }

    #[test]
    fn test_builder_deduplicates_one_way() {
        let jay = person("Jay Pritchett");
        let claire = person("Claire Dunphy");
        let chess = Network::new("Chess Club");

        let mut builder = SocialGraph::builder();
        builder
            .add_friend(&jay, &claire)
            .add_friend(&jay, &claire)
            .add_network(&claire, &chess)
            .add_network(&claire, &chess);
        let graph = builder.build();

        assert_eq!(graph.friends().friends_of("Jay Pritchett"), ["Claire Dunphy"]);
        assert!(!graph.friends().contains("Claire Dunphy"));
        assert_eq!(graph.networks().networks("Claire Dunphy").unwrap(), ["Chess Club"]);
        assert!(graph.contains(&claire));
        assert!(!graph.contains(&person("Luke Dunphy")));
    }

    #[test]
    fn test_average_friend_count() {
        assert_eq!(SocialGraph::default().average_friend_count(), 0.0);

        let graph = SocialGraph::from_lists(
            [
                ("Jay Pritchett", vec!["Claire Dunphy", "Dylan D-Money"]),
                ("Manny Delgado", vec!["Phil Dunphy", "Luke Dunphy", "Claire Dunphy"]),
                ("Gloria Pritchett", vec!["Haley Gwendolyn Dunphy"]),
            ],
            Vec::new(),
        )
        .unwrap();
        assert_eq!(graph.average_friend_count(), 2.0);
    }

    #[test]
    fn test_families() {
        assert!(SocialGraph::default().families().is_empty());

        let graph = SocialGraph::from_lists(
            [
                ("Claire Dunphy", vec!["Luke Dunphy", "Manny Delgado"]),
                ("Gloria Pritchett", vec!["Haley Gwendolyn Dunphy"]),
                ("Jay Pritchett", vec!["Luke Dunphy"]),
            ],
            Vec::new(),
        )
        .unwrap();

        let families = graph.families();
        let surnames: Vec<_> = families.keys().map(String::as_str).collect();
        assert_eq!(surnames, vec!["Dunphy", "Delgado", "Pritchett"]);
        assert_eq!(families["Dunphy"], ["Claire", "Haley Gwendolyn", "Luke"]);
        assert_eq!(families["Delgado"], ["Manny"]);
        assert_eq!(families["Pritchett"], ["Gloria", "Jay"]);
    }

    #[test]
    fn test_invert_networks() {
        let graph = SocialGraph::from_lists(
            Vec::new(),
            [
                ("Meredith Shepherd-Grey", vec!["Parent Teacher Association"]),
                ("Amelia Hunt", vec!["Yachting Association", "Knitting Club"]),
                ("Alex Michael Karev", vec!["Knitting Club", "Ethics Board"]),
                (
                    "Owen Hunt",
                    vec!["Yachting Association", "Parent Teacher Association", "Knitting Club"],
                ),
            ],
        )
        .unwrap();

        let groups = graph.invert_networks();
        let names: Vec<_> = groups.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec![
                "Parent Teacher Association",
                "Yachting Association",
                "Knitting Club",
                "Ethics Board"
            ]
        );
        assert_eq!(
            groups["Parent Teacher Association"],
            ["Meredith Shepherd-Grey", "Owen Hunt"]
        );
        assert_eq!(
            groups["Knitting Club"],
            ["Amelia Hunt", "Alex Michael Karev", "Owen Hunt"]
        );
        assert_eq!(groups["Ethics Board"], ["Alex Michael Karev"]);
    }

    #[test]
    fn test_friends_of_friends() {
        let graph = sample_graph();

        assert_eq!(
            graph.friends_of_friends(&person("Jay Pritchett")),
            vec![
                "Cameron Tucker",
                "Gloria Pritchett",
                "Luke Dunphy",
                "Manny Delgado",
                "Mitchell Pritchett",
                "Phil Dunphy"
            ]
        );
        assert_eq!(
            graph.friends_of_friends(&person("Claire Dunphy")),
            vec![
                "Cameron Tucker",
                "Gloria Pritchett",
                "Luke Dunphy",
                "Luke Dunphy",
                "Manny Delgado"
            ]
        );
        assert!(graph.friends_of_friends(&person("John Smith")).is_empty());
    }

    #[test]
    fn test_statistics() {
        let stats = sample_graph().statistics();

        assert_eq!(stats.people, 8);
        assert_eq!(stats.people_with_friends, 6);
        assert_eq!(stats.friendships, 17);
        assert_eq!(stats.networks, 1);
        assert!((stats.average_friend_count - 17.0 / 6.0).abs() < 1e-9);
    }
}
