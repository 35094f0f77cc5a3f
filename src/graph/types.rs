//! Core type definitions for the social graph

use super::store::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A person, identified by their display name in `"GivenName(s) Surname"` form
///
/// The surname is the text after the last space and may be hyphenated; the
/// given names are everything before it. Both parts are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Person(String);

impl Person {
    pub fn new(name: impl Into<String>) -> GraphResult<Self> {
        let name = name.into();
        match name.rfind(' ') {
            Some(idx) if !name[..idx].trim().is_empty() && idx + 1 < name.len() => {
                Ok(Person(name))
            }
            _ => Err(GraphError::InvalidPersonName(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn surname(&self) -> &str {
        befriend_algorithms::surname(&self.0)
    }

    pub fn given_names(&self) -> &str {
        befriend_algorithms::given_names(&self.0)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Person {
    type Error = GraphError;

    fn try_from(s: String) -> GraphResult<Self> {
        Person::new(s)
    }
}

impl TryFrom<&str> for Person {
    type Error = GraphError;

    fn try_from(s: &str) -> GraphResult<Self> {
        Person::new(s)
    }
}

impl From<Person> for String {
    fn from(person: Person) -> Self {
        person.0
    }
}

impl AsRef<str> for Person {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Affiliation group name (e.g., "Chess Club", "Law Association")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Network(String);

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Network(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Network {
    fn from(s: String) -> Self {
        Network(s)
    }
}

impl From<&str> for Network {
    fn from(s: &str) -> Self {
        Network(s.to_string())
    }
}
