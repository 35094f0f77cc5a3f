//! Profile file ingestion
//!
//! A profile file is a sequence of records separated by blank lines:
//!
//! ```text
//! Pritchett, Jay
//! Dunphy, Claire
//! Chess Club
//!
//! Dunphy, Claire
//! Pritchett, Jay
//! ```
//!
//! The first line of a record names the person as `"Surname, GivenName(s)"`.
//! Every following line containing a comma is a friend in the same form; any
//! other line is an affiliation group. Each load produces a fresh
//! [`SocialGraph`].

use crate::graph::{GraphError, Network, Person, SocialGraph};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Profile loading errors
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: expected \"Surname, GivenName(s)\", found {text:?}")]
    MalformedName { line: usize, text: String },

    #[error("Line {line}: {source}")]
    InvalidPerson {
        line: usize,
        #[source]
        source: GraphError,
    },
}

pub type ProfileResult<T> = Result<T, ProfileError>;

/// Convert `"Surname, GivenName(s)"` to `"GivenName(s) Surname"`.
///
/// Returns None when the text has no comma.
pub fn convert_name(name: &str) -> Option<String> {
    let (surname, given) = name.split_once(',')?;
    Some(format!("{} {}", given.trim(), surname.trim()))
}

fn parse_person(text: &str, line: usize) -> ProfileResult<Person> {
    let converted = convert_name(text).ok_or_else(|| ProfileError::MalformedName {
        line,
        text: text.to_string(),
    })?;
    Person::new(converted).map_err(|source| ProfileError::InvalidPerson { line, source })
}

/// Load profiles from any buffered reader.
pub fn load_profiles<R: BufRead>(reader: R) -> ProfileResult<SocialGraph> {
    let mut builder = SocialGraph::builder();
    let mut current: Option<Person> = None;
    let mut records = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let text = line.trim_end();

        if text.is_empty() {
            current = None;
            continue;
        }

        match &current {
            None => {
                let person = parse_person(text, line_no)?;
                debug!("Reading profile of {}", person);
                current = Some(person);
                records += 1;
            }
            Some(person) if text.contains(',') => {
                builder.add_friend(person, &parse_person(text, line_no)?);
            }
            Some(person) => {
                builder.add_network(person, &Network::new(text));
            }
        }
    }

    let graph = builder.build();
    info!(
        "Loaded {} profiles ({} people, {} friendships)",
        records,
        graph.people().len(),
        graph.friends().friendship_count()
    );
    Ok(graph)
}

/// Load profiles from a file on disk.
pub fn load_profiles_from_path(path: impl AsRef<Path>) -> ProfileResult<SocialGraph> {
    let path = path.as_ref();
    debug!("Opening profile file {}", path.display());
    let file = File::open(path)?;
    load_profiles(BufReader::new(file))
}

/// Load profiles from an in-memory string.
pub fn parse_profiles(text: &str) -> ProfileResult<SocialGraph> {
    load_profiles(text.as_bytes())
}
