use befriend::{load_profiles_from_path, parse_profiles, Person, ProfileError};
use std::io::Write;
use std::path::Path;

fn fixture_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/profiles.txt")
}

#[test]
fn test_load_fixture_from_disk() {
    let graph = load_profiles_from_path(fixture_path()).unwrap();

    assert_eq!(graph.friends().len(), 11);
    assert_eq!(graph.networks().len(), 7);
    assert_eq!(
        graph.friends().friends_of("Jay Pritchett"),
        ["Claire Dunphy", "Gloria Pritchett", "Manny Delgado"]
    );
    assert_eq!(
        graph.networks().networks("Cameron Tucker").unwrap(),
        ["Clown School", "Wizard of Oz Fan Club"]
    );
    // Only listed by Dylan, never given a record of their own
    assert!(!graph.friends().contains("Chairman D-Cat"));

    let stats = graph.statistics();
    assert_eq!(stats.people, 13);
    assert_eq!(stats.friendships, 28);
    assert_eq!(stats.networks, 7);
}

#[test]
fn test_load_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "Shepherd-Grey, Meredith\nShepherd-Grey, Derek\nParent Teacher Association\n\n\
         Karev, Alex Michael\nShepherd-Grey, Meredith\nHunt, Amelia\n"
    )
    .unwrap();

    let graph = load_profiles_from_path(file.path()).unwrap();
    assert_eq!(
        graph.friends().friends_of("Alex Michael Karev"),
        ["Meredith Shepherd-Grey", "Amelia Hunt"]
    );

    let families = graph.families();
    assert_eq!(families["Shepherd-Grey"], ["Derek", "Meredith"]);
    assert_eq!(families["Karev"], ["Alex Michael"]);
    assert_eq!(families["Hunt"], ["Amelia"]);
}

#[test]
fn test_missing_file() {
    let err = load_profiles_from_path("/nonexistent/profiles.txt").unwrap_err();
    assert!(matches!(err, ProfileError::Io(_)));
}

#[test]
fn test_reports_on_fixture() {
    let graph = parse_profiles(include_str!("fixtures/profiles.txt")).unwrap();

    let networks = graph.invert_networks();
    assert_eq!(
        networks["Parent Teacher Association"],
        ["Claire Dunphy", "Gloria Pritchett"]
    );
    assert_eq!(networks["Chess Club"], ["Manny Delgado", "Alex Dunphy"]);

    let families = graph.families();
    assert_eq!(
        families["Dunphy"],
        ["Alex", "Claire", "Haley Gwendolyn", "Luke", "Phil"]
    );
    assert_eq!(families["D-Cat"], ["Chairman", "Gilbert"]);

    let jay = Person::new("Jay Pritchett").unwrap();
    assert_eq!(
        graph.friends_of_friends(&jay),
        vec![
            "Cameron Tucker",
            "Gloria Pritchett",
            "Luke Dunphy",
            "Manny Delgado",
            "Mitchell Pritchett",
            "Phil Dunphy"
        ]
    );
}
