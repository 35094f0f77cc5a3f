//! Befriend CLI — command-line interface for friend recommendations
//!
//! Loads a profile file and runs recommendation queries and reports over it.

use anyhow::{Context, Result};
use befriend::{algo, load_profiles_from_path, Config, Person, SocialGraph};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "befriend", version, about = "Friend recommendations for small social graphs")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "BEFRIEND_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend friends for a person
    Recommend {
        /// Profile file
        profiles: PathBuf,

        /// Person to recommend for, as "GivenName(s) Surname"
        person: String,

        /// Maximum number of recommendations
        #[arg(long)]
        limit: Option<usize>,

        /// Lowest score to include
        #[arg(long)]
        min_score: Option<u32>,
    },
    /// Show how a candidate's score for a person is made up
    Explain {
        profiles: PathBuf,
        person: String,
        candidate: String,
    },
    /// List families (people grouped by surname)
    Families { profiles: PathBuf },
    /// List members of each network
    Networks { profiles: PathBuf },
    /// List friends of a person's friends
    FriendsOfFriends { profiles: PathBuf, person: String },
    /// Show graph statistics
    Stats { profiles: PathBuf },
}

/// Rows ready for printing in any output format
struct Report {
    columns: Vec<&'static str>,
    records: Vec<Vec<Value>>,
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    init_tracing(&config.logging.level);

    let result = run(cli.command, &config).and_then(|report| print_report(&report, &cli.format));

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands, config: &Config) -> Result<Report> {
    match command {
        Commands::Recommend {
            profiles,
            person,
            limit,
            min_score,
        } => {
            let mut settings = config.recommend_config();
            if let Some(limit) = limit {
                settings.limit = Some(limit);
            }
            if let Some(min_score) = min_score {
                settings.min_score = min_score;
            }
            run_recommend(&load(&profiles)?, &Person::new(person)?, &settings)
        }
        Commands::Explain {
            profiles,
            person,
            candidate,
        } => run_explain(&load(&profiles)?, &Person::new(person)?, &Person::new(candidate)?),
        Commands::Families { profiles } => Ok(run_families(&load(&profiles)?)),
        Commands::Networks { profiles } => Ok(run_networks(&load(&profiles)?)),
        Commands::FriendsOfFriends { profiles, person } => {
            Ok(run_friends_of_friends(&load(&profiles)?, &Person::new(person)?))
        }
        Commands::Stats { profiles } => Ok(run_stats(&load(&profiles)?)),
    }
}

fn load(path: &Path) -> Result<SocialGraph> {
    load_profiles_from_path(path)
        .with_context(|| format!("failed to load profiles from {}", path.display()))
}

fn run_recommend(
    graph: &SocialGraph,
    person: &Person,
    settings: &algo::RecommendConfig,
) -> Result<Report> {
    if !graph.contains(person) {
        tracing::warn!("{} does not appear in the profiles", person);
    }

    let records = algo::recommend(graph, person, settings)
        .into_iter()
        .map(|r| vec![json!(r.person), json!(r.score)])
        .collect();

    Ok(Report {
        columns: vec!["person", "score"],
        records,
    })
}

fn run_explain(graph: &SocialGraph, person: &Person, candidate: &Person) -> Result<Report> {
    if person == candidate {
        anyhow::bail!("cannot score {} against themselves", person);
    }

    let breakdown = algo::explain(graph, person, candidate);
    Ok(Report {
        columns: vec!["candidate", "mutual_friends", "mutual_networks", "family", "total"],
        records: vec![vec![
            json!(candidate.as_str()),
            json!(breakdown.friend),
            json!(breakdown.network),
            json!(breakdown.family),
            json!(breakdown.total()),
        ]],
    })
}

fn run_families(graph: &SocialGraph) -> Report {
    let records = graph
        .families()
        .into_iter()
        .map(|(surname, members)| vec![json!(surname), json!(members)])
        .collect();

    Report {
        columns: vec!["surname", "members"],
        records,
    }
}

fn run_networks(graph: &SocialGraph) -> Report {
    let records = graph
        .invert_networks()
        .into_iter()
        .map(|(network, members)| vec![json!(network), json!(members)])
        .collect();

    Report {
        columns: vec!["network", "members"],
        records,
    }
}

fn run_friends_of_friends(graph: &SocialGraph, person: &Person) -> Report {
    let records = graph
        .friends_of_friends(person)
        .into_iter()
        .map(|name| vec![json!(name)])
        .collect();

    Report {
        columns: vec!["person"],
        records,
    }
}

fn run_stats(graph: &SocialGraph) -> Report {
    let stats = graph.statistics();
    Report {
        columns: vec![
            "people",
            "people_with_friends",
            "friendships",
            "networks",
            "average_friend_count",
        ],
        records: vec![vec![
            json!(stats.people),
            json!(stats.people_with_friends),
            json!(stats.friendships),
            json!(stats.networks),
            json!(stats.average_friend_count),
        ]],
    }
}

fn print_report(report: &Report, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<Value> = report
                .records
                .iter()
                .map(|row| {
                    let object = report
                        .columns
                        .iter()
                        .zip(row)
                        .map(|(column, value)| (column.to_string(), value.clone()))
                        .collect();
                    Value::Object(object)
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Csv => {
            println!("{}", report.columns.join(","));
            for row in &report.records {
                let cells: Vec<String> = row.iter().map(format_csv_value).collect();
                println!("{}", cells.join(","));
            }
        }
        OutputFormat::Table => {
            if report.records.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(&report.columns);

            for row in &report.records {
                let cells: Vec<String> = row.iter().map(format_table_value).collect();
                table.add_row(cells);
            }

            println!("{}", table);
            println!("{} row(s)", report.records.len());
        }
    }

    Ok(())
}

fn format_table_value(v: &Value) -> String {
    match v {
        Value::Null => "".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(format_table_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => serde_json::to_string(v).unwrap_or_default(),
    }
}

fn format_csv_value(v: &Value) -> String {
    let text = match v {
        Value::Null => return "".to_string(),
        Value::Array(items) => items
            .iter()
            .map(format_table_value)
            .collect::<Vec<_>>()
            .join("; "),
        other => format_table_value(other),
    };

    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}
