use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use scorebook::config::{self, SourceConfig};
use scorebook::engine::QueryEngine;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scorebook",
    about = "Aggregate queries over cricket-tournament datasets",
    version
)]
pub struct Cli {
    /// Path to a JSON config file naming the dataset locations
    #[arg(long, env = "SCOREBOOK_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the matches dataset location (URL or file path)
    #[arg(
        long,
        env = "SCOREBOOK_MATCHES_SOURCE",
        global = true,
        value_name = "LOCATION"
    )]
    pub matches_source: Option<String>,

    /// Override the batter run totals dataset location (URL or file path)
    #[arg(
        long,
        env = "SCOREBOOK_BATTER_RUNS_SOURCE",
        global = true,
        value_name = "LOCATION"
    )]
    pub batter_runs_source: Option<String>,

    /// Override the deliveries dataset location (URL or file path)
    #[arg(
        long,
        env = "SCOREBOOK_DELIVERIES_SOURCE",
        global = true,
        value_name = "LOCATION"
    )]
    pub deliveries_source: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every team appearing on either side of any match
    Teams,
    /// Win/loss/draw record between two teams across all their meetings
    HeadToHead {
        /// First team name, exactly as it appears in the dataset
        team_a: String,
        /// Second team name
        team_b: String,
    },
    /// One team's played/won/lost/no-result/title counts
    TeamRecord {
        /// Team name, exactly as it appears in the dataset
        team: String,
    },
    /// Tournament winner per season, taken from each season's Final
    SeasonWinners,
    /// Venue name per host city
    Venues,
    /// One team's record at a venue city, with win percentage
    TeamAtVenue {
        /// Team name, exactly as it appears in the dataset
        team: String,
        /// Host city name
        city: String,
    },
    /// Batter ranking table by career runs, rank 1 first
    BattingRanks,
    /// One batter's runs against each opposing team
    BatterVsTeams {
        /// Batter name, exactly as it appears in the dataset
        batter: String,
    },
    /// Print the resolved dataset locations without fetching anything
    Sources,
}

pub fn run_command(cli: Cli) -> Result<()> {
    let sources = resolve_sources(&cli)?;
    let engine = QueryEngine::new(sources);

    match cli.command {
        Commands::Teams => render(engine.teams()),
        Commands::HeadToHead { team_a, team_b } => render(engine.head_to_head(&team_a, &team_b)),
        Commands::TeamRecord { team } => render(engine.team_record(&team)),
        Commands::SeasonWinners => render(engine.season_winners()),
        Commands::Venues => render(engine.venues()),
        Commands::TeamAtVenue { team, city } => render(engine.team_at_venue(&team, &city)),
        Commands::BattingRanks => render(engine.batter_rankings()),
        Commands::BatterVsTeams { batter } => render(engine.batter_vs_teams(&batter)),
        Commands::Sources => print_json(engine.provider().sources()),
    }
}

/// Config file (explicit or discovered), then per-dataset overrides from
/// flags or environment on top.
fn resolve_sources(cli: &Cli) -> Result<SourceConfig> {
    let sources = config::load_source_config(cli.config.as_deref())?.with_overrides(
        cli.matches_source.clone(),
        cli.batter_runs_source.clone(),
        cli.deliveries_source.clone(),
    );
    Ok(sources)
}

/// The error envelope the query surface promises: a mapping whose only key
/// is "Message", structurally distinct from every success shape.
#[derive(Serialize)]
struct MessageBody {
    #[serde(rename = "Message")]
    message: String,
}

/// Print a query result as pretty JSON on stdout.
///
/// `InvalidInput` is a success at this boundary: the original service
/// answered bad names with a `{"Message": …}` body and status 200, and the
/// CLI keeps that shape with exit status 0. Only `DataUnavailable` fails
/// the process.
fn render<T: Serialize>(result: scorebook::error::Result<T>) -> Result<()> {
    match result {
        Ok(value) => print_json(&value),
        Err(err) if err.is_invalid_input() => {
            tracing::debug!("invalid input: {err}");
            print_json(&MessageBody {
                message: err.message().to_owned(),
            })
        }
        Err(err) => Err(err.into()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used)]

    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_message_envelope_uses_the_sentinel_key() {
        let body = MessageBody {
            message: "Invalid Team Name...".to_owned(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"Message":"Invalid Team Name..."}"#);
    }

    #[test]
    fn test_source_overrides_beat_defaults() {
        let cli = Cli::parse_from([
            "scorebook",
            "--matches-source",
            "testdata/matches.csv",
            "teams",
        ]);
        let sources = resolve_sources(&cli).unwrap();
        assert_eq!(sources.matches, "testdata/matches.csv");
        assert_eq!(sources.deliveries, config::DEFAULT_DELIVERIES_URL);
    }
}
