//! CSV text → typed rows.
//!
//! Column names and presence are a hard contract: a missing contracted
//! column fails the whole load. Everything else about the files is
//! permissive — extra columns are ignored, and every column is read as
//! text (schema inference is disabled) so that an unconstrained column can
//! never fail a load. The two contracted numeric columns are parsed here,
//! during row extraction, with row-level diagnostics on failure.

use crate::data::types::{BatterRunRow, DeliveryRow, MatchRow};
use crate::error::{Result, ResultExt as _, ScorebookError};
use polars::prelude::*;
use std::io::Cursor;

fn read_csv(text: String) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        // Read every column as a string; typed fields are parsed during
        // row extraction.
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(text.into_bytes()))
        .finish()?;
    Ok(df)
}

fn str_column<'a>(df: &'a DataFrame, table: &str, name: &str) -> Result<&'a StringChunked> {
    let Ok(column) = df.column(name) else {
        return Err(ScorebookError::data_unavailable(format!(
            "{table} dataset is missing required column '{name}'"
        )));
    };
    column.as_materialized_series().str().map_err(|err| {
        ScorebookError::data_unavailable(format!("{table} dataset column '{name}': {err}"))
    })
}

fn required<'a>(value: Option<&'a str>, table: &str, column: &str, row: usize) -> Result<&'a str> {
    value.ok_or_else(|| {
        ScorebookError::data_unavailable(format!(
            "{table} dataset has an empty value in column '{column}' at row {row}"
        ))
    })
}

fn parse_runs(value: &str, table: &str, column: &str, row: usize) -> Result<i64> {
    match value.trim().parse::<i64>() {
        Ok(runs) => Ok(runs),
        Err(_) => Err(ScorebookError::data_unavailable(format!(
            "{table} dataset has a non-numeric value '{value}' in column '{column}' at row {row}"
        ))),
    }
}

/// Parse the matches CSV. Contracted columns: Season, MatchNumber, Team1,
/// Team2, City, Venue, WinningTeam. City, Venue and WinningTeam may be
/// empty per row; the rest may not.
///
/// # Errors
///
/// Returns error if the CSV is malformed, a contracted column is missing,
/// or a non-nullable cell is empty
pub fn parse_matches(text: String) -> Result<Vec<MatchRow>> {
    const TABLE: &str = "matches";
    let df = read_csv(text).context(TABLE)?;
    let season = str_column(&df, TABLE, "Season")?;
    let match_number = str_column(&df, TABLE, "MatchNumber")?;
    let team1 = str_column(&df, TABLE, "Team1")?;
    let team2 = str_column(&df, TABLE, "Team2")?;
    let city = str_column(&df, TABLE, "City")?;
    let venue = str_column(&df, TABLE, "Venue")?;
    let winning_team = str_column(&df, TABLE, "WinningTeam")?;

    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        rows.push(MatchRow {
            season: required(season.get(i), TABLE, "Season", i)?.to_owned(),
            match_number: required(match_number.get(i), TABLE, "MatchNumber", i)?.to_owned(),
            team1: required(team1.get(i), TABLE, "Team1", i)?.to_owned(),
            team2: required(team2.get(i), TABLE, "Team2", i)?.to_owned(),
            city: city.get(i).map(str::to_owned),
            venue: venue.get(i).map(str::to_owned),
            winning_team: winning_team.get(i).map(str::to_owned),
        });
    }
    Ok(rows)
}

/// Parse the per-batter run totals CSV. Contracted columns: batter,
/// batsman_run.
///
/// # Errors
///
/// Returns error if the CSV is malformed, a contracted column is missing,
/// or a run total is empty or non-numeric
pub fn parse_batter_runs(text: String) -> Result<Vec<BatterRunRow>> {
    const TABLE: &str = "batter run totals";
    let df = read_csv(text).context(TABLE)?;
    let batter = str_column(&df, TABLE, "batter")?;
    let runs = str_column(&df, TABLE, "batsman_run")?;

    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let value = required(runs.get(i), TABLE, "batsman_run", i)?;
        rows.push(BatterRunRow {
            batter: required(batter.get(i), TABLE, "batter", i)?.to_owned(),
            total_runs: parse_runs(value, TABLE, "batsman_run", i)?,
        });
    }
    Ok(rows)
}

/// Parse the ball-by-ball deliveries CSV. Contracted columns: batsman,
/// bowling_team, batsman_runs.
///
/// # Errors
///
/// Returns error if the CSV is malformed, a contracted column is missing,
/// or a runs cell is empty or non-numeric
pub fn parse_deliveries(text: String) -> Result<Vec<DeliveryRow>> {
    const TABLE: &str = "deliveries";
    let df = read_csv(text).context(TABLE)?;
    let batter = str_column(&df, TABLE, "batsman")?;
    let bowling_team = str_column(&df, TABLE, "bowling_team")?;
    let runs = str_column(&df, TABLE, "batsman_runs")?;

    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let value = required(runs.get(i), TABLE, "batsman_runs", i)?;
        rows.push(DeliveryRow {
            batter: required(batter.get(i), TABLE, "batsman", i)?.to_owned(),
            bowling_team: required(bowling_team.get(i), TABLE, "bowling_team", i)?.to_owned(),
            runs: parse_runs(value, TABLE, "batsman_runs", i)?,
        });
    }
    Ok(rows)
}
