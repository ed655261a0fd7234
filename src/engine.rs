//! High-level query engine: one method per supported question.

use std::collections::BTreeMap;

use crate::config::SourceConfig;
use crate::data::DataProvider;
use crate::error::Result;
use crate::queries;
use crate::queries::{BatterRank, HeadToHead, TeamList, TeamRecord, VenueRecord};

/// Binds a [`DataProvider`] to the pure query functions.
///
/// Construction performs no I/O. Each method loads the one dataset it
/// needs on first use and afterwards reuses the cached rows, so a single
/// engine can serve any number of queries in one process.
pub struct QueryEngine {
    provider: DataProvider,
}

impl QueryEngine {
    pub fn new(sources: SourceConfig) -> Self {
        Self {
            provider: DataProvider::new(sources),
        }
    }

    /// The provider backing this engine, mainly for cache inspection.
    pub fn provider(&self) -> &DataProvider {
        &self.provider
    }

    /// Every team appearing on either side of any match, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns error if the matches dataset cannot be loaded
    pub fn teams(&self) -> Result<TeamList> {
        Ok(queries::list_teams(&self.provider.matches()?))
    }

    /// Win/loss/draw record between two teams across all their meetings.
    ///
    /// # Errors
    ///
    /// Returns error if either team name is unknown or the matches dataset
    /// cannot be loaded
    pub fn head_to_head(&self, team_a: &str, team_b: &str) -> Result<HeadToHead> {
        tracing::debug!("head to head: {team_a} vs {team_b}");
        queries::head_to_head(&self.provider.matches()?, team_a, team_b)
    }

    /// Played/won/lost/no-result/title counts for one team.
    ///
    /// # Errors
    ///
    /// Returns error if the team name is unknown or the matches dataset
    /// cannot be loaded
    pub fn team_record(&self, team: &str) -> Result<TeamRecord> {
        tracing::debug!("team record: {team}");
        queries::team_record(&self.provider.matches()?, team)
    }

    /// Season → tournament winner, taken from each season's Final.
    ///
    /// # Errors
    ///
    /// Returns error if the matches dataset cannot be loaded
    pub fn season_winners(&self) -> Result<BTreeMap<String, String>> {
        Ok(queries::season_winners(&self.provider.matches()?))
    }

    /// City → venue name, one venue per city.
    ///
    /// # Errors
    ///
    /// Returns error if the matches dataset cannot be loaded
    pub fn venues(&self) -> Result<BTreeMap<String, String>> {
        Ok(queries::venues(&self.provider.matches()?))
    }

    /// One team's record at a venue city.
    ///
    /// # Errors
    ///
    /// Returns error if the team never played in that city or the matches
    /// dataset cannot be loaded
    pub fn team_at_venue(&self, team: &str, city: &str) -> Result<VenueRecord> {
        tracing::debug!("team at venue: {team} in {city}");
        queries::team_at_venue(&self.provider.matches()?, team, city)
    }

    /// The full batter ranking table, rank 1 first.
    ///
    /// # Errors
    ///
    /// Returns error if the batter run totals dataset cannot be loaded
    pub fn batter_rankings(&self) -> Result<Vec<BatterRank>> {
        Ok(queries::batter_rankings(&self.provider.batter_run_totals()?))
    }

    /// Runs scored by one batter against each opposing team.
    ///
    /// # Errors
    ///
    /// Returns error if the batter name is unknown or the deliveries
    /// dataset cannot be loaded
    pub fn batter_vs_teams(&self, batter: &str) -> Result<BTreeMap<String, i64>> {
        tracing::debug!("batter vs teams: {batter}");
        queries::batter_vs_teams(&self.provider.deliveries()?, batter)
    }
}
