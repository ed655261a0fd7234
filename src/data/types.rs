/// One tournament match.
///
/// `winning_team == None` is a no-result match (abandoned, unresolved tie),
/// not a data error. `city`/`venue` are absent on a handful of production
/// rows; such rows never match a city filter and are skipped by the venue
/// listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    pub season: String,
    /// Ordinal within the season, or a stage label such as "Final".
    pub match_number: String,
    pub team1: String,
    pub team2: String,
    pub city: Option<String>,
    pub venue: Option<String>,
    pub winning_team: Option<String>,
}

/// Career run total for one batter. One row per batter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatterRunRow {
    pub batter: String,
    pub total_runs: i64,
}

/// One ball faced. Many rows per batter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRow {
    pub batter: String,
    pub bowling_team: String,
    pub runs: i64,
}
