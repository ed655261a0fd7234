use serde::Serialize;
use std::collections::BTreeMap;

/// All team names appearing on either side of any match, sorted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TeamList {
    pub teams: Vec<String>,
}

/// Aggregate record between two named teams across all their meetings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HeadToHead {
    pub total_matches: u64,
    /// Win counts keyed by the two queried team names (0 if none).
    pub wins: BTreeMap<String, u64>,
    /// Everything not won by either side, including no-result matches.
    pub draws: u64,
}

/// One team's career summary across the whole dataset.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TeamRecord {
    pub team: String,
    pub played: u64,
    pub won: u64,
    pub lost: u64,
    pub no_results: u64,
    /// Wins in matches flagged as the tournament Final.
    pub titles: u64,
}

/// One team's record at a single venue city.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VenueRecord {
    pub played: u64,
    pub won: u64,
    pub lost: u64,
    /// `round(100 * won / played, 2)`, always within `[0, 100]`.
    pub win_percentage: f64,
}

/// One entry of the batter ranking table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BatterRank {
    /// 1 = highest total runs. Tied totals share the average of the
    /// 1-based positions the tie group spans, so ranks may be fractional.
    pub rank: f64,
    pub batter: String,
    pub total_runs: i64,
}
