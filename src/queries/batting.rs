use crate::data::{BatterRunRow, DeliveryRow};
use crate::error::{Result, ScorebookError};
use crate::queries::types::BatterRank;
use std::collections::BTreeMap;

/// Rank batters by total runs descending, rank 1 = highest.
///
/// Tied totals share the average of the 1-based positions the tie group
/// spans (so a two-way tie for second yields rank 2.5 for both), and
/// dataset order is preserved within a group. Output is ordered by rank
/// ascending.
pub fn batter_rankings(totals: &[BatterRunRow]) -> Vec<BatterRank> {
    let mut ordered: Vec<&BatterRunRow> = totals.iter().collect();
    // Stable sort: equal totals keep their dataset order.
    ordered.sort_by(|a, b| b.total_runs.cmp(&a.total_runs));

    let mut rankings = Vec::with_capacity(ordered.len());
    let mut position = 1u64;
    for group in ordered.chunk_by(|a, b| a.total_runs == b.total_runs) {
        let len = group.len() as u64;
        let first = position as f64;
        let last = (position + len - 1) as f64;
        let rank = f64::midpoint(first, last);
        for row in group {
            rankings.push(BatterRank {
                rank,
                batter: row.batter.clone(),
                total_runs: row.total_runs,
            });
        }
        position += len;
    }
    rankings
}

/// Runs scored by one batter against each opposing team, summed over every
/// ball faced.
///
/// # Errors
///
/// Returns error if the batter faced no deliveries at all; an unknown name
/// is invalid input, not an empty mapping
pub fn batter_vs_teams(deliveries: &[DeliveryRow], batter: &str) -> Result<BTreeMap<String, i64>> {
    let mut totals = BTreeMap::new();
    for row in deliveries.iter().filter(|row| row.batter == batter) {
        *totals.entry(row.bowling_team.clone()).or_insert(0) += row.runs;
    }

    if totals.is_empty() {
        return Err(ScorebookError::invalid_input("Invalid Batsman Name"));
    }
    Ok(totals)
}
