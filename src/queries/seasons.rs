use crate::data::MatchRow;
use std::collections::BTreeMap;

/// Season → tournament winner, from the rows flagged "Final".
///
/// If a season somehow carries two Finals, the later row in dataset order
/// overwrites the earlier one. A Final with no recorded winner contributes
/// no entry.
pub fn season_winners(matches: &[MatchRow]) -> BTreeMap<String, String> {
    let mut winners = BTreeMap::new();
    for row in matches {
        if row.match_number == "Final"
            && let Some(winner) = row.winning_team.as_deref()
        {
            winners.insert(row.season.clone(), winner.to_owned());
        }
    }
    winners
}

/// City → venue name. A city with several distinct venues keeps only the
/// first one encountered in dataset order; rows missing either field are
/// skipped.
pub fn venues(matches: &[MatchRow]) -> BTreeMap<String, String> {
    let mut venues = BTreeMap::new();
    for row in matches {
        if let (Some(city), Some(venue)) = (row.city.as_deref(), row.venue.as_deref()) {
            venues
                .entry(city.to_owned())
                .or_insert_with(|| venue.to_owned());
        }
    }
    venues
}
