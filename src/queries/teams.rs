use crate::data::MatchRow;
use crate::error::{Result, ScorebookError};
use crate::queries::types::{HeadToHead, TeamList, TeamRecord, VenueRecord};
use std::collections::{BTreeMap, BTreeSet};

const INVALID_TEAM: &str = "Invalid Team Name...";

pub(crate) fn team_set(matches: &[MatchRow]) -> BTreeSet<&str> {
    let mut teams = BTreeSet::new();
    for row in matches {
        teams.insert(row.team1.as_str());
        teams.insert(row.team2.as_str());
    }
    teams
}

/// All distinct values across both team columns, sorted.
pub fn list_teams(matches: &[MatchRow]) -> TeamList {
    TeamList {
        teams: team_set(matches).into_iter().map(str::to_owned).collect(),
    }
}

/// Win/loss/draw record between two named teams across every meeting, in
/// either home/away order.
///
/// # Errors
///
/// Returns error if either name is not in the team set
pub fn head_to_head(matches: &[MatchRow], team_a: &str, team_b: &str) -> Result<HeadToHead> {
    let teams = team_set(matches);
    if !teams.contains(team_a) || !teams.contains(team_b) {
        return Err(ScorebookError::invalid_input(INVALID_TEAM));
    }

    let mut total = 0u64;
    let mut wins_a = 0u64;
    let mut wins_b = 0u64;
    let between = matches.iter().filter(|row| {
        (row.team1 == team_a && row.team2 == team_b)
            || (row.team1 == team_b && row.team2 == team_a)
    });
    for row in between {
        total += 1;
        match row.winning_team.as_deref() {
            Some(winner) if winner == team_a => wins_a += 1,
            Some(winner) if winner == team_b => wins_b += 1,
            _ => {}
        }
    }

    let mut wins = BTreeMap::new();
    wins.insert(team_a.to_owned(), wins_a);
    wins.insert(team_b.to_owned(), wins_b);
    Ok(HeadToHead {
        total_matches: total,
        wins,
        draws: total - (wins_a + wins_b),
    })
}

/// Played/won/lost/no-result/title counts for one team.
///
/// # Errors
///
/// Returns error if the name is not in the team set
pub fn team_record(matches: &[MatchRow], team: &str) -> Result<TeamRecord> {
    if !team_set(matches).contains(team) {
        return Err(ScorebookError::invalid_input(INVALID_TEAM));
    }

    let mut played = 0u64;
    let mut won = 0u64;
    let mut no_results = 0u64;
    let mut titles = 0u64;
    for row in matches
        .iter()
        .filter(|row| row.team1 == team || row.team2 == team)
    {
        played += 1;
        match row.winning_team.as_deref() {
            None => no_results += 1,
            Some(winner) if winner == team => {
                won += 1;
                if row.match_number == "Final" {
                    titles += 1;
                }
            }
            Some(_) => {}
        }
    }

    Ok(TeamRecord {
        team: team.to_owned(),
        played,
        won,
        lost: played - (won + no_results),
        no_results,
        titles,
    })
}

/// One team's record at a venue city. There is no name pre-validation
/// here, and a no-result match counts as a loss in this view.
///
/// # Errors
///
/// Returns error if the team never played in that city, without
/// distinguishing whether the team or the city was wrong
pub fn team_at_venue(matches: &[MatchRow], team: &str, city: &str) -> Result<VenueRecord> {
    let mut played = 0u64;
    let mut won = 0u64;
    let at_venue = matches.iter().filter(|row| {
        row.city.as_deref() == Some(city) && (row.team1 == team || row.team2 == team)
    });
    for row in at_venue {
        played += 1;
        if row.winning_team.as_deref() == Some(team) {
            won += 1;
        }
    }

    if played == 0 {
        return Err(ScorebookError::invalid_input("Invalid team or venue"));
    }

    Ok(VenueRecord {
        played,
        won,
        lost: played - won,
        win_percentage: round2(100.0 * won as f64 / played as f64),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
