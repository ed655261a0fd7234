use super::{CSK, KKR, MI, RR, m, sample_matches};
use crate::queries::teams::{head_to_head, list_teams, team_at_venue, team_record};

#[test]
fn test_list_teams_is_sorted_and_distinct() {
    let listing = list_teams(&sample_matches());
    assert_eq!(
        listing.teams,
        vec![CSK.to_owned(), KKR.to_owned(), MI.to_owned(), RR.to_owned()]
    );
}

#[test]
fn test_head_to_head_splits_wins_between_both_sides() {
    // Three meetings: two wins for one side, one for the other, no draws.
    let matches = vec![
        m("2020", "1", MI, CSK, Some("Mumbai"), "Wankhede Stadium", Some(MI)),
        m(
            "2020",
            "2",
            CSK,
            MI,
            Some("Chennai"),
            "MA Chidambaram Stadium",
            Some(MI),
        ),
        m("2020", "3", MI, CSK, Some("Mumbai"), "Wankhede Stadium", Some(CSK)),
    ];
    let record = head_to_head(&matches, MI, CSK).unwrap();
    assert_eq!(record.total_matches, 3);
    assert_eq!(record.wins[MI], 2);
    assert_eq!(record.wins[CSK], 1);
    assert_eq!(record.draws, 0);
}

#[test]
fn test_head_to_head_counts_no_results_as_draws() {
    let record = head_to_head(&sample_matches(), RR, KKR).unwrap();
    assert_eq!(record.total_matches, 2);
    assert_eq!(record.wins[RR], 0);
    assert_eq!(record.wins[KKR], 1);
    assert_eq!(record.draws, 1);
}

#[test]
fn test_head_to_head_ignores_order_of_arguments() {
    let matches = sample_matches();
    let forward = head_to_head(&matches, MI, CSK).unwrap();
    let reverse = head_to_head(&matches, CSK, MI).unwrap();
    assert_eq!(forward, reverse);
}

#[test]
fn test_head_to_head_rejects_unknown_team() {
    let err = head_to_head(&sample_matches(), MI, "Pune Warriors").unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(err.message(), "Invalid Team Name...");
}

#[test]
fn test_head_to_head_wins_and_draws_sum_to_total_for_every_pair() {
    let matches = sample_matches();
    let teams = list_teams(&matches).teams;
    for team_a in &teams {
        for team_b in &teams {
            let record = head_to_head(&matches, team_a, team_b).unwrap();
            let wins: u64 = record.wins.values().sum();
            assert_eq!(
                wins + record.draws,
                record.total_matches,
                "pair ({team_a}, {team_b})"
            );
        }
    }
}

#[test]
fn test_team_record_counts_all_outcomes() {
    let record = team_record(&sample_matches(), RR).unwrap();
    assert_eq!(record.team, RR);
    assert_eq!(record.played, 3);
    assert_eq!(record.won, 1);
    assert_eq!(record.lost, 1);
    assert_eq!(record.no_results, 1);
    assert_eq!(record.titles, 1);
}

#[test]
fn test_team_record_counts_titles_from_finals_only() {
    // Three wins for Mumbai but only the 2009 Final is a title.
    let record = team_record(&sample_matches(), MI).unwrap();
    assert_eq!(record.won, 3);
    assert_eq!(record.titles, 1);
}

#[test]
fn test_team_record_outcomes_sum_to_played_for_every_team() {
    let matches = sample_matches();
    for team in list_teams(&matches).teams {
        let record = team_record(&matches, &team).unwrap();
        assert_eq!(
            record.won + record.lost + record.no_results,
            record.played,
            "team {team}"
        );
    }
}

#[test]
fn test_team_record_rejects_unknown_team() {
    let err = team_record(&sample_matches(), "Pune Warriors").unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(err.message(), "Invalid Team Name...");
}

#[test]
fn test_team_at_venue_reports_rounded_win_percentage() {
    let record = team_at_venue(&sample_matches(), MI, "Mumbai").unwrap();
    assert_eq!(record.played, 3);
    assert_eq!(record.won, 2);
    assert_eq!(record.lost, 1);
    assert!((record.win_percentage - 66.67).abs() < f64::EPSILON);
}

#[test]
fn test_team_at_venue_is_perfect_when_unbeaten() {
    let record = team_at_venue(&sample_matches(), KKR, "Cape Town").unwrap();
    assert_eq!(record.played, 1);
    assert_eq!(record.lost, 0);
    assert!((record.win_percentage - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_team_at_venue_counts_no_result_as_loss() {
    let record = team_at_venue(&sample_matches(), RR, "Jaipur").unwrap();
    assert_eq!(record.played, 1);
    assert_eq!(record.won, 0);
    assert_eq!(record.lost, 1);
    assert!(record.win_percentage.abs() < f64::EPSILON);
}

#[test]
fn test_team_at_venue_rejects_empty_selection_without_distinguishing() {
    let matches = sample_matches();
    let unknown_city = team_at_venue(&matches, MI, "Leeds").unwrap_err();
    assert_eq!(unknown_city.message(), "Invalid team or venue");
    let unknown_team = team_at_venue(&matches, "Pune Warriors", "Mumbai").unwrap_err();
    assert_eq!(unknown_team.message(), "Invalid team or venue");
}

#[test]
fn test_team_at_venue_never_matches_rows_without_a_city() {
    // 2009/2 was played at a known venue but its city is unrecorded.
    let err = team_at_venue(&sample_matches(), CSK, "").unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_team_at_venue_percentage_stays_in_range_and_two_decimals() {
    let matches = sample_matches();
    let cities = ["Mumbai", "Chennai", "Jaipur", "Cape Town", "Johannesburg"];
    for team in list_teams(&matches).teams {
        for city in cities {
            let Ok(record) = team_at_venue(&matches, &team, city) else {
                continue;
            };
            let pct = record.win_percentage;
            assert!((0.0..=100.0).contains(&pct), "{team} at {city}: {pct}");
            assert!(
                ((pct * 100.0) - (pct * 100.0).round()).abs() < f64::EPSILON,
                "{team} at {city}: {pct} has more than two decimals"
            );
        }
    }
}
