//! Unit tests for schedule aggregation

use super::*;
use crate::stats::DefaultCalculator;
use crate::{SeasonId, Week};

fn season() -> SeasonId {
    SeasonId::new(1985)
}

/// Bears beat Packers 23-7 and Lions 24-3; Packers and Lions split 20-10, 17-14.
fn fixture() -> (Vec<Game>, HashMap<String, TeamSeason>) {
    let games = vec![
        Game::new(season(), Week::new(1), "Packers", 7, "Bears", 23),
        Game::new(season(), Week::new(2), "Bears", 24, "Lions", 3),
        Game::new(season(), Week::new(3), "Lions", 10, "Packers", 20),
        Game::new(season(), Week::new(4), "Packers", 14, "Lions", 17),
    ];

    let mut team_seasons = HashMap::new();
    team_seasons.insert(
        "Bears".to_string(),
        TeamSeason::new("Bears", season(), "NFL").with_record(2, 0, 0, 47, 10),
    );
    team_seasons.insert(
        "Packers".to_string(),
        TeamSeason::new("Packers", season(), "NFL").with_record(1, 2, 0, 41, 50),
    );
    team_seasons.insert(
        "Lions".to_string(),
        TeamSeason::new("Lions", season(), "NFL").with_record(1, 2, 0, 30, 58),
    );
    (games, team_seasons)
}

#[test]
fn test_profile_only_includes_team_games() {
    let (games, team_seasons) = fixture();
    let profile = build_profile("Bears", &games, &team_seasons);

    assert_eq!(profile.len(), 2);
    assert_eq!(profile[0].opponent, "Packers");
    assert_eq!(profile[0].game_points_for, 23);
    assert_eq!(profile[0].game_points_against, 7);
    assert_eq!(profile[1].opponent, "Lions");
}

#[test]
fn test_profile_weighted_excludes_head_to_head() {
    let (games, team_seasons) = fixture();
    let profile = build_profile("Bears", &games, &team_seasons);

    let packers = &profile[0];
    assert_eq!(packers.opponent_weighted_games, 2);
    // Packers scored 41 in total, 7 of them against the Bears
    assert_eq!(packers.opponent_weighted_points_for, 34);
    // Packers allowed 50 in total, 23 of them to the Bears
    assert_eq!(packers.opponent_weighted_points_against, 27);
}

#[test]
fn test_profile_skips_playoff_games() {
    let (mut games, team_seasons) = fixture();
    let mut playoff = Game::new(season(), Week::new(18), "Lions", 0, "Bears", 21);
    playoff.is_playoff_game = true;
    games.push(playoff);

    let profile = build_profile("Bears", &games, &team_seasons);
    assert_eq!(profile.len(), 2);
}

#[test]
fn test_profile_skips_unknown_opponents() {
    let (mut games, team_seasons) = fixture();
    games.push(Game::new(season(), Week::new(5), "Bears", 30, "Cardinals", 0));

    let profile = build_profile("Bears", &games, &team_seasons);
    assert_eq!(profile.len(), 2);
}

#[test]
fn test_totals_and_averages() {
    let calc = DefaultCalculator::default();
    let (games, team_seasons) = fixture();
    let profile = build_profile("Bears", &games, &team_seasons);

    let totals = totals(&profile, &calc);
    assert_eq!(totals.games, 2);
    assert_eq!(totals.points_for, 47);
    assert_eq!(totals.points_against, 10);
    assert_eq!(totals.schedule_wins, 2);
    assert_eq!(totals.schedule_losses, 4);
    assert!((totals.schedule_winning_percentage.unwrap() - 2.0 / 6.0).abs() < 1e-9);
    assert_eq!(totals.schedule_games, 4);
    // Packers 34 + Lions (30 - 3) = 61
    assert_eq!(totals.schedule_points_for, 61);
    // Packers 27 + Lions (58 - 24) = 61
    assert_eq!(totals.schedule_points_against, 61);

    let averages = averages(&totals, &calc);
    assert_eq!(averages.points_for, Some(23.5));
    assert_eq!(averages.points_against, Some(5.0));
    assert_eq!(averages.schedule_points_for, Some(15.25));
    assert_eq!(averages.schedule_points_against, Some(15.25));
}

#[test]
fn test_empty_profile() {
    let calc = DefaultCalculator::default();
    let totals = totals(&[], &calc);
    assert_eq!(totals, ScheduleTotals::default());

    let averages = averages(&totals, &calc);
    assert_eq!(averages, ScheduleAverages::default());
}

#[test]
fn test_totals_saturate_on_huge_opponent_scores() {
    let calc = DefaultCalculator::default();
    let games = vec![
        Game::new(season(), Week::new(1), "Bears", 0, "Packers", 1),
        Game::new(season(), Week::new(2), "Bears", 0, "Lions", 1),
    ];
    let mut team_seasons = HashMap::new();
    for team in ["Packers", "Lions"] {
        team_seasons.insert(
            team.to_string(),
            TeamSeason::new(team, season(), "NFL").with_record(2, 0, 0, u32::MAX, 0),
        );
    }

    let profile = build_profile("Bears", &games, &team_seasons);
    let totals = totals(&profile, &calc);
    assert_eq!(totals.schedule_points_for, u32::MAX);
    assert_eq!(totals.schedule_wins, 4);
}
