//! Command handler tests driven through the parsed CLI

use super::common::{fmt_pct, fmt_stat, CommandContext};
use super::games::format_game;
use super::reports::{format_rankings, format_standings, load_schedule};
use super::*;
use crate::cli::{types::RankingKind, ProFootball};
use crate::config::Config;
use crate::error::FootballError;
use crate::storage::{FootballDatabase, Game};
use crate::{GameId, SeasonId, Week};
use clap::Parser;

fn create_test_context() -> CommandContext {
    let config = Config {
        default_season: Some(SeasonId::new(1985)),
        ..Config::default()
    };
    CommandContext::with_database(config, FootballDatabase::new_in_memory().unwrap())
}

fn run(ctx: &mut CommandContext, args: &[&str]) -> crate::Result<()> {
    let mut argv = vec!["pro-football"];
    argv.extend_from_slice(args);
    let app = ProFootball::try_parse_from(argv).unwrap();
    run_command(ctx, app.command)
}

fn create_test_context_with_teams() -> CommandContext {
    let mut ctx = create_test_context();
    run(
        &mut ctx,
        &[
            "league",
            "add",
            "NFL",
            "--long-name",
            "National Football League",
            "--first-season",
            "1920",
        ],
    )
    .unwrap();
    run(&mut ctx, &["season", "open", "1985", "--weeks", "16"]).unwrap();
    for team in ["Bears", "Lions", "Packers"] {
        run(&mut ctx, &["team", "add", team, "--first-season", "1921"]).unwrap();
        run(&mut ctx, &["team-season", "add", team, "--league", "NFL"]).unwrap();
    }
    ctx
}

#[test]
fn test_resolve_season_prefers_argument() {
    let ctx = create_test_context();
    assert_eq!(
        ctx.resolve_season(Some(SeasonId::new(2000))).unwrap(),
        SeasonId::new(2000)
    );
    assert_eq!(ctx.resolve_season(None).unwrap(), SeasonId::new(1985));
}

#[test]
fn test_resolve_season_missing() {
    let ctx = CommandContext::with_database(
        Config::default(),
        FootballDatabase::new_in_memory().unwrap(),
    );
    let err = ctx.resolve_season(None).unwrap_err();
    assert!(matches!(err, FootballError::Config { .. }));
}

#[test]
fn test_reference_entity_commands() {
    let mut ctx = create_test_context_with_teams();
    run(
        &mut ctx,
        &[
            "conference",
            "add",
            "NFC",
            "--long-name",
            "National Football Conference",
            "--league",
            "NFL",
            "--first-season",
            "1970",
        ],
    )
    .unwrap();
    run(
        &mut ctx,
        &[
            "division",
            "add",
            "NFC Central",
            "--league",
            "NFL",
            "--conference",
            "NFC",
            "--first-season",
            "1970",
            "--last-season",
            "2001",
        ],
    )
    .unwrap();
    run(
        &mut ctx,
        &[
            "team-season",
            "edit",
            "Bears",
            "--league",
            "NFL",
            "--conference",
            "NFC",
            "--division",
            "NFC Central",
        ],
    )
    .unwrap();

    let bears = ctx.db.find_team_season("Bears", SeasonId::new(1985)).unwrap();
    assert_eq!(bears.division_name.as_deref(), Some("NFC Central"));

    run(&mut ctx, &["league", "list", "--json"]).unwrap();
    run(&mut ctx, &["league", "show", "NFL"]).unwrap();
    run(&mut ctx, &["team", "show", "Bears"]).unwrap();
    run(&mut ctx, &["team-season", "show", "Bears", "--json"]).unwrap();
}

#[test]
fn test_remove_unknown_team_is_not_found() {
    let mut ctx = create_test_context();
    let err = run(&mut ctx, &["team", "remove", "Ghosts"]).unwrap_err();
    assert!(matches!(err, FootballError::NotFound { entity: "Team", .. }));
}

#[test]
fn test_game_commands_update_records() {
    let mut ctx = create_test_context_with_teams();
    run(&mut ctx, &["game", "add", "-w", "1", "Packers", "7", "Bears", "23"]).unwrap();
    run(&mut ctx, &["game", "add", "-w", "2", "Bears", "24", "Lions", "3"]).unwrap();

    let bears = ctx.db.find_team_season("Bears", SeasonId::new(1985)).unwrap();
    assert_eq!((bears.wins, bears.points_for), (2, 47));

    let first = ctx
        .db
        .get_games(SeasonId::new(1985), &Default::default())
        .unwrap()[0]
        .id;
    run(
        &mut ctx,
        &[
            "game",
            "edit",
            &first.to_string(),
            "-w",
            "1",
            "Packers",
            "27",
            "Bears",
            "23",
        ],
    )
    .unwrap();
    let bears = ctx.db.find_team_season("Bears", SeasonId::new(1985)).unwrap();
    assert_eq!((bears.wins, bears.losses), (1, 1));

    run(&mut ctx, &["game", "remove", &first.to_string()]).unwrap();
    let packers = ctx
        .db
        .find_team_season("Packers", SeasonId::new(1985))
        .unwrap();
    assert_eq!(packers.games, 0);

    run(&mut ctx, &["game", "list", "--team", "Lions"]).unwrap();
}

#[test]
fn test_report_commands() {
    let mut ctx = create_test_context_with_teams();
    run(&mut ctx, &["game", "add", "-w", "1", "Packers", "7", "Bears", "23"]).unwrap();
    run(&mut ctx, &["game", "add", "-w", "2", "Bears", "24", "Lions", "3"]).unwrap();
    run(&mut ctx, &["game", "add", "-w", "3", "Lions", "10", "Packers", "20"]).unwrap();

    run(&mut ctx, &["update-rankings"]).unwrap();
    run(&mut ctx, &["update-rankings", "--team", "Bears"]).unwrap();
    run(&mut ctx, &["standings"]).unwrap();
    run(&mut ctx, &["rankings", "--kind", "defensive", "--json"]).unwrap();
    run(&mut ctx, &["schedule", "Bears"]).unwrap();
    run(&mut ctx, &["predict", "Lions", "Bears", "--json"]).unwrap();

    let bears = ctx.db.find_team_season("Bears", SeasonId::new(1985)).unwrap();
    assert!(bears.offensive_index.is_some());
}

#[test]
fn test_schedule_of_unknown_team_is_empty() {
    let ctx = create_test_context_with_teams();
    let report = load_schedule(&ctx, "Ghosts", SeasonId::new(1985)).unwrap();
    assert!(report.games.is_empty());
    assert_eq!(report.totals.games, 0);
}

#[test]
fn test_format_helpers() {
    assert_eq!(fmt_pct(Some(0.75)), ".750");
    assert_eq!(fmt_pct(Some(1.0)), "1.000");
    assert_eq!(fmt_pct(None), "-");
    assert_eq!(fmt_stat(Some(21.456), 2), "21.46");
    assert_eq!(fmt_stat(None, 2), "-");
}

#[test]
fn test_format_game() {
    let mut game = Game::new(SeasonId::new(1985), Week::new(3), "Lions", 10, "Packers", 20);
    game.id = GameId::new(7);
    assert_eq!(
        format_game(&game),
        "[7] Week  3  Lions 10 at Packers 20  (Packers)"
    );

    game.host_score = 10;
    game.decide_winner_and_loser();
    game.is_neutral_site = true;
    assert!(format_game(&game).contains("Lions 10 vs Packers 10  (tie)"));
}

#[test]
fn test_format_reports() {
    let mut ctx = create_test_context_with_teams();
    run(&mut ctx, &["game", "add", "-w", "1", "Packers", "7", "Bears", "23"]).unwrap();

    let standings = format_standings(&ctx.db.get_season_standings(SeasonId::new(1985)).unwrap());
    let lines: Vec<&str> = standings.lines().collect();
    assert_eq!(lines[0], "NFL");
    assert!(lines[2].trim_start().starts_with("Bears"));
    assert!(lines[2].contains("+16"));

    let rankings = format_rankings(RankingKind::Total, &[]);
    assert!(rankings.starts_with("Total rankings"));
}

#[test]
fn test_config_set_saves_file_and_updates_context() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = create_test_context();
    ctx.config_path = dir.path().join("config.toml");

    run(
        &mut ctx,
        &[
            "config",
            "set",
            "--pythagorean-exponent",
            "2",
            "--default-season",
            "1990",
            "--database-path",
            "/data/football.db",
        ],
    )
    .unwrap();

    let stored = Config::load_from_path(&ctx.config_path).unwrap();
    assert_eq!(stored.pythagorean_exponent, 2.0);
    assert_eq!(stored.default_season, Some(SeasonId::new(1990)));
    assert_eq!(ctx.calculator.exponent, 2.0);
    assert_eq!(ctx.resolve_season(None).unwrap(), SeasonId::new(1990));
    run(&mut ctx, &["config", "show"]).unwrap();

    run(&mut ctx, &["config", "set", "--clear-default-season"]).unwrap();
    let stored = Config::load_from_path(&ctx.config_path).unwrap();
    assert_eq!(stored.default_season, None);
    assert_eq!(stored.pythagorean_exponent, 2.0);
}

#[test]
fn test_config_set_rejects_invalid_exponent() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = create_test_context();
    ctx.config_path = dir.path().join("config.toml");

    let err = run(&mut ctx, &["config", "set", "--pythagorean-exponent", "0"]).unwrap_err();
    assert!(matches!(err, FootballError::Config { .. }));
    assert!(!ctx.config_path.exists());
    assert_eq!(ctx.config.pythagorean_exponent, Config::default().pythagorean_exponent);
}
