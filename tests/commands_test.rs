//! Integration tests for services and command handlers

use pro_football::{
    cli::{types::RankingKind, ProFootball},
    commands::{common::CommandContext, run_command},
    config::Config,
    services,
    stats::rank_team_seasons,
    storage::*,
    FootballError, SeasonId, Week,
};
use clap::Parser;

/// Two seasons of a four-team league, 1985 fully played
fn build_league() -> CommandContext {
    let config = Config {
        default_season: Some(SeasonId::new(1985)),
        ..Config::default()
    };
    let mut ctx =
        CommandContext::with_database(config, FootballDatabase::new_in_memory().unwrap());

    ctx.db
        .add_league(&League {
            name: "NFL".to_string(),
            long_name: "National Football League".to_string(),
            first_season_id: SeasonId::new(1920),
            last_season_id: None,
        })
        .unwrap();
    services::open_season(&mut ctx.db, SeasonId::new(1985), 3, None).unwrap();
    for name in ["Bears", "Lions", "Packers", "Vikings"] {
        ctx.db
            .add_team(&Team {
                name: name.to_string(),
                first_season_id: SeasonId::new(1961),
                last_season_id: None,
            })
            .unwrap();
        ctx.db
            .add_team_season(&TeamSeason::new(name, SeasonId::new(1985), "NFL"))
            .unwrap();
    }

    let season = SeasonId::new(1985);
    let schedule = [
        (1, "Packers", 7, "Bears", 23),
        (1, "Vikings", 16, "Lions", 13),
        (2, "Bears", 24, "Lions", 3),
        (2, "Packers", 20, "Vikings", 17),
        (3, "Vikings", 9, "Bears", 27),
        (3, "Lions", 21, "Packers", 21),
    ];
    for (week, guest, gs, host, hs) in schedule {
        services::add_game(
            &mut ctx.db,
            &ctx.calculator,
            Game::new(season, Week::new(week), guest, gs, host, hs),
        )
        .unwrap();
    }
    ctx
}

fn run(ctx: &mut CommandContext, args: &[&str]) -> pro_football::Result<()> {
    let mut argv = vec!["pro-football"];
    argv.extend_from_slice(args);
    run_command(ctx, ProFootball::try_parse_from(argv).unwrap().command)
}

#[test]
fn test_full_season_records() {
    let ctx = build_league();
    let season = SeasonId::new(1985);

    let bears = ctx.db.find_team_season("Bears", season).unwrap();
    assert_eq!((bears.wins, bears.losses, bears.ties), (3, 0, 0));

    let packers = ctx.db.find_team_season("Packers", season).unwrap();
    assert_eq!((packers.wins, packers.losses, packers.ties), (1, 1, 1));
    assert_eq!(packers.winning_percentage, Some(0.5));

    let league = ctx.db.find_league_season("NFL", season).unwrap();
    assert_eq!(league.total_games, 12);
    assert_eq!(ctx.db.find_week_count(season).unwrap().count, 3);
}

#[test]
fn test_rankings_order_after_update() {
    let mut ctx = build_league();
    let season = SeasonId::new(1985);
    let updated = services::update_rankings(&mut ctx.db, &ctx.calculator, season).unwrap();
    assert_eq!(updated, 4);

    let team_seasons = ctx.db.get_team_seasons_by_season(season).unwrap();
    let total = rank_team_seasons(&team_seasons, RankingKind::Total);
    assert_eq!(total.len(), 4);
    assert_eq!(total[0].team_name, "Bears");
    assert_eq!(total[0].rank, 1);

    let defensive = rank_team_seasons(&team_seasons, RankingKind::Defensive);
    assert_eq!(defensive[0].team_name, "Bears");
    for pair in defensive.windows(2) {
        assert!(pair[0].defensive_index <= pair[1].defensive_index);
    }
}

#[test]
fn test_remove_every_game_restores_empty_records() {
    let mut ctx = build_league();
    let season = SeasonId::new(1985);
    let games = ctx.db.get_games(season, &Default::default()).unwrap();
    for game in games {
        services::remove_game(&mut ctx.db, &ctx.calculator, game.id).unwrap();
    }

    for ts in ctx.db.get_team_seasons_by_season(season).unwrap() {
        assert_eq!(ts.games, 0);
        assert_eq!(ts.points_for, 0);
        assert_eq!(ts.winning_percentage, None);
    }
    let league = ctx.db.find_league_season("NFL", season).unwrap();
    assert_eq!(league.total_points, 0);
    assert_eq!(league.average_points, None);
    assert_eq!(ctx.db.find_week_count(season).unwrap().count, 0);
}

#[test]
fn test_failed_edit_leaves_records_untouched() {
    let mut ctx = build_league();
    let season = SeasonId::new(1985);
    let before = ctx.db.get_team_seasons_by_season(season).unwrap();
    let mut game = ctx.db.get_games(season, &Default::default()).unwrap()[0].clone();

    game.host_name = "Oilers".to_string();
    let err = services::edit_game(&mut ctx.db, &ctx.calculator, game).unwrap_err();
    assert!(err.is_missing_related());
    assert_eq!(ctx.db.get_team_seasons_by_season(season).unwrap(), before);
}

#[test]
fn test_open_next_season_and_predict_across_seasons() {
    let mut ctx = build_league();
    services::update_rankings(&mut ctx.db, &ctx.calculator, SeasonId::new(1985)).unwrap();

    run(&mut ctx, &["season", "open", "1986", "--weeks", "16"]).unwrap();
    let next = ctx
        .db
        .get_team_seasons_by_season(SeasonId::new(1986))
        .unwrap();
    assert_eq!(next.len(), 4);
    assert!(next.iter().all(|ts| ts.games == 0));

    let prediction = services::predict(
        &ctx.db,
        "Lions",
        SeasonId::new(1985),
        "Bears",
        SeasonId::new(1985),
    )
    .unwrap();
    assert_eq!(prediction.winner(), Some("Bears"));

    // 1986 team seasons have no indices yet
    let err = services::predict(
        &ctx.db,
        "Lions",
        SeasonId::new(1986),
        "Bears",
        SeasonId::new(1985),
    )
    .unwrap_err();
    assert!(err.is_missing_related());
}

#[test]
fn test_cli_reports_with_explicit_season() {
    let mut ctx = build_league();
    run(&mut ctx, &["update-rankings", "--season", "1985"]).unwrap();
    run(&mut ctx, &["rankings", "--season", "1985", "--kind", "offensive"]).unwrap();
    run(&mut ctx, &["standings", "-s", "1985", "--json"]).unwrap();
    run(&mut ctx, &["schedule", "Packers", "-s", "1985", "--json"]).unwrap();
    run(&mut ctx, &["game", "list", "-s", "1985", "-w", "2"]).unwrap();
}

#[test]
fn test_cli_rejects_week_past_schedule() {
    let mut ctx = build_league();
    let err = run(&mut ctx, &["game", "add", "-w", "4", "Lions", "10", "Bears", "20"]).unwrap_err();
    assert!(matches!(err, FootballError::InvalidGame { .. }));
}
