//! Standings, rankings, schedules and predictions

use super::common::{fmt_pct, fmt_stat, or_empty, print_json, CommandContext};
use crate::{
    cli::types::RankingKind,
    services,
    stats::{
        rank_team_seasons, schedule, RankingRow, ScheduleAverages, ScheduleProfileEntry,
        ScheduleTotals, StandingsGroup,
    },
    Result, SeasonId,
};
use serde::Serialize;

pub fn format_standings(groups: &[StandingsGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        out.push_str(&format!("{}\n", group.title()));
        out.push_str(&format!(
            "  {:<28} {:>3} {:>3} {:>3} {:>5} {:>5} {:>5} {:>5}\n",
            "Team", "W", "L", "T", "Pct", "PF", "PA", "Diff"
        ));
        for row in &group.teams {
            out.push_str(&format!(
                "  {:<28} {:>3} {:>3} {:>3} {:>5} {:>5} {:>5} {:>+5}\n",
                row.team_name,
                row.wins,
                row.losses,
                row.ties,
                fmt_pct(row.winning_percentage),
                row.points_for,
                row.points_against,
                row.point_differential
            ));
        }
    }
    out
}

pub fn format_rankings(kind: RankingKind, rows: &[RankingRow]) -> String {
    let mut out = format!("{} rankings\n", kind);
    out.push_str(&format!(
        "{:>4}  {:<28} {:>8} {:>7} {:>7} {:>6}\n",
        "Rank", "Team", "W-L-T", "Off", "Def", "Pyth"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:>4}  {:<28} {:>8} {:>7} {:>7} {:>6}\n",
            row.rank,
            row.team_name,
            format!("{}-{}-{}", row.wins, row.losses, row.ties),
            fmt_stat(row.offensive_index, 2),
            fmt_stat(row.defensive_index, 2),
            fmt_pct(row.final_pythagorean_winning_percentage)
        ));
    }
    out
}

/// Schedule profile of a team season with its totals and averages
#[derive(Debug, Default, Serialize)]
pub struct ScheduleReport {
    pub games: Vec<ScheduleProfileEntry>,
    pub totals: ScheduleTotals,
    pub averages: ScheduleAverages,
}

pub fn format_schedule(team: &str, season: SeasonId, report: &ScheduleReport) -> String {
    let mut out = format!("{} {} schedule\n", season, team);
    out.push_str(&format!(
        "  {:<28} {:>3} {:>3}   {:>8} {:>5}   {:>3} {:>4} {:>4}\n",
        "Opponent", "PF", "PA", "Opp rec", "Pct", "G", "OPF", "OPA"
    ));
    for game in &report.games {
        out.push_str(&format!(
            "  {:<28} {:>3} {:>3}   {:>8} {:>5}   {:>3} {:>4} {:>4}\n",
            game.opponent,
            game.game_points_for,
            game.game_points_against,
            format!(
                "{}-{}-{}",
                game.opponent_wins, game.opponent_losses, game.opponent_ties
            ),
            fmt_pct(game.opponent_winning_percentage),
            game.opponent_weighted_games,
            game.opponent_weighted_points_for,
            game.opponent_weighted_points_against
        ));
    }
    let t = &report.totals;
    out.push_str(&format!(
        "  {:<28} {:>3} {:>3}   {:>8} {:>5}   {:>3} {:>4} {:>4}\n",
        "Totals",
        t.points_for,
        t.points_against,
        format!("{}-{}-{}", t.schedule_wins, t.schedule_losses, t.schedule_ties),
        fmt_pct(t.schedule_winning_percentage),
        t.schedule_games,
        t.schedule_points_for,
        t.schedule_points_against
    ));
    let a = &report.averages;
    out.push_str(&format!(
        "  Averages: PF {}  PA {}  opponents score {}  opponents allow {}",
        fmt_stat(a.points_for, 2),
        fmt_stat(a.points_against, 2),
        fmt_stat(a.schedule_points_for, 2),
        fmt_stat(a.schedule_points_against, 2)
    ));
    out
}

pub fn handle_standings(ctx: &mut CommandContext, season: SeasonId, json: bool) -> Result<()> {
    let groups = ctx.db.get_season_standings(season)?;
    if json {
        return print_json(&groups);
    }
    if groups.is_empty() {
        println!("No team seasons for {}.", season);
        return Ok(());
    }
    print!("{}", format_standings(&groups));
    Ok(())
}

pub fn handle_rankings(
    ctx: &mut CommandContext,
    season: SeasonId,
    kind: RankingKind,
    json: bool,
) -> Result<()> {
    let team_seasons = ctx.db.get_team_seasons_by_season(season)?;
    let rows = rank_team_seasons(&team_seasons, kind);
    if json {
        return print_json(&rows);
    }
    if rows.is_empty() {
        println!("No rankings for {}. Run update-rankings first.", season);
        return Ok(());
    }
    print!("{}", format_rankings(kind, &rows));
    Ok(())
}

/// Load the schedule of one team season. An unknown team season gives an
/// empty report.
pub fn load_schedule(
    ctx: &CommandContext,
    team: &str,
    season: SeasonId,
) -> Result<ScheduleReport> {
    let games = or_empty(
        ctx.db
            .get_team_season_schedule_profile(team, season)
            .map_err(Into::into),
        "Schedule",
    )?;
    let totals = schedule::totals(&games, &ctx.calculator);
    let averages = schedule::averages(&totals, &ctx.calculator);
    Ok(ScheduleReport {
        games,
        totals,
        averages,
    })
}

pub fn handle_schedule(
    ctx: &mut CommandContext,
    team: &str,
    season: SeasonId,
    json: bool,
) -> Result<()> {
    let report = load_schedule(ctx, team, season)?;
    if json {
        return print_json(&report);
    }
    println!("{}", format_schedule(team, season, &report));
    Ok(())
}

pub fn handle_update_rankings(
    ctx: &mut CommandContext,
    season: SeasonId,
    team: Option<&str>,
) -> Result<()> {
    match team {
        Some(team) => {
            let updated = services::update_rankings_by_team_season(
                &mut ctx.db,
                &ctx.calculator,
                team,
                season,
            )?;
            println!(
                "✓ {} offensive index {}, defensive index {}",
                updated.key(),
                fmt_stat(updated.offensive_index, 2),
                fmt_stat(updated.defensive_index, 2)
            );
        }
        None => {
            let count = services::update_rankings(&mut ctx.db, &ctx.calculator, season)?;
            println!("✓ Updated rankings for {} team seasons in {}", count, season);
        }
    }
    Ok(())
}

pub fn handle_predict(
    ctx: &mut CommandContext,
    guest: &str,
    guest_season: SeasonId,
    host: &str,
    host_season: SeasonId,
    json: bool,
) -> Result<()> {
    let prediction = services::predict(&ctx.db, guest, guest_season, host, host_season)?;
    if json {
        return print_json(&prediction);
    }
    println!(
        "{} {} {:.0} at {} {} {:.0}",
        guest_season,
        prediction.guest_name,
        prediction.guest_score.round(),
        host_season,
        prediction.host_name,
        prediction.host_score.round()
    );
    match prediction.winner() {
        Some(winner) => println!("Predicted winner: {}", winner),
        None => println!("Predicted tie"),
    }
    Ok(())
}
