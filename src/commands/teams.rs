//! Team and team-season commands

use super::common::{fmt_pct, fmt_season_range, fmt_stat, print_json, CommandContext};
use crate::{
    cli::{TeamCmd, TeamSeasonCmd},
    services,
    storage::{Team, TeamSeason},
    Result,
};
use tracing::info;

/// Handle `team` subcommands
pub fn handle_team(ctx: &mut CommandContext, cmd: TeamCmd) -> Result<()> {
    match cmd {
        TeamCmd::Add { name, range } => {
            ctx.db.add_team(&Team {
                name: name.clone(),
                first_season_id: range.first_season,
                last_season_id: range.last_season,
            })?;
            info!(team = %name, "Added team");
            println!("✓ Added team {}", name);
        }
        TeamCmd::Edit { name, range } => {
            ctx.db.edit_team(&Team {
                name: name.clone(),
                first_season_id: range.first_season,
                last_season_id: range.last_season,
            })?;
            println!("✓ Updated team {}", name);
        }
        TeamCmd::Remove { name } => {
            ctx.db.remove_team(&name)?;
            println!("✓ Removed team {}", name);
        }
        TeamCmd::List { json } => {
            let teams = ctx.db.get_teams()?;
            if json {
                return print_json(&teams);
            }
            for team in &teams {
                println!(
                    "{:<28} {}",
                    team.name,
                    fmt_season_range(team.first_season_id, team.last_season_id)
                );
            }
        }
        TeamCmd::Show { name, json } => {
            ctx.db.find_team(&name)?;
            let history = ctx.db.get_team_seasons_by_team(&name)?;
            if json {
                return print_json(&history);
            }
            println!("{}", name);
            for ts in &history {
                println!(
                    "  {}  {:<6} {:>2}-{:>2}-{:>2}  {:>5}  PF {:>4}  PA {:>4}",
                    ts.season_id,
                    ts.league_name,
                    ts.wins,
                    ts.losses,
                    ts.ties,
                    fmt_pct(ts.winning_percentage),
                    ts.points_for,
                    ts.points_against
                );
            }
        }
    }
    Ok(())
}

pub fn format_team_season(ts: &TeamSeason) -> String {
    let alignment = [ts.conference_name.as_deref(), ts.division_name.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" / ");
    let mut out = format!("{} {} ({}", ts.season_id, ts.team_name, ts.league_name);
    if !alignment.is_empty() {
        out.push_str(" / ");
        out.push_str(&alignment);
    }
    out.push_str(")\n");
    out.push_str(&format!(
        "  Record        {}-{}-{}  ({})\n",
        ts.wins,
        ts.losses,
        ts.ties,
        fmt_pct(ts.winning_percentage)
    ));
    out.push_str(&format!(
        "  Points        {} for, {} against\n",
        ts.points_for, ts.points_against
    ));
    out.push_str(&format!(
        "  Pythagorean   {}-{}\n",
        fmt_stat(ts.pythagorean_wins, 1),
        fmt_stat(ts.pythagorean_losses, 1)
    ));
    out.push_str(&format!(
        "  Offense       avg {}  factor {}  index {}\n",
        fmt_stat(ts.offensive_average, 2),
        fmt_stat(ts.offensive_factor, 3),
        fmt_stat(ts.offensive_index, 2)
    ));
    out.push_str(&format!(
        "  Defense       avg {}  factor {}  index {}\n",
        fmt_stat(ts.defensive_average, 2),
        fmt_stat(ts.defensive_factor, 3),
        fmt_stat(ts.defensive_index, 2)
    ));
    out.push_str(&format!(
        "  Final Pyth %  {}",
        fmt_pct(ts.final_pythagorean_winning_percentage)
    ));
    out
}

/// Handle `team-season` subcommands
pub fn handle_team_season(ctx: &mut CommandContext, cmd: TeamSeasonCmd) -> Result<()> {
    match cmd {
        TeamSeasonCmd::Add {
            team,
            season,
            league,
            conference,
            division,
        } => {
            let season = ctx.resolve_season(season.season)?;
            let team_season =
                TeamSeason::new(&team, season, league).with_alignment(conference, division);
            ctx.db.add_team_season(&team_season)?;
            info!(team_season = %team_season.key(), "Added team season");
            println!("✓ Added {} to the {} season", team, season);
        }
        TeamSeasonCmd::Edit {
            team,
            season,
            league,
            conference,
            division,
        } => {
            let season = ctx.resolve_season(season.season)?;
            let team_season = services::realign_team_season(
                &mut ctx.db,
                &ctx.calculator,
                &team,
                season,
                &league,
                conference,
                division,
            )?;
            println!("✓ Updated {}", team_season.key());
        }
        TeamSeasonCmd::Remove { team, season } => {
            let season = ctx.resolve_season(season.season)?;
            ctx.db.remove_team_season(&team, season)?;
            println!("✓ Removed {} from the {} season", team, season);
        }
        TeamSeasonCmd::List { season, json } => {
            let season = ctx.resolve_season(season.season)?;
            let team_seasons = ctx.db.get_team_seasons_by_season(season)?;
            if json {
                return print_json(&team_seasons);
            }
            for ts in &team_seasons {
                println!(
                    "{:<28} {:<6} {:>2}-{:>2}-{:>2}  {:>5}  PF {:>4}  PA {:>4}",
                    ts.team_name,
                    ts.league_name,
                    ts.wins,
                    ts.losses,
                    ts.ties,
                    fmt_pct(ts.winning_percentage),
                    ts.points_for,
                    ts.points_against
                );
            }
        }
        TeamSeasonCmd::Show { team, season, json } => {
            let season = ctx.resolve_season(season.season)?;
            let team_season = ctx.db.find_team_season(&team, season)?;
            if json {
                return print_json(&team_season);
            }
            println!("{}", format_team_season(&team_season));
        }
    }
    Ok(())
}
