//! Command implementations for the pro-football CLI

pub mod common;
pub mod config;
pub mod games;
pub mod leagues;
pub mod reports;
pub mod seasons;
pub mod teams;

#[cfg(test)]
mod tests;

use crate::{cli::Commands, Result};
use common::CommandContext;

/// Route a parsed command to its handler
pub fn run_command(ctx: &mut CommandContext, command: Commands) -> Result<()> {
    match command {
        Commands::League { cmd } => leagues::handle_league(ctx, cmd),
        Commands::Conference { cmd } => leagues::handle_conference(ctx, cmd),
        Commands::Division { cmd } => leagues::handle_division(ctx, cmd),
        Commands::Team { cmd } => teams::handle_team(ctx, cmd),
        Commands::Season { cmd } => seasons::handle_season(ctx, cmd),
        Commands::TeamSeason { cmd } => teams::handle_team_season(ctx, cmd),
        Commands::Game { cmd } => games::handle_game(ctx, cmd),
        Commands::Config { cmd } => config::handle_config(ctx, cmd),
        Commands::Standings { season, json } => {
            let season = ctx.resolve_season(season.season)?;
            reports::handle_standings(ctx, season, json)
        }
        Commands::Rankings { season, kind, json } => {
            let season = ctx.resolve_season(season.season)?;
            reports::handle_rankings(ctx, season, kind, json)
        }
        Commands::Schedule { team, season, json } => {
            let season = ctx.resolve_season(season.season)?;
            reports::handle_schedule(ctx, &team, season, json)
        }
        Commands::UpdateRankings { season, team } => {
            let season = ctx.resolve_season(season.season)?;
            reports::handle_update_rankings(ctx, season, team.as_deref())
        }
        Commands::Predict {
            guest,
            guest_season,
            host,
            host_season,
            season,
            json,
        } => {
            let guest_season = match guest_season {
                Some(s) => s,
                None => ctx.resolve_season(season.season)?,
            };
            let host_season = match host_season {
                Some(s) => s,
                None => ctx.resolve_season(season.season)?,
            };
            reports::handle_predict(ctx, &guest, guest_season, &host, host_season, json)
        }
    }
}
