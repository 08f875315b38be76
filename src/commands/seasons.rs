//! Season commands

use super::common::{print_json, CommandContext};
use crate::{
    cli::SeasonCmd,
    services,
    storage::Season,
    Result,
};

/// Handle `season` subcommands
pub fn handle_season(ctx: &mut CommandContext, cmd: SeasonCmd) -> Result<()> {
    match cmd {
        SeasonCmd::Add { id, weeks } => {
            ctx.db.add_season(&Season {
                id,
                num_of_weeks_scheduled: weeks,
            })?;
            println!("✓ Added season {}", id);
        }
        SeasonCmd::Edit { id, weeks } => {
            ctx.db.edit_season(&Season {
                id,
                num_of_weeks_scheduled: weeks,
            })?;
            println!("✓ Season {} now has {} weeks scheduled", id, weeks);
        }
        SeasonCmd::Remove { id } => {
            ctx.db.remove_season(id)?;
            println!("✓ Removed season {}", id);
        }
        SeasonCmd::List { json } => {
            let seasons = ctx.db.get_seasons()?;
            if json {
                return print_json(&seasons);
            }
            for season in &seasons {
                let completed = ctx.db.find_week_count(season.id)?.count;
                println!(
                    "{}  {:>2} of {:>2} weeks played",
                    season.id, completed, season.num_of_weeks_scheduled
                );
            }
        }
        SeasonCmd::Open { id, weeks, from } => {
            let opened = services::open_season(&mut ctx.db, id, weeks, from)?;
            println!(
                "✓ Opened season {}: {} league seasons, {} team seasons",
                opened.season_id, opened.league_seasons, opened.team_seasons
            );
        }
    }
    Ok(())
}
