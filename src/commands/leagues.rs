//! League, conference and division commands

use super::common::{fmt_season_range, fmt_stat, print_json, CommandContext};
use crate::{
    cli::{ActiveRange, ConferenceCmd, DivisionCmd, LeagueCmd},
    storage::{Conference, Division, League},
    Result,
};
use serde::Serialize;
use tracing::info;

fn league_from(name: String, long_name: String, range: ActiveRange) -> League {
    League {
        name,
        long_name,
        first_season_id: range.first_season,
        last_season_id: range.last_season,
    }
}

/// Handle `league` subcommands
pub fn handle_league(ctx: &mut CommandContext, cmd: LeagueCmd) -> Result<()> {
    match cmd {
        LeagueCmd::Add {
            name,
            long_name,
            range,
        } => {
            ctx.db.add_league(&league_from(name.clone(), long_name, range))?;
            info!(league = %name, "Added league");
            println!("✓ Added league {}", name);
        }
        LeagueCmd::Edit {
            name,
            long_name,
            range,
        } => {
            ctx.db.edit_league(&league_from(name.clone(), long_name, range))?;
            println!("✓ Updated league {}", name);
        }
        LeagueCmd::Remove { name } => {
            ctx.db.remove_league(&name)?;
            info!(league = %name, "Removed league");
            println!("✓ Removed league {}", name);
        }
        LeagueCmd::List { json } => {
            let leagues = ctx.db.get_leagues()?;
            if json {
                return print_json(&leagues);
            }
            for league in &leagues {
                println!(
                    "{:<8} {:<36} {}",
                    league.name,
                    league.long_name,
                    fmt_season_range(league.first_season_id, league.last_season_id)
                );
            }
        }
        LeagueCmd::Show { name, json } => {
            #[derive(Serialize)]
            struct LeagueDetail {
                #[serde(flatten)]
                league: League,
                seasons: Vec<crate::storage::LeagueSeason>,
            }

            let league = ctx.db.find_league(&name)?;
            let seasons: Vec<_> = ctx
                .db
                .get_league_seasons(None)?
                .into_iter()
                .filter(|ls| ls.league_name == name)
                .collect();

            if json {
                return print_json(&LeagueDetail { league, seasons });
            }
            println!(
                "{} ({}) {}",
                league.long_name,
                league.name,
                fmt_season_range(league.first_season_id, league.last_season_id)
            );
            for ls in &seasons {
                println!(
                    "  {}  games {:>4}  points {:>6}  avg {}",
                    ls.season_id,
                    ls.total_games,
                    ls.total_points,
                    fmt_stat(ls.average_points, 2)
                );
            }
        }
    }
    Ok(())
}

/// Handle `conference` subcommands
pub fn handle_conference(ctx: &mut CommandContext, cmd: ConferenceCmd) -> Result<()> {
    match cmd {
        ConferenceCmd::Add {
            name,
            long_name,
            league,
            range,
        } => {
            ctx.db.add_conference(&Conference {
                name: name.clone(),
                long_name,
                league_name: league,
                first_season_id: range.first_season,
                last_season_id: range.last_season,
            })?;
            println!("✓ Added conference {}", name);
        }
        ConferenceCmd::Edit {
            name,
            long_name,
            league,
            range,
        } => {
            ctx.db.edit_conference(&Conference {
                name: name.clone(),
                long_name,
                league_name: league,
                first_season_id: range.first_season,
                last_season_id: range.last_season,
            })?;
            println!("✓ Updated conference {}", name);
        }
        ConferenceCmd::Remove { name } => {
            ctx.db.remove_conference(&name)?;
            println!("✓ Removed conference {}", name);
        }
        ConferenceCmd::List { league, json } => {
            let conferences = ctx.db.get_conferences(league.as_deref())?;
            if json {
                return print_json(&conferences);
            }
            for c in &conferences {
                println!(
                    "{:<8} {:<36} {:<8} {}",
                    c.name,
                    c.long_name,
                    c.league_name,
                    fmt_season_range(c.first_season_id, c.last_season_id)
                );
            }
        }
    }
    Ok(())
}

/// Handle `division` subcommands
pub fn handle_division(ctx: &mut CommandContext, cmd: DivisionCmd) -> Result<()> {
    match cmd {
        DivisionCmd::Add {
            name,
            league,
            conference,
            range,
        } => {
            ctx.db.add_division(&Division {
                name: name.clone(),
                league_name: league,
                conference_name: conference,
                first_season_id: range.first_season,
                last_season_id: range.last_season,
            })?;
            println!("✓ Added division {}", name);
        }
        DivisionCmd::Edit {
            name,
            league,
            conference,
            range,
        } => {
            ctx.db.edit_division(&Division {
                name: name.clone(),
                league_name: league,
                conference_name: conference,
                first_season_id: range.first_season,
                last_season_id: range.last_season,
            })?;
            println!("✓ Updated division {}", name);
        }
        DivisionCmd::Remove { name } => {
            ctx.db.remove_division(&name)?;
            println!("✓ Removed division {}", name);
        }
        DivisionCmd::List { league, json } => {
            let divisions = ctx.db.get_divisions(league.as_deref())?;
            if json {
                return print_json(&divisions);
            }
            for d in &divisions {
                println!(
                    "{:<20} {:<8} {:<8} {}",
                    d.name,
                    d.league_name,
                    d.conference_name.as_deref().unwrap_or("-"),
                    fmt_season_range(d.first_season_id, d.last_season_id)
                );
            }
        }
    }
    Ok(())
}
