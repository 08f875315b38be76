//! Game commands

use super::common::{print_json, CommandContext};
use crate::{
    cli::{types::GameFilter, GameCmd, GameFields},
    services,
    storage::Game,
    GameId, Result,
};

impl CommandContext {
    fn game_from_fields(&self, id: GameId, fields: GameFields) -> Result<Game> {
        let season = self.resolve_season(fields.season.season)?;
        let mut game = Game::new(
            season,
            fields.week,
            fields.guest,
            fields.guest_score,
            fields.host,
            fields.host_score,
        );
        game.id = id;
        game.is_playoff_game = fields.playoff;
        game.is_neutral_site = fields.neutral_site;
        game.notes = fields.notes;
        Ok(game)
    }
}

/// One-line summary such as `Week 3  Bears 24 at Lions 3  (Bears)`
pub fn format_game(game: &Game) -> String {
    let separator = if game.is_neutral_site { "vs" } else { "at" };
    let result = game.winner_name.as_deref().unwrap_or("tie");
    let mut line = format!(
        "[{}] Week {:>2}  {} {} {} {} {}  ({})",
        game.id,
        game.week.as_u16(),
        game.guest_name,
        game.guest_score,
        separator,
        game.host_name,
        game.host_score,
        result
    );
    if game.is_playoff_game {
        line.push_str("  playoff");
    }
    if let Some(notes) = &game.notes {
        line.push_str("  ");
        line.push_str(notes);
    }
    line
}

/// Handle `game` subcommands
pub fn handle_game(ctx: &mut CommandContext, cmd: GameCmd) -> Result<()> {
    match cmd {
        GameCmd::Add { fields } => {
            let game = ctx.game_from_fields(GameId::new(0), fields)?;
            let id = services::add_game(&mut ctx.db, &ctx.calculator, game)?;
            println!("✓ {}", format_game(&ctx.db.find_game(id)?));
        }
        GameCmd::Edit { id, fields } => {
            let game = ctx.game_from_fields(id, fields)?;
            services::edit_game(&mut ctx.db, &ctx.calculator, game)?;
            println!("✓ {}", format_game(&ctx.db.find_game(id)?));
        }
        GameCmd::Remove { id } => {
            services::remove_game(&mut ctx.db, &ctx.calculator, id)?;
            println!("✓ Removed game {}", id);
        }
        GameCmd::List {
            season,
            week,
            team,
            playoffs,
            json,
        } => {
            let season = ctx.resolve_season(season.season)?;
            let filter = GameFilter {
                week,
                team,
                playoffs_only: playoffs,
            };
            let games = ctx.db.get_games(season, &filter)?;
            if json {
                return print_json(&games);
            }
            if games.is_empty() {
                println!("No games found for {}.", season);
            }
            for game in &games {
                println!("{}", format_game(game));
            }
        }
        GameCmd::Show { id, json } => {
            let game = ctx.db.find_game(id)?;
            if json {
                return print_json(&game);
            }
            println!("{}", format_game(&game));
        }
    }
    Ok(())
}
