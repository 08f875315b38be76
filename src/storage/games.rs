//! Game repository

use super::{models::*, schema::FootballDatabase};
use crate::cli::types::filters::GameFilter;
use crate::error::FootballError;
use crate::{GameId, SeasonId, Week};
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

const GAME_COLUMNS: &str = "id, season_id, week, guest_name, guest_score, host_name, host_score,
     winner_name, winner_score, loser_name, loser_score,
     is_playoff_game, is_neutral_site, notes";

impl FootballDatabase {
    /// Insert a game and return its assigned ID. `game.id` is ignored.
    pub fn add_game(&mut self, game: &Game) -> Result<GameId> {
        self.conn.execute(
            "INSERT INTO games
             (season_id, week, guest_name, guest_score, host_name, host_score,
              winner_name, winner_score, loser_name, loser_score,
              is_playoff_game, is_neutral_site, notes)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                game.season_id.as_u16(),
                game.week.as_u16(),
                game.guest_name,
                game.guest_score,
                game.host_name,
                game.host_score,
                game.winner_name,
                game.winner_score,
                game.loser_name,
                game.loser_score,
                game.is_playoff_game,
                game.is_neutral_site,
                game.notes,
            ],
        )?;
        Ok(GameId::new(self.conn.last_insert_rowid()))
    }

    pub fn edit_game(&mut self, game: &Game) -> Result<()> {
        let rows = self.conn.execute(
            "UPDATE games SET
                season_id = ?, week = ?, guest_name = ?, guest_score = ?,
                host_name = ?, host_score = ?, winner_name = ?, winner_score = ?,
                loser_name = ?, loser_score = ?, is_playoff_game = ?, is_neutral_site = ?,
                notes = ?
             WHERE id = ?",
            params![
                game.season_id.as_u16(),
                game.week.as_u16(),
                game.guest_name,
                game.guest_score,
                game.host_name,
                game.host_score,
                game.winner_name,
                game.winner_score,
                game.loser_name,
                game.loser_score,
                game.is_playoff_game,
                game.is_neutral_site,
                game.notes,
                game.id.as_i64(),
            ],
        )?;
        Self::ensure_changed(rows, "Game", game.id)
    }

    pub fn find_game(&self, id: GameId) -> Result<Game> {
        let query = format!("SELECT {} FROM games WHERE id = ?", GAME_COLUMNS);
        self.conn
            .query_row(&query, params![id.as_i64()], Self::row_to_game)
            .optional()?
            .ok_or_else(|| FootballError::not_found("Game", id).into())
    }

    pub fn remove_game(&mut self, id: GameId) -> Result<()> {
        let rows = self
            .conn
            .execute("DELETE FROM games WHERE id = ?", params![id.as_i64()])?;
        Self::ensure_changed(rows, "Game", id)
    }

    /// Games of a season narrowed by week, team and playoff flag, in schedule order
    pub fn get_games(&self, season_id: SeasonId, filter: &GameFilter) -> Result<Vec<Game>> {
        let mut query = format!("SELECT {} FROM games WHERE season_id = ?", GAME_COLUMNS);
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(season_id.as_u16())];

        if let Some(week) = filter.week {
            query.push_str(" AND week = ?");
            params.push(Box::new(week.as_u16()));
        }

        if let Some(team) = &filter.team {
            query.push_str(" AND (guest_name = ? OR host_name = ?)");
            params.push(Box::new(team.clone()));
            params.push(Box::new(team.clone()));
        }

        if filter.playoffs_only {
            query.push_str(" AND is_playoff_game = 1");
        }

        query.push_str(" ORDER BY week, id");

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            Self::row_to_game,
        )?;

        let mut games = Vec::new();
        for row in rows {
            games.push(row?);
        }
        Ok(games)
    }

    /// Highest week with a recorded game, or zero
    pub fn get_max_week(&self, season_id: SeasonId) -> Result<Week> {
        let max: Option<u16> = self.conn.query_row(
            "SELECT MAX(week) FROM games WHERE season_id = ?",
            params![season_id.as_u16()],
            |row| row.get(0),
        )?;
        Ok(Week::new(max.unwrap_or(0)))
    }

    pub(crate) fn row_to_game(row: &Row) -> rusqlite::Result<Game> {
        Ok(Game {
            id: GameId::new(row.get(0)?),
            season_id: SeasonId::new(row.get(1)?),
            week: Week::new(row.get(2)?),
            guest_name: row.get(3)?,
            guest_score: row.get(4)?,
            host_name: row.get(5)?,
            host_score: row.get(6)?,
            winner_name: row.get(7)?,
            winner_score: row.get(8)?,
            loser_name: row.get(9)?,
            loser_score: row.get(10)?,
            is_playoff_game: row.get(11)?,
            is_neutral_site: row.get(12)?,
            notes: row.get(13)?,
        })
    }
}
