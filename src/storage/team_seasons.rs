//! Team season repository, the most heavily used table

use super::{models::*, schema::FootballDatabase};
use crate::core::cache::SeasonQueryKey;
use crate::error::FootballError;
use crate::SeasonId;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};
use tracing::trace;

const TEAM_SEASON_COLUMNS: &str = "team_name, season_id, league_name, conference_name, division_name,
     games, wins, losses, ties, winning_percentage, points_for, points_against,
     pythagorean_wins, pythagorean_losses,
     offensive_average, offensive_factor, offensive_index,
     defensive_average, defensive_factor, defensive_index,
     final_pythagorean_winning_percentage";

impl FootballDatabase {
    /// Insert a new team season. The team, league and season must exist.
    pub fn add_team_season(&mut self, team_season: &TeamSeason) -> Result<()> {
        if self
            .find_team_season_opt(&team_season.team_name, team_season.season_id)?
            .is_some()
        {
            return Err(FootballError::Duplicate {
                entity: "TeamSeason",
                key: team_season.key().to_string(),
            }
            .into());
        }
        self.find_team(&team_season.team_name)
            .map_err(|_| FootballError::missing("Team", &team_season.team_name))?;
        self.find_season(team_season.season_id)
            .map_err(|_| FootballError::missing("Season", team_season.season_id))?;
        self.find_league(&team_season.league_name)
            .map_err(|_| FootballError::missing("League", &team_season.league_name))?;

        self.conn.execute(
            &format!(
                "INSERT INTO team_seasons ({}) VALUES
                 (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                TEAM_SEASON_COLUMNS
            ),
            params![
                team_season.team_name,
                team_season.season_id.as_u16(),
                team_season.league_name,
                team_season.conference_name,
                team_season.division_name,
                team_season.games,
                team_season.wins,
                team_season.losses,
                team_season.ties,
                team_season.winning_percentage,
                team_season.points_for,
                team_season.points_against,
                team_season.pythagorean_wins,
                team_season.pythagorean_losses,
                team_season.offensive_average,
                team_season.offensive_factor,
                team_season.offensive_index,
                team_season.defensive_average,
                team_season.defensive_factor,
                team_season.defensive_index,
                team_season.final_pythagorean_winning_percentage,
            ],
        )?;
        self.cache.invalidate_season(team_season.season_id);
        Ok(())
    }

    /// Write every mutable column of an existing team season
    pub fn edit_team_season(&mut self, team_season: &TeamSeason) -> Result<()> {
        let rows = self.conn.execute(
            "UPDATE team_seasons SET
                league_name = ?, conference_name = ?, division_name = ?,
                games = ?, wins = ?, losses = ?, ties = ?, winning_percentage = ?,
                points_for = ?, points_against = ?,
                pythagorean_wins = ?, pythagorean_losses = ?,
                offensive_average = ?, offensive_factor = ?, offensive_index = ?,
                defensive_average = ?, defensive_factor = ?, defensive_index = ?,
                final_pythagorean_winning_percentage = ?
             WHERE team_name = ? AND season_id = ?",
            params![
                team_season.league_name,
                team_season.conference_name,
                team_season.division_name,
                team_season.games,
                team_season.wins,
                team_season.losses,
                team_season.ties,
                team_season.winning_percentage,
                team_season.points_for,
                team_season.points_against,
                team_season.pythagorean_wins,
                team_season.pythagorean_losses,
                team_season.offensive_average,
                team_season.offensive_factor,
                team_season.offensive_index,
                team_season.defensive_average,
                team_season.defensive_factor,
                team_season.defensive_index,
                team_season.final_pythagorean_winning_percentage,
                team_season.team_name,
                team_season.season_id.as_u16(),
            ],
        )?;
        Self::ensure_changed(rows, "TeamSeason", team_season.key())?;
        self.cache.invalidate_season(team_season.season_id);
        Ok(())
    }

    pub fn find_team_season(&self, team_name: &str, season_id: SeasonId) -> Result<TeamSeason> {
        self.find_team_season_opt(team_name, season_id)?
            .ok_or_else(|| {
                FootballError::not_found("TeamSeason", format!("{} {}", team_name, season_id))
                    .into()
            })
    }

    pub(crate) fn find_team_season_opt(
        &self,
        team_name: &str,
        season_id: SeasonId,
    ) -> Result<Option<TeamSeason>> {
        let query = format!(
            "SELECT {} FROM team_seasons WHERE team_name = ? AND season_id = ?",
            TEAM_SEASON_COLUMNS
        );
        Ok(self
            .conn
            .query_row(
                &query,
                params![team_name, season_id.as_u16()],
                Self::row_to_team_season,
            )
            .optional()?)
    }

    pub fn remove_team_season(&mut self, team_name: &str, season_id: SeasonId) -> Result<()> {
        let rows = self.conn.execute(
            "DELETE FROM team_seasons WHERE team_name = ? AND season_id = ?",
            params![team_name, season_id.as_u16()],
        )?;
        Self::ensure_changed(rows, "TeamSeason", format!("{} {}", team_name, season_id))?;
        self.cache.invalidate_season(season_id);
        Ok(())
    }

    /// All team seasons of one season, ordered by team name. Cached until the
    /// season's team seasons change.
    pub fn get_team_seasons_by_season(&self, season_id: SeasonId) -> Result<Vec<TeamSeason>> {
        let cache_key = SeasonQueryKey::TeamSeasons(season_id);
        if let Some(cached) = self.cache.team_seasons.get(&cache_key) {
            trace!(season = %season_id, "team season cache hit");
            return Ok(cached);
        }

        let query = format!(
            "SELECT {} FROM team_seasons WHERE season_id = ? ORDER BY team_name",
            TEAM_SEASON_COLUMNS
        );
        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(params![season_id.as_u16()], Self::row_to_team_season)?;

        let mut team_seasons = Vec::new();
        for row in rows {
            team_seasons.push(row?);
        }

        self.cache.team_seasons.put(cache_key, team_seasons.clone());
        Ok(team_seasons)
    }

    /// Team seasons of one season ordered for grouping: league, conference, division, team
    pub fn get_team_seasons_by_league(&self, season_id: SeasonId) -> Result<Vec<TeamSeason>> {
        let cache_key = SeasonQueryKey::TeamSeasonsByLeague(season_id);
        if let Some(cached) = self.cache.team_seasons.get(&cache_key) {
            return Ok(cached);
        }

        let query = format!(
            "SELECT {} FROM team_seasons WHERE season_id = ?
             ORDER BY league_name, conference_name, division_name, team_name",
            TEAM_SEASON_COLUMNS
        );
        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(params![season_id.as_u16()], Self::row_to_team_season)?;

        let mut team_seasons = Vec::new();
        for row in rows {
            team_seasons.push(row?);
        }

        self.cache.team_seasons.put(cache_key, team_seasons.clone());
        Ok(team_seasons)
    }

    /// Every season a team has a record for
    pub fn get_team_seasons_by_team(&self, team_name: &str) -> Result<Vec<TeamSeason>> {
        let query = format!(
            "SELECT {} FROM team_seasons WHERE team_name = ? ORDER BY season_id",
            TEAM_SEASON_COLUMNS
        );
        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(params![team_name], Self::row_to_team_season)?;

        let mut team_seasons = Vec::new();
        for row in rows {
            team_seasons.push(row?);
        }
        Ok(team_seasons)
    }

    pub(crate) fn row_to_team_season(row: &Row) -> rusqlite::Result<TeamSeason> {
        Ok(TeamSeason {
            team_name: row.get(0)?,
            season_id: SeasonId::new(row.get(1)?),
            league_name: row.get(2)?,
            conference_name: row.get(3)?,
            division_name: row.get(4)?,
            games: row.get(5)?,
            wins: row.get(6)?,
            losses: row.get(7)?,
            ties: row.get(8)?,
            winning_percentage: row.get(9)?,
            points_for: row.get(10)?,
            points_against: row.get(11)?,
            pythagorean_wins: row.get(12)?,
            pythagorean_losses: row.get(13)?,
            offensive_average: row.get(14)?,
            offensive_factor: row.get(15)?,
            offensive_index: row.get(16)?,
            defensive_average: row.get(17)?,
            defensive_factor: row.get(18)?,
            defensive_index: row.get(19)?,
            final_pythagorean_winning_percentage: row.get(20)?,
        })
    }
}
