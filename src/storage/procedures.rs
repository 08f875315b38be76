//! Aggregate queries over games and team seasons
//!
//! These replace the schedule, standings and league-total views that a
//! reporting database would expose. Each returns plain structs from `stats`.

use super::schema::FootballDatabase;
use crate::cli::types::filters::GameFilter;
use crate::error::FootballError;
use crate::stats::{
    league::LeagueSeasonTotals,
    schedule::{self, ScheduleAverages, ScheduleProfileEntry, ScheduleTotals},
    standings::{build_standings, StandingsGroup},
    Calculator,
};
use crate::SeasonId;
use anyhow::Result;
use rusqlite::params;
use std::collections::HashMap;

impl FootballDatabase {
    /// Per-game schedule of a team season with each opponent's record.
    ///
    /// Fails with `MissingRelated` when the team season itself does not exist.
    pub fn get_team_season_schedule_profile(
        &self,
        team_name: &str,
        season_id: SeasonId,
    ) -> Result<Vec<ScheduleProfileEntry>> {
        if self.find_team_season_opt(team_name, season_id)?.is_none() {
            return Err(
                FootballError::missing("TeamSeason", format!("{} {}", team_name, season_id))
                    .into(),
            );
        }

        let games = self.get_games(season_id, &GameFilter::for_team(team_name))?;
        let team_seasons: HashMap<String, _> = self
            .get_team_seasons_by_season(season_id)?
            .into_iter()
            .map(|ts| (ts.team_name.clone(), ts))
            .collect();

        Ok(schedule::build_profile(team_name, &games, &team_seasons))
    }

    pub fn get_team_season_schedule_totals(
        &self,
        team_name: &str,
        season_id: SeasonId,
        calc: &dyn Calculator,
    ) -> Result<ScheduleTotals> {
        let profile = self.get_team_season_schedule_profile(team_name, season_id)?;
        Ok(schedule::totals(&profile, calc))
    }

    pub fn get_team_season_schedule_averages(
        &self,
        team_name: &str,
        season_id: SeasonId,
        calc: &dyn Calculator,
    ) -> Result<ScheduleAverages> {
        let totals = self.get_team_season_schedule_totals(team_name, season_id, calc)?;
        Ok(schedule::averages(&totals, calc))
    }

    /// Sum of games and points scored over a league's team seasons.
    ///
    /// Fails with `RecordOverflow` when a sum leaves the range of `u32`.
    pub fn get_league_season_totals(
        &self,
        league_name: &str,
        season_id: SeasonId,
    ) -> Result<LeagueSeasonTotals> {
        let (games, points): (i64, i64) = self.conn.query_row(
            "SELECT COALESCE(SUM(games), 0), COALESCE(SUM(points_for), 0)
             FROM team_seasons
             WHERE league_name = ? AND season_id = ?",
            params![league_name, season_id.as_u16()],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        let overflow = || FootballError::RecordOverflow {
            team: format!("{} {}", league_name, season_id),
        };
        Ok(LeagueSeasonTotals {
            total_games: u32::try_from(games).map_err(|_| overflow())?,
            total_points: u32::try_from(points).map_err(|_| overflow())?,
        })
    }

    /// Standings of every team in a season, grouped by alignment
    pub fn get_season_standings(&self, season_id: SeasonId) -> Result<Vec<StandingsGroup>> {
        let team_seasons = self.get_team_seasons_by_league(season_id)?;
        Ok(build_standings(&team_seasons))
    }
}
