//! Repository operations for reference entities
//!
//! Every entity gets the same five operations: `add_*`, `edit_*`, `find_*`,
//! `remove_*` and `get_*`. A failed find surfaces as `FootballError::NotFound`.

use super::{models::*, schema::FootballDatabase};
use crate::error::FootballError;
use crate::SeasonId;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

fn season_opt(season: Option<SeasonId>) -> Option<u16> {
    season.map(|s| s.as_u16())
}

impl FootballDatabase {
    pub(crate) fn ensure_changed(
        rows_affected: usize,
        entity: &'static str,
        key: impl ToString,
    ) -> Result<()> {
        if rows_affected == 0 {
            return Err(FootballError::not_found(entity, key).into());
        }
        Ok(())
    }

    // ---- leagues ----

    pub fn add_league(&mut self, league: &League) -> Result<()> {
        if self.find_league_opt(&league.name)?.is_some() {
            return Err(FootballError::Duplicate {
                entity: "League",
                key: league.name.clone(),
            }
            .into());
        }
        self.conn.execute(
            "INSERT INTO leagues (name, long_name, first_season_id, last_season_id)
             VALUES (?, ?, ?, ?)",
            params![
                league.name,
                league.long_name,
                league.first_season_id.as_u16(),
                season_opt(league.last_season_id)
            ],
        )?;
        Ok(())
    }

    pub fn edit_league(&mut self, league: &League) -> Result<()> {
        let rows = self.conn.execute(
            "UPDATE leagues SET long_name = ?, first_season_id = ?, last_season_id = ?
             WHERE name = ?",
            params![
                league.long_name,
                league.first_season_id.as_u16(),
                season_opt(league.last_season_id),
                league.name
            ],
        )?;
        Self::ensure_changed(rows, "League", &league.name)
    }

    pub fn find_league(&self, name: &str) -> Result<League> {
        self.find_league_opt(name)?
            .ok_or_else(|| FootballError::not_found("League", name).into())
    }

    fn find_league_opt(&self, name: &str) -> Result<Option<League>> {
        Ok(self
            .conn
            .query_row(
                "SELECT name, long_name, first_season_id, last_season_id
                 FROM leagues WHERE name = ?",
                params![name],
                Self::row_to_league,
            )
            .optional()?)
    }

    pub fn remove_league(&mut self, name: &str) -> Result<()> {
        let rows = self
            .conn
            .execute("DELETE FROM leagues WHERE name = ?", params![name])?;
        Self::ensure_changed(rows, "League", name)
    }

    pub fn get_leagues(&self) -> Result<Vec<League>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, long_name, first_season_id, last_season_id
             FROM leagues ORDER BY first_season_id, name",
        )?;
        let rows = stmt.query_map([], Self::row_to_league)?;

        let mut leagues = Vec::new();
        for row in rows {
            leagues.push(row?);
        }
        Ok(leagues)
    }

    fn row_to_league(row: &Row) -> rusqlite::Result<League> {
        Ok(League {
            name: row.get(0)?,
            long_name: row.get(1)?,
            first_season_id: SeasonId::new(row.get(2)?),
            last_season_id: row.get::<_, Option<u16>>(3)?.map(SeasonId::new),
        })
    }

    // ---- conferences ----

    pub fn add_conference(&mut self, conference: &Conference) -> Result<()> {
        if self.find_conference_opt(&conference.name)?.is_some() {
            return Err(FootballError::Duplicate {
                entity: "Conference",
                key: conference.name.clone(),
            }
            .into());
        }
        self.find_league(&conference.league_name)
            .map_err(|_| FootballError::missing("League", &conference.league_name))?;
        self.conn.execute(
            "INSERT INTO conferences (name, long_name, league_name, first_season_id, last_season_id)
             VALUES (?, ?, ?, ?, ?)",
            params![
                conference.name,
                conference.long_name,
                conference.league_name,
                conference.first_season_id.as_u16(),
                season_opt(conference.last_season_id)
            ],
        )?;
        Ok(())
    }

    pub fn edit_conference(&mut self, conference: &Conference) -> Result<()> {
        let rows = self.conn.execute(
            "UPDATE conferences
             SET long_name = ?, league_name = ?, first_season_id = ?, last_season_id = ?
             WHERE name = ?",
            params![
                conference.long_name,
                conference.league_name,
                conference.first_season_id.as_u16(),
                season_opt(conference.last_season_id),
                conference.name
            ],
        )?;
        Self::ensure_changed(rows, "Conference", &conference.name)
    }

    pub fn find_conference(&self, name: &str) -> Result<Conference> {
        self.find_conference_opt(name)?
            .ok_or_else(|| FootballError::not_found("Conference", name).into())
    }

    fn find_conference_opt(&self, name: &str) -> Result<Option<Conference>> {
        Ok(self
            .conn
            .query_row(
                "SELECT name, long_name, league_name, first_season_id, last_season_id
                 FROM conferences WHERE name = ?",
                params![name],
                Self::row_to_conference,
            )
            .optional()?)
    }

    pub fn remove_conference(&mut self, name: &str) -> Result<()> {
        let rows = self
            .conn
            .execute("DELETE FROM conferences WHERE name = ?", params![name])?;
        Self::ensure_changed(rows, "Conference", name)
    }

    /// All conferences, optionally limited to one league
    pub fn get_conferences(&self, league_name: Option<&str>) -> Result<Vec<Conference>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, long_name, league_name, first_season_id, last_season_id
             FROM conferences
             WHERE ?1 IS NULL OR league_name = ?1
             ORDER BY league_name, name",
        )?;
        let rows = stmt.query_map(params![league_name], Self::row_to_conference)?;

        let mut conferences = Vec::new();
        for row in rows {
            conferences.push(row?);
        }
        Ok(conferences)
    }

    fn row_to_conference(row: &Row) -> rusqlite::Result<Conference> {
        Ok(Conference {
            name: row.get(0)?,
            long_name: row.get(1)?,
            league_name: row.get(2)?,
            first_season_id: SeasonId::new(row.get(3)?),
            last_season_id: row.get::<_, Option<u16>>(4)?.map(SeasonId::new),
        })
    }

    // ---- divisions ----

    pub fn add_division(&mut self, division: &Division) -> Result<()> {
        if self.find_division_opt(&division.name)?.is_some() {
            return Err(FootballError::Duplicate {
                entity: "Division",
                key: division.name.clone(),
            }
            .into());
        }
        self.find_league(&division.league_name)
            .map_err(|_| FootballError::missing("League", &division.league_name))?;
        if let Some(conference) = &division.conference_name {
            self.find_conference(conference)
                .map_err(|_| FootballError::missing("Conference", conference))?;
        }
        self.conn.execute(
            "INSERT INTO divisions (name, league_name, conference_name, first_season_id, last_season_id)
             VALUES (?, ?, ?, ?, ?)",
            params![
                division.name,
                division.league_name,
                division.conference_name,
                division.first_season_id.as_u16(),
                season_opt(division.last_season_id)
            ],
        )?;
        Ok(())
    }

    pub fn edit_division(&mut self, division: &Division) -> Result<()> {
        let rows = self.conn.execute(
            "UPDATE divisions
             SET league_name = ?, conference_name = ?, first_season_id = ?, last_season_id = ?
             WHERE name = ?",
            params![
                division.league_name,
                division.conference_name,
                division.first_season_id.as_u16(),
                season_opt(division.last_season_id),
                division.name
            ],
        )?;
        Self::ensure_changed(rows, "Division", &division.name)
    }

    pub fn find_division(&self, name: &str) -> Result<Division> {
        self.find_division_opt(name)?
            .ok_or_else(|| FootballError::not_found("Division", name).into())
    }

    fn find_division_opt(&self, name: &str) -> Result<Option<Division>> {
        Ok(self
            .conn
            .query_row(
                "SELECT name, league_name, conference_name, first_season_id, last_season_id
                 FROM divisions WHERE name = ?",
                params![name],
                Self::row_to_division,
            )
            .optional()?)
    }

    pub fn remove_division(&mut self, name: &str) -> Result<()> {
        let rows = self
            .conn
            .execute("DELETE FROM divisions WHERE name = ?", params![name])?;
        Self::ensure_changed(rows, "Division", name)
    }

    pub fn get_divisions(&self, league_name: Option<&str>) -> Result<Vec<Division>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, league_name, conference_name, first_season_id, last_season_id
             FROM divisions
             WHERE ?1 IS NULL OR league_name = ?1
             ORDER BY league_name, conference_name, name",
        )?;
        let rows = stmt.query_map(params![league_name], Self::row_to_division)?;

        let mut divisions = Vec::new();
        for row in rows {
            divisions.push(row?);
        }
        Ok(divisions)
    }

    fn row_to_division(row: &Row) -> rusqlite::Result<Division> {
        Ok(Division {
            name: row.get(0)?,
            league_name: row.get(1)?,
            conference_name: row.get(2)?,
            first_season_id: SeasonId::new(row.get(3)?),
            last_season_id: row.get::<_, Option<u16>>(4)?.map(SeasonId::new),
        })
    }

    // ---- teams ----

    pub fn add_team(&mut self, team: &Team) -> Result<()> {
        if self.find_team_opt(&team.name)?.is_some() {
            return Err(FootballError::Duplicate {
                entity: "Team",
                key: team.name.clone(),
            }
            .into());
        }
        self.conn.execute(
            "INSERT INTO teams (name, first_season_id, last_season_id) VALUES (?, ?, ?)",
            params![
                team.name,
                team.first_season_id.as_u16(),
                season_opt(team.last_season_id)
            ],
        )?;
        Ok(())
    }

    pub fn edit_team(&mut self, team: &Team) -> Result<()> {
        let rows = self.conn.execute(
            "UPDATE teams SET first_season_id = ?, last_season_id = ? WHERE name = ?",
            params![
                team.first_season_id.as_u16(),
                season_opt(team.last_season_id),
                team.name
            ],
        )?;
        Self::ensure_changed(rows, "Team", &team.name)
    }

    pub fn find_team(&self, name: &str) -> Result<Team> {
        self.find_team_opt(name)?
            .ok_or_else(|| FootballError::not_found("Team", name).into())
    }

    fn find_team_opt(&self, name: &str) -> Result<Option<Team>> {
        Ok(self
            .conn
            .query_row(
                "SELECT name, first_season_id, last_season_id FROM teams WHERE name = ?",
                params![name],
                Self::row_to_team,
            )
            .optional()?)
    }

    pub fn remove_team(&mut self, name: &str) -> Result<()> {
        let rows = self
            .conn
            .execute("DELETE FROM teams WHERE name = ?", params![name])?;
        Self::ensure_changed(rows, "Team", name)
    }

    pub fn get_teams(&self) -> Result<Vec<Team>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, first_season_id, last_season_id FROM teams ORDER BY name")?;
        let rows = stmt.query_map([], Self::row_to_team)?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
        Ok(Team {
            name: row.get(0)?,
            first_season_id: SeasonId::new(row.get(1)?),
            last_season_id: row.get::<_, Option<u16>>(2)?.map(SeasonId::new),
        })
    }

    // ---- seasons ----

    /// Insert a season together with its zeroed week count
    pub fn add_season(&mut self, season: &Season) -> Result<()> {
        if self.find_season_opt(season.id)?.is_some() {
            return Err(FootballError::Duplicate {
                entity: "Season",
                key: season.id.to_string(),
            }
            .into());
        }
        self.conn.execute(
            "INSERT INTO seasons (id, num_of_weeks_scheduled) VALUES (?, ?)",
            params![season.id.as_u16(), season.num_of_weeks_scheduled],
        )?;
        self.conn.execute(
            "INSERT OR IGNORE INTO week_counts (season_id, count) VALUES (?, 0)",
            params![season.id.as_u16()],
        )?;
        Ok(())
    }

    pub fn edit_season(&mut self, season: &Season) -> Result<()> {
        let rows = self.conn.execute(
            "UPDATE seasons SET num_of_weeks_scheduled = ? WHERE id = ?",
            params![season.num_of_weeks_scheduled, season.id.as_u16()],
        )?;
        Self::ensure_changed(rows, "Season", season.id)
    }

    pub fn find_season(&self, id: SeasonId) -> Result<Season> {
        self.find_season_opt(id)?
            .ok_or_else(|| FootballError::not_found("Season", id).into())
    }

    fn find_season_opt(&self, id: SeasonId) -> Result<Option<Season>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, num_of_weeks_scheduled FROM seasons WHERE id = ?",
                params![id.as_u16()],
                |row| {
                    Ok(Season {
                        id: SeasonId::new(row.get(0)?),
                        num_of_weeks_scheduled: row.get(1)?,
                    })
                },
            )
            .optional()?)
    }

    pub fn remove_season(&mut self, id: SeasonId) -> Result<()> {
        let rows = self
            .conn
            .execute("DELETE FROM seasons WHERE id = ?", params![id.as_u16()])?;
        Self::ensure_changed(rows, "Season", id)?;
        self.cache.invalidate_season(id);
        Ok(())
    }

    pub fn get_seasons(&self) -> Result<Vec<Season>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, num_of_weeks_scheduled FROM seasons ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Season {
                id: SeasonId::new(row.get(0)?),
                num_of_weeks_scheduled: row.get(1)?,
            })
        })?;

        let mut seasons = Vec::new();
        for row in rows {
            seasons.push(row?);
        }
        Ok(seasons)
    }

    // ---- week counts ----

    pub fn find_week_count(&self, season_id: SeasonId) -> Result<WeekCount> {
        self.conn
            .query_row(
                "SELECT season_id, count FROM week_counts WHERE season_id = ?",
                params![season_id.as_u16()],
                |row| {
                    Ok(WeekCount {
                        season_id: SeasonId::new(row.get(0)?),
                        count: row.get(1)?,
                    })
                },
            )
            .optional()?
            .ok_or_else(|| FootballError::not_found("WeekCount", season_id).into())
    }

    pub fn set_week_count(&mut self, week_count: &WeekCount) -> Result<()> {
        self.conn.execute(
            "INSERT INTO week_counts (season_id, count) VALUES (?1, ?2)
             ON CONFLICT(season_id) DO UPDATE SET count = ?2",
            params![week_count.season_id.as_u16(), week_count.count],
        )?;
        Ok(())
    }

    // ---- league seasons ----

    pub fn add_league_season(&mut self, league_season: &LeagueSeason) -> Result<()> {
        if self
            .find_league_season_opt(&league_season.league_name, league_season.season_id)?
            .is_some()
        {
            return Err(FootballError::Duplicate {
                entity: "LeagueSeason",
                key: format!("{} {}", league_season.league_name, league_season.season_id),
            }
            .into());
        }
        self.conn.execute(
            "INSERT INTO league_seasons
             (league_name, season_id, total_games, total_points, average_points)
             VALUES (?, ?, ?, ?, ?)",
            params![
                league_season.league_name,
                league_season.season_id.as_u16(),
                league_season.total_games,
                league_season.total_points,
                league_season.average_points
            ],
        )?;
        Ok(())
    }

    pub fn edit_league_season(&mut self, league_season: &LeagueSeason) -> Result<()> {
        let rows = self.conn.execute(
            "UPDATE league_seasons SET total_games = ?, total_points = ?, average_points = ?
             WHERE league_name = ? AND season_id = ?",
            params![
                league_season.total_games,
                league_season.total_points,
                league_season.average_points,
                league_season.league_name,
                league_season.season_id.as_u16()
            ],
        )?;
        Self::ensure_changed(
            rows,
            "LeagueSeason",
            format!("{} {}", league_season.league_name, league_season.season_id),
        )
    }

    pub fn find_league_season(&self, league_name: &str, season_id: SeasonId) -> Result<LeagueSeason> {
        self.find_league_season_opt(league_name, season_id)?
            .ok_or_else(|| {
                FootballError::not_found("LeagueSeason", format!("{} {}", league_name, season_id))
                    .into()
            })
    }

    pub(crate) fn find_league_season_opt(
        &self,
        league_name: &str,
        season_id: SeasonId,
    ) -> Result<Option<LeagueSeason>> {
        Ok(self
            .conn
            .query_row(
                "SELECT league_name, season_id, total_games, total_points, average_points
                 FROM league_seasons WHERE league_name = ? AND season_id = ?",
                params![league_name, season_id.as_u16()],
                Self::row_to_league_season,
            )
            .optional()?)
    }

    pub fn remove_league_season(&mut self, league_name: &str, season_id: SeasonId) -> Result<()> {
        let rows = self.conn.execute(
            "DELETE FROM league_seasons WHERE league_name = ? AND season_id = ?",
            params![league_name, season_id.as_u16()],
        )?;
        Self::ensure_changed(rows, "LeagueSeason", format!("{} {}", league_name, season_id))
    }

    pub fn get_league_seasons(&self, season_id: Option<SeasonId>) -> Result<Vec<LeagueSeason>> {
        let mut stmt = self.conn.prepare(
            "SELECT league_name, season_id, total_games, total_points, average_points
             FROM league_seasons
             WHERE ?1 IS NULL OR season_id = ?1
             ORDER BY season_id, league_name",
        )?;
        let rows = stmt.query_map(params![season_opt(season_id)], Self::row_to_league_season)?;

        let mut league_seasons = Vec::new();
        for row in rows {
            league_seasons.push(row?);
        }
        Ok(league_seasons)
    }

    fn row_to_league_season(row: &Row) -> rusqlite::Result<LeagueSeason> {
        Ok(LeagueSeason {
            league_name: row.get(0)?,
            season_id: SeasonId::new(row.get(1)?),
            total_games: row.get(2)?,
            total_points: row.get(3)?,
            average_points: row.get(4)?,
        })
    }
}
