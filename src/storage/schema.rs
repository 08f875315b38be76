//! Database schema and connection management

use crate::core::cache::CacheManager;
use crate::error::FootballError;
use anyhow::Result;
use dirs::data_dir;
use rusqlite::Connection;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Database connection manager for leagues, teams, seasons and games
pub struct FootballDatabase {
    pub(crate) conn: Connection,
    pub(crate) cache: CacheManager,
}

impl FootballDatabase {
    /// Open (or create) the database at `path` and ensure tables exist
    pub fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        info!(path = %path.display(), "Opening football database");
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open the database at the platform default location
    pub fn open_default() -> Result<Self> {
        let path = Self::default_database_path()?;
        Self::new(&path)
    }

    /// Create a throwaway database, used by tests and dry runs
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let mut db = Self {
            conn,
            cache: CacheManager::new(),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the default path of the database file
    pub fn default_database_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| FootballError::Config {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("pro-football").join("football.db"))
    }

    /// Run `work` inside a transaction, committing only when it succeeds.
    ///
    /// Nested calls join the outer transaction. A panic inside `work` rolls
    /// back before it is resumed.
    pub fn in_transaction<T>(
        &mut self,
        work: impl FnOnce(&mut Self) -> crate::Result<T>,
    ) -> crate::Result<T> {
        if !self.conn.is_autocommit() {
            return work(self);
        }

        self.conn.execute_batch("BEGIN IMMEDIATE")?;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| work(&mut *self)));
        match outcome {
            Ok(Ok(value)) => match self.conn.execute_batch("COMMIT") {
                Ok(()) => Ok(value),
                Err(e) => {
                    self.rollback();
                    Err(e.into())
                }
            },
            Ok(Err(e)) => {
                debug!(error = %e, "Rolling back unit of work");
                self.rollback();
                Err(e)
            }
            Err(payload) => {
                self.rollback();
                panic::resume_unwind(payload)
            }
        }
    }

    fn rollback(&mut self) {
        if let Err(e) = self.conn.execute_batch("ROLLBACK") {
            warn!(error = %e, "Rollback failed");
        }
        // Cached season lists may hold rows written before the failure.
        self.cache.clear_all_memory();
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS seasons (
                id INTEGER PRIMARY KEY,
                num_of_weeks_scheduled INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS week_counts (
                season_id INTEGER PRIMARY KEY,
                count INTEGER NOT NULL DEFAULT 0,
                FOREIGN KEY (season_id) REFERENCES seasons(id) ON DELETE CASCADE
            );

            CREATE TABLE IF NOT EXISTS leagues (
                name TEXT PRIMARY KEY,
                long_name TEXT NOT NULL,
                first_season_id INTEGER NOT NULL,
                last_season_id INTEGER
            );

            CREATE TABLE IF NOT EXISTS conferences (
                name TEXT PRIMARY KEY,
                long_name TEXT NOT NULL,
                league_name TEXT NOT NULL,
                first_season_id INTEGER NOT NULL,
                last_season_id INTEGER,
                FOREIGN KEY (league_name) REFERENCES leagues(name)
            );

            CREATE TABLE IF NOT EXISTS divisions (
                name TEXT PRIMARY KEY,
                league_name TEXT NOT NULL,
                conference_name TEXT,
                first_season_id INTEGER NOT NULL,
                last_season_id INTEGER,
                FOREIGN KEY (league_name) REFERENCES leagues(name),
                FOREIGN KEY (conference_name) REFERENCES conferences(name)
            );

            CREATE TABLE IF NOT EXISTS teams (
                name TEXT PRIMARY KEY,
                first_season_id INTEGER NOT NULL,
                last_season_id INTEGER
            );

            CREATE TABLE IF NOT EXISTS league_seasons (
                league_name TEXT NOT NULL,
                season_id INTEGER NOT NULL,
                total_games INTEGER NOT NULL DEFAULT 0,
                total_points INTEGER NOT NULL DEFAULT 0,
                average_points REAL,
                PRIMARY KEY (league_name, season_id),
                FOREIGN KEY (league_name) REFERENCES leagues(name),
                FOREIGN KEY (season_id) REFERENCES seasons(id)
            );

            CREATE TABLE IF NOT EXISTS team_seasons (
                team_name TEXT NOT NULL,
                season_id INTEGER NOT NULL,
                league_name TEXT NOT NULL,
                conference_name TEXT,
                division_name TEXT,
                games INTEGER NOT NULL DEFAULT 0,
                wins INTEGER NOT NULL DEFAULT 0,
                losses INTEGER NOT NULL DEFAULT 0,
                ties INTEGER NOT NULL DEFAULT 0,
                winning_percentage REAL,
                points_for INTEGER NOT NULL DEFAULT 0,
                points_against INTEGER NOT NULL DEFAULT 0,
                pythagorean_wins REAL,
                pythagorean_losses REAL,
                offensive_average REAL,
                offensive_factor REAL,
                offensive_index REAL,
                defensive_average REAL,
                defensive_factor REAL,
                defensive_index REAL,
                final_pythagorean_winning_percentage REAL,
                PRIMARY KEY (team_name, season_id),
                FOREIGN KEY (team_name) REFERENCES teams(name),
                FOREIGN KEY (season_id) REFERENCES seasons(id),
                FOREIGN KEY (league_name) REFERENCES leagues(name),
                FOREIGN KEY (conference_name) REFERENCES conferences(name),
                FOREIGN KEY (division_name) REFERENCES divisions(name)
            );

            CREATE TABLE IF NOT EXISTS games (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                season_id INTEGER NOT NULL,
                week INTEGER NOT NULL,
                guest_name TEXT NOT NULL,
                guest_score INTEGER NOT NULL,
                host_name TEXT NOT NULL,
                host_score INTEGER NOT NULL,
                winner_name TEXT,
                winner_score INTEGER,
                loser_name TEXT,
                loser_score INTEGER,
                is_playoff_game INTEGER NOT NULL DEFAULT 0,
                is_neutral_site INTEGER NOT NULL DEFAULT 0,
                notes TEXT,
                FOREIGN KEY (season_id) REFERENCES seasons(id),
                FOREIGN KEY (guest_name, season_id) REFERENCES team_seasons(team_name, season_id),
                FOREIGN KEY (host_name, season_id) REFERENCES team_seasons(team_name, season_id)
            );",
        )?;

        // Create indexes for performance
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_games_season_week
             ON games(season_id, week)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_team_seasons_season
             ON team_seasons(season_id, league_name)",
            [],
        )?;

        Ok(())
    }

    /// Delete every row, children first
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "DELETE FROM games;
             DELETE FROM team_seasons;
             DELETE FROM league_seasons;
             DELETE FROM divisions;
             DELETE FROM conferences;
             DELETE FROM teams;
             DELETE FROM leagues;
             DELETE FROM week_counts;
             DELETE FROM seasons;",
        )?;
        self.cache.clear_all_memory();
        Ok(())
    }
}
