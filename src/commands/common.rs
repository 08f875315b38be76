//! Common utilities and helper functions shared across commands.

use crate::{
    config::{Config, SEASON_ENV_VAR},
    error::FootballError,
    stats::DefaultCalculator,
    storage::FootballDatabase,
    Result, SeasonId,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub db: FootballDatabase,
    pub calculator: DefaultCalculator,
    pub config: Config,
    /// Where `config set` writes
    pub config_path: PathBuf,
}

impl CommandContext {
    /// Open the database named by `db_override`, else by the config
    pub fn new(config: Config, db_override: Option<PathBuf>) -> Result<Self> {
        let path = match db_override {
            Some(path) => path,
            None => config.database_path()?,
        };
        debug!(path = %path.display(), "Connecting to database");
        let db = FootballDatabase::new(&path)?;
        Ok(Self::with_database(config, db))
    }

    pub fn with_database(config: Config, db: FootballDatabase) -> Self {
        Self {
            db,
            calculator: config.calculator(),
            config,
            config_path: Config::config_path(),
        }
    }

    /// The season given on the command line, else the configured default.
    pub fn resolve_season(&self, season: Option<SeasonId>) -> Result<SeasonId> {
        season
            .or(self.config.default_season)
            .ok_or_else(|| FootballError::Config {
                message: format!(
                    "No season given: pass --season, set default_season in {} or set {}",
                    Config::config_path().display(),
                    SEASON_ENV_VAR
                ),
            })
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Fixed-precision rendering of a derived statistic, `-` when absent
pub fn fmt_stat(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "-".to_string(),
    }
}

/// Winning percentage in the usual `.750` form
pub fn fmt_pct(value: Option<f64>) -> String {
    match value {
        Some(v) if v >= 1.0 => "1.000".to_string(),
        Some(v) => format!("{:.3}", v).trim_start_matches('0').to_string(),
        None => "-".to_string(),
    }
}

pub fn fmt_season_range(first: SeasonId, last: Option<SeasonId>) -> String {
    match last {
        Some(last) => format!("{}-{}", first, last),
        None => format!("{}-", first),
    }
}

/// Reports treat an absent related row as "nothing to show" rather than a failure.
pub fn or_empty<T: Default>(result: Result<T>, what: &str) -> Result<T> {
    match result {
        Err(e) if e.is_missing_related() => {
            warn!(error = %e, "{} unavailable", what);
            Ok(T::default())
        }
        other => other,
    }
}
