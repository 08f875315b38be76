//! User configuration stored as TOML in the platform config directory

use crate::{
    error::{FootballError, Result},
    stats::{DefaultCalculator, DEFAULT_PYTHAGOREAN_EXPONENT},
    SeasonId,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(test)]
mod tests;

pub const DATABASE_ENV_VAR: &str = "PRO_FOOTBALL_DB";
pub const LOG_FILE_ENV_VAR: &str = "PRO_FOOTBALL_LOG_FILE";
pub const SEASON_ENV_VAR: &str = "PRO_FOOTBALL_SEASON";

const APP_DIR: &str = "pro-football";

/// Settings loaded from `config.toml`, then overridden from the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite database. Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
    /// Path to the log file. Defaults to `logs/pro-football.log` in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<PathBuf>,
    #[serde(default = "default_exponent")]
    pub pythagorean_exponent: f64,
    /// Season used when a command is run without `--season`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_season: Option<SeasonId>,
}

fn default_exponent() -> f64 {
    DEFAULT_PYTHAGOREAN_EXPONENT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: None,
            log_file_path: None,
            pythagorean_exponent: default_exponent(),
            default_season: None,
        }
    }
}

/// Changes requested by `config set`. `Some(None)` clears a setting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigUpdate {
    pub database_path: Option<Option<PathBuf>>,
    pub log_file_path: Option<Option<PathBuf>>,
    pub pythagorean_exponent: Option<f64>,
    pub default_season: Option<Option<SeasonId>>,
}

impl Config {
    /// Load the config file, apply environment overrides and validate.
    ///
    /// # Environment Variables
    /// - `PRO_FOOTBALL_DB` - Override the database path
    /// - `PRO_FOOTBALL_LOG_FILE` - Override the log file path
    /// - `PRO_FOOTBALL_SEASON` - Override the default season
    ///
    /// A missing config file is not an error; defaults are used instead.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from_path(&Self::config_path())?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file without looking at the environment.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply overrides from `lookup`, normally the process environment.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(db) = lookup(DATABASE_ENV_VAR) {
            self.database_path = Some(PathBuf::from(db));
        }
        if let Some(log_file) = lookup(LOG_FILE_ENV_VAR) {
            self.log_file_path = Some(PathBuf::from(log_file));
        }
        if let Some(season) = lookup(SEASON_ENV_VAR) {
            self.default_season = Some(season.trim().parse()?);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.pythagorean_exponent.is_finite() && self.pythagorean_exponent > 0.0) {
            return Err(FootballError::Config {
                message: format!(
                    "pythagorean_exponent must be a positive number, got {}",
                    self.pythagorean_exponent
                ),
            });
        }
        for (name, path) in [
            ("database_path", &self.database_path),
            ("log_file_path", &self.log_file_path),
        ] {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                return Err(FootballError::Config {
                    message: format!("{} cannot be empty", name),
                });
            }
        }
        Ok(())
    }

    pub fn apply_update(&mut self, update: &ConfigUpdate) {
        if let Some(path) = &update.database_path {
            self.database_path = path.clone();
        }
        if let Some(path) = &update.log_file_path {
            self.log_file_path = path.clone();
        }
        if let Some(exponent) = update.pythagorean_exponent {
            self.pythagorean_exponent = exponent;
        }
        if let Some(season) = update.default_season {
            self.default_season = season;
        }
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// `config.toml` in the platform config directory, or the current
    /// directory when there is none.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_file_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
                .join("logs")
                .join("pro-football.log")
        })
    }

    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => Ok(crate::storage::FootballDatabase::default_database_path()?),
        }
    }

    pub fn calculator(&self) -> DefaultCalculator {
        DefaultCalculator::new(self.pythagorean_exponent)
    }
}
