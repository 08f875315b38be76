//! Error types for the pro-football tracker

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FootballError>;

#[derive(Error, Debug)]
pub enum FootballError {
    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file could not be parsed: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config file could not be written: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    /// A lookup by key matched no row.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// A row the current unit of work depends on is absent.
    #[error("{entity} required but missing: {key}")]
    MissingRelated { entity: &'static str, key: String },

    #[error("{entity} already exists: {key}")]
    Duplicate { entity: &'static str, key: String },

    #[error("Invalid game: {reason}")]
    InvalidGame { reason: String },

    #[error("Cannot reverse game for {team}: record has no games to remove")]
    RecordUnderflow { team: String },

    #[error("Cannot apply game for {team}: record totals would overflow")]
    RecordOverflow { team: String },

    #[error("{message}")]
    Other { message: String },
}

impl FootballError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        FootballError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn missing(entity: &'static str, key: impl ToString) -> Self {
        FootballError::MissingRelated {
            entity,
            key: key.to_string(),
        }
    }

    /// True for errors that only mean "a referenced row is absent".
    pub fn is_missing_related(&self) -> bool {
        matches!(self, FootballError::MissingRelated { .. })
    }
}

/// Storage functions return `anyhow::Result`; recover our own variants when they
/// were raised inside the storage layer, otherwise keep the message.
impl From<anyhow::Error> for FootballError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<FootballError>() {
            Ok(football) => football,
            Err(err) => match err.downcast::<rusqlite::Error>() {
                Ok(sql) => FootballError::Storage(sql),
                Err(other) => FootballError::Other {
                    message: other.to_string(),
                },
            },
        }
    }
}
