//! ID types for stored games.

use crate::error::{FootballError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for game row IDs.
///
/// Games are the only entity with a surrogate key; every other table is keyed
/// by a name or a (name, season) pair.
///
/// # Examples
///
/// ```rust
/// use pro_football::GameId;
///
/// let id = GameId::new(42);
/// assert_eq!(id.as_i64(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub i64);

impl GameId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = FootballError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_id_from_str_valid() {
        let id: GameId = "123".parse().unwrap();
        assert_eq!(id.as_i64(), 123);
    }

    #[test]
    fn test_game_id_from_str_invalid() {
        let result: Result<GameId> = "abc".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_game_id_ordering() {
        assert!(GameId::new(1) < GameId::new(2));
    }

    #[test]
    fn test_game_id_serde() {
        let id = GameId::new(9);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "9");
        let back: GameId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
