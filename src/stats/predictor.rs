//! Score prediction from offensive and defensive indices

use crate::error::{FootballError, Result};
use crate::storage::models::TeamSeason;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GamePrediction {
    pub guest_name: String,
    pub guest_score: f64,
    pub host_name: String,
    pub host_score: f64,
}

impl GamePrediction {
    /// Predicted winner, or `None` when the rounded scores are level
    pub fn winner(&self) -> Option<&str> {
        let guest = self.guest_score.round();
        let host = self.host_score.round();
        if guest > host {
            Some(&self.guest_name)
        } else if host > guest {
            Some(&self.host_name)
        } else {
            None
        }
    }
}

fn index_of(team_season: &TeamSeason, value: Option<f64>, label: &'static str) -> Result<f64> {
    value.ok_or_else(|| FootballError::MissingRelated {
        entity: label,
        key: team_season.key().to_string(),
    })
}

/// Each side scores the mean of its offensive index and the other side's
/// defensive index. Either team season may come from any season.
pub fn predict_game(guest: &TeamSeason, host: &TeamSeason) -> Result<GamePrediction> {
    let guest_offense = index_of(guest, guest.offensive_index, "offensive index")?;
    let guest_defense = index_of(guest, guest.defensive_index, "defensive index")?;
    let host_offense = index_of(host, host.offensive_index, "offensive index")?;
    let host_defense = index_of(host, host.defensive_index, "defensive index")?;

    Ok(GamePrediction {
        guest_name: guest.team_name.clone(),
        guest_score: (guest_offense + host_defense) / 2.0,
        host_name: host.team_name.clone(),
        host_score: (host_offense + guest_defense) / 2.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeasonId;

    fn rated(name: &str, off: f64, def: f64) -> TeamSeason {
        let mut ts = TeamSeason::new(name, SeasonId::new(2007), "NFL");
        ts.offensive_index = Some(off);
        ts.defensive_index = Some(def);
        ts
    }

    #[test]
    fn test_predict_game() {
        let guest = rated("Giants", 22.0, 20.0);
        let host = rated("Patriots", 36.0, 17.0);

        let prediction = predict_game(&guest, &host).unwrap();
        assert_eq!(prediction.guest_score, 19.5);
        assert_eq!(prediction.host_score, 28.0);
        assert_eq!(prediction.winner(), Some("Patriots"));
    }

    #[test]
    fn test_predict_even_game_has_no_winner() {
        let prediction = predict_game(&rated("A", 20.0, 20.0), &rated("B", 20.0, 20.0)).unwrap();
        assert_eq!(prediction.winner(), None);
    }

    #[test]
    fn test_predict_requires_indices() {
        let guest = TeamSeason::new("Giants", SeasonId::new(2007), "NFL");
        let host = rated("Patriots", 36.0, 17.0);

        let err = predict_game(&guest, &host).unwrap_err();
        assert!(err.is_missing_related());
        assert!(err.to_string().contains("Giants 2007"));
    }
}
