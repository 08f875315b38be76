//! Game prediction over stored team seasons

use crate::{
    error::{FootballError, Result},
    stats::{predict_game, GamePrediction},
    storage::{FootballDatabase, TeamSeason},
    SeasonId,
};
use tracing::debug;

fn load(db: &FootballDatabase, team_name: &str, season_id: SeasonId) -> Result<TeamSeason> {
    db.find_team_season_opt(team_name, season_id)?
        .ok_or_else(|| {
            FootballError::missing("TeamSeason", format!("{} {}", team_name, season_id))
        })
}

/// Predict a game between two team seasons. The two sides may come from
/// different seasons.
pub fn predict(
    db: &FootballDatabase,
    guest_name: &str,
    guest_season: SeasonId,
    host_name: &str,
    host_season: SeasonId,
) -> Result<GamePrediction> {
    let guest = load(db, guest_name, guest_season)?;
    let host = load(db, host_name, host_season)?;
    let prediction = predict_game(&guest, &host)?;
    debug!(
        guest = %guest.key(),
        host = %host.key(),
        guest_score = prediction.guest_score,
        host_score = prediction.host_score,
        "Predicted game"
    );
    Ok(prediction)
}
