//! Offensive and defensive index updates

use crate::{
    cli::types::GameFilter,
    error::{FootballError, Result},
    stats::{compute_indices, schedule, Calculator},
    storage::{FootballDatabase, TeamSeason},
    SeasonId,
};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use super::games::refresh_season;

/// Recompute indices for every team season of `season_id`.
///
/// All reads happen up front, the per-team arithmetic runs in parallel, and
/// the results are written back in one transaction. Returns the number of
/// team seasons that received new indices.
pub fn update_rankings(
    db: &mut FootballDatabase,
    calc: &dyn Calculator,
    season_id: SeasonId,
) -> Result<usize> {
    db.find_season(season_id)
        .map_err(|_| FootballError::missing("Season", season_id))?;

    db.in_transaction(|db| {
        refresh_season(db, season_id, calc)?;

        let league_averages: HashMap<String, Option<f64>> = db
            .get_league_seasons(Some(season_id))?
            .into_iter()
            .map(|ls| (ls.league_name, ls.average_points))
            .collect();
        let team_seasons = db.get_team_seasons_by_season(season_id)?;
        if let Some(orphan) = team_seasons
            .iter()
            .find(|ts| !league_averages.contains_key(&ts.league_name))
        {
            return Err(FootballError::missing(
                "LeagueSeason",
                format!("{} {}", orphan.league_name, season_id),
            ));
        }

        let games = db.get_games(season_id, &GameFilter::default())?;
        let by_name: HashMap<String, TeamSeason> = team_seasons
            .iter()
            .map(|ts| (ts.team_name.clone(), ts.clone()))
            .collect();

        let updated: Vec<TeamSeason> = team_seasons
            .par_iter()
            .filter_map(|ts| {
                let profile = schedule::build_profile(&ts.team_name, &games, &by_name);
                let totals = schedule::totals(&profile, calc);
                let averages = schedule::averages(&totals, calc);
                let league_average = league_averages.get(&ts.league_name).copied().flatten();

                let indices =
                    compute_indices(ts, totals.schedule_games, &averages, league_average, calc)?;
                let mut ts = ts.clone();
                indices.apply_to(&mut ts);
                Some(ts)
            })
            .collect();

        for ts in &updated {
            db.edit_team_season(ts)?;
        }

        let skipped = team_seasons.len() - updated.len();
        if skipped > 0 {
            debug!(season = %season_id, skipped, "Team seasons without a weighted schedule");
        }
        Ok(updated.len())
    })
    .inspect(|count| info!(season = %season_id, updated = count, "Updated rankings"))
    .inspect_err(|e| warn!(season = %season_id, error = %e, "Rankings update aborted"))
}

/// Recompute the indices of a single team season and return it.
///
/// The team season comes back unchanged when its schedule has no weighted games.
pub fn update_rankings_by_team_season(
    db: &mut FootballDatabase,
    calc: &dyn Calculator,
    team_name: &str,
    season_id: SeasonId,
) -> Result<TeamSeason> {
    db.in_transaction(|db| {
        let mut team_season = db
            .find_team_season_opt(team_name, season_id)?
            .ok_or_else(|| {
                FootballError::missing("TeamSeason", format!("{} {}", team_name, season_id))
            })?;
        let league_season = db
            .find_league_season(&team_season.league_name, season_id)
            .map_err(|_| {
                FootballError::missing(
                    "LeagueSeason",
                    format!("{} {}", team_season.league_name, season_id),
                )
            })?;

        let totals = db.get_team_season_schedule_totals(team_name, season_id, calc)?;
        let averages = schedule::averages(&totals, calc);

        if let Some(indices) = compute_indices(
            &team_season,
            totals.schedule_games,
            &averages,
            league_season.average_points,
            calc,
        ) {
            indices.apply_to(&mut team_season);
            db.edit_team_season(&team_season)?;
            debug!(team = %team_season.key(), "Updated team season indices");
        }
        Ok(team_season)
    })
}
