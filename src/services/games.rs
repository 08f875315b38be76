//! Game processing: every stored game is reflected in both team records

use crate::{
    error::{FootballError, Result},
    stats::{apply_game, league::refresh_league_totals, Calculator, Direction},
    storage::{FootballDatabase, Game, WeekCount},
    GameId, SeasonId,
};
use std::collections::BTreeSet;
use tracing::{debug, error, info};

/// Store a new game and credit its result to both team seasons.
///
/// Winner and loser are always derived from the scores; whatever the caller
/// put in those fields is replaced.
pub fn add_game(db: &mut FootballDatabase, calc: &dyn Calculator, mut game: Game) -> Result<GameId> {
    validate_game(db, &game)?;
    game.decide_winner_and_loser();

    db.in_transaction(|db| {
        let id = db.add_game(&game)?;
        game.id = id;
        if !game.is_playoff_game {
            apply_to_team_seasons(db, &game, Direction::Apply, calc)?;
        }
        refresh_season(db, game.season_id, calc)?;
        Ok(id)
    })
    .inspect(|id| {
        info!(
            game = %id,
            season = %game.season_id,
            week = %game.week,
            "Added {} {} at {} {}",
            game.guest_name,
            game.guest_score,
            game.host_name,
            game.host_score
        )
    })
    .inspect_err(|e| error!(error = %e, "Failed to add game"))
}

/// Replace a stored game. Equivalent to removing the old game and adding the
/// new one, but done as a single unit of work.
pub fn edit_game(db: &mut FootballDatabase, calc: &dyn Calculator, mut game: Game) -> Result<()> {
    let old = db.find_game(game.id)?;
    validate_game(db, &game)?;
    game.decide_winner_and_loser();

    db.in_transaction(|db| {
        if !old.is_playoff_game {
            apply_to_team_seasons(db, &old, Direction::Reverse, calc)?;
        }
        db.edit_game(&game)?;
        if !game.is_playoff_game {
            apply_to_team_seasons(db, &game, Direction::Apply, calc)?;
        }

        let seasons: BTreeSet<SeasonId> = [old.season_id, game.season_id].into_iter().collect();
        for season in seasons {
            refresh_season(db, season, calc)?;
        }
        Ok(())
    })
    .inspect(|_| info!(game = %game.id, "Edited game"))
    .inspect_err(|e| error!(game = %game.id, error = %e, "Failed to edit game"))
}

/// Delete a game and take its result back out of both team records
pub fn remove_game(db: &mut FootballDatabase, calc: &dyn Calculator, id: GameId) -> Result<()> {
    let old = db.find_game(id)?;

    db.in_transaction(|db| {
        if !old.is_playoff_game {
            apply_to_team_seasons(db, &old, Direction::Reverse, calc)?;
        }
        db.remove_game(id)?;
        refresh_season(db, old.season_id, calc)
    })
    .inspect(|_| info!(game = %id, "Removed game"))
    .inspect_err(|e| error!(game = %id, error = %e, "Failed to remove game"))
}

/// Reject games that cannot be stored before anything is written.
pub(crate) fn validate_game(db: &FootballDatabase, game: &Game) -> Result<()> {
    if game.guest_name == game.host_name {
        return Err(FootballError::InvalidGame {
            reason: format!("{} cannot play itself", game.guest_name),
        });
    }

    let season = db
        .find_season(game.season_id)
        .map_err(|_| FootballError::missing("Season", game.season_id))?;

    let week = game.week.as_u16();
    if week == 0 {
        return Err(FootballError::InvalidGame {
            reason: "week must be at least 1".to_string(),
        });
    }
    // Playoff weeks run past the regular-season schedule.
    if !game.is_playoff_game
        && season.num_of_weeks_scheduled > 0
        && week > season.num_of_weeks_scheduled
    {
        return Err(FootballError::InvalidGame {
            reason: format!(
                "week {} is outside the {} weeks scheduled for {}",
                week, season.num_of_weeks_scheduled, season.id
            ),
        });
    }

    for team in [&game.guest_name, &game.host_name] {
        if db.find_team_season_opt(team, game.season_id)?.is_none() {
            return Err(FootballError::missing(
                "TeamSeason",
                format!("{} {}", team, game.season_id),
            ));
        }
    }
    Ok(())
}

fn apply_to_team_seasons(
    db: &mut FootballDatabase,
    game: &Game,
    direction: Direction,
    calc: &dyn Calculator,
) -> Result<()> {
    let sides = [
        (&game.guest_name, game.guest_score, game.host_score),
        (&game.host_name, game.host_score, game.guest_score),
    ];

    for (team, own_score, opponent_score) in sides {
        let mut team_season = db
            .find_team_season_opt(team, game.season_id)?
            .ok_or_else(|| {
                FootballError::missing("TeamSeason", format!("{} {}", team, game.season_id))
            })?;
        apply_game(&mut team_season, own_score, opponent_score, direction, calc)?;
        db.edit_team_season(&team_season)?;
        debug!(
            team = %team_season.key(),
            ?direction,
            wins = team_season.wins,
            losses = team_season.losses,
            ties = team_season.ties,
            "Updated team record"
        );
    }
    Ok(())
}

/// Recompute every league season total and the week count of `season_id`.
pub(crate) fn refresh_season(
    db: &mut FootballDatabase,
    season_id: SeasonId,
    calc: &dyn Calculator,
) -> Result<()> {
    for mut league_season in db.get_league_seasons(Some(season_id))? {
        let totals = db.get_league_season_totals(&league_season.league_name, season_id)?;
        refresh_league_totals(&mut league_season, totals, calc);
        db.edit_league_season(&league_season)?;
    }

    let count = db.get_max_week(season_id)?.as_u16();
    db.set_week_count(&WeekCount { season_id, count })?;
    Ok(())
}
