//! Opening a new season and moving teams within one

use super::games::refresh_season;
use crate::{
    error::{FootballError, Result},
    stats::Calculator,
    storage::{FootballDatabase, LeagueSeason, Season, TeamSeason},
    SeasonId,
};
use serde::Serialize;
use tracing::{debug, info, warn};

/// What `open_season` created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpenedSeason {
    pub season_id: SeasonId,
    pub league_seasons: usize,
    pub team_seasons: usize,
}

/// Create `season_id` with its week count, a league season for every league
/// still active, and an empty team season for every active team that played
/// in `carry_from`. Alignment (league, conference, division) is copied from
/// the earlier team season. `carry_from` defaults to the previous year.
pub fn open_season(
    db: &mut FootballDatabase,
    season_id: SeasonId,
    num_of_weeks_scheduled: u16,
    carry_from: Option<SeasonId>,
) -> Result<OpenedSeason> {
    let source = carry_from.or_else(|| season_id.previous());

    db.in_transaction(|db| {
        db.add_season(&Season {
            id: season_id,
            num_of_weeks_scheduled,
        })?;

        let mut league_seasons = 0;
        let mut active_leagues = Vec::new();
        for league in db.get_leagues()? {
            if league.is_active_in(season_id) {
                db.add_league_season(&LeagueSeason::new(&league.name, season_id))?;
                active_leagues.push(league.name);
                league_seasons += 1;
            }
        }

        let mut team_seasons = 0;
        if let Some(source) = source {
            for team in db.get_teams()? {
                if !team.is_active_in(season_id) {
                    continue;
                }
                let Some(previous) = db.find_team_season_opt(&team.name, source)? else {
                    debug!(team = %team.name, from = %source, "No earlier team season to carry");
                    continue;
                };
                if !active_leagues.contains(&previous.league_name) {
                    warn!(
                        team = %team.name,
                        league = %previous.league_name,
                        "League is no longer active, team not carried"
                    );
                    continue;
                }

                let team_season = TeamSeason::new(&team.name, season_id, &previous.league_name)
                    .with_alignment(previous.conference_name, previous.division_name);
                db.add_team_season(&team_season)?;
                team_seasons += 1;
            }
        }

        Ok(OpenedSeason {
            season_id,
            league_seasons,
            team_seasons,
        })
    })
    .inspect(|opened| {
        info!(
            season = %opened.season_id,
            league_seasons = opened.league_seasons,
            team_seasons = opened.team_seasons,
            "Opened season"
        )
    })
}

/// Move a team season to another league, conference or division, carrying
/// its record along. Every league season total of the season is refreshed
/// in the same unit of work.
pub fn realign_team_season(
    db: &mut FootballDatabase,
    calc: &dyn Calculator,
    team_name: &str,
    season_id: SeasonId,
    league_name: &str,
    conference_name: Option<String>,
    division_name: Option<String>,
) -> Result<TeamSeason> {
    let mut team_season = db.find_team_season(team_name, season_id)?;
    if db.find_league_season_opt(league_name, season_id)?.is_none() {
        return Err(FootballError::missing(
            "LeagueSeason",
            format!("{} {}", league_name, season_id),
        ));
    }

    let previous_league = team_season.league_name.clone();
    team_season.league_name = league_name.to_string();
    team_season.conference_name = conference_name;
    team_season.division_name = division_name;

    db.in_transaction(|db| {
        db.edit_team_season(&team_season)?;
        refresh_season(db, season_id, calc)
    })
    .inspect_err(|e| warn!(team_season = %team_season.key(), error = %e, "Realignment failed"))?;

    info!(
        team_season = %team_season.key(),
        from = %previous_league,
        to = %team_season.league_name,
        "Realigned team season"
    );
    Ok(team_season)
}
