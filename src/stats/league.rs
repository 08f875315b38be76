//! League-season scoring totals

use super::Calculator;
use crate::storage::models::LeagueSeason;

/// Summed regular-season record of a league's teams for one season
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeagueSeasonTotals {
    pub total_games: u32,
    pub total_points: u32,
}

/// Store summed totals on a league season and derive its average.
///
/// Each game is counted once per participating team, so `average_points`
/// is points scored per team per game.
pub fn refresh_league_totals(
    league_season: &mut LeagueSeason,
    totals: LeagueSeasonTotals,
    calc: &dyn Calculator,
) {
    league_season.total_games = totals.total_games;
    league_season.total_points = totals.total_points;
    league_season.average_points = calc.divide(
        f64::from(totals.total_points),
        f64::from(totals.total_games),
    );
}
