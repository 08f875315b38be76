//! Strength-of-schedule aggregates for one team season
//!
//! The profile lists every regular-season opponent with that opponent's
//! season record. "Weighted" opponent figures leave out the game against the
//! team being profiled, so a team's own results never inflate its schedule.

use super::Calculator;
use crate::storage::models::{Game, TeamSeason};
use serde::Serialize;
use std::collections::HashMap;

/// One game on a team's schedule, seen from that team
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleProfileEntry {
    pub opponent: String,
    pub game_points_for: u32,
    pub game_points_against: u32,
    pub opponent_wins: u32,
    pub opponent_losses: u32,
    pub opponent_ties: u32,
    pub opponent_winning_percentage: Option<f64>,
    pub opponent_weighted_games: u32,
    pub opponent_weighted_points_for: u32,
    pub opponent_weighted_points_against: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScheduleTotals {
    pub games: u32,
    pub points_for: u32,
    pub points_against: u32,
    pub schedule_wins: u32,
    pub schedule_losses: u32,
    pub schedule_ties: u32,
    pub schedule_winning_percentage: Option<f64>,
    pub schedule_games: u32,
    pub schedule_points_for: u32,
    pub schedule_points_against: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScheduleAverages {
    /// Team points scored per game
    pub points_for: Option<f64>,
    /// Team points allowed per game
    pub points_against: Option<f64>,
    /// Opponents' points scored per game, excluding games against this team
    pub schedule_points_for: Option<f64>,
    /// Opponents' points allowed per game, excluding games against this team
    pub schedule_points_against: Option<f64>,
}

/// Build the schedule profile of `team_name` from its games and the season's
/// team records. Playoff games and games against unknown opponents are skipped.
pub fn build_profile(
    team_name: &str,
    games: &[Game],
    team_seasons: &HashMap<String, TeamSeason>,
) -> Vec<ScheduleProfileEntry> {
    games
        .iter()
        .filter(|game| !game.is_playoff_game && game.involves(team_name))
        .filter_map(|game| {
            let (own_score, opponent_score, opponent) = game.scores_for(team_name)?;
            let record = team_seasons.get(opponent)?;
            Some(ScheduleProfileEntry {
                opponent: opponent.to_string(),
                game_points_for: own_score,
                game_points_against: opponent_score,
                opponent_wins: record.wins,
                opponent_losses: record.losses,
                opponent_ties: record.ties,
                opponent_winning_percentage: record.winning_percentage,
                opponent_weighted_games: record.games.saturating_sub(1),
                opponent_weighted_points_for: record.points_for.saturating_sub(opponent_score),
                opponent_weighted_points_against: record.points_against.saturating_sub(own_score),
            })
        })
        .collect()
}

/// Sums saturate at `u32::MAX`.
pub fn totals(profile: &[ScheduleProfileEntry], calc: &dyn Calculator) -> ScheduleTotals {
    let mut totals = profile
        .iter()
        .fold(ScheduleTotals::default(), |mut acc, entry| {
            acc.games = acc.games.saturating_add(1);
            acc.points_for = acc.points_for.saturating_add(entry.game_points_for);
            acc.points_against = acc.points_against.saturating_add(entry.game_points_against);
            acc.schedule_wins = acc.schedule_wins.saturating_add(entry.opponent_wins);
            acc.schedule_losses = acc.schedule_losses.saturating_add(entry.opponent_losses);
            acc.schedule_ties = acc.schedule_ties.saturating_add(entry.opponent_ties);
            acc.schedule_games = acc
                .schedule_games
                .saturating_add(entry.opponent_weighted_games);
            acc.schedule_points_for = acc
                .schedule_points_for
                .saturating_add(entry.opponent_weighted_points_for);
            acc.schedule_points_against = acc
                .schedule_points_against
                .saturating_add(entry.opponent_weighted_points_against);
            acc
        });

    totals.schedule_winning_percentage = calc.winning_percentage(
        totals.schedule_wins,
        totals.schedule_losses,
        totals.schedule_ties,
    );
    totals
}

pub fn averages(totals: &ScheduleTotals, calc: &dyn Calculator) -> ScheduleAverages {
    let games = f64::from(totals.games);
    let schedule_games = f64::from(totals.schedule_games);
    ScheduleAverages {
        points_for: calc.divide(f64::from(totals.points_for), games),
        points_against: calc.divide(f64::from(totals.points_against), games),
        schedule_points_for: calc.divide(f64::from(totals.schedule_points_for), schedule_games),
        schedule_points_against: calc
            .divide(f64::from(totals.schedule_points_against), schedule_games),
    }
}

#[cfg(test)]
mod tests;
