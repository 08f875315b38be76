//! Offensive and defensive indices and the ranking tables built from them

use super::{schedule::ScheduleAverages, Calculator};
use crate::cli::types::filters::RankingKind;
use crate::storage::models::TeamSeason;
use serde::Serialize;
use std::cmp::Ordering;

/// Strength-of-schedule adjusted figures for one team season
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TeamIndices {
    pub offensive_average: Option<f64>,
    pub offensive_factor: Option<f64>,
    pub offensive_index: Option<f64>,
    pub defensive_average: Option<f64>,
    pub defensive_factor: Option<f64>,
    pub defensive_index: Option<f64>,
    pub final_pythagorean_winning_percentage: Option<f64>,
}

impl TeamIndices {
    pub fn apply_to(&self, team_season: &mut TeamSeason) {
        team_season.offensive_average = self.offensive_average;
        team_season.offensive_factor = self.offensive_factor;
        team_season.offensive_index = self.offensive_index;
        team_season.defensive_average = self.defensive_average;
        team_season.defensive_factor = self.defensive_factor;
        team_season.defensive_index = self.defensive_index;
        team_season.final_pythagorean_winning_percentage =
            self.final_pythagorean_winning_percentage;
    }
}

/// Compute a team season's indices.
///
/// The factor compares the team's per-game average with what its opponents
/// usually score or allow; the index blends the raw average with the factor
/// scaled to the league's points per game. Returns `None` when the schedule has
/// no weighted games, in which case the stored indices are left alone.
pub fn compute_indices(
    team_season: &TeamSeason,
    schedule_games: u32,
    averages: &ScheduleAverages,
    league_average_points: Option<f64>,
    calc: &dyn Calculator,
) -> Option<TeamIndices> {
    if schedule_games == 0 {
        return None;
    }

    let games = f64::from(team_season.games);
    let blend = |average: Option<f64>, factor: Option<f64>| -> Option<f64> {
        Some((average? + factor? * league_average_points?) / 2.0)
    };

    let offensive_average = calc.divide(f64::from(team_season.points_for), games);
    let offensive_factor = offensive_average
        .zip(averages.schedule_points_against)
        .and_then(|(avg, allowed)| calc.divide(avg, allowed));
    let offensive_index = blend(offensive_average, offensive_factor);

    let defensive_average = calc.divide(f64::from(team_season.points_against), games);
    let defensive_factor = defensive_average
        .zip(averages.schedule_points_for)
        .and_then(|(avg, scored)| calc.divide(avg, scored));
    let defensive_index = blend(defensive_average, defensive_factor);

    let final_pythagorean_winning_percentage = offensive_index
        .zip(defensive_index)
        .and_then(|(off, def)| calc.pythagorean_winning_percentage(off, def));

    Some(TeamIndices {
        offensive_average,
        offensive_factor,
        offensive_index,
        defensive_average,
        defensive_factor,
        defensive_index,
        final_pythagorean_winning_percentage,
    })
}

/// One line of a ranking table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingRow {
    pub rank: usize,
    pub team_name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub offensive_index: Option<f64>,
    pub defensive_index: Option<f64>,
    pub final_pythagorean_winning_percentage: Option<f64>,
}

fn ranking_value(team_season: &TeamSeason, kind: RankingKind) -> Option<f64> {
    match kind {
        RankingKind::Offensive => team_season.offensive_index,
        RankingKind::Defensive => team_season.defensive_index,
        RankingKind::Total => team_season.final_pythagorean_winning_percentage,
    }
}

/// Rank team seasons by `kind`. Offensive and total rank highest first,
/// defensive lowest first. Teams without a value are left out. Equal values
/// share a rank and the next rank skips ahead (1, 2, 2, 4).
pub fn rank_team_seasons(team_seasons: &[TeamSeason], kind: RankingKind) -> Vec<RankingRow> {
    let mut ranked: Vec<(&TeamSeason, f64)> = team_seasons
        .iter()
        .filter_map(|ts| ranking_value(ts, kind).map(|value| (ts, value)))
        .collect();

    ranked.sort_by(|(a, av), (b, bv)| {
        let by_value = match kind {
            RankingKind::Defensive => av.total_cmp(bv),
            RankingKind::Offensive | RankingKind::Total => bv.total_cmp(av),
        };
        by_value.then_with(|| a.team_name.cmp(&b.team_name))
    });

    let mut rows = Vec::with_capacity(ranked.len());
    let mut previous: Option<f64> = None;
    let mut rank = 0;
    for (position, (ts, value)) in ranked.into_iter().enumerate() {
        if previous.map_or(true, |p| p.total_cmp(&value) != Ordering::Equal) {
            rank = position + 1;
        }
        previous = Some(value);

        rows.push(RankingRow {
            rank,
            team_name: ts.team_name.clone(),
            wins: ts.wins,
            losses: ts.losses,
            ties: ts.ties,
            offensive_index: ts.offensive_index,
            defensive_index: ts.defensive_index,
            final_pythagorean_winning_percentage: ts.final_pythagorean_winning_percentage,
        });
    }
    rows
}
