//! Win/loss records and the statistics derived directly from them

use super::Calculator;
use crate::error::{FootballError, Result};
use crate::storage::models::TeamSeason;
use serde::Serialize;
use std::cmp::Ordering;

/// Result of one game from one team's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameOutcome {
    Win,
    Loss,
    Tie,
}

impl GameOutcome {
    pub fn from_scores(own_score: u32, opponent_score: u32) -> Self {
        match own_score.cmp(&opponent_score) {
            Ordering::Greater => GameOutcome::Win,
            Ordering::Less => GameOutcome::Loss,
            Ordering::Equal => GameOutcome::Tie,
        }
    }
}

/// Whether a game is being added to or taken out of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Apply,
    Reverse,
}

/// Add or remove one game's result on `team_season` and refresh the derived
/// percentages. A count that would leave the range of `u32` is an error and
/// leaves the record unchanged.
pub fn apply_game(
    team_season: &mut TeamSeason,
    own_score: u32,
    opponent_score: u32,
    direction: Direction,
    calc: &dyn Calculator,
) -> Result<()> {
    let outcome = GameOutcome::from_scores(own_score, opponent_score);

    match direction {
        Direction::Apply => {
            let overflow = || FootballError::RecordOverflow {
                team: team_season.key().to_string(),
            };
            let games = team_season.games.checked_add(1).ok_or_else(overflow)?;
            let points_for = team_season
                .points_for
                .checked_add(own_score)
                .ok_or_else(overflow)?;
            let points_against = team_season
                .points_against
                .checked_add(opponent_score)
                .ok_or_else(overflow)?;
            let (wins, losses, ties) = match outcome {
                GameOutcome::Win => (
                    team_season.wins.checked_add(1).ok_or_else(overflow)?,
                    team_season.losses,
                    team_season.ties,
                ),
                GameOutcome::Loss => (
                    team_season.wins,
                    team_season.losses.checked_add(1).ok_or_else(overflow)?,
                    team_season.ties,
                ),
                GameOutcome::Tie => (
                    team_season.wins,
                    team_season.losses,
                    team_season.ties.checked_add(1).ok_or_else(overflow)?,
                ),
            };

            team_season.games = games;
            team_season.points_for = points_for;
            team_season.points_against = points_against;
            team_season.wins = wins;
            team_season.losses = losses;
            team_season.ties = ties;
        }
        Direction::Reverse => {
            let underflow = || FootballError::RecordUnderflow {
                team: team_season.key().to_string(),
            };
            let games = team_season.games.checked_sub(1).ok_or_else(underflow)?;
            let points_for = team_season
                .points_for
                .checked_sub(own_score)
                .ok_or_else(underflow)?;
            let points_against = team_season
                .points_against
                .checked_sub(opponent_score)
                .ok_or_else(underflow)?;
            let (wins, losses, ties) = match outcome {
                GameOutcome::Win => (
                    team_season.wins.checked_sub(1).ok_or_else(underflow)?,
                    team_season.losses,
                    team_season.ties,
                ),
                GameOutcome::Loss => (
                    team_season.wins,
                    team_season.losses.checked_sub(1).ok_or_else(underflow)?,
                    team_season.ties,
                ),
                GameOutcome::Tie => (
                    team_season.wins,
                    team_season.losses,
                    team_season.ties.checked_sub(1).ok_or_else(underflow)?,
                ),
            };

            team_season.games = games;
            team_season.points_for = points_for;
            team_season.points_against = points_against;
            team_season.wins = wins;
            team_season.losses = losses;
            team_season.ties = ties;
        }
    }

    refresh_record_statistics(team_season, calc);
    Ok(())
}

/// Winning percentage and Pythagorean wins/losses from the raw record
pub fn refresh_record_statistics(team_season: &mut TeamSeason, calc: &dyn Calculator) {
    team_season.winning_percentage =
        calc.winning_percentage(team_season.wins, team_season.losses, team_season.ties);

    let games = f64::from(team_season.games);
    let expected = if team_season.games == 0 {
        None
    } else {
        calc.pythagorean_winning_percentage(
            f64::from(team_season.points_for),
            f64::from(team_season.points_against),
        )
    };

    team_season.pythagorean_wins = expected.map(|pct| games * pct);
    team_season.pythagorean_losses = team_season.pythagorean_wins.map(|wins| games - wins);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::DefaultCalculator;
    use crate::SeasonId;

    fn empty() -> TeamSeason {
        TeamSeason::new("Dolphins", SeasonId::new(1972), "NFL")
    }

    #[test]
    fn test_outcome_from_scores() {
        assert_eq!(GameOutcome::from_scores(21, 14), GameOutcome::Win);
        assert_eq!(GameOutcome::from_scores(14, 21), GameOutcome::Loss);
        assert_eq!(GameOutcome::from_scores(17, 17), GameOutcome::Tie);
    }

    #[test]
    fn test_apply_win() {
        let calc = DefaultCalculator::new(2.0);
        let mut ts = empty();
        apply_game(&mut ts, 20, 10, Direction::Apply, &calc).unwrap();

        assert_eq!((ts.games, ts.wins, ts.losses, ts.ties), (1, 1, 0, 0));
        assert_eq!((ts.points_for, ts.points_against), (20, 10));
        assert_eq!(ts.winning_percentage, Some(1.0));
        // 400 / 500
        assert!((ts.pythagorean_wins.unwrap() - 0.8).abs() < 1e-9);
        assert!((ts.pythagorean_losses.unwrap() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_apply_tie_counts_half() {
        let calc = DefaultCalculator::default();
        let mut ts = empty();
        apply_game(&mut ts, 24, 10, Direction::Apply, &calc).unwrap();
        apply_game(&mut ts, 13, 13, Direction::Apply, &calc).unwrap();

        assert_eq!(ts.ties, 1);
        assert_eq!(ts.winning_percentage, Some(0.75));
    }

    #[test]
    fn test_apply_then_reverse_restores_record() {
        let calc = DefaultCalculator::default();
        let mut ts = empty();
        apply_game(&mut ts, 27, 17, Direction::Apply, &calc).unwrap();
        let snapshot = ts.clone();

        apply_game(&mut ts, 3, 35, Direction::Apply, &calc).unwrap();
        apply_game(&mut ts, 3, 35, Direction::Reverse, &calc).unwrap();

        assert_eq!(ts, snapshot);
    }

    #[test]
    fn test_reverse_last_game_clears_percentages() {
        let calc = DefaultCalculator::default();
        let mut ts = empty();
        apply_game(&mut ts, 27, 17, Direction::Apply, &calc).unwrap();
        apply_game(&mut ts, 27, 17, Direction::Reverse, &calc).unwrap();

        assert_eq!(ts.games, 0);
        assert_eq!(ts.winning_percentage, None);
        assert_eq!(ts.pythagorean_wins, None);
        assert_eq!(ts.pythagorean_losses, None);
    }

    #[test]
    fn test_reverse_on_empty_record_fails() {
        let calc = DefaultCalculator::default();
        let mut ts = empty();
        let result = apply_game(&mut ts, 10, 7, Direction::Reverse, &calc);

        assert!(matches!(result, Err(FootballError::RecordUnderflow { .. })));
        assert_eq!(ts, empty());
    }

    #[test]
    fn test_reverse_wrong_outcome_fails_without_partial_update() {
        let calc = DefaultCalculator::default();
        let mut ts = empty();
        apply_game(&mut ts, 10, 7, Direction::Apply, &calc).unwrap();
        let snapshot = ts.clone();

        // Reversing a loss that was never recorded
        let result = apply_game(&mut ts, 7, 10, Direction::Reverse, &calc);
        assert!(result.is_err());
        assert_eq!(ts, snapshot);
    }

    #[test]
    fn test_apply_overflowing_points_fails_without_partial_update() {
        let calc = DefaultCalculator::default();
        let mut ts = empty();
        apply_game(&mut ts, u32::MAX, 0, Direction::Apply, &calc).unwrap();
        let snapshot = ts.clone();

        let result = apply_game(&mut ts, 1, 0, Direction::Apply, &calc);
        assert!(matches!(result, Err(FootballError::RecordOverflow { .. })));
        assert_eq!(ts, snapshot);
    }

    #[test]
    fn test_apply_overflowing_points_against_fails() {
        let calc = DefaultCalculator::default();
        let mut ts = empty();
        apply_game(&mut ts, 0, u32::MAX, Direction::Apply, &calc).unwrap();

        let result = apply_game(&mut ts, 0, 7, Direction::Apply, &calc);
        assert!(matches!(result, Err(FootballError::RecordOverflow { .. })));
        assert_eq!(ts.games, 1);
    }
}
