//! Statistics arithmetic over team seasons and games
//!
//! Everything in here is pure: inputs are plain models, outputs are new values
//! or in-place updates to a `TeamSeason`. Loading and saving live in
//! `storage` and `services`.

pub mod calculator;
pub mod league;
pub mod predictor;
pub mod rankings;
pub mod records;
pub mod schedule;
pub mod standings;

pub use calculator::{Calculator, DefaultCalculator, DEFAULT_PYTHAGOREAN_EXPONENT};
pub use predictor::{predict_game, GamePrediction};
pub use rankings::{compute_indices, rank_team_seasons, RankingRow, TeamIndices};
pub use records::{apply_game, refresh_record_statistics, Direction, GameOutcome};
pub use schedule::{ScheduleAverages, ScheduleProfileEntry, ScheduleTotals};
pub use standings::{build_standings, StandingsGroup, StandingsRow};
