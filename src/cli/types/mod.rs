//! Type-safe wrappers and enums for pro-football data.

pub mod filters;
pub mod ids;
pub mod time;

pub use filters::{GameFilter, RankingKind};
pub use ids::GameId;
pub use time::{SeasonId, Week};
