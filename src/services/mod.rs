//! Units of work over the database
//!
//! A service loads what it needs through `FootballDatabase`, runs the
//! arithmetic in `stats`, and writes the result back inside one transaction.
//! The season is always passed in explicitly.

pub mod games;
pub mod predictions;
pub mod rankings;
pub mod seasons;


pub use games::{add_game, edit_game, remove_game};
pub use predictions::predict;
pub use rankings::{update_rankings, update_rankings_by_team_season};
pub use seasons::{open_season, realign_team_season, OpenedSeason};
