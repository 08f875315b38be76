//! Pro Football Statistics Library
//!
//! Tracks leagues, conferences, divisions, teams and seasons, records games,
//! and derives the statistics built on top of them: winning percentage,
//! Pythagorean expectation, strength-of-schedule adjusted offensive and
//! defensive indices, rankings, standings and score predictions.
//!
//! ## Features
//!
//! - **Game Processing**: Every stored game updates both teams' season records
//! - **Schedule Strength**: Opponent records with head-to-head games factored out
//! - **Rankings**: Offensive, defensive and total rankings from adjusted indices
//! - **Database Storage**: Local SQLite database with an in-memory query cache
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pro_football::{
//!     services, stats::DefaultCalculator, storage::{FootballDatabase, Game},
//!     SeasonId, Week,
//! };
//!
//! # fn example() -> pro_football::Result<()> {
//! let mut db = FootballDatabase::open_default()?;
//! let calc = DefaultCalculator::default();
//! let season = SeasonId::new(1985);
//!
//! services::add_game(&mut db, &calc, Game::new(season, Week::new(1), "Packers", 7, "Bears", 23))?;
//! services::update_rankings(&mut db, &calc, season)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set a default season to avoid passing `--season` to every command:
//! ```bash
//! export PRO_FOOTBALL_SEASON=1985
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod services;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{GameId, RankingKind, SeasonId, Week};
pub use error::{FootballError, Result};
pub use storage::FootballDatabase;

pub const SEASON_ENV_VAR: &str = config::SEASON_ENV_VAR;
