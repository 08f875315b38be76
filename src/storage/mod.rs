//! Storage layer for the pro football database
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection, schema and transactions
//! - `queries`: CRUD for leagues, conferences, divisions, teams and seasons
//! - `team_seasons`, `games`: Repositories for the two high-traffic tables
//! - `procedures`: Schedule, standings and league aggregates

pub mod games;
pub mod models;
pub mod procedures;
pub mod queries;
pub mod schema;
pub mod team_seasons;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::FootballDatabase;
