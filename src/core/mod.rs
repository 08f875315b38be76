//! Core utilities shared by the storage and service layers
//!
//! - `cache`: in-memory LRU cache for season-level queries

pub mod cache;

pub use cache::{CacheManager, QueryCache, SeasonQueryKey};
