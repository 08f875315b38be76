//! In-memory LRU cache for repeated season-level queries
//!
//! Reports (standings, rankings, schedules, predictions) all start from the
//! full list of team seasons for one season. The list is cached per database
//! and dropped whenever a team season row is written.

use lru::LruCache;
use std::{
    hash::Hash,
    num::NonZeroUsize,
    sync::{Mutex, MutexGuard},
};

use crate::storage::models::TeamSeason;
use crate::SeasonId;

/// Default number of seasons whose team lists stay in memory
pub const DEFAULT_SEASON_CAPACITY: usize = 32;

/// Key for cached season-level queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonQueryKey {
    TeamSeasons(SeasonId),
    TeamSeasonsByLeague(SeasonId),
}

impl SeasonQueryKey {
    pub fn season(&self) -> SeasonId {
        match self {
            SeasonQueryKey::TeamSeasons(season) | SeasonQueryKey::TeamSeasonsByLeague(season) => {
                *season
            }
        }
    }
}

/// Thread-safe LRU cache of query results
pub struct QueryCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    memory_cache: Mutex<LruCache<K, V>>,
}

impl<K, V> QueryCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a cache holding at most `memory_capacity` entries (minimum 1)
    pub fn new(memory_capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory_cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<K, V>> {
        // Poisoning is ignored; every LRU operation is atomic.
        self.memory_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.lock().get(key).cloned()
    }

    pub fn put(&self, key: K, value: V) {
        self.lock().put(key, value);
    }

    /// Drop every entry matching `predicate`
    pub fn invalidate_where(&self, predicate: impl Fn(&K) -> bool) {
        let mut cache = self.lock();
        let stale: Vec<K> = cache
            .iter()
            .filter(|(key, _)| predicate(key))
            .map(|(key, _)| key.clone())
            .collect();
        for key in stale {
            cache.pop(&key);
        }
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

/// Caches owned by one database handle
pub struct CacheManager {
    pub team_seasons: QueryCache<SeasonQueryKey, Vec<TeamSeason>>,
}

impl CacheManager {
    pub fn new() -> Self {
        Self {
            team_seasons: QueryCache::new(DEFAULT_SEASON_CAPACITY),
        }
    }

    /// Forget everything cached for one season
    pub fn invalidate_season(&self, season: SeasonId) {
        self.team_seasons
            .invalidate_where(|key| key.season() == season);
    }

    pub fn clear_all_memory(&self) {
        self.team_seasons.clear();
    }
}

impl Default for CacheManager {
    fn default() -> Self {
        Self::new()
    }
}
