//! Memoization layer shared by all pipeline runs.
//!
//! One cache per upstream call site, keyed by that call's exact parameters,
//! with a common TTL and entry bound. Keeping the keys typed per call site
//! avoids cross-step collisions a single shared map would allow. Errors are
//! never cached; concurrent misses on the same key are coalesced by moka's
//! per-key loader.

use crate::domain::model::Building;
use crate::utils::error::LookupError;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct LookupCache {
    pub buildings: Cache<(), Arc<Vec<Building>>>,
    pub units: Cache<(String, String), Option<String>>,
    pub charges: Cache<(String, String), Arc<Vec<String>>>,
}

impl LookupCache {
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        Self {
            buildings: build(ttl, max_entries),
            units: build(ttl, max_entries),
            charges: build(ttl, max_entries),
        }
    }
}

fn build<K, V>(ttl: Duration, max_entries: u64) -> Cache<K, V>
where
    K: std::hash::Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    Cache::builder()
        .max_capacity(max_entries)
        .time_to_live(ttl)
        .build()
}

/// moka hands loader errors back as `Arc`; callers want the plain error.
pub fn unshare(err: Arc<LookupError>) -> LookupError {
    (*err).clone()
}
