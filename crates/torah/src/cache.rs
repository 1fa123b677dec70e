//! Injectable memo of yearly occasion tables.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::error::TorahError;
use crate::table::{OccasionTable, make_torah_reading_occasions_table};

type CacheKey = (i32, bool, bool);

/// Thread-safe cache of occasion tables keyed by `(year, israel, jerusalem)`.
///
/// Tables are pure functions of their key, so entries never go stale and
/// are never evicted. Share one cache between callers by reference or by
/// wrapping it in an `Arc`.
#[derive(Debug, Default)]
pub struct OccasionCache {
    tables: DashMap<CacheKey, Arc<OccasionTable>>,
}

impl OccasionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached table for the key, building it on first use.
    ///
    /// Two threads missing on the same key may both build the table; the
    /// first insert wins and both receive the stored copy.
    pub fn get_or_build(
        &self,
        year: i32,
        israel: bool,
        jerusalem: bool,
    ) -> Result<Arc<OccasionTable>, TorahError> {
        let key = (year, israel, jerusalem);
        if let Some(table) = self.tables.get(&key) {
            debug!(year, israel, jerusalem, "occasion cache hit");
            return Ok(Arc::clone(table.value()));
        }

        // Build outside the shard lock so other keys stay available.
        debug!(year, israel, jerusalem, "occasion cache miss");
        let built = Arc::new(make_torah_reading_occasions_table(year, israel, jerusalem)?);
        let stored = self.tables.entry(key).or_insert(built);
        Ok(Arc::clone(stored.value()))
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Drops every cached table.
    pub fn clear(&self) {
        self.tables.clear();
    }
}
