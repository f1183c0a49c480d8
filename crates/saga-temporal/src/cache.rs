//! Resolved-state cache keyed by (entity, exact time).
//!
//! Two-level layout: entity → (time → resolved state). The outer level is a
//! concurrent map, so invalidating an entity is a single `remove` that drops
//! every cached time at once; the inner map is a plain `HashMap` guarded by
//! the outer shard lock.

use std::collections::HashMap;

use dashmap::DashMap;

use saga_core::errors::CacheError;
use saga_core::models::{EntityId, ResolvedState};

/// Cache key for one query time: the exact bit pattern of a finite `f64`.
///
/// Exact-match only. Two times that are "the same value" from different
/// computation paths can differ in the last bit and will key separate
/// entries; callers wanting hits across paths must canonicalize (for
/// example, round to a fixed precision) before querying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeKey(u64);

impl TimeKey {
    /// Key for `time`. Refuses NaN and infinities — their bit patterns
    /// would collide distinct "times" and nothing meaningful can be cached
    /// under them.
    pub fn new(time: f64) -> Result<Self, CacheError> {
        if !time.is_finite() {
            return Err(CacheError::InvalidTimeKey(time));
        }
        Ok(Self(time.to_bits()))
    }
}

/// In-memory cache of resolved states.
///
/// An entry is either fully valid or absent — the manager only inserts
/// after a successful resolve and removal is always whole-entity, so no
/// entry ever holds partial or stale-but-served data. Process-lifetime
/// only; nothing here survives a restart.
pub struct StateCache {
    inner: DashMap<EntityId, HashMap<TimeKey, ResolvedState>>,
    /// Cap on cached times per entity; 0 disables the bound.
    max_times_per_entity: usize,
}

impl StateCache {
    /// Create a cache bounding each entity to `max_times_per_entity` cached
    /// times (0 = unbounded).
    pub fn new(max_times_per_entity: usize) -> Self {
        Self {
            inner: DashMap::new(),
            max_times_per_entity,
        }
    }

    /// Cached state for `(entity_id, key)`, if present.
    pub fn get(&self, entity_id: &EntityId, key: TimeKey) -> Option<ResolvedState> {
        self.inner
            .get(entity_id)
            .and_then(|times| times.get(&key).cloned())
    }

    /// Insert a resolved state under `(entity_id, key)`.
    ///
    /// When the entity's slice is at the bound and `key` is new, the whole
    /// slice is reset first. Coarse, but dropping cache entries is always
    /// safe, and a scrubbing UI refills hot times immediately.
    pub fn insert(&self, entity_id: &EntityId, key: TimeKey, state: ResolvedState) {
        let mut times = self.inner.entry(entity_id.clone()).or_default();
        if self.max_times_per_entity > 0
            && times.len() >= self.max_times_per_entity
            && !times.contains_key(&key)
        {
            times.clear();
        }
        times.insert(key, state);
    }

    /// Drop every cached time for `entity_id`, returning how many entries
    /// were removed. Never partial: the whole slice goes or nothing was
    /// there.
    pub fn invalidate_entity(&self, entity_id: &EntityId) -> usize {
        self.inner
            .remove(entity_id)
            .map(|(_, times)| times.len())
            .unwrap_or(0)
    }

    /// Drop every entry unconditionally.
    pub fn clear(&self) {
        self.inner.clear();
    }

    /// Entities with at least one cached state.
    pub fn entity_count(&self) -> usize {
        self.inner.len()
    }

    /// Total cached states across all entities.
    pub fn state_count(&self) -> usize {
        self.inner.iter().map(|entry| entry.value().len()).sum()
    }
}
