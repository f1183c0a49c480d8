//! StateManager — cache-through resolution and invalidation orchestrator.

use std::sync::Arc;

use tracing::{debug, info, warn};

use saga_core::config::ResolutionConfig;
use saga_core::errors::{ResolveError, SagaResult};
use saga_core::models::{
    ChangeEvent, EntityId, EventId, RelationId, ResolvedState, StateDiff,
};
use saga_core::traits::Store;

use crate::cache::{StateCache, TimeKey};
use crate::resolver;

/// The resolution front end the application talks to.
///
/// Fetches entities and relations from the store, runs the resolver, and
/// caches results per `(entity, exact time)`. Invalidation is driven by the
/// store's write path, either through the explicit `on_*` methods or the
/// single `apply_change` seam. All methods take `&self`; the cache is a
/// concurrent map, so a manager shared across threads needs no external
/// locking.
pub struct StateManager {
    store: Arc<dyn Store>,
    cache: StateCache,
    config: ResolutionConfig,
}

impl StateManager {
    /// Create a manager over `store`.
    pub fn new(store: Arc<dyn Store>, config: ResolutionConfig) -> Self {
        let cache = StateCache::new(config.max_times_per_entity);
        Self {
            store,
            cache,
            config,
        }
    }

    /// Manager with default configuration.
    pub fn with_defaults(store: Arc<dyn Store>) -> Self {
        Self::new(store, ResolutionConfig::default())
    }

    /// Effective attribute state of `entity_id` at `time`.
    ///
    /// Cache hit: returns the stored state. Miss: fetches the entity and its
    /// incoming relations, resolves, caches under the exact time, returns.
    /// A missing entity resolves to an empty state with a warning — a UI
    /// refreshing after a delete races legitimately and should see a blank
    /// entity, not an error. Store failures propagate untouched and nothing
    /// is cached for them.
    ///
    /// Cache keys are exact bit patterns: times that differ in the last bit
    /// are cached separately. Callers reaching the same instant through
    /// different computation paths should canonicalize (e.g. round to a
    /// fixed precision) before querying.
    pub fn get_state(&self, entity_id: &EntityId, time: f64) -> SagaResult<ResolvedState> {
        if !time.is_finite() {
            return Err(ResolveError::InvalidTime(time).into());
        }
        let key = TimeKey::new(time)?;

        if let Some(state) = self.cache.get(entity_id, key) {
            if self.config.log_cache_events {
                debug!(entity_id = %entity_id, time, "resolution cache hit");
            }
            return Ok(state);
        }
        if self.config.log_cache_events {
            debug!(entity_id = %entity_id, time, "resolution cache miss");
        }

        let state = self.resolve_uncached(entity_id, time)?;
        self.cache.insert(entity_id, key, state.clone());
        Ok(state)
    }

    /// Resolve several entities at the same instant, preserving input
    /// order. Each entry goes through the cache; the first failure aborts.
    pub fn get_states(
        &self,
        entity_ids: &[EntityId],
        time: f64,
    ) -> SagaResult<Vec<(EntityId, ResolvedState)>> {
        let mut states = Vec::with_capacity(entity_ids.len());
        for entity_id in entity_ids {
            let state = self.get_state(entity_id, time)?;
            states.push((entity_id.clone(), state));
        }
        Ok(states)
    }

    /// Attribute-level difference of `entity_id` between two instants.
    ///
    /// Both states go through the cache. Equal instants short-circuit to an
    /// empty diff without touching the store (the time is still validated).
    pub fn diff_states(
        &self,
        entity_id: &EntityId,
        from_time: f64,
        to_time: f64,
    ) -> SagaResult<StateDiff> {
        if from_time == to_time {
            if !from_time.is_finite() {
                return Err(ResolveError::InvalidTime(from_time).into());
            }
            return Ok(StateDiff::empty(entity_id.clone(), from_time, to_time));
        }
        let before = self.get_state(entity_id, from_time)?;
        let after = self.get_state(entity_id, to_time)?;
        Ok(StateDiff::between(
            entity_id.clone(),
            from_time,
            to_time,
            &before,
            &after,
        ))
    }

    /// Drop every cached time for `entity_id`.
    pub fn invalidate_entity(&self, entity_id: &EntityId) {
        let dropped = self.cache.invalidate_entity(entity_id);
        if dropped > 0 && self.config.log_cache_events {
            debug!(entity_id = %entity_id, dropped, "invalidated cached states");
        }
    }

    /// A relation was added, edited, or removed. Only the target's cached
    /// states can be affected, so only the target is invalidated; the
    /// relation and source ids are taken for the log line.
    pub fn on_relation_changed(
        &self,
        relation_id: &RelationId,
        source_id: &EventId,
        target_id: &EntityId,
    ) {
        debug!(
            relation_id = %relation_id,
            source_id = %source_id,
            target_id = %target_id,
            "relation changed"
        );
        self.invalidate_entity(target_id);
    }

    /// An event's date moved, shifting every relation anchored to it.
    ///
    /// Invalidates each target entity of the event's outgoing relations.
    /// The target list is looked up from the store at call time — the
    /// manager keeps no event→target mapping of its own, to avoid a second
    /// source of truth. An event with no outgoing relations is a no-op.
    pub fn on_event_changed(&self, event_id: &EventId) -> SagaResult<()> {
        let targets = self.store.get_outgoing_relation_targets(event_id)?;
        if targets.is_empty() {
            return Ok(());
        }
        for target in &targets {
            self.cache.invalidate_entity(target);
        }
        info!(event_id = %event_id, targets = targets.len(), "invalidated targets of moved event");
        Ok(())
    }

    /// Drop the entire cache. Escape hatch for mutations too broad to
    /// invalidate precisely, such as a bulk import.
    pub fn clear_all(&self) {
        let dropped = self.cache.state_count();
        self.cache.clear();
        info!(dropped, "cleared resolution cache");
    }

    /// Route a typed mutation notification to the matching invalidation.
    /// The message-passing seam for write paths that prefer one channel
    /// over calling the `on_*` methods directly.
    pub fn apply_change(&self, change: &ChangeEvent) -> SagaResult<()> {
        match change {
            ChangeEvent::RelationChanged {
                relation_id,
                source_id,
                target_id,
            } => {
                self.on_relation_changed(relation_id, source_id, target_id);
                Ok(())
            }
            ChangeEvent::EventDateChanged { event_id } => self.on_event_changed(event_id),
            ChangeEvent::EntityChanged { entity_id } => {
                self.invalidate_entity(entity_id);
                Ok(())
            }
            ChangeEvent::BulkImport => {
                self.clear_all();
                Ok(())
            }
        }
    }

    /// Entities with at least one cached state.
    pub fn cached_entity_count(&self) -> usize {
        self.cache.entity_count()
    }

    /// Total cached states across all entities.
    pub fn cached_state_count(&self) -> usize {
        self.cache.state_count()
    }

    /// Miss path: fetch from the store and resolve. Nothing is cached here;
    /// the caller inserts only after this returns Ok, so a failed fetch can
    /// never poison an entry.
    fn resolve_uncached(&self, entity_id: &EntityId, time: f64) -> SagaResult<ResolvedState> {
        let Some(entity) = self.store.get_entity(entity_id)? else {
            warn!(entity_id = %entity_id, "entity not found, resolving to empty state");
            return Ok(ResolvedState::default());
        };
        let relations = self.store.get_incoming_relations(entity_id)?;
        let state = resolver::resolve(&entity, &relations, time, true)?;
        Ok(state)
    }
}
