//! Shared test fixtures for the Saga workspace: an in-memory `Store`
//! implementation with mutation helpers, and constructors for entities and
//! relations with sensible defaults (override fields via struct update
//! syntax).

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};

use saga_core::errors::StoreError;
use saga_core::models::{
    AttributeMap, EntityId, EntitySnapshot, EventId, RelationId, RelationPriority, RelationView,
};
use saga_core::traits::Store;

/// A relation row as a real store would persist it: the originating event
/// id plus the view fields. `source_event_date` is not stored — it is
/// filled in from the event table at read time, which is exactly the
/// freshness contract `Store::get_incoming_relations` demands.
#[derive(Debug, Clone)]
pub struct RelationRecord {
    pub id: RelationId,
    pub source_id: EventId,
    pub target_id: EntityId,
    pub valid_from: Option<f64>,
    pub valid_to: Option<f64>,
    pub valid_from_is_dynamic: bool,
    pub valid_to_is_dynamic: bool,
    pub priority: RelationPriority,
    pub modified_at: f64,
    pub payload: AttributeMap,
}

impl RelationRecord {
    /// Materialize the read-time view, injecting the source event's current
    /// date.
    pub fn view(&self, source_event_date: Option<f64>) -> RelationView {
        RelationView {
            id: self.id.clone(),
            target_id: self.target_id.clone(),
            source_event_date,
            valid_from: self.valid_from,
            valid_to: self.valid_to,
            valid_from_is_dynamic: self.valid_from_is_dynamic,
            valid_to_is_dynamic: self.valid_to_is_dynamic,
            priority: self.priority,
            modified_at: self.modified_at,
            payload: self.payload.clone(),
        }
    }
}

#[derive(Default)]
struct StoreInner {
    entities: HashMap<EntityId, EntitySnapshot>,
    relations: Vec<RelationRecord>,
    event_dates: HashMap<EventId, f64>,
}

/// In-memory store backing the integration tests.
///
/// One `RwLock` over all tables, so every call answers from a consistent
/// snapshot as the `Store` contract requires. Mutation helpers mirror the
/// write paths a real store would have; `fail_next` arms a one-shot backend
/// error for exercising failure propagation.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<StoreInner>,
    fail_next: Mutex<Option<String>>,
    entity_lookups: AtomicUsize,
    relation_lookups: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert_entity(&self, entity: EntitySnapshot) {
        let mut inner = self.inner.write().unwrap();
        inner.entities.insert(entity.id.clone(), entity);
    }

    pub fn remove_entity(&self, id: impl Into<EntityId>) {
        let mut inner = self.inner.write().unwrap();
        inner.entities.remove(&id.into());
    }

    /// Insert or replace (by id) a relation record.
    pub fn upsert_relation(&self, record: RelationRecord) {
        let mut inner = self.inner.write().unwrap();
        if let Some(existing) = inner.relations.iter_mut().find(|r| r.id == record.id) {
            *existing = record;
        } else {
            inner.relations.push(record);
        }
    }

    pub fn remove_relation(&self, id: impl Into<RelationId>) {
        let id = id.into();
        let mut inner = self.inner.write().unwrap();
        inner.relations.retain(|r| r.id != id);
    }

    /// Replace one relation's payload in place, keeping its bounds.
    pub fn set_payload(&self, id: impl Into<RelationId>, payload: AttributeMap) {
        let id = id.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(record) = inner.relations.iter_mut().find(|r| r.id == id) {
            record.payload = payload;
        }
    }

    /// Set the live date of an event. Relations anchored to the event pick
    /// this up on their next fetch.
    pub fn set_event_date(&self, id: impl Into<EventId>, date: f64) {
        let mut inner = self.inner.write().unwrap();
        inner.event_dates.insert(id.into(), date);
    }

    pub fn clear_event_date(&self, id: impl Into<EventId>) {
        let mut inner = self.inner.write().unwrap();
        inner.event_dates.remove(&id.into());
    }

    /// Arm a one-shot failure: the next store call, whichever it is,
    /// returns `StoreError::Backend(reason)`.
    pub fn fail_next(&self, reason: &str) {
        *self.fail_next.lock().unwrap() = Some(reason.to_string());
    }

    /// How many times `get_entity` was called.
    pub fn entity_lookups(&self) -> usize {
        self.entity_lookups.load(Ordering::SeqCst)
    }

    /// How many times `get_incoming_relations` was called.
    pub fn relation_lookups(&self) -> usize {
        self.relation_lookups.load(Ordering::SeqCst)
    }

    fn take_failure(&self) -> Option<String> {
        self.fail_next.lock().unwrap().take()
    }
}

impl Store for MemoryStore {
    fn get_entity(&self, id: &EntityId) -> Result<Option<EntitySnapshot>, StoreError> {
        if let Some(reason) = self.take_failure() {
            return Err(StoreError::Backend(reason));
        }
        self.entity_lookups.fetch_add(1, Ordering::SeqCst);
        let inner = self.inner.read().unwrap();
        Ok(inner.entities.get(id).cloned())
    }

    fn get_incoming_relations(
        &self,
        entity_id: &EntityId,
    ) -> Result<Vec<RelationView>, StoreError> {
        if let Some(reason) = self.take_failure() {
            return Err(StoreError::Backend(reason));
        }
        self.relation_lookups.fetch_add(1, Ordering::SeqCst);
        let inner = self.inner.read().unwrap();
        Ok(inner
            .relations
            .iter()
            .filter(|r| &r.target_id == entity_id)
            .map(|r| r.view(inner.event_dates.get(&r.source_id).copied()))
            .collect())
    }

    fn get_outgoing_relation_targets(
        &self,
        event_id: &EventId,
    ) -> Result<Vec<EntityId>, StoreError> {
        if let Some(reason) = self.take_failure() {
            return Err(StoreError::Backend(reason));
        }
        let inner = self.inner.read().unwrap();
        let mut targets: Vec<EntityId> = Vec::new();
        for record in inner.relations.iter().filter(|r| &r.source_id == event_id) {
            if !targets.contains(&record.target_id) {
                targets.push(record.target_id.clone());
            }
        }
        Ok(targets)
    }
}

/// Attribute map from `(key, value)` pairs.
pub fn make_attrs(pairs: &[(&str, serde_json::Value)]) -> AttributeMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Entity snapshot with the given base attributes.
pub fn make_entity(id: &str, pairs: &[(&str, serde_json::Value)]) -> EntitySnapshot {
    EntitySnapshot::new(id, make_attrs(pairs))
}

/// Relation view with open defaults: no bounds, no event date, Event
/// priority, `modified_at` 0, empty payload. Override per test via struct
/// update syntax.
pub fn make_relation(id: &str, target: &str) -> RelationView {
    RelationView {
        id: id.into(),
        target_id: target.into(),
        source_event_date: None,
        valid_from: None,
        valid_to: None,
        valid_from_is_dynamic: false,
        valid_to_is_dynamic: false,
        priority: RelationPriority::Event,
        modified_at: 0.0,
        payload: AttributeMap::new(),
    }
}

/// Relation record with the same open defaults as [`make_relation`], for
/// loading into a [`MemoryStore`].
pub fn make_record(id: &str, source: &str, target: &str) -> RelationRecord {
    RelationRecord {
        id: id.into(),
        source_id: source.into(),
        target_id: target.into(),
        valid_from: None,
        valid_to: None,
        valid_from_is_dynamic: false,
        valid_to_is_dynamic: false,
        priority: RelationPriority::Event,
        modified_at: 0.0,
        payload: AttributeMap::new(),
    }
}
