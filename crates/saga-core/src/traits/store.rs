//! Store — the lookup interface the resolution engine consumes.

use crate::errors::StoreError;
use crate::models::{EntityId, EntitySnapshot, EventId, RelationView};

/// Synchronous record store behind the resolution engine.
///
/// Implemented by the embedding application (a database layer, an in-memory
/// world model). All calls are expected to be fast and in-process; the
/// manager issues them inline and never retries.
///
/// Consistency contract: the manager fetches an entity and its incoming
/// relations as two calls within one resolution. Implementations that allow
/// writers concurrent with resolution must answer both calls from a single
/// consistent snapshot; the manager adds no cross-call locking of its own.
pub trait Store: Send + Sync {
    /// Base snapshot of `id`, or `None` if the entity does not exist.
    fn get_entity(&self, id: &EntityId) -> Result<Option<EntitySnapshot>, StoreError>;

    /// Every relation targeting `entity_id`. Each view must carry a freshly
    /// resolved `source_event_date` when the underlying relation is
    /// event-anchored; the engine never caches event dates itself.
    fn get_incoming_relations(&self, entity_id: &EntityId)
        -> Result<Vec<RelationView>, StoreError>;

    /// Target entities of every relation originating at `event_id`. Used
    /// only for invalidation after an event's date moves; an event with no
    /// outgoing relations returns an empty list, not an error.
    fn get_outgoing_relation_targets(&self, event_id: &EventId)
        -> Result<Vec<EntityId>, StoreError>;
}
