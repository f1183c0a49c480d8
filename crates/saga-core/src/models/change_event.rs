//! Mutation notifications fed from the store's write path into the manager.

use serde::{Deserialize, Serialize};

use super::ids::{EntityId, EventId, RelationId};

/// A mutation that may invalidate cached resolutions.
///
/// Emitted by whatever owns the write path (a command layer, an import job)
/// and routed through `StateManager::apply_change`. One typed seam instead
/// of implicit signal wiring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeEvent {
    /// A relation was added, edited, or removed.
    RelationChanged {
        relation_id: RelationId,
        source_id: EventId,
        target_id: EntityId,
    },
    /// An event's date moved; relations anchored to it shift with it.
    EventDateChanged { event_id: EventId },
    /// An entity's base attributes changed, or the entity was created or
    /// deleted.
    EntityChanged { entity_id: EntityId },
    /// Mutation too broad to invalidate precisely.
    BulkImport,
}
