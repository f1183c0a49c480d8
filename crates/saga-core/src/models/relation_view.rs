//! Relation view: a directed, time-scoped attribute override.

use serde::{Deserialize, Serialize};

use super::entity_snapshot::AttributeMap;
use super::ids::{EntityId, RelationId};

/// Tie-break priority of an override. Orders relations that share the same
/// effective start time; a manual edit outranks an event-generated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationPriority {
    Event,
    Manual,
}

impl RelationPriority {
    /// Sort rank. Higher ranks land later in the replay order and therefore
    /// win the merge: Manual (2) beats Event (1) at the same effective time.
    pub fn rank(self) -> u8 {
        match self {
            RelationPriority::Event => 1,
            RelationPriority::Manual => 2,
        }
    }
}

/// A time-scoped override targeting one entity, as read from the store.
///
/// Bounds come in two flavors. A literal bound is the `valid_from` /
/// `valid_to` field itself. A dynamic bound (`*_is_dynamic` set) tracks
/// `source_event_date` instead — the live date of the event that created
/// the relation, re-fetched by the store on every read so that moving the
/// event moves the override. A dynamic flag fully supersedes the literal
/// field; when no event date is present the bound resolves to nothing,
/// never to the literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationView {
    /// Unique id. Final deterministic tie-breaker in the replay order.
    pub id: RelationId,
    /// Entity the override applies to.
    pub target_id: EntityId,
    /// Current date of the originating event, if event-anchored.
    pub source_event_date: Option<f64>,
    /// Literal lower bound (inclusive).
    pub valid_from: Option<f64>,
    /// Literal upper bound (exclusive).
    pub valid_to: Option<f64>,
    /// Lower bound tracks `source_event_date` instead of `valid_from`.
    pub valid_from_is_dynamic: bool,
    /// Upper bound tracks `source_event_date` instead of `valid_to`.
    pub valid_to_is_dynamic: bool,
    /// Tie-break priority at equal effective start times.
    pub priority: RelationPriority,
    /// Modification timestamp, secondary tie-breaker.
    pub modified_at: f64,
    /// Attribute overrides contributed while the relation is active.
    pub payload: AttributeMap,
}
