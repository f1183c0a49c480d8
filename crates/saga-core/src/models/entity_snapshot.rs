//! Entity snapshot: the immutable base state a resolution starts from.

use serde::{Deserialize, Serialize};

use super::ids::EntityId;

/// Attribute name → value mapping shared by base states, payloads, and
/// resolved states. Values are tagged-union JSON values (string, number,
/// bool, array, nested map, null), so merge semantics and equality are
/// well-defined.
pub type AttributeMap = serde_json::Map<String, serde_json::Value>;

/// Read-only view of an entity at resolution time, supplied by the store.
///
/// The resolver never mutates a snapshot; it clones `attributes` as the
/// base layer of a resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// Entity this snapshot belongs to.
    pub id: EntityId,
    /// Base attributes before any override is applied.
    pub attributes: AttributeMap,
}

impl EntitySnapshot {
    pub fn new(id: impl Into<EntityId>, attributes: AttributeMap) -> Self {
        Self {
            id: id.into(),
            attributes,
        }
    }
}
