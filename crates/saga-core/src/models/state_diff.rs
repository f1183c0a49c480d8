//! State diff types for comparing one entity's state at two times.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ids::EntityId;
use super::resolved_state::ResolvedState;

/// Result of comparing an entity's resolved states at `from_time` and
/// `to_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateDiff {
    /// Entity that was compared.
    pub entity_id: EntityId,
    /// Earlier instant of the comparison.
    pub from_time: f64,
    /// Later instant of the comparison.
    pub to_time: f64,
    /// Keys present at `to_time` but not `from_time`.
    pub added: Vec<AttributeChange>,
    /// Keys present at `from_time` but not `to_time`.
    pub removed: Vec<AttributeChange>,
    /// Keys present at both times with different values.
    pub changed: Vec<AttributeChange>,
}

/// A single attribute-level difference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeChange {
    /// Attribute that differs.
    pub key: String,
    /// Value at `from_time`, absent for added keys.
    pub old_value: Option<Value>,
    /// Value at `to_time`, absent for removed keys.
    pub new_value: Option<Value>,
}

impl StateDiff {
    /// Diff with no differences, used as the equal-instant fast path.
    pub fn empty(entity_id: EntityId, from_time: f64, to_time: f64) -> Self {
        Self {
            entity_id,
            from_time,
            to_time,
            added: Vec::new(),
            removed: Vec::new(),
            changed: Vec::new(),
        }
    }

    /// Compute the attribute-level difference between two resolved states.
    ///
    /// Iterates attribute maps in key order, so the change lists come out
    /// sorted by key and the diff is deterministic.
    pub fn between(
        entity_id: EntityId,
        from_time: f64,
        to_time: f64,
        before: &ResolvedState,
        after: &ResolvedState,
    ) -> Self {
        let mut diff = Self::empty(entity_id, from_time, to_time);

        for (key, new_value) in &after.attributes {
            match before.attributes.get(key) {
                None => diff.added.push(AttributeChange {
                    key: key.clone(),
                    old_value: None,
                    new_value: Some(new_value.clone()),
                }),
                Some(old_value) if old_value != new_value => {
                    diff.changed.push(AttributeChange {
                        key: key.clone(),
                        old_value: Some(old_value.clone()),
                        new_value: Some(new_value.clone()),
                    })
                }
                Some(_) => {}
            }
        }

        for (key, old_value) in &before.attributes {
            if !after.attributes.contains_key(key) {
                diff.removed.push(AttributeChange {
                    key: key.clone(),
                    old_value: Some(old_value.clone()),
                    new_value: None,
                });
            }
        }

        diff
    }

    /// True when nothing changed between the two instants.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}
