//! Resolved state: the output of a resolution.

use serde::{Deserialize, Serialize};

use super::entity_snapshot::AttributeMap;

/// Merged attribute state of one entity at one point in time: the base
/// attributes overlaid by every active payload in replay order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedState {
    pub attributes: AttributeMap,
}

impl ResolvedState {
    pub fn new(attributes: AttributeMap) -> Self {
        Self { attributes }
    }

    /// Value of one attribute, if set.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.attributes.get(key)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl From<AttributeMap> for ResolvedState {
    fn from(attributes: AttributeMap) -> Self {
        Self { attributes }
    }
}
