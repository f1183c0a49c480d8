//! Shallow payload overlay.

use saga_core::models::{AttributeMap, RelationView};

use super::bounds::EffectiveWindow;

/// Apply each relation's payload on top of `base`, in replay order.
///
/// Shallow overwrite: a payload key replaces the current value wholesale.
/// No deep merge, no array concatenation — last applied wins per key, keys
/// untouched by any payload keep their prior value. Empty payloads are
/// inert.
pub fn overlay_payloads(
    mut base: AttributeMap,
    ordered: &[(&RelationView, EffectiveWindow)],
) -> AttributeMap {
    for (relation, _) in ordered {
        for (key, value) in &relation.payload {
            base.insert(key.clone(), value.clone());
        }
    }
    base
}
