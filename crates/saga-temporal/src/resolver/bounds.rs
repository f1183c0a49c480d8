//! Effective validity windows — resolving dynamic event-anchoring.

use saga_core::models::RelationView;

/// A relation's resolved `[from, to)` window at replay time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveWindow {
    /// Inclusive lower bound.
    pub from: f64,
    /// Exclusive upper bound; `None` means open-ended.
    pub to: Option<f64>,
}

/// Resolve a relation's effective window.
///
/// A dynamic bound reads `source_event_date`; a literal bound reads its own
/// field. The dynamic flag fully supersedes the literal value: a dynamic
/// bound with no event date resolves to `None`, it never falls back to the
/// literal field. A relation whose lower bound resolves to `None` has no
/// window at all and returns `None` — it can never apply, and the resolver
/// skips it rather than erroring, since half-edited relations are an
/// expected steady state.
pub fn effective_window(relation: &RelationView) -> Option<EffectiveWindow> {
    let from = if relation.valid_from_is_dynamic {
        relation.source_event_date
    } else {
        relation.valid_from
    }?;

    let to = if relation.valid_to_is_dynamic {
        relation.source_event_date
    } else {
        relation.valid_to
    };

    Some(EffectiveWindow { from, to })
}
