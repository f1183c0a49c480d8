//! Pure temporal resolution — filter, order, and merge time-scoped overrides.

pub mod activity;
pub mod bounds;
pub mod merge;
pub mod ordering;

pub use activity::{active_at, is_active};
pub use bounds::{effective_window, EffectiveWindow};
pub use merge::overlay_payloads;
pub use ordering::order_for_replay;

use saga_core::errors::ResolveError;
use saga_core::models::{AttributeMap, EntitySnapshot, RelationView, ResolvedState};

/// Resolve `entity`'s effective attribute state at `time`.
///
/// `relations` must be exactly the incoming relations of `entity`; the
/// resolver does not filter by target. With `include_base` false the result
/// holds only the union of applied overrides — "what changed" instead of
/// full state.
///
/// Algorithm:
/// 1. Resolve each relation's effective window. Dynamic bounds read the
///    live event date; relations with no resolvable lower bound are
///    dropped.
/// 2. Keep relations active at `time`: `[from, to)`, collapsed windows at
///    their single instant only.
/// 3. Sort by `(effective_valid_from, priority rank, modified_at, id)`.
/// 4. Overlay payloads in order onto the base attributes (or an empty map).
///
/// Pure: borrows all inputs, mutates nothing, and identical inputs produce
/// deeply equal outputs. The only failure is a non-finite `time`, which
/// would break the sort's total order.
pub fn resolve(
    entity: &EntitySnapshot,
    relations: &[RelationView],
    time: f64,
    include_base: bool,
) -> Result<ResolvedState, ResolveError> {
    if !time.is_finite() {
        return Err(ResolveError::InvalidTime(time));
    }

    let mut active = activity::active_at(relations, time);
    ordering::order_for_replay(&mut active);

    let base = if include_base {
        entity.attributes.clone()
    } else {
        AttributeMap::new()
    };

    Ok(ResolvedState::new(merge::overlay_payloads(base, &active)))
}
