//! Deterministic replay order for active relations.

use std::cmp::Ordering;

use saga_core::models::RelationView;

use super::bounds::EffectiveWindow;

/// Sort active relations ascending by
/// `(effective_valid_from, priority rank, modified_at, id)`.
///
/// Effective time dominates. Priority only breaks ties at the same effective
/// time — Manual outranks Event, so manual overrides land later in the
/// replay and win the merge. `modified_at` and `id` make the key total, so
/// the order never depends on how the store happened to iterate its rows.
/// Floats compare via `total_cmp`; non-finite times are rejected before the
/// sort, so the IEEE edge cases of `total_cmp` never come into play.
pub fn order_for_replay(active: &mut [(&RelationView, EffectiveWindow)]) {
    active.sort_by(compare);
}

fn compare(a: &(&RelationView, EffectiveWindow), b: &(&RelationView, EffectiveWindow)) -> Ordering {
    let (ra, wa) = a;
    let (rb, wb) = b;
    wa.from
        .total_cmp(&wb.from)
        .then_with(|| ra.priority.rank().cmp(&rb.priority.rank()))
        .then_with(|| ra.modified_at.total_cmp(&rb.modified_at))
        .then_with(|| ra.id.cmp(&rb.id))
}
