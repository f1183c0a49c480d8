//! Applicability filter — which relations are active at a query time.

use saga_core::models::RelationView;

use super::bounds::{effective_window, EffectiveWindow};

/// True when `time` falls inside `window`.
///
/// The lower bound is inclusive, the upper bound exclusive. A window
/// collapsed to a single instant (`from == to`) is the one exception: it is
/// active exactly at that instant, the "at-time" semantics instantaneous
/// events use. An inverted window (`to < from`) is never active.
pub fn is_active(window: EffectiveWindow, time: f64) -> bool {
    match window.to {
        Some(to) if to == window.from => time == window.from,
        Some(to) => window.from <= time && time < to,
        None => window.from <= time,
    }
}

/// Pair each relation with its effective window and keep those active at
/// `time`. Relations with no resolvable window are dropped here.
pub fn active_at(relations: &[RelationView], time: f64) -> Vec<(&RelationView, EffectiveWindow)> {
    relations
        .iter()
        .filter_map(|relation| effective_window(relation).map(|window| (relation, window)))
        .filter(|(_, window)| is_active(*window, time))
        .collect()
}
