mod change_event;
mod entity_snapshot;
mod ids;
mod relation_view;
mod resolved_state;
mod state_diff;

pub use change_event::ChangeEvent;
pub use entity_snapshot::{AttributeMap, EntitySnapshot};
pub use ids::{EntityId, EventId, RelationId};
pub use relation_view::{RelationPriority, RelationView};
pub use resolved_state::ResolvedState;
pub use state_diff::{AttributeChange, StateDiff};
