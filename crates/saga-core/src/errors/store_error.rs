//! Errors reported by `Store` implementations.

/// Failures in the external store backing the engine.
///
/// The engine never retries: a store failure aborts the operation that
/// triggered the lookup and leaves the cache untouched.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("entity lookup failed for '{id}': {reason}")]
    EntityLookupFailed { id: String, reason: String },

    #[error("relation lookup failed for entity '{id}': {reason}")]
    RelationLookupFailed { id: String, reason: String },

    #[error("outgoing-target lookup failed for event '{id}': {reason}")]
    TargetLookupFailed { id: String, reason: String },

    #[error("store backend error: {0}")]
    Backend(String),
}
