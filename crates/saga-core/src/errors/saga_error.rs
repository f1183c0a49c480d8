use super::{CacheError, ResolveError, StoreError};

/// Top-level error type for the Saga engine.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum SagaError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias.
pub type SagaResult<T> = Result<T, SagaError>;
