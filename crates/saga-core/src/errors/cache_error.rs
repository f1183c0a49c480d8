//! Errors from the resolution cache.

/// Cache-layer failures.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Cache keys are the bit pattern of a finite time; NaN and infinities
    /// have no usable key. The manager validates times before keying, so
    /// this only fires when the cache is driven directly.
    #[error("cannot key cache entry with non-finite time {0}")]
    InvalidTimeKey(f64),
}
