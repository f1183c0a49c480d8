//! Resolution subsystem configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the resolution manager and its cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Cached times kept per entity before that entity's slice is reset.
    /// 0 disables the bound.
    pub max_times_per_entity: usize,

    /// Emit a debug line for every cache hit, miss, and invalidation.
    /// Off by default so a scrubbing UI does not flood the log.
    pub log_cache_events: bool,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            max_times_per_entity: 256,
            log_cache_events: false,
        }
    }
}
