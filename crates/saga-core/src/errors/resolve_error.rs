//! Errors from the pure resolver.

/// Resolution failures.
///
/// Deliberately narrow: malformed relations are skipped, not errored, since
/// partially edited override data is an expected steady state. The only hard
/// failure is a query time that breaks the sort's total order.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("invalid query time {0}: time must be finite")]
    InvalidTime(f64),
}
