//! # saga-temporal
//!
//! Temporal state resolution for Saga worlds: a pure resolver that replays
//! time-scoped attribute overrides in deterministic order, and a caching
//! manager that keeps resolved states coherent as relations and events
//! mutate underneath it.

pub mod cache;
pub mod manager;
pub mod resolver;

pub use manager::StateManager;
