//! # saga-core
//!
//! Shared foundation for the Saga temporal state resolution engine:
//! data models, error types, configuration, and the `Store` trait the
//! engine consumes.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

pub use errors::{SagaError, SagaResult};
