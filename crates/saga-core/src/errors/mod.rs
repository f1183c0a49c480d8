mod cache_error;
mod resolve_error;
mod saga_error;
mod store_error;

pub use cache_error::CacheError;
pub use resolve_error::ResolveError;
pub use saga_error::{SagaError, SagaResult};
pub use store_error::StoreError;
