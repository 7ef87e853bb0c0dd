//! Boundary to the pricing backend.

use async_trait::async_trait;

use crate::backend::errors::SubmitResult;
use crate::domain::query::StructuredQuery;
use crate::domain::quote::ResultSet;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use http::BackendClient;

/// Sends a validated query to the pricing backend.
#[async_trait]
pub trait QuoteSubmitter: Send + Sync {
    async fn submit(&self, query: &StructuredQuery) -> SubmitResult<ResultSet>;
}
