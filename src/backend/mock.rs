//! Mock submitter for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::backend::QuoteSubmitter;
use crate::backend::errors::SubmitResult;
use crate::domain::query::StructuredQuery;
use crate::domain::quote::ResultSet;

mock! {
    pub Submitter {}

    #[async_trait]
    impl QuoteSubmitter for Submitter {
        async fn submit(&self, query: &StructuredQuery) -> SubmitResult<ResultSet>;
    }
}
