//! `reqwest` client talking JSON to the pricing backend.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::backend::QuoteSubmitter;
use crate::backend::errors::{SubmitError, SubmitResult};
use crate::domain::query::StructuredQuery;
use crate::domain::quote::{QuoteResponse, ResultSet};

#[derive(Clone, Debug)]
pub struct BackendClient {
    client: reqwest::Client,
    url: String,
}

impl BackendClient {
    /// Builds a client posting to `url`. Without a timeout a hung backend
    /// keeps the request pending indefinitely.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> SubmitResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SubmitError::Transport(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Forwards an arbitrary JSON body and hands back the backend's status and
    /// JSON reply untouched.
    pub async fn relay(&self, body: &Value) -> SubmitResult<(u16, Value)> {
        let response = self.client.post(&self.url).json(body).send().await?;
        let status = response.status().as_u16();
        let data = response.json::<Value>().await?;
        Ok((status, data))
    }
}

#[async_trait]
impl QuoteSubmitter for BackendClient {
    async fn submit(&self, query: &StructuredQuery) -> SubmitResult<ResultSet> {
        log::debug!("Submitting quote query for {} to {}", query.city, self.url);

        let response = self.client.post(&self.url).json(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        let body = response.json::<QuoteResponse>().await?;
        body.into_result_set().map_err(SubmitError::Backend)
    }
}
