//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

use crate::store::DEFAULT_IDLE_TTL;

#[derive(Clone, Debug, Deserialize)]
/// Settings for the HTTP front end and its pricing backend.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Signs session and flash cookies; at least 64 bytes.
    pub secret: String,
    /// Endpoint accepting the structured query as JSON.
    pub backend_url: String,
    #[serde(default)]
    pub backend_timeout_secs: Option<u64>,
    /// Seconds a visitor's form and wizard state survive without a request.
    #[serde(default)]
    pub visitor_idle_secs: Option<u64>,
}

impl ServerConfig {
    /// `None` leaves backend requests without a deadline.
    pub fn backend_timeout(&self) -> Option<Duration> {
        self.backend_timeout_secs.map(Duration::from_secs)
    }

    pub fn visitor_idle_ttl(&self) -> Duration {
        self.visitor_idle_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_IDLE_TTL)
    }
}
