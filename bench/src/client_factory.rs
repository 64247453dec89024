use crate::bench_error::BenchError;
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client a worker issues its attempts with. No retry
/// middleware, a failed request is counted exactly once.
#[derive(Debug, Clone, Default)]
pub struct HttpClientFactory {
    timeout: Option<Duration>,
}

impl HttpClientFactory {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    pub fn create_client(&self) -> Result<Client, BenchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}
