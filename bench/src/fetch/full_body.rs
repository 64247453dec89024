use super::VerifiedFetch;
use crate::reference::ReferenceArtifact;
use async_trait::async_trait;
use consistency_bench_report::benchmark_kind::BenchmarkKind;
use reqwest::header::{HeaderMap, CONTENT_LENGTH};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tracing::trace;
use url::Url;

pub struct FullBodyFetch {
    client: Client,
    url: Url,
    reference: Arc<ReferenceArtifact>,
}

impl FullBodyFetch {
    pub fn new(client: Client, url: Url, reference: Arc<ReferenceArtifact>) -> Self {
        Self {
            client,
            url,
            reference,
        }
    }

    async fn fetch_and_compare(&self) -> Result<bool, reqwest::Error> {
        let response = self.client.get(self.url.clone()).send().await?;
        let content_length = content_length(response.headers());
        if !headers_match(response.status(), content_length, self.reference.len()) {
            trace!(
                "Full body mismatch: status {}, content length {:?}, expected {}",
                response.status(),
                content_length,
                self.reference.len()
            );
            return Ok(false);
        }

        let body = response.bytes().await?;
        Ok(body_matches(&body, self.reference.as_slice()))
    }
}

#[async_trait]
impl VerifiedFetch for FullBodyFetch {
    async fn attempt(&self) -> bool {
        match self.fetch_and_compare().await {
            Ok(matched) => matched,
            Err(error) => {
                trace!("Full body request to {} failed: {error}", self.url);
                false
            }
        }
    }

    fn kind(&self) -> BenchmarkKind {
        BenchmarkKind::HttpGet
    }
}

pub(crate) fn content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Status must be 200 and the advertised length must equal the reference
/// length. A missing or unparsable `Content-Length` never matches.
pub fn headers_match(status: StatusCode, content_length: Option<u64>, reference_len: u64) -> bool {
    status == StatusCode::OK && content_length == Some(reference_len)
}

/// Byte-for-byte comparison over the whole reference. A short body fails.
pub fn body_matches(body: &[u8], reference: &[u8]) -> bool {
    body.len() == reference.len() && body == reference
}
