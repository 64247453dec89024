use crate::bench_error::BenchError;
use bytes::Bytes;
use human_repr::HumanCount;
use reqwest::{Client, StatusCode};
use std::path::Path;
use tracing::{error, info};
use url::Url;

/// The body every attempt is compared against. Fetched once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceArtifact {
    bytes: Bytes,
}

impl ReferenceArtifact {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Zero-copy view of `start..=end`. The caller guarantees the range lies
    /// within the artifact.
    pub fn slice(&self, start: u64, end: u64) -> Bytes {
        self.bytes.slice(start as usize..=end as usize)
    }

    pub async fn persist(&self, path: &Path) -> Result<(), BenchError> {
        tokio::fs::write(path, &self.bytes).await?;
        info!(
            "Reference body ({}) stored in: '{}'",
            self.len().human_count_bytes(),
            path.display()
        );
        Ok(())
    }
}

pub async fn fetch_reference(client: &Client, url: &Url) -> Result<ReferenceArtifact, BenchError> {
    info!("Fetching the reference resource from: {url}...");
    let response = client.get(url.clone()).send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        error!("Reference fetch from {url} returned status: {status}");
        return Err(BenchError::PrepareError {
            url: url.to_string(),
            status,
        });
    }

    let reference = ReferenceArtifact::new(response.bytes().await?);
    info!(
        "Fetched the reference resource, size: {}",
        reference.len().human_count_bytes()
    );
    Ok(reference)
}
