use super::VerifiedFetch;
use crate::reference::ReferenceArtifact;
use async_trait::async_trait;
use consistency_bench_report::benchmark_kind::BenchmarkKind;
use reqwest::header::RANGE;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tracing::trace;
use url::Url;

/// Inclusive byte range, as sent in a `Range` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    pub fn header_value(&self) -> String {
        format!("bytes={}-{}", self.start, self.end)
    }
}

/// Chunks of `chunk_size` bytes covering `0..total_len` in increasing
/// offset order; the last one may be shorter.
#[derive(Debug, Clone)]
pub struct RangePlan {
    total_len: u64,
    chunk_size: u64,
    next_start: u64,
}

impl RangePlan {
    pub fn new(total_len: u64, chunk_size: u64) -> Self {
        Self {
            total_len,
            chunk_size,
            next_start: 0,
        }
    }

    pub fn chunks_count(&self) -> u64 {
        if self.chunk_size == 0 {
            return 0;
        }
        self.total_len.div_ceil(self.chunk_size)
    }
}

impl Iterator for RangePlan {
    type Item = ByteRange;

    fn next(&mut self) -> Option<Self::Item> {
        if self.chunk_size == 0 || self.next_start >= self.total_len {
            return None;
        }

        let start = self.next_start;
        let end = start.saturating_add(self.chunk_size).min(self.total_len) - 1;
        self.next_start = end + 1;
        Some(ByteRange { start, end })
    }
}

pub struct RangedFetch {
    client: Client,
    url: Url,
    reference: Arc<ReferenceArtifact>,
    chunk_size: u64,
}

impl RangedFetch {
    pub fn new(
        client: Client,
        url: Url,
        reference: Arc<ReferenceArtifact>,
        chunk_size: u64,
    ) -> Self {
        Self {
            client,
            url,
            reference,
            chunk_size,
        }
    }

    async fn fetch_chunk(&self, range: &ByteRange) -> Result<bool, reqwest::Error> {
        let response = self
            .client
            .get(self.url.clone())
            .header(RANGE, range.header_value())
            .send()
            .await?;
        let status = response.status();
        if status != StatusCode::PARTIAL_CONTENT {
            trace!("Range {} returned status: {status}", range.header_value());
            return Ok(false);
        }

        let body = response.bytes().await?;
        Ok(body == self.reference.slice(range.start, range.end))
    }
}

#[async_trait]
impl VerifiedFetch for RangedFetch {
    async fn attempt(&self) -> bool {
        // An empty reference has nothing to range over and counts as failed.
        if self.reference.is_empty() {
            return false;
        }

        for range in RangePlan::new(self.reference.len(), self.chunk_size) {
            match self.fetch_chunk(&range).await {
                Ok(true) => {}
                Ok(false) => return false,
                Err(error) => {
                    trace!(
                        "Range request {} to {} failed: {error}",
                        range.header_value(),
                        self.url
                    );
                    return false;
                }
            }
        }
        true
    }

    fn kind(&self) -> BenchmarkKind {
        BenchmarkKind::HttpGetRange
    }
}
