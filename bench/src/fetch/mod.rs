pub mod form_post;
pub mod full_body;
pub mod ranged;

use crate::bench_error::BenchError;
use crate::configs::bench_config::FetchMode;
use crate::reference::ReferenceArtifact;
use async_trait::async_trait;
use consistency_bench_report::benchmark_kind::BenchmarkKind;
use form_post::FormPostFetch;
use full_body::FullBodyFetch;
use ranged::RangedFetch;
use reqwest::Client;
use std::sync::Arc;
use url::Url;

/// One fetch-and-compare strategy.
#[async_trait]
pub trait VerifiedFetch: Send + Sync {
    /// Runs a single attempt. Status, length or content mismatches and
    /// transport errors all come back as `false`, never as an error.
    async fn attempt(&self) -> bool;

    fn kind(&self) -> BenchmarkKind;
}

pub fn create_verified_fetch(
    mode: &FetchMode,
    client: Client,
    url: Url,
    reference: Option<Arc<ReferenceArtifact>>,
) -> Result<Box<dyn VerifiedFetch>, BenchError> {
    let missing_reference = || {
        BenchError::InvalidConfiguration(format!(
            "{} benchmark requires a reference body",
            mode.kind()
        ))
    };

    let fetch: Box<dyn VerifiedFetch> = match mode {
        FetchMode::FullBody => Box::new(FullBodyFetch::new(
            client,
            url,
            reference.ok_or_else(missing_reference)?,
        )),
        FetchMode::Ranged { chunk_size } => Box::new(RangedFetch::new(
            client,
            url,
            reference.ok_or_else(missing_reference)?,
            *chunk_size,
        )),
        FetchMode::FormPost {
            form,
            expected_body,
            swallow_transport_errors,
        } => Box::new(FormPostFetch::new(
            client,
            url,
            form.clone(),
            expected_body.clone(),
            *swallow_transport_errors,
        )),
    };

    Ok(fetch)
}
