use super::VerifiedFetch;
use async_trait::async_trait;
use bytes::Bytes;
use consistency_bench_report::benchmark_kind::BenchmarkKind;
use reqwest::{Client, StatusCode};
use tracing::trace;
use url::Url;

pub struct FormPostFetch {
    client: Client,
    url: Url,
    form: Vec<(String, String)>,
    expected_body: Bytes,
    swallow_transport_errors: bool,
}

impl FormPostFetch {
    pub fn new(
        client: Client,
        url: Url,
        form: Vec<(String, String)>,
        expected_body: Bytes,
        swallow_transport_errors: bool,
    ) -> Self {
        Self {
            client,
            url,
            form,
            expected_body,
            swallow_transport_errors,
        }
    }

    async fn post_and_compare(&self) -> Result<bool, reqwest::Error> {
        let response = self
            .client
            .post(self.url.clone())
            .form(&self.form)
            .send()
            .await?;
        let status = response.status();
        if status != StatusCode::OK {
            trace!("Form post returned status: {status}");
            return Ok(false);
        }

        let body = response.bytes().await?;
        Ok(body == self.expected_body)
    }
}

#[async_trait]
impl VerifiedFetch for FormPostFetch {
    async fn attempt(&self) -> bool {
        match self.post_and_compare().await {
            Ok(matched) => matched,
            // Legacy parity: transport errors were counted as successes.
            Err(error) if self.swallow_transport_errors => {
                trace!("Swallowed form post error for {}: {error}", self.url);
                true
            }
            Err(error) => {
                trace!("Form post to {} failed: {error}", self.url);
                false
            }
        }
    }

    fn kind(&self) -> BenchmarkKind {
        BenchmarkKind::HttpPostPara
    }
}
