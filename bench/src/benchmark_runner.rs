use crate::actors::worker::Worker;
use crate::analytics::report_builder::BenchmarkReportBuilder;
use crate::args::BenchArgs;
use crate::bench_error::BenchError;
use crate::client_factory::HttpClientFactory;
use crate::configs::bench_config::BenchConfig;
use crate::configs::config_provider::{ConfigProvider, FileConfigProvider};
use crate::fetch::create_verified_fetch;
use crate::reference::{fetch_reference, ReferenceArtifact};
use consistency_bench_report::params::BenchmarkParams;
use consistency_bench_report::report::BenchmarkReport;
use consistency_bench_report::worker_summary::WorkerSummary;
use futures::future::select_all;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

pub struct BenchmarkRunner {
    args: BenchArgs,
}

impl BenchmarkRunner {
    pub fn new(args: BenchArgs) -> Self {
        Self { args }
    }

    pub async fn run(&self) -> Result<BenchmarkReport, BenchError> {
        let config = FileConfigProvider::new(self.args.config.clone())
            .load_config()
            .await?;
        let client_factory = HttpClientFactory::new(config.timeout);
        let reference = self.prepare_reference(&config, &client_factory).await?;

        info!(
            "Starting {} {} workers against: {} for {:.2} s",
            config.concurrency,
            config.kind(),
            config.url,
            config.duration.as_secs_f64()
        );
        let join_handles = Self::create_workers(&config, &client_factory, reference.as_ref())?
            .into_iter()
            .map(|worker| tokio::spawn(async move { worker.run().await }))
            .collect();
        let workers = Self::wait_for_workers(join_handles).await?;
        info!("All workers finished");

        let params = BenchmarkParams {
            benchmark_kind: config.kind(),
            url: config.url.to_string(),
            concurrency: config.concurrency,
            duration_secs: config.duration.as_secs_f64(),
            chunk_size: config.chunk_size(),
            reference_size_bytes: reference.as_ref().map(|r| r.len()),
            identifier: self.args.identifier(),
        };
        let report = BenchmarkReportBuilder::build(params, workers);
        report.print_summary();

        if let Some(output_dir) = &self.args.output_dir {
            report.dump_to_json(output_dir).map_err(|e| {
                error!("Failed to write report to {}: {e}", output_dir.display());
                BenchError::CannotWriteReport(e.to_string())
            })?;
            info!("Report stored in: '{}'", output_dir.display());
        }

        Ok(report)
    }

    async fn prepare_reference(
        &self,
        config: &BenchConfig,
        client_factory: &HttpClientFactory,
    ) -> Result<Option<Arc<ReferenceArtifact>>, BenchError> {
        if !config.mode.needs_reference() {
            return Ok(None);
        }

        let client = client_factory.create_client()?;
        let reference = fetch_reference(&client, &config.url).await?;
        if let Some(path) = &self.args.reference_file {
            reference.persist(path).await?;
        }
        Ok(Some(Arc::new(reference)))
    }

    fn create_workers(
        config: &BenchConfig,
        client_factory: &HttpClientFactory,
        reference: Option<&Arc<ReferenceArtifact>>,
    ) -> Result<Vec<Worker>, BenchError> {
        (0..config.concurrency)
            .map(|worker_id| -> Result<Worker, BenchError> {
                let fetch = create_verified_fetch(
                    &config.mode,
                    client_factory.create_client()?,
                    config.url.clone(),
                    reference.cloned(),
                )?;
                Ok(Worker::new(worker_id, fetch, config.duration))
            })
            .collect()
    }

    /// Completion barrier: returns once every worker has reported back.
    async fn wait_for_workers(
        mut join_handles: Vec<JoinHandle<WorkerSummary>>,
    ) -> Result<Vec<WorkerSummary>, BenchError> {
        let mut workers = Vec::with_capacity(join_handles.len());
        while !join_handles.is_empty() {
            let (result, _index, remaining) = select_all(join_handles).await;
            join_handles = remaining;

            match result {
                Ok(summary) => workers.push(summary),
                Err(e) => {
                    error!("Worker task failed: {e}");
                    for handle in &join_handles {
                        handle.abort();
                    }
                    return Err(BenchError::WorkerFailed(e.to_string()));
                }
            }
        }
        Ok(workers)
    }
}
