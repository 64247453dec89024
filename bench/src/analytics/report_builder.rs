use super::aggregate::from_worker_summaries;
use chrono::{DateTime, Utc};
use consistency_bench_report::params::BenchmarkParams;
use consistency_bench_report::report::BenchmarkReport;
use consistency_bench_report::worker_summary::WorkerSummary;
use uuid::Uuid;

pub struct BenchmarkReportBuilder;

impl BenchmarkReportBuilder {
    pub fn build(params: BenchmarkParams, mut workers: Vec<WorkerSummary>) -> BenchmarkReport {
        let timestamp: DateTime<Utc> = Utc::now();

        // Workers finish in arbitrary order
        workers.sort_by_key(|w| w.worker_id);
        let aggregate = from_worker_summaries(&workers);

        BenchmarkReport {
            uuid: Uuid::new_v4(),
            timestamp: timestamp.to_rfc3339(),
            params,
            aggregate,
            workers,
        }
    }
}
