use super::aggregate_summary::AggregateSummary;
use super::params::BenchmarkParams;
use super::worker_summary::WorkerSummary;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BenchmarkReport {
    /// Benchmark unique identifier
    pub uuid: Uuid,

    /// Timestamp when the benchmark was finished
    pub timestamp: String,

    /// Benchmark parameters
    pub params: BenchmarkParams,

    /// Totals over all workers, absent when no worker reported back
    pub aggregate: Option<AggregateSummary>,

    /// Summaries per worker, ordered by worker id
    pub workers: Vec<WorkerSummary>,
}

impl BenchmarkReport {
    pub fn dump_to_json(&self, output_dir: &Path) -> std::io::Result<()> {
        std::fs::create_dir_all(output_dir)?;

        let report_path = output_dir.join("report.json");
        let report_json = serde_json::to_string_pretty(self)?;
        std::fs::write(report_path, report_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark_kind::BenchmarkKind;
    use crate::latency_summary::LatencySummary;

    #[test]
    fn report_should_be_dumped_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("run");
        let report = BenchmarkReport {
            uuid: Uuid::nil(),
            timestamp: "2026-10-16T00:00:00+00:00".to_owned(),
            params: BenchmarkParams {
                benchmark_kind: BenchmarkKind::HttpGet,
                url: "http://127.0.0.1:8080/file".to_owned(),
                concurrency: 1,
                duration_secs: 1.0,
                chunk_size: None,
                reference_size_bytes: Some(4),
                identifier: "test".to_owned(),
            },
            aggregate: None,
            workers: vec![WorkerSummary::new(
                BenchmarkKind::HttpGet,
                0,
                4,
                3,
                1.0,
                LatencySummary::default(),
            )],
        };

        report.dump_to_json(&output_dir).unwrap();

        let json = std::fs::read_to_string(output_dir.join("report.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["params"]["benchmark_kind"], "http_get");
        assert_eq!(value["workers"][0]["succeeded_attempts"], 3);
    }
}
