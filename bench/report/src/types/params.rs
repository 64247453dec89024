use super::benchmark_kind::BenchmarkKind;
use crate::utils::round_float;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct BenchmarkParams {
    pub benchmark_kind: BenchmarkKind,
    pub url: String,
    pub concurrency: u32,
    #[serde(serialize_with = "round_float")]
    pub duration_secs: f64,
    pub chunk_size: Option<u64>,
    pub reference_size_bytes: Option<u64>,
    pub identifier: String,
}

impl BenchmarkParams {
    pub fn format_workers_info(&self) -> String {
        match (self.benchmark_kind, self.chunk_size) {
            (BenchmarkKind::HttpGetRange, Some(chunk_size)) => format!(
                "{} workers, {} byte chunks",
                self.concurrency, chunk_size
            ),
            _ => format!("{} workers", self.concurrency),
        }
    }
}
