use super::benchmark_kind::BenchmarkKind;
use crate::utils::round_float;
use serde::{Deserialize, Serialize};

/// Totals over every worker of a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregateSummary {
    pub benchmark_kind: BenchmarkKind,
    pub workers: u32,
    pub total_attempts: u64,
    pub succeeded_attempts: u64,
    #[serde(serialize_with = "round_float")]
    pub success_ratio_percent: f64,
    #[serde(serialize_with = "round_float")]
    pub total_attempts_per_second: f64,
    #[serde(serialize_with = "round_float")]
    pub average_attempts_per_second: f64,
    #[serde(serialize_with = "round_float")]
    pub average_latency_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub average_p50_latency_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub average_p99_latency_ms: f64,
}
