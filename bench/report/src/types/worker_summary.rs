use super::benchmark_kind::BenchmarkKind;
use super::latency_summary::LatencySummary;
use crate::utils::{ratio_percent, round_float};
use derive_new::new;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, new)]
pub struct WorkerSummary {
    pub benchmark_kind: BenchmarkKind,
    pub worker_id: u32,
    pub total_attempts: u64,
    pub succeeded_attempts: u64,
    #[serde(serialize_with = "round_float")]
    pub total_time_secs: f64,
    pub latency: LatencySummary,
}

impl WorkerSummary {
    pub fn failed_attempts(&self) -> u64 {
        self.total_attempts.saturating_sub(self.succeeded_attempts)
    }

    pub fn success_ratio_percent(&self) -> f64 {
        ratio_percent(self.succeeded_attempts, self.total_attempts)
    }

    pub fn attempts_per_second(&self) -> f64 {
        if self.total_time_secs > 0.0 {
            self.total_attempts as f64 / self.total_time_secs
        } else {
            0.0
        }
    }

    /// The line every worker prints to stdout once it is done.
    pub fn summary_line(&self) -> String {
        format!(
            "{}_thread {}:  total={}, succeed={}, ratio={:.2}%",
            self.benchmark_kind.line_prefix(),
            self.worker_id,
            self.total_attempts,
            self.succeeded_attempts,
            self.success_ratio_percent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(kind: BenchmarkKind, total: u64, succeeded: u64) -> WorkerSummary {
        WorkerSummary::new(kind, 3, total, succeeded, 2.0, LatencySummary::default())
    }

    #[test]
    fn summary_line_should_match_legacy_format() {
        let summary = summary(BenchmarkKind::HttpGetRange, 8, 6);
        assert_eq!(
            summary.summary_line(),
            "http_get_range_thread 3:  total=8, succeed=6, ratio=75.00%"
        );
    }

    #[test]
    fn summary_line_should_not_fail_without_attempts() {
        let summary = summary(BenchmarkKind::HttpGet, 0, 0);
        assert_eq!(
            summary.summary_line(),
            "http_get_thread 3:  total=0, succeed=0, ratio=0.00%"
        );
        assert_eq!(summary.failed_attempts(), 0);
    }

    #[test]
    fn attempts_per_second_should_use_total_time() {
        let summary = summary(BenchmarkKind::HttpPostPara, 10, 10);
        assert_eq!(summary.attempts_per_second(), 5.0);
    }
}
