use crate::analytics::metrics::from_records;
use crate::analytics::record::AttemptRecords;
use crate::fetch::VerifiedFetch;
use consistency_bench_report::worker_summary::WorkerSummary;
use std::time::Duration;
use tokio::time::Instant;
use tracing::info;

pub struct Worker {
    worker_id: u32,
    fetch: Box<dyn VerifiedFetch>,
    duration: Duration,
}

impl Worker {
    pub fn new(worker_id: u32, fetch: Box<dyn VerifiedFetch>, duration: Duration) -> Self {
        Self {
            worker_id,
            fetch,
            duration,
        }
    }

    /// Runs attempts back to back until the duration has elapsed. The
    /// deadline is only checked between attempts, so the last one may
    /// overshoot it, and at least one attempt is always made.
    pub async fn run(&self) -> WorkerSummary {
        info!(
            "Worker #{} → running {} attempts for {:.2} s...",
            self.worker_id,
            self.fetch.kind(),
            self.duration.as_secs_f64()
        );

        let mut records = AttemptRecords::new();
        let start_timestamp = Instant::now();
        loop {
            let before_attempt = Instant::now();
            let succeeded = self.fetch.attempt().await;
            records.record(succeeded, before_attempt.elapsed());

            if start_timestamp.elapsed() > self.duration {
                break;
            }
        }

        let summary = from_records(
            &records,
            self.fetch.kind(),
            self.worker_id,
            start_timestamp.elapsed(),
        );
        println!("{}", summary.summary_line());
        Self::log_worker_statistics(&summary);
        summary
    }

    fn log_worker_statistics(summary: &WorkerSummary) {
        info!(
            "Worker #{} → {} attempts ({} failed) in {:.2} s, {:.2} attempts/s, \
    p50 latency: {:.2} ms, p90 latency: {:.2} ms, p99 latency: {:.2} ms, average latency: {:.2} ms",
            summary.worker_id,
            summary.total_attempts,
            summary.failed_attempts(),
            summary.total_time_secs,
            summary.attempts_per_second(),
            summary.latency.p50_latency_ms,
            summary.latency.p90_latency_ms,
            summary.latency.p99_latency_ms,
            summary.latency.avg_latency_ms,
        );
    }
}
