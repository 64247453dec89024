use crate::analytics::record::AttemptRecords;
use consistency_bench_report::benchmark_kind::BenchmarkKind;
use consistency_bench_report::latency_summary::LatencySummary;
use consistency_bench_report::worker_summary::WorkerSummary;
use std::time::Duration;

pub fn from_records(
    records: &AttemptRecords,
    benchmark_kind: BenchmarkKind,
    worker_id: u32,
    total_time: Duration,
) -> WorkerSummary {
    WorkerSummary::new(
        benchmark_kind,
        worker_id,
        records.total(),
        records.succeeded(),
        total_time.as_secs_f64(),
        latency_summary(records),
    )
}

fn latency_summary(records: &AttemptRecords) -> LatencySummary {
    let latencies_us = records.latency_samples_us();
    if latencies_us.is_empty() {
        return LatencySummary::default();
    }

    let mut latencies_ms: Vec<f64> = latencies_us
        .iter()
        .map(|latency| *latency as f64 / 1_000.0)
        .collect();
    latencies_ms.sort_by(|a, b| a.total_cmp(b));

    let avg_latency_ms = records.avg_latency_us() / 1_000.0;
    let len = latencies_ms.len() / 2;
    let median_latency_ms = if latencies_ms.len() % 2 == 0 {
        (latencies_ms[len - 1] + latencies_ms[len]) / 2.0
    } else {
        latencies_ms[len]
    };

    LatencySummary {
        avg_latency_ms,
        median_latency_ms,
        p50_latency_ms: calculate_percentile(&latencies_ms, 50.0),
        p90_latency_ms: calculate_percentile(&latencies_ms, 90.0),
        p95_latency_ms: calculate_percentile(&latencies_ms, 95.0),
        p99_latency_ms: calculate_percentile(&latencies_ms, 99.0),
    }
}

fn calculate_percentile(sorted_data: &[f64], percentile: f64) -> f64 {
    if sorted_data.is_empty() {
        return 0.0;
    }

    let rank = percentile / 100.0 * (sorted_data.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if upper >= sorted_data.len() {
        return sorted_data[sorted_data.len() - 1];
    }

    let weight = rank - lower as f64;
    sorted_data[lower] * (1.0 - weight) + sorted_data[upper] * weight
}
