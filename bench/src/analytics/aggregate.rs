use consistency_bench_report::aggregate_summary::AggregateSummary;
use consistency_bench_report::ratio_percent;
use consistency_bench_report::worker_summary::WorkerSummary;

pub fn from_worker_summaries(workers: &[WorkerSummary]) -> Option<AggregateSummary> {
    let first = workers.first()?;
    let count = workers.len() as f64;

    let total_attempts: u64 = workers.iter().map(|w| w.total_attempts).sum();
    let succeeded_attempts: u64 = workers.iter().map(|w| w.succeeded_attempts).sum();
    let total_attempts_per_second: f64 = workers.iter().map(|w| w.attempts_per_second()).sum();
    let average = |value: fn(&WorkerSummary) -> f64| workers.iter().map(value).sum::<f64>() / count;

    Some(AggregateSummary {
        benchmark_kind: first.benchmark_kind,
        workers: workers.len() as u32,
        total_attempts,
        succeeded_attempts,
        success_ratio_percent: ratio_percent(succeeded_attempts, total_attempts),
        total_attempts_per_second,
        average_attempts_per_second: total_attempts_per_second / count,
        average_latency_ms: average(|w| w.latency.avg_latency_ms),
        average_p50_latency_ms: average(|w| w.latency.p50_latency_ms),
        average_p99_latency_ms: average(|w| w.latency.p99_latency_ms),
    })
}
