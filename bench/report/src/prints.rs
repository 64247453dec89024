use crate::{aggregate_summary::AggregateSummary, report::BenchmarkReport};
use colored::{Color, ColoredString, Colorize};
use human_repr::HumanCount;
use tracing::{info, warn};

impl BenchmarkReport {
    pub fn print_summary(&self) {
        let params_print = format!(
            "Benchmark: {}, url: {}, {}, duration: {:.2} s, reference size: {}",
            self.params.benchmark_kind,
            self.params.url,
            self.params.format_workers_info(),
            self.params.duration_secs,
            match self.params.reference_size_bytes {
                Some(size) => size.human_count_bytes().to_string(),
                None => "n/a".to_owned(),
            },
        )
        .blue();

        info!("{}", params_print);

        match &self.aggregate {
            Some(aggregate) => info!("{}", aggregate.formatted_string()),
            None => warn!("No worker reported any results"),
        }
    }
}

impl AggregateSummary {
    pub fn formatted_string(&self) -> ColoredString {
        let color = if self.succeeded_attempts == self.total_attempts {
            Color::Green
        } else {
            Color::Red
        };

        format!(
            "Aggregate Results: {} workers, total attempts: {}, succeeded: {}, ratio: {:.2}%, \
            total throughput: {:.2} attempts/s, average throughput per worker: {:.2} attempts/s, \
            average latency: {:.2} ms, p50 latency: {:.2} ms, p99 latency: {:.2} ms",
            self.workers,
            self.total_attempts,
            self.succeeded_attempts,
            self.success_ratio_percent,
            self.total_attempts_per_second,
            self.average_attempts_per_second,
            self.average_latency_ms,
            self.average_p50_latency_ms,
            self.average_p99_latency_ms,
        )
        .color(color)
    }
}
