pub mod aggregate_summary;
pub mod benchmark_kind;
pub mod latency_summary;
pub mod params;
pub mod report;
pub mod worker_summary;
