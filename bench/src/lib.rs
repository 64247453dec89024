pub mod actors;
pub mod analytics;
pub mod args;
pub mod bench_error;
pub mod benchmark_runner;
pub mod client_factory;
pub mod configs;
pub mod fetch;
pub mod log;
pub mod reference;
