use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Cannot load configuration: {0}")]
    CannotLoadConfiguration(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Reference fetch from {url} failed with status: {status}")]
    PrepareError { url: String, status: StatusCode },
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Worker failed: {0}")]
    WorkerFailed(String),
    #[error("Cannot write report: {0}")]
    CannotWriteReport(String),
}
