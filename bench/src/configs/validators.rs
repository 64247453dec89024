use crate::bench_error::BenchError;
use crate::configs::bench_config::{ModeName, RawBenchConfig};
use crate::configs::Validatable;
use tracing::error;
use url::Url;

/// Parses the target and accepts only http and https.
pub fn validate_url(url: &str) -> Result<Url, BenchError> {
    let parsed = Url::parse(url).map_err(|error| {
        error!("Benchmark configuration -> url '{url}' is invalid: {error}.");
        BenchError::InvalidConfiguration(format!("url '{url}': {error}"))
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        error!("Benchmark configuration -> url must use http or https.");
        return Err(BenchError::InvalidConfiguration(format!(
            "unsupported url scheme: {}",
            parsed.scheme()
        )));
    }
    Ok(parsed)
}

/// Checks everything but the url, which [`validate_url`] parses once.
impl Validatable<BenchError> for RawBenchConfig {
    fn validate(&self) -> Result<(), BenchError> {
        if self.thread == 0 {
            error!("Benchmark configuration -> thread must be greater than 0.");
            return Err(BenchError::InvalidConfiguration(
                "thread must be greater than 0".to_owned(),
            ));
        }

        if !self.time.is_finite() || self.time < 0.0 {
            error!("Benchmark configuration -> time must be a non-negative number of seconds.");
            return Err(BenchError::InvalidConfiguration(format!(
                "time must be a non-negative number of seconds, got {}",
                self.time
            )));
        }

        if let Some(timeout) = self.timeout {
            if !timeout.is_finite() || timeout <= 0.0 {
                error!("Benchmark configuration -> timeout must be greater than 0.");
                return Err(BenchError::InvalidConfiguration(format!(
                    "timeout must be greater than 0, got {timeout}"
                )));
            }
        }

        if self.resolve_mode() == ModeName::GetRange && self.step == Some(0) {
            error!("Benchmark configuration -> step must be greater than 0.");
            return Err(BenchError::InvalidConfiguration(
                "step must be greater than 0".to_owned(),
            ));
        }

        Ok(())
    }
}
