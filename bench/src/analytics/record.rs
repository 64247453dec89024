use rand::Rng;
use std::time::Duration;

/// Upper bound on latencies kept per worker, 800 KB of samples.
pub const MAX_LATENCY_SAMPLES: usize = 100_000;

/// Outcomes of a worker's attempts, owned by that worker alone.
///
/// Counts and the latency sum are exact. Past the sample capacity the
/// kept latencies are a uniform reservoir sample of all attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecords {
    total: u64,
    succeeded: u64,
    latency_sum_us: u64,
    latency_samples_us: Vec<u64>,
    sample_capacity: usize,
}

impl Default for AttemptRecords {
    fn default() -> Self {
        Self::with_sample_capacity(MAX_LATENCY_SAMPLES)
    }
}

impl AttemptRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_capacity(sample_capacity: usize) -> Self {
        Self {
            total: 0,
            succeeded: 0,
            latency_sum_us: 0,
            latency_samples_us: Vec::new(),
            sample_capacity,
        }
    }

    pub fn record(&mut self, succeeded: bool, latency: Duration) {
        self.total += 1;
        if succeeded {
            self.succeeded += 1;
        }
        debug_assert!(self.succeeded <= self.total);

        let latency_us = latency.as_micros() as u64;
        self.latency_sum_us = self.latency_sum_us.saturating_add(latency_us);
        if self.latency_samples_us.len() < self.sample_capacity {
            self.latency_samples_us.push(latency_us);
            return;
        }

        let slot = rand::rng().random_range(0..self.total);
        if let Some(sample) = self.latency_samples_us.get_mut(slot as usize) {
            *sample = latency_us;
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn succeeded(&self) -> u64 {
        self.succeeded
    }

    pub fn avg_latency_us(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.latency_sum_us as f64 / self.total as f64
    }

    pub fn latency_samples_us(&self) -> &[u64] {
        &self.latency_samples_us
    }
}
