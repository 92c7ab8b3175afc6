//! Pipeline-wide statistics helpers.
//!
//! This module defines the [`PipelineStats`] structure tracking execution
//! metrics for classification runs and the [`StatsManager`] helper that
//! coordinates thread-safe updates to these metrics.

use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

/// Statistics for the classification pipeline.
///
/// Tracks how many model invocations ran and performance metrics such as
/// average inference time and success ratios.
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    /// The total number of model invocations.
    pub total_processed: usize,
    /// The number of successful predictions.
    pub successful_predictions: usize,
    /// The number of failed predictions.
    pub failed_predictions: usize,
    /// The average inference time in milliseconds.
    pub average_inference_time_ms: f64,
}

impl PipelineStats {
    /// Creates a new PipelineStats instance with zeroed values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the success rate as a percentage (0.0 to 100.0).
    pub fn success_rate(&self) -> f64 {
        if self.total_processed == 0 {
            0.0
        } else {
            (self.successful_predictions as f64 / self.total_processed as f64) * 100.0
        }
    }

    /// Returns the failure rate as a percentage (0.0 to 100.0).
    pub fn failure_rate(&self) -> f64 {
        if self.total_processed == 0 {
            0.0
        } else {
            (self.failed_predictions as f64 / self.total_processed as f64) * 100.0
        }
    }
}

impl fmt::Display for PipelineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "processed: {}, ok: {}, failed: {}, avg inference: {:.1} ms",
            self.total_processed,
            self.successful_predictions,
            self.failed_predictions,
            self.average_inference_time_ms
        )
    }
}

/// Thread-safe manager for pipeline statistics.
#[derive(Debug, Default)]
pub struct StatsManager {
    inner: Mutex<PipelineStats>,
}

impl StatsManager {
    /// Creates a new manager with zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one model invocation with its duration and outcome, updating
    /// the running average inference time.
    pub fn record(&self, elapsed: Duration, success: bool) {
        let mut stats = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        stats.total_processed += 1;
        if success {
            stats.successful_predictions += 1;
        } else {
            stats.failed_predictions += 1;
        }
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        stats.average_inference_time_ms +=
            (elapsed_ms - stats.average_inference_time_ms) / stats.total_processed as f64;
    }

    /// Returns a snapshot of the current statistics.
    pub fn snapshot(&self) -> PipelineStats {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Resets all statistics to zero.
    pub fn reset(&self) {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner()) = PipelineStats::new();
    }
}
