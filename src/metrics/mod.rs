//! Basic metrics instrumentation for the persistence layer.
//!
//! Provides counters and duration tracking for snapshot saves and loads.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for tracking store activity.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of snapshots written successfully
    saves_total: Arc<AtomicU64>,

    /// Total number of failed snapshot writes
    save_errors_total: Arc<AtomicU64>,

    /// Total duration of all snapshot writes in milliseconds
    save_duration_total_ms: Arc<AtomicU64>,

    /// Number of times the data file was read
    loads_total: Arc<AtomicU64>,

    /// Number of corrupted files moved aside
    recoveries_total: Arc<AtomicU64>,

    /// Number of contacts read from disk
    contacts_loaded_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            saves_total: Arc::new(AtomicU64::new(0)),
            save_errors_total: Arc::new(AtomicU64::new(0)),
            save_duration_total_ms: Arc::new(AtomicU64::new(0)),
            loads_total: Arc::new(AtomicU64::new(0)),
            recoveries_total: Arc::new(AtomicU64::new(0)),
            contacts_loaded_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a completed save with its duration.
    pub fn record_save(&self, duration: Duration) {
        self.saves_total.fetch_add(1, Ordering::Relaxed);
        self.save_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a failed save.
    pub fn record_save_error(&self) {
        self.save_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful read of the data file.
    pub fn record_load(&self, contacts: usize) {
        self.loads_total.fetch_add(1, Ordering::Relaxed);
        self.contacts_loaded_total
            .fetch_add(contacts as u64, Ordering::Relaxed);
    }

    /// Record a backup-and-reset of a corrupted data file.
    pub fn record_recovery(&self) {
        self.recoveries_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total successful saves.
    pub fn saves_total(&self) -> u64 {
        self.saves_total.load(Ordering::Relaxed)
    }

    /// Get total failed saves.
    pub fn save_errors_total(&self) -> u64 {
        self.save_errors_total.load(Ordering::Relaxed)
    }

    /// Get total save duration in milliseconds.
    pub fn save_duration_total_ms(&self) -> u64 {
        self.save_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average save duration in milliseconds.
    pub fn save_duration_avg_ms(&self) -> f64 {
        let total = self.save_duration_total_ms.load(Ordering::Relaxed);
        let count = self.saves_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get total successful loads.
    pub fn loads_total(&self) -> u64 {
        self.loads_total.load(Ordering::Relaxed)
    }

    /// Get total recoveries.
    pub fn recoveries_total(&self) -> u64 {
        self.recoveries_total.load(Ordering::Relaxed)
    }

    /// Get total contacts loaded.
    pub fn contacts_loaded_total(&self) -> u64 {
        self.contacts_loaded_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            saves_total: self.saves_total(),
            save_errors_total: self.save_errors_total(),
            save_duration_total_ms: self.save_duration_total_ms(),
            save_duration_avg_ms: self.save_duration_avg_ms(),
            loads_total: self.loads_total(),
            recoveries_total: self.recoveries_total(),
            contacts_loaded_total: self.contacts_loaded_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub saves_total: u64,
    pub save_errors_total: u64,
    pub save_duration_total_ms: u64,
    pub save_duration_avg_ms: f64,
    pub loads_total: u64,
    pub recoveries_total: u64,
    pub contacts_loaded_total: u64,
}

/// Helper for timing snapshot writes.
pub struct SaveTimer {
    start: Instant,
    metrics: Metrics,
}

impl SaveTimer {
    /// Start timing a save.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_save(duration);
    }

    /// Record the save as failed. Failed saves do not count toward `saves_total`.
    pub fn complete_with_error(self) {
        self.metrics.record_save_error();
    }
}
