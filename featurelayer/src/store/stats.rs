//! Store statistics tracking and reporting.

use std::time::Instant;

/// Store statistics for monitoring and debugging.
///
/// Diagnostic only; no store behavior depends on these counters.
#[derive(Debug, Clone)]
pub struct StoreStats {
    // Fetch metrics
    pub fetches: u64,
    pub fetch_successes: u64,
    pub fetch_failures: u64,

    // Read metrics
    pub read_hits: u64,
    pub read_misses: u64,

    // Current contents
    pub entry_count: usize,

    // Timing
    pub created_at: Instant,
}

impl Default for StoreStats {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreStats {
    /// Create a new statistics tracker.
    pub fn new() -> Self {
        Self {
            fetches: 0,
            fetch_successes: 0,
            fetch_failures: 0,
            read_hits: 0,
            read_misses: 0,
            entry_count: 0,
            created_at: Instant::now(),
        }
    }

    /// Calculate the fraction of fetches that succeeded (0.0 to 1.0).
    ///
    /// Fetches still in flight are not counted.
    pub fn fetch_success_rate(&self) -> f64 {
        let resolved = self.fetch_successes + self.fetch_failures;
        if resolved == 0 {
            0.0
        } else {
            self.fetch_successes as f64 / resolved as f64
        }
    }

    /// Calculate the read hit rate (0.0 to 1.0).
    pub fn read_hit_rate(&self) -> f64 {
        let total = self.read_hits + self.read_misses;
        if total == 0 {
            0.0
        } else {
            self.read_hits as f64 / total as f64
        }
    }

    /// Get the uptime duration since statistics started.
    pub fn uptime(&self) -> std::time::Duration {
        self.created_at.elapsed()
    }

    /// Record a fetch being issued.
    pub fn record_fetch_started(&mut self) {
        self.fetches += 1;
    }

    /// Record a fetch resolving successfully.
    pub fn record_fetch_success(&mut self) {
        self.fetch_successes += 1;
    }

    /// Record a fetch resolving with an error.
    pub fn record_fetch_failure(&mut self) {
        self.fetch_failures += 1;
    }

    /// Record a read that found a cached payload.
    pub fn record_read_hit(&mut self) {
        self.read_hits += 1;
    }

    /// Record a read that found nothing.
    pub fn record_read_miss(&mut self) {
        self.read_misses += 1;
    }

    /// Update the current entry count.
    pub fn update_entry_count(&mut self, count: usize) {
        self.entry_count = count;
    }
}
