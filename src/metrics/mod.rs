//! Basic metrics instrumentation.
//!
//! Counters for the bulk-load fetch and for every store operation. Clones
//! share the same counters, so the store, the source client and the session
//! can all report into one collector.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for the contact book.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Contacts accepted by bulk loads
    contacts_loaded_total: Arc<AtomicU64>,

    /// Bulk loads whose fetch failed
    load_failures_total: Arc<AtomicU64>,

    contacts_added_total: Arc<AtomicU64>,
    contacts_updated_total: Arc<AtomicU64>,
    contacts_deleted_total: Arc<AtomicU64>,
    searches_total: Arc<AtomicU64>,
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
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            contacts_loaded_total: Arc::new(AtomicU64::new(0)),
            load_failures_total: Arc::new(AtomicU64::new(0)),
            contacts_added_total: Arc::new(AtomicU64::new(0)),
            contacts_updated_total: Arc::new(AtomicU64::new(0)),
            contacts_deleted_total: Arc::new(AtomicU64::new(0)),
            searches_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record contacts accepted by a bulk load.
    pub fn record_contacts_loaded(&self, count: usize) {
        self.contacts_loaded_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record a failed bulk-load fetch.
    pub fn record_load_failure(&self) {
        self.load_failures_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contact_added(&self) {
        self.contacts_added_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contact_updated(&self) {
        self.contacts_updated_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contact_deleted(&self) {
        self.contacts_deleted_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_search(&self) {
        self.searches_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP errors.
    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP duration in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn contacts_loaded_total(&self) -> u64 {
        self.contacts_loaded_total.load(Ordering::Relaxed)
    }

    pub fn load_failures_total(&self) -> u64 {
        self.load_failures_total.load(Ordering::Relaxed)
    }

    pub fn contacts_added_total(&self) -> u64 {
        self.contacts_added_total.load(Ordering::Relaxed)
    }

    pub fn contacts_updated_total(&self) -> u64 {
        self.contacts_updated_total.load(Ordering::Relaxed)
    }

    pub fn contacts_deleted_total(&self) -> u64 {
        self.contacts_deleted_total.load(Ordering::Relaxed)
    }

    pub fn searches_total(&self) -> u64 {
        self.searches_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.http_requests_total.store(0, Ordering::Relaxed);
        self.http_errors_total.store(0, Ordering::Relaxed);
        self.http_duration_total_ms.store(0, Ordering::Relaxed);
        self.contacts_loaded_total.store(0, Ordering::Relaxed);
        self.load_failures_total.store(0, Ordering::Relaxed);
        self.contacts_added_total.store(0, Ordering::Relaxed);
        self.contacts_updated_total.store(0, Ordering::Relaxed);
        self.contacts_deleted_total.store(0, Ordering::Relaxed);
        self.searches_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_total_ms: self.http_duration_total_ms(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            contacts_loaded_total: self.contacts_loaded_total(),
            load_failures_total: self.load_failures_total(),
            contacts_added_total: self.contacts_added_total(),
            contacts_updated_total: self.contacts_updated_total(),
            contacts_deleted_total: self.contacts_deleted_total(),
            searches_total: self.searches_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub contacts_loaded_total: u64,
    pub load_failures_total: u64,
    pub contacts_added_total: u64,
    pub contacts_updated_total: u64,
    pub contacts_deleted_total: u64,
    pub searches_total: u64,
}

/// Helper for timing HTTP requests.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing an HTTP request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
        self.metrics.record_http_error();
    }
}
