//! Basic metrics instrumentation for tracking intake activity.
//!
//! Counters for HTTP requests against the buyer API, created and fetched
//! buyers, and draft edits rejected by validation.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared between the client and the intake service.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Buyers successfully created
    buyers_created_total: Arc<AtomicU64>,

    /// Buyers returned by list calls
    buyers_fetched_total: Arc<AtomicU64>,

    /// Contact additions rejected by validation
    contact_rejections_total: Arc<AtomicU64>,

    /// Submissions that failed, before or after the API call
    submit_failures_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            buyers_created_total: Arc::new(AtomicU64::new(0)),
            buyers_fetched_total: Arc::new(AtomicU64::new(0)),
            contact_rejections_total: Arc::new(AtomicU64::new(0)),
            submit_failures_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_buyer_created(&self) {
        self.buyers_created_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_buyers_fetched(&self, count: usize) {
        self.buyers_fetched_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_contact_rejected(&self) {
        self.contact_rejections_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submit_failure(&self) {
        self.submit_failures_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

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

    pub fn buyers_created_total(&self) -> u64 {
        self.buyers_created_total.load(Ordering::Relaxed)
    }

    pub fn buyers_fetched_total(&self) -> u64 {
        self.buyers_fetched_total.load(Ordering::Relaxed)
    }

    pub fn contact_rejections_total(&self) -> u64 {
        self.contact_rejections_total.load(Ordering::Relaxed)
    }

    pub fn submit_failures_total(&self) -> u64 {
        self.submit_failures_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_total_ms: self.http_duration_total_ms(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            buyers_created_total: self.buyers_created_total(),
            buyers_fetched_total: self.buyers_fetched_total(),
            contact_rejections_total: self.contact_rejections_total(),
            submit_failures_total: self.submit_failures_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub buyers_created_total: u64,
    pub buyers_fetched_total: u64,
    pub contact_rejections_total: u64,
    pub submit_failures_total: u64,
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
