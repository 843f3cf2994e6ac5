//! Prometheus metrics for account authentication.
//!
//! All metrics follow the naming convention: `aa_<area>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts,
    Registry, TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Authentication attempts by resolved sign mode and outcome
    pub static ref AUTH_ATTEMPTS: IntCounterVec = IntCounterVec::new(
        Opts::new("aa_auth_attempts_total", "Authentication attempts by sign mode and outcome"),
        &["sign_mode", "outcome"]  // outcome: success or an error kind
    ).expect("metric creation failed");

    /// Sequences consumed, including by attempts that later failed
    pub static ref SEQUENCES_CONSUMED: IntCounter = IntCounter::new(
        "aa_auth_sequences_consumed_total",
        "Total account sequences consumed by authentication"
    ).expect("metric creation failed");

    /// End-to-end authentication latency
    pub static ref AUTH_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "aa_auth_duration_seconds",
            "Time spent authenticating a single signer"
        ).buckets(exponential_buckets(0.00001, 2.0, 16).expect("valid bucket layout"))
    ).expect("metric creation failed");

    /// Public key rotations
    pub static ref KEY_ROTATIONS: IntCounter = IntCounter::new(
        "aa_account_key_rotations_total",
        "Total public key swaps performed by accounts"
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once; already registered collectors are skipped.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(AUTH_ATTEMPTS.clone()),
        Box::new(SEQUENCES_CONSUMED.clone()),
        Box::new(AUTH_DURATION.clone()),
        Box::new(KEY_ROTATIONS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(())
}

/// Encode all registered metrics in Prometheus text format.
pub fn gather_text() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}

/// Start timing for a histogram. Observation happens on drop.
#[macro_export]
macro_rules! time_histogram {
    ($histogram:expr) => {
        $crate::metrics::HistogramTimer::new(&$histogram)
    };
}
