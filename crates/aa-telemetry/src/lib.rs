//! # Account Telemetry
//!
//! Logging, tracing and metrics shared by the account crates.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aa_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//!     // Spans, logs and metrics are now being collected
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AA_SERVICE_NAME` | `abstract-accounts` | Service name in startup logs |
//! | `AA_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `AA_CONSOLE_OUTPUT` | `true` | Write logs to the console |
//! | `AA_JSON_LOGS` | `false` | JSON log lines (default `true` in containers) |

pub mod config;
mod logging;
pub mod metrics;
pub mod tracing_setup;

pub use config::TelemetryConfig;
pub use metrics::{
    gather_text, register_metrics, HistogramTimer, AUTH_ATTEMPTS, AUTH_DURATION, KEY_ROTATIONS,
    SEQUENCES_CONSUMED,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracerInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Register metrics and install the global tracing subscriber.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    tracing_setup::init_tracing(config)
}

/// Create an info-level span for one authentication attempt.
///
/// # Example
///
/// ```rust,ignore
/// let span = aa_telemetry::auth_span!("authenticate", account = %address, signer_index = 0);
/// let _enter = span.enter();
/// ```
#[macro_export]
macro_rules! auth_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}

/// Convenience macro for recording a metric with a value.
#[macro_export]
macro_rules! metric_observe {
    ($metric:expr, $value:expr) => {
        $metric.observe($value)
    };
    ($metric:expr, $labels:expr, $value:expr) => {
        $metric.with_label_values($labels).observe($value)
    };
}
