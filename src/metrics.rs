//! Prometheus metrics collection for chatcmd.
//!
//! ## Dispatch Metrics
//!
//! - `chat_command_total{command}` - Commands dispatched by top-level name
//! - `chat_command_duration_seconds{command}` - Dispatch latency histogram
//! - `chat_command_errors_total{command,error}` - Handler and dispatch errors
//! - `chat_permission_denied_total{command}` - Permission gate denials
//! - `chat_events_ignored_total{reason}` - Inbound events that invoked nothing
//!
//! Labels use the top-level command name only, which keeps cardinality
//! bounded by the registry size.

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::OnceLock;

/// Global Prometheus registry for all metrics.
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::new)
}

/// Commands dispatched, by top-level name.
pub static COMMAND_COUNTER: OnceLock<IntCounterVec> = OnceLock::new();

/// Dispatch latency, by top-level name.
pub static COMMAND_LATENCY: OnceLock<HistogramVec> = OnceLock::new();

/// Command errors by name and error kind.
pub static COMMAND_ERRORS: OnceLock<IntCounterVec> = OnceLock::new();

/// Permission gate denials.
pub static PERMISSION_DENIED: OnceLock<IntCounterVec> = OnceLock::new();

/// Events dropped without invoking a handler.
pub static EVENTS_IGNORED: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize the Prometheus metrics registry.
///
/// Call once at startup before any metrics are recorded. Recording before
/// `init()` is a silent no-op.
pub fn init() {
    let r = registry();

    macro_rules! register {
        ($metric:ident, $init:expr) => {
            if $metric.get().is_none() {
                let m = $init.expect(concat!(stringify!($metric), " creation failed"));
                // Only the thread whose value was stored registers it.
                if $metric.set(m.clone()).is_err() {
                    tracing::trace!(concat!("Metric ", stringify!($metric), " already initialized"));
                } else if let Err(e) = r.register(Box::new(m)) {
                    tracing::warn!(error = %e, concat!("Failed to register metric ", stringify!($metric)));
                }
            }
        };
    }

    register!(COMMAND_COUNTER, IntCounterVec::new(Opts::new("chat_command_total", "Chat commands dispatched by name"), &["command"]));
    register!(COMMAND_LATENCY, HistogramVec::new(
        HistogramOpts::new("chat_command_duration_seconds", "Chat command dispatch latency by name")
            .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
        &["command"]));
    register!(COMMAND_ERRORS, IntCounterVec::new(Opts::new("chat_command_errors_total", "Chat command errors by name"), &["command", "error"]));
    register!(PERMISSION_DENIED, IntCounterVec::new(Opts::new("chat_permission_denied_total", "Permission gate denials by name"), &["command"]));
    register!(EVENTS_IGNORED, IntCounterVec::new(Opts::new("chat_events_ignored_total", "Inbound events ignored by reason"), &["reason"]));
}

/// Gather all metrics and encode them in Prometheus text format.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = registry().gather();
    let mut buffer = vec![];
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode Prometheus metrics");
        return String::new();
    }
    match String::from_utf8(buffer) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Prometheus metrics were not valid UTF-8");
            String::new()
        }
    }
}

/// Record a dispatched command with latency.
#[inline]
pub fn record_command(command: &str, duration_secs: f64) {
    if let Some(c) = COMMAND_COUNTER.get() {
        c.with_label_values(&[command]).inc();
    }
    if let Some(h) = COMMAND_LATENCY.get() {
        h.with_label_values(&[command]).observe(duration_secs);
    }
}

/// Record a command error.
#[inline]
pub fn record_command_error(command: &str, error: &str) {
    if let Some(c) = COMMAND_ERRORS.get() {
        c.with_label_values(&[command, error]).inc();
    }
}

#[inline]
pub fn record_permission_denied(command: &str) {
    if let Some(c) = PERMISSION_DENIED.get() {
        c.with_label_values(&[command]).inc();
    }
}

#[inline]
pub fn record_ignored(reason: &str) {
    if let Some(c) = EVENTS_IGNORED.get() {
        c.with_label_values(&[reason]).inc();
    }
}
