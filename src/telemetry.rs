//! Telemetry utilities for command timing and dispatch spans.

use std::time::Instant;

/// Guard for timing command execution and recording metrics.
///
/// Records command latency when dropped.
pub struct CommandTimer {
    command: String,
    start: Instant,
}

impl CommandTimer {
    /// Start timing a command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            start: Instant::now(),
        }
    }
}

impl Drop for CommandTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        crate::metrics::record_command(&self.command, duration);
    }
}

/// Standardized span constructors for dispatch observability.
pub mod spans {
    use tracing::{Span, debug_span};

    /// Span for one command dispatch.
    ///
    /// `entry` is the router path (`text` or `interaction`).
    pub fn command(entry: &'static str, path: &str, principal: &str, server: Option<&str>) -> Span {
        debug_span!(
            "chat.command",
            entry = entry,
            command = %path,
            principal = %principal,
            server = server,
        )
    }
}
