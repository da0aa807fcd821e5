//! Logging setup for the accessibility widget tools
//!
//! This crate provides:
//! - Structured logging with tracing, compact or JSON
//! - A session id for correlating log lines
//! - A drop-guard timer for logging operation durations

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

/// Global session ID for correlating logs
static SESSION_ID: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

/// Initialize with custom configuration
pub fn init_with_config(config: TelemetryConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        registry
            .with(fmt::layer()
                .json()
                .with_target(config.show_target)
                .with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer()
                .with_target(config.show_target)
                .with_file(config.show_file)
                .with_line_number(config.show_line_number)
                .with_writer(std::io::stderr)
                .compact())
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::debug!(
        session_id = %session_id(),
        version = env!("CARGO_PKG_VERSION"),
        "Telemetry initialized"
    );

    Ok(())
}

/// Get the current session ID
pub fn session_id() -> &'static str {
    &SESSION_ID
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub json: bool,
    pub show_target: bool,
    pub show_file: bool,
    pub show_line_number: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json: false,
            show_target: false,
            show_file: false,
            show_line_number: false,
        }
    }
}

impl TelemetryConfig {
    /// Map a `-v` count to a log level
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        self.log_level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string();
        self
    }
}

/// Timer that logs how long an operation took
pub struct Timer {
    name: String,
    start: Instant,
    stopped: bool,
}

impl Timer {
    /// Start timing an operation
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
            stopped: false,
        }
    }

    /// Stop the timer and log the duration
    pub fn stop(mut self) -> Duration {
        self.stopped = true;
        let duration = self.start.elapsed();
        tracing::debug!(
            operation = %self.name,
            duration_ms = duration.as_millis() as u64,
            "Timer completed"
        );
        duration
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if !self.stopped {
            tracing::debug!(
                operation = %self.name,
                duration_ms = self.start.elapsed().as_millis() as u64,
                "Timer dropped"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer() {
        let timer = Timer::start("test_operation");
        std::thread::sleep(Duration::from_millis(10));
        let duration = timer.stop();
        assert!(duration.as_millis() >= 10);
    }

    #[test]
    fn test_session_id() {
        let id = session_id();
        assert!(!id.is_empty());
        // Should be a valid UUID
        assert!(Uuid::parse_str(id).is_ok());
        assert_eq!(id, session_id());
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(TelemetryConfig::default().log_level, "warn");
        assert_eq!(TelemetryConfig::default().with_verbosity(1).log_level, "info");
        assert_eq!(TelemetryConfig::default().with_verbosity(9).log_level, "trace");
    }

    #[test]
    fn test_config_roundtrip_defaults() {
        let json = serde_json::to_string(&TelemetryConfig::default()).unwrap();
        let parsed: TelemetryConfig = serde_json::from_str(&json).unwrap();
        assert!(!parsed.json);
    }
}
