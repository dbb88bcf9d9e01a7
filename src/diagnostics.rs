//! SDK-internal diagnostics built on the `tracing` crate. Controls what the
//! SDK itself logs about its own behavior; unrelated to the telemetry the SDK
//! collects for upload.

use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::error::ConfigError;

/// How much the SDK reports about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl Verbosity {
    fn as_directive(self) -> &'static str {
        match self {
            Verbosity::Off => "off",
            Verbosity::Error => "error",
            Verbosity::Warn => "warn",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Diagnostics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Verbosity of SDK-internal logs.
    #[serde(default = "default_verbosity")]
    pub verbosity: Verbosity,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_verbosity() -> Verbosity {
    Verbosity::Warn
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            verbosity: default_verbosity(),
            format: default_format(),
        }
    }
}

/// Installs the global diagnostics subscriber.
///
/// The `BEACON_LOG` environment variable takes priority over the configured
/// verbosity and accepts full env-filter directives. Calling this twice, or
/// in a process that already installed a subscriber, fails.
pub fn init_diagnostics(config: &DiagnosticsConfig) -> Result<(), ConfigError> {
    let filter = build_env_filter(config);
    let base = Registry::default().with(filter);

    let result = if config.format == "json" {
        base.with(
            fmt::layer()
                .json()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(std::io::stderr),
        )
        .try_init()
    } else {
        base.with(
            fmt::layer()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(std::io::stderr),
        )
        .try_init()
    };

    result.map_err(|e| ConfigError::Diagnostics(e.to_string()))
}

fn build_env_filter(config: &DiagnosticsConfig) -> EnvFilter {
    match EnvFilter::try_from_env("BEACON_LOG") {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(config.verbosity.as_directive()),
    }
}
