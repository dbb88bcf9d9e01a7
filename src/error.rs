//! Error types for the Beacon telemetry core.

use thiserror::Error;

/// A single configuration rule violated at `build()` time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("client token must not be empty")]
    EmptyClientToken,

    #[error("environment name must not be empty")]
    EmptyEnvironment,

    #[error("session sample rate {0} is outside the 0.0..=100.0 range")]
    SampleRateOutOfRange(f32),

    #[error("RUM is enabled but no RUM application id was provided")]
    RumWithoutApplicationId,
}

/// Errors surfaced synchronously to the initializer. There is no recovery
/// path; the SDK must not start with an invalid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration:\n{}", format_violations(.0))]
    Invalid(Vec<ValidationError>),

    #[error("diagnostics setup failed: {0}")]
    Diagnostics(String),
}

fn format_violations(violations: &[ValidationError]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {}", v))
        .collect::<Vec<_>>()
        .join("\n")
}
