//! Beacon: Telemetry Client Core
//!
//! Configuration and event-routing core of the Beacon telemetry client. Captures
//! how an application opts into logging, tracing, and RUM features, resolves
//! intake endpoints, classifies outbound requests as first- or third-party, and
//! routes telemetry events toward a durable local sink.

pub mod config;
pub mod diagnostics;
pub mod endpoint;
pub mod error;
pub mod events;
pub mod hosts;
pub mod init;
pub mod output;
pub mod sampling;

pub use config::{ConfigBuilder, TelemetryConfig, TrackedView, ViewPredicate};
pub use endpoint::{EndpointSelector, TelemetryKind};
pub use error::{ConfigError, ValidationError};
pub use events::{LogEvent, LogLevel, RumEvent, RumEventKind, SpanEvent};
pub use hosts::FirstPartyHosts;
pub use init::TelemetryCore;
pub use output::{feature_output, EventOutput, EventSink, ForwardingOutput, NullOutput};
pub use sampling::{should_keep, Sampler};
