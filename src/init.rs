//! SDK initialization owner. Holds the frozen configuration and the outputs
//! wired from it for the process lifetime; re-initialization is the only way
//! to change features.

use std::sync::Arc;

use tracing::debug;

use crate::config::TelemetryConfig;
use crate::events::{LogEvent, RumEvent, SpanEvent};
use crate::output::{feature_output, EventOutput, EventSink};
use crate::sampling::Sampler;

/// Runtime for event routing. Constructed once from a built configuration;
/// disabled features get a null output so producers never branch on flags.
pub struct TelemetryCore {
    config: Arc<TelemetryConfig>,
    logs: Box<dyn EventOutput<LogEvent>>,
    traces: Box<dyn EventOutput<SpanEvent>>,
    rum: Box<dyn EventOutput<RumEvent>>,
    sampler: Sampler,
}

impl TelemetryCore {
    pub fn initialize(config: TelemetryConfig, sink: Arc<dyn EventSink>) -> Self {
        debug!(
            logging = config.logging_enabled,
            tracing = config.tracing_enabled,
            rum = config.rum_enabled,
            sample_rate = config.session_sample_rate,
            "initializing telemetry core"
        );
        let logs = feature_output(config.logging_enabled, sink.clone());
        let traces = feature_output(config.tracing_enabled, sink.clone());
        let rum = feature_output(config.rum_enabled, sink);
        let sampler = Sampler::new(config.session_sample_rate);
        Self {
            config: Arc::new(config),
            logs,
            traces,
            rum,
            sampler,
        }
    }

    /// Shared read-only configuration, safe for concurrent access.
    pub fn config(&self) -> &Arc<TelemetryConfig> {
        &self.config
    }

    pub fn logs(&self) -> &dyn EventOutput<LogEvent> {
        self.logs.as_ref()
    }

    pub fn traces(&self) -> &dyn EventOutput<SpanEvent> {
        self.traces.as_ref()
    }

    pub fn rum(&self) -> &dyn EventOutput<RumEvent> {
        self.rum.as_ref()
    }

    /// Keep/drop decision for a starting RUM session. `draw` is uniform in
    /// `[0.0, 100.0)`, supplied by the caller's entropy source.
    pub fn sample_session(&self, draw: f32) -> bool {
        let kept = self.sampler.decide(draw);
        if !kept {
            debug!(draw, rate = self.sampler.sample_rate(), "RUM session sampled out");
        }
        kept
    }
}
