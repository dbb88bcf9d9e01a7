//! Event schema for the standard telemetry outputs.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Current time as RFC 3339 with millisecond precision, the timestamp format
/// shared by every event constructor.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Info,
    Notice,
    Warn,
    Error,
    Critical,
}

/// One log record routed through the logging output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub ts: String,
    pub level: LogLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default)]
    pub attributes: HashMap<String, Value>,
}

impl LogEvent {
    pub fn with_now(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            ts: now_rfc3339(),
            level,
            message: message.into(),
            service: None,
            attributes: HashMap::new(),
        }
    }
}

/// One finished trace span routed through the tracing output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanEvent {
    pub ts: String,
    pub trace_id: u64,
    pub span_id: u64,
    pub operation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub duration_ms: u64,
    /// Whether the span describes a request to a first-party host and thus
    /// carried propagated trace context.
    #[serde(default)]
    pub is_first_party: bool,
}

/// The kind of a RUM event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RumEventKind {
    View,
    Action,
    Resource,
    Error,
    LongTask,
}

/// One RUM event routed through the RUM output. `data` carries the
/// kind-specific payload; the core treats it as opaque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RumEvent {
    pub ts: String,
    pub session_id: String,
    pub kind: RumEventKind,
    pub data: Value,
}

impl RumEvent {
    pub fn with_now(session_id: impl Into<String>, kind: RumEventKind, data: Value) -> Self {
        Self {
            ts: now_rfc3339(),
            session_id: session_id.into(),
            kind,
            data,
        }
    }
}
