//! Intake endpoint catalog: telemetry kind plus region selector resolve to one
//! absolute upload URL.

use serde::{Deserialize, Serialize};

const LOGS_INTAKE_US: &str = "https://logs-intake.beaconhq.com/v1/input/";
const LOGS_INTAKE_EU: &str = "https://logs-intake.beaconhq.eu/v1/input/";
const LOGS_INTAKE_GOV: &str = "https://logs-intake.beacon-gov.com/v1/input/";

const TRACES_INTAKE_US: &str = "https://trace-intake.beaconhq.com/v1/input/";
const TRACES_INTAKE_EU: &str = "https://trace-intake.beaconhq.eu/v1/input/";
const TRACES_INTAKE_GOV: &str = "https://trace-intake.beacon-gov.com/v1/input/";

const RUM_INTAKE_US: &str = "https://rum-intake.beaconhq.com/v1/input/";
const RUM_INTAKE_EU: &str = "https://rum-intake.beaconhq.eu/v1/input/";
const RUM_INTAKE_GOV: &str = "https://rum-intake.beacon-gov.com/v1/input/";

/// The kind of telemetry an endpoint receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TelemetryKind {
    Logs,
    Traces,
    Rum,
}

/// Determines the server a telemetry kind is uploaded to. `Custom` URLs are
/// used verbatim and never rewritten or validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointSelector {
    /// US based servers.
    Us,
    /// Europe based servers.
    Eu,
    /// Gov servers.
    Gov,
    /// User-defined server.
    Custom(String),
}

impl EndpointSelector {
    /// Resolves the selector to an absolute intake URL for `kind`.
    pub fn resolve(&self, kind: TelemetryKind) -> String {
        match (self, kind) {
            (EndpointSelector::Us, TelemetryKind::Logs) => LOGS_INTAKE_US.to_string(),
            (EndpointSelector::Eu, TelemetryKind::Logs) => LOGS_INTAKE_EU.to_string(),
            (EndpointSelector::Gov, TelemetryKind::Logs) => LOGS_INTAKE_GOV.to_string(),
            (EndpointSelector::Us, TelemetryKind::Traces) => TRACES_INTAKE_US.to_string(),
            (EndpointSelector::Eu, TelemetryKind::Traces) => TRACES_INTAKE_EU.to_string(),
            (EndpointSelector::Gov, TelemetryKind::Traces) => TRACES_INTAKE_GOV.to_string(),
            (EndpointSelector::Us, TelemetryKind::Rum) => RUM_INTAKE_US.to_string(),
            (EndpointSelector::Eu, TelemetryKind::Rum) => RUM_INTAKE_EU.to_string(),
            (EndpointSelector::Gov, TelemetryKind::Rum) => RUM_INTAKE_GOV.to_string(),
            (EndpointSelector::Custom(url), _) => url.clone(),
        }
    }
}
