//! SDK configuration: the immutable `TelemetryConfig` record and the fluent
//! `ConfigBuilder` that stages it.
//!
//! Setters stage state without validating; every rule is checked at `build()`
//! and all violations are reported together.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoint::{EndpointSelector, TelemetryKind};
use crate::error::{ConfigError, ValidationError};
use crate::hosts::FirstPartyHosts;

/// RUM view metadata produced by an injected view-tracking predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedView {
    pub name: String,
    #[serde(default)]
    pub attributes: HashMap<String, Value>,
}

impl TrackedView {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: HashMap::new(),
        }
    }
}

/// Injected predicate deciding whether a platform view identity marks a RUM
/// view. The core only carries the reference; the UI-lifecycle collaborator
/// invokes it.
pub type ViewPredicate = Arc<dyn Fn(&str) -> Option<TrackedView> + Send + Sync>;

/// Immutable telemetry client configuration. Built once per SDK
/// initialization via [`ConfigBuilder`], then shared read-only for the
/// process lifetime; feature changes require re-initialization.
#[derive(Clone)]
pub struct TelemetryConfig {
    pub rum_application_id: Option<String>,
    /// Either a RUM client token (supports RUM, logging and tracing) or a
    /// regular client token for logging and tracing only.
    pub client_token: String,
    pub environment: String,
    pub logging_enabled: bool,
    pub tracing_enabled: bool,
    pub rum_enabled: bool,
    pub logs_endpoint: EndpointSelector,
    pub traces_endpoint: EndpointSelector,
    pub rum_endpoint: EndpointSelector,
    pub service_name: Option<String>,
    /// Absent (as opposed to empty) disables request classification and
    /// interception entirely.
    pub first_party_hosts: Option<FirstPartyHosts>,
    pub session_sample_rate: f32,
    pub view_predicate: Option<ViewPredicate>,
    pub action_tracking_enabled: bool,
}

impl std::fmt::Debug for TelemetryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryConfig")
            .field("rum_application_id", &self.rum_application_id)
            .field("client_token", &self.client_token)
            .field("environment", &self.environment)
            .field("logging_enabled", &self.logging_enabled)
            .field("tracing_enabled", &self.tracing_enabled)
            .field("rum_enabled", &self.rum_enabled)
            .field("logs_endpoint", &self.logs_endpoint)
            .field("traces_endpoint", &self.traces_endpoint)
            .field("rum_endpoint", &self.rum_endpoint)
            .field("service_name", &self.service_name)
            .field("first_party_hosts", &self.first_party_hosts)
            .field("session_sample_rate", &self.session_sample_rate)
            .field(
                "view_predicate",
                &self.view_predicate.as_ref().map(|_| "<predicate>"),
            )
            .field("action_tracking_enabled", &self.action_tracking_enabled)
            .finish()
    }
}

impl TelemetryConfig {
    /// Builder for a RUM-eligible configuration. RUM is enabled by default.
    pub fn builder_with_rum(
        application_id: impl Into<String>,
        client_token: impl Into<String>,
        environment: impl Into<String>,
    ) -> ConfigBuilder {
        ConfigBuilder::new(
            Some(application_id.into()),
            client_token.into(),
            environment.into(),
        )
    }

    /// Builder for logging and tracing only. RUM stays ineligible: enabling
    /// it later is rejected at `build()`.
    pub fn builder(
        client_token: impl Into<String>,
        environment: impl Into<String>,
    ) -> ConfigBuilder {
        ConfigBuilder::new(None, client_token.into(), environment.into())
    }

    /// Resolved upload URL for one telemetry kind.
    pub fn endpoint_url(&self, kind: TelemetryKind) -> String {
        match kind {
            TelemetryKind::Logs => self.logs_endpoint.resolve(kind),
            TelemetryKind::Traces => self.traces_endpoint.resolve(kind),
            TelemetryKind::Rum => self.rum_endpoint.resolve(kind),
        }
    }

    /// Classifies a bare request host against the configured first-party set.
    /// With no set configured, every host is third-party.
    pub fn is_first_party(&self, request_host: &str) -> bool {
        self.first_party_hosts
            .as_ref()
            .map(|hosts| hosts.is_first_party(request_host))
            .unwrap_or(false)
    }
}

/// Fluent staging object for [`TelemetryConfig`]. Single-owner and
/// sequential-use during initialization; setters never validate, and the
/// builder stays usable after `build()`.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    staged: TelemetryConfig,
}

impl ConfigBuilder {
    fn new(rum_application_id: Option<String>, client_token: String, environment: String) -> Self {
        let rum_eligible = rum_application_id.is_some();
        Self {
            staged: TelemetryConfig {
                rum_application_id,
                client_token,
                environment,
                logging_enabled: true,
                tracing_enabled: true,
                rum_enabled: rum_eligible,
                logs_endpoint: EndpointSelector::Us,
                traces_endpoint: EndpointSelector::Us,
                rum_endpoint: EndpointSelector::Us,
                service_name: None,
                first_party_hosts: None,
                session_sample_rate: 100.0,
                view_predicate: None,
                action_tracking_enabled: false,
            },
        }
    }

    /// Enables or disables the logging feature. `true` by default.
    pub fn enable_logging(mut self, enabled: bool) -> Self {
        self.staged.logging_enabled = enabled;
        self
    }

    /// Server endpoint logs are sent to. Default is `Us`.
    pub fn logs_endpoint(mut self, endpoint: EndpointSelector) -> Self {
        self.staged.logs_endpoint = endpoint;
        self
    }

    /// Enables or disables the tracing feature. `true` by default.
    pub fn enable_tracing(mut self, enabled: bool) -> Self {
        self.staged.tracing_enabled = enabled;
        self
    }

    /// Server endpoint traces are sent to. Default is `Us`.
    pub fn traces_endpoint(mut self, endpoint: EndpointSelector) -> Self {
        self.staged.traces_endpoint = endpoint;
        self
    }

    /// Declares which hosts count as first-party for request classification
    /// and trace propagation. Replaces any previously declared set. Until a
    /// set is declared, request monitoring stays disabled.
    pub fn track_first_party_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.staged.first_party_hosts = Some(FirstPartyHosts::new(hosts));
        self
    }

    #[deprecated(note = "use `track_first_party_hosts` instead")]
    pub fn traced_hosts<I, S>(self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.track_first_party_hosts(hosts)
    }

    /// Enables or disables the RUM feature. Only configurations created with
    /// [`TelemetryConfig::builder_with_rum`] may enable it.
    pub fn enable_rum(mut self, enabled: bool) -> Self {
        self.staged.rum_enabled = enabled;
        self
    }

    /// Server endpoint RUM events are sent to. Default is `Us`.
    pub fn rum_endpoint(mut self, endpoint: EndpointSelector) -> Self {
        self.staged.rum_endpoint = endpoint;
        self
    }

    /// Percentage of RUM sessions kept for upload, in `0.0..=100.0`.
    /// Default is 100.0.
    pub fn session_sample_rate(mut self, rate: f32) -> Self {
        self.staged.session_sample_rate = rate;
        self
    }

    /// Predicate for automatically tracking platform views as RUM views.
    /// Stored verbatim; the UI-lifecycle collaborator invokes it.
    pub fn track_views(mut self, predicate: ViewPredicate) -> Self {
        self.staged.view_predicate = Some(predicate);
        self
    }

    /// Enables or disables automatic tracking of user actions as RUM
    /// actions. `false` by default.
    pub fn track_actions(mut self, enabled: bool) -> Self {
        self.staged.action_tracking_enabled = enabled;
        self
    }

    /// Default service name attached to uploaded data.
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.staged.service_name = Some(name.into());
        self
    }

    /// Validates the staged state and freezes it into an independently owned
    /// [`TelemetryConfig`]. Every violated rule is reported; the builder can
    /// be corrected and built again.
    pub fn build(&self) -> Result<TelemetryConfig, ConfigError> {
        let mut violations = Vec::new();
        if self.staged.client_token.is_empty() {
            violations.push(ValidationError::EmptyClientToken);
        }
        if self.staged.environment.is_empty() {
            violations.push(ValidationError::EmptyEnvironment);
        }
        let rate = self.staged.session_sample_rate;
        if !(0.0..=100.0).contains(&rate) {
            violations.push(ValidationError::SampleRateOutOfRange(rate));
        }
        if self.staged.rum_enabled && self.staged.rum_application_id.is_none() {
            violations.push(ValidationError::RumWithoutApplicationId);
        }
        if violations.is_empty() {
            Ok(self.staged.clone())
        } else {
            Err(ConfigError::Invalid(violations))
        }
    }
}
