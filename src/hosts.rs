//! First-party host classification for outbound request instrumentation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The set of hosts considered part of the monitored application's own
/// backend. A request host is first-party iff it equals a pattern exactly or
/// is a subdomain of one (`"api.example.com"` matches pattern
/// `"example.com"`, `"notexample.com"` does not).
///
/// Matching is case-insensitive on the host only; callers extract the bare
/// host from the request URL before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstPartyHosts {
    patterns: HashSet<String>,
}

impl FirstPartyHosts {
    /// Builds the set, normalizing every pattern to lowercase.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| p.into().to_ascii_lowercase())
                .collect(),
        }
    }

    /// True iff `request_host` matches a configured pattern. An empty set
    /// classifies every host as third-party.
    pub fn is_first_party(&self, request_host: &str) -> bool {
        let host = request_host.to_ascii_lowercase();
        self.patterns
            .iter()
            .any(|pattern| host == *pattern || host.ends_with(&format!(".{}", pattern)))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }
}
