use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};

/// Tunables for route computation and closure intake.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoutingConfig {
    /// Closure records older than this are ignored; `None` keeps them all
    pub closure_max_age_minutes: Option<u64>,
    /// Deadline applied to each individual search
    pub search_timeout_ms: Option<u64>,
    /// Also route the soft-closure alternative around every other closure
    pub alternative_respects_closures: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            closure_max_age_minutes: Some(120),
            search_timeout_ms: None,
            alternative_respects_closures: false,
        }
    }
}

impl RoutingConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RouteError::InvalidConfig(e.to_string()))
    }

    pub fn closure_max_age(&self) -> Option<chrono::Duration> {
        self.closure_max_age_minutes
            .and_then(|minutes| i64::try_from(minutes).ok())
            .and_then(chrono::Duration::try_minutes)
    }

    pub fn search_timeout(&self) -> Option<Duration> {
        self.search_timeout_ms.map(Duration::from_millis)
    }
}
