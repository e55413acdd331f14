//! Closure records as delivered by the external closure feed.

use chrono::{DateTime, Duration, Utc};
use metro_watch_transit::StationIdentifier;
use serde::{Deserialize, Serialize};

/// Reason text written by the report-volume trigger
pub const HIGH_REPORT_VOLUME_REASON: &str = "Alta actividad de reportes";

/// Severity of a closure.
///
/// `HighReportVolume` is advisory: routes may still cross the station but an
/// alternative is offered. `OtherClosure` blocks the station outright.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    Serialize,
    Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum ReasonCategory {
    HighReportVolume,
    OtherClosure,
}

impl ReasonCategory {
    /// Map the feed's free-text reason to a category.
    ///
    /// Only the report-volume reason (or the variant name itself) is soft;
    /// anything else, including an empty reason, is a hard closure.
    pub fn from_reason(reason: &str) -> Self {
        let reason = reason.trim();
        if reason.eq_ignore_ascii_case(HIGH_REPORT_VOLUME_REASON)
            || reason.eq_ignore_ascii_case("HighReportVolume")
        {
            Self::HighReportVolume
        } else {
            Self::OtherClosure
        }
    }

    pub fn is_blocking(self) -> bool {
        matches!(self, Self::OtherClosure)
    }
}

impl From<String> for ReasonCategory {
    fn from(reason: String) -> Self {
        Self::from_reason(&reason)
    }
}

impl From<ReasonCategory> for String {
    fn from(category: ReasonCategory) -> Self {
        category.to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClosureRecord {
    pub station_id: StationIdentifier,
    pub reason: ReasonCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
}

impl ClosureRecord {
    pub fn new(station_id: impl Into<StationIdentifier>, reason: ReasonCategory) -> Self {
        Self {
            station_id: station_id.into(),
            reason,
            closed_at: None,
        }
    }

    pub fn high_report_volume(station_id: impl Into<StationIdentifier>) -> Self {
        Self::new(station_id, ReasonCategory::HighReportVolume)
    }

    pub fn closed(station_id: impl Into<StationIdentifier>) -> Self {
        Self::new(station_id, ReasonCategory::OtherClosure)
    }

    pub fn with_closed_at(mut self, closed_at: DateTime<Utc>) -> Self {
        self.closed_at = Some(closed_at);
        self
    }

    /// Records without a timestamp never expire
    pub fn is_fresh(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        self.closed_at.is_none_or(|closed_at| now - closed_at < max_age)
    }
}
