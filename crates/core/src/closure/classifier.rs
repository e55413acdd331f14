//! Partition of a path's stations by closure severity.

use std::collections::HashSet;

use metro_watch_transit::{PathResult, Station, StationIdentifier};

use crate::closure::{record::ReasonCategory, snapshot::ClosureSnapshot};

/// Stations of a path that appear in the closure set, in path order.
///
/// The two lists are disjoint; stations with no closure appear in neither.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClosureClassification {
    pub hard_closed: Vec<Station>,
    pub soft_flagged: Vec<Station>,
}

impl ClosureClassification {
    /// No closure touches the path
    pub fn is_clear(&self) -> bool {
        self.hard_closed.is_empty() && self.soft_flagged.is_empty()
    }

    pub fn hard_closed_names(&self) -> Vec<String> {
        self.hard_closed.iter().map(|s| s.name.to_string()).collect()
    }

    pub fn soft_flagged_names(&self) -> Vec<String> {
        self.soft_flagged.iter().map(|s| s.name.to_string()).collect()
    }

    pub fn soft_flagged_ids(&self) -> HashSet<StationIdentifier> {
        self.soft_flagged.iter().map(|s| s.id.clone()).collect()
    }
}

/// Inspect `path` against `closures` without touching any graph
pub fn classify_path(path: &PathResult, closures: &ClosureSnapshot) -> ClosureClassification {
    let mut classification = ClosureClassification::default();

    for station in &path.path {
        match closures.reason(&station.id) {
            Some(ReasonCategory::OtherClosure) => classification.hard_closed.push(station.clone()),
            Some(ReasonCategory::HighReportVolume) => {
                classification.soft_flagged.push(station.clone())
            }
            None => {}
        }
    }

    classification
}
