//! The full closure set and its application to the station graph.
//!
//! Every snapshot replaces the previous one wholesale; nothing is patched
//! incrementally.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use metro_watch_transit::{StationGraph, StationIdentifier};
use tracing::{debug, warn};

use crate::closure::record::{ClosureRecord, ReasonCategory};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClosureSnapshot {
    closures: HashMap<StationIdentifier, ReasonCategory>,
}

impl ClosureSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Duplicate station ids keep the most severe reason
    pub fn from_records(records: impl IntoIterator<Item = ClosureRecord>) -> Self {
        let mut closures = HashMap::new();
        for record in records {
            closures
                .entry(record.station_id)
                .and_modify(|reason: &mut ReasonCategory| *reason = (*reason).max(record.reason))
                .or_insert(record.reason);
        }
        Self { closures }
    }

    /// Like [`ClosureSnapshot::from_records`], dropping records older than `max_age`
    pub fn from_fresh_records(
        records: impl IntoIterator<Item = ClosureRecord>,
        now: DateTime<Utc>,
        max_age: Duration,
    ) -> Self {
        Self::from_records(
            records
                .into_iter()
                .filter(|record| record.is_fresh(now, max_age)),
        )
    }

    pub fn reason(&self, id: &StationIdentifier) -> Option<ReasonCategory> {
        self.closures.get(id).copied()
    }

    pub fn is_closed(&self, id: &StationIdentifier) -> bool {
        self.closures.contains_key(id)
    }

    pub fn station_ids(&self) -> impl Iterator<Item = &StationIdentifier> {
        self.closures.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StationIdentifier, ReasonCategory)> {
        self.closures.iter().map(|(id, reason)| (id, *reason))
    }

    pub fn len(&self) -> usize {
        self.closures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closures.is_empty()
    }
}

/// Outcome of [`apply_closure_snapshot`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppliedClosures {
    /// Stations now inactive
    pub closed: usize,
    /// Snapshot ids with no matching station in the graph
    pub unknown: Vec<StationIdentifier>,
}

/// Recompute every station's active flag from the full closure set.
///
/// Soft closures deactivate their station too, so the restricted graph routes
/// around every reported station.
pub fn apply_closure_snapshot(
    graph: &mut StationGraph,
    snapshot: &ClosureSnapshot,
) -> AppliedClosures {
    graph.set_all_active(true);

    let mut applied = AppliedClosures::default();
    for id in snapshot.station_ids() {
        if graph.set_active(id, false).is_ok() {
            applied.closed += 1;
        } else {
            warn!("closure feed references unknown station {id}");
            applied.unknown.push(id.clone());
        }
    }
    applied.unknown.sort();

    debug!(
        "applied closure snapshot: {} closed, {} unknown, {} stations",
        applied.closed,
        applied.unknown.len(),
        graph.len()
    );
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use metro_watch_transit::{Station, TransitNetwork};

    fn graph() -> StationGraph {
        StationGraph::builder()
            .add_station(Station::on_line("A", "L", 0.0, 0.0))
            .add_station(Station::on_line("B", "L", 0.0, 0.0))
            .add_station(Station::on_line("C", "L", 0.0, 0.0))
            .connect_both("A - L", "B - L", 1.0)
            .connect_both("B - L", "C - L", 1.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_duplicate_records_keep_most_severe() {
        let snapshot = ClosureSnapshot::from_records([
            ClosureRecord::closed("A - L"),
            ClosureRecord::high_report_volume("A - L"),
            ClosureRecord::high_report_volume("B - L"),
        ]);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(
            snapshot.reason(&"A - L".into()),
            Some(ReasonCategory::OtherClosure)
        );
        assert_eq!(
            snapshot.reason(&"B - L".into()),
            Some(ReasonCategory::HighReportVolume)
        );
        assert!(!snapshot.is_closed(&"C - L".into()));
    }

    #[test]
    fn test_from_fresh_records() {
        let now = Utc::now();
        let snapshot = ClosureSnapshot::from_fresh_records(
            [
                ClosureRecord::closed("A - L").with_closed_at(now - Duration::minutes(10)),
                ClosureRecord::closed("B - L").with_closed_at(now - Duration::hours(5)),
                ClosureRecord::high_report_volume("C - L"),
            ],
            now,
            Duration::hours(2),
        );

        assert!(snapshot.is_closed(&"A - L".into()));
        assert!(!snapshot.is_closed(&"B - L".into()));
        assert!(snapshot.is_closed(&"C - L".into()));
    }

    #[test]
    fn test_apply_sets_flags_from_full_set() {
        let mut graph = graph();
        let applied = apply_closure_snapshot(
            &mut graph,
            &ClosureSnapshot::from_records([
                ClosureRecord::closed("A - L"),
                ClosureRecord::high_report_volume("B - L"),
            ]),
        );

        assert_eq!(applied.closed, 2);
        assert!(applied.unknown.is_empty());
        assert!(!graph.is_active(&"A - L".into()));
        assert!(!graph.is_active(&"B - L".into()));
        assert!(graph.is_active(&"C - L".into()));
    }

    #[test]
    fn test_apply_replaces_previous_snapshot() {
        let mut graph = graph();
        apply_closure_snapshot(
            &mut graph,
            &ClosureSnapshot::from_records([ClosureRecord::closed("A - L")]),
        );
        apply_closure_snapshot(
            &mut graph,
            &ClosureSnapshot::from_records([ClosureRecord::closed("C - L")]),
        );

        assert_eq!(graph.inactive_stations(), vec![StationIdentifier::new("C - L")]);

        apply_closure_snapshot(&mut graph, &ClosureSnapshot::empty());
        assert!(graph.inactive_stations().is_empty());
    }

    #[test]
    fn test_apply_reports_unknown_stations() {
        let mut graph = graph();
        let applied = apply_closure_snapshot(
            &mut graph,
            &ClosureSnapshot::from_records([
                ClosureRecord::closed("Ghost - L"),
                ClosureRecord::closed("B - L"),
            ]),
        );

        assert_eq!(applied.closed, 1);
        assert_eq!(applied.unknown, vec![StationIdentifier::new("Ghost - L")]);
    }
}
