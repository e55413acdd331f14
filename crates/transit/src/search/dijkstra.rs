//! Single-source Dijkstra over a [`TransitNetwork`].
//!
//! Closures are honoured by filtering stations at traversal time through
//! [`SearchConstraints`]; the network itself is never mutated.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::{Duration, Instant};

use ordered_float::OrderedFloat;

use crate::identifiers::StationIdentifier;
use crate::models::{traits::*, types::*, PathResult};

// ============================================================================
// Constraints
// ============================================================================

/// Which stations a search may traverse.
///
/// The start station is always allowed. Any other station is traversable when
/// it is not excluded and, for restricted searches, when it is active.
#[derive(Clone, Debug, Default)]
pub struct SearchConstraints {
    respect_active: bool,
    excluded: HashSet<StationIdentifier>,
    deadline: Option<Instant>,
}

impl SearchConstraints {
    /// Ignore active flags entirely
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Skip stations whose active flag is false
    pub fn restricted() -> Self {
        Self {
            respect_active: true,
            ..Self::default()
        }
    }

    pub fn excluding(mut self, ids: impl IntoIterator<Item = StationIdentifier>) -> Self {
        self.excluded.extend(ids);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Deadline relative to now; `None` leaves the search unbounded
    pub fn with_timeout(self, timeout: Option<Duration>) -> Self {
        match timeout {
            Some(timeout) => self.with_deadline(Instant::now() + timeout),
            None => self,
        }
    }

    pub fn respects_active(&self) -> bool {
        self.respect_active
    }

    pub fn excluded(&self) -> &HashSet<StationIdentifier> {
        &self.excluded
    }

    pub fn allows<N: TransitNetwork + ?Sized>(&self, network: &N, id: &StationIdentifier) -> bool {
        !self.excluded.contains(id) && (!self.respect_active || network.is_active(id))
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

// ============================================================================
// Dijkstra's Algorithm
// ============================================================================

/// State for Dijkstra priority queue
#[derive(Clone, PartialEq, Eq)]
struct QueueEntry {
    cost: OrderedFloat<Cost>,
    station: StationIdentifier,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap; equal costs pop in station id order
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lowest-cost path from `start` to `end` under `constraints`.
///
/// Returns [`TransitError::UnknownStation`] when either endpoint is missing
/// and [`PathResult::unreachable`] when no path exists. `start == end` yields
/// a single-station path of cost 0 without searching. Among equal-cost
/// paths, a station keeps the predecessor with the smallest id.
pub fn shortest_path<N: TransitNetwork + ?Sized>(
    network: &N,
    start: &StationIdentifier,
    end: &StationIdentifier,
    constraints: &SearchConstraints,
) -> Result<PathResult> {
    let start_station = network
        .station(start)
        .ok_or_else(|| TransitError::UnknownStation(start.clone()))?;
    if !network.contains(end) {
        return Err(TransitError::UnknownStation(end.clone()));
    }

    if start == end {
        return Ok(PathResult::new(vec![Station::clone(start_station)], 0.0));
    }

    let mut dist: HashMap<StationIdentifier, Cost> = HashMap::new();
    let mut previous: HashMap<StationIdentifier, StationIdentifier> = HashMap::new();
    let mut settled: HashSet<StationIdentifier> = HashSet::new();
    let mut heap = BinaryHeap::new();

    dist.insert(start.clone(), 0.0);
    heap.push(QueueEntry {
        cost: OrderedFloat(0.0),
        station: start.clone(),
    });

    while let Some(QueueEntry { cost, station }) = heap.pop() {
        if constraints.expired() {
            return Err(TransitError::SearchTimedOut {
                start: start.clone(),
                end: end.clone(),
                expanded: settled.len(),
            });
        }

        if !settled.insert(station.clone()) {
            continue;
        }

        if station == *end {
            return reconstruct(network, &previous, start, end, cost.0);
        }

        for connection in network.connections(&station) {
            if settled.contains(&connection.to) || !constraints.allows(network, &connection.to) {
                continue;
            }

            let next_cost = cost.0 + connection.cost;
            match dist.get(&connection.to) {
                Some(&known) if next_cost > known => {}
                Some(&known) if next_cost == known => {
                    // Same cost; only the predecessor may change
                    if previous.get(&connection.to).is_some_and(|p| station < *p) {
                        previous.insert(connection.to.clone(), station.clone());
                    }
                }
                _ => {
                    dist.insert(connection.to.clone(), next_cost);
                    previous.insert(connection.to.clone(), station.clone());
                    heap.push(QueueEntry {
                        cost: OrderedFloat(next_cost),
                        station: connection.to.clone(),
                    });
                }
            }
        }
    }

    Ok(PathResult::unreachable())
}

fn reconstruct<N: TransitNetwork + ?Sized>(
    network: &N,
    previous: &HashMap<StationIdentifier, StationIdentifier>,
    start: &StationIdentifier,
    end: &StationIdentifier,
    total_cost: Cost,
) -> Result<PathResult> {
    let mut ids = vec![end];
    let mut cursor = end;
    while cursor != start {
        cursor = previous.get(cursor).ok_or_else(|| {
            TransitError::InvalidData(format!("broken predecessor chain at {cursor}"))
        })?;
        ids.push(cursor);
    }

    let path = ids
        .into_iter()
        .rev()
        .map(|id| {
            network
                .station(id)
                .map(|station| Station::clone(station))
                .ok_or_else(|| TransitError::UnknownStation(id.clone()))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PathResult::new(path, total_cost))
}
