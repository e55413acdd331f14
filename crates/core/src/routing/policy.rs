//! Route reconciliation: up to two searches per request, merged into a
//! single [`RouteDecision`].
//!
//! 1. Probe the best route with every closure ignored and classify the
//!    stations it crosses.
//! 2. Hard closure on the probe: route on the restricted graph instead.
//!    Soft closure only: keep the probe as primary and look for a detour
//!    around the flagged stations.
//!
//! Closures are expressed as search constraints, so the network is only ever
//! borrowed immutably and its active flags are exactly what
//! [`apply_closure_snapshot`](crate::closure::apply_closure_snapshot) left.

use std::time::Duration;

use metro_watch_transit::{
    PathResult, SearchConstraints, StationIdentifier, TransitNetwork, shortest_path,
};
use tracing::{debug, info};

use crate::closure::{ClosureSnapshot, ReasonCategory, classify_path};
use crate::error::Result;
use crate::routing::config::RoutingConfig;
use crate::routing::decision::{Advisory, RouteDecision};

/// [`compute_route_with`] using [`RoutingConfig::default`]
pub fn compute_route<N: TransitNetwork + ?Sized>(
    network: &N,
    start: &StationIdentifier,
    end: &StationIdentifier,
    closures: &ClosureSnapshot,
) -> Result<RouteDecision> {
    compute_route_with(network, start, end, closures, &RoutingConfig::default())
}

/// Compute the route decision for `start -> end` under `closures`.
///
/// Unknown station ids and expired search deadlines are errors. Every other
/// outcome, including "no route", is carried by the returned advisory.
pub fn compute_route_with<N: TransitNetwork + ?Sized>(
    network: &N,
    start: &StationIdentifier,
    end: &StationIdentifier,
    closures: &ClosureSnapshot,
    config: &RoutingConfig,
) -> Result<RouteDecision> {
    let timeout = config.search_timeout();
    debug!(
        "computing route {start} -> {end} with {} closures",
        closures.len()
    );

    let optimal = shortest_path(
        network,
        start,
        end,
        &SearchConstraints::unrestricted().with_timeout(timeout),
    )?;

    if !optimal.is_reachable() {
        info!("no route {start} -> {end} even with every station open");
        return Ok(RouteDecision {
            primary_path: PathResult::unreachable(),
            alternative_path: None,
            advisory: Advisory::Unreachable { stations: vec![] },
            is_hard_blocked: false,
        });
    }

    let classification = classify_path(&optimal, closures);
    debug!(
        "optimal route crosses {} hard and {} soft closures",
        classification.hard_closed.len(),
        classification.soft_flagged.len()
    );

    if !classification.hard_closed.is_empty() {
        // A closed endpoint cannot be routed from or to, even as a detour
        let endpoint_closed = [start, end]
            .into_iter()
            .any(|id| closures.reason(id) == Some(ReasonCategory::OtherClosure));
        let restricted = if endpoint_closed {
            PathResult::unreachable()
        } else {
            shortest_path(network, start, end, &restricted(closures, timeout))?
        };
        let stations = classification.hard_closed_names();

        let advisory = if restricted.is_reachable() {
            Advisory::HardBlock { stations }
        } else {
            info!("route {start} -> {end} blocked by closed stations");
            Advisory::Unreachable { stations }
        };

        return Ok(RouteDecision {
            primary_path: restricted,
            alternative_path: None,
            advisory,
            is_hard_blocked: true,
        });
    }

    if !classification.soft_flagged.is_empty() {
        let constraints = if config.alternative_respects_closures {
            restricted(closures, timeout)
        } else {
            SearchConstraints::unrestricted().with_timeout(timeout)
        }
        .excluding(classification.soft_flagged_ids());

        let candidate = shortest_path(network, start, end, &constraints)?;
        let alternative_path =
            (candidate.is_reachable() && !candidate.same_stations(&optimal)).then_some(candidate);

        if alternative_path.is_none() {
            debug!("no alternative around soft closures for {start} -> {end}");
        }

        return Ok(RouteDecision {
            advisory: Advisory::SoftWarning {
                stations: classification.soft_flagged_names(),
                alternative_available: alternative_path.is_some(),
            },
            primary_path: optimal,
            alternative_path,
            is_hard_blocked: false,
        });
    }

    Ok(RouteDecision {
        primary_path: optimal,
        alternative_path: None,
        advisory: Advisory::None,
        is_hard_blocked: false,
    })
}

/// Honour the graph's active flags and every station in the snapshot, so the
/// snapshot applies even when the graph has not been refreshed from it yet
fn restricted(closures: &ClosureSnapshot, timeout: Option<Duration>) -> SearchConstraints {
    SearchConstraints::restricted()
        .excluding(closures.station_ids().cloned())
        .with_timeout(timeout)
}
