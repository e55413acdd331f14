use std::sync::Arc;

use chrono::Utc;
use metro_watch_core::{
    RouteError,
    closure::{ClosureRecord, ClosureSnapshot, apply_closure_snapshot},
    routing::{RoutingConfig, compute_route_with, endpoint_status},
    transit::{Point, StationDataset, StationGraph, StationIdentifier, TransitNetwork},
};
use tokio::sync::RwLock;
use tracing::info;

use crate::records::{ClosureInput, EndpointReport, RouteInfo, StationInfo};

#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum PlannerError {
    #[error("{0}")]
    Dataset(String),
    #[error("{0}")]
    Config(String),
    #[error("{0}")]
    Routing(String),
}

impl From<RouteError> for PlannerError {
    fn from(error: RouteError) -> Self {
        match error {
            RouteError::InvalidConfig(message) => Self::Config(message),
            error => Self::Routing(error.to_string()),
        }
    }
}

/// The station network and the closure set currently applied to it.
///
/// Route requests share read access. A new closure snapshot takes both write
/// locks (network first, then closures) so no request sees a graph and a
/// snapshot that disagree.
#[derive(uniffi::Object)]
pub struct RoutePlanner {
    network: RwLock<StationGraph>,
    closures: RwLock<ClosureSnapshot>,
    config: RoutingConfig,
}

impl RoutePlanner {
    fn load(dataset_json: &str, config: RoutingConfig) -> Result<Self, PlannerError> {
        let network = StationDataset::from_json(dataset_json)
            .and_then(StationDataset::into_graph)
            .map_err(|e| PlannerError::Dataset(e.to_string()))?;

        info!("loaded station network with {} stations", network.len());

        Ok(Self {
            network: RwLock::new(network),
            closures: RwLock::new(ClosureSnapshot::empty()),
            config,
        })
    }

    fn snapshot_from(&self, closures: Vec<ClosureInput>) -> ClosureSnapshot {
        let records = closures.into_iter().map(ClosureRecord::from);
        match self.config.closure_max_age() {
            Some(max_age) => ClosureSnapshot::from_fresh_records(records, Utc::now(), max_age),
            None => ClosureSnapshot::from_records(records),
        }
    }
}

#[uniffi::export]
impl RoutePlanner {
    #[uniffi::constructor]
    pub fn new(dataset_json: String) -> Result<Arc<Self>, PlannerError> {
        Ok(Arc::new(Self::load(&dataset_json, RoutingConfig::default())?))
    }

    #[uniffi::constructor]
    pub fn with_config(dataset_json: String, config_json: String) -> Result<Arc<Self>, PlannerError> {
        let config = RoutingConfig::from_json(&config_json)?;
        Ok(Arc::new(Self::load(&dataset_json, config)?))
    }

    /// Replace the closure set with the feed's current contents.
    ///
    /// Returns the number of stations now closed.
    pub async fn apply_closures(&self, closures: Vec<ClosureInput>) -> u32 {
        let snapshot = self.snapshot_from(closures);

        let mut network = self.network.write().await;
        let mut current = self.closures.write().await;

        let applied = apply_closure_snapshot(&mut network, &snapshot);
        *current = snapshot;

        u32::try_from(applied.closed).unwrap_or(u32::MAX)
    }

    pub async fn compute_route(&self, from: String, to: String) -> Result<RouteInfo, PlannerError> {
        let network = self.network.read().await;
        let closures = self.closures.read().await;

        let decision = compute_route_with(
            &*network,
            &StationIdentifier::from(from),
            &StationIdentifier::from(to),
            &closures,
            &self.config,
        )?;

        Ok(RouteInfo::from(&decision))
    }

    /// Whether a chosen origin or destination is usable right now
    pub async fn endpoint_state(&self, station_id: String) -> Result<EndpointReport, PlannerError> {
        let network = self.network.read().await;
        let closures = self.closures.read().await;

        let id = StationIdentifier::from(station_id);
        let station = network
            .station(&id)
            .ok_or_else(|| PlannerError::Routing(format!("Station not found: {id}")))?;
        let status = endpoint_status(&closures, &id);

        Ok(EndpointReport {
            state: status.into(),
            message: status.message(&station.name),
        })
    }

    pub async fn closed_stations(&self) -> Vec<String> {
        let closures = self.closures.read().await;
        let mut ids: Vec<String> = closures.station_ids().map(ToString::to_string).collect();
        ids.sort();
        ids
    }

    pub async fn search_stations(&self, query: String) -> Vec<StationInfo> {
        let network = self.network.read().await;
        network
            .search_by_name(&query)
            .iter()
            .map(|station| StationInfo::from(station.as_ref()))
            .collect()
    }

    pub async fn nearest_stations(&self, latitude: f64, longitude: f64, count: u32) -> Vec<StationInfo> {
        let network = self.network.read().await;
        network
            .nearest_stations(Point::new(longitude, latitude), count as usize)
            .iter()
            .map(|station| StationInfo::from(station.as_ref()))
            .collect()
    }
}
