mod config;
mod decision;
mod endpoint;
mod policy;

pub use config::RoutingConfig;
pub use decision::{Advisory, RouteDecision};
pub use endpoint::{EndpointStatus, endpoint_status};
pub use policy::{compute_route, compute_route_with};
