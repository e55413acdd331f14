//! Closure-aware route planning over a metro station graph.
//!
//! The closure feed arrives as a [`closure::ClosureSnapshot`], gets applied
//! to the graph with [`closure::apply_closure_snapshot`], and every route
//! request goes through [`routing::compute_route`].

pub mod closure;
pub mod error;
pub mod routing;

// Re-export transit from the transit crate
pub use metro_watch_transit as transit;

pub use error::{Result, RouteError};
