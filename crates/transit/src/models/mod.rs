//! Metro data models, types, and traits.

pub mod path;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use path::PathResult;
pub use traits::TransitNetwork;
pub use types::{Connection, Cost, Result, Station, TransitError};
