//! Closure feed records, snapshots, and path classification.

pub mod classifier;
pub mod record;
pub mod snapshot;

pub use classifier::{ClosureClassification, classify_path};
pub use record::{ClosureRecord, HIGH_REPORT_VOLUME_REASON, ReasonCategory};
pub use snapshot::{AppliedClosures, ClosureSnapshot, apply_closure_snapshot};
