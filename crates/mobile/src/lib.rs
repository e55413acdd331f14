mod logging;
pub mod planner;
pub mod records;

uniffi::setup_scaffolding!();

/// Initialize logging and panic reporting.
/// Call this once at startup from Kotlin/Swift
#[uniffi::export]
pub fn init_logging() {
    logging::setup_logging();
}
