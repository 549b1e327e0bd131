use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "hospitaldb";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The registry file the corrector reads and rewrites in place.
/// Fixed by convention; there is deliberately no flag to point it elsewhere.
pub const REGISTRY_FILE: &str = "complete_hospitals_geocoded.json";

/// Get the registry path, resolved against the working directory
pub fn registry_path() -> PathBuf {
    PathBuf::from(REGISTRY_FILE)
}

/// Default tracing filter when RUST_LOG is not set
pub fn default_log_filter() -> &'static str {
    "info"
}
