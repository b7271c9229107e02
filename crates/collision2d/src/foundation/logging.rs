//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Libraries never call this; binaries and tests that want output do.
pub fn init() {
    env_logger::init();
}

/// Initialize logging with a default filter level, still overridable by `RUST_LOG`
pub fn init_with_level(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
