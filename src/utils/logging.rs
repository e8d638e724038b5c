//! Logging setup for the command-line binary.

/// Initialize the logger with INFO level by default.
/// The RUST_LOG environment variable can override the default level.
pub fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
