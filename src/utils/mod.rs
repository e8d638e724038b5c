//! Utility modules for buffer math and logging.

pub mod logging;
pub mod math;

pub use logging::init_logger;
