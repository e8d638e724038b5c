pub mod signal;
pub mod waveform;

pub use self::signal::*;
pub use self::waveform::*;
