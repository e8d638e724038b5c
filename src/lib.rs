//! Offline waveform synthesis: periodic signals (sine, square, saw,
//! triangle) with frequency/amplitude/phase modulation, rendered to mono
//! 16-bit PCM WAV files.

pub mod error;
pub mod gen;
pub mod utils;
pub mod wav;
pub mod wave;

pub use error::{SynthError, SynthResult};
pub use gen::signal::{time_base, ModTarget, Modulator, Signal};
pub use gen::waveform::Waveform;
pub use wave::Wave;
