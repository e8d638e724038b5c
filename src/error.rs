//! Error types for signal configuration and WAV export.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors raised while configuring a signal or exporting a wave.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Modulation amount outside [0, 1].
    #[error("modulation amount must be between 0 and 1, got {amount}")]
    InvalidModAmount {
        /// The rejected amount.
        amount: f64,
    },

    /// Modulation destination index outside {0, 1, 2}.
    #[error("modulation target must be 0 (frequency), 1 (amplitude) or 2 (phase), got {index}")]
    InvalidModTarget {
        /// The rejected index.
        index: usize,
    },

    /// Output file could not be created or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
