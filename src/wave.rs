//! A rendered sample buffer and its file export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::SynthResult;
use crate::wav::{encode_pcm16, write_wav, WavFormat};

/// A concrete, time-sampled realization of a signal over a fixed duration
/// and sample rate.
///
/// Owns its samples; produced by [`crate::Signal::make_wave`] and immutable
/// afterwards. Length is `round(sample_rate × duration)`.
#[derive(Debug)]
pub struct Wave {
    samples: Vec<f64>,
    sample_rate: u32,
    duration: f64,
}

impl Wave {
    pub(crate) fn new(samples: Vec<f64>, sample_rate: u32, duration: f64) -> Self {
        Self {
            samples,
            sample_rate,
            duration,
        }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Encodes the samples as 16-bit PCM and writes a mono WAV file.
    ///
    /// Fails if the path cannot be created or written. A failure mid-write
    /// leaves whatever was already flushed; callers wanting atomicity should
    /// write to a scratch path and rename on success.
    pub fn to_wav(&self, path: impl AsRef<Path>) -> SynthResult<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        let format = WavFormat::mono16(self.sample_rate);
        let pcm = encode_pcm16(&self.samples);
        write_wav(&mut out, &format, &pcm)?;
        out.flush()?;
        debug!("wrote {} samples to {}", self.samples.len(), path.display());
        Ok(())
    }
}
