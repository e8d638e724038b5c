//! 16-bit PCM encoding and WAV container emission.
//!
//! Write-only: the header is emitted field by field, little-endian, exactly
//! 44 bytes for the single-data-chunk mono layout this crate produces. There
//! is no read path.

use std::io::{self, Write};

/// Scale applied when quantizing samples to 16 bits: 2^14, half the
/// theoretical range. Modulated signals can overshoot [-1, 1]; the spare bit
/// keeps moderate overshoot inside the rails.
pub const PCM16_SCALE: f64 = 16_384.0;

/// Header size of a canonical single-data-chunk WAV file.
pub const HEADER_LEN: usize = 44;

/// Container format parameters.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Mono 16-bit format at the given rate — the only format this crate
    /// emits.
    pub fn mono16(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Bytes per sample frame.
    fn block_align(&self) -> u16 {
        self.channels * self.bits_per_sample / 8
    }

    /// Bytes per second of audio.
    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Quantizes samples to little-endian signed 16-bit PCM.
///
/// Samples beyond the headroom saturate at the i16 rails; nothing is
/// resampled, dithered or otherwise cleaned up.
pub fn encode_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        let quantized = (sample * PCM16_SCALE) as i16;
        pcm.extend_from_slice(&quantized.to_le_bytes());
    }
    pcm
}

/// Writes the 44-byte header followed by the PCM data.
pub fn write_wav<W: Write>(out: &mut W, format: &WavFormat, pcm: &[u8]) -> io::Result<()> {
    let data_size = pcm.len() as u32;

    // RIFF chunk
    out.write_all(b"RIFF")?;
    out.write_all(&(data_size + 36).to_le_bytes())?; // file size minus the 8-byte RIFF preamble
    out.write_all(b"WAVE")?;

    // fmt chunk
    out.write_all(b"fmt ")?;
    out.write_all(&16u32.to_le_bytes())?; // fmt chunk size for plain PCM
    out.write_all(&1u16.to_le_bytes())?; // audio format: PCM
    out.write_all(&format.channels.to_le_bytes())?;
    out.write_all(&format.sample_rate.to_le_bytes())?;
    out.write_all(&format.byte_rate().to_le_bytes())?;
    out.write_all(&format.block_align().to_le_bytes())?;
    out.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    out.write_all(b"data")?;
    out.write_all(&data_size.to_le_bytes())?;
    out.write_all(pcm)?;

    Ok(())
}
