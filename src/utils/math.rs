//! Buffer math for waveform shaping and pitch conversion.

/// Tuning reference: A4 in Hz.
pub const A4_HZ: f64 = 440.0;

/// Semitone index of A4, counted up from C0.
pub const A4_SEMITONE: f64 = 57.0;

/// Subtracts the arithmetic mean from every sample so the result is zero-mean.
///
/// Folding a phase ramp into a triangle or saw shape leaves the buffer
/// sitting above zero; this recenters it.
pub fn unbias(samples: &[f64]) -> Vec<f64> {
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    samples.iter().map(|s| s - mean).collect()
}

/// Scales the buffer uniformly so the larger of |max| and |min| lands on
/// `target`.
///
/// An all-zero buffer divides by zero and comes back as NaN samples; callers
/// that can produce silence have to check for that themselves.
pub fn normalize(samples: &[f64], target: f64) -> Vec<f64> {
    let peak = samples.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()));
    samples.iter().map(|s| s * target / peak).collect()
}

/// -1, 0 or +1.
///
/// `f64::signum` maps 0.0 to 1.0, which would skew a square wave's duty
/// cycle, so the zero case is explicit here.
pub fn sign(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Semitone offset from C0 for a frequency in Hz (equal-tempered 12-tone).
pub fn semitone_from_hz(hz: f64) -> f64 {
    A4_SEMITONE + (hz / A4_HZ).log2() * 12.0
}

/// Frequency in Hz for a semitone offset from C0.
pub fn hz_from_semitone(semi: f64) -> f64 {
    A4_HZ * 2.0_f64.powf((semi - A4_SEMITONE) / 12.0)
}
