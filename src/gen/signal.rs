//! Parametric signals with frequency, amplitude and phase modulation.
//!
//! A `Signal` describes a periodic waveform by its base parameters plus any
//! number of attached modulators. Evaluation is buffer-oriented: every
//! per-sample quantity is computed over the whole time base at once, and is
//! side-effect free, so repeated evaluation of the same time base always
//! produces the same samples.

use std::f64::consts::TAU;
use std::rc::Rc;

use log::debug;

use crate::error::{SynthError, SynthResult};
use crate::gen::waveform::Waveform;
use crate::utils::math::{hz_from_semitone, normalize, semitone_from_hz, sign, unbias};
use crate::wave::Wave;

/// Audible range, applied to frequencies after modulation.
const MIN_FREQ_HZ: f64 = 20.0;
const MAX_FREQ_HZ: f64 = 20_000.0;

/// Modulation destination on a carrier signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModTarget {
    Frequency,
    Amplitude,
    Phase,
}

impl ModTarget {
    /// Maps the historical 0/1/2 destination indices.
    pub fn from_index(index: usize) -> SynthResult<ModTarget> {
        match index {
            0 => Ok(ModTarget::Frequency),
            1 => Ok(ModTarget::Amplitude),
            2 => Ok(ModTarget::Phase),
            _ => Err(SynthError::InvalidModTarget { index }),
        }
    }
}

/// A modulation source attached to one destination of a carrier.
///
/// The source is shared, not owned: the same signal may modulate several
/// carriers at once.
#[derive(Debug, Clone)]
pub struct Modulator {
    pub source: Rc<Signal>,
    /// Modulation amount in [0, 1], validated at attach time.
    pub amount: f64,
}

/// A parametric description of a periodic waveform plus its modulation inputs.
///
/// Mutated only by attaching modulators; evaluation never changes it.
#[derive(Debug)]
pub struct Signal {
    pub waveform: Waveform,
    /// Base frequency in Hz.
    pub frequency: f64,
    /// Base amplitude. Nominally 0-1 but not clamped at the base level;
    /// clamping happens after modulation (see `amplitudes`).
    pub amplitude: f64,
    /// Base phase offset in radians.
    pub offset: f64,
    mods: [Vec<Modulator>; 3],
}

impl Signal {
    pub fn new(waveform: Waveform, frequency: f64, amplitude: f64, offset: f64) -> Self {
        Self {
            waveform,
            frequency,
            amplitude,
            offset,
            mods: [Vec::new(), Vec::new(), Vec::new()],
        }
    }

    pub fn sine(frequency: f64, amplitude: f64, offset: f64) -> Self {
        Self::new(Waveform::Sine, frequency, amplitude, offset)
    }

    pub fn square(frequency: f64, amplitude: f64, offset: f64) -> Self {
        Self::new(Waveform::Square, frequency, amplitude, offset)
    }

    pub fn saw(frequency: f64, amplitude: f64, offset: f64) -> Self {
        Self::new(Waveform::Saw, frequency, amplitude, offset)
    }

    pub fn triangle(frequency: f64, amplitude: f64, offset: f64) -> Self {
        Self::new(Waveform::Triangle, frequency, amplitude, offset)
    }

    /// Attaches `source` as a modulator of `target`, scaled by `amount`.
    ///
    /// `amount` must be in [0, 1]; anything else is rejected and the
    /// modulator lists stay untouched. There is no upper bound on how many
    /// modulators a destination can carry.
    pub fn add_modulator(
        &mut self,
        target: ModTarget,
        source: Rc<Signal>,
        amount: f64,
    ) -> SynthResult<()> {
        if !(0.0..=1.0).contains(&amount) {
            return Err(SynthError::InvalidModAmount { amount });
        }
        self.mods[target as usize].push(Modulator { source, amount });
        Ok(())
    }

    /// Per-sample frequencies in Hz after modulation.
    ///
    /// Modulator outputs are scaled to a 12-semitone range and accumulated in
    /// semitone space, so a fixed amount gives the same musical deviation at
    /// any base pitch. The accumulated buffer (seeded base value included) is
    /// averaged over the modulator count, converted back to Hz, and clamped
    /// to the audible range.
    pub fn frequencies(&self, ts: &[f64]) -> Vec<f64> {
        let mods = &self.mods[ModTarget::Frequency as usize];
        if mods.is_empty() {
            return vec![self.frequency; ts.len()];
        }

        let mut semis = vec![semitone_from_hz(self.frequency); ts.len()];
        for m in mods {
            for (acc, s) in semis.iter_mut().zip(m.source.evaluate(ts)) {
                *acc += s * m.amount * 12.0;
            }
        }
        let count = mods.len() as f64;
        semis
            .into_iter()
            .map(|semi| hz_from_semitone(semi / count).clamp(MIN_FREQ_HZ, MAX_FREQ_HZ))
            .collect()
    }

    /// Per-sample amplitudes after modulation, clamped to [0, 1].
    pub fn amplitudes(&self, ts: &[f64]) -> Vec<f64> {
        let mods = &self.mods[ModTarget::Amplitude as usize];
        if mods.is_empty() {
            return vec![self.amplitude; ts.len()];
        }

        let mut amps = vec![self.amplitude; ts.len()];
        for m in mods {
            for (acc, s) in amps.iter_mut().zip(m.source.evaluate(ts)) {
                *acc += s * m.amount;
            }
        }
        let count = mods.len() as f64;
        amps.into_iter()
            .map(|amp| (amp / count).clamp(0.0, 1.0))
            .collect()
    }

    /// Per-sample phase offsets in radians after modulation, clamped to
    /// [0, 2π].
    pub fn phases(&self, ts: &[f64]) -> Vec<f64> {
        let mods = &self.mods[ModTarget::Phase as usize];
        if mods.is_empty() {
            return vec![self.offset; ts.len()];
        }

        let mut phases = vec![self.offset; ts.len()];
        for m in mods {
            for (acc, s) in phases.iter_mut().zip(m.source.evaluate(ts)) {
                *acc += s * m.amount * TAU;
            }
        }
        let count = mods.len() as f64;
        phases
            .into_iter()
            .map(|phase| (phase / count).clamp(0.0, TAU))
            .collect()
    }

    /// Evaluates the signal's shape over the time base.
    ///
    /// Pure function of the time base and the modulated parameter buffers;
    /// no state survives between calls.
    pub fn evaluate(&self, ts: &[f64]) -> Vec<f64> {
        match self.waveform {
            Waveform::Sine => self.eval_sine(ts),
            Waveform::Square => self.eval_square(ts),
            Waveform::Saw => self.eval_saw(ts),
            Waveform::Triangle => self.eval_triangle(ts),
        }
    }

    fn eval_sine(&self, ts: &[f64]) -> Vec<f64> {
        let freqs = self.frequencies(ts);
        let amps = self.amplitudes(ts);
        let phases = self.phases(ts);
        ts.iter()
            .enumerate()
            .map(|(i, t)| amps[i] * (TAU * freqs[i] * t + phases[i]).cos())
            .collect()
    }

    fn eval_triangle(&self, ts: &[f64]) -> Vec<f64> {
        // Folded absolute-value ramp, recentered and rescaled to unit peak.
        let folded: Vec<f64> = self
            .cycles(ts)
            .into_iter()
            .map(|c| (c - 0.5).abs())
            .collect();
        let shaped = normalize(&unbias(&folded), 1.0);
        shaped
            .into_iter()
            .zip(self.amplitudes(ts))
            .map(|(s, amp)| s * amp)
            .collect()
    }

    fn eval_saw(&self, ts: &[f64]) -> Vec<f64> {
        let shaped = normalize(&unbias(&self.cycles(ts)), 1.0);
        shaped
            .into_iter()
            .zip(self.amplitudes(ts))
            .map(|(s, amp)| s * amp)
            .collect()
    }

    fn eval_square(&self, ts: &[f64]) -> Vec<f64> {
        // The sign of the zero-mean ramp gives an ideal 50%-duty edge.
        unbias(&self.cycles(ts))
            .into_iter()
            .zip(self.amplitudes(ts))
            .map(|(s, amp)| amp * sign(s))
            .collect()
    }

    /// Position within the repeating [0, 1) cycle for every sample.
    fn cycles(&self, ts: &[f64]) -> Vec<f64> {
        let freqs = self.frequencies(ts);
        let phases = self.phases(ts);
        ts.iter()
            .enumerate()
            .map(|(i, t)| (freqs[i] * t + phases[i] / TAU).fract())
            .collect()
    }

    /// Renders the signal into a concrete sample buffer.
    pub fn make_wave(&self, sample_rate: u32, duration: f64) -> Wave {
        let ts = time_base(sample_rate, duration);
        debug!("rendering {} samples at {} Hz", ts.len(), sample_rate);
        let samples = self.evaluate(&ts);
        Wave::new(samples, sample_rate, duration)
    }
}

/// Sample timestamps in seconds: `i / sample_rate` for every index in
/// `0..round(sample_rate × duration)`.
pub fn time_base(sample_rate: u32, duration: f64) -> Vec<f64> {
    let len = (sample_rate as f64 * duration).round() as usize;
    (0..len).map(|i| i as f64 / sample_rate as f64).collect()
}
