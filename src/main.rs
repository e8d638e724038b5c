use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use log::info;

use tonegen::utils::init_logger;
use tonegen::{ModTarget, Signal, Waveform};

/// Render a periodic waveform to a WAV file.
#[derive(Parser)]
#[command(name = "tonegen", version)]
struct Args {
    /// Base frequency in Hz
    frequency: u32,

    /// Peak amplitude, nominally 0.0 - 1.0
    amplitude: f64,

    /// Phase offset in radians
    offset: f64,

    /// Waveform shape: sine, square, saw or triangle
    #[arg(long, default_value = "sine")]
    shape: String,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 44100)]
    rate: u32,

    /// Duration in seconds
    #[arg(long, default_value_t = 1.0)]
    duration: f64,

    /// Output path
    #[arg(short, long, default_value = "out.wav")]
    output: PathBuf,

    /// Attach a unit-amplitude sine frequency modulator at this rate in Hz
    #[arg(long)]
    vibrato: Option<f64>,

    /// Modulation amount for --vibrato, 0.0 - 1.0
    #[arg(long, default_value_t = 1.0)]
    vibrato_amount: f64,
}

fn main() -> anyhow::Result<()> {
    init_logger();
    let args = Args::parse();

    let shape = Waveform::from_name(&args.shape)
        .ok_or_else(|| anyhow::anyhow!("unknown shape '{}'", args.shape))?;

    let mut carrier = Signal::new(shape, args.frequency as f64, args.amplitude, args.offset);
    if let Some(rate) = args.vibrato {
        let lfo = Rc::new(Signal::sine(rate, 1.0, 0.0));
        carrier.add_modulator(ModTarget::Frequency, lfo, args.vibrato_amount)?;
    }

    let wave = carrier.make_wave(args.rate, args.duration);
    wave.to_wav(&args.output)?;

    info!(
        "{} Hz {} wave, {:.2}s at {} Hz -> {}",
        args.frequency,
        args.shape,
        args.duration,
        args.rate,
        args.output.display()
    );
    Ok(())
}
