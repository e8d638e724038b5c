#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Saw,
    Triangle,
}

impl Waveform {
    /// Parses a shape name as spelled on the command line.
    pub fn from_name(name: &str) -> Option<Waveform> {
        match name {
            "sine" => Some(Waveform::Sine),
            "square" => Some(Waveform::Square),
            "saw" => Some(Waveform::Saw),
            "triangle" => Some(Waveform::Triangle),
            _ => None,
        }
    }
}
