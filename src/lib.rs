pub mod cues; // Pre-built game sound cues (jump, land, collect, crash)
pub mod error;
#[cfg(feature = "playback")]
pub mod io; // Realtime playback: command queue, mixer, cpal stream
pub mod registry;
#[cfg(feature = "playback")]
pub mod soundboard;
pub mod synth; // Waveform generation and envelope shaping

pub use error::{Result, SfxError};
pub use synth::buffer::SoundBuffer;

/// Fixed output sample rate, matching the classic 44.1 kHz console mixer setup.
pub const SAMPLE_RATE: u32 = 44_100;

/// Full-scale 16-bit amplitude used by every generator.
pub const AMPLITUDE: i16 = i16::MAX;
