//! Pickup cue.
//!
//! A high triangle tone at 880 Hz. The triangle channel's soft harmonics
//! make it ring like a small bell rather than buzz.

use crate::error::Result;
use crate::synth::envelope::{self, EnvelopeParams};
use crate::synth::waveform;
use crate::SoundBuffer;

/// Build the pickup sound.
pub fn collect() -> Result<SoundBuffer> {
    let raw = waveform::triangle_wave(880.0, 0.1)?;
    envelope::shape(
        &raw,
        &EnvelopeParams {
            attack: 0.01,
            decay: 0.05,
            sustain_level: 0.05,
            sustain_duration: 0.05,
            release: 0.05,
        },
    )
}
