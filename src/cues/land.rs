//! Landing cue.
//!
//! The jump pulse an octave down at symmetric 50% duty: same shape,
//! hollower and heavier, which reads as a thud instead of a chirp.

use crate::error::Result;
use crate::synth::envelope::{self, EnvelopeParams};
use crate::synth::waveform;
use crate::SoundBuffer;

/// Build the landing sound.
pub fn land() -> Result<SoundBuffer> {
    let raw = waveform::square_wave(330.0, 0.1, 0.5)?;
    envelope::shape(
        &raw,
        &EnvelopeParams {
            attack: 0.01,
            decay: 0.05,
            sustain_level: 0.1,
            sustain_duration: 0.1,
            release: 0.05,
        },
    )
}
