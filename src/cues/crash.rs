//! Crash cue.
//!
//! A burst from the LFSR noise channel, twice as long as the tonal cues,
//! with a slower decay. White-ish noise plus a falling envelope is the
//! classic console explosion.

use crate::error::Result;
use crate::synth::envelope::{self, EnvelopeParams};
use crate::synth::waveform;
use crate::SoundBuffer;

/// Build the crash sound.
pub fn crash() -> Result<SoundBuffer> {
    let raw = waveform::noise(0.2)?;
    envelope::shape(
        &raw,
        &EnvelopeParams {
            attack: 0.01,
            decay: 0.1,
            sustain_level: 0.1,
            sustain_duration: 0.1,
            release: 0.1,
        },
    )
}
