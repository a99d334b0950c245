//! Jump cue.
//!
//! A thin 12.5% duty pulse at 660 Hz. The narrow duty cycle gives the
//! bright, chirpy character of a console jump blip; the short decay into
//! a low sustain keeps it from overstaying the hop.

use crate::error::Result;
use crate::synth::envelope::{self, EnvelopeParams};
use crate::synth::waveform;
use crate::SoundBuffer;

/// Build the jump sound.
pub fn jump() -> Result<SoundBuffer> {
    let raw = waveform::square_wave(660.0, 0.1, 0.125)?;
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
