#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SfxError};
use crate::synth::buffer::SoundBuffer;
use crate::SAMPLE_RATE;

/*
ADSR Envelope Shaping
=====================

Applies a four-stage amplitude envelope to a finished buffer:

  Gain
   1.0 ┐   ╱╲
       │  ╱  ╲__________
   S   │ ╱              ╲
   0.0 └╱────────────────╲──────→ Sample index
       Attack Decay Sustain Release

Unlike a realtime envelope generator there is no gate and no state
machine: the whole gain curve is a pure function of the sample index, and
the shaper maps it over the input buffer in one pass. The input is never
mutated; a new buffer of identical length comes back, which keeps cue
construction composable and trivially parallel.

Stage boundaries are measured in samples (`round(seconds * sample_rate)`).
A zero-length stage contributes no samples and its branch is simply never
taken, so no division by a zero stage length can occur. Samples past the
end of the release ramp get gain 0: the envelope decides the shape, and
anything it does not cover is silence.

Sustain level and sustain duration are independent inputs. The level is a
dimensionless gain fraction in [0, 1]; the duration is seconds like the
other three stages. Gain never exceeds 1, so shaping only ever
attenuates.
*/

/// Parameters for the four-stage envelope.
///
/// `attack`, `decay`, `sustain_duration` and `release` are stage lengths
/// in seconds; `sustain_level` is the gain fraction held between decay
/// and release.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeParams {
    pub attack: f32,
    pub decay: f32,
    pub sustain_level: f32,
    pub sustain_duration: f32,
    pub release: f32,
}

impl Default for EnvelopeParams {
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.1,
            sustain_level: 0.7,
            sustain_duration: 0.7,
            release: 0.1,
        }
    }
}

impl EnvelopeParams {
    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("attack", self.attack),
            ("decay", self.decay),
            ("sustain_duration", self.sustain_duration),
            ("release", self.release),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SfxError::invalid_param(
                    name,
                    format!("must be non-negative, got {value}"),
                ));
            }
        }
        if !self.sustain_level.is_finite() || !(0.0..=1.0).contains(&self.sustain_level) {
            return Err(SfxError::invalid_param(
                "sustain_level",
                format!("must be in [0, 1], got {}", self.sustain_level),
            ));
        }
        Ok(())
    }
}

/// Apply an ADSR envelope to `input`, returning a new buffer of the same
/// length. Fails with `InvalidParameter` before allocating anything.
pub fn shape(input: &SoundBuffer, params: &EnvelopeParams) -> Result<SoundBuffer> {
    params.validate()?;

    let attack = stage_samples(params.attack);
    let decay = stage_samples(params.decay);
    let sustain = stage_samples(params.sustain_duration);
    let release = stage_samples(params.release);
    let level = params.sustain_level;

    let mut samples = Vec::with_capacity(input.len());
    for (i, &sample) in input.samples().iter().enumerate() {
        let gain = if i < attack {
            i as f32 / attack as f32
        } else if i < attack + decay {
            1.0 - (1.0 - level) * ((i - attack) as f32 / decay as f32)
        } else if i < attack + decay + sustain {
            level
        } else if i < attack + decay + sustain + release {
            level * (1.0 - (i - (attack + decay + sustain)) as f32 / release as f32)
        } else {
            0.0
        };

        let gain = gain.clamp(0.0, 1.0);
        samples.push((sample as f32 * gain) as i16);
    }
    Ok(samples.into())
}

fn stage_samples(seconds: f32) -> usize {
    (seconds * SAMPLE_RATE as f32).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::waveform::square_wave;
    use crate::AMPLITUDE;

    /// Recover the per-sample gain from a shaped constant-amplitude input.
    fn gains(input: &SoundBuffer, output: &SoundBuffer) -> Vec<f32> {
        input
            .samples()
            .iter()
            .zip(output.samples())
            .map(|(&raw, &shaped)| shaped.abs() as f32 / raw.abs() as f32)
            .collect()
    }

    fn full_scale_input(duration: f32) -> SoundBuffer {
        square_wave(441.0, duration, 0.5).unwrap()
    }

    #[test]
    fn output_length_matches_input() {
        let input = full_scale_input(0.1);
        let shaped = shape(&input, &EnvelopeParams::default()).unwrap();
        assert_eq!(shaped.len(), input.len());
    }

    #[test]
    fn stages_exceeding_buffer_length_do_not_panic() {
        // Stage sample counts sum to far more than the 4410-sample buffer.
        let input = full_scale_input(0.1);
        let params = EnvelopeParams {
            attack: 0.01,
            decay: 0.05,
            sustain_level: 0.1,
            sustain_duration: 0.1,
            release: 0.05,
        };
        let shaped = shape(&input, &params).unwrap();
        assert_eq!(shaped.len(), 4410);
    }

    #[test]
    fn gain_is_monotonic_per_stage() {
        let input = full_scale_input(0.5);
        let params = EnvelopeParams {
            attack: 0.05,
            decay: 0.1,
            sustain_level: 0.6,
            sustain_duration: 0.2,
            release: 0.1,
        };
        let shaped = shape(&input, &params).unwrap();
        let g = gains(&input, &shaped);

        let attack = 2205;
        let decay = 4410;
        let sustain = 8820;
        let release = 4410;

        // Quantizing through i16 costs at most one step of gain resolution.
        let eps = 2.0 / AMPLITUDE as f32;

        for w in g[..attack].windows(2) {
            assert!(w[1] >= w[0] - eps, "attack must be non-decreasing");
        }
        for w in g[attack..attack + decay].windows(2) {
            assert!(w[1] <= w[0] + eps, "decay must be non-increasing");
        }
        for &gain in &g[attack + decay..attack + decay + sustain] {
            assert!((gain - 0.6).abs() < eps, "sustain must hold its level");
        }
        for w in g[attack + decay + sustain..attack + decay + sustain + release].windows(2) {
            assert!(w[1] <= w[0] + eps, "release must be non-increasing");
        }
    }

    #[test]
    fn gain_never_amplifies() {
        let input = full_scale_input(0.2);
        let shaped = shape(&input, &EnvelopeParams::default()).unwrap();
        for (&raw, &out) in input.samples().iter().zip(shaped.samples()) {
            assert!(out.abs() <= raw.abs());
        }
    }

    #[test]
    fn silence_in_silence_out() {
        let input = SoundBuffer::from(vec![0i16; 1000]);
        let shaped = shape(&input, &EnvelopeParams::default()).unwrap();
        assert!(shaped.samples().iter().all(|&s| s == 0));
    }

    #[test]
    fn zero_length_stages_are_skipped() {
        let input = full_scale_input(0.1);
        let params = EnvelopeParams {
            attack: 0.0,
            decay: 0.0,
            sustain_level: 1.0,
            sustain_duration: 0.0,
            release: 0.0,
        };
        // Every stage empty: all samples fall past the envelope, gain 0.
        let shaped = shape(&input, &params).unwrap();
        assert!(shaped.samples().iter().all(|&s| s == 0));
    }

    #[test]
    fn trailing_samples_past_release_are_silent() {
        let input = full_scale_input(0.1);
        let params = EnvelopeParams {
            attack: 0.01,
            decay: 0.01,
            sustain_level: 0.5,
            sustain_duration: 0.01,
            release: 0.01,
        };
        let shaped = shape(&input, &params).unwrap();
        // Stages cover 0.04 s; everything after must be silence.
        let covered = (0.04 * crate::SAMPLE_RATE as f32).round() as usize;
        assert!(shaped.samples()[covered..].iter().all(|&s| s == 0));
    }

    #[test]
    fn malformed_parameters_are_rejected() {
        let input = full_scale_input(0.01);
        let bad_level = EnvelopeParams {
            sustain_level: 1.5,
            ..Default::default()
        };
        assert!(shape(&input, &bad_level).is_err());

        let negative_stage = EnvelopeParams {
            attack: -0.01,
            ..Default::default()
        };
        assert!(shape(&input, &negative_stage).is_err());
    }
}
