//! Raw waveform generation for the three console channels.
//!
//! Each generator produces a fully-populated [`SoundBuffer`] of exactly
//! `round(sample_rate * duration)` samples. All three run at full 16-bit
//! amplitude; loudness shaping is the envelope stage's job.
//!
//! Waveform character:
//!
//! - **Pulse (square):** two-level waveform, `+A` for the first
//!   `duty_cycle` fraction of each period, `-A` for the rest. Duty 0.5 is
//!   the hollow symmetric square; duty near 0 or 1 gives thin, reedy
//!   pulses with a brighter harmonic spread.
//! - **Triangle:** piecewise-linear ramp folded back into `[-1, 1]` each
//!   period. Much weaker overtones than the pulse, so it reads as soft
//!   and flute-like.
//! - **Noise:** a 15-bit linear-feedback shift register clocked once per
//!   sample, the same construction as the console noise channel this
//!   emulates. Seed-fixed, so two calls with the same duration produce
//!   byte-identical output. That determinism is load-bearing: regression
//!   fixtures compare full buffers.

use crate::error::{Result, SfxError};
use crate::synth::buffer::SoundBuffer;
use crate::{AMPLITUDE, SAMPLE_RATE};

/// LFSR seed for the noise channel. Fixed so noise is reproducible.
const NOISE_SEED: u16 = 1;

fn check_positive(name: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SfxError::invalid_param(name, format!("must be positive, got {value}")));
    }
    Ok(())
}

/// Sample count for a duration, clamped so even a sub-sample duration
/// yields one sample rather than an empty buffer.
fn num_samples(duration: f32) -> usize {
    ((SAMPLE_RATE as f32 * duration).round() as usize).max(1)
}

/// Period in samples for a frequency. Frequencies above Nyquist would
/// round to a zero-length period; clamp to 1 (a buzz at the limit)
/// instead of dividing by zero.
fn period_samples(frequency: f32) -> usize {
    ((SAMPLE_RATE as f32 / frequency).round() as usize).max(1)
}

/// Generate a pulse wave.
///
/// `duty_cycle` is the fraction of each period spent at `+A` and must lie
/// strictly inside `(0, 1)`.
pub fn square_wave(frequency: f32, duration: f32, duty_cycle: f32) -> Result<SoundBuffer> {
    check_positive("frequency", frequency)?;
    check_positive("duration", duration)?;
    if !duty_cycle.is_finite() || duty_cycle <= 0.0 || duty_cycle >= 1.0 {
        return Err(SfxError::invalid_param(
            "duty_cycle",
            format!("must be in (0, 1), got {duty_cycle}"),
        ));
    }

    let period = period_samples(frequency);
    let count = num_samples(duration);
    let mut samples = Vec::with_capacity(count);
    for i in 0..count {
        let phase = (i % period) as f32 / period as f32;
        samples.push(if phase < duty_cycle { AMPLITUDE } else { -AMPLITUDE });
    }
    Ok(samples.into())
}

/// Generate a triangle wave.
pub fn triangle_wave(frequency: f32, duration: f32) -> Result<SoundBuffer> {
    check_positive("frequency", frequency)?;
    check_positive("duration", duration)?;

    let period = period_samples(frequency);
    let count = num_samples(duration);
    let mut samples = Vec::with_capacity(count);
    for i in 0..count {
        // Ramp over [-2, 2), folded back into [-1, 1].
        let mut v = (i % period) as f32 / period as f32 * 4.0 - 2.0;
        if v > 1.0 {
            v = 2.0 - v;
        } else if v < -1.0 {
            v = -2.0 - v;
        }
        samples.push((v * AMPLITUDE as f32) as i16);
    }
    Ok(samples.into())
}

/// Generate pseudo-random noise from a 15-bit LFSR.
///
/// Each sample: feedback = bit0 XOR bit1, shift right, feedback becomes
/// bit 14. Output is `+A` when the feedback bit is set, `-A` otherwise.
pub fn noise(duration: f32) -> Result<SoundBuffer> {
    check_positive("duration", duration)?;

    let mut register: u16 = NOISE_SEED;
    let count = num_samples(duration);
    let mut samples = Vec::with_capacity(count);
    for _ in 0..count {
        let bit = (register ^ (register >> 1)) & 1;
        register = (register >> 1) | (bit << 14);
        samples.push(if bit == 1 { AMPLITUDE } else { -AMPLITUDE });
    }
    Ok(samples.into())
}
