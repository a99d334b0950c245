//! Discrete-time synthesis of retro-console sound effects.
//!
//! Two stages, both pure functions over sample buffers:
//!
//! 1. [`waveform`] generates raw signed 16-bit sample sequences for the
//!    three classic console channels (pulse, triangle, noise).
//! 2. [`envelope`] applies a four-stage ADSR amplitude envelope to an
//!    existing buffer, producing a new buffer of the same length.
//!
//! Neither stage touches any shared state, so independent cues can be
//! synthesized concurrently with no coordination.

pub mod buffer;
pub mod envelope;
pub mod waveform;

pub use buffer::SoundBuffer;
pub use envelope::EnvelopeParams;
