//! Realtime playback plumbing.
//!
//! The trigger side and the audio callback talk through an `rtrb` SPSC
//! ring buffer: [`MixerHandle`] pushes commands without ever blocking,
//! and the [`Mixer`] drains them at the top of each rendered block.
//! [`AudioOutput`] owns the cpal stream that drives the mixer.

pub mod mixer;
pub mod output;

pub use mixer::{mixer_pair, Mixer, MixerCommand, MixerHandle};
pub use output::AudioOutput;

/// Largest block the output stream renders at once.
pub const MAX_BLOCK_SIZE: usize = 2048;

/// Capacity of the command queue between triggers and the audio thread.
pub const COMMAND_QUEUE_SIZE: usize = 64;
