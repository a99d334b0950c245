//! The injected cue-playback object handed to the game loop.
//!
//! A [`Soundboard`] bundles a read-only [`SoundBank`] with an optional
//! [`AudioOutput`]. It is constructed once and passed to whatever needs
//! to trigger cues; there is no process-wide audio singleton.
//!
//! If the audio device cannot be opened, the board still works: every
//! trigger is a no-op and the rest of the application never notices.
//! Sound is an enhancement, not a dependency.

use crate::io::AudioOutput;
use crate::registry::SoundBank;

/// Registry plus playback sink, with graceful degradation.
pub struct Soundboard {
    bank: SoundBank,
    output: Option<AudioOutput>,
}

impl Soundboard {
    /// Build the default cue bank and try to open the audio device.
    pub fn new() -> Self {
        Self::with_bank(SoundBank::with_default_cues())
    }

    /// Use a caller-supplied bank and try to open the audio device.
    pub fn with_bank(bank: SoundBank) -> Self {
        let output = match AudioOutput::new() {
            Ok(output) => Some(output),
            Err(err) => {
                log::warn!("unable to initialize audio, continuing without sound: {err}");
                None
            }
        };
        Self { bank, output }
    }

    /// A board that never plays anything. Useful for headless hosts and
    /// tests that only care about trigger semantics.
    pub fn silent(bank: SoundBank) -> Self {
        Self { bank, output: None }
    }

    /// Trigger a cue by name.
    ///
    /// Returns true if a playback was actually started. An unknown name
    /// or unavailable audio is a silent no-op.
    pub fn trigger(&mut self, name: &str) -> bool {
        let Some(cue) = self.bank.get(name) else {
            log::debug!("no cue named '{name}'");
            return false;
        };
        let Some(output) = &mut self.output else {
            return false;
        };
        output.play(&cue.buffer, cue.volume);
        true
    }

    /// Set the master volume in [0, 1].
    pub fn set_master_volume(&mut self, volume: f32) {
        if let Some(output) = &mut self.output {
            output.set_master_volume(volume);
        }
    }

    /// The underlying cue bank.
    pub fn bank(&self) -> &SoundBank {
        &self.bank
    }

    /// Whether an audio device is actually driving playback.
    pub fn is_audible(&self) -> bool {
        self.output.is_some()
    }
}

impl Default for Soundboard {
    fn default() -> Self {
        Self::new()
    }
}
