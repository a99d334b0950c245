//! Named sound registry.
//!
//! Maps semantic cue names ("jump", "crash", ...) to finished, enveloped
//! buffers plus a playback volume. Built once at startup and read-only
//! afterwards, so any number of threads can look cues up without locking.
//!
//! Construction never fails as a whole: a cue whose synthesis errors is
//! logged and skipped, and the bank is built from whatever succeeded.
//! A missing sound effect is an annoyance, not a reason to stop a game
//! from starting.

use std::collections::HashMap;

use crate::cues;
use crate::error::Result;
use crate::synth::buffer::SoundBuffer;

/// Declarative description of one cue: a name, a builder, and the volume
/// it should play back at.
pub struct CueSpec {
    pub name: &'static str,
    pub build: fn() -> Result<SoundBuffer>,
    pub volume: f32,
}

/// A finished cue as stored in the bank.
#[derive(Debug, Clone)]
pub struct Cue {
    pub buffer: SoundBuffer,
    pub volume: f32,
}

/// The default cue set of the platformer, all at the game's quiet 0.2
/// mix level.
pub fn default_cues() -> Vec<CueSpec> {
    vec![
        CueSpec { name: "jump", build: cues::jump, volume: 0.2 },
        CueSpec { name: "land", build: cues::land, volume: 0.2 },
        CueSpec { name: "collect", build: cues::collect, volume: 0.2 },
        CueSpec { name: "crash", build: cues::crash, volume: 0.2 },
    ]
}

/// Read-only mapping from cue name to enveloped buffer and volume.
pub struct SoundBank {
    cues: HashMap<&'static str, Cue>,
}

impl SoundBank {
    /// Build a bank from cue specs, keeping every cue that synthesizes
    /// successfully and skipping the rest with a diagnostic.
    pub fn build(specs: Vec<CueSpec>) -> Self {
        let mut cues = HashMap::with_capacity(specs.len());
        for spec in specs {
            match (spec.build)() {
                Ok(buffer) => {
                    cues.insert(
                        spec.name,
                        Cue {
                            buffer,
                            volume: spec.volume.clamp(0.0, 1.0),
                        },
                    );
                }
                Err(err) => {
                    log::warn!("skipping cue '{}': {err}", spec.name);
                }
            }
        }
        Self { cues }
    }

    /// Build the default platformer bank.
    pub fn with_default_cues() -> Self {
        Self::build(default_cues())
    }

    /// Look up a cue by name. Absence is not an error.
    pub fn get(&self, name: &str) -> Option<&Cue> {
        self.cues.get(name)
    }

    /// Number of cues that built successfully.
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Returns true if no cue built successfully.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Iterate over cue names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cues.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SfxError;
    use crate::synth::waveform;

    fn broken_cue() -> Result<SoundBuffer> {
        // frequency = 0 is rejected by the generator
        waveform::square_wave(0.0, 0.1, 0.5)
    }

    #[test]
    fn default_bank_has_all_four_cues() {
        let bank = SoundBank::with_default_cues();
        assert_eq!(bank.len(), 4);
        for name in ["jump", "land", "collect", "crash"] {
            assert!(bank.get(name).is_some(), "missing cue '{name}'");
        }
    }

    #[test]
    fn malformed_cue_is_skipped_not_fatal() {
        let specs = vec![
            CueSpec { name: "jump", build: crate::cues::jump, volume: 0.2 },
            CueSpec { name: "broken", build: broken_cue, volume: 0.2 },
            CueSpec { name: "crash", build: crate::cues::crash, volume: 0.2 },
        ];
        let bank = SoundBank::build(specs);
        assert_eq!(bank.len(), 2);
        assert!(bank.get("jump").is_some());
        assert!(bank.get("crash").is_some());
        assert!(bank.get("broken").is_none());
    }

    #[test]
    fn absent_name_is_none() {
        let bank = SoundBank::with_default_cues();
        assert!(bank.get("teleport").is_none());
    }

    #[test]
    fn volumes_are_clamped_into_unit_range() {
        let specs = vec![CueSpec {
            name: "loud",
            build: crate::cues::jump,
            volume: 3.0,
        }];
        let bank = SoundBank::build(specs);
        assert_eq!(bank.get("loud").unwrap().volume, 1.0);
    }

    #[test]
    fn broken_cue_error_is_invalid_parameter() {
        match broken_cue() {
            Err(SfxError::InvalidParameter { name, .. }) => assert_eq!(name, "frequency"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }
}
