use std::sync::Arc;

use crate::SAMPLE_RATE;

/// An immutable mono sound buffer: signed 16-bit samples at 44.1 kHz.
///
/// Backed by `Arc<[i16]>`, so cloning is a pointer copy. This is what lets
/// the registry keep a buffer while the mixer plays overlapping instances of
/// it: everyone shares the same samples, nobody can mutate them.
#[derive(Debug, Clone)]
pub struct SoundBuffer {
    samples: Arc<[i16]>,
}

impl SoundBuffer {
    /// Number of samples in the buffer.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The raw sample data.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Playback duration in seconds at the fixed sample rate.
    pub fn duration_secs(&self) -> f32 {
        self.len() as f32 / SAMPLE_RATE as f32
    }
}

impl From<Vec<i16>> for SoundBuffer {
    fn from(samples: Vec<i16>) -> Self {
        Self {
            samples: samples.into(),
        }
    }
}
