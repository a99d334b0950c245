//! Lock-free sound-effect mixer.
//!
//! The mixer keeps a small pool of active playbacks and sums them into
//! each output block. Buffers arrive as `Arc`-backed [`SoundBuffer`]s, so
//! starting a playback is a pointer clone, not a copy, and the same cue
//! can overlap itself any number of times.

use rtrb::{Consumer, Producer, RingBuffer};

use crate::synth::buffer::SoundBuffer;

/// Maximum concurrently sounding playbacks. When the pool is full the
/// oldest playback is stolen, which for short effect cues is inaudible.
pub const MAX_VOICES: usize = 16;

/// Commands accepted by the mixer.
pub enum MixerCommand {
    /// Start playing a buffer at the given volume.
    Play { buffer: SoundBuffer, volume: f32 },
    /// Scale every playback by a master volume in [0, 1].
    SetMasterVolume(f32),
}

/// One in-flight playback.
struct Playback {
    buffer: SoundBuffer,
    volume: f32,
    position: usize,
    age: u64,
}

/// Audio-thread side: drains commands and renders mixed blocks.
pub struct Mixer {
    rx: Consumer<MixerCommand>,
    active: Vec<Playback>,
    master_volume: f32,
    started: u64,
}

/// Trigger side: non-blocking, fire-and-forget command producer.
pub struct MixerHandle {
    tx: Producer<MixerCommand>,
}

/// Create a connected handle/mixer pair with the given queue capacity.
pub fn mixer_pair(capacity: usize) -> (MixerHandle, Mixer) {
    let (tx, rx) = RingBuffer::new(capacity);
    (
        MixerHandle { tx },
        Mixer {
            rx,
            active: Vec::with_capacity(MAX_VOICES),
            master_volume: 1.0,
            started: 0,
        },
    )
}

impl MixerHandle {
    /// Queue a buffer for playback. Never blocks; if the queue is full
    /// the sound is dropped rather than stalling the caller.
    pub fn play(&mut self, buffer: &SoundBuffer, volume: f32) {
        if buffer.is_empty() {
            return;
        }
        let cmd = MixerCommand::Play {
            buffer: buffer.clone(),
            volume: volume.clamp(0.0, 1.0),
        };
        if self.tx.push(cmd).is_err() {
            log::debug!("mixer command queue full, dropping playback");
        }
    }

    /// Queue a master volume change.
    pub fn set_master_volume(&mut self, volume: f32) {
        let cmd = MixerCommand::SetMasterVolume(volume.clamp(0.0, 1.0));
        if self.tx.push(cmd).is_err() {
            log::debug!("mixer command queue full, dropping master volume change");
        }
    }
}

impl Mixer {
    /// Render one block of mixed mono output.
    ///
    /// Drains pending commands first, then sums every active playback
    /// into `out` (i16 converted to f32 full scale), clamps to [-1, 1],
    /// and retires playbacks that reached their end.
    pub fn render_block(&mut self, out: &mut [f32]) {
        while let Ok(cmd) = self.rx.pop() {
            match cmd {
                MixerCommand::Play { buffer, volume } => self.start(buffer, volume),
                MixerCommand::SetMasterVolume(v) => self.master_volume = v,
            }
        }

        out.fill(0.0);
        for playback in &mut self.active {
            let gain = playback.volume * self.master_volume;
            let samples = playback.buffer.samples();
            let remaining = &samples[playback.position..];
            let frames = remaining.len().min(out.len());
            for (o, &s) in out[..frames].iter_mut().zip(remaining) {
                *o += s as f32 / 32_768.0 * gain;
            }
            playback.position += frames;
        }
        self.active.retain(|p| p.position < p.buffer.len());

        // Hard clip; overlapping full-scale cues can exceed unity.
        for s in out.iter_mut() {
            *s = s.clamp(-1.0, 1.0);
        }
    }

    fn start(&mut self, buffer: SoundBuffer, volume: f32) {
        if self.active.len() >= MAX_VOICES {
            if let Some(oldest) = self
                .active
                .iter()
                .enumerate()
                .min_by_key(|(_, p)| p.age)
                .map(|(idx, _)| idx)
            {
                self.active.swap_remove(oldest);
            }
        }
        self.active.push(Playback {
            buffer,
            volume,
            position: 0,
            age: self.started,
        });
        self.started += 1;
    }

    /// Number of currently sounding playbacks.
    pub fn active_voices(&self) -> usize {
        self.active.len()
    }
}
