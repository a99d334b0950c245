//! cpal output stream hosting the mixer.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use crate::error::{Result, SfxError};
use crate::io::mixer::{mixer_pair, Mixer, MixerHandle};
use crate::io::{COMMAND_QUEUE_SIZE, MAX_BLOCK_SIZE};
use crate::synth::buffer::SoundBuffer;
use crate::SAMPLE_RATE;

/// Owns the audio device stream and the trigger side of the mixer queue.
///
/// Construction grabs the default output device and starts a stream that
/// renders the mixer on the audio thread. Every failure along the way is
/// reported as [`SfxError::PlaybackUnavailable`] so the host can carry on
/// without sound.
pub struct AudioOutput {
    handle: MixerHandle,
    _stream: cpal::Stream,
}

impl AudioOutput {
    /// Open the default output device and start the mixer stream.
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| SfxError::PlaybackUnavailable("no default output device".into()))?;
        let default_config = device
            .default_output_config()
            .map_err(|e| SfxError::PlaybackUnavailable(e.to_string()))?;

        let channels = default_config.channels() as usize;
        let config = cpal::StreamConfig {
            channels: default_config.channels(),
            sample_rate: cpal::SampleRate(SAMPLE_RATE),
            buffer_size: cpal::BufferSize::Default,
        };

        // Devices that reject 44.1 kHz fall back to their default rate.
        // Effect cues then play slightly pitch-shifted, which beats not
        // playing at all.
        let (handle, stream) = Self::open(&device, &config, channels)
            .or_else(|_| Self::open(&device, &default_config.into(), channels))?;

        stream
            .play()
            .map_err(|e| SfxError::PlaybackUnavailable(e.to_string()))?;

        Ok(Self {
            handle,
            _stream: stream,
        })
    }

    fn open(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        channels: usize,
    ) -> Result<(MixerHandle, cpal::Stream)> {
        let (handle, mixer) = mixer_pair(COMMAND_QUEUE_SIZE);
        let stream = Self::build_stream(device, config, channels, mixer)?;
        Ok((handle, stream))
    }

    fn build_stream(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        channels: usize,
        mut mixer: Mixer,
    ) -> Result<cpal::Stream> {
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        device
            .build_output_stream(
                config,
                move |data: &mut [f32], _| {
                    let total_frames = data.len() / channels;
                    let mut frames_written = 0;

                    while frames_written < total_frames {
                        let frames = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                        let block = &mut render_buf[..frames];
                        mixer.render_block(block);

                        // Mono mix duplicated to every hardware channel.
                        let out_off = frames_written * channels;
                        for (i, &s) in block.iter().enumerate() {
                            for ch in 0..channels {
                                data[out_off + i * channels + ch] = s;
                            }
                        }
                        frames_written += frames;
                    }
                },
                |err| log::error!("audio stream error: {err}"),
                None,
            )
            .map_err(|e| SfxError::PlaybackUnavailable(e.to_string()))
    }

    /// Fire-and-forget playback of a buffer at a volume in [0, 1].
    pub fn play(&mut self, buffer: &SoundBuffer, volume: f32) {
        self.handle.play(buffer, volume);
    }

    /// Set the master volume applied on top of per-sound volumes.
    pub fn set_master_volume(&mut self, volume: f32) {
        self.handle.set_master_volume(volume);
    }
}
