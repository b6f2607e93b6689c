//! Audio output stream mixing overlapping typing cues.

use std::sync::{Arc, Mutex};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use log::{error, info};

use super::cue::{load_wav, synthesize_click};
use super::CuePlayer;
use crate::error::AudioError;
use crate::params::CueConfig;

/// Upper bound on simultaneously sounding cues
const MAX_VOICES: usize = 16;

/// One playing instance of the cue sample
struct Voice {
    pos: usize,
    gain: f32,
}

/// Shared between `play` and the audio callback
struct Mixer {
    sample: Arc<[f32]>,
    voices: Vec<Voice>,
}

impl Mixer {
    /// Mix the next frame of every voice and drop finished ones
    fn next_frame(&mut self) -> f32 {
        let sample = &self.sample;
        let mut acc = 0.0;
        for voice in &mut self.voices {
            acc += sample[voice.pos] * voice.gain;
            voice.pos += 1;
        }
        self.voices.retain(|v| v.pos < sample.len());
        acc.clamp(-1.0, 1.0)
    }

    fn start_voice(&mut self, gain: f32) {
        if self.voices.len() >= MAX_VOICES {
            self.voices.remove(0);
        }
        self.voices.push(Voice { pos: 0, gain });
    }
}

/// Audio system playing the typing cue on the default output device
pub struct CueSystem {
    mixer: Arc<Mutex<Mixer>>,

    /// Audio output stream (kept alive)
    _stream: cpal::Stream,
}

impl CueSystem {
    /// Open the default output device and start a (silent) stream
    pub fn new(config: &CueConfig) -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;

        let supported = device
            .default_output_config()
            .map_err(|e| AudioError::Config(e.to_string()))?;
        let sample_rate = supported.sample_rate().0;
        let channels = supported.channels().max(1) as usize;

        info!(
            "Audio: {} @ {}Hz ({} channels)",
            device.name().unwrap_or_else(|_| "Unknown".to_string()),
            sample_rate,
            channels
        );

        let sample: Arc<[f32]> = match &config.wav_path {
            Some(path) => {
                info!("Cue sample: {}", path.display());
                load_wav(path, sample_rate)?.into()
            }
            None => synthesize_click(config, sample_rate).into(),
        };
        if sample.is_empty() {
            return Err(AudioError::EmptySample);
        }

        let mixer = Arc::new(Mutex::new(Mixer {
            sample,
            voices: Vec::new(),
        }));
        let mixer_cb = Arc::clone(&mixer);

        let stream = device
            .build_output_stream(
                &supported.into(),
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let Ok(mut mixer) = mixer_cb.lock() else {
                        data.fill(0.0);
                        return;
                    };
                    for frame in data.chunks_mut(channels) {
                        let value = mixer.next_frame();
                        frame.fill(value);
                    }
                },
                |err| error!("Audio stream error: {}", err),
                None,
            )
            .map_err(|e| AudioError::Stream(e.to_string()))?;

        stream
            .play()
            .map_err(|e| AudioError::Stream(e.to_string()))?;

        Ok(Self {
            mixer,
            _stream: stream,
        })
    }
}

impl CuePlayer for CueSystem {
    fn play(&self, volume: f32) -> Result<(), AudioError> {
        let mut mixer = self.mixer.lock().map_err(|_| AudioError::MixerPoisoned)?;
        mixer.start_voice(volume);
        Ok(())
    }
}
