//! Typing cue configuration.

use std::path::PathBuf;

/// Typing cue waveform configuration
#[derive(Debug, Clone)]
pub struct CueConfig {
    /// Sample rate of the synthesized cue (Hz)
    /// Replaced by the device rate once a stream is open
    pub sample_rate_hz: u32,

    /// Pitch of the synthesized click (Hz)
    pub frequency_hz: f32,

    /// Length of the synthesized click (milliseconds)
    pub length_ms: u32,

    /// Exponential decay rate of the click envelope (1/s)
    pub decay_per_s: f32,

    /// WAV file to use instead of the synthesized click
    pub wav_path: Option<PathBuf>,
}

impl Default for CueConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 44100,
            frequency_hz: 1800.0,
            length_ms: 35,
            decay_per_s: 140.0, // ~-40dB by the end of the click
            wav_path: None,
        }
    }
}

impl CueConfig {
    /// Number of samples in the synthesized click
    pub fn length_samples(&self) -> usize {
        (self.sample_rate_hz as u64 * self.length_ms as u64 / 1000) as usize
    }
}
