//! Typing cue waveforms: synthesized click or a WAV sample.

use std::f32::consts::PI;
use std::path::Path;

use crate::error::AudioError;
use crate::params::CueConfig;

/// Short decaying sine click at `sample_rate`
pub fn synthesize_click(config: &CueConfig, sample_rate: u32) -> Vec<f32> {
    let config = CueConfig {
        sample_rate_hz: sample_rate,
        ..config.clone()
    };
    let rate = sample_rate as f32;
    (0..config.length_samples())
        .map(|i| {
            let t = i as f32 / rate;
            let envelope = (-config.decay_per_s * t).exp();
            (2.0 * PI * config.frequency_hz * t).sin() * envelope
        })
        .collect()
}

/// Load a WAV file as mono f32 samples resampled to `sample_rate`
pub fn load_wav(path: &Path, sample_rate: u32) -> Result<Vec<f32>, AudioError> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let full_scale = (1_i64 << (spec.bits_per_sample.saturating_sub(1))) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / full_scale))
                .collect::<Result<_, _>>()?
        }
    };

    let mono = mixdown(&interleaved, spec.channels.max(1) as usize);
    if mono.is_empty() {
        return Err(AudioError::EmptySample);
    }
    Ok(resample(&mono, spec.sample_rate, sample_rate))
}

/// Average interleaved channels into one
fn mixdown(interleaved: &[f32], channels: usize) -> Vec<f32> {
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

/// Linear-interpolation resampler
fn resample(samples: &[f32], from_hz: u32, to_hz: u32) -> Vec<f32> {
    if from_hz == to_hz || from_hz == 0 || samples.len() < 2 {
        return samples.to_vec();
    }
    let ratio = from_hz as f64 / to_hz as f64;
    let out_len = ((samples.len() - 1) as f64 / ratio).floor() as usize + 1;
    (0..out_len)
        .map(|i| {
            let pos = i as f64 * ratio;
            let idx = pos.floor() as usize;
            let frac = (pos - idx as f64) as f32;
            let a = samples[idx];
            let b = samples.get(idx + 1).copied().unwrap_or(a);
            a + (b - a) * frac
        })
        .collect()
}
