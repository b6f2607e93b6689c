//! Error types for the oracle display.

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Invalid parameter values, reported by the `validate()` methods in [`crate::params`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Block size of zero would divide the raster into nothing.
    #[error("block size must be > 0")]
    ZeroBlockSize,

    /// A reveal delay of zero or less.
    #[error("{name} delay must be > 0 ms, got {value_ms}")]
    NonPositiveDelay { name: &'static str, value_ms: u64 },

    /// Volume outside of [0, 1].
    #[error("cue volume must be within [0, 1], got {0}")]
    VolumeOutOfRange(f32),

    /// Raster with zero width or height.
    #[error("display size must be non-zero, got {width}x{height}")]
    EmptyDisplay { width: u32, height: u32 },

    /// Window magnification of zero.
    #[error("window scale must be >= 1")]
    ZeroWindowScale,

    /// Scaled window size does not fit in `u32`.
    #[error("window size {width}x{height} at scale {scale} is too large")]
    WindowTooLarge { width: u32, height: u32, scale: u32 },

    /// Clock increments must keep the clock moving forward.
    #[error("clock increment must be finite and >= 0, got {0}")]
    InvalidIncrement(f64),
}

/// Audio cue failures. Never fatal for a reveal.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device found")]
    NoOutputDevice,

    #[error("failed to query audio config: {0}")]
    Config(String),

    #[error("failed to build audio stream: {0}")]
    Stream(String),

    #[error("failed to read cue sample: {0}")]
    Sample(#[from] hound::Error),

    #[error("cue sample is empty")]
    EmptySample,

    #[error("audio mixer lock poisoned")]
    MixerPoisoned,
}

/// Top-level errors surfaced by the display.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("audio error: {0}")]
    Audio(#[from] AudioError),

    #[error("render error: {0}")]
    Render(String),

    #[error("failed to save frame {frame}: {source}")]
    SaveFrame {
        frame: usize,
        #[source]
        source: image::ImageError,
    },
}
