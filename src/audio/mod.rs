//! Fire-and-forget typing cue playback.
//!
//! The reveal scheduler only sees the [`CuePlayer`] trait; the cpal-backed
//! [`CueSystem`] is attached by the host, or [`SilentCue`] when muted,
//! headless, or without an output device.

mod cue;
mod system;

// Re-export public types
pub use cue::{load_wav, synthesize_click};
pub use system::CueSystem;

use crate::error::AudioError;

/// Fire-and-forget audio cue primitive
pub trait CuePlayer {
    /// Start one cue at `volume` (0.0 - 1.0) without waiting for it to finish
    fn play(&self, volume: f32) -> Result<(), AudioError>;
}

/// Cue player that never makes a sound
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCue;

impl CuePlayer for SilentCue {
    fn play(&self, _volume: f32) -> Result<(), AudioError> {
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use super::CuePlayer;
    use crate::error::AudioError;

    /// Records the volume of every cue played
    #[derive(Clone, Default)]
    pub struct RecordingCue {
        pub played: Arc<Mutex<Vec<f32>>>,
    }

    impl RecordingCue {
        pub fn count(&self) -> usize {
            self.played.lock().unwrap().len()
        }
    }

    impl CuePlayer for RecordingCue {
        fn play(&self, volume: f32) -> Result<(), AudioError> {
            self.played.lock().unwrap().push(volume);
            Ok(())
        }
    }

    /// Fails every cue
    pub struct FailingCue;

    impl CuePlayer for FailingCue {
        fn play(&self, _volume: f32) -> Result<(), AudioError> {
            Err(AudioError::NoOutputDevice)
        }
    }
}
