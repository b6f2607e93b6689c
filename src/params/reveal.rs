//! Typewriter reveal timing and the fortune texts shown at startup.

use std::time::Duration;

use crate::error::ConfigError;

/// Reveal pacing and cue parameters
#[derive(Debug, Clone, PartialEq)]
pub struct RevealParams {
    /// Wait before emitting a non-space character (milliseconds)
    pub letter_delay_ms: u64,

    /// Wait before emitting a space (milliseconds)
    /// Longer than letters, producing a pause at word boundaries
    pub space_delay_ms: u64,

    /// Typing cue volume (0.0 - 1.0)
    pub cue_volume: f32,

    /// Text revealed at startup while the first fortune is pending
    pub placeholder: String,

    /// Fortune used when no upstream text source is attached
    pub fallback_fortune: String,
}

impl Default for RevealParams {
    fn default() -> Self {
        Self {
            letter_delay_ms: 100,
            space_delay_ms: 500,
            cue_volume: 0.3,
            placeholder: "syncing with transistor chips...".to_string(),
            fallback_fortune: "SHADOWS CONSUME ALL".to_string(),
        }
    }
}

impl RevealParams {
    /// Delay preceding the emission of `ch`
    pub fn delay_for(&self, ch: char) -> Duration {
        if ch == ' ' {
            Duration::from_millis(self.space_delay_ms)
        } else {
            Duration::from_millis(self.letter_delay_ms)
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.letter_delay_ms == 0 {
            return Err(ConfigError::NonPositiveDelay {
                name: "letter",
                value_ms: self.letter_delay_ms,
            });
        }
        if self.space_delay_ms == 0 {
            return Err(ConfigError::NonPositiveDelay {
                name: "space",
                value_ms: self.space_delay_ms,
            });
        }
        if !(0.0..=1.0).contains(&self.cue_volume) {
            return Err(ConfigError::VolumeOutOfRange(self.cue_volume));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_waits_longer() {
        let p = RevealParams::default();
        assert!(p.delay_for(' ') > p.delay_for('A'));
        assert_eq!(p.delay_for('A'), Duration::from_millis(100));
    }

    #[test]
    fn test_validate_volume() {
        let p = RevealParams {
            cue_volume: 1.5,
            ..Default::default()
        };
        assert_eq!(p.validate(), Err(ConfigError::VolumeOutOfRange(1.5)));
    }

    #[test]
    fn test_validate_zero_delay() {
        let p = RevealParams {
            space_delay_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            p.validate(),
            Err(ConfigError::NonPositiveDelay { name: "space", .. })
        ));
    }
}
