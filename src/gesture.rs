//! Shake detection from accelerometer samples.

use std::time::Duration;

use glam::Vec3;
use log::debug;

use crate::params::ShakeParams;

/// Debounced threshold detector on acceleration magnitude
#[derive(Debug, Clone)]
pub struct ShakeDetector {
    params: ShakeParams,
    last_shake: Option<Duration>,
}

impl ShakeDetector {
    pub fn new(params: ShakeParams) -> Self {
        Self {
            params,
            last_shake: None,
        }
    }

    /// Feed one sample (m/s²) taken at `now`; true when it counts as a new shake
    pub fn observe(&mut self, acceleration: Vec3, now: Duration) -> bool {
        let magnitude = acceleration.length();
        if magnitude <= self.params.threshold {
            return false;
        }

        let debounce = Duration::from_millis(self.params.debounce_ms);
        let ready = match self.last_shake {
            Some(last) => now.saturating_sub(last) > debounce,
            None => true,
        };
        if ready {
            debug!("shake detected ({:.1} m/s²)", magnitude);
            self.last_shake = Some(now);
        }
        ready
    }
}

impl Default for ShakeDetector {
    fn default() -> Self {
        Self::new(ShakeParams::default())
    }
}
