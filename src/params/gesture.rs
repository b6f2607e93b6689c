//! Accelerometer gesture thresholds.

/// Gesture detection thresholds
#[derive(Debug, Clone)]
pub struct ShakeParams {
    /// Acceleration magnitude that counts as a shake (m/s²)
    pub threshold: f32,

    /// Minimum time between reported shakes (milliseconds)
    pub debounce_ms: u64,
}

impl Default for ShakeParams {
    fn default() -> Self {
        Self {
            threshold: 15.0,
            debounce_ms: 1000,
        }
    }
}
