//! Radial pattern shape parameters and animation clock rates.

use crate::error::ConfigError;

/// Shape and dithering parameters for the radial pattern
#[derive(Debug, Clone, PartialEq)]
pub struct PatternParams {
    /// Edge length of one quantized block (pixels)
    /// Every pixel in a block receives the same colour
    pub block_size: u32,

    /// Offset compression toward the canvas centre (dimensionless)
    /// < 1.0 pulls distances inward, making the blob larger on screen
    pub radial_scale: f64,

    /// Shape radius while idle (scaled pixels)
    pub idle_radius: f64,

    /// Shape radius while a reveal is in progress (scaled pixels)
    pub active_radius: f64,

    /// Number of lobes in the angular modulation
    pub lobes: f64,

    /// Lobe amplitude (scaled pixels)
    pub shape_amplitude: f64,

    /// Lobe rotation rate (radians per clock unit)
    pub angular_speed: f64,

    /// Noise-driven radius wobble amplitude (scaled pixels)
    pub noise_amplitude: f64,

    /// Noise wobble rate (radians per clock unit)
    pub noise_speed: f64,

    /// Noise sampling frequency (noise units per pixel)
    /// 0.01 = smooth, low-frequency variation
    pub noise_scale: f64,

    /// Intensity jitter from noise, applied as (noise - 0.5) * jitter
    pub noise_jitter: f64,

    /// Colour written where intensity beats the dither threshold (RGBA8)
    pub front_color: [u8; 4],

    /// Colour written everywhere else (RGBA8, fully transparent)
    pub back_color: [u8; 4],
}

impl Default for PatternParams {
    fn default() -> Self {
        Self {
            block_size: 3,
            radial_scale: 0.8,
            idle_radius: 80.0,
            active_radius: 100.0, // Swells while text is being revealed
            lobes: 3.0,
            shape_amplitude: 40.0,
            angular_speed: 0.05,
            noise_amplitude: 30.0,
            noise_speed: 0.1,
            noise_scale: 0.01,
            noise_jitter: 0.3,
            front_color: [255, 1, 1, 255],
            back_color: [0, 0, 0, 0],
        }
    }
}

impl PatternParams {
    /// Base radius for the given reveal state
    pub fn base_radius(&self, active: bool) -> f64 {
        if active {
            self.active_radius
        } else {
            self.idle_radius
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        Ok(())
    }
}

/// Animation clock advance per frame
#[derive(Debug, Clone, PartialEq)]
pub struct ClockParams {
    /// Clock units added per frame while idle (slow drift)
    pub idle_increment: f64,

    /// Clock units added per frame while revealing (fast-forward)
    pub active_increment: f64,
}

impl Default for ClockParams {
    fn default() -> Self {
        Self {
            idle_increment: 0.5,
            active_increment: 4.0,
        }
    }
}

impl ClockParams {
    pub fn increment(&self, active: bool) -> f64 {
        if active {
            self.active_increment
        } else {
            self.idle_increment
        }
    }

    /// Both increments must be finite and non-negative so the clock never runs backwards
    pub fn validate(&self) -> Result<(), ConfigError> {
        for inc in [self.idle_increment, self.active_increment] {
            if !inc.is_finite() || inc < 0.0 {
                return Err(ConfigError::InvalidIncrement(inc));
            }
        }
        Ok(())
    }
}
