//! Display surface and headless snapshot configuration.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Display surface configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Raster width (pixels)
    pub width: u32,

    /// Raster height (pixels)
    pub height: u32,

    /// Integer window magnification (window pixels per raster pixel)
    pub window_scale: u32,

    /// Opaque colour beneath the pattern (RGB8)
    pub background_color: [u8; 3],

    /// Overlay text colour (RGB8)
    pub text_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 240,
            height: 282,
            window_scale: 2,
            background_color: [0, 0, 0],
            text_color: [255, 255, 255],
        }
    }
}

impl DisplayConfig {
    /// Window size in physical pixels, saturating at `u32::MAX`
    pub fn window_size(&self) -> (u32, u32) {
        (
            self.width.saturating_mul(self.window_scale),
            self.height.saturating_mul(self.window_scale),
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyDisplay {
                width: self.width,
                height: self.height,
            });
        }
        if self.window_scale == 0 {
            return Err(ConfigError::ZeroWindowScale);
        }
        let fits = |side: u32| side.checked_mul(self.window_scale).is_some();
        if !fits(self.width) || !fits(self.height) {
            return Err(ConfigError::WindowTooLarge {
                width: self.width,
                height: self.height,
                scale: self.window_scale,
            });
        }
        Ok(())
    }
}

/// Headless snapshot configuration
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// Output directory for PNG frames
    pub output_dir: PathBuf,

    /// Number of frames to render
    pub frames: usize,

    /// Virtual frame rate (FPS), sets the reveal clock step per frame
    pub fps: u32,
}

impl SnapshotConfig {
    pub fn new(output_dir: impl Into<PathBuf>, frames: usize, fps: u32) -> Self {
        Self {
            output_dir: output_dir.into(),
            frames,
            fps: fps.max(1),
        }
    }

    /// Frame path for the given frame number
    pub fn frame_path(&self, frame_num: usize) -> PathBuf {
        self.output_dir.join(format!("frame_{:05}.png", frame_num))
    }

    /// Virtual time between frames
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.fps as f64)
    }

    /// Virtual clock value at which `frame_num` is rendered
    pub fn frame_time(&self, frame_num: usize) -> std::time::Duration {
        self.frame_interval().mul_f64(frame_num as f64)
    }
}
