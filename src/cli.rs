//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::display::DisplaySettings;
use crate::params::{CueConfig, SnapshotConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "oracle-display")]
#[command(about = "Dithered oracle display with typewriter fortunes", long_about = None)]
pub struct Args {
    /// Fortune to reveal at startup (skips the placeholder)
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Window magnification (window pixels per raster pixel)
    #[arg(long, value_name = "N", default_value_t = 2)]
    pub scale: u32,

    /// Raster width (pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = 240)]
    pub width: u32,

    /// Raster height (pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = 282)]
    pub height: u32,

    /// WAV file used as the typing sound
    #[arg(long, value_name = "WAV")]
    pub cue: Option<PathBuf>,

    /// Disable the typing sound
    #[arg(long)]
    pub mute: bool,

    /// Read host messages (JSON or plain text) from stdin, one per line
    #[arg(long)]
    pub stdin: bool,

    /// Render headless and write PNG frames to this directory
    #[arg(long, value_name = "DIR")]
    pub snapshot: Option<PathBuf>,

    /// Number of frames to render in snapshot mode
    #[arg(long, value_name = "N", default_value_t = 120)]
    pub frames: usize,

    /// Virtual frame rate in snapshot mode
    #[arg(long, value_name = "FPS", default_value_t = 30)]
    pub fps: u32,
}

impl Args {
    /// Display settings with the command-line overrides applied
    pub fn display_settings(&self) -> DisplaySettings {
        let mut settings = DisplaySettings::default();
        settings.display.width = self.width;
        settings.display.height = self.height;
        settings.display.window_scale = self.scale;
        settings
    }

    pub fn cue_config(&self) -> CueConfig {
        CueConfig {
            wav_path: self.cue.clone(),
            ..Default::default()
        }
    }

    /// Snapshot configuration if headless mode is enabled
    pub fn snapshot_config(&self) -> Option<SnapshotConfig> {
        self.snapshot
            .as_ref()
            .map(|dir| SnapshotConfig::new(dir, self.frames, self.fps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["oracle-display"]);
        let settings = args.display_settings();
        assert_eq!((settings.display.width, settings.display.height), (240, 282));
        assert!(args.snapshot_config().is_none());
        assert!(args.cue_config().wav_path.is_none());
    }

    #[test]
    fn test_snapshot_flags() {
        let args = Args::parse_from([
            "oracle-display",
            "--snapshot",
            "frames",
            "--frames",
            "10",
            "--fps",
            "60",
            "--text",
            "HELLO",
        ]);
        let snap = args.snapshot_config().unwrap();
        assert_eq!(snap.frames, 10);
        assert_eq!(snap.fps, 60);
        assert_eq!(args.text.as_deref(), Some("HELLO"));
    }
}
