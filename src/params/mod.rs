//! Parameter definitions with units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Units (pixels, milliseconds, clock units, Hz)
//! - Documented ranges and meanings
//! - Validation where a bad value would break rendering or timing

mod audio;
mod display;
mod gesture;
mod pattern;
mod reveal;

// Re-export all types
pub use audio::CueConfig;
pub use display::{DisplayConfig, SnapshotConfig};
pub use gesture::ShakeParams;
pub use pattern::{ClockParams, PatternParams};
pub use reveal::RevealParams;
