//! Oracle display library - dithered radial pattern with typewriter fortunes

pub mod animation;
pub mod audio;
pub mod cli;
pub mod display;
pub mod error;
pub mod gesture;
pub mod message;
pub mod noise;
pub mod overlay;
pub mod params;
pub mod pattern;
pub mod rendering;
pub mod reveal;
