//! Procedural radial pattern quantized through an ordered-dither table.

mod dither;
mod framebuffer;
mod renderer;

// Re-export public types
pub use dither::{DitherMatrix, LEVELS, MATRIX_SIZE};
pub use framebuffer::{Framebuffer, Rgba};
pub use renderer::RadialPatternRenderer;
