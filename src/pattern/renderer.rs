//! Block-quantized, ordered-dithered radial pattern.

use std::f64::consts::PI;

use glam::DVec2;
use log::trace;
use noise::NoiseFn;

use super::dither::DitherMatrix;
use super::framebuffer::{Framebuffer, Rgba};
use crate::noise::NoiseField;
use crate::params::PatternParams;

/// Renders the noise-wobbled radial blob into a two-colour framebuffer
#[derive(Debug, Clone)]
pub struct RadialPatternRenderer {
    params: PatternParams,
    noise: NoiseField,
    dither: DitherMatrix,
    front: Rgba,
    back: Rgba,
}

impl RadialPatternRenderer {
    pub fn new(params: PatternParams) -> Self {
        let dither = DitherMatrix::new(params.block_size);
        Self {
            front: params.front_color.into(),
            back: params.back_color.into(),
            noise: NoiseField::new(),
            dither,
            params,
        }
    }

    pub fn params(&self) -> &PatternParams {
        &self.params
    }

    pub fn front_color(&self) -> Rgba {
        self.front
    }

    pub fn back_color(&self) -> Rgba {
        self.back
    }

    /// Rebuild every pixel of `buffer` for the given clock value and reveal state
    ///
    /// A zero-sized buffer (or zero block size) is left untouched.
    pub fn render(&self, buffer: &mut Framebuffer, time: f64, active: bool) {
        let (w, h) = (buffer.width(), buffer.height());
        let block = self.params.block_size;
        if w == 0 || h == 0 || block == 0 {
            return;
        }

        let center = DVec2::new(w as f64 / 2.0, h as f64 / 2.0);
        let base_radius = self.params.base_radius(active);

        for y in (0..h).step_by(block as usize) {
            for x in (0..w).step_by(block as usize) {
                let intensity = self.intensity(x, y, center, base_radius, time);
                let color = if intensity > self.dither.normalized(x, y) {
                    self.front
                } else {
                    self.back
                };
                buffer.fill_block(x, y, block, color);
            }
        }

        trace!("rendered {}x{} pattern at t={:.2} active={}", w, h, time, active);
    }

    /// Intensity in [0, 1] for the block whose top-left pixel is (x, y)
    pub fn intensity(&self, x: u32, y: u32, center: DVec2, base_radius: f64, time: f64) -> f64 {
        let p = &self.params;
        let pos = DVec2::new(x as f64, y as f64);
        let offset = (pos - center) * p.radial_scale;
        let dist = offset.length();

        let n = self.noise.get([pos.x * p.noise_scale, pos.y * p.noise_scale]);
        let wobble = (time * p.noise_speed + n * PI * 2.0).sin() * p.noise_amplitude;
        let angle = offset.y.atan2(offset.x);
        let lobes = (angle * p.lobes + time * p.angular_speed).sin() * p.shape_amplitude;
        let radius = base_radius + lobes + wobble;

        // dist >= 0, so this also guards the division against radius <= 0
        if dist >= radius {
            return 0.0;
        }

        let intensity = 1.0 - dist / radius + (n - 0.5) * p.noise_jitter;
        debug_assert!(
            intensity.is_finite(),
            "non-finite intensity at ({}, {}) t={}",
            x,
            y,
            time
        );
        if intensity.is_finite() {
            intensity.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl Default for RadialPatternRenderer {
    fn default() -> Self {
        Self::new(PatternParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn center() -> DVec2 {
        DVec2::new(120.0, 141.0)
    }

    #[test]
    fn test_only_two_colors() {
        let renderer = RadialPatternRenderer::default();
        let mut fb = Framebuffer::new(240, 282);
        renderer.render(&mut fb, 12.5, false);

        let (front, back) = (renderer.front_color(), renderer.back_color());
        assert!(fb.pixels().iter().all(|&p| p == front || p == back));
        // The blob is visible; noise at the origin is 0, so jitter keeps (0, 0) dark
        assert!(fb.pixels().contains(&front));
        assert_eq!(fb.get(0, 0), Some(back));
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = RadialPatternRenderer::default();
        let mut a = Framebuffer::new(240, 282);
        let mut b = Framebuffer::new(240, 282);
        renderer.render(&mut a, 37.0, true);
        renderer.render(&mut b, 37.0, true);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_render_overwrites_previous_frame() {
        let renderer = RadialPatternRenderer::default();
        let mut reused = Framebuffer::new(240, 282);
        renderer.render(&mut reused, 400.0, true);
        renderer.render(&mut reused, 3.0, false);

        let mut fresh = Framebuffer::new(240, 282);
        renderer.render(&mut fresh, 3.0, false);
        assert_eq!(reused, fresh);
    }

    #[test]
    fn test_blocks_are_uniform() {
        let renderer = RadialPatternRenderer::default();
        let mut fb = Framebuffer::new(240, 282);
        renderer.render(&mut fb, 0.0, false);
        for by in (0..282).step_by(3) {
            for bx in (0..240).step_by(3) {
                let top_left = fb.get(bx, by);
                for dy in 0..3 {
                    for dx in 0..3 {
                        if let Some(p) = fb.get(bx + dx, by + dy) {
                            assert_eq!(Some(p), top_left);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_sized_buffer_is_noop() {
        let renderer = RadialPatternRenderer::default();
        let mut fb = Framebuffer::new(0, 282);
        renderer.render(&mut fb, 1.0, true);
        assert!(fb.is_empty());
    }

    #[test]
    fn test_active_pattern_is_larger() {
        let renderer = RadialPatternRenderer::default();
        let mut idle = Framebuffer::new(240, 282);
        let mut active = Framebuffer::new(240, 282);
        renderer.render(&mut idle, 10.0, false);
        renderer.render(&mut active, 10.0, true);

        let front = renderer.front_color();
        let count = |fb: &Framebuffer| fb.pixels().iter().filter(|&&p| p == front).count();
        assert!(count(&active) > count(&idle));
    }

    #[test]
    fn test_intensity_samples_noise_field() {
        let renderer = RadialPatternRenderer::default();
        let p = renderer.params().clone();
        let (x, y, time) = (122u32, 143u32, 7.0);

        let n = NoiseField::new().get([x as f64 * p.noise_scale, y as f64 * p.noise_scale]);
        let offset = (DVec2::new(x as f64, y as f64) - center()) * p.radial_scale;
        let wobble = (time * p.noise_speed + n * PI * 2.0).sin() * p.noise_amplitude;
        let lobes = (offset.y.atan2(offset.x) * p.lobes + time * p.angular_speed).sin()
            * p.shape_amplitude;
        let radius = 80.0 + lobes + wobble;
        let expected =
            (1.0 - offset.length() / radius + (n - 0.5) * p.noise_jitter).clamp(0.0, 1.0);

        let actual = renderer.intensity(x, y, center(), 80.0, time);
        assert!((actual - expected).abs() < 1e-12, "{} vs {}", actual, expected);
        assert!(actual > 0.0);
    }

    #[test]
    fn test_far_corner_has_zero_intensity() {
        let renderer = RadialPatternRenderer::default();
        // Max radius is 100 + 40 + 30 = 170 scaled pixels
        let far = renderer.intensity(1000, 1000, center(), 100.0, 0.0);
        assert_eq!(far, 0.0);
    }

    #[test]
    fn test_non_positive_radius_yields_zero() {
        let params = PatternParams {
            idle_radius: -500.0,
            ..Default::default()
        };
        let renderer = RadialPatternRenderer::new(params);
        assert_eq!(renderer.intensity(120, 141, center(), -500.0, 0.0), 0.0);
    }

    proptest! {
        #[test]
        fn intensity_is_finite_and_bounded(
            x in 0u32..240,
            y in 0u32..282,
            time in 0.0f64..1.0e6,
            active in any::<bool>(),
        ) {
            let renderer = RadialPatternRenderer::default();
            let base = renderer.params().base_radius(active);
            let i = renderer.intensity(x, y, center(), base, time);
            prop_assert!(i.is_finite());
            prop_assert!((0.0..=1.0).contains(&i));
        }

        #[test]
        fn render_emits_only_two_colors(time in 0.0f64..1.0e6, active in any::<bool>()) {
            let renderer = RadialPatternRenderer::default();
            let mut fb = Framebuffer::new(240, 282);
            renderer.render(&mut fb, time, active);

            let (front, back) = (renderer.front_color(), renderer.back_color());
            prop_assert!(fb.pixels().iter().all(|&p| p == front || p == back));
        }

        #[test]
        fn reused_buffer_matches_fresh_render(
            first in 0.0f64..1.0e6,
            second in 0.0f64..1.0e6,
            first_active in any::<bool>(),
            second_active in any::<bool>(),
        ) {
            let renderer = RadialPatternRenderer::default();
            let mut reused = Framebuffer::new(240, 282);
            renderer.render(&mut reused, first, first_active);
            renderer.render(&mut reused, second, second_active);

            let (front, back) = (renderer.front_color(), renderer.back_color());
            prop_assert!(reused.pixels().iter().all(|&p| p == front || p == back));

            let mut fresh = Framebuffer::new(240, 282);
            renderer.render(&mut fresh, second, second_active);
            prop_assert!(reused == fresh);
        }
    }
}
