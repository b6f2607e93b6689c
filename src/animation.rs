//! Per-frame animation loop state: the clock and the double-buffered pattern.

use log::{debug, info};

use crate::params::ClockParams;
use crate::pattern::{Framebuffer, RadialPatternRenderer};
use crate::reveal::RevealSignal;

/// Monotonic animation time in clock units
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct AnimationClock(f64);

impl AnimationClock {
    pub fn value(&self) -> f64 {
        self.0
    }

    fn advance(&mut self, increment: f64) {
        debug_assert!(increment >= 0.0, "clock must not run backwards");
        self.0 += increment.max(0.0);
    }
}

/// Drives the pattern once per display frame
///
/// Each [`tick`](Self::tick) advances the clock by the idle or active
/// increment (read from the shared [`RevealSignal`]), renders into the back
/// buffer, then swaps it to the front. Consumers only ever see complete frames.
pub struct AnimationDriver {
    params: ClockParams,
    renderer: RadialPatternRenderer,
    signal: RevealSignal,
    clock: AnimationClock,
    front: Framebuffer,
    back: Framebuffer,
    frames: u64,
    stopped: bool,
}

impl AnimationDriver {
    pub fn new(
        params: ClockParams,
        renderer: RadialPatternRenderer,
        signal: RevealSignal,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            params,
            renderer,
            signal,
            clock: AnimationClock::default(),
            front: Framebuffer::new(width, height),
            back: Framebuffer::new(width, height),
            frames: 0,
            stopped: false,
        }
    }

    pub fn clock(&self) -> AnimationClock {
        self.clock
    }

    /// Most recent complete frame
    pub fn frame(&self) -> &Framebuffer {
        &self.front
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        !self.stopped
    }

    /// Run one frame; returns false (and does nothing) once stopped
    pub fn tick(&mut self) -> bool {
        if self.stopped {
            return false;
        }

        let active = self.signal.is_active();
        self.clock.advance(self.params.increment(active));
        self.renderer
            .render(&mut self.back, self.clock.value(), active);
        std::mem::swap(&mut self.front, &mut self.back);
        self.frames += 1;

        if self.frames % 600 == 0 {
            debug!(
                "frame {} t={:.1} active={}",
                self.frames,
                self.clock.value(),
                active
            );
        }
        true
    }

    /// End the loop; later ticks are no-ops
    pub fn stop(&mut self) {
        if !self.stopped {
            info!("animation stopped after {} frames", self.frames);
            self.stopped = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(signal: &RevealSignal) -> AnimationDriver {
        AnimationDriver::new(
            ClockParams::default(),
            RadialPatternRenderer::default(),
            signal.clone(),
            240,
            282,
        )
    }

    #[test]
    fn test_clock_increment_follows_signal() {
        let signal = RevealSignal::new();
        let mut d = driver(&signal);

        d.tick();
        assert_eq!(d.clock().value(), 0.5);

        signal.set(true);
        d.tick();
        assert_eq!(d.clock().value(), 4.5);
        d.tick();
        assert_eq!(d.clock().value(), 8.5);

        signal.set(false);
        d.tick();
        assert_eq!(d.clock().value(), 9.0);
    }

    #[test]
    fn test_clock_never_decreases() {
        let signal = RevealSignal::new();
        let mut d = driver(&signal);
        let mut last = d.clock();
        for i in 0..50 {
            signal.set(i % 7 < 3);
            d.tick();
            assert!(d.clock() > last);
            last = d.clock();
        }
    }

    #[test]
    fn test_frame_matches_direct_render() {
        let signal = RevealSignal::new();
        let mut d = driver(&signal);
        d.tick();

        let mut expected = Framebuffer::new(240, 282);
        RadialPatternRenderer::default().render(&mut expected, 0.5, false);
        assert_eq!(d.frame(), &expected);
        assert_eq!(d.frame().pixels().len(), 240 * 282);
    }

    #[test]
    fn test_stop_freezes_clock() {
        let signal = RevealSignal::new();
        let mut d = driver(&signal);
        d.tick();
        d.stop();
        assert!(!d.tick());
        assert_eq!(d.clock().value(), 0.5);
        assert_eq!(d.frame_count(), 1);
        assert!(!d.is_running());
    }
}
