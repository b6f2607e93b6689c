//! One display: the oracle, the animation driver and the composited screen.

use std::time::Duration;

use glam::Vec3;
use log::info;

use crate::animation::AnimationDriver;
use crate::audio::CuePlayer;
use crate::error::OracleResult;
use crate::gesture::ShakeDetector;
use crate::message::fortune_from_line;
use crate::overlay::{Screen, TextOverlay};
use crate::params::{ClockParams, DisplayConfig, PatternParams, RevealParams, ShakeParams};
use crate::pattern::RadialPatternRenderer;
use crate::reveal::{Oracle, RevealScheduler, ShowOutcome};

/// All parameters needed to build an [`OracleDisplay`]
#[derive(Debug, Clone, Default)]
pub struct DisplaySettings {
    pub display: DisplayConfig,
    pub pattern: PatternParams,
    pub clock: ClockParams,
    pub reveal: RevealParams,
    pub shake: ShakeParams,
}

impl DisplaySettings {
    pub fn validate(&self) -> OracleResult<()> {
        self.display.validate()?;
        self.pattern.validate()?;
        self.clock.validate()?;
        self.reveal.validate()?;
        Ok(())
    }
}

/// Host-independent display state
///
/// The host calls [`frame`](Self::frame) once per display refresh with the
/// time since it started, and forwards input through the `handle_*` methods.
pub struct OracleDisplay {
    oracle: Oracle,
    driver: AnimationDriver,
    overlay: TextOverlay,
    screen: Screen,
    reveal: RevealParams,
}

impl OracleDisplay {
    pub fn new(settings: DisplaySettings, cue: Box<dyn CuePlayer>) -> OracleResult<Self> {
        settings.validate()?;
        let DisplaySettings {
            display,
            pattern,
            clock,
            reveal,
            shake,
        } = settings;

        let scheduler = RevealScheduler::new(reveal.clone(), cue);
        let driver = AnimationDriver::new(
            clock,
            RadialPatternRenderer::new(pattern),
            scheduler.signal(),
            display.width,
            display.height,
        );

        Ok(Self {
            oracle: Oracle::new(scheduler, ShakeDetector::new(shake)),
            driver,
            overlay: TextOverlay::new(&display),
            screen: Screen::new(display.width, display.height),
            reveal,
        })
    }

    /// Startup sequence: reveal `initial` if given, otherwise the placeholder
    /// followed by the fallback fortune (stored until the next replay)
    pub fn start(&mut self, initial: Option<&str>, now: Duration) {
        match initial {
            Some(text) => {
                self.oracle.set_fortune(text, now);
            }
            None => {
                let placeholder = self.reveal.placeholder.clone();
                let fallback = self.reveal.fallback_fortune.clone();
                self.oracle.set_fortune(placeholder, now);
                self.oracle.set_fortune(fallback, now);
            }
        }
        info!("display started, fortune {:?}", self.oracle.fortune());
    }

    /// Advance the reveal to `now`, tick the animation and compose the screen
    pub fn frame(&mut self, now: Duration) -> &Screen {
        self.oracle.advance(now);
        self.driver.tick();
        self.overlay.compose(
            self.driver.frame(),
            self.oracle.displayed_text(),
            &mut self.screen,
        );
        &self.screen
    }

    pub fn oracle(&self) -> &Oracle {
        &self.oracle
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    /// Scroll wheel / arrow keys
    pub fn handle_scroll(&mut self, now: Duration) -> ShowOutcome {
        self.oracle.replay(now)
    }

    /// One line of host input: a JSON plugin message or bare fortune text
    pub fn handle_input(&mut self, line: &str, now: Duration) -> Option<ShowOutcome> {
        let fortune = fortune_from_line(line)?;
        Some(self.oracle.set_fortune(fortune, now))
    }

    pub fn handle_acceleration(&mut self, acceleration: Vec3, now: Duration) -> Option<ShowOutcome> {
        self.oracle.handle_acceleration(acceleration, now)
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentCue;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn display() -> OracleDisplay {
        OracleDisplay::new(DisplaySettings::default(), Box::new(SilentCue)).unwrap()
    }

    #[test]
    fn test_startup_keeps_fallback_for_replay() {
        let mut d = display();
        d.start(None, ms(0));
        assert_eq!(d.oracle().fortune(), "SHADOWS CONSUME ALL");

        d.frame(ms(60_000));
        assert_eq!(d.oracle().displayed_text(), "syncing with transistor chips...");

        assert_eq!(d.handle_scroll(ms(60_000)), ShowOutcome::Started);
        d.frame(ms(120_000));
        assert_eq!(d.oracle().displayed_text(), "SHADOWS CONSUME ALL");
    }

    #[test]
    fn test_clock_runs_fast_while_revealing() {
        let mut d = display();
        d.start(Some("HI"), ms(0));

        d.frame(ms(16));
        assert_eq!(d.driver().clock().value(), 4.0);
        d.frame(ms(100));
        assert_eq!(d.driver().clock().value(), 8.0);
        // Second character lands at 200ms and ends the session before the tick
        d.frame(ms(200));
        assert_eq!(d.oracle().displayed_text(), "HI");
        assert_eq!(d.driver().clock().value(), 8.5);
    }

    #[test]
    fn test_consecutive_frames_at_same_clock_identical() {
        let settings = DisplaySettings::default();
        let mut a = OracleDisplay::new(settings.clone(), Box::new(SilentCue)).unwrap();
        let mut b = OracleDisplay::new(settings, Box::new(SilentCue)).unwrap();
        let sa = a.frame(ms(16)).clone();
        let sb = b.frame(ms(16)).clone();
        assert_eq!(sa.as_bytes(), sb.as_bytes());
    }

    #[test]
    fn test_input_line_sets_fortune() {
        let mut d = display();
        let outcome = d.handle_input(r#"{"data": {"fortune": " ash "}}"#, ms(0));
        assert_eq!(outcome, Some(ShowOutcome::Started));
        assert_eq!(d.oracle().fortune(), "ASH");
        assert_eq!(d.handle_input("{}", ms(0)), None);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = DisplaySettings::default();
        settings.pattern.block_size = 0;
        assert!(OracleDisplay::new(settings, Box::new(SilentCue)).is_err());
    }
}
