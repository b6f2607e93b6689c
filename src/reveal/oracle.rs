//! The fortune holder: remembers the latest fortune and decides when to reveal it.

use std::time::Duration;

use glam::Vec3;
use log::info;

use super::scheduler::{RevealScheduler, ShowOutcome};
use crate::gesture::ShakeDetector;

/// Current fortune plus the triggers that (re)reveal it
///
/// A fortune that arrives mid-reveal is kept but not shown; the next
/// replay (scroll, shake) reveals it.
pub struct Oracle {
    scheduler: RevealScheduler,
    shake: ShakeDetector,
    fortune: String,
}

impl Oracle {
    pub fn new(scheduler: RevealScheduler, shake: ShakeDetector) -> Self {
        Self {
            scheduler,
            shake,
            fortune: String::new(),
        }
    }

    pub fn scheduler(&self) -> &RevealScheduler {
        &self.scheduler
    }

    /// Latest fortune, whether or not it has been revealed
    pub fn fortune(&self) -> &str {
        &self.fortune
    }

    pub fn displayed_text(&self) -> &str {
        self.scheduler.displayed_text()
    }

    /// Store `text` as the current fortune and try to reveal it
    pub fn set_fortune(&mut self, text: impl Into<String>, now: Duration) -> ShowOutcome {
        self.fortune = text.into();
        let outcome = self.scheduler.show(&self.fortune, now);
        if outcome == ShowOutcome::Dropped {
            info!("fortune stored for next replay: {:?}", self.fortune);
        }
        outcome
    }

    /// Reveal the current fortune again
    pub fn replay(&mut self, now: Duration) -> ShowOutcome {
        self.scheduler.show(&self.fortune, now)
    }

    /// Replay on a detected shake
    pub fn handle_acceleration(&mut self, acceleration: Vec3, now: Duration) -> Option<ShowOutcome> {
        self.shake
            .observe(acceleration, now)
            .then(|| self.replay(now))
    }

    pub fn advance(&mut self, now: Duration) -> usize {
        self.scheduler.advance(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentCue;
    use crate::params::RevealParams;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn oracle() -> Oracle {
        let scheduler = RevealScheduler::new(RevealParams::default(), Box::new(SilentCue));
        Oracle::new(scheduler, ShakeDetector::default())
    }

    #[test]
    fn test_fortune_during_reveal_waits_for_replay() {
        let mut o = oracle();
        assert_eq!(o.set_fortune("ab", ms(0)), ShowOutcome::Started);
        assert_eq!(o.set_fortune("XY", ms(50)), ShowOutcome::Dropped);
        assert_eq!(o.fortune(), "XY");

        o.advance(ms(1000));
        assert_eq!(o.displayed_text(), "ab");

        assert_eq!(o.replay(ms(1000)), ShowOutcome::Started);
        o.advance(ms(2000));
        assert_eq!(o.displayed_text(), "XY");
    }

    #[test]
    fn test_shake_replays() {
        let mut o = oracle();
        o.set_fortune("Q", ms(0));
        o.advance(ms(100));

        let still = Vec3::new(0.0, 0.0, 9.8);
        let shake = Vec3::new(30.0, 0.0, 9.8);
        assert_eq!(o.handle_acceleration(still, ms(200)), None);
        assert_eq!(
            o.handle_acceleration(shake, ms(300)),
            Some(ShowOutcome::Started)
        );
        assert!(o.scheduler().is_active());
    }
}
