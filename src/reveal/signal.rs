//! Shared "reveal in progress" flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle to the active-reveal flag
///
/// Written only by [`super::RevealScheduler`] at session start and end;
/// read by the animation driver once per frame.
#[derive(Debug, Clone, Default)]
pub struct RevealSignal {
    active: Arc<AtomicBool>,
}

impl RevealSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub(crate) fn set(&self, active: bool) {
        self.active.store(active, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let signal = RevealSignal::new();
        let reader = signal.clone();
        assert!(!reader.is_active());
        signal.set(true);
        assert!(reader.is_active());
    }
}
