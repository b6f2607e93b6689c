//! Character-at-a-time text reveal with per-character delays.

use std::time::Duration;

use log::{debug, info, warn};

use super::signal::RevealSignal;
use crate::audio::CuePlayer;
use crate::params::RevealParams;

/// What a call to [`RevealScheduler::show`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOutcome {
    /// A new session started
    Started,
    /// A session was already running; the text was discarded
    Dropped,
    /// The text was empty; the session finished immediately
    Completed,
}

/// One in-progress reveal
#[derive(Debug)]
struct RevealSession {
    chars: Vec<char>,
    cursor: usize,
    /// When the character at `cursor` is due
    next_due: Duration,
}

/// Typewriter-style reveal driven by an external clock
///
/// Time is a [`Duration`] since an origin chosen by the host. The host calls
/// [`advance`](Self::advance) whenever it wakes (every frame, or at
/// [`next_deadline`](Self::next_deadline)); every character whose deadline
/// has passed is appended in order. Each deadline is measured from the
/// previous character's due time.
pub struct RevealScheduler {
    params: RevealParams,
    signal: RevealSignal,
    cue: Box<dyn CuePlayer>,
    session: Option<RevealSession>,
    displayed: String,
}

impl RevealScheduler {
    pub fn new(params: RevealParams, cue: Box<dyn CuePlayer>) -> Self {
        Self {
            params,
            signal: RevealSignal::new(),
            cue,
            session: None,
            displayed: String::new(),
        }
    }

    /// Handle for readers of the active flag
    pub fn signal(&self) -> RevealSignal {
        self.signal.clone()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Text emitted so far in the current (or last) session
    pub fn displayed_text(&self) -> &str {
        &self.displayed
    }

    /// Deadline of the next pending character, if a session is active
    pub fn next_deadline(&self) -> Option<Duration> {
        self.session.as_ref().map(|s| s.next_due)
    }

    /// Start revealing `text` at time `now`
    ///
    /// While a session is active the request is dropped: it neither queues
    /// nor interrupts the running reveal.
    pub fn show(&mut self, text: &str, now: Duration) -> ShowOutcome {
        if self.session.is_some() {
            debug!("reveal in progress, dropping {:?}", text);
            return ShowOutcome::Dropped;
        }

        self.displayed.clear();
        let chars: Vec<char> = text.chars().collect();
        let Some(&first) = chars.first() else {
            debug!("empty reveal completed immediately");
            return ShowOutcome::Completed;
        };

        info!("revealing {} characters", chars.len());
        self.session = Some(RevealSession {
            next_due: now + self.params.delay_for(first),
            chars,
            cursor: 0,
        });
        self.signal.set(true);
        ShowOutcome::Started
    }

    /// Emit every character due at or before `now`; returns how many were emitted
    pub fn advance(&mut self, now: Duration) -> usize {
        let mut emitted = 0;

        while let Some(session) = self.session.as_mut() {
            if session.next_due > now {
                break;
            }

            let ch = session.chars[session.cursor];
            session.cursor += 1;
            self.displayed.push(ch);
            emitted += 1;

            if ch != ' ' {
                if let Err(e) = self.cue.play(self.params.cue_volume) {
                    warn!("typing cue failed: {}", e);
                }
            }

            match session.chars.get(session.cursor).copied() {
                Some(next) => session.next_due += self.params.delay_for(next),
                None => {
                    self.session = None;
                    self.signal.set(false);
                    info!("reveal complete: {:?}", self.displayed);
                }
            }
        }

        emitted
    }
}
