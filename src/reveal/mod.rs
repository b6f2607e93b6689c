//! Typewriter text reveal and the shared active-reveal signal.

mod oracle;
mod scheduler;
mod signal;

// Re-export public types
pub use oracle::Oracle;
pub use scheduler::{RevealScheduler, ShowOutcome};
pub use signal::RevealSignal;
