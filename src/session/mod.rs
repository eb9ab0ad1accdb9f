//! Viewing session: state, actions and the analysis driver.
//!
//! The session holds the current input text, the last successful analysis
//! and the user's selection. State changes only through
//! `SessionState::apply`, one `Action` at a time.

pub mod driver;
pub mod help;
pub mod samples;
pub mod state;

pub use driver::{fingerprint, Session};
pub use samples::{sample, SAMPLE_TEXTS};
pub use state::{Action, Analysis, PendingRequest, SessionState, View};
