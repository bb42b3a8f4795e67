//! Game core module
//!
//! The round timer, the clock that drives it, and the per-round session.

pub mod session;
pub mod timer;

pub use session::GameSession;
pub use timer::{Metronome, Pulse, RoundTimer, TimerEvent};
