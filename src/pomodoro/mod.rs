//! Pomodoro timer state machine.
//!
//! The timer is tick-driven: the owner calls [`PomodoroTimer::tick`] once
//! per elapsed second, so tests can simulate a whole session synchronously.
//! The real one-second cadence lives in the terminal driver only.

mod timer;

pub use timer::{PomodoroTimer, TimerMode};
