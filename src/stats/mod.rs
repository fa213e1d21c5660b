//! Persisted study statistics.
//!
//! A single JSON file tracks the theme preference, the cards-studied
//! counter, today's pomodoro session count, total focus minutes, and the
//! current streak. Daily counters roll over when the stored reset date is no
//! longer today.

mod models;
mod storage;

pub use models::{StudyStats, FOCUS_SESSION_MINUTES};
pub use storage::{StatsError, StatsStorage};
