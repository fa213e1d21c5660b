//! Multiple-choice quiz engine.
//!
//! A quiz runs as a small state machine: `NotStarted → InProgress →
//! Completed`. Questions come from the content catalog and are fixed for the
//! lifetime of a session; scoring locks per question once an answer has been
//! selected.

mod models;
mod session;

pub use models::{QuizQuestion, ScoreBand};
pub use session::{AnswerOutcome, Progress, QuizEngine, QuizError, QuizResults, QuizSession};
