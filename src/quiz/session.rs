//! Quiz session state machine

use serde::Serialize;
use thiserror::Error;

use super::models::{QuizQuestion, ScoreBand};
use crate::catalog::Catalog;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuizError {
    #[error("Please enter a subject for your quiz")]
    EmptySubject,

    #[error("Answer option {index} is out of range (the question has {len} options)")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("A quiz is already running")]
    QuizAlreadyRunning,

    #[error("No quiz is in progress")]
    NoActiveQuiz,

    #[error("The current question has not been answered yet")]
    QuestionNotAnswered,

    #[error("The quiz is not finished")]
    QuizNotFinished,
}

type Result<T> = std::result::Result<T, QuizError>;

/// Mutable state of one quiz attempt.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub questions: Vec<QuizQuestion>,
    pub current_index: usize,
    pub score: usize,
    /// Whether the current question has been answered. Scoring locks once
    /// this is set; re-selecting never changes the score.
    pub answered: bool,
}

impl QuizSession {
    fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            current_index: 0,
            score: 0,
            answered: false,
        }
    }

    fn restart(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.answered = false;
    }
}

/// Result of selecting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// The question was already answered; nothing changed.
    AlreadyAnswered,
}

/// Result of advancing past an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    NextQuestion,
    Completed,
}

/// Summary of a finished quiz.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResults {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub band: ScoreBand,
}

enum Phase {
    NotStarted,
    InProgress(QuizSession),
    Completed(QuizSession),
}

/// Drives a quiz session from start through scoring to completion.
pub struct QuizEngine {
    phase: Phase,
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizEngine {
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
        }
    }

    /// Start a quiz for a subject. The subject must be non-empty; questions
    /// are loaded from the catalog once and fixed for the session.
    pub fn start(&mut self, subject: &str, catalog: &Catalog) -> Result<()> {
        if subject.trim().is_empty() {
            return Err(QuizError::EmptySubject);
        }
        if matches!(self.phase, Phase::InProgress(_)) {
            return Err(QuizError::QuizAlreadyRunning);
        }
        let questions = catalog.quiz(subject);
        self.phase = Phase::InProgress(QuizSession::new(questions));
        Ok(())
    }

    /// Select an answer for the current question. The first selection locks
    /// the question and scores it; later selections are no-ops.
    pub fn select_answer(&mut self, option_index: usize) -> Result<AnswerOutcome> {
        let session = match &mut self.phase {
            Phase::InProgress(session) => session,
            _ => return Err(QuizError::NoActiveQuiz),
        };
        let question = &session.questions[session.current_index];
        if option_index >= question.options.len() {
            return Err(QuizError::OptionOutOfRange {
                index: option_index,
                len: question.options.len(),
            });
        }
        if session.answered {
            return Ok(AnswerOutcome::AlreadyAnswered);
        }
        session.answered = true;
        if option_index == question.correct_index {
            session.score += 1;
            Ok(AnswerOutcome::Correct)
        } else {
            Ok(AnswerOutcome::Incorrect)
        }
    }

    /// Move to the next question. Valid only once the current question has
    /// been answered; past the last question the session completes.
    pub fn advance(&mut self) -> Result<Progress> {
        let session = match &mut self.phase {
            Phase::InProgress(session) => session,
            _ => return Err(QuizError::NoActiveQuiz),
        };
        if !session.answered {
            return Err(QuizError::QuestionNotAnswered);
        }
        session.current_index += 1;
        session.answered = false;
        let finished = session.current_index == session.questions.len();
        if !finished {
            return Ok(Progress::NextQuestion);
        }
        if let Phase::InProgress(session) = std::mem::replace(&mut self.phase, Phase::NotStarted) {
            self.phase = Phase::Completed(session);
        }
        Ok(Progress::Completed)
    }

    /// Restart the finished quiz with the same question set, in order.
    pub fn retake(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.phase, Phase::NotStarted) {
            Phase::Completed(mut session) => {
                session.restart();
                self.phase = Phase::InProgress(session);
                Ok(())
            }
            other => {
                self.phase = other;
                Err(QuizError::QuizNotFinished)
            }
        }
    }

    /// Discard the finished quiz so a new subject can be chosen.
    pub fn reset(&mut self) -> Result<()> {
        match self.phase {
            Phase::Completed(_) => {
                self.phase = Phase::NotStarted;
                Ok(())
            }
            _ => Err(QuizError::QuizNotFinished),
        }
    }

    /// Score, total and band for a finished quiz.
    pub fn results(&self) -> Result<QuizResults> {
        match &self.phase {
            Phase::Completed(session) => {
                let total = session.questions.len();
                let percentage = (session.score as f64 / total as f64) * 100.0;
                Ok(QuizResults {
                    score: session.score,
                    total,
                    percentage,
                    band: ScoreBand::for_percentage(percentage),
                })
            }
            _ => Err(QuizError::QuizNotFinished),
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match &self.phase {
            Phase::InProgress(session) => session.questions.get(session.current_index),
            _ => None,
        }
    }

    pub fn session(&self) -> Option<&QuizSession> {
        match &self.phase {
            Phase::InProgress(session) | Phase::Completed(session) => Some(session),
            Phase::NotStarted => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.phase, Phase::Completed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_engine(subject: &str) -> QuizEngine {
        let catalog = Catalog::new();
        let mut engine = QuizEngine::new();
        engine.start(subject, &catalog).unwrap();
        engine
    }

    /// Answer every question with the given option and advance to the end.
    fn run_through(engine: &mut QuizEngine, option: usize) {
        loop {
            engine.select_answer(option).unwrap();
            if engine.advance().unwrap() == Progress::Completed {
                break;
            }
        }
    }

    #[test]
    fn test_start_requires_subject() {
        let catalog = Catalog::new();
        let mut engine = QuizEngine::new();
        assert_eq!(engine.start("", &catalog), Err(QuizError::EmptySubject));
        assert_eq!(engine.start("   ", &catalog), Err(QuizError::EmptySubject));
        assert!(engine.session().is_none());
    }

    #[test]
    fn test_answer_out_of_range_leaves_state_untouched() {
        let mut engine = started_engine("biology");
        let err = engine.select_answer(4).unwrap_err();
        assert_eq!(err, QuizError::OptionOutOfRange { index: 4, len: 4 });
        let session = engine.session().unwrap();
        assert!(!session.answered);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_reselect_does_not_double_count() {
        let mut engine = started_engine("biology");
        let correct = engine.current_question().unwrap().correct_index;
        assert_eq!(engine.select_answer(correct).unwrap(), AnswerOutcome::Correct);
        assert_eq!(engine.session().unwrap().score, 1);
        assert_eq!(
            engine.select_answer(correct).unwrap(),
            AnswerOutcome::AlreadyAnswered
        );
        assert_eq!(engine.session().unwrap().score, 1);
    }

    #[test]
    fn test_advance_requires_answer() {
        let mut engine = started_engine("biology");
        assert_eq!(engine.advance(), Err(QuizError::QuestionNotAnswered));
    }

    #[test]
    fn test_score_never_exceeds_question_count() {
        let mut engine = started_engine("history");
        run_through(&mut engine, 0);
        let results = engine.results().unwrap();
        assert!(results.score <= results.total);
    }

    #[test]
    fn test_completion_and_no_advance_past_end() {
        let mut engine = started_engine("mathematics");
        run_through(&mut engine, 1);
        assert!(engine.is_completed());
        assert_eq!(engine.advance(), Err(QuizError::NoActiveQuiz));
        assert_eq!(engine.select_answer(0), Err(QuizError::NoActiveQuiz));
    }

    #[test]
    fn test_retake_keeps_questions_resets_progress() {
        let mut engine = started_engine("biology");
        let first_prompt = engine.current_question().unwrap().prompt.clone();
        run_through(&mut engine, 1);
        engine.retake().unwrap();
        let session = engine.session().unwrap();
        assert_eq!(session.current_index, 0);
        assert_eq!(session.score, 0);
        assert!(!session.answered);
        assert_eq!(engine.current_question().unwrap().prompt, first_prompt);
    }

    #[test]
    fn test_reset_returns_to_not_started() {
        let mut engine = started_engine("biology");
        assert_eq!(engine.reset(), Err(QuizError::QuizNotFinished));
        run_through(&mut engine, 1);
        engine.reset().unwrap();
        assert!(engine.session().is_none());
        let catalog = Catalog::new();
        engine.start("history", &catalog).unwrap();
        assert!(engine.current_question().is_some());
    }

    #[test]
    fn test_perfect_run_scores_excellent() {
        let mut engine = started_engine("biology");
        loop {
            let correct = engine.current_question().unwrap().correct_index;
            engine.select_answer(correct).unwrap();
            if engine.advance().unwrap() == Progress::Completed {
                break;
            }
        }
        let results = engine.results().unwrap();
        assert_eq!(results.score, results.total);
        assert_eq!(results.band, ScoreBand::Excellent);
    }
}
