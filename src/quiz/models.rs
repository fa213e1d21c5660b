//! Data models for the quiz engine

use serde::{Deserialize, Serialize};

/// A single multiple-choice question with exactly one correct option.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options`. Invariant: `correct_index < options.len()`.
    pub correct_index: usize,
}

impl QuizQuestion {
    pub fn new(prompt: impl Into<String>, options: [&str; 4], correct_index: usize) -> Self {
        debug_assert!(correct_index < options.len());
        Self {
            prompt: prompt.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index,
        }
    }
}

/// Four-tier rating of a finished quiz, by score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBand {
    Excellent,
    Good,
    RoomForImprovement,
    KeepStudying,
}

impl ScoreBand {
    /// Band thresholds: >= 80 excellent, >= 60 good, >= 40 room for
    /// improvement, otherwise encouragement.
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            ScoreBand::Excellent
        } else if percentage >= 60.0 {
            ScoreBand::Good
        } else if percentage >= 40.0 {
            ScoreBand::RoomForImprovement
        } else {
            ScoreBand::KeepStudying
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent work! 🌟",
            ScoreBand::Good => "Good job! Keep it up! 👍",
            ScoreBand::RoomForImprovement => {
                "Not bad, but there's room for improvement! 📚"
            }
            ScoreBand::KeepStudying => "Keep studying and try again! 💪",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(ScoreBand::for_percentage(100.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_percentage(80.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_percentage(79.9), ScoreBand::Good);
        assert_eq!(ScoreBand::for_percentage(60.0), ScoreBand::Good);
        assert_eq!(ScoreBand::for_percentage(59.9), ScoreBand::RoomForImprovement);
        assert_eq!(ScoreBand::for_percentage(40.0), ScoreBand::RoomForImprovement);
        assert_eq!(ScoreBand::for_percentage(39.9), ScoreBand::KeepStudying);
        assert_eq!(ScoreBand::for_percentage(0.0), ScoreBand::KeepStudying);
    }
}
