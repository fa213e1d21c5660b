//! Data models for the flashcard system

use serde::{Deserialize, Serialize};

/// A flashcard with a question (front) and an answer (back).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A named, ordered deck of flashcards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardDeck {
    /// Catalog key, e.g. "science".
    pub key: String,
    /// Display name, e.g. "Science Basics".
    pub name: String,
    pub cards: Vec<Flashcard>,
}
