//! Data models for the content catalog

use serde::{Deserialize, Serialize};

use crate::quiz::QuizQuestion;

/// Rendered study notes. `content_html` is catalog-authored markup, safe to
/// insert unescaped; user text only ever enters it pre-escaped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyNotes {
    pub title: String,
    pub content_html: String,
}

/// A registered notes entry. Keys are lowercase.
pub(super) struct NotesEntry {
    pub key: &'static str,
    pub title: &'static str,
    pub content_html: &'static str,
}

/// A registered quiz question set. Keys are lowercase.
pub(super) struct QuizEntry {
    pub key: &'static str,
    pub questions: Vec<QuizQuestion>,
}
