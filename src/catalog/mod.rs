//! Content catalog: the static registry behind notes, quizzes and decks.
//!
//! Notes and quizzes are matched fuzzily: the key and the input are lowered
//! and the first registered entry whose key contains, or is contained in,
//! the input wins. Registration order is the defined tie-break. Unmatched
//! lookups synthesize a generic entry; any user text embedded into that
//! entry's markup is HTML-escaped first. Deck lookup is exact, with the
//! science deck as the default.

mod data;
mod models;

pub use models::StudyNotes;

use crate::flashcards::FlashcardDeck;
use crate::quiz::QuizQuestion;

/// In-memory content registry, built once at load time.
pub struct Catalog {
    notes: Vec<models::NotesEntry>,
    quizzes: Vec<models::QuizEntry>,
    decks: Vec<FlashcardDeck>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            notes: data::notes_entries(),
            quizzes: data::quiz_entries(),
            decks: data::deck_entries(),
        }
    }

    /// Study notes for a topic. Falls back to generic notes templated on the
    /// (escaped) topic when nothing matches.
    pub fn notes(&self, topic: &str) -> StudyNotes {
        match fuzzy_find(self.notes.iter(), |e| e.key, topic) {
            Some(entry) => StudyNotes {
                title: entry.title.to_string(),
                content_html: entry.content_html.to_string(),
            },
            None => data::generic_notes(topic),
        }
    }

    /// Quiz questions for a subject. Falls back to a generic five-question
    /// quiz templated on the subject when nothing matches.
    pub fn quiz(&self, subject: &str) -> Vec<QuizQuestion> {
        match fuzzy_find(self.quizzes.iter(), |e| e.key, subject) {
            Some(entry) => entry.questions.clone(),
            None => data::generic_quiz(subject),
        }
    }

    /// Flashcard deck by exact key; unknown keys get the default (science)
    /// deck.
    pub fn deck(&self, key: &str) -> FlashcardDeck {
        let key = key.trim().to_lowercase();
        self.decks
            .iter()
            .find(|d| d.key == key)
            .unwrap_or(&self.decks[0])
            .clone()
    }

    /// Registered deck keys, in registration order.
    pub fn deck_keys(&self) -> Vec<&str> {
        self.decks.iter().map(|d| d.key.as_str()).collect()
    }
}

/// First entry whose key is a substring of the input, or vice versa.
/// Iteration order defines the tie-break for multi-match inputs.
fn fuzzy_find<'a, T, I, F>(entries: I, key_of: F, input: &str) -> Option<&'a T>
where
    I: Iterator<Item = &'a T>,
    F: Fn(&T) -> &str,
{
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    let mut entries = entries;
    entries.find(|entry| {
        let key = key_of(entry);
        needle.contains(key) || key.contains(&needle)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_fuzzy_match_both_directions() {
        let catalog = Catalog::new();
        // Input contains the key
        assert_eq!(catalog.notes("intro to calculus").title, "Introduction to Calculus");
        // Key contains the input
        assert_eq!(catalog.notes("photo").title, "Photosynthesis");
        // Case-insensitive
        assert_eq!(catalog.notes("WORLD WAR 2").title, "World War II");
    }

    #[test]
    fn test_unknown_topic_gets_escaped_fallback() {
        let catalog = Catalog::new();
        let notes = catalog.notes("<script>alert(1)</script>");
        assert!(!notes.content_html.contains("<script>"));
        assert!(notes.content_html.contains("&lt;script&gt;"));
        assert!(!notes.title.contains("<script>"));
    }

    #[test]
    fn test_quiz_lookup_and_fallback() {
        let catalog = Catalog::new();
        let biology = catalog.quiz("biology");
        assert_eq!(biology.len(), 5);
        assert!(biology.iter().all(|q| q.options.len() == 4));
        assert!(biology.iter().all(|q| q.correct_index < q.options.len()));

        let generic = catalog.quiz("underwater basket weaving");
        assert_eq!(generic.len(), 5);
        assert!(generic[0].prompt.contains("underwater basket weaving"));
        assert!(generic.iter().all(|q| q.correct_index < q.options.len()));
    }

    #[test]
    fn test_quiz_fuzzy_containment() {
        let catalog = Catalog::new();
        let a = catalog.quiz("math"); // "mathematics" contains "math"
        let b = catalog.quiz("mathematics");
        assert_eq!(a[0].prompt, b[0].prompt);
    }

    #[test]
    fn test_deck_exact_lookup_with_default() {
        let catalog = Catalog::new();
        assert_eq!(catalog.deck("math").name, "Mathematics");
        assert_eq!(catalog.deck("literature").name, "Literature");
        // Unknown keys fall back to the science deck
        assert_eq!(catalog.deck("geography").name, "Science Basics");
        assert_eq!(catalog.deck_keys(), vec!["science", "history", "math", "literature"]);
    }

    #[test]
    fn test_decks_are_non_empty() {
        let catalog = Catalog::new();
        for key in catalog.deck_keys() {
            assert!(!catalog.deck(key).cards.is_empty(), "deck {} is empty", key);
        }
    }
}
