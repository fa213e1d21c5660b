//! Flashcard browsing session

use rand::seq::SliceRandom;
use thiserror::Error;

use super::models::{Flashcard, FlashcardDeck};
use crate::stats::StudyStats;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FlashcardError {
    #[error("Deck \"{0}\" has no cards")]
    EmptyDeck(String),
}

type Result<T> = std::result::Result<T, FlashcardError>;

/// Mutable state of one flashcard browsing pass.
///
/// The cards-studied counter counts card *displays*: the initial card when a
/// deck loads, every move to a neighbouring card, and the card shown after a
/// shuffle. Flipping a card over does not count.
#[derive(Debug)]
pub struct FlashcardSession {
    deck: FlashcardDeck,
    current_index: usize,
    flipped: bool,
}

impl FlashcardSession {
    /// Start browsing a deck at its first card.
    pub fn new(deck: FlashcardDeck, stats: &mut StudyStats) -> Result<Self> {
        if deck.cards.is_empty() {
            return Err(FlashcardError::EmptyDeck(deck.key));
        }
        stats.record_card_viewed();
        Ok(Self {
            deck,
            current_index: 0,
            flipped: false,
        })
    }

    /// Toggle between question and answer. The index does not change.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Move to the next card, clamping at the end of the deck. Returns true
    /// if the card changed; a move shows the question side again.
    pub fn next(&mut self, stats: &mut StudyStats) -> bool {
        if self.current_index + 1 >= self.deck.cards.len() {
            return false;
        }
        self.current_index += 1;
        self.flipped = false;
        stats.record_card_viewed();
        true
    }

    /// Move to the previous card, clamping at the start of the deck.
    pub fn previous(&mut self, stats: &mut StudyStats) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        self.flipped = false;
        stats.record_card_viewed();
        true
    }

    /// Permute the deck in place (Fisher–Yates, uniform over permutations)
    /// and restart at the first card, question side up.
    pub fn shuffle(&mut self, stats: &mut StudyStats) {
        self.deck.cards.shuffle(&mut rand::thread_rng());
        self.current_index = 0;
        self.flipped = false;
        stats.record_card_viewed();
    }

    pub fn current_card(&self) -> &Flashcard {
        &self.deck.cards[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn deck(&self) -> &FlashcardDeck {
        &self.deck
    }

    /// Progress label like "3 / 10".
    pub fn progress(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.deck.cards.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use chrono::Local;

    fn fresh_stats() -> StudyStats {
        StudyStats::new(Local::now().date_naive())
    }

    fn math_session(stats: &mut StudyStats) -> FlashcardSession {
        let deck = Catalog::new().deck("math");
        FlashcardSession::new(deck, stats).unwrap()
    }

    #[test]
    fn test_empty_deck_rejected() {
        let mut stats = fresh_stats();
        let deck = FlashcardDeck {
            key: "empty".to_string(),
            name: "Empty".to_string(),
            cards: Vec::new(),
        };
        assert_eq!(
            FlashcardSession::new(deck, &mut stats).unwrap_err(),
            FlashcardError::EmptyDeck("empty".to_string())
        );
        assert_eq!(stats.cards_studied, 0);
    }

    #[test]
    fn test_navigation_clamps_and_resets_flip() {
        let mut stats = fresh_stats();
        let mut session = math_session(&mut stats);

        assert!(!session.previous(&mut stats));
        assert_eq!(session.current_index(), 0);

        session.flip();
        assert!(session.is_flipped());
        assert!(session.next(&mut stats));
        assert!(!session.is_flipped());
        assert_eq!(session.current_index(), 1);

        // Walk to the end, then confirm the clamp
        while session.next(&mut stats) {}
        let last = session.deck().cards.len() - 1;
        assert_eq!(session.current_index(), last);
        assert!(!session.next(&mut stats));
        assert_eq!(session.current_index(), last);
    }

    #[test]
    fn test_shuffle_then_navigate() {
        let mut stats = fresh_stats();
        let mut session = math_session(&mut stats);
        assert!(session.deck().cards.len() >= 4);

        session.shuffle(&mut stats);
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_flipped());

        session.next(&mut stats);
        session.next(&mut stats);
        session.next(&mut stats);
        assert_eq!(session.current_index(), 3);
        session.previous(&mut stats);
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn test_shuffle_preserves_card_multiset() {
        let mut stats = fresh_stats();
        let mut session = math_session(&mut stats);
        let mut before: Vec<Flashcard> = session.deck().cards.clone();

        session.shuffle(&mut stats);

        let mut after: Vec<Flashcard> = session.deck().cards.clone();
        before.sort_by(|a, b| a.question.cmp(&b.question));
        after.sort_by(|a, b| a.question.cmp(&b.question));
        assert_eq!(before, after);
    }

    #[test]
    fn test_cards_studied_counts_displays_not_flips() {
        let mut stats = fresh_stats();
        let mut session = math_session(&mut stats);
        assert_eq!(stats.cards_studied, 1); // initial display

        session.flip();
        session.flip();
        assert_eq!(stats.cards_studied, 1); // flips do not count

        session.next(&mut stats);
        session.previous(&mut stats);
        session.shuffle(&mut stats);
        assert_eq!(stats.cards_studied, 4);

        // A clamped move shows nothing new
        session.previous(&mut stats);
        assert_eq!(stats.cards_studied, 4);
    }
}
