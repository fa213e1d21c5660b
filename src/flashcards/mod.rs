//! Flashcard deck viewer.
//!
//! A session walks a deck card by card, flipping between question and
//! answer. Navigation clamps at the deck boundaries and shuffling uses an
//! unbiased in-place permutation. Every card display bumps the persisted
//! cards-studied counter.

mod models;
mod session;

pub use models::{Flashcard, FlashcardDeck};
pub use session::{FlashcardError, FlashcardSession};
