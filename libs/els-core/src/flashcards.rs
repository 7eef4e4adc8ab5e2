//! Flashcard deck navigation for the study phase of a unit.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::VocabularyEntry;

/// A unit's vocabulary in a shuffled order, walked one card at a time.
#[derive(Debug, Clone)]
pub struct FlashcardDeck {
    cards: Vec<VocabularyEntry>,
    index: usize,
}

impl FlashcardDeck {
    pub fn shuffled(words: &[VocabularyEntry], rng: &mut impl Rng) -> Self {
        let mut cards = words.to_vec();
        cards.shuffle(rng);
        Self { cards, index: 0 }
    }

    /// Current card, or `None` once the deck has been walked through.
    pub fn current(&self) -> Option<&VocabularyEntry> {
        self.cards.get(self.index)
    }

    /// Step forward. Walking past the last card marks the deck complete.
    pub fn next(&mut self) {
        if self.index < self.cards.len() {
            self.index += 1;
        }
    }

    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Reshuffle and start over.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
        self.index = 0;
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.cards.len()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Progress caption, e.g. `Card 3 / 13`.
    pub fn progress_label(&self) -> String {
        format!(
            "Card {} / {}",
            (self.index + 1).min(self.cards.len()),
            self.cards.len()
        )
    }
}
