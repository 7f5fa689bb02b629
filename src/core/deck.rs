//! # Deck
//!
//! The shuffled card sequence and the cursor into it.
//!
//! ```text
//! cards:   [c3, c0, c4, c1, c2]     shuffled once by `load`, never again
//! active:  [0, 2, 3]                indices into `cards` for the current section
//! cursor:      ^                    index into `active`
//! ```
//!
//! Stepping saturates at both ends: at the first or last card a step is a
//! no-op that returns `false`. An empty deck is a normal state; every
//! accessor then reports "no data" instead of failing.

use log::debug;
use rand::Rng;

use crate::core::card::Card;
use crate::core::gesture::NavigationIntent;

/// Uniform in-place Fisher-Yates shuffle.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
    /// Indices into `cards` that belong to the active section.
    active: Vec<usize>,
    /// Active chapter filter; `None` means every card.
    section: Option<String>,
    cursor: usize,
}

impl Deck {
    /// The pre-load state.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a deck from loaded cards with exactly one shuffle pass.
    pub fn load<R: Rng + ?Sized>(mut cards: Vec<Card>, rng: &mut R) -> Self {
        shuffle_in_place(&mut cards, rng);
        debug!("Deck loaded and shuffled: {} cards", cards.len());
        Self::load_unshuffled(cards)
    }

    /// Build a deck keeping the given order.
    pub fn load_unshuffled(cards: Vec<Card>) -> Self {
        let active = (0..cards.len()).collect();
        Self {
            cards,
            active,
            section: None,
            cursor: 0,
        }
    }

    pub fn current(&self) -> Option<&Card> {
        self.active.get(self.cursor).map(|&i| &self.cards[i])
    }

    pub fn step_previous(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    pub fn step_next(&mut self) -> bool {
        if self.cursor + 1 < self.active.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Apply a navigation intent. Returns whether the cursor moved.
    pub fn apply(&mut self, intent: NavigationIntent) -> bool {
        match intent {
            NavigationIntent::Previous => self.step_previous(),
            NavigationIntent::Next => self.step_next(),
            NavigationIntent::None => false,
        }
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// `(cursor + 1) / size`, or 0 for an empty deck.
    pub fn progress_fraction(&self) -> f64 {
        if self.active.is_empty() {
            0.0
        } else {
            (self.cursor + 1) as f64 / self.active.len() as f64
        }
    }

    /// Number of cards in the active section.
    pub fn size(&self) -> usize {
        self.active.len()
    }

    /// One-based position of the current card, or 0 for an empty deck.
    pub fn position_one_based(&self) -> usize {
        if self.active.is_empty() { 0 } else { self.cursor + 1 }
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor + 1 >= self.active.len()
    }

    /// Every loaded card in shuffled order, regardless of section.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Distinct chapter labels, sorted.
    pub fn chapters(&self) -> Vec<&str> {
        let mut chapters: Vec<&str> = self.cards.iter().map(Card::chapter).collect();
        chapters.sort_unstable();
        chapters.dedup();
        chapters
    }

    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    /// Restrict navigation to one chapter (`None` = all cards) and rewind.
    /// Unknown chapters leave the deck untouched and return `false`.
    pub fn set_section(&mut self, chapter: Option<&str>) -> bool {
        let active: Vec<usize> = match chapter {
            Some(name) => self
                .cards
                .iter()
                .enumerate()
                .filter(|(_, card)| card.chapter() == name)
                .map(|(i, _)| i)
                .collect(),
            None => (0..self.cards.len()).collect(),
        };

        if chapter.is_some() && active.is_empty() {
            return false;
        }

        debug!("Section set to {:?} ({} cards)", chapter, active.len());
        self.active = active;
        self.section = chapter.map(str::to_string);
        self.cursor = 0;
        true
    }

    /// Move to the next section: all → first chapter → ... → last chapter → all.
    pub fn cycle_section(&mut self) -> Option<&str> {
        let next = {
            let chapters = self.chapters();
            match self.section.as_deref() {
                None => chapters.first().map(|c| c.to_string()),
                Some(current) => chapters
                    .iter()
                    .position(|c| *c == current)
                    .and_then(|i| chapters.get(i + 1))
                    .map(|c| c.to_string()),
            }
        };
        self.set_section(next.as_deref());
        self.section()
    }
}
