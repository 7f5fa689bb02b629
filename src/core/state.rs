//! # Application State
//!
//! Core study-session state. Domain logic only, no terminal types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── deck: Deck                 // shuffled cards + cursor
//! ├── front: Language            // language shown on the top half
//! ├── back: Language             // language shown on the bottom half
//! ├── load_state: LoadState      // loading / ready / failed
//! ├── status_message: String     // status bar text
//! ├── image: ImageResult         // illustration for the current card
//! ├── images_enabled: bool       // whether to request illustrations
//! ├── shuffle: bool              // shuffle once on load
//! └── rng: StdRng                // seeded when a seed is configured
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::card::{Card, Language};
use crate::core::config::ResolvedConfig;
use crate::core::deck::Deck;
use crate::images::{ImageResult, lookup_key};

pub const EMPTY_FRONT_TEXT: &str = "No data available";
pub const EMPTY_BACK_TEXT: &str = "Please add some cards";
pub const ERROR_FRONT_TEXT: &str = "Error loading data";
pub const ERROR_BACK_TEXT: &str = "Please check data files";
pub const LOADING_TEXT: &str = "Loading cards...";

/// Side whose text feeds the image lookup key.
pub const IMAGE_KEY_LANGUAGE: Language = Language::English;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

pub struct App {
    pub deck: Deck,
    pub front: Language,
    pub back: Language,
    pub load_state: LoadState,
    pub status_message: String,
    pub image: ImageResult,
    pub images_enabled: bool,
    pub shuffle: bool,
    rng: StdRng,
}

/// Everything the rendering sink needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub front_label: &'static str,
    pub front_text: String,
    pub back_label: &'static str,
    pub back_text: String,
    pub chapter: Option<String>,
    pub progress: f64,
    pub position: usize,
    pub total: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub image: ImageResult,
}

impl App {
    pub fn new(front: Language, back: Language) -> Self {
        Self {
            deck: Deck::empty(),
            front,
            back,
            load_state: LoadState::Loading,
            status_message: String::from(LOADING_TEXT),
            image: ImageResult::None,
            images_enabled: false,
            shuffle: true,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(config.front, config.back);
        app.shuffle = config.shuffle;
        app.images_enabled = config.images_enabled;
        if let Some(seed) = config.seed {
            app.rng = StdRng::seed_from_u64(seed);
        }
        app
    }

    /// Replace the deck with freshly loaded cards (shuffled once if enabled).
    pub fn install_deck(&mut self, cards: Vec<Card>) {
        self.deck = if self.shuffle {
            Deck::load(cards, &mut self.rng)
        } else {
            Deck::load_unshuffled(cards)
        };
        self.image = ImageResult::None;
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Lookup key for the current card's illustration, if any.
    pub fn current_image_key(&self) -> Option<String> {
        self.deck
            .current()
            .and_then(|card| lookup_key(card.side(IMAGE_KEY_LANGUAGE)))
    }

    pub fn view(&self) -> CardView {
        let (front_text, back_text) = match (&self.load_state, self.deck.current()) {
            (LoadState::Failed(_), _) => (ERROR_FRONT_TEXT.to_string(), ERROR_BACK_TEXT.to_string()),
            (LoadState::Loading, _) => (LOADING_TEXT.to_string(), String::new()),
            (LoadState::Ready, None) => (EMPTY_FRONT_TEXT.to_string(), EMPTY_BACK_TEXT.to_string()),
            (LoadState::Ready, Some(card)) => (
                card.display_side(self.front).to_string(),
                card.display_side(self.back).to_string(),
            ),
        };

        CardView {
            front_label: self.front.name(),
            front_text,
            back_label: self.back.name(),
            back_text,
            chapter: self.deck.current().map(|c| c.chapter().to_string()),
            progress: self.deck.progress_fraction(),
            position: self.deck.position_one_based(),
            total: self.deck.size(),
            prev_disabled: self.deck.is_at_start(),
            next_disabled: self.deck.is_at_end(),
            image: self.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_cards, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = App::new(Language::Hindi, Language::English);
        assert_eq!(app.load_state, LoadState::Loading);
        assert_eq!(app.status_message, LOADING_TEXT);
        assert!(app.deck.is_empty());
        assert!(app.shuffle);
        assert!(!app.images_enabled);
    }

    #[test]
    fn test_view_while_loading() {
        let app = App::new(Language::Hindi, Language::English);
        let view = app.view();
        assert_eq!(view.front_text, LOADING_TEXT);
        assert_eq!(view.total, 0);
        assert!(view.prev_disabled && view.next_disabled);
    }

    #[test]
    fn test_view_empty_deck() {
        let mut app = test_app();
        app.install_deck(Vec::new());
        app.load_state = LoadState::Ready;
        let view = app.view();
        assert_eq!(view.front_text, EMPTY_FRONT_TEXT);
        assert_eq!(view.back_text, EMPTY_BACK_TEXT);
        assert_eq!(view.position, 0);
        assert_eq!(view.progress, 0.0);
    }

    #[test]
    fn test_view_failed_load() {
        let mut app = test_app();
        app.load_state = LoadState::Failed("boom".into());
        let view = app.view();
        assert_eq!(view.front_text, ERROR_FRONT_TEXT);
        assert_eq!(view.back_text, ERROR_BACK_TEXT);
    }

    #[test]
    fn test_view_ready_deck() {
        let mut app = test_app();
        app.shuffle = false;
        app.install_deck(sample_cards());
        app.load_state = LoadState::Ready;

        let view = app.view();
        let first = &sample_cards()[0];
        assert_eq!(view.front_label, "Hindi");
        assert_eq!(view.front_text, first.side(Language::Hindi));
        assert_eq!(view.back_label, "English");
        assert_eq!(view.back_text, first.side(Language::English));
        assert_eq!(view.position, 1);
        assert_eq!(view.total, sample_cards().len());
        assert!(view.prev_disabled);
        assert!(!view.next_disabled);
        assert_eq!(view.chapter.as_deref(), Some(first.chapter()));
    }

    #[test]
    fn test_view_placeholder_for_empty_side() {
        let mut app = test_app();
        app.back = Language::Finnish;
        app.install_deck(vec![Card::new("नमस्ते", "hello", "", "legacy", "hello")]);
        app.load_state = LoadState::Ready;
        assert_eq!(app.view().back_text, crate::core::card::MISSING_SIDE_TEXT);
    }

    #[test]
    fn test_seeded_apps_shuffle_identically() {
        let mut a = test_app().with_seed(9);
        let mut b = test_app().with_seed(9);
        a.install_deck(sample_cards());
        b.install_deck(sample_cards());
        assert_eq!(a.deck.cards(), b.deck.cards());
    }

    #[test]
    fn test_current_image_key_uses_english_side() {
        let mut app = test_app();
        app.install_deck(vec![Card::new("पानी", "Water, please", "vettä", "food", "water")]);
        assert_eq!(app.current_image_key().as_deref(), Some("water"));
    }
}
