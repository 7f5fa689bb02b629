//! # Actions
//!
//! Everything that can happen in a study session becomes an `Action`.
//! User presses →? That's `Action::Navigate(NavigationIntent::Next)`.
//! Cards finished loading? That's `Action::DeckLoaded(cards)`.
//!
//! `update()` applies an action to the state and returns an `Effect` for
//! the adapter to carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::card::{Card, Language};
use crate::core::gesture::NavigationIntent;
use crate::core::state::{App, LoadState};
use crate::images::ImageResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The one-shot load finished with these cards.
    DeckLoaded(Vec<Card>),
    /// The one-shot load failed; the deck stays empty.
    LoadFailed(String),
    Navigate(NavigationIntent),
    SwapSides,
    SetFront(Language),
    SetBack(Language),
    CycleFront,
    CycleBack,
    CycleSection,
    Reset,
    ImageResolved { key: String, result: ImageResult },
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Look up an illustration for this key.
    FetchImage(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::DeckLoaded(cards) => {
            let count = cards.len();
            app.install_deck(cards);
            app.load_state = LoadState::Ready;
            app.status_message = if count == 0 {
                String::from("No cards found")
            } else {
                format!("Loaded {count} cards")
            };
            info!("Deck ready with {} cards", count);
            card_changed(app)
        }
        Action::LoadFailed(message) => {
            warn!("Card data failed to load: {}", message);
            app.deck = crate::core::deck::Deck::empty();
            app.image = ImageResult::None;
            app.status_message = format!("Load failed: {message}");
            app.load_state = LoadState::Failed(message);
            Effect::None
        }
        Action::Navigate(intent) => {
            if app.deck.apply(intent) {
                debug!(
                    "Navigated {:?} to {}/{}",
                    intent,
                    app.deck.position_one_based(),
                    app.deck.size()
                );
                card_changed(app)
            } else {
                Effect::None
            }
        }
        Action::SwapSides => {
            std::mem::swap(&mut app.front, &mut app.back);
            set_language_status(app);
            Effect::None
        }
        Action::SetFront(language) => {
            app.front = language;
            set_language_status(app);
            Effect::None
        }
        Action::SetBack(language) => {
            app.back = language;
            set_language_status(app);
            Effect::None
        }
        Action::CycleFront => {
            app.front = app.front.next();
            set_language_status(app);
            Effect::None
        }
        Action::CycleBack => {
            app.back = app.back.next();
            set_language_status(app);
            Effect::None
        }
        Action::CycleSection => {
            if app.deck.cards().is_empty() {
                return Effect::None;
            }
            let section = app.deck.cycle_section().map(str::to_string);
            app.status_message = match section {
                Some(chapter) => format!("Section: {chapter} ({} cards)", app.deck.size()),
                None => format!("Section: all ({} cards)", app.deck.size()),
            };
            card_changed(app)
        }
        Action::Reset => {
            if app.deck.is_at_start() {
                return Effect::None;
            }
            app.deck.reset();
            card_changed(app)
        }
        Action::ImageResolved { key, result } => {
            if app.current_image_key().as_deref() == Some(key.as_str()) {
                app.image = result;
            } else {
                debug!("Ignoring stale image result for '{}'", key);
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// The displayed card changed: drop the old illustration and ask for a new one.
fn card_changed(app: &mut App) -> Effect {
    app.image = ImageResult::None;
    if !app.images_enabled {
        return Effect::None;
    }
    match app.current_image_key() {
        Some(key) => Effect::FetchImage(key),
        None => Effect::None,
    }
}

fn set_language_status(app: &mut App) {
    app.status_message = format!("Front: {} · Back: {}", app.front.name(), app.back.name());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{loaded_app, sample_cards, test_app};

    #[test]
    fn test_deck_loaded_sets_ready() {
        let mut app = test_app();
        let effect = update(&mut app, Action::DeckLoaded(sample_cards()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.load_state, LoadState::Ready);
        assert_eq!(app.deck.size(), sample_cards().len());
        assert_eq!(app.status_message, format!("Loaded {} cards", sample_cards().len()));
    }

    #[test]
    fn test_deck_loaded_requests_image_when_enabled() {
        let mut app = test_app();
        app.images_enabled = true;
        app.shuffle = false;
        let effect = update(&mut app, Action::DeckLoaded(sample_cards()));
        assert_eq!(effect, Effect::FetchImage("hello".to_string()));
    }

    #[test]
    fn test_load_failed_leaves_empty_deck() {
        let mut app = loaded_app();
        let effect = update(&mut app, Action::LoadFailed("unreachable".into()));
        assert_eq!(effect, Effect::None);
        assert!(app.deck.is_empty());
        assert_eq!(app.load_state, LoadState::Failed("unreachable".into()));
        assert!(app.deck.current().is_none());
    }

    #[test]
    fn test_navigate_moves_and_respects_bounds() {
        let mut app = loaded_app();
        update(&mut app, Action::Navigate(NavigationIntent::Previous));
        assert_eq!(app.deck.position_one_based(), 1);

        update(&mut app, Action::Navigate(NavigationIntent::Next));
        assert_eq!(app.deck.position_one_based(), 2);

        let effect = update(&mut app, Action::Navigate(NavigationIntent::None));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.deck.position_one_based(), 2);
    }

    #[test]
    fn test_navigate_requests_image_only_on_move() {
        let mut app = loaded_app();
        app.images_enabled = true;
        let effect = update(&mut app, Action::Navigate(NavigationIntent::Previous));
        assert_eq!(effect, Effect::None);
        let effect = update(&mut app, Action::Navigate(NavigationIntent::Next));
        assert_eq!(effect, Effect::FetchImage("thank".to_string()));
    }

    #[test]
    fn test_swap_sides() {
        let mut app = loaded_app();
        update(&mut app, Action::SwapSides);
        assert_eq!(app.front, Language::English);
        assert_eq!(app.back, Language::Hindi);
        assert_eq!(app.status_message, "Front: English · Back: Hindi");
    }

    #[test]
    fn test_set_and_cycle_languages() {
        let mut app = loaded_app();
        update(&mut app, Action::SetBack(Language::Finnish));
        assert_eq!(app.back, Language::Finnish);
        update(&mut app, Action::CycleFront);
        assert_eq!(app.front, Language::English);
        update(&mut app, Action::CycleBack);
        assert_eq!(app.back, Language::Hindi);
        update(&mut app, Action::SetFront(Language::Hindi));
        assert_eq!(app.front, Language::Hindi);
    }

    #[test]
    fn test_cycle_section() {
        let mut app = loaded_app();
        update(&mut app, Action::Navigate(NavigationIntent::Next));
        update(&mut app, Action::CycleSection);
        assert_eq!(app.deck.section(), Some("food"));
        assert_eq!(app.deck.position_one_based(), 1);
        assert_eq!(app.status_message, "Section: food (2 cards)");
    }

    #[test]
    fn test_cycle_section_on_empty_deck_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::CycleSection), Effect::None);
        assert_eq!(app.deck.section(), None);
    }

    #[test]
    fn test_reset() {
        let mut app = loaded_app();
        update(&mut app, Action::Navigate(NavigationIntent::Next));
        update(&mut app, Action::Navigate(NavigationIntent::Next));
        update(&mut app, Action::Reset);
        assert_eq!(app.deck.position_one_based(), 1);
    }

    #[test]
    fn test_image_resolved_applies_only_to_current_card() {
        let mut app = loaded_app();
        update(
            &mut app,
            Action::ImageResolved {
                key: "water".into(),
                result: ImageResult::Emoji("💧".into()),
            },
        );
        assert_eq!(app.image, ImageResult::None);

        update(
            &mut app,
            Action::ImageResolved {
                key: "hello".into(),
                result: ImageResult::Emoji("👋".into()),
            },
        );
        assert_eq!(app.image, ImageResult::Emoji("👋".into()));

        update(&mut app, Action::Navigate(NavigationIntent::Next));
        assert_eq!(app.image, ImageResult::None);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
