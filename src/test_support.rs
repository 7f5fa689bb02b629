//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, update};
use crate::core::card::{Card, Language};
use crate::core::state::App;

/// Five cards across two chapters, in a fixed order.
pub fn sample_cards() -> Vec<Card> {
    vec![
        Card::new("नमस्ते", "hello", "hei", "greetings", "hello"),
        Card::new("धन्यवाद", "Thank you", "kiitos", "greetings", "thank you"),
        Card::new("पानी", "water", "vesi", "food", "water"),
        Card::new("चावल", "rice", "riisi", "food", "rice"),
        Card::new("अलविदा", "goodbye", "näkemiin", "greetings", "goodbye"),
    ]
}

/// Creates a test App (Hindi front, English back) with a fixed seed.
pub fn test_app() -> App {
    App::new(Language::Hindi, Language::English).with_seed(1)
}

/// A test App with `sample_cards()` loaded in their original order.
pub fn loaded_app() -> App {
    let mut app = test_app();
    app.shuffle = false;
    update(&mut app, Action::DeckLoaded(sample_cards()));
    app
}
