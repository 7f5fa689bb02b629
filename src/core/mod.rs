//! # Core Study Logic
//!
//! This module contains Flashdeck's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Deck (cards+cursor)  │
//!                    │  • Gestures → intents   │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No UI. Pure reducers.  │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Loader   │      │   Images   │
//!     │  Adapter   │      │ (file/URL) │      │  (async)   │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`card`]: `Card` and the fixed `Language` side keys
//! - [`loader`]: raw JSON (legacy pairs or chapters) → cards
//! - [`deck`]: the shuffled deck and its saturating cursor
//! - [`gesture`]: swipe / click-zone classification into `NavigationIntent`
//! - [`state`]: the `App` struct and the `CardView` handed to renderers
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: settings file and override resolution

pub mod action;
pub mod card;
pub mod config;
pub mod deck;
pub mod gesture;
pub mod loader;
pub mod state;
