//! # TUI Components
//!
//! The pieces of the study screen. All of them are stateless: they receive
//! the data they draw as props, mostly copied out of the frame's `CardView`.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (top line: section + status)
//! ├── card_face.rs     (front/back halves, image line)
//! ├── progress.rs      (position gauge)
//! └── nav_buttons.rs   (Prev / Swap / Next)
//! ```
//!
//! Props go in as constructor arguments instead of being read from global
//! state, so each component can be rendered alone against a `TestBackend`:
//!
//! ```rust,ignore
//! ProgressBar::new(view.progress, view.position, view.total).render(frame, area);
//! ```

pub mod card_face;
pub mod nav_buttons;
pub mod progress;
mod title_bar;

pub use card_face::CardFace;
pub use nav_buttons::NavButtons;
pub use progress::ProgressBar;
pub use title_bar::TitleBar;
