//! # Card Images
//!
//! Best-effort illustrations for the current card. Lives outside `core`:
//! the core only hands out a lookup key and consumes an `ImageResult`.
//!
//! ```text
//! back text ──lookup_key()──► "water" ──provider (≤ timeout)──► Image(url)
//!                                   └── timeout / error / miss ──► Emoji("💧") or None
//! ```

pub mod emoji;
pub mod provider;
pub mod providers;
pub mod types;

pub use emoji::emoji_for;
pub use provider::{ImageError, ImageProvider, resolve_image};
pub use providers::HttpImageProvider;
pub use types::{ImageResult, lookup_key};
