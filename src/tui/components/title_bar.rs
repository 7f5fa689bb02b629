//! # TitleBar Component
//!
//! Top status bar showing the active chapter section and status messages.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Flashdeck | Section: food | Loaded 40 cards"`
//! 2. **Default**: `"Flashdeck | Section: all"`
//!
//! The text is cut at the terminal width (by display width, so Devanagari
//! and emoji status text never overflow).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;

use crate::tui::component::Component;

/// Top status bar component. All fields are props.
pub struct TitleBar {
    /// Active chapter, `None` for every card
    pub section: Option<String>,
    /// Status message (e.g., "Loaded 40 cards", "Front: English · Back: Hindi")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(section: Option<String>, status_message: String) -> Self {
        Self {
            section,
            status_message,
        }
    }

    fn text(&self) -> String {
        let section = self.section.as_deref().unwrap_or("all");
        if self.status_message.is_empty() {
            format!("Flashdeck | Section: {}", section)
        } else {
            format!("Flashdeck | Section: {} | {}", section, self.status_message)
        }
    }
}

/// Longest prefix of `text` that fits in `width` terminal columns.
fn truncate_to_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, c) in text.char_indices() {
        used += c.width().unwrap_or(0);
        if used > width {
            return &text[..idx];
        }
    }
    text
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = self.text();
        let visible = truncate_to_width(&text, area.width as usize);
        frame.render_widget(
            Span::styled(visible.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            area,
        );
    }
}
