//! # NavButtons Component
//!
//! The clickable button row under the card: `◀ Prev`, `⇄ Swap`, `Next ▶`.
//! Prev/Next are dimmed at the start/end of the deck. Clicks are routed by
//! `ScreenLayout::hit_test`, which uses `button_areas` so the drawn buttons
//! and their hit boxes line up.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

/// Split the button row into prev / swap / next thirds.
pub fn button_areas(area: Rect) -> [Rect; 3] {
    Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(area)
}

pub struct NavButtons {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl NavButtons {
    pub fn new(prev_disabled: bool, next_disabled: bool) -> Self {
        Self {
            prev_disabled,
            next_disabled,
        }
    }
}

fn button_style(disabled: bool) -> Style {
    if disabled {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, disabled: bool) {
    let style = button_style(disabled);
    let button = Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(style),
        );
    frame.render_widget(button, area);
}

impl Component for NavButtons {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [prev, swap, next] = button_areas(area);
        render_button(frame, prev, "◀ Prev", self.prev_disabled);
        render_button(frame, swap, "⇄ Swap", false);
        render_button(frame, next, "Next ▶", self.next_disabled);
    }
}
