//! # CardFace Component
//!
//! The flashcard itself: an outer frame titled with the chapter, split into
//! a front half (top) and a back half (bottom). Each half is titled with its
//! language and shows its text wrapped and centered. The illustration, when
//! one has resolved, sits on the line under the back text.
//!
//! ```text
//! ╭ greetings ───────────────────────────╮
//! │┌ Hindi ─────────────────────────────┐│
//! ││              नमस्ते                  ││
//! │└────────────────────────────────────┘│
//! │┌ English ───────────────────────────┐│
//! ││               hello                ││
//! ││                 👋                  ││
//! │└────────────────────────────────────┘│
//! ╰──────────────────────────────────────╯
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::state::CardView;
use crate::images::ImageResult;
use crate::tui::component::Component;

pub struct CardFace<'a> {
    view: &'a CardView,
}

impl<'a> CardFace<'a> {
    pub fn new(view: &'a CardView) -> Self {
        Self { view }
    }
}

/// Wrap `text` to `width` and pad it with blank lines so it sits in the
/// vertical middle of `height` rows. Lines past `height` are dropped.
pub fn centered_lines(text: &str, width: u16, height: u16) -> Vec<String> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let mut wrapped: Vec<String> = textwrap::wrap(text, width as usize)
        .into_iter()
        .map(|line| line.into_owned())
        .collect();
    wrapped.truncate(height as usize);

    let padding = (height as usize - wrapped.len()) / 2;
    let mut lines = vec![String::new(); padding];
    lines.extend(wrapped);
    lines
}

fn image_line(image: &ImageResult) -> Option<String> {
    match image {
        ImageResult::Image(reference) => Some(format!("🖼  {reference}")),
        ImageResult::Emoji(glyph) => Some(glyph.clone()),
        ImageResult::None => None,
    }
}

fn render_half(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    text: &str,
    extra: Option<String>,
    accent: Color,
) {
    let block = Block::bordered()
        .title(format!(" {label} "))
        .border_style(Style::default().fg(accent).add_modifier(Modifier::DIM))
        .title_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text_rows = if extra.is_some() {
        inner.height.saturating_sub(1)
    } else {
        inner.height
    };

    let mut lines: Vec<Line> = centered_lines(text, inner.width, text_rows)
        .into_iter()
        .map(|l| Line::styled(l, Style::default().fg(accent).add_modifier(Modifier::BOLD)))
        .collect();
    if let Some(extra) = extra {
        lines.push(Line::styled(extra, Style::default().fg(Color::Gray)));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

impl Component for CardFace<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = match &self.view.chapter {
            Some(chapter) => format!(" {chapter} "),
            None => " Flashdeck ".to_string(),
        };
        let outer = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(title);
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let [front_area, back_area] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(inner);

        render_half(
            frame,
            front_area,
            self.view.front_label,
            &self.view.front_text,
            None,
            Color::Yellow,
        );
        render_half(
            frame,
            back_area,
            self.view.back_label,
            &self.view.back_text,
            image_line(&self.view.image),
            Color::Cyan,
        );
    }
}
