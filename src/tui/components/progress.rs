//! Progress gauge under the card: filled to `position / total`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Gauge;

use crate::tui::component::Component;

pub struct ProgressBar {
    pub progress: f64,
    pub position: usize,
    pub total: usize,
}

impl ProgressBar {
    pub fn new(progress: f64, position: usize, total: usize) -> Self {
        Self {
            progress,
            position,
            total,
        }
    }

    pub fn label(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }
}

impl Component for ProgressBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let ratio = if self.progress.is_finite() {
            self.progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
            .ratio(ratio)
            .label(self.label());
        frame.render_widget(gauge, area);
    }
}
