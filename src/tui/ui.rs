use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::nav_buttons::button_areas;
use crate::tui::components::{CardFace, NavButtons, ProgressBar, TitleBar};

const HELP_TEXT: &str = "←/→ or swipe: navigate · space: swap · f/b: languages · c: chapter · r: restart · q: quit";

/// Screen regions for one terminal size. Rendering and mouse hit testing
/// both derive their areas from here so they always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub title: Rect,
    pub card: Rect,
    pub progress: Rect,
    pub buttons: Rect,
    pub prev_button: Rect,
    pub swap_button: Rect,
    pub next_button: Rect,
    pub help: Rect,
}

/// What a screen cell belongs to, for mouse input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Card,
    PrevButton,
    SwapButton,
    NextButton,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        use Constraint::{Length, Min};
        let layout = Layout::vertical([Length(1), Min(6), Length(1), Length(3), Length(1)]);
        let [title, card, progress, buttons, help] = layout.areas(area);
        let [prev_button, swap_button, next_button] = button_areas(buttons);
        Self {
            title,
            card,
            progress,
            buttons,
            prev_button,
            swap_button,
            next_button,
            help,
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        if self.card.contains(position) {
            Some(HitTarget::Card)
        } else if self.prev_button.contains(position) {
            Some(HitTarget::PrevButton)
        } else if self.swap_button.contains(position) {
            Some(HitTarget::SwapButton)
        } else if self.next_button.contains(position) {
            Some(HitTarget::NextButton)
        } else {
            None
        }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let layout = ScreenLayout::new(frame.area());
    tui.pointer.set_layout(layout);

    let view = app.view();

    TitleBar::new(app.deck.section().map(str::to_string), app.status_message.clone())
        .render(frame, layout.title);

    CardFace::new(&view).render(frame, layout.card);

    ProgressBar::new(view.progress, view.position, view.total).render(frame, layout.progress);

    NavButtons::new(view.prev_disabled, view.next_disabled).render(frame, layout.buttons);

    let help = Span::styled(
        HELP_TEXT,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    );
    frame.render_widget(help, layout.help);
}
