//! # Pointer Input
//!
//! Mouse adapter for the study screen. Terminal cells are scaled to
//! approximate pixels (`cell_width` × `cell_height`) so the gesture
//! thresholds keep their pixel meaning.
//!
//! ```text
//! MouseDown ──► DragTracker::begin       (only on the card or a button)
//! MouseDrag ──► DragTracker::update      (crossing the move threshold marks a drag)
//! MouseUp   ──► DragTracker::finish
//!                 ├── swipe recognised        → Navigate(intent)
//!                 ├── drag, but not a swipe   → nothing
//!                 └── no drag (a click)       → button action or card click zone
//! ```

use log::debug;

use crate::core::gesture::{DragTracker, GestureClassifier, GestureSample, NavigationIntent};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::ui::{HitTarget, ScreenLayout};

/// High-level events emitted by the pointer handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Navigate(NavigationIntent),
    SwapSides,
}

pub struct PointerInput {
    classifier: GestureClassifier,
    tracker: DragTracker,
    cell_width: f64,
    cell_height: f64,
    /// Areas from the last draw, used for hit testing.
    layout: ScreenLayout,
}

impl PointerInput {
    pub fn new(classifier: GestureClassifier, cell_width: f64, cell_height: f64) -> Self {
        Self {
            classifier,
            tracker: DragTracker::new(),
            cell_width,
            cell_height,
            layout: ScreenLayout::default(),
        }
    }

    pub fn set_layout(&mut self, layout: ScreenLayout) {
        self.layout = layout;
    }

    pub fn layout(&self) -> ScreenLayout {
        self.layout
    }

    fn sample(&self, column: u16, row: u16) -> GestureSample {
        GestureSample::new(
            column as f64 * self.cell_width,
            row as f64 * self.cell_height,
        )
    }

    /// A click that did not turn into a drag.
    fn click(&self, column: u16, row: u16) -> Option<PointerEvent> {
        match self.layout.hit_test(column, row)? {
            HitTarget::PrevButton => Some(PointerEvent::Navigate(NavigationIntent::Previous)),
            HitTarget::NextButton => Some(PointerEvent::Navigate(NavigationIntent::Next)),
            HitTarget::SwapButton => Some(PointerEvent::SwapSides),
            HitTarget::Card => {
                let card = self.layout.card;
                // Measure from the middle of the clicked cell.
                let click_x = (column as f64 + 0.5) * self.cell_width;
                let intent = self.classifier.classify_click_zone(
                    click_x,
                    card.x as f64 * self.cell_width,
                    card.width as f64 * self.cell_width,
                );
                match intent {
                    NavigationIntent::None => None,
                    intent => Some(PointerEvent::Navigate(intent)),
                }
            }
        }
    }
}

impl EventHandler for PointerInput {
    type Event = PointerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match *event {
            TuiEvent::MouseDown(column, row) => {
                if self.layout.hit_test(column, row).is_some() {
                    self.tracker.begin(self.sample(column, row));
                } else {
                    self.tracker.cancel();
                }
                None
            }
            TuiEvent::MouseDrag(column, row) => {
                let sample = self.sample(column, row);
                if self.tracker.update(&self.classifier, sample) {
                    debug!("Drag past move threshold at ({}, {})", column, row);
                }
                None
            }
            TuiEvent::MouseUp(column, row) => {
                let end = self.sample(column, row);
                let outcome = self.tracker.finish(&self.classifier, end)?;
                if outcome.intent != NavigationIntent::None {
                    debug!("Swipe recognised: {:?}", outcome.intent);
                    Some(PointerEvent::Navigate(outcome.intent))
                } else if outcome.suppress_default {
                    None
                } else {
                    self.click(column, row)
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn input() -> PointerInput {
        let mut input = PointerInput::new(GestureClassifier::default(), 8.0, 16.0);
        input.set_layout(ScreenLayout::new(Rect::new(0, 0, 80, 24)));
        input
    }

    fn gesture(input: &mut PointerInput, events: &[TuiEvent]) -> Option<PointerEvent> {
        let mut last = None;
        for event in events {
            last = input.handle_event(event);
        }
        last
    }

    #[test]
    fn test_rightward_swipe_goes_back() {
        let mut input = input();
        let result = gesture(
            &mut input,
            &[
                TuiEvent::MouseDown(10, 10),
                TuiEvent::MouseDrag(12, 10),
                TuiEvent::MouseDrag(20, 10),
                TuiEvent::MouseUp(30, 10),
            ],
        );
        assert_eq!(result, Some(PointerEvent::Navigate(NavigationIntent::Previous)));
    }

    #[test]
    fn test_leftward_swipe_goes_forward() {
        let mut input = input();
        let result = gesture(
            &mut input,
            &[
                TuiEvent::MouseDown(60, 10),
                TuiEvent::MouseDrag(50, 11),
                TuiEvent::MouseUp(40, 11),
            ],
        );
        assert_eq!(result, Some(PointerEvent::Navigate(NavigationIntent::Next)));
    }

    #[test]
    fn test_click_zones_on_card() {
        let mut input = input();
        let left = gesture(&mut input, &[TuiEvent::MouseDown(5, 8), TuiEvent::MouseUp(5, 8)]);
        assert_eq!(left, Some(PointerEvent::Navigate(NavigationIntent::Previous)));

        let right = gesture(&mut input, &[TuiEvent::MouseDown(70, 8), TuiEvent::MouseUp(70, 8)]);
        assert_eq!(right, Some(PointerEvent::Navigate(NavigationIntent::Next)));

        // Column 40 starts the right half of an 80-wide card.
        let middle = gesture(&mut input, &[TuiEvent::MouseDown(40, 8), TuiEvent::MouseUp(40, 8)]);
        assert_eq!(middle, Some(PointerEvent::Navigate(NavigationIntent::Next)));
        let just_left = gesture(&mut input, &[TuiEvent::MouseDown(39, 8), TuiEvent::MouseUp(39, 8)]);
        assert_eq!(just_left, Some(PointerEvent::Navigate(NavigationIntent::Previous)));
    }

    #[test]
    fn test_small_jitter_still_counts_as_click() {
        let mut input = input();
        let result = gesture(
            &mut input,
            &[
                TuiEvent::MouseDown(10, 10),
                TuiEvent::MouseDrag(11, 10),
                TuiEvent::MouseUp(11, 10),
            ],
        );
        assert_eq!(result, Some(PointerEvent::Navigate(NavigationIntent::Previous)));
    }

    #[test]
    fn test_short_drag_is_ignored() {
        let mut input = input();
        let result = gesture(
            &mut input,
            &[
                TuiEvent::MouseDown(40, 10),
                TuiEvent::MouseDrag(42, 10),
                TuiEvent::MouseUp(44, 10),
            ],
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_vertical_drag_is_ignored() {
        let mut input = input();
        let result = gesture(
            &mut input,
            &[
                TuiEvent::MouseDown(10, 2),
                TuiEvent::MouseDrag(12, 8),
                TuiEvent::MouseUp(12, 15),
            ],
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_buttons() {
        let mut input = input();
        let layout = input.layout();
        let row = layout.buttons.y + 1;

        let prev = layout.prev_button.x + 2;
        let swap = layout.swap_button.x + 2;
        let next = layout.next_button.x + 2;

        assert_eq!(
            gesture(&mut input, &[TuiEvent::MouseDown(prev, row), TuiEvent::MouseUp(prev, row)]),
            Some(PointerEvent::Navigate(NavigationIntent::Previous))
        );
        assert_eq!(
            gesture(&mut input, &[TuiEvent::MouseDown(swap, row), TuiEvent::MouseUp(swap, row)]),
            Some(PointerEvent::SwapSides)
        );
        assert_eq!(
            gesture(&mut input, &[TuiEvent::MouseDown(next, row), TuiEvent::MouseUp(next, row)]),
            Some(PointerEvent::Navigate(NavigationIntent::Next))
        );
    }

    #[test]
    fn test_press_outside_interactive_areas() {
        let mut input = input();
        let result = gesture(&mut input, &[TuiEvent::MouseDown(10, 0), TuiEvent::MouseUp(10, 0)]);
        assert_eq!(result, None);
    }

    #[test]
    fn test_release_without_press() {
        let mut input = input();
        assert_eq!(input.handle_event(&TuiEvent::MouseUp(10, 10)), None);
        assert_eq!(input.handle_event(&TuiEvent::MouseDrag(10, 10)), None);
    }

    #[test]
    fn test_non_mouse_events_are_ignored() {
        let mut input = input();
        assert_eq!(input.handle_event(&TuiEvent::Next), None);
    }
}
