//! # Gesture Classification
//!
//! Turns raw pointer interactions into a `NavigationIntent`.
//!
//! ```text
//!   start ──────────────► end         dx > 0  → Previous (content dragged right)
//!   end ◄────────────── start         dx < 0  → Next
//! ```
//!
//! A swipe only counts when it is long enough, not too vertical, and more
//! horizontal than vertical. Everything else (taps, scrolls, jitter) is
//! `NavigationIntent::None`. Nothing here can fail: degenerate or non-finite
//! input classifies as `None`.
//!
//! Units are whatever the caller measures in; the defaults are pixel values.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The only thing input adapters hand to the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationIntent {
    Previous,
    Next,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub x: f64,
    pub y: f64,
    pub timestamp: Option<Duration>,
}

impl GestureSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, timestamp: None }
    }

    pub fn at(x: f64, y: f64, timestamp: Duration) -> Self {
        Self {
            x,
            y,
            timestamp: Some(timestamp),
        }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A completed interaction: pointer down, optional moves, pointer up.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureEvent {
    pub start: GestureSample,
    pub end: GestureSample,
    pub moves: Vec<GestureSample>,
}

impl GestureEvent {
    pub fn new(start: GestureSample, end: GestureSample) -> Self {
        Self {
            start,
            end,
            moves: Vec::new(),
        }
    }

    pub fn with_moves(mut self, moves: Vec<GestureSample>) -> Self {
        self.moves = moves;
        self
    }
}

pub const DEFAULT_MIN_SWIPE_DISTANCE: f64 = 50.0;
pub const DEFAULT_MAX_VERTICAL_DISTANCE: f64 = 100.0;
pub const DEFAULT_MOVE_SUPPRESS_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct GestureConfig {
    /// Horizontal travel must exceed this.
    pub min_swipe_distance: f64,
    /// Vertical travel must stay below this.
    pub max_vertical_distance: f64,
    /// Horizontal travel past this during a drag suppresses default handling.
    pub move_suppress_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_swipe_distance: DEFAULT_MIN_SWIPE_DISTANCE,
            max_vertical_distance: DEFAULT_MAX_VERTICAL_DISTANCE,
            move_suppress_threshold: DEFAULT_MOVE_SUPPRESS_THRESHOLD,
        }
    }
}

/// Result of classifying a drag: the intent plus whether any move crossed
/// the suppress threshold (the adapter should then swallow default behavior).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOutcome {
    pub intent: NavigationIntent,
    pub suppress_default: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureClassifier {
    pub config: GestureConfig,
}

impl GestureClassifier {
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    pub fn classify(&self, start: GestureSample, end: GestureSample) -> NavigationIntent {
        if !start.is_finite() || !end.is_finite() {
            return NavigationIntent::None;
        }

        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let adx = dx.abs();
        let ady = dy.abs();

        let is_swipe = adx > self.config.min_swipe_distance
            && ady < self.config.max_vertical_distance
            && adx > ady;

        if !is_swipe {
            NavigationIntent::None
        } else if dx > 0.0 {
            NavigationIntent::Previous
        } else {
            NavigationIntent::Next
        }
    }

    /// Whether an in-progress drag has moved far enough sideways that the
    /// adapter should suppress default scroll/selection handling.
    pub fn should_suppress_default(&self, start_x: f64, current_x: f64) -> bool {
        (current_x - start_x).abs() > self.config.move_suppress_threshold
    }

    pub fn classify_drag_suppressed(&self, event: &GestureEvent) -> DragOutcome {
        let suppress_default = event
            .moves
            .iter()
            .any(|sample| self.should_suppress_default(event.start.x, sample.x));

        DragOutcome {
            intent: self.classify(event.start, event.end),
            suppress_default,
        }
    }

    /// Left half of the element → Previous, right half (midpoint included) → Next.
    pub fn classify_click_zone(
        &self,
        click_x: f64,
        element_left: f64,
        element_width: f64,
    ) -> NavigationIntent {
        if !click_x.is_finite()
            || !element_left.is_finite()
            || !element_width.is_finite()
            || element_width <= 0.0
        {
            return NavigationIntent::None;
        }

        if click_x - element_left < element_width / 2.0 {
            NavigationIntent::Previous
        } else {
            NavigationIntent::Next
        }
    }
}

/// Live drag state for adapters that see down/move/up one event at a time.
#[derive(Debug, Default)]
pub struct DragTracker {
    start: Option<GestureSample>,
    moves: Vec<GestureSample>,
    suppressing: bool,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer down. Any unfinished drag is discarded.
    pub fn begin(&mut self, sample: GestureSample) {
        self.start = Some(sample);
        self.moves.clear();
        self.suppressing = false;
    }

    /// Pointer moved. Returns whether default handling should be suppressed.
    /// Moves without a preceding `begin` are ignored.
    pub fn update(&mut self, classifier: &GestureClassifier, sample: GestureSample) -> bool {
        let Some(start) = self.start else {
            return false;
        };
        self.moves.push(sample);
        if classifier.should_suppress_default(start.x, sample.x) {
            self.suppressing = true;
        }
        self.suppressing
    }

    /// Pointer up. Returns the classified drag, or `None` if no drag was active.
    pub fn finish(
        &mut self,
        classifier: &GestureClassifier,
        end: GestureSample,
    ) -> Option<DragOutcome> {
        let start = self.start.take()?;
        let event = GestureEvent::new(start, end).with_moves(std::mem::take(&mut self.moves));
        self.suppressing = false;
        Some(classifier.classify_drag_suppressed(&event))
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.moves.clear();
        self.suppressing = false;
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    pub fn start(&self) -> Option<GestureSample> {
        self.start
    }
}
