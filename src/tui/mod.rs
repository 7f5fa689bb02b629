//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the study
//! screen, and translates keyboard and mouse input into `core::Action`s.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Input Normalisation
//!
//! Every input source ends up as one `Action`:
//!
//! - **Keys**: arrows / `h` `l` → `Navigate`, space → `SwapSides`, ...
//! - **Mouse**: `PointerInput` turns down/drag/up sequences into swipes,
//!   card click zones, or button presses.
//!
//! ## Background Work
//!
//! Card loading and image lookups run as tokio tasks and report back through
//! an mpsc channel of `Action`s, drained once per loop iteration.

mod component;
mod components;
mod event;
pub mod pointer;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::gesture::{GestureClassifier, NavigationIntent};
use crate::core::loader::{self, DataSource};
use crate::core::state::App;
use crate::images::{HttpImageProvider, ImageProvider, resolve_image};
use crate::tui::component::EventHandler;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::pointer::{PointerEvent, PointerInput};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub pointer: PointerInput,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            pointer: PointerInput::new(
                GestureClassifier::new(config.gesture),
                config.cell_width,
                config.cell_height,
            ),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the image provider from config. `None` means emoji-only lookups.
pub fn build_image_provider(config: &ResolvedConfig) -> Option<Arc<dyn ImageProvider>> {
    if !config.images_enabled {
        return None;
    }
    let base_url = config.image_base_url.as_ref()?;
    match HttpImageProvider::new(base_url.clone()) {
        Ok(provider) => {
            info!("Image lookups via {}", provider.base_url());
            Some(Arc::new(provider))
        }
        Err(e) => {
            warn!("Image provider disabled: {}", e);
            None
        }
    }
}

/// Map a keyboard-level event to the action it stands for.
fn key_action(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Previous => Some(Action::Navigate(NavigationIntent::Previous)),
        TuiEvent::Next => Some(Action::Navigate(NavigationIntent::Next)),
        TuiEvent::SwapSides => Some(Action::SwapSides),
        TuiEvent::CycleFront => Some(Action::CycleFront),
        TuiEvent::CycleBack => Some(Action::CycleBack),
        TuiEvent::CycleSection => Some(Action::CycleSection),
        TuiEvent::Reset => Some(Action::Reset),
        TuiEvent::MouseDown(..)
        | TuiEvent::MouseDrag(..)
        | TuiEvent::MouseUp(..)
        | TuiEvent::Resize => None,
    }
}

fn pointer_action(event: PointerEvent) -> Action {
    match event {
        PointerEvent::Navigate(intent) => Action::Navigate(intent),
        PointerEvent::SwapSides => Action::SwapSides,
    }
}

/// Everything a spawned image lookup needs.
struct ImageLookup {
    provider: Option<Arc<dyn ImageProvider>>,
    timeout: Duration,
}

/// Apply an action and carry out its effect. Returns true when the app should quit.
fn dispatch(
    app: &mut App,
    action: Action,
    images: &ImageLookup,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match update(app, action) {
        Effect::Quit => true,
        Effect::FetchImage(key) => {
            spawn_image_lookup(key, images, tx.clone());
            false
        }
        Effect::None => false,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&config);
    let images = ImageLookup {
        provider: build_image_provider(&config),
        timeout: config.image_timeout,
    };

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    spawn_load(config.data_source.clone(), tx.clone());

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(100));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;

            let action = match event {
                TuiEvent::Resize => continue,
                TuiEvent::MouseDown(..) | TuiEvent::MouseDrag(..) | TuiEvent::MouseUp(..) => {
                    tui.pointer.handle_event(&event).map(pointer_action)
                }
                _ => key_action(&event),
            };

            if let Some(action) = action {
                debug!("Input action: {:?}", action);
                if dispatch(&mut app, action, &images, &tx) {
                    should_quit = true;
                    break;
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (deck load, image lookups)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, action, &images, &tx) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    info!("Flashdeck shutting down");
    Ok(())
}

fn spawn_load(source: DataSource, tx: mpsc::Sender<Action>) {
    info!("Spawning card load from {}", source);
    tokio::spawn(async move {
        let action = match loader::load_source(&source).await {
            Ok(cards) => Action::DeckLoaded(cards),
            Err(e) => Action::LoadFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send load result: receiver dropped");
        }
    });
}

fn spawn_image_lookup(key: String, images: &ImageLookup, tx: mpsc::Sender<Action>) {
    debug!("Spawning image lookup for '{}'", key);
    let provider = images.provider.clone();
    let timeout = images.timeout;
    tokio::spawn(async move {
        let result = resolve_image(provider.as_deref(), &key, timeout).await;
        if tx.send(Action::ImageResolved { key, result }).is_err() {
            warn!("Failed to send image result: receiver dropped");
        }
    });
}
