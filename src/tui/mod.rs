//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, renders the store's state,
//! and translates keyboard events into load cycles or selection changes.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//!   ┌──────────── poll keys ◄───────────┐
//!   │                                   │
//!   ▼                                   │
//! r → dispatch(Requested) + spawn fetch │
//!                              │        │
//!            tokio task ───────┘        │
//!            sends Succeeded/Failed     │
//!                 │                     │
//!                 ▼                     │
//! drain channel → dispatch → redraw ────┘
//! ```
//!
//! All dispatches happen on the loop thread. Fetches run on tokio tasks and
//! report back through an `mpsc` channel. Overlapping reloads are not
//! coordinated; the last fetch to finish wins.
//!
//! The loop only redraws when a subscriber flagged a state change, an input
//! event arrived, or the terminal was resized.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::cell::Cell;
use std::io::stdout;
use std::rc::Rc;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::api::{CharacterSource, HttpCharacterSource};
use crate::core::action::Action;
use crate::core::config::ResolvedConfig;
use crate::core::loader::outcome;
use crate::core::store::Store;
use crate::tui::component::EventHandler;
use crate::tui::components::{CharacterListState, ListEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of the store)
#[derive(Debug, Default)]
pub struct TuiState {
    pub character_list: CharacterListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// What the loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Continue,
    Reload,
    Quit,
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn CharacterSource> = Arc::new(HttpCharacterSource::new(config.endpoint));
    let mut store = Store::new();
    let mut tui = TuiState::new();

    // The view subscribes to the store: any dispatch marks the frame dirty
    let needs_redraw = Rc::new(Cell::new(true));
    let redraw_flag = Rc::clone(&needs_redraw);
    store.subscribe(move |_| redraw_flag.set(true));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    // Channel for actions from fetch tasks
    let (tx, rx) = mpsc::channel();

    // Initial load on mount
    start_load(&mut store, &source, &tx);

    let result = loop {
        if needs_redraw.replace(false) {
            let state = store.snapshot();
            if let Err(e) =
                terminal.draw(|f| ui::draw_ui(f, &state, &mut tui, source.name()))
            {
                break Err(e);
            }
        }

        let timeout = std::time::Duration::from_millis(250);
        let first_event = poll_event_timeout(timeout);

        let mut control = Control::Continue;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw.set(true);
            match apply_event(event, &mut tui) {
                Control::Continue => {}
                Control::Reload => start_load(&mut store, &source, &tx),
                Control::Quit => {
                    control = Control::Quit;
                    break;
                }
            }
        }

        if control == Control::Quit {
            break Ok(());
        }

        // Handle fetch results
        while let Ok(action) = rx.try_recv() {
            debug!("Event loop received: {}", action.kind());
            store.dispatch(action);
        }
    };

    ratatui::restore();
    info!("castview shutting down");
    result
}

/// Routes one input event. Selection changes are handled here directly.
fn apply_event(event: TuiEvent, tui: &mut TuiState) -> Control {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Control::Quit,
        TuiEvent::Reload => Control::Reload,
        TuiEvent::Resize => Control::Continue,
        TuiEvent::CursorUp
        | TuiEvent::CursorDown
        | TuiEvent::PageUp
        | TuiEvent::PageDown
        | TuiEvent::Home
        | TuiEvent::End => {
            if let Some(ListEvent::SelectionChanged(index)) =
                tui.character_list.handle_event(&event)
            {
                debug!("Selection moved to row {}", index);
            }
            Control::Continue
        }
    }
}

/// Starts a load cycle: dispatches `Requested` now, the outcome arrives on `tx`.
fn start_load(store: &mut Store, source: &Arc<dyn CharacterSource>, tx: &mpsc::Sender<Action>) {
    info!("Loading characters from {}", source.name());
    store.dispatch(Action::Requested);
    spawn_load(Arc::clone(source), tx.clone());
}

fn spawn_load(
    source: Arc<dyn CharacterSource>,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let action = outcome(source.fetch_characters().await);
        if tx.send(action).is_err() {
            warn!("Failed to send load result: receiver dropped");
        }
    })
}
