//! # Actions
//!
//! Everything that can happen to castview's state becomes an `Action`.
//! The loader starts a fetch? That's `Action::Requested`.
//! The API responds? That's `Action::Succeeded(characters)`.
//!
//! `reduce()` takes the current state and an action, then returns the new
//! state. No side effects here. I/O happens in the loader.
//!
//! ```text
//! State + Action  →  reduce()  →  New State
//! ```
//!
//! This makes everything testable: `assert_eq!(*reduce(&state, action), expected)`.
//! And debuggable: the store logs every action, so a session can be replayed.

use std::sync::Arc;

use crate::core::state::{AppState, Character, ErrorInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A load cycle started.
    Requested,
    /// The fetch resolved with these characters, in response order.
    Succeeded(Vec<Character>),
    /// The fetch failed for any reason.
    Failed(ErrorInfo),
}

impl Action {
    /// Short name for log lines (payloads can be large).
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Requested => "Requested",
            Action::Succeeded(_) => "Succeeded",
            Action::Failed(_) => "Failed",
        }
    }
}

/// Pure reducer: `(state, action) → state`.
///
/// Returns the same `Arc` when the transition changes nothing, so callers
/// can detect no-ops with `Arc::ptr_eq`.
///
/// `Requested` keeps a previous error around; only `Succeeded` clears it.
pub fn reduce(state: &Arc<AppState>, action: Action) -> Arc<AppState> {
    let next = match action {
        Action::Requested => AppState {
            is_loading: true,
            ..AppState::clone(state)
        },
        Action::Succeeded(characters) => AppState {
            characters,
            is_loading: false,
            error: None,
        },
        Action::Failed(error) => AppState {
            is_loading: false,
            error: Some(error),
            ..AppState::clone(state)
        },
    };

    if next == **state {
        Arc::clone(state)
    } else {
        Arc::new(next)
    }
}
