//! # Core Application Logic
//!
//! This module contains castview's state management.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • reduce() (reducer)   │
//!                    │  • Store (dispatch)     │
//!                    │  • load() (async)       │
//!                    └───────────┬─────────────┘
//!                                │ subscribe / snapshot
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `AppState`, `Character`, `ErrorInfo`
//! - [`action`]: The `Action` enum and the pure `reduce()` function
//! - [`store`]: The `Store` that owns state and notifies subscribers
//! - [`loader`]: One request/success/failure cycle against a `CharacterSource`
//! - [`config`]: Config file and override resolution

pub mod action;
pub mod config;
pub mod loader;
pub mod state;
pub mod store;
