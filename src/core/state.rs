//! # Application State
//!
//! Core business state for castview. Domain types only, no TUI-specific
//! types. Presentation state (list selection) lives in the `tui` module.
//!
//! ```text
//! AppState
//! ├── characters: Vec<Character>   // API response order
//! ├── is_loading: bool             // between Requested and Succeeded/Failed
//! └── error: Option<ErrorInfo>     // set by Failed
//! ```
//!
//! A state is never mutated in place. `reduce()` in action.rs builds the
//! next snapshot and the store swaps it in.

/// A single character as displayed by the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub image_url: String,
}

impl Character {
    pub fn new(id: u64, name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: image_url.into(),
        }
    }
}

/// The error object carried by `Action::Failed`.
///
/// Every failure kind (network, HTTP status, parse) collapses into this
/// one shape; the view only ever reads `message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message: String,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<E: std::error::Error> From<&E> for ErrorInfo {
    fn from(err: &E) -> Self {
        Self::new(err.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub characters: Vec<Character>,
    pub is_loading: bool,
    pub error: Option<ErrorInfo>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
