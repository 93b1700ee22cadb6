//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing the source and load status
//! - `KeyHints`: Footer listing the available keys
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `CharacterList`: The store-driven view. Its selection state
//!   (`CharacterListState`) handles navigation events.
//!
//! Components receive external data as props, never by reaching into the
//! store themselves:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! CharacterList::new(CharacterListProps::select(store.state()), &mut tui.character_list)
//!     .render(frame, area);
//! ```
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Top status bar)
//! ├── character_list.rs  (Loading / error / list view)
//! └── key_hints.rs       (Footer)
//! ```

pub mod character_list;
pub mod key_hints;
pub mod title_bar;

pub use character_list::{
    CharacterList, CharacterListProps, CharacterListState, CharacterListView, ListEvent, Row,
};
pub use key_hints::KeyHints;
pub use title_bar::{TitleBar, status_text};
