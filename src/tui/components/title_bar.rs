//! # TitleBar Component
//!
//! Top status bar: app name, the source being shown and a short status.
//!
//! Stateless. It receives all data as props:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(source.name().to_string(), status_text(store.state()));
//! title_bar.render(frame, title_area);
//! ```
//!
//! Rendered text:
//!
//! 1. **With status**: `"castview | https://.../api/character | 20 characters"`
//! 2. **Without status**: `"castview | https://.../api/character"`

use crate::core::state::AppState;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Name of the character source (the endpoint URL for HTTP sources)
    pub source_name: String,
    /// Short status, e.g. "Loading..." or "20 characters"
    pub status_message: String,
}

impl TitleBar {
    pub fn new(source_name: String, status_message: String) -> Self {
        Self {
            source_name,
            status_message,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("castview | {}", self.source_name)
        } else {
            format!("castview | {} | {}", self.source_name, self.status_message)
        }
    }
}

/// Status shown in the title bar for a given state.
pub fn status_text(state: &AppState) -> String {
    if state.is_loading {
        "Loading...".to_string()
    } else if state.error.is_some() {
        "Load failed".to_string()
    } else {
        match state.characters.len() {
            1 => "1 character".to_string(),
            n => format!("{n} characters"),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(span, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{Character, ErrorInfo};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_title_bar_with_status_message() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut title_bar = TitleBar::new(
            "http://localhost/api/character".to_string(),
            "Loading...".to_string(),
        );

        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("castview"));
        assert!(text.contains("http://localhost/api/character"));
        assert!(text.contains("Loading..."));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let title_bar = TitleBar::new("static".to_string(), "".to_string());
        assert_eq!(title_bar.text(), "castview | static");
    }

    #[test]
    fn test_status_text() {
        let mut state = AppState::new();
        assert_eq!(status_text(&state), "0 characters");

        state.characters = vec![Character::new(1, "Rick", "u")];
        assert_eq!(status_text(&state), "1 character");

        state.error = Some(ErrorInfo::new("x"));
        assert_eq!(status_text(&state), "Load failed");

        state.is_loading = true;
        assert_eq!(status_text(&state), "Loading...");
    }
}
