use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::AppState;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CharacterList, CharacterListProps, KeyHints, TitleBar, status_text};

/// Draws one frame: title bar, character list, key hints.
pub fn draw_ui(frame: &mut Frame, state: &AppState, tui: &mut TuiState, source_name: &str) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, hints_area] = layout.areas(frame.area());

    TitleBar::new(source_name.to_string(), status_text(state)).render(frame, title_area);

    CharacterList::new(CharacterListProps::select(state), &mut tui.character_list)
        .render(frame, main_area);

    KeyHints.render(frame, hints_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ErrorInfo;
    use crate::test_support::sample_characters;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal
            .draw(|f| draw_ui(f, state, &mut tui, "test-source"))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_ui_loaded() {
        let state = AppState {
            characters: sample_characters(),
            is_loading: false,
            error: None,
        };
        let text = draw(&state);
        assert!(text.contains("castview | test-source | 3 characters"));
        assert!(text.contains("Summer Smith"));
        assert!(text.contains("reload"));
    }

    #[test]
    fn test_draw_ui_error() {
        let state = AppState {
            characters: vec![],
            is_loading: false,
            error: Some(ErrorInfo::new("HTTP 500")),
        };
        let text = draw(&state);
        assert!(text.contains("Load failed"));
        assert!(text.contains("Error: HTTP 500"));
    }
}
