use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::search_state::SearchKey;

/// Classify a key press for the suggestion controller
pub fn classify_key(key: &KeyEvent) -> SearchKey {
    match key.code {
        KeyCode::Down => SearchKey::NavigateDown,
        KeyCode::Up => SearchKey::NavigateUp,
        KeyCode::Enter if key.modifiers.is_empty() => SearchKey::Commit,
        _ => SearchKey::Other,
    }
}

/// Keys the single-line textarea must never see
///
/// Enter, Ctrl+M and Ctrl+J all insert a newline in tui-textarea.
pub fn is_newline_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
