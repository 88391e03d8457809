use ratatui::style::{Color, Modifier, Style};
use tui_textarea::TextArea;

pub const PLACEHOLDER_TEXT: &str = "Type 2 or more characters...";

/// Single-line search input
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_placeholder_text(PLACEHOLDER_TEXT);
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());

        Self { textarea }
    }

    /// Get the current input text
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the whole line, leaving the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
    }

    /// Insert pasted text, flattening line breaks into spaces
    ///
    /// Returns true if the text changed.
    pub fn paste(&mut self, text: &str) -> bool {
        let flattened: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        if flattened.is_empty() {
            return false;
        }
        self.textarea.insert_str(flattened)
    }

    /// Show or hide the cursor depending on focus
    pub fn set_focused(&mut self, focused: bool) {
        let style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(style);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_input_state() {
        let state = InputState::new();
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_query_after_insert() {
        let mut state = InputState::new();
        state.textarea.insert_str("luke");
        assert_eq!(state.query(), "luke");
    }

    #[test]
    fn test_set_text_replaces_line() {
        let mut state = InputState::new();
        state.textarea.insert_str("sky");
        state.textarea.move_cursor(tui_textarea::CursorMove::Head);

        state.set_text("Luke Skywalker");

        assert_eq!(state.query(), "Luke Skywalker");
        assert_eq!(state.textarea.cursor(), (0, "Luke Skywalker".chars().count()));
    }

    #[test]
    fn test_set_text_empty_clears() {
        let mut state = InputState::new();
        state.textarea.insert_str("vader");

        state.set_text("");

        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut state = InputState::new();

        assert!(state.paste("obi\nwan"));

        assert_eq!(state.textarea.lines().len(), 1);
        assert_eq!(state.query(), "obi wan");
    }

    #[test]
    fn test_paste_empty_is_no_change() {
        let mut state = InputState::new();
        assert!(!state.paste(""));
    }
}
