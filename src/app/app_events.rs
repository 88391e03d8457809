use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::{App, Focus};
use super::mouse_click;
use crate::search::SearchKey;
use crate::search::search_events::{classify_key, is_newline_key};

impl App {
    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
            Event::Paste(text) => self.handle_paste_event(&text, now),
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key, now) {
            return;
        }

        match self.focus {
            Focus::SearchInput => self.handle_input_key(key, now),
            Focus::ResultBox => {}
        }
    }

    /// Keys that work regardless of focus. Returns true if handled.
    fn handle_global_keys(&mut self, key: KeyEvent, now: Instant) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Tab | KeyCode::BackTab => {
                let next = match self.focus {
                    Focus::SearchInput => Focus::ResultBox,
                    Focus::ResultBox => Focus::SearchInput,
                };
                self.set_focus(next, now);
                true
            }
            _ => false,
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent, now: Instant) {
        let search_key = classify_key(&key);
        if search_key != SearchKey::Other
            && self.search.on_key(search_key, &mut self.result_box, now)
        {
            if search_key == SearchKey::Commit {
                self.sync_input_with_search();
            }
            return;
        }

        // Single-line input: newline keys never reach the textarea
        if is_newline_key(&key) {
            return;
        }

        if self.input.textarea.input(key) {
            self.search.on_text_change(self.input.query(), now);
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            mouse_click::handle_click(self, mouse.column, mouse.row, now);
        }
    }

    pub fn handle_paste_event(&mut self, text: &str, now: Instant) {
        if self.focus != Focus::SearchInput {
            return;
        }
        if self.input.paste(text) {
            self.search.on_text_change(self.input.query(), now);
        }
    }
}
