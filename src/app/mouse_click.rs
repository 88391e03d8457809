//! Mouse click handling
//!
//! Suggestion rows activate on button down, before focus moves, so a click on
//! the dropdown never races the blur it would otherwise cause.

use std::time::Instant;

use ratatui::layout::Position;

use super::app_state::{App, Focus};

/// Handle a left button press at the given cell
pub fn handle_click(app: &mut App, column: u16, row: u16, now: Instant) {
    if let Some(dropdown) = app.dropdown {
        if let Some(index) = dropdown.row_at(column, row) {
            click_suggestion(app, index, now);
            return;
        }
        // Border and title of the dropdown keep focus where it is
        if dropdown.contains(column, row) {
            return;
        }
    }

    let on_input = app
        .input_area
        .is_some_and(|area| area.contains(Position::new(column, row)));

    if on_input {
        app.set_focus(Focus::SearchInput, now);
    } else {
        app.set_focus(Focus::ResultBox, now);
    }
}

fn click_suggestion(app: &mut App, index: usize, now: Instant) {
    if app.search.on_row_activate(index, &mut app.result_box, now) {
        app.sync_input_with_search();
        app.dropdown = None;
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
