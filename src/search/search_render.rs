//! Suggestion dropdown rendering
//!
//! Draws the suggestion list (or the empty/loading indicator) directly below
//! the input field and reports where the rows landed for pointer hit-testing.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::highlight::highlight_spans;
use super::search_state::SearchState;
use crate::widgets::popup;

// Dropdown display constants
pub const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const MIN_POPUP_WIDTH: u16 = 24;
const ACTIVE_MARKER: &str = "► ";
const INACTIVE_MARKER: &str = "  ";

pub const NO_RESULTS_TEXT: &str = "No suggestions found";
pub const LOADING_TEXT: &str = "Searching…";

/// Placement of the rendered suggestion rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownLayout {
    /// Outer area including the border
    pub area: Rect,
    /// Index of the suggestion drawn on the first row
    pub first_row: usize,
    /// Number of suggestion rows drawn
    pub row_count: usize,
}

impl DropdownLayout {
    /// Suggestion index under the given terminal cell, if any
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = popup::inner_rect(self.area);
        if column < inner.x || column >= inner.right() || row < inner.y || row >= inner.bottom() {
            return None;
        }

        let offset = (row - inner.y) as usize;
        (offset < self.row_count).then_some(self.first_row + offset)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom()
    }
}

/// First suggestion index to draw so the active row stays in view
pub fn window_start(active: Option<usize>, len: usize, max_visible: usize) -> usize {
    let start = match active {
        Some(index) if index >= max_visible => index + 1 - max_visible,
        _ => 0,
    };
    start.min(len.saturating_sub(max_visible))
}

/// Render the dropdown below `input_area`, clamped to `bounds`
///
/// Returns the row layout when suggestion rows were drawn.
pub fn render_dropdown(
    state: &SearchState,
    frame: &mut Frame,
    input_area: Rect,
    bounds: Rect,
) -> Option<DropdownLayout> {
    if state.is_suggestion_list_visible() {
        return Some(render_suggestions(state, frame, input_area, bounds));
    }

    if state.is_no_results_visible() {
        render_empty_state(state, frame, input_area, bounds);
    }

    None
}

fn render_suggestions(
    state: &SearchState,
    frame: &mut Frame,
    input_area: Rect,
    bounds: Rect,
) -> DropdownLayout {
    let suggestions = state.suggestions();
    let visible_count = suggestions.len().min(MAX_VISIBLE_SUGGESTIONS);
    let popup_height = (visible_count as u16) + POPUP_BORDER_HEIGHT;

    let max_name_width = suggestions
        .iter()
        .map(|s| s.name.width())
        .max()
        .unwrap_or(0);
    let popup_width = ((max_name_width + ACTIVE_MARKER.width()) as u16 + POPUP_PADDING)
        .max(MIN_POPUP_WIDTH)
        .min(input_area.width);

    let popup_area = popup::popup_below_anchor(input_area, popup_width, popup_height, bounds);

    // Rows that fit once the popup is clamped to the screen
    let capacity = visible_count
        .min(popup_area.height.saturating_sub(POPUP_BORDER_HEIGHT) as usize);

    let active = state.active_index();
    let first_row = window_start(active, suggestions.len(), capacity);
    let query = state.query();

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .skip(first_row)
        .take(capacity)
        .map(|(i, suggestion)| {
            let is_active = active == Some(i);
            let (base, highlight) = if is_active {
                (
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )
            } else {
                (
                    Style::default().fg(Color::White).bg(Color::Black),
                    Style::default()
                        .fg(Color::Yellow)
                        .bg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
            };

            let marker = if is_active { ACTIVE_MARKER } else { INACTIVE_MARKER };
            let mut spans = vec![Span::styled(marker, base)];
            match highlight_spans(&suggestion.name, query) {
                Some(parts) => {
                    spans.push(Span::styled(parts.prefix, base));
                    spans.push(Span::styled(parts.matched, highlight));
                    spans.push(Span::styled(parts.suffix, base));
                }
                None => spans.push(Span::styled(suggestion.name.as_str(), base)),
            }

            ListItem::new(Line::from(spans)).style(base)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let title = if state.is_loading() {
        format!(" Suggestions ({}) {} ", suggestions.len(), LOADING_TEXT)
    } else {
        format!(" Suggestions ({}) ", suggestions.len())
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);

    DropdownLayout {
        area: popup_area,
        first_row,
        row_count: capacity,
    }
}

fn render_empty_state(state: &SearchState, frame: &mut Frame, input_area: Rect, bounds: Rect) {
    let (text, color) = if state.is_loading() {
        (LOADING_TEXT, Color::Cyan)
    } else {
        (NO_RESULTS_TEXT, Color::DarkGray)
    };

    let popup_width = (text.width() as u16 + POPUP_PADDING)
        .max(MIN_POPUP_WIDTH)
        .min(input_area.width);
    let popup_area =
        popup::popup_below_anchor(input_area, popup_width, 1 + POPUP_BORDER_HEIGHT, bounds);

    popup::clear_area(frame, popup_area);

    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {}", text),
        Style::default().fg(color).add_modifier(Modifier::ITALIC),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(paragraph, popup_area);
}

#[cfg(test)]
#[path = "search_render_tests.rs"]
mod search_render_tests;
