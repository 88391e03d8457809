//! Search input rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};

use super::InputState;

pub const INPUT_TITLE: &str = " Search Star Wars Characters ";

/// Render the search input with focus-aware border color
pub fn render_field(input: &mut InputState, focused: bool, frame: &mut Frame, area: Rect) {
    let border_color = if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    input.set_focused(focused);
    input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(INPUT_TITLE)
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(&input.textarea, area);
}
