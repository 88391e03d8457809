//! Detail box rendering
//!
//! Shows the selected character as a label/value table, or a hint when
//! nothing has been selected yet.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use super::ResultBoxState;

const LABEL_WIDTH: u16 = 12;
pub const EMPTY_TEXT: &str = "Select a character to see their details";

pub fn render_box(state: &ResultBoxState, focused: bool, frame: &mut Frame, area: Rect) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Details ")
        .border_style(Style::default().fg(border_color));

    let Some(character) = state.selected() else {
        let hint = Paragraph::new(Span::styled(
            EMPTY_TEXT,
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let label_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let rows: Vec<Row> = character
        .attributes()
        .into_iter()
        .map(|(label, value)| {
            Row::new(vec![
                Span::styled(label, label_style),
                Span::styled(value, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(LABEL_WIDTH), Constraint::Min(1)])
        .column_spacing(1)
        .block(block);

    frame.render_widget(table, area);
}
