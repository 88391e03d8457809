use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, Focus};
use crate::input::input_render;
use crate::result_box::result_box_render;
use crate::search::search_render;

pub const HEADING_TEXT: &str = "Search Star Wars Characters";
const HELP_TEXT: &str = " ↑/↓ navigate  Enter select  Tab switch focus  Esc quit";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let bounds = frame.area();

        let (heading_area, input_area, result_area, help_area) =
            (layout[0], layout[1], layout[2], layout[3]);

        render_heading(frame, heading_area);

        input_render::render_field(
            &mut self.input,
            self.focus == Focus::SearchInput,
            frame,
            input_area,
        );

        result_box_render::render_box(
            &self.result_box,
            self.focus == Focus::ResultBox,
            frame,
            result_area,
        );

        self.render_help_line(frame, help_area);

        // Dropdown last so it overlays the detail box
        self.input_area = Some(input_area);
        self.dropdown =
            search_render::render_dropdown(&self.search, frame, input_area, bounds);
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.config_warning {
            Some(warning) => Line::from(Span::styled(
                format!(" ⚠ {}", warning),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray))),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_heading(frame: &mut Frame, area: Rect) {
    let heading = Paragraph::new(Span::styled(
        HEADING_TEXT,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
    .centered();
    frame.render_widget(heading, area);
}
