//! Loading and error placeholders shown instead of the table.

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

pub fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let glyph = SPINNER[state.spinner_frame % SPINNER.len()];
    let line = Line::from(vec![
        Span::styled(format!("  {} ", glyph), Theme::loading()),
        Span::styled("Loading...", Theme::loading()),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg());
    frame.render_widget(Paragraph::new(line).block(block), area);
}

pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(Span::styled("  Could not load members", Theme::error())),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(Theme::TEXT_SECONDARY),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_RED))
        .style(Theme::panel_bg());
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
