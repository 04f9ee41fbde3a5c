use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let hints = if state.edit.is_some() {
        "Tab field  Enter save  Esc cancel"
    } else {
        match state.focus {
            FocusPanel::Search => "Esc table  ^U clear",
            FocusPanel::Table => "/ search  Space select  a page  e edit  d delete  ←→ page  q quit",
        }
    };

    let focus_name = if state.edit.is_some() {
        "EDIT"
    } else {
        match state.focus {
            FocusPanel::Search => "SEARCH",
            FocusPanel::Table => "TABLE",
        }
    };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let tail = format!(" {}  [{}] ", hints, focus_name);
    let remaining = (area.width as usize).saturating_sub(used + tail.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        tail,
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
