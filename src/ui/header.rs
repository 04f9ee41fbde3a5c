use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " Admin UI ",
            Style::default()
                .fg(Theme::BG_DARK)
                .bg(Theme::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  member management", Theme::hint_text()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
