use crate::app::state::AppState;
use crate::table::record::RecordField;
use crate::ui::layout::centered_popup;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

const LABEL_W: u16 = 8;

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(form) = state.edit.as_ref() else {
        return;
    };

    let popup_area = centered_popup(frame.area(), 60, 50, 10);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" Edit member {} ", form.original.id))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_LAVENDER))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 5 || inner.width < 20 {
        return;
    }

    for (row, field) in RecordField::ALL.iter().enumerate() {
        let y = inner.y + 1 + row as u16;
        let active = *field == form.field;
        let input = form.input(*field);

        let label_style = if active {
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::TEXT_SECONDARY)
        };
        let value_style = if active {
            Style::default().fg(Theme::TEXT_PRIMARY).bg(Theme::BG_ELEVATED)
        } else {
            Style::default().fg(Theme::TEXT_PRIMARY)
        };

        let line = Line::from(vec![
            Span::styled(format!(" {:<w$}", field.label(), w = LABEL_W as usize - 1), label_style),
            Span::styled(input.text.as_str(), value_style),
        ]);
        frame.render_widget(Paragraph::new(line), Rect::new(inner.x, y, inner.width, 1));

        if active {
            let cursor_x = inner.x + LABEL_W + input.cursor_col() as u16;
            frame.set_cursor_position((cursor_x.min(inner.right() - 1), y));
        }
    }

    let help_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    let help = Line::from(vec![
        Span::styled(" Tab", Theme::key_hint()),
        Span::styled(" Next field  ", Theme::hint_text()),
        Span::styled("Enter", Theme::key_hint()),
        Span::styled(" Save  ", Theme::hint_text()),
        Span::styled("Esc", Theme::key_hint()),
        Span::styled(" Cancel", Theme::hint_text()),
    ]);
    frame.render_widget(Paragraph::new(help), help_area);
}
