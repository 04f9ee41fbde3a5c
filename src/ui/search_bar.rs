use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Search && state.edit.is_none();
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    let block = Block::default()
        .title(" Search ")
        .title_style(if focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .style(bg);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let query = &state.search.text;
    let text = if query.is_empty() && !focused {
        Span::styled(
            "Search by name, email or role (press /)",
            Style::default().fg(Theme::TEXT_MUTED),
        )
    } else {
        Span::styled(query.as_str(), Theme::input_text())
    };

    let line = Line::from(vec![
        Span::styled("⌕ ", Style::default().fg(Theme::ACCENT_TEAL)),
        text,
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    if focused && inner.width > 0 {
        // Prompt glyph "⌕ " is 2 columns wide
        let prompt_offset = 2u16;
        let cursor_x = inner.x + prompt_offset + state.search.cursor_col() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}
