use crate::app::state::*;
use crate::table::TableView;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
    TableState,
};

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";
/// Header line plus its bottom margin.
const HEADER_ROWS: u16 = 2;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, view: &TableView) {
    let focused = state.focus == FocusPanel::Table && state.edit.is_none();
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    let title = match view.range {
        Some((first, last)) => format!(
            " Members {}–{} of {} ",
            first, last, view.filtered_count
        ),
        None => format!(" Members (0 of {}) ", view.filtered_count),
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg);

    if view.rows.is_empty() {
        let msg = if state.table.query().trim().is_empty() {
            "  No members."
        } else {
            "  No members match the search."
        };
        let empty = Paragraph::new(Line::from(Span::styled(
            msg,
            Style::default().fg(Theme::TEXT_MUTED),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from(if view.all_visible_selected { CHECKED } else { UNCHECKED }),
        Cell::from("Name"),
        Cell::from("Email"),
        Cell::from("Role"),
        Cell::from("Actions"),
    ])
    .style(Theme::header())
    .bottom_margin(1);

    let rows: Vec<Row> = view
        .rows
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let selected = state.table.is_selected(&user.id);
            let style = if focused && i == state.cursor {
                Theme::row_cursor()
            } else if selected {
                Theme::row_selected()
            } else {
                Theme::row_normal()
            };
            let role_cell = if user.role.eq_ignore_ascii_case("admin") && !(focused && i == state.cursor) {
                Cell::from(Span::styled(user.role.clone(), Theme::role_admin()))
            } else {
                Cell::from(user.role.clone())
            };
            Row::new(vec![
                Cell::from(if selected { CHECKED } else { UNCHECKED }),
                Cell::from(user.name.clone()),
                Cell::from(user.email.clone()),
                role_cell,
                Cell::from("e:edit d:del"),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Percentage(28),
        Constraint::Percentage(40),
        Constraint::Percentage(12),
        Constraint::Min(12),
    ];

    let inner = block.inner(area);
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(block);

    // The selected index only drives scrolling; the cursor row is styled above.
    let mut table_state = TableState::default().with_selected(Some(state.cursor));
    frame.render_stateful_widget(table, area, &mut table_state);

    // Scrollbar when the page has more rows than fit on screen
    let list_h = inner.height.saturating_sub(HEADER_ROWS) as usize;
    if view.rows.len() > list_h && list_h > 0 {
        let scrollbar_area = Rect::new(
            area.x + area.width.saturating_sub(1),
            inner.y + HEADER_ROWS,
            1,
            list_h as u16,
        );
        let mut scrollbar_state = ScrollbarState::new(view.rows.len().saturating_sub(list_h))
            .position(table_state.offset());
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .thumb_style(Theme::scrollbar_thumb())
                .track_style(Theme::scrollbar_track()),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}
