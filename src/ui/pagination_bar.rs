use crate::table::TableView;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const MAX_PAGE_BUTTONS: usize = 7;

/// Page numbers to show: at most `max` consecutive pages, centered on the
/// current page where possible.
pub fn page_window(page: usize, page_count: usize, max: usize) -> Vec<usize> {
    let page_count = page_count.max(1);
    let max = max.max(1);
    if page_count <= max {
        return (1..=page_count).collect();
    }
    let page = page.clamp(1, page_count);
    let half = max / 2;
    let start = page.saturating_sub(half).max(1).min(page_count - max + 1);
    (start..start + max).collect()
}

pub fn render(frame: &mut Frame, area: Rect, view: Option<&TableView>) {
    let Some(view) = view else {
        frame.render_widget(Paragraph::new(""), area);
        return;
    };

    let at_start = view.page <= 1;
    let at_end = view.page >= view.page_count;
    let nav = |label: &'static str, disabled: bool| {
        Span::styled(
            label,
            if disabled {
                Style::default().fg(Theme::TEXT_MUTED)
            } else {
                Theme::key_hint()
            },
        )
    };

    let mut parts = vec![nav(" « ", at_start), nav(" ‹ ", at_start)];
    for p in page_window(view.page, view.page_count, MAX_PAGE_BUTTONS) {
        let style = if p == view.page {
            Theme::page_current()
        } else {
            Theme::hint_text()
        };
        parts.push(Span::styled(format!(" {} ", p), style));
    }
    parts.push(nav(" › ", at_end));
    parts.push(nav(" » ", at_end));
    parts.push(Span::styled(
        format!("  Page {} of {}", view.page, view.page_count),
        Style::default().fg(Theme::TEXT_MUTED),
    ));

    frame.render_widget(
        Paragraph::new(Line::from(parts)).alignment(Alignment::Center),
        area,
    );
}
