use crate::table::TableView;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// "Delete Selected" button plus the selection count. The button renders
/// disabled when nothing is selected.
pub fn render(frame: &mut Frame, area: Rect, view: Option<&TableView>) {
    let selected = view.map(|v| v.selected_count).unwrap_or(0);
    let button_style = if selected > 0 {
        Theme::danger()
    } else {
        Theme::disabled()
    };
    let noun = if selected == 1 { "row" } else { "rows" };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(" D Delete Selected ", button_style),
        Span::styled(format!("  {} {} selected", selected, noun), Theme::hint_text()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
