mod action_bar;
mod alert;
mod edit_modal;
mod header;
mod layout;
mod pagination_bar;
mod search_bar;
mod status_bar;
mod theme;
mod user_table;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area());
    let view = state.table.view();

    header::render(frame, app_layout.header);
    search_bar::render(frame, app_layout.search_bar, state);

    if let Some(ref view) = view {
        user_table::render(frame, app_layout.table, state, view);
    } else if let Some(reason) = state.table.error() {
        alert::render_error(frame, app_layout.table, reason);
    } else {
        alert::render_loading(frame, app_layout.table, state);
    }

    action_bar::render(frame, app_layout.action_bar, view.as_ref());
    pagination_bar::render(frame, app_layout.pagination, view.as_ref());
    status_bar::render(frame, app_layout.status_bar, state);

    // Modal last so it draws over the table
    edit_modal::render(frame, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::table::record::UserRecord;
    use ratatui::backend::TestBackend;

    fn screen_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_loading_screen() {
        let state = AppState::new(&AppConfig::default());
        let text = screen_text(&state);
        assert!(text.contains("Loading..."));
        assert!(!text.contains("Email"));
    }

    #[test]
    fn test_error_screen_hides_table() {
        let mut state = AppState::new(&AppConfig::default());
        state.table.on_fetch_failure("server responded with status 404 Not Found");
        let text = screen_text(&state);
        assert!(text.contains("Could not load members"));
        assert!(text.contains("404 Not Found"));
        assert!(!text.contains("Email"));
    }

    #[test]
    fn test_table_screen_shows_rows_and_selection_count() {
        let mut state = AppState::new(&AppConfig::default());
        state.table.on_fetch_success(vec![
            UserRecord::new("1", "Aaron Miles", "aaron@mailinator.com", "member"),
            UserRecord::new("2", "Arvind Kumar", "arvind@mailinator.com", "admin"),
        ]);
        let id = state.table.records()[1].id.clone();
        state.table.on_toggle_row(&id);
        let text = screen_text(&state);
        assert!(text.contains("Aaron Miles"));
        assert!(text.contains("arvind@mailinator.com"));
        assert!(text.contains("1 row selected"));
        assert!(text.contains("Page 1 of 1"));
    }

    #[test]
    fn test_cursor_row_stays_on_screen_when_page_is_taller_than_terminal() {
        let mut cfg = AppConfig::default();
        cfg.table.rows_per_page = 25;
        let mut state = AppState::new(&cfg);
        let users = (1..=25)
            .map(|i| UserRecord::new(i.to_string(), format!("User{:02}", i), "", "member"))
            .collect();
        state.table.on_fetch_success(users);
        state.cursor = 20;

        let text = screen_text(&state);
        assert!(text.contains("User21"), "cursor row scrolled off screen:\n{}", text);
        assert!(!text.contains("User01"));
    }

    #[test]
    fn test_short_page_starts_at_first_row() {
        let mut cfg = AppConfig::default();
        cfg.table.rows_per_page = 25;
        let mut state = AppState::new(&cfg);
        let users = (1..=25)
            .map(|i| UserRecord::new(i.to_string(), format!("User{:02}", i), "", "member"))
            .collect();
        state.table.on_fetch_success(users);

        let text = screen_text(&state);
        assert!(text.contains("User01"));
        assert!(!text.contains("User25"));
    }

    #[test]
    fn test_edit_modal_draws_over_table() {
        let mut state = AppState::new(&AppConfig::default());
        state.table.on_fetch_success(vec![UserRecord::new("7", "Aaron Miles", "", "member")]);
        let record = state.table.records()[0].clone();
        state.edit = Some(crate::app::state::EditForm::open(&record));
        let text = screen_text(&state);
        assert!(text.contains("Edit member 7"));
    }
}
