use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::UsersLoaded(users) => {
            let count = users.len();
            state.table.on_fetch_success(users);
            state.clamp_cursor();
            state.set_status(format!("Loaded {} members", count));
            vec![]
        }
        AppEvent::UsersFailed(reason) => {
            state.table.on_fetch_failure(reason);
            state.dirty = true;
            vec![]
        }
        AppEvent::Tick => {
            if state.table.is_loading() {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Edit modal captures all input when open
    if state.edit.is_some() {
        return handle_edit_key(state, key);
    }

    match state.focus {
        FocusPanel::Search => handle_search_key(state, key),
        FocusPanel::Table => handle_table_key(state, key),
    }
}

fn handle_search_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('u') => {
                state.search.clear();
                state.apply_search();
            }
            KeyCode::Char('w') => {
                state.search.delete_word_back();
                state.apply_search();
            }
            _ => {}
        }
        return vec![];
    }

    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
            state.focus = FocusPanel::Table;
        }
        KeyCode::Backspace => {
            state.search.delete_back();
            state.apply_search();
        }
        KeyCode::Delete => {
            state.search.delete_forward();
            state.apply_search();
        }
        KeyCode::Left => state.search.move_left(),
        KeyCode::Right => state.search.move_right(),
        KeyCode::Home => state.search.move_home(),
        KeyCode::End => state.search.move_end(),
        KeyCode::Char(c) => {
            state.search.insert_char(c);
            state.apply_search();
        }
        _ => {}
    }
    vec![]
}

fn handle_table_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Char('/') | KeyCode::Tab => {
            state.toggle_focus();
            return vec![];
        }
        _ => {}
    }

    // Everything below operates on the table, which only exists once loaded.
    let Some(view) = state.table.view() else {
        return vec![];
    };

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => state.move_cursor_down(),
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => {
            state.go_to_page(view.page.saturating_sub(1));
        }
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => {
            state.go_to_page(view.page + 1);
        }
        KeyCode::Home => state.go_to_page(1),
        KeyCode::End => state.go_to_page(view.page_count),
        KeyCode::Char(' ') => {
            if let Some(record) = state.cursor_record() {
                state.table.on_toggle_row(&record.id);
            }
        }
        KeyCode::Char('a') => state.table.on_toggle_all_rows(),
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(record) = state.cursor_record() {
                state.edit = Some(EditForm::open(&record));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(record) = state.cursor_record() {
                state.table.on_delete_row(&record.id);
                state.clamp_cursor();
                state.set_status(format!("Deleted {}", display_name(&record.name)));
            }
        }
        KeyCode::Char('D') => {
            if view.selected_count == 0 {
                state.set_status("No rows selected");
                return vec![Action::Bell];
            }
            let removed = state.table.on_delete_selected();
            state.clamp_cursor();
            state.set_status(format!("Deleted {} selected rows", removed));
        }
        _ => {}
    }
    vec![]
}

fn handle_edit_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Some(form) = state.edit.as_mut() else {
        return vec![];
    };

    match key.code {
        KeyCode::Esc => {
            state.edit = None;
        }
        KeyCode::Enter => {
            let record = form.to_record();
            let name = record.name.clone();
            state.edit = None;
            state.table.on_update_row(record);
            state.clamp_cursor();
            state.set_status(format!("Saved {}", display_name(&name)));
        }
        KeyCode::Tab | KeyCode::Down => form.field = form.field.next(),
        KeyCode::BackTab | KeyCode::Up => form.field = form.field.prev(),
        KeyCode::Backspace => form.active_input_mut().delete_back(),
        KeyCode::Delete => form.active_input_mut().delete_forward(),
        KeyCode::Left => form.active_input_mut().move_left(),
        KeyCode::Right => form.active_input_mut().move_right(),
        KeyCode::Home => form.active_input_mut().move_home(),
        KeyCode::End => form.active_input_mut().move_end(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.active_input_mut().clear();
        }
        KeyCode::Char(c) => form.active_input_mut().insert_char(c),
        _ => {}
    }
    vec![]
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "row"
    } else {
        name
    }
}
