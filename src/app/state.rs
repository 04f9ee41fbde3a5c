use crate::config::AppConfig;
use crate::table::record::{RecordField, UserRecord};
use crate::table::UserTable;
use chrono::Local;

/// Single-line text input with a byte-offset cursor kept on char boundaries.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Display column of the cursor.
    pub fn cursor_col(&self) -> usize {
        unicode_width::UnicodeWidthStr::width(&self.text[..self.cursor])
    }
}

/// The open edit modal: a working copy of one record plus one input per
/// editable column.
#[derive(Debug, Clone)]
pub struct EditForm {
    pub original: UserRecord,
    pub field: RecordField,
    pub name: InputState,
    pub email: InputState,
    pub role: InputState,
}

impl EditForm {
    pub fn open(record: &UserRecord) -> Self {
        Self {
            original: record.clone(),
            field: RecordField::Name,
            name: InputState::with_text(&record.name),
            email: InputState::with_text(&record.email),
            role: InputState::with_text(&record.role),
        }
    }

    pub fn input(&self, field: RecordField) -> &InputState {
        match field {
            RecordField::Name => &self.name,
            RecordField::Email => &self.email,
            RecordField::Role => &self.role,
        }
    }

    pub fn active_input_mut(&mut self) -> &mut InputState {
        match self.field {
            RecordField::Name => &mut self.name,
            RecordField::Email => &mut self.email,
            RecordField::Role => &mut self.role,
        }
    }

    /// The edited record. Fields the form does not show are carried over.
    pub fn to_record(&self) -> UserRecord {
        let mut record = self.original.clone();
        for field in RecordField::ALL {
            field.set(&mut record, self.input(field).text.trim().to_string());
        }
        record
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Search,
    Table,
}

pub struct AppState {
    pub table: UserTable,
    pub search: InputState,
    pub focus: FocusPanel,
    pub edit: Option<EditForm>,
    /// Highlighted row within the visible page.
    pub cursor: usize,
    pub spinner_frame: usize,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    pub timestamp_format: String,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        let table = UserTable::new(config.table.rows_per_page);
        Self {
            table,
            search: InputState::new(),
            focus: FocusPanel::Table,
            edit: None,
            cursor: 0,
            spinner_frame: 0,
            should_quit: false,
            dirty: true,
            status_message: None,
            timestamp_format,
        }
    }

    pub fn set_status(&mut self, text: impl AsRef<str>) {
        let ts = Local::now().format(&self.timestamp_format);
        self.status_message = Some(format!("[{}] {}", ts, text.as_ref()));
        self.dirty = true;
    }

    /// Push the search input into the table. Resets the page and cursor.
    pub fn apply_search(&mut self) {
        self.table.on_search(&self.search.text);
        self.cursor = 0;
        self.dirty = true;
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.table.visible().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn cursor_record(&self) -> Option<UserRecord> {
        self.table.visible().into_iter().nth(self.cursor)
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.table.visible().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn go_to_page(&mut self, page: usize) {
        let page = page.clamp(1, self.table.page_count());
        if page != self.table.page() {
            self.table.on_page_change(page);
            self.cursor = 0;
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Search => FocusPanel::Table,
            FocusPanel::Table => FocusPanel::Search,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        match self.table.view() {
            Some(view) => format!(
                "Members: {} | Matching: {} | Selected: {}",
                view.total_count, view.filtered_count, view.selected_count
            ),
            None if self.table.is_loading() => "Loading members...".to_string(),
            None => "Member list unavailable".to_string(),
        }
    }
}
