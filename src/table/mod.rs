//! The member table: record set, search query, selection and page window.
//!
//! [`UserTable`] is the single owner of the fetched records. Every callback
//! is a synchronous transition over `{records, query, selection, page}`;
//! none of them can fail, and a missing id is a silent no-op.

pub mod filter;
pub mod pagination;
pub mod record;
pub mod selection;

use pagination::Pagination;
use record::{UserId, UserRecord};
use selection::Selection;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// Derived view handed to the renderer. Only exists once the records have
/// loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub rows: Vec<UserRecord>,
    pub filtered_count: usize,
    pub total_count: usize,
    pub page: usize,
    pub page_count: usize,
    pub selected_count: usize,
    pub all_visible_selected: bool,
    /// 1-based row numbers shown on this page.
    pub range: Option<(usize, usize)>,
}

#[derive(Debug)]
pub struct UserTable {
    records: Vec<UserRecord>,
    query: String,
    selection: Selection,
    pagination: Pagination,
    load: LoadState,
}

impl UserTable {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            records: Vec::new(),
            query: String::new(),
            selection: Selection::new(),
            pagination: Pagination::new(rows_per_page),
            load: LoadState::Loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    fn is_ready(&self) -> bool {
        self.load == LoadState::Ready
    }

    pub fn on_fetch_success(&mut self, records: Vec<UserRecord>) {
        if !self.is_loading() {
            return;
        }
        self.records = records;
        self.load = LoadState::Ready;
        self.pagination.clamp(self.filtered_count());
    }

    pub fn on_fetch_failure(&mut self, reason: impl Into<String>) {
        if !self.is_loading() {
            return;
        }
        self.load = LoadState::Failed(reason.into());
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn get(&self, id: &UserId) -> Option<&UserRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.filtered_count())
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, id: &UserId) -> bool {
        self.selection.contains(id)
    }

    pub fn filtered(&self) -> Vec<UserRecord> {
        filter::filter_records(&self.records, &self.query)
    }

    pub fn filtered_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| filter::matches(r, &self.query))
            .count()
    }

    pub fn visible(&self) -> Vec<UserRecord> {
        let filtered = self.filtered();
        self.pagination.visible_slice(&filtered).to_vec()
    }

    /// `None` while loading or after a failed fetch: the table is not
    /// rendered in those states.
    pub fn view(&self) -> Option<TableView> {
        if !self.is_ready() {
            return None;
        }
        let filtered = self.filtered();
        let rows = self.pagination.visible_slice(&filtered).to_vec();
        Some(TableView {
            all_visible_selected: self.selection.all_selected(&rows),
            filtered_count: filtered.len(),
            total_count: self.records.len(),
            page: self.pagination.page(),
            page_count: self.pagination.page_count(filtered.len()),
            selected_count: self.selection.len(),
            range: self.pagination.range(filtered.len()),
            rows,
        })
    }

    /// The search bar stays live while loading, so this applies in any state.
    pub fn on_search(&mut self, query: &str) {
        self.query = query.to_string();
        self.pagination.set_page(1);
    }

    pub fn on_toggle_row(&mut self, id: &UserId) {
        if !self.is_ready() || self.get(id).is_none() {
            return;
        }
        self.selection.toggle(id);
    }

    pub fn on_toggle_all_rows(&mut self) {
        if !self.is_ready() {
            return;
        }
        let visible = self.visible();
        self.selection.toggle_all(&visible);
    }

    pub fn on_delete_row(&mut self, id: &UserId) {
        if !self.is_ready() {
            return;
        }
        let before = self.records.len();
        self.records = self
            .records
            .iter()
            .filter(|r| &r.id != id)
            .cloned()
            .collect();
        if self.records.len() == before {
            return;
        }
        tracing::info!(id = %id, "deleted record");
        self.selection.reconcile(&self.records);
        self.pagination.clamp(self.filtered_count());
    }

    /// Remove every selected record and empty the selection. Returns how many
    /// records were removed.
    pub fn on_delete_selected(&mut self) -> usize {
        if !self.is_ready() || self.selection.is_empty() {
            return 0;
        }
        tracing::debug!(ids = ?self.selection.ids().collect::<Vec<_>>(), "deleting selected records");
        let before = self.records.len();
        let selection = &self.selection;
        self.records = self
            .records
            .iter()
            .filter(|r| !selection.contains(&r.id))
            .cloned()
            .collect();
        self.selection.clear();
        self.pagination.clamp(self.filtered_count());
        let removed = before - self.records.len();
        tracing::info!(removed, "deleted selected records");
        removed
    }

    pub fn on_update_row(&mut self, updated: UserRecord) {
        if !self.is_ready() || self.get(&updated.id).is_none() {
            return;
        }
        tracing::info!(id = %updated.id, "updated record");
        self.records = self
            .records
            .iter()
            .map(|r| if r.id == updated.id { updated.clone() } else { r.clone() })
            .collect();
        self.selection.reconcile(&self.records);
        // An edit can move the row out of the current query.
        self.pagination.clamp(self.filtered_count());
    }

    pub fn on_page_change(&mut self, page: usize) {
        if !self.is_ready() {
            return;
        }
        self.pagination.set_page(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<UserRecord> {
        vec![
            UserRecord::new("1", "A", "a@mailinator.com", "staff"),
            UserRecord::new("2", "B", "b@mailinator.com", "staff"),
            UserRecord::new("3", "C", "c@mailinator.com", "admin"),
        ]
    }

    fn ready(records: Vec<UserRecord>, page_size: usize) -> UserTable {
        let mut t = UserTable::new(page_size);
        t.on_fetch_success(records);
        t
    }

    fn ids(rows: &[UserRecord]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    fn id(s: &str) -> UserId {
        UserId::new(s)
    }

    #[test]
    fn test_initial_state_is_loading() {
        let t = UserTable::new(10);
        assert!(t.is_loading());
        assert!(t.records().is_empty());
        assert!(t.error().is_none());
        assert!(t.view().is_none());
    }

    #[test]
    fn test_paging_and_select_all_scenario() {
        let mut t = ready(abc(), 2);
        let view = t.view().unwrap();
        assert_eq!(ids(&view.rows), vec!["1", "2"]);
        assert_eq!(view.page_count, 2);

        t.on_toggle_row(&id("1"));
        t.on_toggle_row(&id("2"));
        assert!(t.view().unwrap().all_visible_selected);

        t.on_toggle_all_rows();
        assert!(t.selection().is_empty());

        t.on_toggle_all_rows();
        assert_eq!(t.selection().len(), 2);

        t.on_delete_row(&id("2"));
        assert_eq!(ids(t.records()), vec!["1", "3"]);
        assert!(t.is_selected(&id("1")));
        assert!(!t.is_selected(&id("2")));
        assert_eq!(t.selection().len(), 1);
    }

    #[test]
    fn test_search_scenario_resets_page() {
        let mut t = ready(abc(), 2);
        t.on_page_change(2);
        assert_eq!(t.page(), 2);

        t.on_search("B");
        let view = t.view().unwrap();
        assert_eq!(view.page, 1);
        assert_eq!(view.page_count, 1);
        assert_eq!(view.filtered_count, 1);
        assert_eq!(ids(&view.rows), vec!["2"]);
    }

    #[test]
    fn test_search_always_resets_page_even_when_unchanged() {
        let mut t = ready(abc(), 1);
        t.on_page_change(3);
        t.on_search("");
        assert_eq!(t.page(), 1);
    }

    #[test]
    fn test_fetch_failure_is_terminal() {
        let mut t = UserTable::new(10);
        t.on_search("a");
        t.on_fetch_failure("error sending request");
        assert!(!t.is_loading());
        assert_eq!(t.error(), Some("error sending request"));
        assert!(t.view().is_none());

        t.on_fetch_success(abc());
        assert!(t.records().is_empty());
        assert!(t.view().is_none());
    }

    #[test]
    fn test_actions_ignored_while_loading() {
        let mut t = UserTable::new(2);
        t.on_toggle_row(&id("1"));
        t.on_toggle_all_rows();
        t.on_page_change(3);
        assert_eq!(t.on_delete_selected(), 0);
        assert!(t.selection().is_empty());
        assert_eq!(t.page(), 1);
    }

    #[test]
    fn test_second_fetch_result_is_ignored() {
        let mut t = ready(abc(), 10);
        t.on_fetch_success(vec![]);
        assert_eq!(t.records().len(), 3);
        t.on_fetch_failure("late");
        assert!(t.error().is_none());
    }

    #[test]
    fn test_delete_selected_removes_exactly_selection() {
        let mut t = ready(abc(), 10);
        t.on_toggle_row(&id("1"));
        t.on_toggle_row(&id("3"));
        assert_eq!(t.on_delete_selected(), 2);
        assert_eq!(ids(t.records()), vec!["2"]);
        assert!(t.selection().is_empty());
    }

    #[test]
    fn test_delete_selected_with_empty_selection_is_noop() {
        let mut t = ready(abc(), 10);
        assert_eq!(t.on_delete_selected(), 0);
        assert_eq!(t.records().len(), 3);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut t = ready(abc(), 10);
        t.on_toggle_row(&id("42"));
        assert!(t.selection().is_empty());
    }

    #[test]
    fn test_delete_missing_row_is_noop() {
        let mut t = ready(abc(), 10);
        t.on_toggle_row(&id("1"));
        t.on_delete_row(&id("42"));
        assert_eq!(t.records().len(), 3);
        assert!(t.is_selected(&id("1")));
    }

    #[test]
    fn test_deleting_last_row_of_last_page_clamps_page() {
        let mut t = ready(abc(), 2);
        t.on_page_change(2);
        t.on_delete_row(&id("3"));
        let view = t.view().unwrap();
        assert_eq!(view.page, 1);
        assert_eq!(view.page_count, 1);
        assert_eq!(ids(&view.rows), vec!["1", "2"]);
    }

    #[test]
    fn test_mass_delete_clamps_page() {
        let mut t = ready(abc(), 1);
        t.on_page_change(3);
        t.on_toggle_all_rows();
        t.on_page_change(2);
        t.on_toggle_all_rows();
        assert_eq!(t.on_delete_selected(), 2);
        assert_eq!(t.page(), 1);
        assert_eq!(ids(&t.visible()), vec!["1"]);
    }

    #[test]
    fn test_stale_page_yields_empty_slice() {
        let mut t = ready(abc(), 2);
        t.on_page_change(7);
        let view = t.view().unwrap();
        assert!(view.rows.is_empty());
        assert_eq!(view.range, None);
        assert!(!view.all_visible_selected);
    }

    #[test]
    fn test_toggle_all_only_affects_visible_page() {
        let mut t = ready(abc(), 2);
        t.on_toggle_all_rows();
        assert!(t.is_selected(&id("1")));
        assert!(t.is_selected(&id("2")));
        assert!(!t.is_selected(&id("3")));
    }

    #[test]
    fn test_update_replaces_fields_and_keeps_count() {
        let mut t = ready(abc(), 10);
        t.on_toggle_row(&id("2"));
        let mut edited = t.get(&id("2")).cloned().unwrap();
        edited.name = "Bea".into();
        edited.role = "admin".into();
        t.on_update_row(edited);

        assert_eq!(t.records().len(), 3);
        let got = t.get(&id("2")).unwrap();
        assert_eq!(got.name, "Bea");
        assert_eq!(got.role, "admin");
        assert_eq!(ids(t.records()), vec!["1", "2", "3"]);
        assert!(t.is_selected(&id("2")));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut t = ready(abc(), 10);
        t.on_update_row(UserRecord::new("9", "Z", "", ""));
        assert_eq!(t.records(), abc().as_slice());
    }

    #[test]
    fn test_update_that_leaves_filter_clamps_page() {
        let mut t = ready(abc(), 1);
        t.on_search("staff");
        t.on_page_change(2);
        let mut edited = t.get(&id("2")).cloned().unwrap();
        edited.role = "admin".into();
        t.on_update_row(edited);
        assert_eq!(t.filtered_count(), 1);
        assert_eq!(t.page(), 1);
    }
}
