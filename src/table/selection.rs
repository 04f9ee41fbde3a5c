//! Row selection, keyed by record id.

use super::record::{UserId, UserRecord};
use std::collections::BTreeSet;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Selection {
    ids: BTreeSet<UserId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &UserId> {
        self.ids.iter()
    }

    pub fn toggle(&mut self, id: &UserId) {
        if !self.ids.remove(id) {
            self.ids.insert(id.clone());
        }
    }

    /// Page-scoped select-all: deselect `visible` if all of it is already
    /// selected, otherwise select the rows that are missing.
    pub fn toggle_all(&mut self, visible: &[UserRecord]) {
        if visible.is_empty() {
            return;
        }
        if visible.iter().all(|r| self.ids.contains(&r.id)) {
            for r in visible {
                self.ids.remove(&r.id);
            }
        } else {
            self.ids.extend(visible.iter().map(|r| r.id.clone()));
        }
    }

    pub fn all_selected(&self, visible: &[UserRecord]) -> bool {
        !visible.is_empty() && visible.iter().all(|r| self.ids.contains(&r.id))
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids that no longer exist in `records`.
    pub fn reconcile(&mut self, records: &[UserRecord]) {
        if self.ids.is_empty() {
            return;
        }
        let live: BTreeSet<&UserId> = records.iter().map(|r| &r.id).collect();
        self.ids.retain(|id| live.contains(id));
    }
}
