//! Search matching.
//!
//! A record matches when the trimmed query is a case-insensitive substring of
//! its name, email or role. An empty query matches everything.

use super::record::{RecordField, UserRecord};

pub fn matches(record: &UserRecord, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    matches_lowered(record, &needle)
}

fn matches_lowered(record: &UserRecord, needle: &str) -> bool {
    RecordField::ALL
        .iter()
        .any(|f| f.get(record).to_lowercase().contains(needle))
}

/// Return the records matching `query`, in their original order.
pub fn filter_records(records: &[UserRecord], query: &str) -> Vec<UserRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| matches_lowered(r, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<UserRecord> {
        vec![
            UserRecord::new("1", "Aaron Miles", "aaron@mailinator.com", "member"),
            UserRecord::new("2", "Aishwarya Naik", "aishwarya@mailinator.com", "member"),
            UserRecord::new("3", "Arvind Kumar", "arvind@mailinator.com", "admin"),
        ]
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        assert_eq!(filter_records(&sample(), "").len(), 3);
        assert_eq!(filter_records(&sample(), "   ").len(), 3);
    }

    #[test]
    fn test_matches_any_column_case_insensitively() {
        let users = sample();
        let by_name = filter_records(&users, "aaron");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id.as_str(), "1");

        let by_role = filter_records(&users, "ADMIN");
        assert_eq!(by_role.len(), 1);
        assert_eq!(by_role[0].id.as_str(), "3");

        assert_eq!(filter_records(&users, "mailinator").len(), 3);
        assert!(filter_records(&users, "zzz").is_empty());
    }

    #[test]
    fn test_id_is_not_searched() {
        let users = sample();
        assert!(!matches(&users[0], "1"));
    }
}
