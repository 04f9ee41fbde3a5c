//! User record model.
//!
//! Records come from the members endpoint as a JSON array. Identity is the
//! `id` field; everything else is display/edit data. Fields the table does
//! not know about are kept in `extra` so an edited record carries them along.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stable record key. The endpoint sends ids as strings (`"1"`), but numeric
/// ids are accepted too and normalized to their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
            Uint(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => UserId(s),
            RawId::Int(n) => UserId(n.to_string()),
            RawId::Uint(n) => UserId(n.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl UserRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
            email: email.into(),
            role: role.into(),
            extra: BTreeMap::new(),
        }
    }
}

/// The editable columns, in the order the edit form cycles through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Name,
    Email,
    Role,
}

impl RecordField {
    pub const ALL: [RecordField; 3] = [RecordField::Name, RecordField::Email, RecordField::Role];

    pub fn label(self) -> &'static str {
        match self {
            RecordField::Name => "Name",
            RecordField::Email => "Email",
            RecordField::Role => "Role",
        }
    }

    pub fn get(self, record: &UserRecord) -> &str {
        match self {
            RecordField::Name => &record.name,
            RecordField::Email => &record.email,
            RecordField::Role => &record.role,
        }
    }

    pub fn set(self, record: &mut UserRecord, value: String) {
        match self {
            RecordField::Name => record.name = value,
            RecordField::Email => record.email = value,
            RecordField::Role => record.role = value,
        }
    }

    pub fn next(self) -> Self {
        match self {
            RecordField::Name => RecordField::Email,
            RecordField::Email => RecordField::Role,
            RecordField::Role => RecordField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            RecordField::Name => RecordField::Role,
            RecordField::Email => RecordField::Name,
            RecordField::Role => RecordField::Email,
        }
    }
}
