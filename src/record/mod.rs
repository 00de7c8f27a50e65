//! Content records and their stored form.

mod provenance;
mod raw;
mod status;

pub use provenance::ProvenanceField;
pub use raw::RawPost;
pub use status::RecordStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Identity assigned by the persistence layer. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Returns `None` for `0`, which the host uses to mean "no post".
    #[must_use]
    pub const fn new(id: u64) -> Option<Self> {
        if id == 0 {
            None
        } else {
            Some(Self(id))
        }
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parse a request parameter. Empty, zero, negative and non-numeric
    /// values all yield `None`.
    #[must_use]
    pub fn parse_param(value: &str) -> Option<Self> {
        value.trim().parse::<u64>().ok().and_then(Self::new)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// In-memory record, as hydrated by a collection.
///
/// Provenance fields are optional: `None` means the field is absent and will
/// take its default value the next time the record is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(rename = "type")]
    pub record_type: String,
    pub status: RecordStatus,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation: Option<DateTime<Utc>>,
    #[serde(rename = "createdBy", default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastupdate: Option<DateTime<Utc>>,
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Type-specific content fields.
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    #[must_use]
    pub fn new(record_type: &str, status: RecordStatus, title: &str) -> Self {
        Self {
            id: None,
            record_type: record_type.to_string(),
            status,
            title: title.to_string(),
            creation: None,
            created_by: None,
            lastupdate: None,
            reference: None,
            slug: None,
            fields: BTreeMap::new(),
        }
    }

    /// A record without identity has never been persisted.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Whether the named field is present, provenance fields included.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        ProvenanceField::from_name(name).map_or_else(
            || self.fields.contains_key(name),
            |field| field.is_set(self),
        )
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
