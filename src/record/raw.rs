use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{RecordId, RecordStatus};

/// A post as the host stores it: flat columns plus a JSON content blob.
///
/// Collections turn this into a [`Record`](super::Record) through
/// `Collection::from_raw_post`; nothing else should read `post_content`
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPost {
    #[serde(rename = "ID")]
    pub id: RecordId,
    pub post_type: String,
    pub post_status: RecordStatus,
    #[serde(default)]
    pub post_title: String,
    /// URL slug; empty when none was generated yet.
    #[serde(default)]
    pub post_name: String,
    #[serde(default)]
    pub post_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub post_author: String,
    #[serde(default)]
    pub post_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub post_content: Map<String, Value>,
}

impl RawPost {
    /// Minimal post with empty content, mostly for seeding and tests.
    #[must_use]
    pub fn new(id: RecordId, post_type: &str, post_status: RecordStatus, title: &str) -> Self {
        Self {
            id,
            post_type: post_type.to_string(),
            post_status,
            post_title: title.to_string(),
            post_name: String::new(),
            post_date: None,
            post_author: String::new(),
            post_modified: None,
            post_content: Map::new(),
        }
    }

    #[must_use]
    pub fn with_content(mut self, key: &str, value: Value) -> Self {
        self.post_content.insert(key.to_string(), value);
        self
    }
}
