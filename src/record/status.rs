use serde::{Deserialize, Serialize};

/// Publication status of a record.
///
/// Only `AutoDraft` has special meaning for duplication: it marks a transient
/// placeholder that has never been explicitly saved by a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordStatus {
    Published,
    Draft,
    AutoDraft,
    Pending,
    Private,
    Trash,
    Other(String),
}

impl RecordStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
            Self::AutoDraft => "auto-draft",
            Self::Pending => "pending",
            Self::Private => "private",
            Self::Trash => "trash",
            Self::Other(s) => s,
        }
    }

    /// Draft-like statuses are not assigned a reference number or slug on save.
    #[must_use]
    pub fn is_draft_like(&self) -> bool {
        matches!(self, Self::Draft | Self::AutoDraft | Self::Pending)
    }
}

impl From<&str> for RecordStatus {
    fn from(s: &str) -> Self {
        match s {
            "published" | "publish" => Self::Published,
            "draft" => Self::Draft,
            "auto-draft" => Self::AutoDraft,
            "pending" => Self::Pending,
            "private" => Self::Private,
            "trash" => Self::Trash,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for RecordStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<RecordStatus> for String {
    fn from(status: RecordStatus) -> Self {
        match status {
            RecordStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
