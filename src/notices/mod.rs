//! User-visible admin notices shown after an action completes.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::auth::Actor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// HTML fragment.
    pub body: String,
}

impl Notice {
    #[must_use]
    pub fn success(body: &str, title: Option<&str>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.map(String::from),
            body: body.to_string(),
        }
    }
}

/// Host notice sink. Notices are shown to the actor on their next page view.
pub trait AdminNotices: Send + Sync {
    fn push(&self, actor: &Actor, notice: Notice);
}

/// In-memory per-actor notice queue.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    pending: Mutex<HashMap<String, Vec<Notice>>>,
}

impl NoticeQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending notice for `actor`, oldest first.
    #[must_use]
    pub fn drain(&self, actor: &Actor) -> Vec<Notice> {
        self.pending
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(&actor.id)
            .unwrap_or_default()
    }
}

impl AdminNotices for NoticeQueue {
    fn push(&self, actor: &Actor, notice: Notice) {
        self.pending
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .entry(actor.id.clone())
            .or_default()
            .push(notice);
    }
}
