use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use super::{Collection, PostStore, StoreError};
use crate::auth::Actor;
use crate::record::{RawPost, Record, RecordId};
use crate::utils::Clock;

/// Content key under which the reference number is stored in `post_content`.
const REF_KEY: &str = "ref";

#[derive(Debug, Default)]
struct TableState {
    posts: BTreeMap<RecordId, RawPost>,
    last_id: u64,
}

impl TableState {
    fn allocate_id(&mut self) -> Result<RecordId, StoreError> {
        let next = self.last_id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        self.last_id = next;
        RecordId::new(next).ok_or(StoreError::IdsExhausted)
    }

    fn next_reference(&self, post_type: &str) -> u64 {
        self.posts
            .values()
            .filter(|p| p.post_type == post_type)
            .filter_map(|p| p.post_content.get(REF_KEY).and_then(Value::as_u64))
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }
}

/// Shared in-memory post table. Every collection is a typed view over it.
pub struct MemoryPostTable {
    state: RwLock<TableState>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for MemoryPostTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryPostTable").finish_non_exhaustive()
    }
}

impl MemoryPostTable {
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(TableState::default()),
            clock,
        }
    }

    /// Insert an existing post as-is, keeping its id. Used for seeding.
    pub fn insert(&self, post: RawPost) -> Result<(), StoreError> {
        let mut state = self.write()?;
        state.last_id = state.last_id.max(post.id.get());
        state.posts.insert(post.id, post);
        Ok(())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.posts.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.posts.is_empty())
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, TableState>, StoreError> {
        self.state.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, TableState>, StoreError> {
        self.state.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl PostStore for MemoryPostTable {
    fn get_post(&self, id: RecordId) -> Result<Option<RawPost>, StoreError> {
        Ok(self.read()?.posts.get(&id).cloned())
    }
}

/// Collection of one post type backed by a [`MemoryPostTable`].
#[derive(Debug, Clone)]
pub struct MemoryCollection {
    post_type: String,
    table: Arc<MemoryPostTable>,
}

impl MemoryCollection {
    #[must_use]
    pub fn new(post_type: &str, table: Arc<MemoryPostTable>) -> Self {
        Self {
            post_type: post_type.to_string(),
            table,
        }
    }

    fn to_raw_post(record: &Record, id: RecordId) -> RawPost {
        let mut content: serde_json::Map<String, Value> = record
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        if let Some(reference) = record.reference {
            content.insert(REF_KEY.to_string(), Value::from(reference));
        }
        RawPost {
            id,
            post_type: record.record_type.clone(),
            post_status: record.status.clone(),
            post_title: record.title.clone(),
            post_name: record.slug.clone().unwrap_or_default(),
            post_date: record.creation,
            post_author: record.created_by.clone().unwrap_or_default(),
            post_modified: record.lastupdate,
            post_content: content,
        }
    }

    fn default_slug(record: &Record, id: RecordId) -> String {
        let slug = slug::slugify(&record.title);
        if slug.is_empty() {
            id.to_string()
        } else {
            slug
        }
    }
}

impl Collection for MemoryCollection {
    fn post_type(&self) -> &str {
        &self.post_type
    }

    fn from_raw_post(&self, raw: &RawPost) -> Result<Record, StoreError> {
        if raw.post_type != self.post_type {
            return Err(StoreError::Hydration(format!(
                "post {} is a '{}', collection holds '{}'",
                raw.id, raw.post_type, self.post_type
            )));
        }
        let mut fields = BTreeMap::new();
        let mut reference = None;
        for (key, value) in &raw.post_content {
            if key == REF_KEY {
                reference = Some(value.as_u64().ok_or_else(|| {
                    StoreError::Hydration(format!("post {} has a non-numeric ref", raw.id))
                })?);
            } else {
                fields.insert(key.clone(), value.clone());
            }
        }
        Ok(Record {
            id: Some(raw.id),
            record_type: raw.post_type.clone(),
            status: raw.post_status.clone(),
            title: raw.post_title.clone(),
            creation: raw.post_date,
            created_by: (!raw.post_author.is_empty()).then(|| raw.post_author.clone()),
            lastupdate: raw.post_modified,
            reference,
            slug: (!raw.post_name.is_empty()).then(|| raw.post_name.clone()),
            fields,
        })
    }

    fn save(&self, record: &mut Record, actor: &Actor) -> Result<RecordId, StoreError> {
        if record.record_type != self.post_type {
            return Err(StoreError::Hydration(format!(
                "cannot save a '{}' into collection '{}'",
                record.record_type, self.post_type
            )));
        }
        let now = self.table.now();
        let mut state = self.table.write()?;

        let id = match record.id {
            Some(id) if state.posts.contains_key(&id) => id,
            Some(id) => return Err(StoreError::NotFound(id)),
            None => state.allocate_id()?,
        };

        record.id = Some(id);
        record.creation.get_or_insert(now);
        record.lastupdate = Some(now);
        if record.created_by.is_none() && !actor.is_anonymous() {
            record.created_by = Some(actor.id.clone());
        }
        if !record.status.is_draft_like() {
            if record.reference.is_none() {
                record.reference = Some(state.next_reference(&self.post_type));
            }
            if record.slug.is_none() {
                record.slug = Some(Self::default_slug(record, id));
            }
        }

        state.posts.insert(id, Self::to_raw_post(record, id));
        debug!(post_type = %self.post_type, %id, status = %record.status, "Record saved");
        Ok(id)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
