//! Storage collaborators: the post table and per-type collections.
//!
//! The duplication core only ever talks to the two traits defined here. The
//! in-memory implementations in [`memory`] back the daemon and the tests.

mod memory;

pub use memory::{MemoryCollection, MemoryPostTable};

use thiserror::Error;

use crate::auth::Actor;
use crate::record::{RawPost, Record, RecordId};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(RecordId),

    #[error("Cannot hydrate post: {0}")]
    Hydration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Post table lock poisoned")]
    LockPoisoned,

    #[error("Record id space exhausted")]
    IdsExhausted,
}

/// Lookup of raw posts by id, regardless of type.
pub trait PostStore: Send + Sync {
    fn get_post(&self, id: RecordId) -> Result<Option<RawPost>, StoreError>;
}

/// The store that owns records of one registered type.
pub trait Collection: Send + Sync {
    /// Post type this collection holds.
    fn post_type(&self) -> &str;

    /// Map a stored post into the richer in-memory record.
    #[allow(clippy::wrong_self_convention)]
    fn from_raw_post(&self, raw: &RawPost) -> Result<Record, StoreError>;

    /// Persist `record`. New records (no id) are created and receive an id;
    /// absent provenance fields are filled with the collection's defaults.
    fn save(&self, record: &mut Record, actor: &Actor) -> Result<RecordId, StoreError>;
}
