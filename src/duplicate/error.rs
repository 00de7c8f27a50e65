use thiserror::Error;

use crate::store::StoreError;

/// Why a duplication did not happen. Nothing has been written in any case.
#[derive(Error, Debug)]
pub enum DuplicateError {
    /// Registered type, but the actor may not create it or the source is an
    /// auto-draft.
    #[error("Not allowed")]
    NotAllowed,

    #[error("Not a duplicable record: type '{0}' is not registered")]
    NotDuplicable(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}
