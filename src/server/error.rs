use http::StatusCode;
use thiserror::Error;

use crate::duplicate::DuplicateError;
use crate::store::StoreError;

pub const BAD_POST: &str = "bad post";
pub const BAD_NONCE: &str = "bad nonce";

/// Terminal failure of a duplicate request. Nothing was persisted.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error(transparent)]
    Duplicate(#[from] DuplicateError),
}

impl From<StoreError> for RequestError {
    fn from(e: StoreError) -> Self {
        Self::Duplicate(DuplicateError::Store(e))
    }
}

impl RequestError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Duplicate(DuplicateError::NotDuplicable(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Duplicate(DuplicateError::NotAllowed) => StatusCode::FORBIDDEN,
            Self::Duplicate(DuplicateError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
