use super::error::RequestError;
use crate::duplicate::DuplicateError;
use crate::store::StoreError;

/// Trait for mapping domain errors to structured error codes and optional tips.
pub trait ToStructuredError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>);
}

impl ToStructuredError for StoreError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>) {
        match self {
            StoreError::NotFound(_) => ("RECORD_NOT_FOUND", None),
            StoreError::Hydration(_) => ("HYDRATION_ERROR", None),
            StoreError::Json(_) => ("JSON_ERROR", None),
            StoreError::LockPoisoned => ("STORE_ERROR", Some("Restart the daemon")),
            StoreError::IdsExhausted => ("STORE_ERROR", None),
        }
    }
}

impl ToStructuredError for DuplicateError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>) {
        match self {
            DuplicateError::NotAllowed => (
                "NOT_ALLOWED",
                Some("Auto-drafts cannot be copied, and copying needs the type's create capability"),
            ),
            DuplicateError::NotDuplicable(_) => ("NOT_DUPLICABLE", None),
            DuplicateError::Store(e) => e.error_code_and_tip(),
        }
    }
}

impl ToStructuredError for RequestError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>) {
        match self {
            RequestError::BadRequest(_) => (
                "BAD_REQUEST",
                Some("Use the duplicate link again; links expire after a day"),
            ),
            RequestError::Duplicate(e) => e.error_code_and_tip(),
        }
    }
}
