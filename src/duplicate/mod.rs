//! The duplication decision-and-execution flow.

mod clone;
mod eligibility;
mod error;
mod service;

pub use clone::CloneBuilder;
pub use eligibility::EligibilityPolicy;
pub use error::DuplicateError;
pub use service::DuplicationService;

#[cfg(test)]
#[path = "duplicate_tests.rs"]
mod tests;
