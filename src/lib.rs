//! Duplicate CMS records into editable auto-drafts.
//!
//! A duplicate request carries a record id and a short-lived token bound to
//! the acting user. [`server::DuplicateController`] validates both, asks
//! [`duplicate::DuplicationService`] for a clone and points the user at the
//! edit screen of the copy.

// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![allow(unknown_lints, renamed_and_removed_lints, max_lines_per_file)]
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod app;
pub mod auth;
pub mod config;
pub mod duplicate;
pub mod hooks;
pub mod logging;
pub mod notices;
pub mod record;
pub mod registry;
pub mod server;
pub mod store;
pub mod token;
pub mod utils;

pub use auth::{Actor, ActorDirectory, CapabilityChecker, RoleCapabilities};
pub use config::{load_config, ConfigError, DuplicatorConfig};
pub use duplicate::{CloneBuilder, DuplicateError, DuplicationService, EligibilityPolicy};
pub use hooks::{DuplicateHooks, Phase};
pub use notices::{AdminNotices, Notice, NoticeQueue};
pub use record::{ProvenanceField, RawPost, Record, RecordId, RecordStatus};
pub use registry::{RegistryError, TypeRegistry};
pub use server::{AppState, DuplicateController, RequestError};
pub use store::{Collection, MemoryCollection, MemoryPostTable, PostStore, StoreError};
pub use token::{HashedTokenPrimitive, TokenPrimitive, TokenService, TokenVerdict, DUPLICATE_ACTION};
