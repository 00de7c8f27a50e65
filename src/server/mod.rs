//! Request handling and the HTTP admin surface.

pub mod actions;
pub mod controller;
pub mod error;
pub mod error_mapping;
pub mod helpers;
pub mod routes;
pub mod structured_error;
pub mod urls;

pub use actions::{duplicate_link, duplicate_links, DuplicateLink, Surface};
pub use controller::{DuplicateController, DuplicateOutcome, NOTICE_TITLE};
pub use error::{RequestError, BAD_NONCE, BAD_POST};
pub use routes::{router, AppState, ACTOR_HEADER};
pub use urls::{AdminUrls, DuplicateRequest};
