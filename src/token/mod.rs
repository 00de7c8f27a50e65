//! Action-and-resource scoped nonces for the duplicate action.

mod hashed;

pub use hashed::{HashedTokenPrimitive, DEFAULT_LIFESPAN_SECS};

use std::sync::Arc;
use tracing::debug;

use crate::auth::Actor;
use crate::record::RecordId;

/// Action name bound into every duplicate token scope and URL.
pub const DUPLICATE_ACTION: &str = "duplicate";

/// Outcome of a host token check.
///
/// `ValidRecent` and `ValidAging` both authorize; the distinction only
/// matters to the issuer's replay window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenVerdict {
    Invalid,
    ValidRecent,
    ValidAging,
}

impl TokenVerdict {
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

/// Host token primitive. Stateless given the scope and the actor's session.
pub trait TokenPrimitive: Send + Sync {
    fn create(&self, scope: &str, actor: &Actor) -> String;
    fn verify(&self, token: &str, scope: &str, actor: &Actor) -> TokenVerdict;
}

/// Issues and checks duplicate tokens. The record id is part of the scope so
/// a token minted for one record is useless against another.
#[derive(Clone)]
pub struct TokenService {
    primitive: Arc<dyn TokenPrimitive>,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}

impl TokenService {
    #[must_use]
    pub fn new(primitive: Arc<dyn TokenPrimitive>) -> Self {
        Self { primitive }
    }

    #[must_use]
    pub fn scope(id: RecordId) -> String {
        format!("{DUPLICATE_ACTION}-{id}")
    }

    #[must_use]
    pub fn issue(&self, id: RecordId, actor: &Actor) -> String {
        self.primitive.create(&Self::scope(id), actor)
    }

    #[must_use]
    pub fn verify(&self, token: &str, id: RecordId, actor: &Actor) -> bool {
        let verdict = self.primitive.verify(token, &Self::scope(id), actor);
        debug!(%id, actor = %actor.id, ?verdict, "Duplicate token checked");
        verdict.is_valid()
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
