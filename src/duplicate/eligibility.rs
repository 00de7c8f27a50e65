use std::sync::Arc;
use tracing::debug;

use super::DuplicateError;
use crate::auth::{Actor, CapabilityChecker};
use crate::record::{RawPost, RecordStatus};
use crate::registry::TypeRegistry;

/// Decides whether a post may be duplicated by an actor.
///
/// Pure: reads only its inputs, the immutable registry and the capability
/// checker, so it can be called any number of times from any thread.
#[derive(Clone)]
pub struct EligibilityPolicy {
    registry: Arc<TypeRegistry>,
    capabilities: Arc<dyn CapabilityChecker>,
}

impl std::fmt::Debug for EligibilityPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EligibilityPolicy")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl EligibilityPolicy {
    #[must_use]
    pub fn new(registry: Arc<TypeRegistry>, capabilities: Arc<dyn CapabilityChecker>) -> Self {
        Self {
            registry,
            capabilities,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    #[must_use]
    pub fn is_duplicable(&self, post: &RawPost, actor: &Actor) -> bool {
        self.check(post, actor).is_ok()
    }

    /// Like [`is_duplicable`](Self::is_duplicable), but says why not.
    ///
    /// Unregistered types are `NotDuplicable`; auto-drafts and missing
    /// capabilities are `NotAllowed`.
    pub fn check(&self, post: &RawPost, actor: &Actor) -> Result<(), DuplicateError> {
        let Some(registered) = self.registry.get(&post.post_type) else {
            debug!(id = %post.id, post_type = %post.post_type, "Not a registered type");
            return Err(DuplicateError::NotDuplicable(post.post_type.clone()));
        };
        if post.post_status == RecordStatus::AutoDraft {
            debug!(id = %post.id, "Auto-drafts cannot be duplicated");
            return Err(DuplicateError::NotAllowed);
        }
        let allowed = registered
            .create_capability()
            .is_some_and(|cap| self.capabilities.actor_can(actor, cap));
        if !allowed {
            debug!(
                id = %post.id,
                actor = %actor.id,
                capability = ?registered.create_capability(),
                "Actor lacks create capability"
            );
            return Err(DuplicateError::NotAllowed);
        }
        Ok(())
    }
}
