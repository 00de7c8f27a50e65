use std::sync::Arc;
use tracing::{info, info_span};

use super::{CloneBuilder, DuplicateError, EligibilityPolicy};
use crate::auth::Actor;
use crate::hooks::DuplicateHooks;
use crate::record::{RawPost, RecordId};
use crate::store::StoreError;

/// Runs a duplication end to end: eligibility, clone, hooks, save.
#[derive(Debug, Clone)]
pub struct DuplicationService {
    policy: EligibilityPolicy,
    hooks: Arc<DuplicateHooks>,
}

impl DuplicationService {
    #[must_use]
    pub fn new(policy: EligibilityPolicy, hooks: Arc<DuplicateHooks>) -> Self {
        Self { policy, hooks }
    }

    #[must_use]
    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    /// Duplicate `source` on behalf of `actor` and return the new record's id.
    ///
    /// Eligibility is checked again here whatever the caller already did. The
    /// only write is the final create, so an error means nothing was stored.
    pub fn duplicate(&self, source: &RawPost, actor: &Actor) -> Result<RecordId, DuplicateError> {
        let span = info_span!("duplicate", source = %source.id, post_type = %source.post_type);
        let _enter = span.enter();

        self.policy.check(source, actor)?;

        let collection = self
            .policy
            .registry()
            .collection(&source.post_type)
            .ok_or_else(|| DuplicateError::NotDuplicable(source.post_type.clone()))?;

        let mut candidate = CloneBuilder::build_clone(collection.as_ref(), source)?;

        self.hooks.run_before_save(&mut candidate);

        if !candidate.is_new() {
            return Err(StoreError::Hydration(
                "before-save hook assigned an id to the duplicate".to_string(),
            )
            .into());
        }

        let new_id = collection.save(&mut candidate, actor)?;

        self.hooks.run_after_save(&candidate);

        info!(source = %source.id, %new_id, actor = %actor.id, "Record duplicated");
        Ok(new_id)
    }
}
