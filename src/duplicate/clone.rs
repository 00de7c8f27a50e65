use crate::record::{ProvenanceField, RawPost, Record, RecordStatus};
use crate::store::{Collection, StoreError};

/// Builds the in-memory candidate for a duplicate.
///
/// The candidate is hydrated by the owning collection, then stripped of its
/// identity and provenance and demoted to `auto-draft`. It is never persisted
/// here.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloneBuilder;

impl CloneBuilder {
    pub fn build_clone(
        collection: &dyn Collection,
        source: &RawPost,
    ) -> Result<Record, StoreError> {
        let mut candidate = collection.from_raw_post(source)?;
        candidate.id = None;
        for field in ProvenanceField::ALL {
            field.reset(&mut candidate);
        }
        candidate.status = RecordStatus::AutoDraft;
        Ok(candidate)
    }
}
