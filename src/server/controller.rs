use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use super::error::{RequestError, BAD_NONCE, BAD_POST};
use super::helpers::escape_html;
use super::urls::{AdminUrls, DuplicateRequest};
use crate::auth::Actor;
use crate::duplicate::{DuplicationService, EligibilityPolicy};
use crate::notices::{AdminNotices, Notice};
use crate::record::{RawPost, RecordId};
use crate::store::PostStore;
use crate::token::TokenService;

/// Title of the notice shown after a successful duplication.
pub const NOTICE_TITLE: &str = "Duplicate";

/// Where the actor goes after a successful duplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateOutcome {
    pub source: RecordId,
    pub new_id: RecordId,
    pub redirect: String,
}

/// Handles inbound duplicate requests: the only place request parameters are
/// validated.
pub struct DuplicateController {
    service: DuplicationService,
    tokens: TokenService,
    posts: Arc<dyn PostStore>,
    notices: Arc<dyn AdminNotices>,
    urls: AdminUrls,
}

impl std::fmt::Debug for DuplicateController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DuplicateController")
            .field("service", &self.service)
            .field("urls", &self.urls)
            .finish_non_exhaustive()
    }
}

impl DuplicateController {
    #[must_use]
    pub fn new(
        service: DuplicationService,
        tokens: TokenService,
        posts: Arc<dyn PostStore>,
        notices: Arc<dyn AdminNotices>,
        urls: AdminUrls,
    ) -> Self {
        Self {
            service,
            tokens,
            posts,
            notices,
            urls,
        }
    }

    #[must_use]
    pub fn policy(&self) -> &EligibilityPolicy {
        self.service.policy()
    }

    #[must_use]
    pub fn urls(&self) -> &AdminUrls {
        &self.urls
    }

    pub fn find_post(&self, id: RecordId) -> Result<Option<RawPost>, RequestError> {
        Ok(self.posts.get_post(id)?)
    }

    /// URL that triggers duplication of `post` by `actor`.
    #[must_use]
    pub fn duplicate_url(&self, post: &RawPost, actor: &Actor) -> String {
        let nonce = self.tokens.issue(post.id, actor);
        self.urls.duplicate_url(post.id, &nonce)
    }

    /// Validate `request`, duplicate the post, queue the success notice and
    /// return the edit URL of the copy.
    pub fn handle(
        &self,
        request: &DuplicateRequest,
        actor: &Actor,
    ) -> Result<DuplicateOutcome, RequestError> {
        let post = self.resolve_post(request.post.as_deref())?;

        let nonce_ok = request
            .nonce
            .as_deref()
            .is_some_and(|nonce| self.tokens.verify(nonce, post.id, actor));
        if !nonce_ok {
            debug!(id = %post.id, actor = %actor.id, "Rejected duplicate request: {BAD_NONCE}");
            return Err(RequestError::BadRequest(BAD_NONCE));
        }

        let new_id = self.service.duplicate(&post, actor)?;

        self.notices
            .push(actor, Notice::success(&success_body(&post.post_title), Some(NOTICE_TITLE)));

        Ok(DuplicateOutcome {
            source: post.id,
            new_id,
            redirect: self.urls.edit_url(new_id),
        })
    }

    fn resolve_post(&self, param: Option<&str>) -> Result<RawPost, RequestError> {
        let Some(id) = param.and_then(RecordId::parse_param) else {
            debug!(post = ?param, "Rejected duplicate request: {BAD_POST}");
            return Err(RequestError::BadRequest(BAD_POST));
        };
        self.find_post(id)?.ok_or_else(|| {
            debug!(%id, "Rejected duplicate request: {BAD_POST}");
            RequestError::BadRequest(BAD_POST)
        })
    }
}

fn success_body(source_title: &str) -> String {
    format!(
        "Here is a copy of <i>{}</i> that you can edit and save. This copy is currently \
         an <i>auto-draft</i> and will be deleted automatically if you make no changes.",
        escape_html(source_title)
    )
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
