use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::actions::duplicate_links;
use super::controller::DuplicateController;
use super::structured_error::{to_structured, StructuredError};
use super::urls::DuplicateRequest;
use crate::auth::{Actor, ActorDirectory};
use crate::notices::NoticeQueue;
use crate::record::RecordId;
use crate::token::DUPLICATE_ACTION;

/// Header carrying the id of the acting user.
pub const ACTOR_HEADER: &str = "x-actor-id";

/// Shared state of the admin daemon. Everything behind it is immutable or
/// internally synchronized.
#[derive(Debug, Clone)]
pub struct AppState {
    pub controller: Arc<DuplicateController>,
    pub actors: Arc<ActorDirectory>,
    pub notices: Arc<NoticeQueue>,
}

impl AppState {
    fn actor(&self, headers: &HeaderMap) -> Actor {
        let id = headers.get(ACTOR_HEADER).and_then(|v| v.to_str().ok());
        self.actors.resolve(id)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/admin.php", get(admin_action))
        .route("/records/:id/actions", get(record_actions))
        .route("/notices", get(drain_notices))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn error_response(status: StatusCode, error: StructuredError) -> Response {
    (status, Json(error)).into_response()
}

/// GET /admin.php?action=duplicate&post=<id>&nonce=<token>
#[allow(clippy::unused_async)]
async fn admin_action(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let request = DuplicateRequest::from_query(query.as_deref().unwrap_or_default());
    if request.action.as_deref() != Some(DUPLICATE_ACTION) {
        return error_response(
            StatusCode::NOT_FOUND,
            StructuredError::new("UNKNOWN_ACTION", "unknown admin action".to_string()),
        );
    }
    let actor = state.actor(&headers);
    match state.controller.handle(&request, &actor) {
        Ok(outcome) => Redirect::to(&outcome.redirect).into_response(),
        Err(e) => {
            warn!(actor = %actor.id, post = ?request.post, "Duplicate request failed: {e}");
            error_response(e.status(), to_structured(&e))
        }
    }
}

/// GET /records/:id/actions
#[allow(clippy::unused_async)]
async fn record_actions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let not_found = || {
        error_response(
            StatusCode::NOT_FOUND,
            StructuredError::new("RECORD_NOT_FOUND", format!("Record not found: {id}")),
        )
    };
    let Some(id) = RecordId::new(id) else {
        return not_found();
    };
    match state.controller.find_post(id) {
        Ok(Some(post)) => {
            let actor = state.actor(&headers);
            Json(duplicate_links(&state.controller, &post, &actor)).into_response()
        }
        Ok(None) => not_found(),
        Err(e) => error_response(e.status(), to_structured(&e)),
    }
}

/// GET /notices
#[allow(clippy::unused_async)]
async fn drain_notices(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let actor = state.actor(&headers);
    Json(state.notices.drain(&actor)).into_response()
}
