//! Search history handlers for the authenticated user.

use axum::{
    extract::{OriginalUri, Path, Query, State},
    response::Json,
    routing::{delete, get},
    Extension, Router,
};
use uuid::Uuid;

use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::SearchEntryResponse;
use crate::errors::AppResult;
use crate::types::{MessageResponse, NoContent, PageRequest, Paged};

/// Create protected search history routes
pub fn history_routes() -> Router<AppState> {
    Router::new()
        .route("/me/history", get(list_history).delete(clear_history))
        .route("/me/history/:id", delete(delete_entry))
}

/// The caller's search history, newest first
#[utoipa::path(
    get,
    path = "/me/history",
    tag = "Search History",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-indexed"),
        ("pageSize" = Option<u64>, Query, description = "Items per page, capped at 100")
    ),
    responses(
        (status = 200, description = "Paged search history envelope with navigation links"),
        (status = 401, description = "Authentication required")
    )
)]
pub async fn list_history(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Extension(user): Extension<CurrentUser>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Paged<SearchEntryResponse>>> {
    let (entries, total) = state
        .history_service
        .list_history(user.id, page.clone())
        .await?;

    let envelope = Paged::new(
        entries.into_iter().map(SearchEntryResponse::from).collect(),
        page.page(),
        page.page_size(),
        total,
    )
    .with_links(&state.config.public_base_url, uri.path(), &[]);

    Ok(Json(envelope))
}

/// Remove a single search history entry
#[utoipa::path(
    delete,
    path = "/me/history/{id}",
    tag = "Search History",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "History entry ID")),
    responses(
        (status = 204, description = "Entry removed"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.history_service.delete_entry(user.id, id).await?;
    Ok(NoContent)
}

/// Clear the caller's entire search history
#[utoipa::path(
    delete,
    path = "/me/history",
    tag = "Search History",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "History cleared"),
        (status = 401, description = "Authentication required")
    )
)]
pub async fn clear_history(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<MessageResponse>> {
    let removed = state.history_service.clear_history(user.id).await?;

    Ok(Json(MessageResponse::new(format!(
        "Removed {} history entries",
        removed
    ))))
}
