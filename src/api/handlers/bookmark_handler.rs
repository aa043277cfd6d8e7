//! Bookmark handlers for the authenticated user.

use axum::{
    extract::{OriginalUri, Path, Query, State},
    response::Json,
    routing::{delete, get},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{Bookmark, BookmarkResponse, BookmarkTarget};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, PageRequest, Paged};

/// Request body for adding a bookmark
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddBookmarkRequest {
    /// What kind of thing is bookmarked
    pub target: BookmarkTarget,
    /// ID of the bookmarked title or person
    pub target_id: Uuid,
    /// Optional note
    #[validate(length(max = 500, message = "Note must be at most 500 characters"))]
    pub note: Option<String>,
}

/// Bookmark listing filter
#[derive(Debug, Deserialize)]
pub struct BookmarkFilter {
    /// Restrict to one target kind
    pub kind: Option<BookmarkTarget>,
}

/// Create protected bookmark routes
pub fn bookmark_routes() -> Router<AppState> {
    Router::new()
        .route("/me/bookmarks", get(list_bookmarks).post(add_bookmark))
        .route("/me/bookmarks/:id", delete(remove_bookmark))
}

/// The caller's bookmarks, newest first
#[utoipa::path(
    get,
    path = "/me/bookmarks",
    tag = "Bookmarks",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-indexed"),
        ("pageSize" = Option<u64>, Query, description = "Items per page, capped at 100"),
        ("kind" = Option<String>, Query, description = "Restrict to one target kind (title or person)")
    ),
    responses(
        (status = 200, description = "Paged bookmark envelope with navigation links"),
        (status = 401, description = "Authentication required")
    )
)]
pub async fn list_bookmarks(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Extension(user): Extension<CurrentUser>,
    Query(page): Query<PageRequest>,
    Query(filter): Query<BookmarkFilter>,
) -> AppResult<Json<Paged<BookmarkResponse>>> {
    let (bookmarks, total) = state
        .bookmark_service
        .list_bookmarks(user.id, filter.kind, page.clone())
        .await?;

    let kind = filter.kind.map(|k| k.as_str());
    let envelope = Paged::new(bookmarks, page.page(), page.page_size(), total).with_links(
        &state.config.public_base_url,
        uri.path(),
        &[("kind", kind)],
    );

    Ok(Json(envelope))
}

/// Bookmark a title or person
#[utoipa::path(
    post,
    path = "/me/bookmarks",
    tag = "Bookmarks",
    security(("bearer_auth" = [])),
    request_body = AddBookmarkRequest,
    responses(
        (status = 201, description = "Bookmark stored"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Target not found"),
        (status = 409, description = "Already bookmarked")
    )
)]
pub async fn add_bookmark(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<AddBookmarkRequest>,
) -> AppResult<Created<Bookmark>> {
    let bookmark = state
        .bookmark_service
        .add_bookmark(user.id, payload.target, payload.target_id, payload.note)
        .await?;

    Ok(Created(bookmark))
}

/// Remove one of the caller's bookmarks
#[utoipa::path(
    delete,
    path = "/me/bookmarks/{id}",
    tag = "Bookmarks",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Bookmark ID")),
    responses(
        (status = 204, description = "Bookmark removed"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Bookmark not found")
    )
)]
pub async fn remove_bookmark(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.bookmark_service.remove_bookmark(user.id, id).await?;
    Ok(NoContent)
}
