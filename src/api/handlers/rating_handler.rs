//! Rating handlers for the authenticated user.

use axum::{
    extract::{OriginalUri, Path, Query, State},
    response::Json,
    routing::{get, put},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::RatingResponse;
use crate::errors::{AppError, AppResult};
use crate::types::{NoContent, PageRequest, Paged};

/// Request body for rating a title
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RateTitleRequest {
    /// Score on the 1..=10 scale
    #[validate(range(min = 1, max = 10, message = "Score must be between 1 and 10"))]
    #[schema(example = 8, minimum = 1, maximum = 10)]
    pub score: i16,
    /// Optional review text
    #[validate(length(max = 2000, message = "Review must be at most 2000 characters"))]
    pub review: Option<String>,
}

/// Create protected rating routes
pub fn rating_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/titles/:id/rating",
            put(rate_title).get(get_own_rating).delete(delete_rating),
        )
        .route("/me/ratings", get(my_ratings))
}

/// Rate a title (creates or revises the caller's rating)
#[utoipa::path(
    put,
    path = "/titles/{id}/rating",
    tag = "Ratings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Title ID")),
    request_body = RateTitleRequest,
    responses(
        (status = 200, description = "Rating stored", body = RatingResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Title not found")
    )
)]
pub async fn rate_title(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(title_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<RateTitleRequest>,
) -> AppResult<Json<RatingResponse>> {
    let rating = state
        .rating_service
        .rate_title(user.id, title_id, payload.score, payload.review)
        .await?;

    // The cached detail carries stale aggregates now
    if let Err(e) = state.cache.invalidate_title(title_id).await {
        tracing::warn!("Failed to invalidate title cache: {}", e);
    }

    Ok(Json(RatingResponse::from(rating)))
}

/// The caller's rating of a title
#[utoipa::path(
    get,
    path = "/titles/{id}/rating",
    tag = "Ratings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Title ID")),
    responses(
        (status = 200, description = "The caller's rating", body = RatingResponse),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Title not rated by the caller")
    )
)]
pub async fn get_own_rating(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(title_id): Path<Uuid>,
) -> AppResult<Json<RatingResponse>> {
    let rating = state
        .rating_service
        .get_own_rating(user.id, title_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(RatingResponse::from(rating)))
}

/// Remove the caller's rating of a title
#[utoipa::path(
    delete,
    path = "/titles/{id}/rating",
    tag = "Ratings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Title ID")),
    responses(
        (status = 204, description = "Rating removed"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Title not rated by the caller")
    )
)]
pub async fn delete_rating(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(title_id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.rating_service.delete_rating(user.id, title_id).await?;

    if let Err(e) = state.cache.invalidate_title(title_id).await {
        tracing::warn!("Failed to invalidate title cache: {}", e);
    }

    Ok(NoContent)
}

/// The caller's rating history, most recently revised first
#[utoipa::path(
    get,
    path = "/me/ratings",
    tag = "Ratings",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-indexed"),
        ("pageSize" = Option<u64>, Query, description = "Items per page, capped at 100")
    ),
    responses(
        (status = 200, description = "Paged rating envelope with navigation links"),
        (status = 401, description = "Authentication required")
    )
)]
pub async fn my_ratings(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Extension(user): Extension<CurrentUser>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Paged<RatingResponse>>> {
    let (ratings, total) = state
        .rating_service
        .user_ratings(user.id, page.clone())
        .await?;

    let envelope = Paged::new(
        ratings.into_iter().map(RatingResponse::from).collect(),
        page.page(),
        page.page_size(),
        total,
    )
    .with_links(&state.config.public_base_url, uri.path(), &[]);

    Ok(Json(envelope))
}
