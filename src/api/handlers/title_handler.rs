//! Title catalog handlers.

use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::HeaderMap,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::middleware::maybe_current_user;
use crate::api::AppState;
use crate::domain::{CastMember, RatingResponse, TitleDetail, TitleSummary};
use crate::errors::AppResult;
use crate::infra::Cache;
use crate::types::{PageRequest, Paged};

/// Catalog listing filters
#[derive(Debug, Deserialize)]
pub struct TitleFilter {
    /// Substring match on the title name
    pub q: Option<String>,
    /// Exact release year
    pub year: Option<i32>,
}

/// Create public title routes
pub fn title_routes() -> Router<AppState> {
    Router::new()
        .route("/titles", get(list_titles))
        .route("/titles/:id", get(get_title))
        .route("/titles/:id/cast", get(title_cast))
        .route("/titles/:id/ratings", get(title_ratings))
}

/// Browse and search titles
#[utoipa::path(
    get,
    path = "/titles",
    tag = "Catalog",
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-indexed"),
        ("pageSize" = Option<u64>, Query, description = "Items per page, capped at 100"),
        ("q" = Option<String>, Query, description = "Substring match on the title name"),
        ("year" = Option<i32>, Query, description = "Exact release year")
    ),
    responses(
        (status = 200, description = "Paged title envelope with navigation links")
    )
)]
pub async fn list_titles(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Query(page): Query<PageRequest>,
    Query(filter): Query<TitleFilter>,
) -> AppResult<Json<Paged<TitleSummary>>> {
    let (titles, total) = state
        .catalog_service
        .list_titles(filter.q.clone(), filter.year, page.clone())
        .await?;

    // A signed-in caller's search lands in their history; anonymous
    // browsing is never recorded.
    if let (Some(query), Some(user)) = (&filter.q, maybe_current_user(&headers, &state)) {
        if let Err(e) = state
            .history_service
            .record_search(user.id, query.clone())
            .await
        {
            tracing::warn!("Failed to record search: {}", e);
        }
    }

    let year = filter.year.map(|y| y.to_string());
    let envelope = Paged::new(
        titles.into_iter().map(TitleSummary::from).collect(),
        page.page(),
        page.page_size(),
        total,
    )
    .with_links(
        &state.config.public_base_url,
        uri.path(),
        &[("q", filter.q.as_deref()), ("year", year.as_deref())],
    );

    Ok(Json(envelope))
}

/// Title detail with aggregated rating figures
#[utoipa::path(
    get,
    path = "/titles/{id}",
    tag = "Catalog",
    params(("id" = Uuid, Path, description = "Title ID")),
    responses(
        (status = 200, description = "Title detail", body = TitleDetail),
        (status = 404, description = "Title not found")
    )
)]
pub async fn get_title(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TitleDetail>> {
    let cache_key = Cache::title_key(id);

    // Serve from cache when possible; a cache failure only costs a lookup
    if let Ok(Some(detail)) = state.cache.get::<TitleDetail>(&cache_key).await {
        return Ok(Json(detail));
    }

    let detail = state.catalog_service.get_title(id).await?;

    if let Err(e) = state.cache.set(&cache_key, &detail).await {
        tracing::warn!("Failed to cache title detail: {}", e);
    }

    Ok(Json(detail))
}

/// A title's cast, paginated
#[utoipa::path(
    get,
    path = "/titles/{id}/cast",
    tag = "Catalog",
    params(
        ("id" = Uuid, Path, description = "Title ID"),
        ("page" = Option<u64>, Query, description = "Page number, 1-indexed"),
        ("pageSize" = Option<u64>, Query, description = "Items per page, capped at 100")
    ),
    responses(
        (status = 200, description = "Paged cast envelope with navigation links"),
        (status = 404, description = "Title not found")
    )
)]
pub async fn title_cast(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<Uuid>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Paged<CastMember>>> {
    let (members, total) = state.catalog_service.title_cast(id, page.clone()).await?;

    let envelope = Paged::new(members, page.page(), page.page_size(), total).with_links(
        &state.config.public_base_url,
        uri.path(),
        &[],
    );

    Ok(Json(envelope))
}

/// A title's ratings, newest first
#[utoipa::path(
    get,
    path = "/titles/{id}/ratings",
    tag = "Ratings",
    params(
        ("id" = Uuid, Path, description = "Title ID"),
        ("page" = Option<u64>, Query, description = "Page number, 1-indexed"),
        ("pageSize" = Option<u64>, Query, description = "Items per page, capped at 100")
    ),
    responses(
        (status = 200, description = "Paged rating envelope with navigation links"),
        (status = 404, description = "Title not found")
    )
)]
pub async fn title_ratings(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<Uuid>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Paged<RatingResponse>>> {
    let (ratings, total) = state.rating_service.title_ratings(id, page.clone()).await?;

    let envelope = Paged::new(
        ratings.into_iter().map(RatingResponse::from).collect(),
        page.page(),
        page.page_size(),
        total,
    )
    .with_links(&state.config.public_base_url, uri.path(), &[]);

    Ok(Json(envelope))
}
