//! Person catalog handlers.

use axum::{
    extract::{OriginalUri, Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::AppState;
use crate::domain::{FilmographyEntry, Person, PersonSummary};
use crate::errors::AppResult;
use crate::types::{PageRequest, Paged};

/// Person listing filter
#[derive(Debug, Deserialize)]
pub struct PersonFilter {
    /// Substring match on the person name
    pub q: Option<String>,
}

/// Create public person routes
pub fn person_routes() -> Router<AppState> {
    Router::new()
        .route("/people", get(list_people))
        .route("/people/:id", get(get_person))
        .route("/people/:id/titles", get(filmography))
}

/// Browse and search people
#[utoipa::path(
    get,
    path = "/people",
    tag = "Catalog",
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-indexed"),
        ("pageSize" = Option<u64>, Query, description = "Items per page, capped at 100"),
        ("q" = Option<String>, Query, description = "Substring match on the person name")
    ),
    responses(
        (status = 200, description = "Paged person envelope with navigation links")
    )
)]
pub async fn list_people(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(page): Query<PageRequest>,
    Query(filter): Query<PersonFilter>,
) -> AppResult<Json<Paged<PersonSummary>>> {
    let (people, total) = state
        .catalog_service
        .list_people(filter.q.clone(), page.clone())
        .await?;

    let envelope = Paged::new(
        people.into_iter().map(PersonSummary::from).collect(),
        page.page(),
        page.page_size(),
        total,
    )
    .with_links(
        &state.config.public_base_url,
        uri.path(),
        &[("q", filter.q.as_deref())],
    );

    Ok(Json(envelope))
}

/// Person detail
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = "Catalog",
    params(("id" = Uuid, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person detail"),
        (status = 404, description = "Person not found")
    )
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Person>> {
    let person = state.catalog_service.get_person(id).await?;
    Ok(Json(person))
}

/// The titles a person appeared in, paginated
#[utoipa::path(
    get,
    path = "/people/{id}/titles",
    tag = "Catalog",
    params(
        ("id" = Uuid, Path, description = "Person ID"),
        ("page" = Option<u64>, Query, description = "Page number, 1-indexed"),
        ("pageSize" = Option<u64>, Query, description = "Items per page, capped at 100")
    ),
    responses(
        (status = 200, description = "Paged filmography envelope with navigation links"),
        (status = 404, description = "Person not found")
    )
)]
pub async fn filmography(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<Uuid>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Paged<FilmographyEntry>>> {
    let (entries, total) = state.catalog_service.filmography(id, page.clone()).await?;

    let envelope = Paged::new(entries, page.page(), page.page_size(), total).with_links(
        &state.config.public_base_url,
        uri.path(),
        &[],
    );

    Ok(Json(envelope))
}
