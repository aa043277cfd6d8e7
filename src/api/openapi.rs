//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    account_handler, auth_handler, bookmark_handler, history_handler, person_handler,
    rating_handler, title_handler,
};
use crate::domain::{
    BookmarkResponse, BookmarkTarget, CastMember, FilmographyEntry, PersonSummary, RatingResponse,
    SearchEntryResponse, TitleDetail, TitleSummary, UserResponse, UserRole,
};
use crate::services::TokenResponse;

/// OpenAPI documentation for the cinedex API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "cinedex",
        version = "0.1.0",
        description = "Movie-database REST API: catalog browsing, ratings, bookmarks and search history",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // Catalog endpoints
        title_handler::list_titles,
        title_handler::get_title,
        title_handler::title_cast,
        title_handler::title_ratings,
        person_handler::list_people,
        person_handler::get_person,
        person_handler::filmography,
        // Rating endpoints
        rating_handler::rate_title,
        rating_handler::get_own_rating,
        rating_handler::delete_rating,
        rating_handler::my_ratings,
        // Account endpoints
        account_handler::get_profile,
        account_handler::update_profile,
        account_handler::change_password,
        account_handler::close_account,
        // Bookmark endpoints
        bookmark_handler::list_bookmarks,
        bookmark_handler::add_bookmark,
        bookmark_handler::remove_bookmark,
        // Search history endpoints
        history_handler::list_history,
        history_handler::delete_entry,
        history_handler::clear_history,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            UserResponse,
            TitleSummary,
            TitleDetail,
            PersonSummary,
            CastMember,
            FilmographyEntry,
            RatingResponse,
            BookmarkTarget,
            BookmarkResponse,
            SearchEntryResponse,
            // Auth types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            TokenResponse,
            // Request types
            rating_handler::RateTitleRequest,
            account_handler::UpdateProfileRequest,
            account_handler::ChangePasswordRequest,
            bookmark_handler::AddBookmarkRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Account registration and login"),
        (name = "Catalog", description = "Title and person browsing"),
        (name = "Ratings", description = "Scoring titles"),
        (name = "Account", description = "Profile management"),
        (name = "Bookmarks", description = "Saved titles and people"),
        (name = "Search History", description = "Recorded catalog searches")
    )
)]
pub struct ApiDoc;

/// Adds the bearer token security scheme to the OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
