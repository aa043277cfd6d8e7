//! Account handlers for the authenticated user.

use axum::{
    extract::State,
    response::Json,
    routing::{get, put},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::types::{MessageResponse, NoContent};

/// Request body for updating the display name
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    /// New display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Jane Doe")]
    pub name: String,
}

/// Request body for changing the password
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChangePasswordRequest {
    /// Current password, verified before the change
    pub current_password: String,
    /// New password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(min_length = 8)]
    pub new_password: String,
}

/// Create protected account routes
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/me",
            get(get_profile).patch(update_profile).delete(close_account),
        )
        .route("/me/password", put(change_password))
}

/// The caller's profile
#[utoipa::path(
    get,
    path = "/me",
    tag = "Account",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Account profile", body = UserResponse),
        (status = 401, description = "Authentication required")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<UserResponse>> {
    let account = state.account_service.get_account(user.id).await?;
    Ok(Json(UserResponse::from(account)))
}

/// Update the caller's display name
#[utoipa::path(
    patch,
    path = "/me",
    tag = "Account",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required")
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    let account = state
        .account_service
        .update_name(user.id, payload.name)
        .await?;

    Ok(Json(UserResponse::from(account)))
}

/// Change the caller's password
#[utoipa::path(
    put,
    path = "/me/password",
    tag = "Account",
    security(("bearer_auth" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Current password incorrect")
    )
)]
pub async fn change_password(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .account_service
        .change_password(user.id, payload.current_password, payload.new_password)
        .await?;

    Ok(Json(MessageResponse::new("Password changed")))
}

/// Permanently close the caller's account
#[utoipa::path(
    delete,
    path = "/me",
    tag = "Account",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Account closed"),
        (status = 401, description = "Authentication required")
    )
)]
pub async fn close_account(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<NoContent> {
    state.account_service.close_account(user.id).await?;
    Ok(NoContent)
}
