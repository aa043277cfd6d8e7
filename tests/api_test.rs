//! API-level contract tests.
//!
//! These exercise the response types, error mapping and the account
//! service without requiring database or Redis connections.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use cinedex::domain::UserRole;
use cinedex::errors::AppError;
use cinedex::services::{AccountManager, AccountService, Authenticator, AuthService};
use cinedex::types::{Paged, PageRequest};
use cinedex::Config;

use common::{MemoryUsers, TestRepos};

// =============================================================================
// Error Mapping
// =============================================================================

#[tokio::test]
async fn test_app_error_status_codes() {
    let cases = [
        (AppError::NotFound, StatusCode::NOT_FOUND),
        (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
        (AppError::InvalidCredentials, StatusCode::UNAUTHORIZED),
        (AppError::Forbidden, StatusCode::FORBIDDEN),
        (AppError::conflict("Bookmark"), StatusCode::CONFLICT),
        (AppError::validation("bad input"), StatusCode::BAD_REQUEST),
        (
            AppError::internal("boom"),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        let response = error.into_response();
        assert_eq!(response.status(), expected);
    }
}

// =============================================================================
// Domain Model
// =============================================================================

#[tokio::test]
async fn test_user_role_conversions() {
    assert_eq!(UserRole::User.to_string(), "user");
    assert_eq!(UserRole::Admin.to_string(), "admin");
    assert_eq!(UserRole::from("admin"), UserRole::Admin);
    // Unknown values default to the regular role
    assert_eq!(UserRole::from("invalid"), UserRole::User);
}

// =============================================================================
// Pagination Envelope Contract
// =============================================================================

#[tokio::test]
async fn test_envelope_matches_wire_contract() {
    let envelope = Paged::new(vec!["a", "b"], 3, 20, 95).with_links(
        "http://localhost:3000",
        "/titles",
        &[("q", Some("runner"))],
    );

    let json = serde_json::to_value(&envelope).unwrap();

    for key in ["items", "page", "pageSize", "totalItems", "totalPages", "links"] {
        assert!(json.get(key).is_some(), "missing key: {}", key);
    }
    assert_eq!(json["totalPages"], 5);

    let links = json["links"].as_object().unwrap();
    assert_eq!(links.len(), 5);
    for rel in ["self", "first", "prev", "next", "last"] {
        assert!(links.contains_key(rel), "missing relation: {}", rel);
    }

    for link in links.values() {
        let href = link["href"].as_str().unwrap();
        assert!(href.starts_with("http://localhost:3000/titles?"));
        assert!(href.contains("q=runner"));
        assert_eq!(link["method"], "GET");
    }
}

#[tokio::test]
async fn test_page_request_query_deserialization() {
    // pageSize is the wire name; both fields default
    let req: PageRequest = serde_urlencoded::from_str("page=2&pageSize=50").unwrap();
    assert_eq!(req.page(), 2);
    assert_eq!(req.page_size(), 50);

    let req: PageRequest = serde_urlencoded::from_str("").unwrap();
    assert_eq!(req.page(), 1);
    assert_eq!(req.page_size(), 20);
}

// =============================================================================
// Account Service
// =============================================================================

fn test_config() -> Config {
    std::env::set_var("JWT_SECRET", "test-secret-key-for-testing-only-32chars");
    Config::from_env()
}

fn account_fixture() -> (AccountManager<TestRepos>, Authenticator<TestRepos>, Arc<TestRepos>) {
    let repos = Arc::new(TestRepos {
        users: Some(Arc::new(MemoryUsers::default())),
        ..TestRepos::default()
    });

    (
        AccountManager::new(repos.clone()),
        Authenticator::new(repos.clone(), test_config()),
        repos,
    )
}

#[tokio::test]
async fn test_update_name_and_fetch_profile() {
    let (accounts, auth, _repos) = account_fixture();

    let user = auth
        .register(
            "profile@example.com".to_string(),
            "password123".to_string(),
            "Before".to_string(),
        )
        .await
        .unwrap();

    let updated = accounts
        .update_name(user.id, "After".to_string())
        .await
        .unwrap();
    assert_eq!(updated.name, "After");

    let fetched = accounts.get_account(user.id).await.unwrap();
    assert_eq!(fetched.name, "After");
}

#[tokio::test]
async fn test_change_password_requires_current() {
    let (accounts, auth, _repos) = account_fixture();

    let user = auth
        .register(
            "pw@example.com".to_string(),
            "password123".to_string(),
            "User".to_string(),
        )
        .await
        .unwrap();

    let result = accounts
        .change_password(
            user.id,
            "wrong-password".to_string(),
            "newpassword456".to_string(),
        )
        .await;
    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));

    accounts
        .change_password(
            user.id,
            "password123".to_string(),
            "newpassword456".to_string(),
        )
        .await
        .unwrap();

    // Old password no longer works, new one does
    assert!(auth
        .login("pw@example.com".to_string(), "password123".to_string())
        .await
        .is_err());
    assert!(auth
        .login("pw@example.com".to_string(), "newpassword456".to_string())
        .await
        .is_ok());
}

#[tokio::test]
async fn test_close_account_records_event() {
    let (accounts, auth, repos) = account_fixture();

    let user = auth
        .register(
            "close@example.com".to_string(),
            "password123".to_string(),
            "User".to_string(),
        )
        .await
        .unwrap();

    accounts.close_account(user.id).await.unwrap();

    assert!(matches!(
        accounts.get_account(user.id).await.unwrap_err(),
        AppError::NotFound
    ));
    assert_eq!(
        repos.events.event_names(),
        vec!["user_registered", "account_closed"]
    );
}

#[tokio::test]
async fn test_get_missing_account_is_not_found() {
    let (accounts, _auth, _repos) = account_fixture();

    let result = accounts.get_account(Uuid::new_v4()).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}
