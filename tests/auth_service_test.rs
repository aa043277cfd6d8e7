//! Authentication service tests over an in-memory user repository.

mod common;

use std::sync::Arc;

use cinedex::config::Config;
use cinedex::errors::AppError;
use cinedex::services::{AuthService, Authenticator};

use common::{MemoryUsers, TestRepos};

fn test_config() -> Config {
    std::env::set_var("JWT_SECRET", "test-secret-key-for-testing-only-32chars");
    Config::from_env()
}

fn service() -> (Authenticator<TestRepos>, Arc<TestRepos>) {
    let repos = Arc::new(TestRepos {
        users: Some(Arc::new(MemoryUsers::default())),
        ..TestRepos::default()
    });

    (Authenticator::new(repos.clone(), test_config()), repos)
}

#[tokio::test]
async fn test_register_creates_account_and_event() {
    let (service, repos) = service();

    let user = service
        .register(
            "new@example.com".to_string(),
            "password123".to_string(),
            "New User".to_string(),
        )
        .await
        .unwrap();

    assert_eq!(user.email, "new@example.com");
    // Stored hash is never the plain text
    assert_ne!(user.password_hash, "password123");
    assert_eq!(repos.events.event_names(), vec!["user_registered"]);
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let (service, _repos) = service();

    service
        .register(
            "dup@example.com".to_string(),
            "password123".to_string(),
            "First".to_string(),
        )
        .await
        .unwrap();

    let result = service
        .register(
            "dup@example.com".to_string(),
            "password456".to_string(),
            "Second".to_string(),
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_register_short_password_is_rejected() {
    let (service, _repos) = service();

    let result = service
        .register(
            "short@example.com".to_string(),
            "short".to_string(),
            "Shorty".to_string(),
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_login_issues_verifiable_token() {
    let (service, _repos) = service();

    let user = service
        .register(
            "login@example.com".to_string(),
            "password123".to_string(),
            "Login User".to_string(),
        )
        .await
        .unwrap();

    let token = service
        .login("login@example.com".to_string(), "password123".to_string())
        .await
        .unwrap();

    assert_eq!(token.token_type, "Bearer");
    assert!(token.expires_in > 0);

    let claims = service.verify_token(&token.access_token).unwrap();
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.email, "login@example.com");
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn test_login_wrong_password_fails() {
    let (service, _repos) = service();

    service
        .register(
            "wrong@example.com".to_string(),
            "password123".to_string(),
            "User".to_string(),
        )
        .await
        .unwrap();

    let result = service
        .login("wrong@example.com".to_string(), "not-the-password".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_unknown_email_fails_identically() {
    let (service, _repos) = service();

    let result = service
        .login("nobody@example.com".to_string(), "password123".to_string())
        .await;

    // Unknown email and wrong password are indistinguishable to the caller
    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_verify_garbage_token_fails() {
    let (service, _repos) = service();

    assert!(service.verify_token("not-a-jwt").is_err());
}
