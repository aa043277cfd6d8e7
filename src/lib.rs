//! cinedex - Movie-database REST API
//!
//! A layered Axum + SeaORM backend for browsing a movie catalog and
//! managing per-user ratings, bookmarks and search history, with JWT
//! authentication and hypermedia-paginated list endpoints.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and the domain event side channel
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, repositories, cache)
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination envelope, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, User, UserRole};
pub use errors::{AppError, AppResult};
pub use infra::Cache;
