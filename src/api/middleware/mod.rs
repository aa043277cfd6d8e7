//! HTTP middleware.

mod auth;
mod rate_limit;

pub use auth::{auth_middleware, maybe_current_user, CurrentUser};
pub use rate_limit::{rate_limit_auth_middleware, rate_limit_middleware};
