//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - session cookie verification for the room routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, Router};
//! use roomdesk::backend::middleware::auth_middleware;
//! use roomdesk::backend::server::AppState;
//!
//! fn protect(router: Router<AppState>, state: AppState) -> Router<AppState> {
//!     router.route_layer(middleware::from_fn_with_state(state, auth_middleware))
//! }
//! ```

pub mod auth;

pub use auth::{auth_middleware, token_from_cookies, AuthAdmin, AuthenticatedAdmin, TOKEN_COOKIE};
