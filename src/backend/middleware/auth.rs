/**
 * Authentication Middleware
 *
 * Protects the room routes. The session token is read from the `token`
 * cookie, verified, and resolved to an existing admin whose identity is
 * attached to the request extensions for handlers.
 *
 * # Outcomes
 *
 * - no cookie, or a token that fails verification: 403 "Invalid Token"
 * - valid token, admin missing or lookup failed: 404 "Failed to verify Admin"
 * - otherwise the request continues with `AuthenticatedAdmin` attached
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::COOKIE, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::admins::get_admin_by_id;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Name of the session cookie
pub const TOKEN_COOKIE: &str = "token";

pub const INVALID_TOKEN: &str = "Invalid Token";
pub const ADMIN_NOT_VERIFIED: &str = "Failed to verify Admin";

/// Admin resolved by the auth middleware
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedAdmin {
    pub admin_id: Uuid,
    pub id_number: String,
    pub first_name: String,
    pub last_name: String,
}

/// Value of the `token` cookie, if any
///
/// Looks through every `Cookie` header; the first `token` pair wins.
pub fn token_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == TOKEN_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Authentication middleware
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = token_from_cookies(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing session cookie");
        BackendError::auth(INVALID_TOKEN)
    })?;

    let identity = app_state.sessions.verify(&token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::auth(INVALID_TOKEN)
    })?;

    let admin = get_admin_by_id(&app_state.db_pool, identity.id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up admin {}: {:?}", identity.id, e);
            BackendError::not_found(ADMIN_NOT_VERIFIED)
        })?
        .ok_or_else(|| {
            tracing::warn!("Admin in token no longer exists: {}", identity.id);
            BackendError::not_found(ADMIN_NOT_VERIFIED)
        })?;

    request.extensions_mut().insert(AuthenticatedAdmin {
        admin_id: admin.id,
        id_number: admin.id_number,
        first_name: admin.first_name,
        last_name: admin.last_name,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated admin
///
/// Only usable behind `auth_middleware`; elsewhere it rejects with 403.
#[derive(Clone, Debug)]
pub struct AuthAdmin(pub AuthenticatedAdmin);

impl<S> FromRequestParts<S> for AuthAdmin
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let admin = parts
            .extensions
            .get::<AuthenticatedAdmin>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedAdmin not found in request extensions");
                BackendError::auth(INVALID_TOKEN)
            })?;

        Ok(AuthAdmin(admin))
    }
}
