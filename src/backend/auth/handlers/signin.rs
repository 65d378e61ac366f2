/**
 * Signin Handler
 *
 * POST /adminAuth/adminSignin
 *
 * Looks the admin up by id number, verifies the password and answers with
 * the session cookie. Every failure, including store and hashing errors,
 * produces the same 404 body so the response never reveals whether the id
 * number exists.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};

use crate::backend::auth::admins::get_admin_by_id_number;
use crate::backend::auth::handlers::cookie::session_cookie_headers;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::api::{normalize_identifier, MessageResponse, SigninRequest};

pub const SIGNIN_OK: &str = "Signed in successfully!";
pub const SIGNIN_FAILED: &str = "Error signing in!";

fn failed() -> BackendError {
    BackendError::auth(SIGNIN_FAILED).with_status(StatusCode::NOT_FOUND)
}

/// Sign in handler
///
/// # Errors
///
/// * `404 Not Found` - unknown id number, wrong password, or any internal failure
pub async fn signin(
    State(state): State<AppState>,
    payload: Result<Json<SigninRequest>, JsonRejection>,
) -> Result<(HeaderMap, Json<MessageResponse>), BackendError> {
    let Json(mut request) = payload.map_err(|e| {
        tracing::warn!("Rejected signin body: {}", e);
        failed()
    })?;
    request.id_number = normalize_identifier(&request.id_number);

    tracing::info!("Signin request for: {}", request.id_number);

    let admin = get_admin_by_id_number(&state.db_pool, &request.id_number)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            failed()
        })?
        .ok_or_else(|| {
            tracing::warn!("Admin not found: {}", request.id_number);
            failed()
        })?;

    let valid = state
        .passwords
        .verify(&request.password, &admin.password_hash)
        .await
        .map_err(|e| {
            tracing::error!("Password verification error: {}", e);
            failed()
        })?;

    if !valid {
        tracing::warn!("Invalid password for admin: {}", request.id_number);
        return Err(failed());
    }

    let token = state.sessions.issue(&admin.identity()).map_err(|e| {
        tracing::error!("Failed to create token: {}", e);
        failed()
    })?;

    let headers = session_cookie_headers(&token, state.sessions.ttl().as_secs()).map_err(|e| {
        tracing::error!("Failed to build session cookie: {}", e);
        failed()
    })?;

    tracing::info!("Admin signed in successfully: {}", admin.id_number);

    Ok((headers, Json(MessageResponse::new(SIGNIN_OK))))
}
