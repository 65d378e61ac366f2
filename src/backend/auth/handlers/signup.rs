/**
 * Signup Handler
 *
 * POST /adminAuth/adminSignup
 *
 * # Registration Process
 *
 * 1. Password and confirmation must match
 * 2. The id number must not be taken
 * 3. Every identity field must be present
 * 4. Hash the password and store the admin
 *
 * Steps 1 and 2 fail with the same 404 body so a caller cannot tell a typo
 * from a taken id number. Anything else that goes wrong is a 400.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::admins::{create_admin, get_admin_by_id_number, is_unique_violation, NewAdmin};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::api::{normalize_identifier, MessageResponse, SignupRequest};

pub const SIGNUP_OK: &str = "Signed up successfull!";
pub const SIGNUP_REJECTED: &str = "Sign up failed! please try again";
pub const SIGNUP_FAILED: &str = "Signup FAILED!";

fn rejected_mismatch() -> BackendError {
    BackendError::validation(SIGNUP_REJECTED).with_status(StatusCode::NOT_FOUND)
}

fn rejected_duplicate() -> BackendError {
    BackendError::conflict(SIGNUP_REJECTED).with_status(StatusCode::NOT_FOUND)
}

fn failed() -> BackendError {
    BackendError::validation(SIGNUP_FAILED)
}

/// Sign up handler
///
/// # Errors
///
/// * `404 Not Found` - password confirmation mismatch or id number taken
/// * `400 Bad Request` - malformed body, missing field, hashing or store failure
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, BackendError> {
    let Json(mut request) = payload.map_err(|e| {
        tracing::warn!("Rejected signup body: {}", e);
        failed()
    })?;
    request.id_number = normalize_identifier(&request.id_number);

    tracing::info!("Signup request for id number: {}", request.id_number);

    if request.password != request.confirm_password {
        tracing::warn!("Password confirmation mismatch for: {}", request.id_number);
        return Err(rejected_mismatch());
    }

    let existing = get_admin_by_id_number(&state.db_pool, &request.id_number)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            failed()
        })?;
    if existing.is_some() {
        tracing::warn!("Id number already registered: {}", request.id_number);
        return Err(rejected_duplicate());
    }

    let missing = request.missing_fields();
    if !missing.is_empty() {
        tracing::warn!("Signup missing fields: {}", missing.join(", "));
        return Err(failed());
    }

    let password_hash = state.passwords.hash(&request.password).await.map_err(|e| {
        tracing::error!("Failed to hash password: {}", e);
        failed()
    })?;

    let admin = create_admin(
        &state.db_pool,
        NewAdmin {
            first_name: request.first_name,
            middle_name: request.middle_name,
            last_name: request.last_name,
            email: request.email,
            id_number: request.id_number,
            password_hash,
        },
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            tracing::warn!("Id number registered concurrently");
            rejected_duplicate()
        } else {
            tracing::error!("Failed to create admin: {:?}", e);
            failed()
        }
    })?;

    tracing::info!("Admin created successfully: {} ({})", admin.id_number, admin.id);

    Ok(Json(MessageResponse::new(SIGNUP_OK)))
}
