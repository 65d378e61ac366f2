/**
 * Logout Handler
 *
 * POST /adminAuth/logout
 *
 * Sessions live only in the token, so logging out just tells the browser to
 * drop the cookie. A copied token keeps working until it expires.
 */

use axum::{http::HeaderMap, response::Json};

use crate::backend::auth::handlers::cookie::clearing_cookie_headers;
use crate::shared::api::MessageResponse;

pub const LOGOUT_OK: &str = "Logged out successfully!";

pub async fn logout() -> (HeaderMap, Json<MessageResponse>) {
    tracing::info!("Admin logged out");
    (clearing_cookie_headers(), Json(MessageResponse::new(LOGOUT_OK)))
}
