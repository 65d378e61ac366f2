/**
 * Error Conversion
 *
 * Turns backend errors into HTTP responses. Every error renders as
 *
 * ```json
 * { "message": "Error signing in!" }
 * ```
 *
 * with the status carried by the error.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;
use crate::shared::api::MessageResponse;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(MessageResponse::new(self.message()))).into_response()
    }
}
