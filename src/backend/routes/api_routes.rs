/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Admin authentication (public)
 * - `POST /adminAuth/adminSignup` - Admin registration
 * - `POST /adminAuth/adminSignin` - Admin sign in, sets the `token` cookie
 * - `POST /adminAuth/logout` - Clears the `token` cookie
 *
 * ## Rooms (require the `token` cookie)
 * - `POST /rooms/createRoom` - Create a room
 * - `GET /rooms/fetchRooms` - List rooms, optionally filtered
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{logout, signin, signup};
use crate::backend::middleware::auth_middleware;
use crate::backend::rooms::{create_room, fetch_rooms};
use crate::backend::server::state::AppState;

/// Routes mounted under `/adminAuth`
pub fn admin_auth_routes() -> Router<AppState> {
    Router::new()
        .route("/adminSignup", post(signup))
        .route("/adminSignin", post(signin))
        .route("/logout", post(logout))
}

/// Routes mounted under `/rooms`
///
/// Every route here runs behind `auth_middleware`.
pub fn room_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/createRoom", post(create_room))
        .route("/fetchRooms", get(fetch_rooms))
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware))
}

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    router
        .nest("/adminAuth", admin_auth_routes())
        .nest("/rooms", room_routes(app_state))
}
