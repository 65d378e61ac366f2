/**
 * Room Handlers
 *
 * POST /rooms/createRoom and GET /rooms/fetchRooms. Both sit behind the
 * auth middleware, so an `AuthAdmin` is always available here.
 */

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::admins::is_unique_violation;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthAdmin;
use crate::backend::rooms::db::{find_rooms, get_room_by_number, insert_room, NewRoom};
use crate::shared::api::{CreateRoomRequest, CreateRoomResponse, RoomsResponse};
use crate::shared::room::{RoomFilter, RoomFilterQuery, RoomStandard};

pub const ROOM_CREATED: &str = "Room Created";
pub const ROOM_INVALID: &str = "Please try again!";
pub const ROOM_EXISTS: &str = "Room Already Exists";
pub const ROOM_CREATE_FAILED: &str = "Error creating room";
pub const ROOMS_FETCHED: &str = "Rooms fetched";
pub const NO_ROOMS: &str = "No rooms are created!";
pub const ROOMS_FETCH_FAILED: &str = "Error Fetching Rooms";

fn required(value: Option<String>, field: &str) -> Result<String, BackendError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => {
            tracing::warn!("Room request missing {}", field);
            Err(BackendError::validation(ROOM_INVALID))
        }
    }
}

fn required_flag(value: Option<bool>, field: &str) -> Result<bool, BackendError> {
    value.ok_or_else(|| {
        tracing::warn!("Room request missing {}", field);
        BackendError::validation(ROOM_INVALID)
    })
}

impl TryFrom<CreateRoomRequest> for NewRoom {
    type Error = BackendError;

    fn try_from(request: CreateRoomRequest) -> Result<Self, Self::Error> {
        let room_standard: RoomStandard = required(request.room_standard, "roomStandard")?
            .parse()
            .map_err(|e| {
                tracing::warn!("Room request rejected: {}", e);
                BackendError::validation(ROOM_INVALID)
            })?;

        Ok(NewRoom {
            room_number: required(request.room_number, "roomNumber")?,
            room_standard,
            room_price: required(request.room_price, "roomPrice")?,
            number_of_beds: required(request.number_of_beds, "numberOfBeds")?,
            available: required_flag(request.available, "available")?,
            pet_friendly: required_flag(request.pet_friendly, "petFriendly")?,
        })
    }
}

/// Create room handler
///
/// # Errors
///
/// * `400 Bad Request` - missing or blank field, unknown room standard
/// * `409 Conflict` - room number already exists
/// * `500 Internal Server Error` - store failure
pub async fn create_room(
    AuthAdmin(admin): AuthAdmin,
    State(pool): State<SqlitePool>,
    payload: Result<Json<CreateRoomRequest>, JsonRejection>,
) -> Result<Json<CreateRoomResponse>, BackendError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected room body: {}", e);
        BackendError::validation(ROOM_INVALID)
    })?;

    let new_room = NewRoom::try_from(request)?;

    tracing::info!(
        "Create room {} requested by admin {}",
        new_room.room_number,
        admin.id_number
    );

    let existing = get_room_by_number(&pool, &new_room.room_number)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            BackendError::dependency(ROOM_CREATE_FAILED)
        })?;
    if existing.is_some() {
        tracing::warn!("Room already exists: {}", new_room.room_number);
        return Err(BackendError::conflict(ROOM_EXISTS));
    }

    let room = insert_room(&pool, new_room).await.map_err(|e| {
        if is_unique_violation(&e) {
            tracing::warn!("Room created concurrently");
            BackendError::conflict(ROOM_EXISTS)
        } else {
            tracing::error!("Failed to create room: {:?}", e);
            BackendError::dependency(ROOM_CREATE_FAILED)
        }
    })?;

    tracing::info!("Room created successfully: {} ({})", room.room_number, room.id);

    Ok(Json(CreateRoomResponse {
        message: ROOM_CREATED.to_string(),
        room: Some(room),
    }))
}

/// Fetch rooms handler
///
/// Filters arrive as query strings; see `RoomFilter::from_query`.
///
/// # Errors
///
/// * `404 Not Found` - nothing matched
/// * `500 Internal Server Error` - unreadable query or store failure
pub async fn fetch_rooms(
    AuthAdmin(admin): AuthAdmin,
    State(pool): State<SqlitePool>,
    query: Result<Query<RoomFilterQuery>, QueryRejection>,
) -> Result<Json<RoomsResponse>, BackendError> {
    let Query(query) = query.map_err(|e| {
        tracing::warn!("Rejected room query: {}", e);
        BackendError::dependency(ROOMS_FETCH_FAILED)
    })?;

    let filter = RoomFilter::from_query(&query);
    tracing::info!("Fetch rooms for admin {} with filter {:?}", admin.id_number, filter);

    let rooms = find_rooms(&pool, &filter).await.map_err(|e| {
        tracing::error!("Failed to fetch rooms: {:?}", e);
        BackendError::dependency(ROOMS_FETCH_FAILED)
    })?;

    if rooms.is_empty() {
        return Err(BackendError::not_found(NO_ROOMS));
    }

    Ok(Json(RoomsResponse {
        message: ROOMS_FETCHED.to_string(),
        rooms,
    }))
}
