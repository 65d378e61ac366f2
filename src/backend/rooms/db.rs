/**
 * Room Database Operations
 *
 * Rooms live in the `rooms` table. The room standard is stored as its
 * lowercase name and parsed back into `RoomStandard` when rows are read.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::rooms::query::{build_room_query, ROOM_COLUMNS};
use crate::shared::error::SharedError;
use crate::shared::room::{Room, RoomFilter, RoomStandard};

/// Raw `rooms` row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RoomRow {
    pub id: Uuid,
    pub room_number: String,
    pub room_standard: String,
    pub room_price: String,
    pub number_of_beds: String,
    pub available: bool,
    pub pet_friendly: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<RoomRow> for Room {
    type Error = SharedError;

    fn try_from(row: RoomRow) -> Result<Self, Self::Error> {
        Ok(Room {
            id: row.id,
            room_number: row.room_number,
            room_standard: row.room_standard.parse()?,
            room_price: row.room_price,
            number_of_beds: row.number_of_beds,
            available: row.available,
            pet_friendly: row.pet_friendly,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Validated fields of a room to create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    pub room_number: String,
    pub room_standard: RoomStandard,
    pub room_price: String,
    pub number_of_beds: String,
    pub available: bool,
    pub pet_friendly: bool,
}

fn into_room(row: RoomRow) -> Result<Room, sqlx::Error> {
    Room::try_from(row).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

/// Insert a room
///
/// Fails with a unique violation if the room number is already taken.
pub async fn insert_room(pool: &SqlitePool, room: NewRoom) -> Result<Room, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let sql = format!(
        "INSERT INTO rooms ({columns}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {columns}",
        columns = ROOM_COLUMNS
    );

    let row = sqlx::query_as::<_, RoomRow>(&sql)
        .bind(id)
        .bind(&room.room_number)
        .bind(room.room_standard.as_str())
        .bind(&room.room_price)
        .bind(&room.number_of_beds)
        .bind(room.available)
        .bind(room.pet_friendly)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

    into_room(row)
}

/// Get room by room number
pub async fn get_room_by_number(
    pool: &SqlitePool,
    room_number: &str,
) -> Result<Option<Room>, sqlx::Error> {
    let sql = format!("SELECT {} FROM rooms WHERE room_number = ?", ROOM_COLUMNS);

    sqlx::query_as::<_, RoomRow>(&sql)
        .bind(room_number)
        .fetch_optional(pool)
        .await?
        .map(into_room)
        .transpose()
}

/// Rooms matching `filter`, oldest first
pub async fn find_rooms(pool: &SqlitePool, filter: &RoomFilter) -> Result<Vec<Room>, sqlx::Error> {
    let mut query = build_room_query(filter);
    let rows = query.build_query_as::<RoomRow>().fetch_all(pool).await?;
    rows.into_iter().map(into_room).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::admins::is_unique_violation;
    use crate::backend::server::config::memory_pool;

    fn new_room(number: &str, standard: RoomStandard, available: bool, pet_friendly: bool) -> NewRoom {
        NewRoom {
            room_number: number.to_string(),
            room_standard: standard,
            room_price: "300".to_string(),
            number_of_beds: "2".to_string(),
            available,
            pet_friendly,
        }
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let pool = memory_pool().await.unwrap();
        let created = insert_room(&pool, new_room("301", RoomStandard::Suite, true, false))
            .await
            .unwrap();
        assert_eq!(created.room_standard, RoomStandard::Suite);

        let fetched = get_room_by_number(&pool, "301").await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert!(get_room_by_number(&pool, "302").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_room_number_is_unique_violation() {
        let pool = memory_pool().await.unwrap();
        insert_room(&pool, new_room("301", RoomStandard::Suite, true, false))
            .await
            .unwrap();
        let error = insert_room(&pool, new_room("301", RoomStandard::Deluxe, false, true))
            .await
            .unwrap_err();
        assert!(is_unique_violation(&error));
    }

    #[tokio::test]
    async fn test_find_rooms_applies_filter() {
        let pool = memory_pool().await.unwrap();
        insert_room(&pool, new_room("101", RoomStandard::Standard, true, true)).await.unwrap();
        insert_room(&pool, new_room("102", RoomStandard::Suite, false, false)).await.unwrap();
        insert_room(&pool, new_room("103", RoomStandard::Suite, true, false)).await.unwrap();

        let all = find_rooms(&pool, &RoomFilter::all()).await.unwrap();
        let numbers: Vec<_> = all.iter().map(|r| r.room_number.as_str()).collect();
        assert_eq!(numbers, vec!["101", "102", "103"]);

        let available = find_rooms(&pool, &RoomFilter::all().available(true)).await.unwrap();
        assert_eq!(available.len(), 2);
        assert!(available.iter().all(|r| r.available));

        let suites_no_pets = find_rooms(
            &pool,
            &RoomFilter::all().room_standard("suite").pet_friendly(false),
        )
        .await
        .unwrap();
        assert_eq!(suites_no_pets.len(), 2);

        let none = find_rooms(&pool, &RoomFilter::all().room_standard("presidential"))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_stored_standard_is_decode_error() {
        let pool = memory_pool().await.unwrap();
        let now = Utc::now();
        sqlx::query(
            "INSERT INTO rooms (id, room_number, room_standard, room_price, number_of_beds, available, pet_friendly, created_at, updated_at) VALUES (?, '999', 'penthouse', '1', '1', 1, 0, ?, ?)",
        )
        .bind(Uuid::new_v4())
        .bind(now)
        .bind(now)
        .execute(&pool)
        .await
        .unwrap();

        let error = get_room_by_number(&pool, "999").await.unwrap_err();
        assert!(matches!(error, sqlx::Error::Decode(_)));
    }
}
