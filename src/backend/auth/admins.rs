/**
 * Admin Model and Database Operations
 *
 * Admin records live in the `admins` table. The id number is the business
 * identifier admins sign in with; the UUID is the surrogate key embedded in
 * session tokens.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::sessions::AdminIdentity;

/// Admin struct representing an admin in the database
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Admin {
    /// Unique admin ID (UUID)
    pub id: Uuid,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    /// Business identifier, unique
    pub id_number: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Admin {
    /// Identity carried in this admin's session token
    pub fn identity(&self) -> AdminIdentity {
        AdminIdentity {
            id: self.id,
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Fields needed to create an admin
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub id_number: String,
    pub password_hash: String,
}

/// Create a new admin
///
/// Fails with a unique violation if the id number is already taken.
pub async fn create_admin(pool: &SqlitePool, admin: NewAdmin) -> Result<Admin, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let admin = sqlx::query_as::<_, Admin>(
        r#"
        INSERT INTO admins (id, first_name, middle_name, last_name, email, id_number, password_hash, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, first_name, middle_name, last_name, email, id_number, password_hash, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&admin.first_name)
    .bind(&admin.middle_name)
    .bind(&admin.last_name)
    .bind(&admin.email)
    .bind(&admin.id_number)
    .bind(&admin.password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(admin)
}

/// Get admin by id number
pub async fn get_admin_by_id_number(
    pool: &SqlitePool,
    id_number: &str,
) -> Result<Option<Admin>, sqlx::Error> {
    let admin = sqlx::query_as::<_, Admin>(
        r#"
        SELECT id, first_name, middle_name, last_name, email, id_number, password_hash, created_at, updated_at
        FROM admins
        WHERE id_number = ?
        "#,
    )
    .bind(id_number)
    .fetch_optional(pool)
    .await?;

    Ok(admin)
}

/// Get admin by ID
pub async fn get_admin_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Admin>, sqlx::Error> {
    let admin = sqlx::query_as::<_, Admin>(
        r#"
        SELECT id, first_name, middle_name, last_name, email, id_number, password_hash, created_at, updated_at
        FROM admins
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(admin)
}

/// True when `error` is a UNIQUE constraint violation
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(e) if e.is_unique_violation())
}
