/**
 * Server Configuration
 *
 * Loading and validation of server configuration, plus the SQLite
 * connection pool.
 *
 * # Configuration Sources
 *
 * Defaults, then an optional TOML file named by `ROOMDESK_CONFIG`, then
 * environment variables (a `.env` file is loaded by the binary first):
 *
 * | Key               | Env                            | Default                |
 * |-------------------|--------------------------------|------------------------|
 * | `port`            | `PORT`                         | 5002                   |
 * | `database_url`    | `DATABASE_URL`                 | `sqlite://roomdesk.db` |
 * | `jwt_secret`      | `JWT_SECRET` (fallback `KEY`)  | required               |
 * | `bcrypt_cost`     | `BCRYPT_COST`                  | 12                     |
 * | `token_ttl_hours` | `TOKEN_TTL_HOURS`              | 24                     |
 * | `cors_origins`    | `CORS_ORIGINS` (comma list)    | empty                  |
 *
 * Unlike optional services, a bad configuration stops startup.
 */

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

/// Valid bcrypt work factors
pub const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Longest accepted session lifetime (one year)
pub const MAX_TOKEN_TTL_HOURS: u64 = 24 * 365;

/// Configuration errors; all of them are fatal at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to parse config file: {0}")]
    Parse(String),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("JWT_SECRET (or KEY) must be set")]
    MissingSecret,

    #[error("bcrypt cost must be between 4 and 31, got {0}")]
    BcryptCost(u32),

    #[error("token lifetime must be at least one hour")]
    ZeroTtl,
}

/// Database setup errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("database connection failed: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("database migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to listen on (all interfaces)
    pub port: u16,

    /// SQLite connection string; the file is created if missing
    pub database_url: String,

    /// Session token signing secret
    #[serde(skip_serializing)]
    pub jwt_secret: Option<String>,

    /// bcrypt work factor
    pub bcrypt_cost: u32,

    /// Session token lifetime in hours
    pub token_ttl_hours: u64,

    /// Origins allowed to make credentialed cross-origin requests
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5002,
            database_url: "sqlite://roomdesk.db".to_string(),
            jwt_secret: None,
            bcrypt_cost: 12,
            token_ttl_hours: 24,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load from `ROOMDESK_CONFIG` (if set) and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("ROOMDESK_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Overlay values found through `lookup` (normally the environment)
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.port = parse_value("PORT", &port)?;
        }

        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }

        if let Some(secret) = lookup("JWT_SECRET").or_else(|| lookup("KEY")) {
            self.jwt_secret = Some(secret);
        }

        if let Some(cost) = lookup("BCRYPT_COST") {
            self.bcrypt_cost = parse_value("BCRYPT_COST", &cost)?;
        }

        if let Some(hours) = lookup("TOKEN_TTL_HOURS") {
            self.token_ttl_hours = parse_value("TOKEN_TTL_HOURS", &hours)?;
        }

        if let Some(origins) = lookup("CORS_ORIGINS") {
            self.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.jwt_secret.as_deref() {
            Some(secret) if !secret.is_empty() => {}
            _ => return Err(ConfigError::MissingSecret),
        }

        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(ConfigError::BcryptCost(self.bcrypt_cost));
        }

        if self.token_ttl_hours == 0 {
            return Err(ConfigError::ZeroTtl);
        }

        if self.token_ttl_hours > MAX_TOKEN_TTL_HOURS {
            return Err(ConfigError::InvalidValue {
                key: "token_ttl_hours",
                value: self.token_ttl_hours.to_string(),
            });
        }

        Ok(())
    }

    /// Signing secret; empty until `validate` has passed
    pub fn secret(&self) -> &str {
        self.jwt_secret.as_deref().unwrap_or_default()
    }

    /// Session lifetime; saturates for values `validate` rejects
    pub fn token_ttl(&self) -> Duration {
        self.token_ttl_hours
            .checked_mul(60 * 60)
            .map(Duration::from_secs)
            .unwrap_or(Duration::MAX)
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// Connect to the database and bring its schema up to date
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, DatabaseError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    tracing::info!("Database connection pool created successfully");

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Apply pending migrations from `migrations/`
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DatabaseError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        e
    })?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Migrated in-memory database
///
/// A single connection that never expires, since every new in-memory
/// connection opens an empty database.
pub async fn memory_pool() -> Result<SqlitePool, DatabaseError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
