/**
 * Room Store
 *
 * Client-side cache of rooms plus the loading/error state of the last
 * request. Only the rooms are persisted, as JSON, so a restarted client
 * shows the last list it saw until the next fetch.
 *
 * A failed request leaves `rooms` as it was and records the server's
 * message, or a fallback when the server sent none.
 */

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::client::api::{ApiClient, ClientError};
use crate::shared::api::CreateRoomRequest;
use crate::shared::error::SharedError;
use crate::shared::room::{Room, RoomFilter};

pub const FETCH_FALLBACK: &str = "Failed to fetch rooms";
pub const ADD_FALLBACK: &str = "Failed to add room";

/// On-disk shape of the cache
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedRooms {
    rooms: Vec<Room>,
}

#[derive(Debug, Clone, Default)]
pub struct RoomStore {
    pub rooms: Vec<Room>,
    pub loading: bool,
    pub error: Option<String>,
    storage_path: Option<PathBuf>,
}

impl RoomStore {
    /// Empty store persisted at `storage_path` (or nowhere)
    pub fn new(storage_path: Option<PathBuf>) -> Self {
        Self {
            storage_path,
            ..Self::default()
        }
    }

    /// Store with rooms restored from `storage_path`
    ///
    /// A missing file is an empty cache; an unreadable one is an error.
    pub fn open(storage_path: Option<PathBuf>) -> Result<Self, ClientError> {
        let mut store = Self::new(storage_path);
        if let Some(path) = &store.storage_path {
            if path.exists() {
                store.rooms = load_rooms(path)?;
                tracing::debug!("Restored {} rooms from {}", store.rooms.len(), path.display());
            }
        }
        Ok(store)
    }

    pub fn storage_path(&self) -> Option<&Path> {
        self.storage_path.as_deref()
    }

    /// Write the rooms to the storage file, if there is one
    pub fn persist(&self) -> Result<(), ClientError> {
        let Some(path) = &self.storage_path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&PersistedRooms {
            rooms: self.rooms.clone(),
        })
        .map_err(SharedError::from)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn persist_quietly(&self) {
        if let Err(e) = self.persist() {
            tracing::warn!("Failed to persist rooms: {}", e);
        }
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn fail(&mut self, error: &ClientError, fallback: &str) {
        self.loading = false;
        self.error = Some(error.server_message().unwrap_or(fallback).to_string());
    }

    /// Replace the cached rooms with the server's list for `filter`
    pub async fn fetch_rooms(
        &mut self,
        api: &ApiClient,
        filter: &RoomFilter,
    ) -> Result<&[Room], ClientError> {
        self.begin();

        match api.fetch_rooms(filter).await {
            Ok(rooms) => {
                self.rooms = rooms;
                self.loading = false;
                self.persist_quietly();
                Ok(&self.rooms)
            }
            Err(e) => {
                self.fail(&e, FETCH_FALLBACK);
                Err(e)
            }
        }
    }

    /// Create a room and append it to the cache
    pub async fn add_room(
        &mut self,
        api: &ApiClient,
        request: &CreateRoomRequest,
    ) -> Result<Room, ClientError> {
        self.begin();

        match api.create_room(request).await {
            Ok(room) => {
                self.rooms.push(room.clone());
                self.loading = false;
                self.persist_quietly();
                Ok(room)
            }
            Err(e) => {
                self.fail(&e, ADD_FALLBACK);
                Err(e)
            }
        }
    }
}

fn load_rooms(path: &Path) -> Result<Vec<Room>, ClientError> {
    let content = std::fs::read_to_string(path)?;
    let persisted: PersistedRooms = serde_json::from_str(&content).map_err(SharedError::from)?;
    Ok(persisted.rooms)
}
