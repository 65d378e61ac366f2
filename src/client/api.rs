/**
 * API Client
 *
 * Async HTTP client for the backend. The session cookie set by sign in is
 * kept in reqwest's cookie store and sent with every later request, the
 * way a browser would with credentials enabled.
 */

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::api::{
    CreateRoomRequest, CreateRoomResponse, MessageResponse, RoomsResponse, SigninRequest,
    SignupRequest,
};
use crate::shared::config::{ClientConfig, ConfigError};
use crate::shared::error::SharedError;
use crate::shared::room::{Room, RoomFilter};

/// Client-side errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or undecodable body
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the server's `{message}` if present
    #[error("request failed with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },

    /// 2xx response missing data it should carry
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error(transparent)]
    Shared(#[from] SharedError),
}

impl ClientError {
    /// Message the server sent with a failed response
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// HTTP client bound to one backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let http = Client::builder().cookie_store(true).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<MessageResponse>()
                .await
                .ok()
                .map(|body| body.message);
            tracing::warn!("Request failed: {} {:?}", status, message);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// POST /adminAuth/adminSignup
    pub async fn signup(&self, request: &SignupRequest) -> Result<MessageResponse, ClientError> {
        let url = self.config.api_url("/adminAuth/adminSignup");
        Self::send(self.http.post(url).json(request)).await
    }

    /// POST /adminAuth/adminSignin; stores the session cookie
    pub async fn signin(
        &self,
        id_number: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<MessageResponse, ClientError> {
        let url = self.config.api_url("/adminAuth/adminSignin");
        let request = SigninRequest {
            id_number: id_number.into(),
            password: password.into(),
        };
        Self::send(self.http.post(url).json(&request)).await
    }

    /// POST /adminAuth/logout
    pub async fn logout(&self) -> Result<MessageResponse, ClientError> {
        let url = self.config.api_url("/adminAuth/logout");
        Self::send(self.http.post(url)).await
    }

    /// POST /rooms/createRoom
    pub async fn create_room(&self, request: &CreateRoomRequest) -> Result<Room, ClientError> {
        let url = self.config.api_url("/rooms/createRoom");
        let response: CreateRoomResponse = Self::send(self.http.post(url).json(request)).await?;
        response
            .room
            .ok_or_else(|| ClientError::UnexpectedResponse("room missing from response".to_string()))
    }

    /// GET /rooms/fetchRooms with only the filter's present keys
    pub async fn fetch_rooms(&self, filter: &RoomFilter) -> Result<Vec<Room>, ClientError> {
        let url = self.config.api_url("/rooms/fetchRooms");
        let response: RoomsResponse =
            Self::send(self.http.get(url).query(&filter.query_pairs())).await?;
        Ok(response.rooms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_only_for_api_errors() {
        let api = ClientError::Api {
            status: 409,
            message: Some("Room Already Exists".to_string()),
        };
        assert_eq!(api.server_message(), Some("Room Already Exists"));

        let bare = ClientError::Api { status: 502, message: None };
        assert_eq!(bare.server_message(), None);
        assert_eq!(bare.to_string(), "request failed with status 502: no message");

        let other = ClientError::UnexpectedResponse("x".to_string());
        assert_eq!(other.server_message(), None);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ClientConfig {
            server_url: "localhost:5002".to_string(),
            storage_path: None,
        };
        assert!(matches!(ApiClient::new(config), Err(ClientError::Config(_))));
    }
}
