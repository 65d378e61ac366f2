/**
 * API Request and Response Bodies
 *
 * JSON bodies exchanged between the client and the backend. Field names are
 * camelCase on the wire. Request fields are lenient (defaulted or optional)
 * so that missing input reaches the handler and is answered with the
 * endpoint's own error message instead of a framework rejection.
 */

use serde::{Deserialize, Serialize};

use crate::shared::room::Room;

/// Business identifiers (admin id number, room number) are compared and
/// stored without surrounding whitespace.
pub fn normalize_identifier(raw: &str) -> String {
    raw.trim().to_string()
}

/// Admin sign up request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupRequest {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    /// Unique business identifier of the admin
    pub id_number: String,
    pub password: String,
    /// Must equal `password`
    pub confirm_password: String,
}

impl SignupRequest {
    /// Names of required fields that are blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("firstName", &self.first_name),
            ("middleName", &self.middle_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("idNumber", &self.id_number),
            ("password", &self.password),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Admin sign in request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SigninRequest {
    pub id_number: String,
    pub password: String,
}

/// Room creation request; every field is required
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub room_number: Option<String>,
    pub room_standard: Option<String>,
    pub room_price: Option<String>,
    pub number_of_beds: Option<String>,
    pub available: Option<bool>,
    pub pet_friendly: Option<bool>,
}

/// Plain `{ "message": ... }` body used by every endpoint
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned by room creation
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreateRoomResponse {
    pub message: String,
    #[serde(default)]
    pub room: Option<Room>,
}

/// Body returned by room listing
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RoomsResponse {
    pub message: String,
    #[serde(default)]
    pub rooms: Vec<Room>,
}
