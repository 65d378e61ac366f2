//! Room Types
//!
//! The room record as it travels over the wire, the room standard
//! enumeration, and the listing filter shared by the client (which turns it
//! into query parameters) and the backend (which turns it into a predicate).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Room quality / price tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStandard {
    Standard,
    Deluxe,
    Suite,
    Premium,
    Executive,
    Presidential,
}

impl RoomStandard {
    pub const ALL: [RoomStandard; 6] = [
        RoomStandard::Standard,
        RoomStandard::Deluxe,
        RoomStandard::Suite,
        RoomStandard::Premium,
        RoomStandard::Executive,
        RoomStandard::Presidential,
    ];

    /// Canonical lowercase name, as stored and as sent over the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStandard::Standard => "standard",
            RoomStandard::Deluxe => "deluxe",
            RoomStandard::Suite => "suite",
            RoomStandard::Premium => "premium",
            RoomStandard::Executive => "executive",
            RoomStandard::Presidential => "presidential",
        }
    }
}

impl fmt::Display for RoomStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomStandard {
    type Err = SharedError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|standard| standard.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SharedError::UnknownRoomStandard(s.to_string()))
    }
}

/// A persisted hotel room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Surrogate id (serialized as `_id` for the dashboard)
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Unique room number, e.g. "301" or "402A"
    pub room_number: String,
    pub room_standard: RoomStandard,
    /// Price as entered by the admin
    pub room_price: String,
    /// Bed count as entered by the admin
    pub number_of_beds: String,
    pub available: bool,
    pub pet_friendly: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw listing query, exactly as it arrives in the URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomFilterQuery {
    pub available: Option<String>,
    pub pet_friendly: Option<String>,
    pub room_standard: Option<String>,
}

/// Typed listing filter; `None` means "no constraint"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomFilter {
    pub available: Option<bool>,
    pub pet_friendly: Option<bool>,
    pub room_standard: Option<String>,
}

/// Value side of a single equality clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Bool(bool),
    Text(String),
}

/// One `column = value` clause of the listing predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterClause {
    pub column: &'static str,
    pub value: FilterValue,
}

/// Boolean query flags are true only for the literal string `"true"`.
pub fn parse_flag(raw: &str) -> bool {
    raw == "true"
}

fn canonical_standard(raw: &str) -> String {
    raw.parse::<RoomStandard>()
        .map(|standard| standard.as_str().to_string())
        .unwrap_or_else(|_| raw.to_string())
}

impl RoomFilter {
    /// Match-all filter
    pub fn all() -> Self {
        Self::default()
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    pub fn pet_friendly(mut self, pet_friendly: bool) -> Self {
        self.pet_friendly = Some(pet_friendly);
        self
    }

    pub fn room_standard(mut self, room_standard: impl Into<String>) -> Self {
        self.room_standard = Some(room_standard.into());
        self
    }

    /// Every present key becomes a constraint, including empty values.
    ///
    /// A known room standard is reduced to its stored lowercase name; any
    /// other value is kept as given and matches nothing.
    pub fn from_query(query: &RoomFilterQuery) -> Self {
        Self {
            available: query.available.as_deref().map(parse_flag),
            pet_friendly: query.pet_friendly.as_deref().map(parse_flag),
            room_standard: query.room_standard.as_deref().map(canonical_standard),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_none() && self.pet_friendly.is_none() && self.room_standard.is_none()
    }

    /// Equality clauses in a fixed column order; empty for match-all.
    pub fn clauses(&self) -> Vec<FilterClause> {
        let mut clauses = Vec::new();

        if let Some(available) = self.available {
            clauses.push(FilterClause {
                column: "available",
                value: FilterValue::Bool(available),
            });
        }

        if let Some(pet_friendly) = self.pet_friendly {
            clauses.push(FilterClause {
                column: "pet_friendly",
                value: FilterValue::Bool(pet_friendly),
            });
        }

        if let Some(room_standard) = &self.room_standard {
            clauses.push(FilterClause {
                column: "room_standard",
                value: FilterValue::Text(room_standard.clone()),
            });
        }

        clauses
    }

    /// URL query pairs for the present keys only
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(available) = self.available {
            pairs.push(("available", available.to_string()));
        }
        if let Some(pet_friendly) = self.pet_friendly {
            pairs.push(("petFriendly", pet_friendly.to_string()));
        }
        if let Some(room_standard) = &self.room_standard {
            pairs.push(("roomStandard", room_standard.clone()));
        }
        pairs
    }

    /// In-memory evaluation of the same predicate the store applies
    pub fn matches(&self, room: &Room) -> bool {
        self.available.map_or(true, |v| room.available == v)
            && self.pet_friendly.map_or(true, |v| room.pet_friendly == v)
            && self
                .room_standard
                .as_deref()
                .map_or(true, |v| room.room_standard.as_str() == v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn room(available: bool, pet_friendly: bool, standard: RoomStandard) -> Room {
        let now = Utc::now();
        Room {
            id: Uuid::new_v4(),
            room_number: "101".to_string(),
            room_standard: standard,
            room_price: "120".to_string(),
            number_of_beds: "1".to_string(),
            available,
            pet_friendly,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_room_standard_parse_is_case_insensitive() {
        assert_eq!("Suite".parse::<RoomStandard>().unwrap(), RoomStandard::Suite);
        assert_eq!(" presidential ".parse::<RoomStandard>().unwrap(), RoomStandard::Presidential);
        assert!("penthouse".parse::<RoomStandard>().is_err());
        assert!("".parse::<RoomStandard>().is_err());
    }

    #[test]
    fn test_room_standard_round_trips_through_display() {
        for standard in RoomStandard::ALL {
            assert_eq!(standard.to_string().parse::<RoomStandard>().unwrap(), standard);
        }
    }

    #[test]
    fn test_flags_only_accept_literal_true() {
        assert!(parse_flag("true"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("TRUE"));
        assert!(!parse_flag("1"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_from_query_keeps_present_keys_only() {
        let query = RoomFilterQuery {
            available: None,
            pet_friendly: Some("false".to_string()),
            room_standard: None,
        };
        let filter = RoomFilter::from_query(&query);
        assert_eq!(filter, RoomFilter::all().pet_friendly(false));
    }

    #[test]
    fn test_empty_value_is_still_a_constraint() {
        let query = RoomFilterQuery {
            available: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(RoomFilter::from_query(&query).available, Some(false));
    }

    #[test]
    fn test_from_query_canonicalizes_known_standard() {
        let query = RoomFilterQuery {
            room_standard: Some("Suite".to_string()),
            ..Default::default()
        };
        let filter = RoomFilter::from_query(&query);
        assert_eq!(filter.room_standard.as_deref(), Some("suite"));
        assert!(filter.matches(&room(true, false, RoomStandard::Suite)));
    }

    #[test]
    fn test_from_query_keeps_unknown_standard_verbatim() {
        let query = RoomFilterQuery {
            room_standard: Some("Penthouse".to_string()),
            ..Default::default()
        };
        let filter = RoomFilter::from_query(&query);
        assert_eq!(filter.room_standard.as_deref(), Some("Penthouse"));
        for standard in RoomStandard::ALL {
            assert!(!filter.matches(&room(true, false, standard)));
        }
    }

    #[test]
    fn test_clauses_follow_column_order() {
        let filter = RoomFilter::all()
            .room_standard("suite")
            .available(true)
            .pet_friendly(false);

        assert_eq!(
            filter.clauses(),
            vec![
                FilterClause { column: "available", value: FilterValue::Bool(true) },
                FilterClause { column: "pet_friendly", value: FilterValue::Bool(false) },
                FilterClause { column: "room_standard", value: FilterValue::Text("suite".to_string()) },
            ]
        );
    }

    #[test]
    fn test_match_all_has_no_clauses() {
        assert!(RoomFilter::all().is_empty());
        assert!(RoomFilter::all().clauses().is_empty());
        assert!(RoomFilter::all().query_pairs().is_empty());
    }

    #[test]
    fn test_query_pairs_use_wire_names() {
        let filter = RoomFilter::all().available(true).room_standard("deluxe");
        assert_eq!(
            filter.query_pairs(),
            vec![("available", "true".to_string()), ("roomStandard", "deluxe".to_string())]
        );
    }

    #[test]
    fn test_matches_mirrors_clauses() {
        let filter = RoomFilter::all().available(true).room_standard("suite");
        assert!(filter.matches(&room(true, false, RoomStandard::Suite)));
        assert!(!filter.matches(&room(false, false, RoomStandard::Suite)));
        assert!(!filter.matches(&room(true, false, RoomStandard::Deluxe)));
        assert!(RoomFilter::all().matches(&room(false, true, RoomStandard::Standard)));
    }

    #[test]
    fn test_room_serializes_with_wire_names() {
        let value = serde_json::to_value(room(true, false, RoomStandard::Suite)).unwrap();
        assert!(value.get("_id").is_some());
        assert_eq!(value["roomNumber"], "101");
        assert_eq!(value["roomStandard"], "suite");
        assert_eq!(value["petFriendly"], false);
        assert!(value.get("createdAt").is_some());
    }
}
