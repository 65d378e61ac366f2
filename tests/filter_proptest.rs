//! Property-based tests for the room listing filter
//!
//! Uses proptest to generate random query values and verify the filter rules

use proptest::prelude::*;
use roomdesk::shared::room::{parse_flag, RoomFilter, RoomFilterQuery};

fn optional_value() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("true".to_string()),
        Just("false".to_string()),
        ".*",
    ])
}

proptest! {
    #[test]
    fn test_only_literal_true_is_true(raw in ".*") {
        prop_assert_eq!(parse_flag(&raw), raw == "true");
    }

    #[test]
    fn test_each_present_key_adds_one_clause(
        available in optional_value(),
        pet_friendly in optional_value(),
        room_standard in optional_value(),
    ) {
        let present = [&available, &pet_friendly, &room_standard]
            .iter()
            .filter(|value| value.is_some())
            .count();
        let filter = RoomFilter::from_query(&RoomFilterQuery {
            available,
            pet_friendly,
            room_standard,
        });

        prop_assert_eq!(filter.clauses().len(), present);
        prop_assert_eq!(filter.query_pairs().len(), present);
        prop_assert_eq!(filter.is_empty(), present == 0);
    }

    #[test]
    fn test_query_pairs_survive_a_second_parse(
        available in prop::option::of(any::<bool>()),
        pet_friendly in prop::option::of(any::<bool>()),
        room_standard in prop::option::of("[a-z]{1,12}"),
    ) {
        let filter = RoomFilter { available, pet_friendly, room_standard };
        let mut query = RoomFilterQuery::default();
        for (key, value) in filter.query_pairs() {
            match key {
                "available" => query.available = Some(value),
                "petFriendly" => query.pet_friendly = Some(value),
                _ => query.room_standard = Some(value),
            }
        }
        prop_assert_eq!(RoomFilter::from_query(&query), filter);
    }
}
