/**
 * Room Query Builder
 *
 * Turns a `RoomFilter` into a parameterized SELECT. Each clause of the
 * filter adds one `column = ?` condition joined with AND; a filter without
 * clauses selects every room. Values are always bound, never spliced.
 */

use sqlx::{QueryBuilder, Sqlite};

use crate::shared::room::{FilterValue, RoomFilter};

/// Columns of the `rooms` table in `RoomRow` order
pub const ROOM_COLUMNS: &str = "id, room_number, room_standard, room_price, number_of_beds, \
available, pet_friendly, created_at, updated_at";

/// Listing query for `filter`, oldest room first
pub fn build_room_query(filter: &RoomFilter) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new(format!("SELECT {} FROM rooms", ROOM_COLUMNS));

    for (index, clause) in filter.clauses().into_iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });
        builder.push(clause.column);
        builder.push(" = ");
        match clause.value {
            FilterValue::Bool(value) => builder.push_bind(value),
            FilterValue::Text(value) => builder.push_bind(value),
        };
    }

    builder.push(" ORDER BY created_at, rowid");
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sql(filter: &RoomFilter) -> String {
        build_room_query(filter).sql().to_string()
    }

    #[test]
    fn test_match_all_has_no_where() {
        assert_eq!(
            sql(&RoomFilter::all()),
            format!("SELECT {} FROM rooms ORDER BY created_at, rowid", ROOM_COLUMNS)
        );
    }

    #[test]
    fn test_single_clause() {
        assert_eq!(
            sql(&RoomFilter::all().available(true)),
            format!(
                "SELECT {} FROM rooms WHERE available = ? ORDER BY created_at, rowid",
                ROOM_COLUMNS
            )
        );
    }

    #[test]
    fn test_clauses_are_anded_in_column_order() {
        let filter = RoomFilter::all()
            .room_standard("suite")
            .pet_friendly(false)
            .available(true);
        assert_eq!(
            sql(&filter),
            format!(
                "SELECT {} FROM rooms WHERE available = ? AND pet_friendly = ? AND room_standard = ? ORDER BY created_at, rowid",
                ROOM_COLUMNS
            )
        );
    }

    #[test]
    fn test_values_are_never_inlined() {
        let filter = RoomFilter::all().room_standard("suite' OR '1'='1");
        assert!(!sql(&filter).contains("OR '1'"));
    }
}
