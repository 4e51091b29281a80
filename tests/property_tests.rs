//! Property-based tests for value binding and extraction using proptest

use proptest::prelude::*;
use sqlite_bridge::prelude::*;

fn scratch_table(column_type: &str) -> Connection {
    let conn = Connection::open_in_memory().expect("Failed to open");
    conn.execute(&format!("CREATE TABLE scratch (v {column_type})"))
        .expect("Failed to create table");
    conn
}

/// Bind one value positionally, then read the single stored row back
fn store_and_read<T>(
    conn: &Connection,
    value: impl Into<Value>,
    read: impl Fn(&Row<'_>) -> Result<T>,
) -> T {
    let mut insert = conn
        .prepare("INSERT INTO scratch (v) VALUES (?)")
        .expect("Failed to prepare insert");
    insert.bind(1, value.into()).expect("Failed to bind");
    insert.execute().expect("Failed to execute");

    let mut select = conn
        .prepare("SELECT v FROM scratch")
        .expect("Failed to prepare select");
    let mut rows = select.query(|row| read(row)).expect("Failed to query");
    assert_eq!(rows.len(), 1);
    rows.pop().expect("row present")
}

// ============================================================================
// Round-trip properties per scalar kind
// ============================================================================

proptest! {
    /// Binding an i32 by position and reading it back returns the original
    #[test]
    fn prop_int_round_trip(value in any::<i32>()) {
        let conn = scratch_table("INTEGER");
        let read = store_and_read(&conn, value, |row| row.int(0));
        prop_assert_eq!(read, value);
    }

    /// Binding an i64 by position and reading it back returns the original
    #[test]
    fn prop_int64_round_trip(value in any::<i64>()) {
        let conn = scratch_table("INTEGER");
        let read = store_and_read(&conn, value, |row| row.int64(0));
        prop_assert_eq!(read, value);
    }

    /// Binding a finite double round-trips bit-for-bit
    #[test]
    fn prop_double_round_trip(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let conn = scratch_table("REAL");
        let read = store_and_read(&conn, value, |row| row.double(0));
        prop_assert_eq!(read.to_bits(), value.to_bits());
    }

    /// Binding text round-trips unchanged
    #[test]
    fn prop_text_round_trip(value in ".*".prop_filter("no interior nul", |s: &String| !s.contains('\0'))) {
        let conn = scratch_table("TEXT");
        let read = store_and_read(&conn, value.clone(), |row| row.text(0));
        prop_assert_eq!(read, value);
    }
}

// ============================================================================
// Null handling properties
// ============================================================================

proptest! {
    /// Binding null reads back as absent through every optional accessor
    #[test]
    fn prop_null_reads_absent(_seed in 0..100u32) {
        let conn = scratch_table("INTEGER");
        let read = store_and_read(&conn, Option::<i32>::None, |row| {
            Ok((
                row.optional_int(0)?,
                row.optional_int64(0)?,
                row.optional_double(0)?,
                row.optional_text(0)?,
            ))
        });
        prop_assert_eq!(read, (None, None, None, None));
    }

    /// A bound non-null value is never absent through the optional accessor
    #[test]
    fn prop_some_not_absent(value in any::<i64>()) {
        let conn = scratch_table("INTEGER");
        let read = store_and_read(&conn, Some(value), |row| row.optional_int64(0));
        prop_assert_eq!(read, Some(value));
    }
}

// ============================================================================
// Name and position equivalence
// ============================================================================

proptest! {
    /// Binding by placeholder name stores the same value as the equivalent
    /// positional index within one prepared statement
    #[test]
    fn prop_name_and_position_bind_agree(value in any::<i64>()) {
        let conn = scratch_table("INTEGER");
        let mut insert = conn
            .prepare("INSERT INTO scratch (v) VALUES (:v)")
            .expect("Failed to prepare");

        insert.bind(":v", value).expect("Failed to bind by name");
        insert.execute().expect("Failed to execute");
        insert.bind(1, value).expect("Failed to bind by position");
        insert.execute().expect("Failed to execute");

        let mut select = conn
            .prepare("SELECT v FROM scratch")
            .expect("Failed to prepare");
        let rows = select.query(|row| row.int64(0)).expect("Failed to query");
        prop_assert_eq!(rows, vec![value, value]);
    }
}

// ============================================================================
// Value conversion properties
// ============================================================================

proptest! {
    /// Coercion accessors are total; they never panic for any stored kind
    #[test]
    fn prop_coercions_never_panic(value in prop_oneof![
        Just(Value::Null),
        any::<i32>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_filter("finite", |v| v.is_finite()).prop_map(Value::from),
        ".*".prop_map(Value::from),
    ]) {
        let _ = value.as_int();
        let _ = value.as_int64();
        let _ = value.as_double();
        let _ = value.as_text();
        let _ = value.as_str();
        let _ = value.type_name();
        let _ = value.is_null();
    }

    /// Value serialization never panics
    #[test]
    fn prop_json_serialization_no_panic(value in prop_oneof![
        Just(Value::Null),
        any::<i32>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_filter("finite", |v| v.is_finite()).prop_map(Value::from),
        ".*".prop_map(|s: String| Value::from(s)),
    ]) {
        let result = serde_json::to_string(&value);
        prop_assert!(result.is_ok());
    }
}
