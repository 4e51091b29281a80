//! Row access
//!
//! A [`Row`] is an ephemeral view of the statement's current result row,
//! valid only for the duration of a single
//! [`query`](crate::statement::PreparedStatement::query) handler call.
//! Columns are addressed by 0-based position or by name; name resolution
//! goes through a mapping built once per statement and cached there.

use std::collections::HashMap;

use rusqlite::types::ValueRef;

use crate::core::error::{Error, Result};
use crate::core::value::Value;
use crate::statement::ColumnCache;

/// A view of the current result row
pub struct Row<'a> {
    row: &'a rusqlite::Row<'a>,
    columns: &'a ColumnCache,
}

impl<'a> Row<'a> {
    pub(crate) fn new(row: &'a rusqlite::Row<'a>, columns: &'a ColumnCache) -> Self {
        Self { row, columns }
    }

    /// Resolve a column name to its 0-based index
    ///
    /// The first call for a statement enumerates all columns and caches the
    /// name mapping; later calls, on this row or any other row of the same
    /// statement, hit the cache. An absent name fails with
    /// [`Error::Result`].
    pub fn column_index(&self, name: &str) -> Result<usize> {
        let mut cache = self.columns.borrow_mut();
        let map = match &mut *cache {
            Some(map) => map,
            empty @ None => empty.insert(load_column_names(self.row.as_ref())?),
        };
        map.get(name)
            .copied()
            .ok_or_else(|| Error::result(format!("Unknown column name: {name}")))
    }

    /// Read the column's value with its storage class preserved
    pub fn value<I: RowIndex>(&self, index: I) -> Result<Value> {
        let idx = index.resolve(self)?;
        let value = self
            .row
            .get_ref(idx)
            .map_err(|e| Error::result(e.to_string()))?;
        Ok(match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(v) => Value::Int64(v),
            ValueRef::Real(v) => Value::Double(v),
            ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
            // No blob kind in this layer; surface the bytes as text, which
            // is what the engine's text accessor would hand back.
            ValueRef::Blob(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
        })
    }

    /// Check whether the column's storage class at this row is null
    pub fn is_null<I: RowIndex>(&self, index: I) -> Result<bool> {
        Ok(self.value(index)?.is_null())
    }

    /// Read a 32-bit integer, coercing per the engine's rules
    pub fn int<I: RowIndex>(&self, index: I) -> Result<i32> {
        Ok(self.value(index)?.as_int())
    }

    /// Read a 64-bit integer, coercing per the engine's rules
    pub fn int64<I: RowIndex>(&self, index: I) -> Result<i64> {
        Ok(self.value(index)?.as_int64())
    }

    /// Read a double, coercing per the engine's rules
    pub fn double<I: RowIndex>(&self, index: I) -> Result<f64> {
        Ok(self.value(index)?.as_double())
    }

    /// Read text, coercing per the engine's rules
    ///
    /// The underlying bytes are assumed to be the UTF-8 the engine stores;
    /// a null column reads as the empty string rather than an error.
    pub fn text<I: RowIndex>(&self, index: I) -> Result<String> {
        Ok(self.value(index)?.as_text())
    }

    /// Read a 32-bit integer, or `None` when the column is null
    pub fn optional_int<I: RowIndex>(&self, index: I) -> Result<Option<i32>> {
        Ok(match self.value(index)? {
            Value::Null => None,
            value => Some(value.as_int()),
        })
    }

    /// Read a 64-bit integer, or `None` when the column is null
    pub fn optional_int64<I: RowIndex>(&self, index: I) -> Result<Option<i64>> {
        Ok(match self.value(index)? {
            Value::Null => None,
            value => Some(value.as_int64()),
        })
    }

    /// Read a double, or `None` when the column is null
    pub fn optional_double<I: RowIndex>(&self, index: I) -> Result<Option<f64>> {
        Ok(match self.value(index)? {
            Value::Null => None,
            value => Some(value.as_double()),
        })
    }

    /// Read text, or `None` when the column is null
    pub fn optional_text<I: RowIndex>(&self, index: I) -> Result<Option<String>> {
        Ok(match self.value(index)? {
            Value::Null => None,
            value => Some(value.as_text()),
        })
    }
}

/// Build the column name mapping for a compiled statement
fn load_column_names(stmt: &rusqlite::Statement<'_>) -> Result<HashMap<String, usize>> {
    let count = stmt.column_count();
    let mut map = HashMap::with_capacity(count);
    for idx in 0..count {
        let name = stmt
            .column_name(idx)
            .map_err(|_| Error::result("Error while loading column names!"))?;
        map.insert(name.to_string(), idx);
    }
    Ok(map)
}

/// Resolution of a column address to a 0-based column index
///
/// Implemented for `usize` (used verbatim) and for `&str` column names
/// (resolved through the statement's cached name mapping).
pub trait RowIndex {
    /// Resolve to the effective 0-based column index
    fn resolve(&self, row: &Row<'_>) -> Result<usize>;
}

impl RowIndex for usize {
    fn resolve(&self, _row: &Row<'_>) -> Result<usize> {
        Ok(*self)
    }
}

impl RowIndex for &str {
    fn resolve(&self, row: &Row<'_>) -> Result<usize> {
        row.column_index(self)
    }
}
