//! Prepared statements
//!
//! A [`PreparedStatement`] wraps one compiled statement handle, scoped to
//! its [`Connection`](crate::connection::Connection) through a borrow. It is
//! either idle or mid-iteration; every one of [`execute`], [`query`], and
//! [`query_empty`] leaves it idle on return, success or failure, because the
//! engine cursor (`rusqlite::Rows`) resets the statement when dropped. The
//! compiled handle itself is finalized exactly once, on drop.
//!
//! [`execute`]: PreparedStatement::execute
//! [`query`]: PreparedStatement::query
//! [`query_empty`]: PreparedStatement::query_empty

use std::cell::RefCell;
use std::collections::HashMap;

use crate::core::error::{Error, Result};
use crate::core::value::Value;
use crate::row::Row;

/// Cached column name to index mapping, built once per statement
///
/// Column names are stable for a given compiled statement, so the cache is
/// keyed to the statement, not rebuilt per row.
pub(crate) type ColumnCache = RefCell<Option<HashMap<String, usize>>>;

/// A compiled SQL statement ready for binding and execution
///
/// The same statement object can run many bind/execute cycles without being
/// re-prepared. Bound values persist across executions until rebound;
/// parameters never bound are left to the engine's default (null).
#[derive(Debug)]
pub struct PreparedStatement<'conn> {
    stmt: rusqlite::Statement<'conn>,
    columns: ColumnCache,
}

impl<'conn> PreparedStatement<'conn> {
    pub(crate) fn new(stmt: rusqlite::Statement<'conn>) -> Self {
        Self {
            stmt,
            columns: RefCell::new(None),
        }
    }

    /// Bind a parameter by 1-based index or by placeholder name
    ///
    /// Returns `self` so multiple binds chain before execution:
    ///
    /// ```
    /// # use sqlite_bridge::{Connection, Result};
    /// # fn main() -> Result<()> {
    /// # let conn = Connection::open_in_memory()?;
    /// # conn.execute("CREATE TABLE t (a INTEGER, b TEXT)")?;
    /// let mut stmt = conn.prepare("INSERT INTO t (a, b) VALUES (:a, :b)")?;
    /// stmt.bind(":a", 42)?.bind(":b", "hello")?;
    /// stmt.execute()?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// A name that does not resolve to any placeholder fails with
    /// [`Error::Bind`] before any engine bind call is made. Binding
    /// `Value::Null` (or `None`) invokes the engine's null-binder; the four
    /// non-null kinds dispatch to the matching typed binder.
    pub fn bind<I, V>(&mut self, index: I, value: V) -> Result<&mut Self>
    where
        I: BindIndex,
        V: Into<Value>,
    {
        let idx = index.resolve(&self.stmt)?;
        let bound = match value.into() {
            Value::Null => self.stmt.raw_bind_parameter(idx, rusqlite::types::Null),
            Value::Int(v) => self.stmt.raw_bind_parameter(idx, v),
            Value::Int64(v) => self.stmt.raw_bind_parameter(idx, v),
            Value::Double(v) => self.stmt.raw_bind_parameter(idx, v),
            Value::Text(v) => self.stmt.raw_bind_parameter(idx, v),
        };
        bound.map_err(|e| Error::bind(e.to_string()))?;
        Ok(self)
    }

    /// Execute a statement that must not produce rows
    ///
    /// Success requires the very first step to report completion; a row or
    /// an engine failure is [`Error::Step`]. The statement is idle again on
    /// return either way and can be rebound and re-executed.
    pub fn execute(&mut self) -> Result<()> {
        // Rows resets the statement when it goes out of scope, on the error
        // paths included.
        let mut rows = self.stmt.raw_query();
        match rows.next() {
            Ok(None) => Ok(()),
            Ok(Some(_)) => Err(Error::step("Statement produced a row, expected completion")),
            Err(e) => Err(Error::step(e.to_string())),
        }
    }

    /// Iterate the result set, invoking `handler` once per row in engine order
    ///
    /// Results are collected in step order; an empty result set yields an
    /// empty vector. A handler error propagates immediately, with the
    /// statement already reset to idle.
    pub fn query<T, F>(&mut self, mut handler: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> Result<T>,
    {
        let Self { stmt, columns } = self;
        let mut rows = stmt.raw_query();
        let mut results = Vec::new();
        loop {
            match rows.next() {
                Ok(Some(row)) => results.push(handler(&Row::new(row, columns))?),
                Ok(None) => break,
                Err(e) => return Err(Error::step(e.to_string())),
            }
        }
        Ok(results)
    }

    /// Step once and report whether the result set is empty
    ///
    /// Returns `true` when the statement completes without a row and `false`
    /// when a row is available. Any other step outcome is [`Error::Step`].
    /// The statement is idle again before this returns.
    pub fn query_empty(&mut self) -> Result<bool> {
        let mut rows = self.stmt.raw_query();
        match rows.next() {
            Ok(None) => Ok(true),
            Ok(Some(_)) => Ok(false),
            Err(_) => Err(Error::step("Unexpected state from step!")),
        }
    }
}

/// Resolution of a bind address to a 1-based parameter index
///
/// Implemented for `usize` (used verbatim) and for `&str` placeholder names
/// (resolved through the engine, including the prefix, e.g. `":name"`).
pub trait BindIndex {
    /// Resolve to the effective 1-based parameter index
    fn resolve(&self, stmt: &rusqlite::Statement<'_>) -> Result<usize>;
}

impl BindIndex for usize {
    fn resolve(&self, _stmt: &rusqlite::Statement<'_>) -> Result<usize> {
        Ok(*self)
    }
}

impl BindIndex for &str {
    fn resolve(&self, stmt: &rusqlite::Statement<'_>) -> Result<usize> {
        match stmt.parameter_index(self) {
            Ok(Some(idx)) => Ok(idx),
            Ok(None) => Err(Error::bind(format!("Bind parameter '{self}' not found!"))),
            Err(e) => Err(Error::bind(e.to_string())),
        }
    }
}
