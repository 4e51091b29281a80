//! Connection management
//!
//! A [`Connection`] owns one open database handle for its entire lifetime.
//! The handle is released exactly once, either by the consuming
//! [`Connection::close`] or by `Drop`, and statements borrow the connection
//! so they can never outlive it.

use std::path::Path;

use tracing::{debug, trace};

use crate::core::error::{Error, Result};
use crate::statement::PreparedStatement;

/// An open database connection
///
/// All operations are synchronous and block the calling thread until the
/// engine call returns. A connection is not internally locked; concurrent
/// use from multiple threads must be serialized by the caller.
#[derive(Debug)]
pub struct Connection {
    conn: rusqlite::Connection,
}

impl Connection {
    /// Open or create a database file at `path`
    ///
    /// On failure the engine's diagnostic text is carried in
    /// [`Error::Open`]; any partially-opened handle is released before the
    /// error propagates.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = rusqlite::Connection::open(path).map_err(|e| Error::open(e.to_string()))?;
        debug!(path = %path.display(), "opened database");
        Ok(Self { conn })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = rusqlite::Connection::open_in_memory().map_err(|e| Error::open(e.to_string()))?;
        debug!("opened in-memory database");
        Ok(Self { conn })
    }

    /// Compile one SQL statement for later binding and execution
    pub fn prepare(&self, sql: &str) -> Result<PreparedStatement<'_>> {
        trace!(sql, "preparing statement");
        let stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| Error::prepare(e.to_string()))?;
        Ok(PreparedStatement::new(stmt))
    }

    /// Prepare and execute one statement that produces no rows
    ///
    /// Convenience for statements without parameters; use
    /// [`Connection::prepare`] and [`PreparedStatement::bind`] when values
    /// must be bound.
    pub fn execute(&self, sql: &str) -> Result<()> {
        let mut stmt = self.prepare(sql)?;
        stmt.execute()
    }

    /// Check whether a schema object of the given kind exists
    ///
    /// The match is case-insensitive (the queried name is lower-cased) and
    /// consults both the persistent and the temporary schema catalog.
    pub fn exists(&self, kind: &str, name: &str) -> Result<bool> {
        let name = name.to_lowercase();
        for catalog in ["sqlite_master", "sqlite_temp_master"] {
            let sql =
                format!("SELECT name FROM {catalog} WHERE type = :type AND lower(name) = :name");
            let mut stmt = self.prepare(&sql)?;
            stmt.bind(":type", kind)?.bind(":name", name.as_str())?;
            if !stmt.query_empty()? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Check whether a table with the given name exists
    pub fn table_exists(&self, name: &str) -> Result<bool> {
        self.exists("table", name)
    }

    /// Close the connection explicitly
    ///
    /// Consumes the connection, so no operation can follow; dropping without
    /// calling this releases the handle just the same.
    pub fn close(self) -> Result<()> {
        debug!("closing database");
        self.conn
            .close()
            .map_err(|(_conn, e)| Error::open(e.to_string()))
    }
}
