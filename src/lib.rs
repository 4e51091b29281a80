//! # SQLite Bridge
//!
//! A thin, type-safe access layer over the SQLite embedded database engine,
//! exposing connection management, parameterized statement preparation,
//! value binding, and typed row extraction.
//!
//! The layer guarantees that handles are never used after release and that
//! statement execution state is reset deterministically on every exit path:
//!
//! - A [`Connection`] owns one open database handle, released exactly once
//!   on drop or explicit [`Connection::close`].
//! - A [`PreparedStatement`] owns one compiled statement scoped to its
//!   connection by borrow, finalized exactly once on drop, and left idle
//!   after every execution whether it succeeds or fails.
//! - A [`Row`] is a transient view of the current result row, alive only
//!   inside a query's row handler.
//!
//! SQL parsing, query planning, and storage belong to the engine; this
//! crate only maps its dynamically-typed column space onto strongly-typed
//! host values.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlite_bridge::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let conn = Connection::open_in_memory()?;
//!
//!     conn.execute("CREATE TABLE users (name TEXT NOT NULL, age INTEGER)")?;
//!
//!     let mut insert = conn.prepare("INSERT INTO users (name, age) VALUES (:name, :age)")?;
//!     insert.bind(":name", "Alice")?.bind(":age", 30)?;
//!     insert.execute()?;
//!
//!     let mut select = conn.prepare("SELECT name, age FROM users")?;
//!     let users = select.query(|row| Ok((row.text("name")?, row.optional_int("age")?)))?;
//!     assert_eq!(users, vec![("Alice".to_string(), Some(30))]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! Every operation is synchronous and blocks until the engine returns. The
//! layer has no internal locking; one connection or statement used from
//! multiple threads simultaneously must be serialized by the caller.

/// Core types: errors and typed values
pub mod core;

/// Connection management
pub mod connection;

/// Prepared statements: binding and execution
pub mod statement;

/// Typed access to result rows
pub mod row;

/// Prelude for convenient imports
///
/// ```rust
/// use sqlite_bridge::prelude::*;
///
/// fn main() -> Result<()> {
///     let conn = Connection::open_in_memory()?;
///     conn.execute("CREATE TABLE t (id INTEGER)")?;
///     Ok(())
/// }
/// ```
pub mod prelude {
    pub use crate::connection::Connection;
    pub use crate::core::{Error, Result, Value};
    pub use crate::row::{Row, RowIndex};
    pub use crate::statement::{BindIndex, PreparedStatement};
}

// Re-export at root level for convenience
pub use crate::core::{Error, Result, Value};
pub use connection::Connection;
pub use row::{Row, RowIndex};
pub use statement::{BindIndex, PreparedStatement};
