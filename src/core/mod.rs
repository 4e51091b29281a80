//! Core types for the access layer
//!
//! This module provides the fundamental building blocks shared by the
//! connection, statement, and row components: error kinds and typed values.

pub mod error;
pub mod value;

// Re-export commonly used types
pub use error::{Error, Result};
pub use value::Value;
