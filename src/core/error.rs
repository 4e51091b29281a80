//! Error types for the access layer
//!
//! Every failure reported by the engine surfaces immediately as one of the
//! variants below, carrying the engine's diagnostic text (or a literal
//! description when the engine gives none). There is no retry and no local
//! recovery; the only local handling is resource cleanup, which runs on
//! every propagation path before the error reaches the caller.

/// Result type alias for access-layer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error kinds for access-layer operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Opening the database file failed
    #[error("Open error: {0}")]
    Open(String),

    /// The engine rejected the SQL during statement compilation
    #[error("Prepare error: {0}")]
    Prepare(String),

    /// Parameter binding failed, either because a named placeholder did not
    /// resolve or because the engine rejected the typed bind call
    #[error("Bind error: {0}")]
    Bind(String),

    /// Stepping the statement produced an unexpected outcome
    #[error("Step error: {0}")]
    Step(String),

    /// Reading the current result row failed
    #[error("Result error: {0}")]
    Result(String),
}

impl Error {
    /// Create a new open error
    pub fn open<S: Into<String>>(msg: S) -> Self {
        Error::Open(msg.into())
    }

    /// Create a new prepare error
    pub fn prepare<S: Into<String>>(msg: S) -> Self {
        Error::Prepare(msg.into())
    }

    /// Create a new bind error
    pub fn bind<S: Into<String>>(msg: S) -> Self {
        Error::Bind(msg.into())
    }

    /// Create a new step error
    pub fn step<S: Into<String>>(msg: S) -> Self {
        Error::Step(msg.into())
    }

    /// Create a new result error
    pub fn result<S: Into<String>>(msg: S) -> Self {
        Error::Result(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::open("unable to open database file");
        assert!(matches!(err, Error::Open(_)));

        let err = Error::prepare("near \"SELEC\": syntax error");
        assert!(matches!(err, Error::Prepare(_)));

        let err = Error::bind("Bind parameter ':missing' not found!");
        assert!(matches!(err, Error::Bind(_)));
    }

    #[test]
    fn test_error_display() {
        let err = Error::step("Unexpected state from step!");
        assert_eq!(err.to_string(), "Step error: Unexpected state from step!");

        let err = Error::result("Unknown column name: nope");
        assert_eq!(err.to_string(), "Result error: Unknown column name: nope");
    }
}
