//! Error types for the gosieve crate

use thiserror::Error;

/// Main error type for the gosieve crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("coordinate ({x}, {y}) is outside the 19x19 board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("malformed move token '{token}': {reason}")]
    MalformedMove { token: String, reason: String },

    #[error("move list is empty")]
    EmptyGame,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
