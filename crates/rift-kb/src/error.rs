use std::path::PathBuf;

/// Alias for `Result<T, KbError>`.
pub type KbResult<T> = Result<T, KbError>;

/// Errors that can occur while loading a knowledge base.
///
/// All of these are fatal configuration errors: they are raised once at
/// startup and never recovered from inside the query engine.
#[derive(Debug, thiserror::Error)]
pub enum KbError {
    /// The knowledge base file could not be read.
    #[error("cannot read knowledge base {}: {source}", path.display())]
    Io {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The source is not valid JSON.
    #[error("knowledge base is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level JSON value is not an object of champion records.
    #[error("knowledge base must be a JSON object mapping names to records")]
    NotAnObject,

    /// A single champion record is malformed.
    #[error("invalid record for \"{name}\": {source}")]
    InvalidEntity {
        /// The champion name whose record failed to parse.
        name: String,
        /// The underlying deserialization error.
        source: serde_json::Error,
    },

    /// Two champion names differ only by case.
    #[error("duplicate champion name: \"{0}\"")]
    DuplicateKey(String),

    /// The knowledge base contains no champions.
    #[error("knowledge base contains no champions")]
    Empty,
}
