use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring the generator or emitting records.
#[derive(Debug, Error)]
pub enum Error {
    /// An environment variable held a value that could not be used.
    #[error("invalid value for {var}: {reason}")]
    InvalidConfig { var: &'static str, reason: String },

    #[error("failed to serialize record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write records: {0}")]
    Io(#[from] std::io::Error),
}
