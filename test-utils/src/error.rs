use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Temporary directory or file operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Fixture data could not be encoded or decoded.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
