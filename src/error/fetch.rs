use thiserror::Error;

/// Failures from the data-source layer.
///
/// Pages log these via `tracing::error!`, clear their loading flag, and
/// leave the collection as-is while showing an inline banner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not be sent or the connection dropped.
    #[error("Failed to send request: {0}")]
    Request(String),
    /// The backend answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body could not be decoded into the expected type.
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// The requested record does not exist in the collection.
    #[error("No record with id {0}")]
    NotFound(String),
}
