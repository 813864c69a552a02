use serde::{Deserialize, Serialize};

/// The response body when an error occurs with an API request
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}
