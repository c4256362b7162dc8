//! Wire representation of API errors.

/// The JSON error body returned by every failing endpoint:
/// `{ "error": { "type": ..., "code": ..., "message": ... } }`.
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub error_type: &'static str,
    pub code: &'static str,
    pub message: String,
}

impl ErrorResponse {
    /// Builds the wire body from its parts.
    pub fn new(error_type: &'static str, code: &'static str, message: impl ToString) -> Self {
        Self {
            error: ErrorBody {
                error_type,
                code,
                message: message.to_string(),
            },
        }
    }
}
