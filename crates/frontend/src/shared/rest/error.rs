use thiserror::Error;

/// Uniform failure side of every REST call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Session expired, please sign in again")]
    Unauthorized,
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

/// Every API wrapper returns this; consumers branch on it instead of
/// assuming success.
pub type ApiResponse<T> = Result<T, ApiError>;
