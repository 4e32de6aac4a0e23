//! Generation API error types.

/// API error kind variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ApiErrorKind {
    /// Health probe failed; the backend is unreachable
    #[display("Backend health check failed: {}", _0)]
    Health(String),
    /// Request could not be sent (connection, TLS, timeout)
    #[display("Request failed: {}", _0)]
    Request(String),
    /// Backend answered with a non-success status
    #[display("Backend returned {}: {}", status, message)]
    Status {
        /// HTTP status code
        status: u16,
        /// Message extracted from the error body, or a default
        message: String,
    },
    /// Response body could not be parsed
    #[display("Failed to parse response: {}", _0)]
    Parse(String),
}

/// Generation API error with source location tracking.
///
/// # Examples
///
/// ```
/// use aino_error::{ApiError, ApiErrorKind};
///
/// let err = ApiError::new(ApiErrorKind::Health("connection refused".to_string()));
/// assert!(format!("{}", err).contains("health check"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("API Error: {} at line {} in {}", kind, line, file)]
pub struct ApiError {
    /// Error kind
    pub kind: ApiErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ApiError {
    /// Create a new ApiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ApiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The message to surface to the user for this failure.
    ///
    /// Status errors carry the backend-supplied message; other kinds render
    /// their display form.
    pub fn user_message(&self) -> String {
        match &self.kind {
            ApiErrorKind::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
