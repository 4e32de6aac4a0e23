//! Top-level error wrapper types.

use crate::{ApiError, ConfigError, HttpError, JsonError};
#[cfg(feature = "tui")]
use crate::TuiError;

/// The foundation error enum for the Aino workspace.
///
/// # Examples
///
/// ```
/// use aino_error::{AinoError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: AinoError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum AinoErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Generation API error
    #[from(ApiError)]
    Api(ApiError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// TUI error
    #[cfg(feature = "tui")]
    #[from(TuiError)]
    Tui(TuiError),
}

/// Aino error with kind discrimination.
///
/// # Examples
///
/// ```
/// use aino_error::{AinoError, AinoResult, ConfigError};
///
/// fn might_fail() -> AinoResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Aino Error: {}", _0)]
pub struct AinoError(Box<AinoErrorKind>);

impl AinoError {
    /// Create a new error from a kind.
    pub fn new(kind: AinoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AinoErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to AinoErrorKind
impl<T> From<T> for AinoError
where
    T: Into<AinoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Aino operations.
///
/// # Examples
///
/// ```
/// use aino_error::{AinoResult, HttpError};
///
/// fn fetch_data() -> AinoResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type AinoResult<T> = std::result::Result<T, AinoError>;
