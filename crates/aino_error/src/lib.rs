//! Error types for the Aino content-adaptation client.
//!
//! This crate provides the foundation error types used throughout the Aino
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use aino_error::{AinoResult, HttpError};
//!
//! fn probe_backend() -> AinoResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match probe_backend() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod error;
mod http;
mod json;
#[cfg(feature = "tui")]
mod tui;

pub use api::{ApiError, ApiErrorKind};
pub use config::ConfigError;
pub use error::{AinoError, AinoErrorKind, AinoResult};
pub use http::HttpError;
pub use json::JsonError;
#[cfg(feature = "tui")]
pub use tui::{TuiError, TuiErrorKind, TuiResult};
