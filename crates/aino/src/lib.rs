//! Aino - social-media content adaptation client
//!
//! Aino is a terminal client for a newspaper group's content-adaptation
//! backend: assemble a generation request (platform, content type,
//! layout, output type, newspaper brand, optional banner, text and/or
//! media), submit it, and browse the returned headings, descriptions,
//! and asset URLs.
//!
//! # Architecture
//!
//! Aino is organized as a workspace with focused crates:
//!
//! - `aino_core` - Domain types and the selection state machine
//! - `aino_client` - HTTP client for the generation backend
//! - `aino_error` - Error types
//! - `aino_tui` - Terminal UI
//!
//! This crate (`aino`) re-exports everything for convenience and ships
//! the `aino` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use aino_client::{ApiClient, ApiConfig, ConnectionStatus, GenerationBackend};
pub use aino_core::{
    legal_layouts, Attachment, Banner, Choice, ContentType, Draft, Field, FieldErrors,
    GenerationOutput, GenerationRequest, JobStatus, Layout, MediaKind, Newspaper, OutputType,
    Platform, TextLength, Validation,
};
pub use aino_error::{AinoError, AinoErrorKind, AinoResult};
pub use aino_tui::{run_tui, App, Language};

use strum::IntoEnumIterator;
use tracing::{debug, warn};

/// Compare the backend's newspaper listing against the bundled brand
/// enumeration and log any drift.
///
/// Validation never depends on the listing, so failure here is
/// non-fatal.
pub async fn warn_on_newspaper_drift(client: &ApiClient) {
    match client.list_newspapers().await {
        Ok(listing) => {
            for brand in Newspaper::iter() {
                if !listing.iter().any(|name| name == brand.as_str()) {
                    warn!(brand = brand.as_str(), "Backend no longer lists newspaper");
                }
            }
            for name in &listing {
                if Newspaper::iter().all(|brand| brand.as_str() != name) {
                    warn!(name = %name, "Backend lists an unknown newspaper");
                }
            }
        }
        Err(e) => debug!(error = %e, "Newspaper listing unavailable"),
    }
}
