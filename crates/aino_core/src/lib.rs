//! Core data types for the Aino content-adaptation client.
//!
//! This crate owns the selection state machine: the in-progress generation
//! [`Draft`], the toggle-select [`Choice`] primitive, the platform/content
//! layout rule, validation, and the processing status machine. It has no
//! rendering or network dependencies and operates exclusively on canonical
//! enum values; display labels live in the presentation layer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attachment;
mod banner;
mod choice;
mod content;
mod draft;
mod field;
mod layout;
mod newspaper;
mod output;
mod platform;
mod request;
mod response;
mod status;

pub use attachment::{Attachment, MediaKind};
pub use banner::Banner;
pub use choice::Choice;
pub use content::{ContentType, TextLength};
pub use draft::Draft;
pub use field::{Field, FieldErrors, Validation};
pub use layout::{legal_layouts, Layout};
pub use newspaper::Newspaper;
pub use output::OutputType;
pub use platform::Platform;
pub use request::GenerationRequest;
pub use response::{GenerationOutput, GenerationOutputBuilder};
pub use status::JobStatus;
