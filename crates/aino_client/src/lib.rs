//! HTTP client for the Aino content-generation backend.
//!
//! The backend performs the real work (image composition, text
//! generation); this crate provides the thin, typed wrappers around its
//! endpoints: a health probe, the multipart generation request, the
//! newspaper listing, and download-URL construction.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod client;
mod config;
mod health;

pub use backend::GenerationBackend;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use health::ConnectionStatus;
