//! Trait seam between the UI and the generation backend.

use aino_core::{GenerationOutput, GenerationRequest};
use aino_error::AinoResult;
use async_trait::async_trait;

/// The capabilities the UI needs from a generation backend.
///
/// [`crate::ApiClient`] is the production implementation; tests substitute
/// a stub so the submit flow can be driven without a network.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Probe backend connectivity. Used once at startup.
    async fn check_health(&self) -> AinoResult<()>;

    /// Run one generation request to completion.
    async fn generate(&self, request: &GenerationRequest) -> AinoResult<GenerationOutput>;

    /// Download URL for a produced asset filename.
    fn download_url(&self, filename: &str) -> String;
}
