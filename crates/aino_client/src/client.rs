//! Reqwest client for the content-generation backend.

use crate::{ApiConfig, GenerationBackend};
use aino_core::{GenerationOutput, GenerationRequest};
use aino_error::{AinoResult, ApiError, ApiErrorKind};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument, warn};

/// Fallback when a failed generation carries no backend message.
const DEFAULT_FAILURE_MESSAGE: &str = "Content generation failed";

/// Error body shape of the backend's failure responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Newspaper listing response.
#[derive(Debug, Deserialize)]
struct NewspaperListing {
    #[serde(default)]
    newspapers: Vec<String>,
}

/// HTTP client for the generation backend.
///
/// # Examples
///
/// ```no_run
/// use aino_client::{ApiClient, ApiConfig, GenerationBackend};
///
/// # async fn run() -> aino_error::AinoResult<()> {
/// let client = ApiClient::new(ApiConfig::default());
/// client.check_health().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client against the configured backend.
    pub fn new(config: ApiConfig) -> Self {
        debug!(base_url = %config.base_url(), "Creating API client");
        Self {
            client: Client::new(),
            config,
        }
    }

    /// The endpoint configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch the backend's newspaper listing.
    ///
    /// Used only to warn when the bundled brand enumeration drifts from
    /// the backend; validation never depends on it.
    #[instrument(skip(self))]
    pub async fn list_newspapers(&self) -> AinoResult<Vec<String>> {
        let response = self
            .client
            .get(self.config.newspapers_url())
            .send()
            .await
            .map_err(|e| ApiError::new(ApiErrorKind::Request(e.to_string())))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            return Err(ApiError::new(ApiErrorKind::Status {
                status,
                message: "Failed to fetch newspapers".to_string(),
            })
            .into());
        }

        let listing: NewspaperListing = response
            .json()
            .await
            .map_err(|e| ApiError::new(ApiErrorKind::Parse(e.to_string())))?;
        debug!(count = listing.newspapers.len(), "Fetched newspaper listing");
        Ok(listing.newspapers)
    }

    /// Extract the user-facing message from a failure body, falling back
    /// to the default when the backend supplies none.
    fn failure_message(status: u16, body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| format!("{} (status {})", DEFAULT_FAILURE_MESSAGE, status))
    }
}

#[async_trait]
impl GenerationBackend for ApiClient {
    #[instrument(skip(self))]
    async fn check_health(&self) -> AinoResult<()> {
        debug!("Probing backend health");

        let response = self
            .client
            .get(self.config.health_url())
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Health probe failed to reach backend");
                ApiError::new(ApiErrorKind::Health(e.to_string()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            warn!(status = %status, "Backend health probe returned failure");
            return Err(ApiError::new(ApiErrorKind::Health(format!(
                "backend returned status {}",
                status
            )))
            .into());
        }

        info!("Backend health probe succeeded");
        Ok(())
    }

    #[instrument(skip(self, request), fields(platform = %request.platform(), layout = %request.layout()))]
    async fn generate(&self, request: &GenerationRequest) -> AinoResult<GenerationOutput> {
        debug!("Sending generation request");

        let mut form = Form::new();
        for (name, value) in request.form_fields() {
            form = form.text(name, value);
        }

        if let Some(image) = request.image() {
            let bytes = tokio::fs::read(image.path()).await.map_err(|e| {
                error!(path = %image.path().display(), error = %e, "Failed to read attachment");
                ApiError::new(ApiErrorKind::Request(format!(
                    "failed to read attachment {}: {}",
                    image.file_name(),
                    e
                )))
            })?;
            let part = Part::bytes(bytes)
                .file_name(image.file_name().to_string())
                .mime_str(&image.mime())
                .map_err(|e| ApiError::new(ApiErrorKind::Request(e.to_string())))?;
            form = form.part("image", part);
        }

        let response = self
            .client
            .post(self.config.generate_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send generation request");
                ApiError::new(ApiErrorKind::Request(e.to_string()))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let message = Self::failure_message(status, &body);
            error!(status, message = %message, "Backend rejected generation request");
            return Err(ApiError::new(ApiErrorKind::Status { status, message }).into());
        }

        let output: GenerationOutput = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse generation response");
            ApiError::new(ApiErrorKind::Parse(e.to_string()))
        })?;

        info!(
            task_id = output.task_id().as_deref().unwrap_or("-"),
            graphics = output.all_graphics().len(),
            "Generation completed"
        );
        Ok(output)
    }

    fn download_url(&self, filename: &str) -> String {
        self.config.download_url(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_prefers_backend_detail() {
        let message = ApiClient::failure_message(422, r#"{"detail": "Layout not supported"}"#);
        assert_eq!(message, "Layout not supported");
    }

    #[test]
    fn failure_message_falls_back_on_blank_detail() {
        let message = ApiClient::failure_message(500, r#"{"detail": "  "}"#);
        assert_eq!(message, "Content generation failed (status 500)");
    }

    #[test]
    fn failure_message_falls_back_on_non_json_body() {
        let message = ApiClient::failure_message(502, "<html>Bad Gateway</html>");
        assert_eq!(message, "Content generation failed (status 502)");
    }
}
