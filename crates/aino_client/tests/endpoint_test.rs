use aino_client::{ApiClient, ApiConfig, ConnectionStatus, GenerationBackend};
use aino_core::{GenerationOutput, GenerationRequest};
use aino_error::{AinoResult, ApiError, ApiErrorKind};
use async_trait::async_trait;

#[test]
fn download_url_is_pure_string_construction() {
    let client = ApiClient::new(ApiConfig::new("http://backend:8000/"));
    assert_eq!(
        client.download_url("linkedin_landscape.png"),
        "http://backend:8000/api/download/linkedin_landscape.png",
    );
}

#[test]
fn endpoints_derive_from_one_base_url() {
    let config = ApiConfig::new("https://aino.example.fi");
    assert_eq!(config.health_url(), "https://aino.example.fi/api/health");
    assert_eq!(config.generate_url(), "https://aino.example.fi/api/generate");
    assert_eq!(
        config.newspapers_url(),
        "https://aino.example.fi/api/newspapers",
    );
}

#[test]
fn connection_status_collapses_probe_results() {
    let ok: AinoResult<()> = Ok(());
    let err: AinoResult<()> =
        Err(ApiError::new(ApiErrorKind::Health("connection refused".to_string())).into());

    assert_eq!(ConnectionStatus::from_probe(&ok), ConnectionStatus::Connected);
    assert_eq!(
        ConnectionStatus::from_probe(&err),
        ConnectionStatus::Disconnected,
    );
    assert!(ConnectionStatus::Connected.allows_submission());
    assert!(!ConnectionStatus::Checking.allows_submission());
    assert!(!ConnectionStatus::Disconnected.allows_submission());
}

struct StubBackend;

#[async_trait]
impl GenerationBackend for StubBackend {
    async fn check_health(&self) -> AinoResult<()> {
        Ok(())
    }

    async fn generate(&self, _request: &GenerationRequest) -> AinoResult<GenerationOutput> {
        Ok(GenerationOutput::builder()
            .heading("Otsikko".to_string())
            .build()
            .expect("stub output"))
    }

    fn download_url(&self, filename: &str) -> String {
        format!("stub://{}", filename)
    }
}

#[tokio::test]
async fn trait_object_backends_are_substitutable() -> anyhow::Result<()> {
    let backend: Box<dyn GenerationBackend> = Box::new(StubBackend);
    backend.check_health().await?;
    assert_eq!(backend.download_url("a.png"), "stub://a.png");
    Ok(())
}
