use aino_client::{ConnectionStatus, GenerationBackend};
use aino_core::{
    ContentType, GenerationOutput, GenerationRequest, JobStatus, Layout, Newspaper, OutputType,
    Platform,
};
use aino_error::{AinoResult, ApiError, ApiErrorKind};
use aino_tui::{App, Language};
use async_trait::async_trait;

struct StubBackend {
    fail_with: Option<String>,
}

impl StubBackend {
    fn succeeding() -> Self {
        Self { fail_with: None }
    }

    fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl GenerationBackend for StubBackend {
    async fn check_health(&self) -> AinoResult<()> {
        Ok(())
    }

    async fn generate(&self, _request: &GenerationRequest) -> AinoResult<GenerationOutput> {
        match &self.fail_with {
            Some(message) => Err(ApiError::new(ApiErrorKind::Status {
                status: 500,
                message: message.clone(),
            })
            .into()),
            None => Ok(GenerationOutput::builder()
                .heading("Kaleva tänään".to_string())
                .description("Päivän poiminnat somessa".to_string())
                .graphic_url("facebook_landscape.png".to_string())
                .build()
                .expect("stub output")),
        }
    }

    fn download_url(&self, filename: &str) -> String {
        format!("http://backend:8000/api/download/{}", filename)
    }
}

fn connected_app_with_complete_draft() -> App {
    let mut app = App::new(Language::En);
    app.connection = ConnectionStatus::Connected;
    app.draft.set_platform(Platform::Facebook);
    app.draft.set_content_type(ContentType::Post);
    app.draft.set_layout(Layout::Landscape);
    app.draft.set_output_type(OutputType::Static);
    app.draft.set_newspaper(Newspaper::Kaleva);
    app.draft.set_text("hello");
    app
}

#[tokio::test]
async fn valid_submit_runs_idle_to_completed() {
    let mut app = connected_app_with_complete_draft();
    assert_eq!(app.status, JobStatus::Idle);

    let request = app.submit().expect("draft is valid");
    assert!(app.status.is_processing());
    assert!(!app.can_submit());

    let backend = StubBackend::succeeding();
    let result = backend.generate(&request).await;
    app.apply_generation_result(result, &backend);

    match &app.status {
        JobStatus::Completed(output) => {
            assert_eq!(output.all_headings(), vec!["Kaleva tänään"]);
            assert!(output.has_graphics());
        }
        other => panic!("expected completion, got {:?}", other),
    }
    assert_eq!(
        app.download_links,
        vec!["http://backend:8000/api/download/facebook_landscape.png".to_string()],
    );
    assert!(app.can_submit());
}

#[tokio::test]
async fn backend_failure_surfaces_message_and_permits_resubmission() {
    let mut app = connected_app_with_complete_draft();
    let request = app.submit().expect("draft is valid");

    let backend = StubBackend::failing("Layout not supported for animated output");
    let result = backend.generate(&request).await;
    app.apply_generation_result(result, &backend);

    assert_eq!(
        app.status,
        JobStatus::Failed("Layout not supported for animated output".to_string()),
    );
    assert!(app.download_links.is_empty());

    // The user may resubmit without restarting.
    assert!(app.can_submit());
    assert!(app.submit().is_some());
    assert!(app.status.is_processing());
}

#[test]
fn invalid_submit_never_reaches_the_backend() {
    let mut app = App::new(Language::En);
    app.connection = ConnectionStatus::Connected;

    assert!(app.submit().is_none());
    assert_eq!(app.status, JobStatus::Idle);
    let message = app.error_message.as_deref().expect("aggregate message");
    assert!(message.starts_with("Missing required fields"));
    assert!(message.contains("platform"));
}
