//! Application state and core TUI types.

use crate::i18n::{missing_fields_message, Language};
use aino_client::{ConnectionStatus, GenerationBackend};
use aino_core::{
    Attachment, ContentType, Draft, GenerationRequest, JobStatus, Newspaper, OutputType, Platform,
    TextLength,
};
use aino_error::{AinoError, AinoErrorKind};
use strum::IntoEnumIterator;

/// Form sections in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    /// Free-text content
    Text,
    /// Staged attachments
    Attachments,
    /// Platform selection
    Platform,
    /// Post/story selection
    ContentType,
    /// Layout selection (only legal options are offered)
    Layout,
    /// Static/animated selection
    OutputType,
    /// Newspaper brand selection
    Newspaper,
    /// Text length selection
    TextLength,
    /// Banner toggle and name
    Banner,
}

impl Section {
    /// Navigation order of the form sections.
    pub const ALL: [Section; 9] = [
        Section::Text,
        Section::Attachments,
        Section::Platform,
        Section::ContentType,
        Section::Layout,
        Section::OutputType,
        Section::Newspaper,
        Section::TextLength,
        Section::Banner,
    ];

    fn position(&self) -> usize {
        Section::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    fn next(&self) -> Section {
        Section::ALL[(self.position() + 1) % Section::ALL.len()]
    }

    fn previous(&self) -> Section {
        let len = Section::ALL.len();
        Section::ALL[(self.position() + len - 1) % len]
    }
}

/// What an active text-input session is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputTarget {
    /// The free-text content
    Text,
    /// The banner name
    BannerName,
    /// A path to stage as an attachment
    AttachmentPath,
}

/// Main application state.
pub struct App {
    /// Display language
    pub language: Language,
    /// The in-progress generation draft
    pub draft: Draft,
    /// Processing status of the current request
    pub status: JobStatus,
    /// Backend connectivity from the startup probe
    pub connection: ConnectionStatus,
    /// Focused form section
    pub section: Section,
    /// Highlighted option within the focused section
    pub option_index: usize,
    /// Highlighted attachment row
    pub attachment_index: usize,
    /// Active text-input session, if any
    pub input: Option<(InputTarget, String)>,
    /// Aggregate missing-fields message from the last failed submit
    pub error_message: Option<String>,
    /// Transient status line
    pub status_line: String,
    /// Download URLs for the last completed generation
    pub download_links: Vec<String>,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance with an empty draft.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            draft: Draft::default(),
            status: JobStatus::Idle,
            connection: ConnectionStatus::Checking,
            section: Section::Text,
            option_index: 0,
            attachment_index: 0,
            input: None,
            error_message: None,
            status_line: String::new(),
            download_links: Vec::new(),
            should_quit: false,
        }
    }

    /// Number of selectable options in the focused section.
    pub fn option_count(&self) -> usize {
        match self.section {
            Section::Text | Section::Attachments | Section::Banner => 1,
            Section::Platform => Platform::iter().count(),
            Section::ContentType => ContentType::iter().count(),
            Section::Layout => self.draft.legal_layouts().len(),
            Section::OutputType => OutputType::iter().count(),
            Section::Newspaper => Newspaper::iter().count(),
            Section::TextLength => TextLength::iter().count(),
        }
    }

    /// Focus the next form section, skipping sections that are hidden
    /// under the current selections.
    pub fn next_section(&mut self) {
        let mut next = self.section.next();
        while !self.section_visible(next) {
            next = next.next();
        }
        self.section = next;
        self.option_index = 0;
    }

    /// Focus the previous form section.
    pub fn previous_section(&mut self) {
        let mut previous = self.section.previous();
        while !self.section_visible(previous) {
            previous = previous.previous();
        }
        self.section = previous;
        self.option_index = 0;
    }

    // Text length is only offered for posts; stories are always short.
    fn section_visible(&self, section: Section) -> bool {
        section != Section::TextLength || self.draft.content_type() != Some(ContentType::Story)
    }

    /// Highlight the next option within the focused section. In the
    /// attachments section this moves the attachment cursor instead.
    pub fn next_option(&mut self) {
        if self.section == Section::Attachments {
            let count = self.draft.attachments().len();
            if count > 0 {
                self.attachment_index = (self.attachment_index + 1) % count;
            }
            return;
        }
        let count = self.option_count();
        if count > 0 {
            self.option_index = (self.option_index + 1) % count;
        }
    }

    /// Highlight the previous option within the focused section.
    pub fn previous_option(&mut self) {
        if self.section == Section::Attachments {
            let count = self.draft.attachments().len();
            if count > 0 {
                self.attachment_index = (self.attachment_index + count - 1) % count;
            }
            return;
        }
        let count = self.option_count();
        if count > 0 {
            self.option_index = (self.option_index + count - 1) % count;
        }
    }

    /// Apply the highlighted option: toggle a selection, or open the
    /// matching input session for text-like sections.
    pub fn activate(&mut self) {
        match self.section {
            Section::Text => {
                self.input = Some((InputTarget::Text, self.draft.text().to_string()));
            }
            Section::Attachments => {
                self.input = Some((InputTarget::AttachmentPath, String::new()));
            }
            Section::Platform => {
                if let Some(platform) = Platform::iter().nth(self.option_index) {
                    self.draft.set_platform(platform);
                }
            }
            Section::ContentType => {
                if let Some(content_type) = ContentType::iter().nth(self.option_index) {
                    self.draft.set_content_type(content_type);
                }
            }
            Section::Layout => {
                if let Some(layout) = self.draft.legal_layouts().get(self.option_index).copied() {
                    self.draft.set_layout(layout);
                }
            }
            Section::OutputType => {
                if let Some(output_type) = OutputType::iter().nth(self.option_index) {
                    self.draft.set_output_type(output_type);
                }
            }
            Section::Newspaper => {
                if let Some(newspaper) = Newspaper::iter().nth(self.option_index) {
                    self.draft.set_newspaper(newspaper);
                }
            }
            Section::TextLength => {
                if let Some(text_length) = TextLength::iter().nth(self.option_index) {
                    self.draft.set_text_length(text_length);
                }
            }
            Section::Banner => {
                let enabled = self.draft.banner().enabled();
                self.draft.set_banner_enabled(!enabled);
            }
        }
        self.refresh_error_message();
    }

    /// Open the banner-name input session.
    pub fn edit_banner_name(&mut self) {
        self.input = Some((
            InputTarget::BannerName,
            self.draft.banner().name().to_string(),
        ));
    }

    /// Remove the highlighted attachment.
    pub fn remove_selected_attachment(&mut self) {
        if let Some(attachment) = self.draft.attachments().get(self.attachment_index) {
            let id = *attachment.id();
            self.draft.remove_attachment(id);
            if self.attachment_index >= self.draft.attachments().len() {
                self.attachment_index = self.draft.attachments().len().saturating_sub(1);
            }
            self.refresh_error_message();
        }
    }

    /// Commit the active input session into the draft.
    pub fn commit_input(&mut self) {
        if let Some((target, buffer)) = self.input.take() {
            match target {
                InputTarget::Text => self.draft.set_text(buffer),
                InputTarget::BannerName => self.draft.set_banner_name(buffer),
                InputTarget::AttachmentPath => {
                    let path = buffer.trim();
                    if path.is_empty() {
                        return;
                    }
                    match Attachment::from_path(path) {
                        Some(attachment) => {
                            self.status_line = format!("Staged {}", attachment.file_name());
                            self.draft.add_attachment(attachment);
                        }
                        None => {
                            self.status_line = format!("Unsupported file type: {}", path);
                        }
                    }
                }
            }
            self.refresh_error_message();
        }
    }

    /// Discard the active input session.
    pub fn cancel_input(&mut self) {
        self.input = None;
    }

    /// Whether submission is currently allowed.
    pub fn can_submit(&self) -> bool {
        self.connection.allows_submission() && !self.status.is_processing()
    }

    /// Attempt to submit the draft.
    ///
    /// On success the status moves to processing and the typed request is
    /// returned for the runner to dispatch. On validation failure the
    /// aggregate message is set and nothing is dispatched.
    pub fn submit(&mut self) -> Option<GenerationRequest> {
        if !self.can_submit() {
            return None;
        }
        match self.draft.submit() {
            Ok(request) => {
                self.error_message = None;
                self.status.begin();
                Some(request)
            }
            Err(validation) => {
                self.error_message =
                    Some(missing_fields_message(self.language, validation.missing()));
                None
            }
        }
    }

    /// Record the health probe result.
    pub fn apply_health_result(&mut self, result: &Result<(), AinoError>) {
        self.connection = ConnectionStatus::from_probe(result);
    }

    /// Record a finished generation call.
    pub fn apply_generation_result(
        &mut self,
        result: Result<aino_core::GenerationOutput, AinoError>,
        backend: &dyn GenerationBackend,
    ) {
        match result {
            Ok(output) => {
                self.download_links = output
                    .all_graphics()
                    .iter()
                    .map(|g| backend.download_url(g))
                    .collect();
                self.status.complete(output);
            }
            Err(error) => {
                self.download_links.clear();
                self.status.fail(failure_text(&error));
            }
        }
    }

    /// Switch between English and Finnish labels.
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // A shown error clears the instant the draft becomes valid.
    fn refresh_error_message(&mut self) {
        if self.draft.validate().is_valid() {
            self.error_message = None;
        }
    }
}

/// The message displayed for a failed generation: the backend's own
/// message when one exists, the error's display form otherwise.
fn failure_text(error: &AinoError) -> String {
    match error.kind() {
        AinoErrorKind::Api(api) => api.user_message(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aino_core::Layout;

    #[test]
    fn section_navigation_wraps() {
        let mut app = App::new(Language::En);
        app.previous_section();
        assert_eq!(app.section, Section::Banner);
        app.next_section();
        assert_eq!(app.section, Section::Text);
    }

    #[test]
    fn layout_section_offers_only_legal_options() {
        let mut app = App::new(Language::En);
        app.section = Section::Layout;
        assert_eq!(app.option_count(), 0);

        app.draft.set_platform(Platform::Instagram);
        app.draft.set_content_type(ContentType::Story);
        assert_eq!(app.option_count(), 1);
        app.activate();
        assert_eq!(app.draft.layout(), Some(Layout::Portrait));
    }

    #[test]
    fn submit_is_blocked_while_disconnected_or_processing() {
        let mut app = App::new(Language::En);
        app.connection = ConnectionStatus::Disconnected;
        assert!(app.submit().is_none());

        app.connection = ConnectionStatus::Connected;
        app.status = JobStatus::Processing;
        assert!(app.submit().is_none());
    }

    #[test]
    fn failed_submit_sets_aggregate_message_and_fix_clears_it() {
        let mut app = App::new(Language::En);
        app.connection = ConnectionStatus::Connected;
        assert!(app.submit().is_none());
        let message = app.error_message.clone().expect("message set");
        assert!(message.contains("platform"));

        // Filling every field clears the message without another submit.
        app.draft.set_platform(Platform::Facebook);
        app.draft.set_content_type(ContentType::Post);
        app.draft.set_layout(Layout::Landscape);
        app.draft.set_output_type(OutputType::Static);
        app.draft.set_newspaper(Newspaper::Kaleva);
        app.section = Section::Text;
        app.input = Some((InputTarget::Text, "hello".to_string()));
        app.commit_input();
        assert_eq!(app.error_message, None);
    }
}
