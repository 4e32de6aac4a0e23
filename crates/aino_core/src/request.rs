//! The typed generation request handed to the backend client.

use crate::{Attachment, ContentType, Layout, Newspaper, OutputType, Platform, TextLength};
use serde::{Deserialize, Serialize};

/// A fully validated generation request.
///
/// Produced only by a successful [`crate::Draft::submit`], so every
/// enumerated field is guaranteed to be set. The client serializes it as
/// a multipart form; [`GenerationRequest::form_fields`] lists the text
/// fields in transmission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationRequest {
    /// Target platform
    pub(crate) platform: Platform,
    /// Post or story
    pub(crate) content_type: ContentType,
    /// Layout class, canonical name on the wire
    pub(crate) layout: Layout,
    /// Static or animated output
    pub(crate) output_type: OutputType,
    /// Newspaper brand
    pub(crate) newspaper: Newspaper,
    /// Free-text content, omitted when blank
    pub(crate) text_content: Option<String>,
    /// Requested text length; always short for stories
    pub(crate) text_length: TextLength,
    /// Banner name, present only when the banner is enabled
    pub(crate) banner_name: Option<String>,
    /// The transmitted upload, if any media was staged
    pub(crate) image: Option<Attachment>,
}

impl GenerationRequest {
    /// The multipart text fields in transmission order.
    ///
    /// The upload part is not included; the client appends it from
    /// [`GenerationRequest::image`].
    ///
    /// # Examples
    ///
    /// ```
    /// use aino_core::{Draft, ContentType, Layout, Newspaper, OutputType, Platform};
    ///
    /// let mut draft = Draft::default();
    /// draft.set_platform(Platform::Facebook);
    /// draft.set_content_type(ContentType::Post);
    /// draft.set_layout(Layout::Square);
    /// draft.set_output_type(OutputType::Static);
    /// draft.set_newspaper(Newspaper::Kaleva);
    /// draft.set_text("hello");
    ///
    /// let request = draft.submit().unwrap();
    /// let fields = request.form_fields();
    /// assert!(fields.contains(&("platform", "facebook".to_string())));
    /// assert!(fields.contains(&("add_banner", "false".to_string())));
    /// ```
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("platform", self.platform.as_str().to_string()),
            ("content_type", self.content_type.as_str().to_string()),
            ("layout", self.layout.as_str().to_string()),
            ("output_type", self.output_type.as_str().to_string()),
            ("newspaper", self.newspaper.as_str().to_string()),
        ];
        if let Some(text) = &self.text_content {
            fields.push(("text_content", text.clone()));
        }
        fields.push(("text_length", self.text_length.as_str().to_string()));
        fields.push(("add_banner", self.banner_name.is_some().to_string()));
        if let Some(name) = &self.banner_name {
            fields.push(("banner_name", name.clone()));
        }
        fields
    }
}
