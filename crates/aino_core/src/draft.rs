//! The in-progress generation draft and its selection state machine.

use crate::{
    legal_layouts, Attachment, Banner, Choice, ContentType, Field, FieldErrors, GenerationRequest,
    Layout, Newspaper, OutputType, Platform, TextLength, Validation,
};
use uuid::Uuid;

/// The complete set of current user selections for one generation request.
///
/// A draft starts empty, is mutated synchronously by user-interaction
/// events, and is never persisted. Dependent selections stay consistent
/// through every mutation: changing the platform clears the content type
/// and layout, and changing the content type clears the layout when it is
/// no longer legal for the new pair.
///
/// Error flags are only raised by a failed [`Draft::submit`], but every
/// mutation re-validates so a shown error clears the instant the draft
/// becomes valid, without another submit.
///
/// # Examples
///
/// ```
/// use aino_core::{ContentType, Draft, Layout, Platform};
///
/// let mut draft = Draft::default();
/// draft.set_platform(Platform::LinkedIn);
///
/// // LinkedIn has exactly one legal combination.
/// assert_eq!(draft.content_type(), Some(ContentType::Post));
/// assert_eq!(draft.layout(), Some(Layout::Landscape));
///
/// // Selecting the platform again toggles it and its dependents off.
/// draft.set_platform(Platform::LinkedIn);
/// assert_eq!(draft.platform(), None);
/// assert_eq!(draft.content_type(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft {
    platform: Choice<Platform>,
    content_type: Choice<ContentType>,
    layout: Choice<Layout>,
    output_type: Choice<OutputType>,
    newspaper: Choice<Newspaper>,
    text_length: TextLength,
    banner: Banner,
    text: String,
    attachments: Vec<Attachment>,
    errors: FieldErrors,
}

impl Draft {
    /// The selected platform.
    pub fn platform(&self) -> Option<Platform> {
        self.platform.selected()
    }

    /// The selected content type.
    pub fn content_type(&self) -> Option<ContentType> {
        self.content_type.selected()
    }

    /// The selected layout.
    pub fn layout(&self) -> Option<Layout> {
        self.layout.selected()
    }

    /// The selected output type.
    pub fn output_type(&self) -> Option<OutputType> {
        self.output_type.selected()
    }

    /// The selected newspaper.
    pub fn newspaper(&self) -> Option<Newspaper> {
        self.newspaper.selected()
    }

    /// The requested text length.
    pub fn text_length(&self) -> TextLength {
        self.text_length
    }

    /// The banner configuration.
    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    /// The free-text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The staged attachments, in insertion order.
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// The per-field error flags from the last failed submit.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The layouts legal for the current platform/content-type pair.
    pub fn legal_layouts(&self) -> &'static [Layout] {
        legal_layouts(self.platform.selected(), self.content_type.selected())
    }

    /// Select or toggle-off the target platform.
    ///
    /// Selecting a new platform clears the content type and layout since
    /// their legality depends on the platform; LinkedIn immediately
    /// selects its only legal combination.
    pub fn set_platform(&mut self, platform: Platform) {
        if self.platform.toggle(platform) && platform == Platform::LinkedIn {
            self.content_type.set(ContentType::Post);
            self.layout.set(Layout::Landscape);
        } else {
            self.content_type.clear();
            self.layout.clear();
        }
        self.errors.clear(Field::Platform);
        self.errors.clear(Field::ContentType);
        self.errors.clear(Field::Layout);
        self.refresh();
    }

    /// Select or toggle-off the content type.
    ///
    /// The layout survives only when it is still legal for the new pair.
    pub fn set_content_type(&mut self, content_type: ContentType) {
        self.content_type.toggle(content_type);
        if let Some(layout) = self.layout.selected() {
            if !self.legal_layouts().contains(&layout) {
                self.layout.clear();
            }
        }
        self.errors.clear(Field::ContentType);
        self.errors.clear(Field::Layout);
        self.refresh();
    }

    /// Select or toggle-off the layout.
    ///
    /// Callers offer only the layouts in [`Draft::legal_layouts`]; values
    /// outside that set are not rejected here.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout.toggle(layout);
        self.errors.clear(Field::Layout);
        self.refresh();
    }

    /// Select or toggle-off the output type.
    pub fn set_output_type(&mut self, output_type: OutputType) {
        self.output_type.toggle(output_type);
        self.errors.clear(Field::OutputType);
        self.refresh();
    }

    /// Select or toggle-off the newspaper brand.
    pub fn set_newspaper(&mut self, newspaper: Newspaper) {
        self.newspaper.toggle(newspaper);
        self.errors.clear(Field::Newspaper);
        self.refresh();
    }

    /// Set the requested text length.
    pub fn set_text_length(&mut self, text_length: TextLength) {
        self.text_length = text_length;
    }

    /// Enable or disable the banner overlay. Disabling clears the banner
    /// name and its error flag.
    pub fn set_banner_enabled(&mut self, enabled: bool) {
        self.banner.set_enabled(enabled);
        if !enabled {
            self.errors.clear(Field::Banner);
        }
        self.refresh();
    }

    /// Set the banner name.
    pub fn set_banner_name(&mut self, name: impl Into<String>) {
        self.banner.set_name(name);
        if self.banner.is_satisfied() {
            self.errors.clear(Field::Banner);
        }
        self.refresh();
    }

    /// Replace the free-text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if self.has_content() {
            self.errors.clear(Field::Content);
        }
        self.refresh();
    }

    /// Stage an attachment.
    pub fn add_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
        self.errors.clear(Field::Content);
        self.refresh();
    }

    /// Remove a staged attachment by id, returning it when present.
    pub fn remove_attachment(&mut self, id: Uuid) -> Option<Attachment> {
        let index = self.attachments.iter().position(|a| *a.id() == id)?;
        let removed = self.attachments.remove(index);
        if self.has_content() {
            self.errors.clear(Field::Content);
        }
        self.refresh();
        Some(removed)
    }

    /// Whether at least one content source (non-blank text or attachment)
    /// is present.
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty() || !self.attachments.is_empty()
    }

    /// Check every required field, accumulating all failures in reporting
    /// order.
    ///
    /// Pure: does not modify the error flags. [`Draft::submit`] applies
    /// the resulting flag set on failure.
    pub fn validate(&self) -> Validation {
        let mut validation = Validation::default();
        if !self.platform.is_set() {
            validation.push(Field::Platform);
        }
        if !self.content_type.is_set() {
            validation.push(Field::ContentType);
        }
        if !self.layout.is_set() {
            validation.push(Field::Layout);
        }
        if !self.output_type.is_set() {
            validation.push(Field::OutputType);
        }
        if !self.newspaper.is_set() {
            validation.push(Field::Newspaper);
        }
        if !self.has_content() {
            validation.push(Field::Content);
        }
        if !self.banner.is_satisfied() {
            validation.push(Field::Banner);
        }
        validation
    }

    /// Attempt to submit the draft.
    ///
    /// On success clears all error state and returns the typed request for
    /// the backend client. On failure raises the per-field flags and
    /// returns the accumulated validation so the caller can display the
    /// aggregate message.
    pub fn submit(&mut self) -> Result<GenerationRequest, Validation> {
        let validation = self.validate();
        match self.request() {
            Some(request) if validation.is_valid() => {
                self.errors.clear_all();
                Ok(request)
            }
            _ => {
                self.errors = validation.flags();
                Err(validation)
            }
        }
    }

    /// Build the typed request from the current selections, when all the
    /// enumerated fields are set.
    fn request(&self) -> Option<GenerationRequest> {
        let content_type = self.content_type.selected()?;
        // Stories are always generated short.
        let text_length = match content_type {
            ContentType::Story => TextLength::Short,
            ContentType::Post => self.text_length,
        };
        let text = self.text.trim();
        Some(GenerationRequest {
            platform: self.platform.selected()?,
            content_type,
            layout: self.layout.selected()?,
            output_type: self.output_type.selected()?,
            newspaper: self.newspaper.selected()?,
            text_content: (!text.is_empty()).then(|| text.to_string()),
            text_length,
            banner_name: self.banner.active_name().map(str::to_string),
            // The backend accepts a single image part; only the first
            // staged attachment is transmitted.
            image: self.attachments.first().cloned(),
        })
    }

    // Auto-clear: a previously shown error disappears the instant the
    // draft becomes valid.
    fn refresh(&mut self) {
        if self.validate().is_valid() {
            self.errors.clear_all();
        }
    }
}
