//! Required fields, per-field error flags, and validation results.

use serde::{Deserialize, Serialize};

/// The required sections of a draft, in the order validation reports them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    /// Target platform selection
    Platform,
    /// Post/story selection
    ContentType,
    /// Layout selection
    Layout,
    /// Static/animated selection
    OutputType,
    /// Newspaper brand selection
    Newspaper,
    /// Text content or at least one attachment
    Content,
    /// Banner name when the banner is enabled
    Banner,
}

/// Per-field error flags used to highlight invalid inputs.
///
/// # Examples
///
/// ```
/// use aino_core::{Field, FieldErrors};
///
/// let mut flags = FieldErrors::default();
/// flags.set(Field::Platform);
/// assert!(flags.is_flagged(Field::Platform));
/// assert!(flags.any());
///
/// flags.clear(Field::Platform);
/// assert!(!flags.any());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldErrors {
    platform: bool,
    content_type: bool,
    layout: bool,
    output_type: bool,
    newspaper: bool,
    content: bool,
    banner: bool,
}

impl FieldErrors {
    fn slot(&mut self, field: Field) -> &mut bool {
        match field {
            Field::Platform => &mut self.platform,
            Field::ContentType => &mut self.content_type,
            Field::Layout => &mut self.layout,
            Field::OutputType => &mut self.output_type,
            Field::Newspaper => &mut self.newspaper,
            Field::Content => &mut self.content,
            Field::Banner => &mut self.banner,
        }
    }

    /// Whether `field` is flagged.
    pub fn is_flagged(&self, field: Field) -> bool {
        match field {
            Field::Platform => self.platform,
            Field::ContentType => self.content_type,
            Field::Layout => self.layout,
            Field::OutputType => self.output_type,
            Field::Newspaper => self.newspaper,
            Field::Content => self.content,
            Field::Banner => self.banner,
        }
    }

    /// Flag `field`.
    pub fn set(&mut self, field: Field) {
        *self.slot(field) = true;
    }

    /// Unflag `field`.
    pub fn clear(&mut self, field: Field) {
        *self.slot(field) = false;
    }

    /// Unflag everything.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Whether any field is flagged.
    pub fn any(&self) -> bool {
        self.platform
            || self.content_type
            || self.layout
            || self.output_type
            || self.newspaper
            || self.content
            || self.banner
    }
}

/// Outcome of a validation pass over the draft.
///
/// Validation accumulates every failing check rather than stopping at the
/// first, so the aggregate message can list all missing fields at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Validation {
    missing: Vec<Field>,
}

impl Validation {
    pub(crate) fn push(&mut self, field: Field) {
        self.missing.push(field);
    }

    /// Fields that failed their check, in reporting order.
    pub fn missing(&self) -> &[Field] {
        &self.missing
    }

    /// Whether the draft is ready to submit.
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    /// The per-field flag set corresponding to the missing fields.
    pub fn flags(&self) -> FieldErrors {
        let mut flags = FieldErrors::default();
        for field in &self.missing {
            flags.set(*field);
        }
        flags
    }
}
