//! Content type and text length selections.

use serde::{Deserialize, Serialize};

/// Persistent feed content versus ephemeral story content.
///
/// The selected content type narrows which layouts are legal for the
/// selected platform; see [`crate::legal_layouts`].
///
/// # Examples
///
/// ```
/// use aino_core::ContentType;
///
/// assert_eq!(ContentType::Post.as_str(), "post");
/// assert_eq!(format!("{}", ContentType::Story), "story");
/// ```
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentType {
    /// Persistent feed content
    Post,
    /// Ephemeral story content
    Story,
}

impl ContentType {
    /// Canonical wire name for the content type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ContentType::Post => "post",
            ContentType::Story => "story",
        }
    }
}

/// Requested length of the generated text.
///
/// Only meaningful for posts; stories are always generated short, so the
/// request serializer substitutes [`TextLength::Short`] for them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TextLength {
    /// Headline-length text
    Short,
    /// Standard post length
    #[default]
    Medium,
    /// Long-form text
    Long,
}

impl TextLength {
    /// Canonical wire name for the text length.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TextLength::Short => "short",
            TextLength::Medium => "medium",
            TextLength::Long => "long",
        }
    }
}
