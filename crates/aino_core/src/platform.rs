//! Target social-media platforms.

use serde::{Deserialize, Serialize};

/// Target social network for the generated content.
///
/// # Examples
///
/// ```
/// use aino_core::Platform;
///
/// assert_eq!(Platform::LinkedIn.as_str(), "linkedin");
/// assert_eq!(format!("{}", Platform::Instagram), "instagram");
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
pub enum Platform {
    /// Professional feed content, landscape graphics only
    LinkedIn,
    /// Visual-first platform, square and portrait graphics
    Instagram,
    /// Community feed, square and landscape graphics
    Facebook,
}

impl Platform {
    /// Canonical wire name for the platform.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "linkedin",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
        }
    }
}
