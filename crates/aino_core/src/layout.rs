//! Layout classes and the platform/content legality rule.

use crate::{ContentType, Platform};
use serde::{Deserialize, Serialize};

/// Aspect-ratio class of the output graphic.
///
/// # Examples
///
/// ```
/// use aino_core::Layout;
///
/// assert_eq!(Layout::Portrait.as_str(), "portrait");
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
pub enum Layout {
    /// 1:1 graphic
    Square,
    /// Vertical graphic (stories, Instagram feed)
    Portrait,
    /// Horizontal graphic (LinkedIn, Facebook feed)
    Landscape,
}

impl Layout {
    /// Canonical wire name for the layout.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Layout::Square => "square",
            Layout::Portrait => "portrait",
            Layout::Landscape => "landscape",
        }
    }
}

/// The set of layouts legal for a platform/content-type pair.
///
/// With no platform selected nothing is legal; with a platform but no
/// content type the post layouts are offered so the layout section can
/// render before the content type is chosen. LinkedIn has exactly one
/// legal combination.
///
/// # Examples
///
/// ```
/// use aino_core::{legal_layouts, ContentType, Layout, Platform};
///
/// assert_eq!(
///     legal_layouts(Some(Platform::Instagram), Some(ContentType::Story)),
///     &[Layout::Portrait],
/// );
/// assert_eq!(legal_layouts(None, None), &[] as &[Layout]);
/// ```
pub fn legal_layouts(
    platform: Option<Platform>,
    content_type: Option<ContentType>,
) -> &'static [Layout] {
    match (platform, content_type) {
        (None, _) => &[],
        (Some(Platform::LinkedIn), _) => &[Layout::Landscape],
        (Some(Platform::Instagram), Some(ContentType::Story)) => &[Layout::Portrait],
        (Some(Platform::Instagram), _) => &[Layout::Square, Layout::Portrait],
        (Some(Platform::Facebook), Some(ContentType::Story)) => &[Layout::Portrait],
        (Some(Platform::Facebook), _) => &[Layout::Square, Layout::Landscape],
    }
}
