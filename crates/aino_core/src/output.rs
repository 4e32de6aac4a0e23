//! Output type selection.

use serde::{Deserialize, Serialize};

/// Static image versus animated/video output.
///
/// Independent of every other selection.
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
pub enum OutputType {
    /// Static image output
    Static,
    /// Animated/video output
    Animated,
}

impl OutputType {
    /// Canonical wire name for the output type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OutputType::Static => "static",
            OutputType::Animated => "animated",
        }
    }
}
