//! Optional category banner overlay.

use serde::{Deserialize, Serialize};

/// An optional text label the backend overlays on the generated graphic.
///
/// Enabling the banner without a name is an incomplete configuration;
/// disabling it discards the name.
///
/// # Examples
///
/// ```
/// use aino_core::Banner;
///
/// let mut banner = Banner::default();
/// assert!(banner.is_satisfied());
///
/// banner.set_enabled(true);
/// assert!(!banner.is_satisfied());
///
/// banner.set_name("Urheilu");
/// assert!(banner.is_satisfied());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Banner {
    enabled: bool,
    name: String,
}

impl Banner {
    /// Whether the banner overlay is requested.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The banner text.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enable or disable the banner. Disabling clears the name.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.name.clear();
        }
    }

    /// Set the banner text.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Disabled, or enabled with a non-blank name.
    pub fn is_satisfied(&self) -> bool {
        !self.enabled || !self.name.trim().is_empty()
    }

    /// The name to transmit, present only when the banner is enabled.
    pub fn active_name(&self) -> Option<&str> {
        if self.enabled && !self.name.trim().is_empty() {
            Some(self.name.trim())
        } else {
            None
        }
    }
}
