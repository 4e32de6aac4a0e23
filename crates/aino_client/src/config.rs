//! Backend endpoint configuration.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from aino.toml)
//! - User overrides (~/.config/aino/aino.toml, then ./aino.toml)
//! - Environment overrides (AINO_* variables, highest precedence)

use aino_error::{AinoError, AinoResult, ConfigError};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Location of the content-generation backend.
///
/// All endpoint URLs derive from one base URL, mirroring the backend's
/// fixed route table.
///
/// # Examples
///
/// ```
/// use aino_client::ApiConfig;
///
/// let config = ApiConfig::new("http://localhost:8000");
/// assert_eq!(config.health_url(), "http://localhost:8000/api/health");
/// assert_eq!(
///     config.download_url("social_post.png"),
///     "http://localhost:8000/api/download/social_post.png",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}

impl ApiConfig {
    /// Create a config pointing at `base_url`. A trailing slash is
    /// stripped so endpoint joining stays uniform.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Load configuration with precedence: environment > current dir >
    /// home dir > bundled defaults.
    pub fn load() -> AinoResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../aino.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/aino/aino.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional)
        builder = builder.add_source(File::with_name("aino").required(false));

        // Environment variables take highest precedence (AINO_BASE_URL)
        builder = builder.add_source(Environment::with_prefix("AINO"));

        let loaded: Self = builder
            .build()
            .map_err(|e| {
                AinoError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                AinoError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        // Re-normalize in case an override carried a trailing slash.
        Ok(Self::new(loaded.base_url))
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Health probe endpoint.
    pub fn health_url(&self) -> String {
        format!("{}/api/health", self.base_url)
    }

    /// Content generation endpoint.
    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    /// Newspaper listing endpoint.
    pub fn newspapers_url(&self) -> String {
        format!("{}/api/newspapers", self.base_url)
    }

    /// Download URL for a produced asset. Pure string construction, not a
    /// network call.
    pub fn download_url(&self, filename: &str) -> String {
        format!("{}/api/download/{}", self.base_url, filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = ApiConfig::new("https://aino.kalevamedia.fi//");
        assert_eq!(config.base_url(), "https://aino.kalevamedia.fi");
        assert_eq!(
            config.generate_url(),
            "https://aino.kalevamedia.fi/api/generate",
        );
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(ApiConfig::default().base_url(), "http://localhost:8000");
    }
}
