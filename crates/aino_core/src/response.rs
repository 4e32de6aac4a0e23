//! The parsed generation response.

use serde::{Deserialize, Serialize};

/// Everything the backend returns for a completed generation.
///
/// The backend omits fields depending on the output type and layout, so
/// every field defaults; singular and plural forms are merged by the
/// `all_*` accessors.
///
/// # Examples
///
/// ```
/// use aino_core::GenerationOutput;
///
/// let output = GenerationOutput::builder()
///     .heading("Etusivun uutinen".to_string())
///     .graphic_urls(vec!["social_post.png".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(output.all_headings(), vec!["Etusivun uutinen"]);
/// assert!(output.has_graphics());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into, strip_option), default)]
pub struct GenerationOutput {
    /// Backend task identifier
    #[serde(default, alias = "taskId")]
    task_id: Option<String>,
    /// Primary generated heading
    #[serde(default)]
    heading: Option<String>,
    /// Primary generated description
    #[serde(default)]
    description: Option<String>,
    /// Alternative headings
    #[serde(default)]
    headings: Vec<String>,
    /// Alternative descriptions
    #[serde(default)]
    descriptions: Vec<String>,
    /// Primary produced asset filename/URL
    #[serde(default, alias = "graphicUrl")]
    graphic_url: Option<String>,
    /// All produced asset filenames/URLs
    #[serde(default, alias = "graphicUrls")]
    graphic_urls: Vec<String>,
    /// Produced asset format (e.g. "png", "mp4")
    #[serde(default, alias = "fileFormat")]
    file_format: Option<String>,
    /// Produced asset dimensions (e.g. "1080x1080")
    #[serde(default)]
    dimensions: Option<String>,
    /// Informational message from the backend
    #[serde(default)]
    message: Option<String>,
}

impl GenerationOutput {
    /// Creates a new response builder.
    pub fn builder() -> GenerationOutputBuilder {
        GenerationOutputBuilder::default()
    }

    /// The primary heading followed by the alternatives, deduplicated
    /// against the primary.
    pub fn all_headings(&self) -> Vec<&str> {
        self.merged(&self.heading, &self.headings)
    }

    /// The primary description followed by the alternatives.
    pub fn all_descriptions(&self) -> Vec<&str> {
        self.merged(&self.description, &self.descriptions)
    }

    /// The primary graphic followed by the alternatives.
    pub fn all_graphics(&self) -> Vec<&str> {
        self.merged(&self.graphic_url, &self.graphic_urls)
    }

    /// Whether any graphic or video asset was produced.
    pub fn has_graphics(&self) -> bool {
        self.graphic_url.is_some() || !self.graphic_urls.is_empty()
    }

    fn merged<'a>(&self, primary: &'a Option<String>, rest: &'a [String]) -> Vec<&'a str> {
        let mut merged: Vec<&str> = Vec::with_capacity(rest.len() + 1);
        if let Some(value) = primary {
            merged.push(value.as_str());
        }
        for value in rest {
            if Some(value) != primary.as_ref() {
                merged.push(value.as_str());
            }
        }
        merged
    }
}
