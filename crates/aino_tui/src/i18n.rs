//! English/Finnish display labels.
//!
//! The state machine operates on canonical enum values only; everything
//! here is presentation. Keys mirror the label table of the original
//! front-end, trimmed to what the TUI renders.

use aino_core::Field;

/// Display language for labels and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English
    #[default]
    En,
    /// Finnish
    Fi,
}

impl Language {
    /// The other language, for the language-switcher binding.
    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Fi,
            Language::Fi => Language::En,
        }
    }
}

/// UI strings the TUI renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Application title
    Title,
    /// Application subtitle
    Subtitle,
    /// Content input section heading
    ContentInput,
    /// Text content row
    TextContent,
    /// Attachments row
    UploadedFiles,
    /// Platform section heading
    SocialMediaPlatform,
    /// Content type section heading
    ContentType,
    /// Layout section heading
    LayoutOptions,
    /// Output type section heading
    OutputType,
    /// Newspaper section heading
    Newspaper,
    /// Text length section heading
    TextLength,
    /// Banner section heading
    Banner,
    /// Submit control
    GenerateContent,
    /// In-flight label
    Processing,
    /// Results pane heading
    GeneratedOutput,
    /// Results placeholder before the first generation
    ConfigureInputs,
    /// Text results heading
    TextOutput,
    /// Graphic results heading
    GraphicOutput,
    /// Shown when a completed response has no description
    NoDescription,
    /// Missing-fields message prefix
    MissingFields,
    /// Connectivity warning banner
    BackendUnavailable,
    /// Health probe still running
    CheckingBackend,
}

/// Look up a UI string.
pub fn label(language: Language, label: Label) -> &'static str {
    match language {
        Language::En => match label {
            Label::Title => "Aino",
            Label::Subtitle => "Social media content adaptation for LinkedIn, Instagram, and Facebook",
            Label::ContentInput => "Content Input",
            Label::TextContent => "Text Content",
            Label::UploadedFiles => "Uploaded Files",
            Label::SocialMediaPlatform => "Social Media Platform",
            Label::ContentType => "Content Type",
            Label::LayoutOptions => "Layout Options",
            Label::OutputType => "Output Type",
            Label::Newspaper => "Newspaper",
            Label::TextLength => "Text Length",
            Label::Banner => "Category Banner",
            Label::GenerateContent => "Generate Content",
            Label::Processing => "Processing...",
            Label::GeneratedOutput => "Generated Output",
            Label::ConfigureInputs => {
                "Configure your inputs and press G to generate content"
            }
            Label::TextOutput => "Text Output",
            Label::GraphicOutput => "Graphic Output",
            Label::NoDescription => "No description generated",
            Label::MissingFields => "Missing required fields",
            Label::BackendUnavailable => "Backend unavailable - generation is disabled",
            Label::CheckingBackend => "Checking backend connection...",
        },
        Language::Fi => match label {
            Label::Title => "Aino",
            Label::Subtitle => "Sosiaalisen median sisällön mukauttaminen LinkedInille, Instagramille ja Facebookille",
            Label::ContentInput => "Sisältösyöttö",
            Label::TextContent => "Tekstisisältö",
            Label::UploadedFiles => "Ladatut Tiedostot",
            Label::SocialMediaPlatform => "Sosiaalisen Median Alusta",
            Label::ContentType => "Sisältötyyppi",
            Label::LayoutOptions => "Asetteluvaihtoehdot",
            Label::OutputType => "Tulostyyppi",
            Label::Newspaper => "Sanomalehti",
            Label::TextLength => "Tekstin pituus",
            Label::Banner => "Kategoriabanneri",
            Label::GenerateContent => "Luo Sisältö",
            Label::Processing => "Käsitellään...",
            Label::GeneratedOutput => "Luotu Tuotos",
            Label::ConfigureInputs => {
                "Määritä syötteesi ja paina G luodaksesi sisällön"
            }
            Label::TextOutput => "Tekstituotos",
            Label::GraphicOutput => "Graafinen Tuotos",
            Label::NoDescription => "Kuvailua ei luotu",
            Label::MissingFields => "Pakolliset kentät puuttuvat",
            Label::BackendUnavailable => "Taustapalvelu ei vastaa - luonti on poissa käytöstä",
            Label::CheckingBackend => "Tarkistetaan taustapalvelun yhteyttä...",
        },
    }
}

/// Display label for a required field, used in the aggregate error
/// message and for highlighting.
pub fn field_label(language: Language, field: Field) -> &'static str {
    match language {
        Language::En => match field {
            Field::Platform => "platform",
            Field::ContentType => "content type",
            Field::Layout => "layout",
            Field::OutputType => "output type",
            Field::Newspaper => "newspaper",
            Field::Content => "text or media content",
            Field::Banner => "banner name",
        },
        Language::Fi => match field {
            Field::Platform => "alusta",
            Field::ContentType => "sisältötyyppi",
            Field::Layout => "asettelu",
            Field::OutputType => "tulostyyppi",
            Field::Newspaper => "sanomalehti",
            Field::Content => "teksti tai media",
            Field::Banner => "bannerin nimi",
        },
    }
}

/// The comma-joined aggregate message for a failed submit.
///
/// # Examples
///
/// ```
/// use aino_core::Field;
/// use aino_tui::{missing_fields_message, Language};
///
/// let message = missing_fields_message(Language::En, &[Field::Platform, Field::Layout]);
/// assert_eq!(message, "Missing required fields: platform, layout");
/// ```
pub fn missing_fields_message(language: Language, missing: &[Field]) -> String {
    let labels: Vec<&str> = missing.iter().map(|f| field_label(language, *f)).collect();
    format!(
        "{}: {}",
        label(language, Label::MissingFields),
        labels.join(", ")
    )
}
