//! Newspaper brand enumeration.

use serde::{Deserialize, Serialize};

/// The newspaper mastheads the backend can brand graphics for.
///
/// The set is closed because validation needs to enumerate it; the
/// backend's newspaper listing is only cross-checked against this set at
/// startup.
///
/// # Examples
///
/// ```
/// use aino_core::Newspaper;
///
/// assert_eq!(Newspaper::Kaleva.as_str(), "Kaleva");
/// assert_eq!(Newspaper::LapinKansa.as_str(), "Lapin Kansa");
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
pub enum Newspaper {
    /// Kaleva (Oulu)
    #[serde(rename = "Kaleva")]
    #[strum(serialize = "Kaleva")]
    Kaleva,
    /// Lapin Kansa (Rovaniemi)
    #[serde(rename = "Lapin Kansa")]
    #[strum(serialize = "Lapin Kansa")]
    LapinKansa,
    /// Iijokiseutu (Pudasjärvi)
    #[serde(rename = "Iijokiseutu")]
    #[strum(serialize = "Iijokiseutu")]
    Iijokiseutu,
    /// Koillissanomat (Kuusamo)
    #[serde(rename = "Koillissanomat")]
    #[strum(serialize = "Koillissanomat")]
    Koillissanomat,
    /// Pyhäjokiseutu (Oulainen)
    #[serde(rename = "Pyhäjokiseutu")]
    #[strum(serialize = "Pyhäjokiseutu")]
    Pyhajokiseutu,
    /// Raahen Seutu (Raahe)
    #[serde(rename = "Raahen Seutu")]
    #[strum(serialize = "Raahen Seutu")]
    RaahenSeutu,
    /// Rantalakeus (Kempele)
    #[serde(rename = "Rantalakeus")]
    #[strum(serialize = "Rantalakeus")]
    Rantalakeus,
    /// Siikajokilaakso (Ruukki)
    #[serde(rename = "Siikajokilaakso")]
    #[strum(serialize = "Siikajokilaakso")]
    Siikajokilaakso,
    /// Uusi Rovaniemi (Rovaniemi)
    #[serde(rename = "Uusi Rovaniemi")]
    #[strum(serialize = "Uusi Rovaniemi")]
    UusiRovaniemi,
}

impl Newspaper {
    /// The brand name transmitted to the backend.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Newspaper::Kaleva => "Kaleva",
            Newspaper::LapinKansa => "Lapin Kansa",
            Newspaper::Iijokiseutu => "Iijokiseutu",
            Newspaper::Koillissanomat => "Koillissanomat",
            Newspaper::Pyhajokiseutu => "Pyhäjokiseutu",
            Newspaper::RaahenSeutu => "Raahen Seutu",
            Newspaper::Rantalakeus => "Rantalakeus",
            Newspaper::Siikajokilaakso => "Siikajokilaakso",
            Newspaper::UusiRovaniemi => "Uusi Rovaniemi",
        }
    }
}
