//! Expression style for generated emoji packs.

use serde::{Deserialize, Serialize};

/// Expression style of a generated 3x3 emoji grid.
///
/// Styles are a closed set; anything outside it is rejected at the API
/// boundary rather than silently mapped to a default.
///
/// # Examples
///
/// ```
/// use petmoji_core::Style;
///
/// let style: Style = "funny".parse().unwrap();
/// assert_eq!(style, Style::Funny);
/// assert_eq!(style.as_str(), "funny");
/// assert!("grumpy".parse::<Style>().is_err());
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
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Sweet, endearing expressions
    #[display("cute")]
    Cute,
    /// Meme-worthy comedic expressions
    #[display("funny")]
    Funny,
    /// Grumpy, dramatic expressions
    #[display("angry")]
    Angry,
    /// Bright, joyful expressions
    #[display("happy")]
    Happy,
}

impl Style {
    /// Convert to string representation for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Cute => "cute",
            Style::Funny => "funny",
            Style::Angry => "angry",
            Style::Happy => "happy",
        }
    }
}

impl std::str::FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cute" => Ok(Style::Cute),
            "funny" => Ok(Style::Funny),
            "angry" => Ok(Style::Angry),
            "happy" => Ok(Style::Happy),
            _ => Err(format!("Unknown style: {}", s)),
        }
    }
}
