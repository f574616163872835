//! Color themes
//!
//! The continuous color schemes offered by the theme selector. The names
//! match the scheme identifiers understood by common charting front-ends.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Continuous color scheme applied to the map and heatmap
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ColorTheme {
    #[default]
    Blues,
    Viridis,
    Greens,
    Reds,
    Plasma,
}

impl ColorTheme {
    /// All themes in selector order
    pub fn all() -> &'static [ColorTheme] {
        &[
            ColorTheme::Blues,
            ColorTheme::Viridis,
            ColorTheme::Greens,
            ColorTheme::Reds,
            ColorTheme::Plasma,
        ]
    }

    /// Scheme identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTheme::Blues => "blues",
            ColorTheme::Viridis => "viridis",
            ColorTheme::Greens => "greens",
            ColorTheme::Reds => "reds",
            ColorTheme::Plasma => "plasma",
        }
    }
}

impl std::fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a theme name is not recognised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown color theme: {0}. Use blues, viridis, greens, reds, or plasma")]
pub struct UnknownTheme(pub String);

impl FromStr for ColorTheme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        ColorTheme::all()
            .iter()
            .copied()
            .find(|theme| theme.as_str() == name)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

impl TryFrom<String> for ColorTheme {
    type Error = UnknownTheme;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}
