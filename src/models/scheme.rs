use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named color-theory scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    Complementary,
    SplitComplementary,
    Triadic,
    Tetradic,
    Monochromatic,
    Analogous,
}

impl Scheme {
    pub const ALL: [Scheme; 6] = [
        Scheme::Complementary,
        Scheme::SplitComplementary,
        Scheme::Triadic,
        Scheme::Tetradic,
        Scheme::Monochromatic,
        Scheme::Analogous,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scheme::Complementary => "complementary",
            Scheme::SplitComplementary => "split-complementary",
            Scheme::Triadic => "triadic",
            Scheme::Tetradic => "tetradic",
            Scheme::Monochromatic => "monochromatic",
            Scheme::Analogous => "analogous",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Scheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == normalized)
            .ok_or_else(|| ConfigError::UnknownScheme(s.to_string()))
    }
}
