//! The supported keyword languages.

use std::fmt;
use std::str::FromStr;

use irobo_foundation::Error;

/// A keyword language for script source text.
///
/// The locale selects which translation table the lexicon is built from.
/// It never affects the produced AST beyond the surface `name` fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    /// English (the canonical vocabulary itself).
    #[default]
    En,
    /// Dutch.
    Nl,
    /// West Frisian.
    Fy,
}

impl Locale {
    /// All supported locales, sorted by code.
    pub const ALL: [Self; 3] = [Self::En, Self::Fy, Self::Nl];

    /// Returns the locale code, e.g. `"nl"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Nl => "nl",
            Self::Fy => "fy",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "nl" => Ok(Self::Nl),
            "fy" => Ok(Self::Fy),
            other => Err(Error::config(format!("unsupported locale '{other}'"))),
        }
    }
}
