//! Light/dark theme flag.
//!
//! Fluxline carries a single two-value theme flag. All palette decisions
//! belong to the renderer; the engine only persists the flag and reports
//! changes so the host can restyle.

use serde::{Deserialize, Serialize};

/// The persisted appearance flag.
///
/// Serialized as the lowercase strings `"light"` and `"dark"`. A fresh
/// profile starts light; the first toggle switches to dark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeFlag {
    #[default]
    Light,
    Dark,
}

impl ThemeFlag {
    /// Returns the opposite flag.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns the flag as its persisted string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_between_light_and_dark() {
        assert_eq!(ThemeFlag::Light.toggled(), ThemeFlag::Dark);
        assert_eq!(ThemeFlag::Dark.toggled(), ThemeFlag::Light);
        assert_eq!(ThemeFlag::default(), ThemeFlag::Light);
    }

    #[test]
    fn serializes_as_lowercase_strings() {
        assert_eq!(serde_json::to_string(&ThemeFlag::Dark).unwrap(), "\"dark\"");
        let parsed: ThemeFlag = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, ThemeFlag::Light);
    }
}
