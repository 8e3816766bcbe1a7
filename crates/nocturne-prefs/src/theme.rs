//! Theme selection and the platform color scheme it can follow.

use std::fmt;
use std::str::FromStr;

use crate::error::PrefsError;

/// Theme chosen by the user in the picker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeSelection {
    /// Always light.
    #[default]
    Light,
    /// Always dark.
    Dark,
    /// Follow the platform scheme observed when the selection was made.
    Automatic,
}

impl ThemeSelection {
    /// All selections in picker order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Light, Self::Dark, Self::Automatic]
    }

    /// Stable value used by the select control.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Automatic => "automatic",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Automatic => "Automatic",
        }
    }
}

impl fmt::Display for ThemeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ThemeSelection {
    type Err = PrefsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "automatic" | "auto" => Ok(Self::Automatic),
            _ => Err(PrefsError::UnknownTheme {
                value: value.to_string(),
            }),
        }
    }
}

/// Light/dark preference reported by the host platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    /// Platform prefers light surfaces.
    Light,
    /// Platform prefers dark surfaces.
    Dark,
    /// Platform did not report a preference.
    #[default]
    Unspecified,
}

impl ColorScheme {
    /// Only an explicit dark report counts as dark.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Map a `prefers-color-scheme: dark` media match onto a scheme.
    #[must_use]
    pub const fn from_dark_match(matches: Option<bool>) -> Self {
        match matches {
            Some(true) => Self::Dark,
            Some(false) => Self::Light,
            None => Self::Unspecified,
        }
    }

    /// Stable identifier for display and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Unspecified => "unspecified",
        }
    }
}
