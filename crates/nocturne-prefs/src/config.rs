//! Panel configuration: slider bounds inside the 12..=30 font range.
//!
//! # Design
//! - Every field has a default, so an empty document is a valid config.
//! - A config may narrow the slider but never widen it, and the reset size
//!   of 16 must stay reachable on its grid.
//! - Validation runs once at load; the panel trusts a validated config.

use serde::Deserialize;
use thiserror::Error;

use crate::font::FontSize;

/// Structured errors emitted while loading panel configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid value for '{field}': {message}")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Human-readable error description.
        message: String,
    },
    /// Document could not be decoded.
    #[error("failed to parse panel config: {detail}")]
    Parse {
        /// Decoder error detail.
        detail: String,
    },
}

/// Font slider bounds for the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    /// Smallest selectable font size.
    pub font_min: u32,
    /// Largest selectable font size.
    pub font_max: u32,
    /// Slider increment.
    pub font_step: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            font_min: FontSize::MIN,
            font_max: FontSize::MAX,
            font_step: FontSize::STEP,
        }
    }
}

fn out_of_range(field: &'static str) -> ConfigError {
    ConfigError::InvalidField {
        field,
        message: format!("must be between {} and {}", FontSize::MIN, FontSize::MAX),
    }
}

impl PanelConfig {
    /// Decode and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::InvalidField`] when the bounds are inconsistent.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|err| ConfigError::Parse {
            detail: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the bounds describe a usable slider within 12..=30 that
    /// still offers the default size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = FontSize::MIN..=FontSize::MAX;
        if !range.contains(&self.font_min) {
            return Err(out_of_range("font_min"));
        }
        if !range.contains(&self.font_max) {
            return Err(out_of_range("font_max"));
        }
        if self.font_max < self.font_min {
            return Err(ConfigError::InvalidField {
                field: "font_max",
                message: format!("must be at least font_min ({})", self.font_min),
            });
        }
        if self.font_step == 0 {
            return Err(ConfigError::InvalidField {
                field: "font_step",
                message: "must be at least 1".to_string(),
            });
        }
        let default = FontSize::DEFAULT.get();
        let unreachable = |field| ConfigError::InvalidField {
            field,
            message: format!("slider must be able to land on {default}"),
        };
        if self.font_min > default {
            return Err(unreachable("font_min"));
        }
        if self.font_max < default {
            return Err(unreachable("font_max"));
        }
        if (default - self.font_min) % self.font_step != 0 {
            return Err(unreachable("font_step"));
        }
        Ok(())
    }

    /// Clamp and snap a raw slider value onto this config's grid.
    #[must_use]
    pub fn font_size(&self, value: u32) -> FontSize {
        FontSize::within(value, self.font_min, self.font_max, self.font_step)
    }
}
