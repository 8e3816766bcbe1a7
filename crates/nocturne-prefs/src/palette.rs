//! Color tokens and the styles derived from the current preferences.

use crate::font::FontSize;
use crate::theme::ThemeSelection;

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Semantic identifier for the color.
    pub name: &'static str,
    /// Hex RGB value.
    pub hex: &'static str,
}

/// Text on light surfaces.
pub const BLACK: ColorToken = ColorToken {
    name: "black",
    hex: "#000000",
};
/// Text on dark surfaces and the light background.
pub const WHITE: ColorToken = ColorToken {
    name: "white",
    hex: "#FFFFFF",
};
/// Panel background in night mode.
pub const DARK_GRAY: ColorToken = ColorToken {
    name: "dark-gray",
    hex: "#333333",
};
/// Picker surface in night mode.
pub const NIGHT_SURFACE: ColorToken = ColorToken {
    name: "night-surface",
    hex: "#444444",
};
/// Switch thumb and track while night mode is on.
pub const SWITCH_ON: ColorToken = ColorToken {
    name: "switch-on",
    hex: "#81B0FF",
};
/// Switch thumb while night mode is off.
pub const SWITCH_THUMB_OFF: ColorToken = ColorToken {
    name: "switch-thumb-off",
    hex: "#F4F3F4",
};
/// Switch track while night mode is off.
pub const SWITCH_TRACK_OFF: ColorToken = ColorToken {
    name: "switch-track-off",
    hex: "#767577",
};
/// Reset action color.
pub const ACCENT: ColorToken = ColorToken {
    name: "accent",
    hex: "#007BFF",
};
/// Border around the picker.
pub const BORDER: ColorToken = ColorToken {
    name: "border",
    hex: "#DDDDDD",
};

/// Text color for a theme/night-mode pair.
///
/// `Light` is always black and `Dark` always white; `Automatic` follows the
/// night-mode flag.
#[must_use]
pub const fn text_color(theme: ThemeSelection, night_mode: bool) -> ColorToken {
    match theme {
        ThemeSelection::Light => BLACK,
        ThemeSelection::Dark => WHITE,
        ThemeSelection::Automatic => {
            if night_mode {
                WHITE
            } else {
                BLACK
            }
        }
    }
}

/// Panel background for the night-mode flag.
#[must_use]
pub const fn background_color(night_mode: bool) -> ColorToken {
    if night_mode { DARK_GRAY } else { WHITE }
}

/// Every presentation value the panel view needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelStyle {
    /// Label text color.
    pub text: ColorToken,
    /// Panel background.
    pub background: ColorToken,
    /// Picker surface.
    pub surface: ColorToken,
    /// Slider track and thumb tint.
    pub slider_tint: ColorToken,
    /// Switch thumb color.
    pub switch_thumb: ColorToken,
    /// Switch track color.
    pub switch_track: ColorToken,
    /// Reset action color.
    pub accent: ColorToken,
    /// Picker border color.
    pub border: ColorToken,
    /// Font size for every label.
    pub font_size: FontSize,
}

impl PanelStyle {
    /// Derive the style from raw preference values.
    #[must_use]
    pub const fn derive(theme: ThemeSelection, night_mode: bool, font_size: FontSize) -> Self {
        let text = text_color(theme, night_mode);
        Self {
            text,
            background: background_color(night_mode),
            surface: if night_mode { NIGHT_SURFACE } else { WHITE },
            slider_tint: text,
            switch_thumb: if night_mode { SWITCH_ON } else { SWITCH_THUMB_OFF },
            switch_track: if night_mode { SWITCH_ON } else { SWITCH_TRACK_OFF },
            accent: ACCENT,
            border: BORDER,
            font_size,
        }
    }

    /// Inline declarations for the panel container.
    #[must_use]
    pub fn panel_css(&self) -> String {
        format!(
            "background-color: {}; color: {};",
            self.background.hex, self.text.hex
        )
    }

    /// Inline declarations for a text label.
    #[must_use]
    pub fn label_css(&self) -> String {
        format!(
            "color: {}; font-size: {}px;",
            self.text.hex,
            self.font_size.get()
        )
    }

    /// Inline declarations for the picker container.
    #[must_use]
    pub fn surface_css(&self) -> String {
        format!(
            "background-color: {}; border: 1px solid {};",
            self.surface.hex, self.border.hex
        )
    }

    /// Inline declarations for the slider.
    #[must_use]
    pub fn slider_css(&self) -> String {
        format!("accent-color: {};", self.slider_tint.hex)
    }

    /// Inline declarations for the switch.
    #[must_use]
    pub fn switch_css(&self) -> String {
        format!(
            "--tglbg: {}; background-color: {}; color: {};",
            self.switch_track.hex, self.switch_track.hex, self.switch_thumb.hex
        )
    }

    /// Inline declarations for the reset action.
    #[must_use]
    pub fn accent_css(&self) -> String {
        format!(
            "background-color: {}; border-color: {}; color: {};",
            self.accent.hex, self.accent.hex, WHITE.hex
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_color_table() {
        assert_eq!(text_color(ThemeSelection::Light, false), BLACK);
        assert_eq!(text_color(ThemeSelection::Light, true), BLACK);
        assert_eq!(text_color(ThemeSelection::Automatic, false), BLACK);
        assert_eq!(text_color(ThemeSelection::Dark, false), WHITE);
        assert_eq!(text_color(ThemeSelection::Dark, true), WHITE);
        assert_eq!(text_color(ThemeSelection::Automatic, true), WHITE);
    }

    #[test]
    fn background_follows_night_mode_only() {
        assert_eq!(background_color(true).hex, "#333333");
        assert_eq!(background_color(false).hex, "#FFFFFF");
    }

    #[test]
    fn night_style_uses_dark_surfaces() {
        let style = PanelStyle::derive(ThemeSelection::Dark, true, FontSize::clamped(20));
        assert_eq!(style.surface, NIGHT_SURFACE);
        assert_eq!(style.switch_thumb, SWITCH_ON);
        assert_eq!(style.slider_tint, WHITE);
        assert_eq!(
            style.panel_css(),
            "background-color: #333333; color: #FFFFFF;"
        );
        assert_eq!(style.label_css(), "color: #FFFFFF; font-size: 20px;");
    }

    #[test]
    fn day_style_uses_light_surfaces() {
        let style = PanelStyle::derive(ThemeSelection::Light, false, FontSize::default());
        assert_eq!(style.surface, WHITE);
        assert_eq!(style.switch_thumb, SWITCH_THUMB_OFF);
        assert_eq!(style.switch_track, SWITCH_TRACK_OFF);
        assert_eq!(
            style.surface_css(),
            "background-color: #FFFFFF; border: 1px solid #DDDDDD;"
        );
        assert_eq!(style.slider_css(), "accent-color: #000000;");
    }
}
