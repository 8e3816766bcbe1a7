//! Display strings and styles for the panel, computed outside the DOM.

use nocturne_prefs::{AmbientScheme, PanelStyle, PreferencesPanel, ThemeSelection};

/// Panel heading.
pub const TITLE: &str = "Preference Settings";
/// Label above the theme picker.
pub const THEME_LABEL: &str = "Preferred theme:";
/// Label beside the night-mode switch.
pub const NIGHT_MODE_LABEL: &str = "Night mode:";
/// Reset button caption.
pub const RESET_LABEL: &str = "Reset preferences";

/// Word shown next to the switch and in the summary.
#[must_use]
pub const fn night_mode_state(enabled: bool) -> &'static str {
    if enabled { "Enabled" } else { "Disabled" }
}

/// Picker options as `(value, label)` pairs.
#[must_use]
pub fn theme_options() -> Vec<(&'static str, &'static str)> {
    ThemeSelection::all()
        .iter()
        .map(|theme| (theme.as_str(), theme.label()))
        .collect()
}

/// Everything the panel component renders for one state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelView {
    /// Value of the selected picker option.
    pub selected_theme: &'static str,
    /// Slider caption including the current value.
    pub font_label: String,
    /// Slider lower bound.
    pub font_min: u32,
    /// Slider upper bound.
    pub font_max: u32,
    /// Slider increment.
    pub font_step: u32,
    /// Slider position.
    pub font_value: u32,
    /// Switch position.
    pub night_mode: bool,
    /// Enabled/Disabled word beside the switch.
    pub night_state: &'static str,
    /// Summary lines under the reset button.
    pub summary: [String; 3],
    /// Derived colors and font size.
    pub style: PanelStyle,
}

impl PanelView {
    /// Project the panel state into display values.
    #[must_use]
    pub fn from_panel<A: AmbientScheme>(panel: &PreferencesPanel<A>) -> Self {
        let prefs = panel.preferences();
        let config = panel.config();
        let font = prefs.font_size.get();
        let night_state = night_mode_state(prefs.night_mode);
        Self {
            selected_theme: prefs.theme.as_str(),
            font_label: format!("Font size: {font}"),
            font_min: config.font_min,
            font_max: config.font_max,
            font_step: config.font_step,
            font_value: font,
            night_mode: prefs.night_mode,
            night_state,
            summary: [
                format!("Selected theme: {}", prefs.theme.label()),
                format!("Font size: {font}"),
                format!("Night mode: {night_state}"),
            ],
            style: prefs.style(),
        }
    }
}
