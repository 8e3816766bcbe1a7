//! Preference state, the actions that mutate it, and reconciliation.
//!
//! # Design
//! - Every mutation goes through [`PreferencesPanel::dispatch`].
//! - Theme and night mode each drive the other; [`reconcile`] is the only
//!   place that coupling lives, and it runs once per action.
//! - Derived colors are never stored.

use tracing::{debug, trace};

use crate::ambient::AmbientScheme;
use crate::config::PanelConfig;
use crate::font::FontSize;
use crate::palette::{ColorToken, PanelStyle, background_color, text_color};
use crate::theme::{ColorScheme, ThemeSelection};

/// Snapshot of the user's appearance preferences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preferences {
    /// Theme chosen in the picker.
    pub theme: ThemeSelection,
    /// Font size chosen on the slider.
    pub font_size: FontSize,
    /// Night-mode switch state.
    pub night_mode: bool,
    /// Platform scheme observed by the last automatic-theme read.
    pub ambient: Option<ColorScheme>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: ThemeSelection::Light,
            font_size: FontSize::DEFAULT,
            night_mode: false,
            ambient: None,
        }
    }
}

impl Preferences {
    /// Whether night mode agrees with the selected theme.
    ///
    /// `Automatic` must match the last ambient read; before any read it
    /// counts as light.
    #[must_use]
    pub fn invariant_holds(&self) -> bool {
        match self.theme {
            ThemeSelection::Light => !self.night_mode,
            ThemeSelection::Dark => self.night_mode,
            ThemeSelection::Automatic => {
                self.night_mode == self.ambient.is_some_and(ColorScheme::is_dark)
            }
        }
    }

    /// Label text color.
    #[must_use]
    pub const fn text_color(&self) -> ColorToken {
        text_color(self.theme, self.night_mode)
    }

    /// Panel background color.
    #[must_use]
    pub const fn background_color(&self) -> ColorToken {
        background_color(self.night_mode)
    }

    /// Full derived style.
    #[must_use]
    pub const fn style(&self) -> PanelStyle {
        PanelStyle::derive(self.theme, self.night_mode, self.font_size)
    }
}

/// Discrete input events from the panel controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceAction {
    /// Theme picker selection.
    SetTheme(ThemeSelection),
    /// Raw slider value; clamped by the panel config.
    SetFontSize(u32),
    /// Night-mode switch toggle.
    SetNightMode(bool),
    /// Restore defaults.
    Reset,
    /// Re-read the ambient scheme if the theme is automatic (mount time).
    RefreshAmbient,
}

/// Which coupled field an action touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Changed {
    Theme,
    NightMode,
    Independent,
}

/// Re-derive whichever half of the theme/night-mode pair was not set directly.
fn reconcile(prefs: &mut Preferences, changed: Changed, ambient: &impl AmbientScheme) {
    match changed {
        Changed::Theme => {
            prefs.night_mode = match prefs.theme {
                ThemeSelection::Light => false,
                ThemeSelection::Dark => true,
                ThemeSelection::Automatic => {
                    let scheme = ambient.color_scheme();
                    trace!(scheme = scheme.as_str(), "ambient color scheme read");
                    prefs.ambient = Some(scheme);
                    scheme.is_dark()
                }
            };
        }
        // Turning night mode off never restores Automatic.
        Changed::NightMode => {
            prefs.theme = if prefs.night_mode {
                ThemeSelection::Dark
            } else {
                ThemeSelection::Light
            };
        }
        Changed::Independent => {}
    }
}

/// The preferences panel: state plus the capability it reads the platform
/// scheme through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreferencesPanel<A> {
    prefs: Preferences,
    config: PanelConfig,
    ambient: A,
}

impl<A: AmbientScheme> PreferencesPanel<A> {
    /// Panel with the default config in its initial state
    /// (`Light`, 16, night mode off).
    #[must_use]
    pub fn new(ambient: A) -> Self {
        Self::with_config(PanelConfig::default(), ambient)
    }

    /// Panel using the supplied slider bounds.
    #[must_use]
    pub fn with_config(config: PanelConfig, ambient: A) -> Self {
        Self {
            prefs: Preferences::default(),
            config,
            ambient,
        }
    }

    /// Current preferences.
    #[must_use]
    pub const fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    /// Slider bounds in use.
    #[must_use]
    pub const fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Selected theme.
    #[must_use]
    pub const fn theme(&self) -> ThemeSelection {
        self.prefs.theme
    }

    /// Selected font size.
    #[must_use]
    pub const fn font_size(&self) -> FontSize {
        self.prefs.font_size
    }

    /// Night-mode flag.
    #[must_use]
    pub const fn night_mode(&self) -> bool {
        self.prefs.night_mode
    }

    /// Apply one control event and reconcile.
    pub fn dispatch(&mut self, action: PreferenceAction) {
        let changed = match action {
            PreferenceAction::SetTheme(theme) => {
                self.prefs.theme = theme;
                Changed::Theme
            }
            PreferenceAction::SetFontSize(value) => {
                self.prefs.font_size = self.config.font_size(value);
                Changed::Independent
            }
            PreferenceAction::SetNightMode(flag) => {
                self.prefs.night_mode = flag;
                Changed::NightMode
            }
            PreferenceAction::Reset => {
                self.prefs = Preferences::default();
                Changed::Independent
            }
            PreferenceAction::RefreshAmbient => {
                if self.prefs.theme == ThemeSelection::Automatic {
                    Changed::Theme
                } else {
                    Changed::Independent
                }
            }
        };
        reconcile(&mut self.prefs, changed, &self.ambient);
        debug!(
            ?action,
            theme = self.prefs.theme.as_str(),
            font_size = self.prefs.font_size.get(),
            night_mode = self.prefs.night_mode,
            "preferences updated"
        );
        debug_assert!(self.prefs.invariant_holds());
    }

    /// Select a theme; night mode follows it.
    pub fn set_theme(&mut self, theme: ThemeSelection) {
        self.dispatch(PreferenceAction::SetTheme(theme));
    }

    /// Move the font slider. Leaves theme and night mode untouched.
    pub fn set_font_size(&mut self, value: u32) {
        self.dispatch(PreferenceAction::SetFontSize(value));
    }

    /// Flip the night-mode switch; the theme becomes `Dark` or `Light`.
    pub fn set_night_mode(&mut self, flag: bool) {
        self.dispatch(PreferenceAction::SetNightMode(flag));
    }

    /// Restore `Light`, the default font size, and night mode off.
    pub fn reset(&mut self) {
        self.dispatch(PreferenceAction::Reset);
    }

    /// One-shot ambient re-read used when the panel mounts.
    pub fn refresh_ambient(&mut self) {
        self.dispatch(PreferenceAction::RefreshAmbient);
    }

    /// Label text color.
    #[must_use]
    pub const fn text_color(&self) -> ColorToken {
        self.prefs.text_color()
    }

    /// Panel background color.
    #[must_use]
    pub const fn background_color(&self) -> ColorToken {
        self.prefs.background_color()
    }

    /// Full derived style.
    #[must_use]
    pub const fn style(&self) -> PanelStyle {
        self.prefs.style()
    }
}
