//! App-wide yewdux store for the preferences panel.
//!
//! # Design
//! - The panel is the only shared state; one slice keeps reducers trivial.
//! - Components mutate it through [`PanelStore::apply`] inside `reduce_mut`.

use crate::ambient::BrowserScheme;
use nocturne_prefs::{ConfigError, PanelConfig, PreferenceAction, PreferencesPanel};
use yewdux::store::Store;

/// Global application store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct PanelStore {
    /// Preferences plus the browser scheme reader.
    pub panel: PreferencesPanel<BrowserScheme>,
}

impl PanelStore {
    /// Store seeded with the given slider bounds.
    #[must_use]
    pub fn with_config(config: PanelConfig) -> Self {
        Self {
            panel: PreferencesPanel::with_config(config, BrowserScheme),
        }
    }

    /// Apply one control event to the panel.
    pub fn apply(&mut self, action: PreferenceAction) {
        self.panel.dispatch(action);
    }
}

/// Build a panel config from the optional inline JSON document.
///
/// A missing or blank document yields the defaults.
///
/// # Errors
///
/// Returns the [`ConfigError`] from decoding or validation.
pub fn config_from_document(raw: Option<&str>) -> Result<PanelConfig, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(PanelConfig::default()),
        Some(text) => PanelConfig::from_json(text),
    }
}
