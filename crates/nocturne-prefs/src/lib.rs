#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! DOM-free appearance preferences for the Nocturne panel.
//!
//! Holds the theme / font size / night mode state, the single reconciliation
//! step that keeps them consistent, and the colors derived from them. The
//! host platform's light/dark preference is injected through [`AmbientScheme`]
//! so the whole crate runs natively under test.

pub mod ambient;
pub mod config;
pub mod error;
pub mod font;
pub mod palette;
pub mod panel;
pub mod theme;

pub use ambient::{AmbientScheme, FixedScheme};
pub use config::{ConfigError, PanelConfig};
pub use error::PrefsError;
pub use font::FontSize;
pub use palette::{ColorToken, PanelStyle, background_color, text_color};
pub use panel::{PreferenceAction, Preferences, PreferencesPanel};
pub use theme::{ColorScheme, ThemeSelection};
