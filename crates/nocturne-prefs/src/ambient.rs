//! Capability for reading the host platform's color scheme.
//!
//! The panel reads the ambient scheme once, synchronously, whenever the theme
//! becomes [`ThemeSelection::Automatic`](crate::ThemeSelection::Automatic).
//! There is no subscription: later platform changes are only picked up by an
//! explicit refresh.

use crate::theme::ColorScheme;

/// Single-method provider for the platform's light/dark preference.
pub trait AmbientScheme {
    /// Current platform scheme. Implementations report
    /// [`ColorScheme::Unspecified`] instead of failing.
    fn color_scheme(&self) -> ColorScheme;
}

impl<T: AmbientScheme + ?Sized> AmbientScheme for &T {
    fn color_scheme(&self) -> ColorScheme {
        (**self).color_scheme()
    }
}

/// Deterministic provider that always reports the same scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedScheme(pub ColorScheme);

impl FixedScheme {
    /// Provider reporting a dark platform.
    #[must_use]
    pub const fn dark() -> Self {
        Self(ColorScheme::Dark)
    }

    /// Provider reporting a light platform.
    #[must_use]
    pub const fn light() -> Self {
        Self(ColorScheme::Light)
    }
}

impl AmbientScheme for FixedScheme {
    fn color_scheme(&self) -> ColorScheme {
        self.0
    }
}
