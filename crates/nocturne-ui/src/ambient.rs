//! Browser-backed ambient color scheme.

use nocturne_prefs::{AmbientScheme, ColorScheme};

/// Reads `prefers-color-scheme` through `window.matchMedia`.
///
/// Reports [`ColorScheme::Unspecified`] when there is no window or the query
/// is unsupported, and always outside the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserScheme;

impl AmbientScheme for BrowserScheme {
    fn color_scheme(&self) -> ColorScheme {
        ColorScheme::from_dark_match(prefers_dark())
    }
}

#[cfg(target_arch = "wasm32")]
fn prefers_dark() -> Option<bool> {
    let media = web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()?;
    Some(media.matches())
}

#[cfg(not(target_arch = "wasm32"))]
const fn prefers_dark() -> Option<bool> {
    None
}
