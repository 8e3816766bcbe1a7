//! End-to-end walks through the panel operations.

use nocturne_prefs::palette::{BLACK, DARK_GRAY, WHITE};
use nocturne_prefs::{
    ColorScheme, FixedScheme, FontSize, PreferenceAction, Preferences, PreferencesPanel,
    ThemeSelection,
};

fn snapshot<A: nocturne_prefs::AmbientScheme>(
    panel: &PreferencesPanel<A>,
) -> (ThemeSelection, u32, bool) {
    (panel.theme(), panel.font_size().get(), panel.night_mode())
}

#[test]
fn automatic_on_dark_platform_goes_dark() {
    let mut panel = PreferencesPanel::new(FixedScheme::dark());
    assert_eq!(snapshot(&panel), (ThemeSelection::Light, 16, false));

    panel.set_theme(ThemeSelection::Automatic);

    assert_eq!(snapshot(&panel), (ThemeSelection::Automatic, 16, true));
    assert_eq!(panel.text_color(), WHITE);
    assert_eq!(panel.background_color(), DARK_GRAY);
    assert_eq!(panel.preferences().ambient, Some(ColorScheme::Dark));
}

#[test]
fn switching_night_mode_off_from_dark_lands_on_light() {
    let mut panel = PreferencesPanel::new(FixedScheme::light());
    panel.set_theme(ThemeSelection::Dark);
    panel.set_font_size(20);
    assert_eq!(snapshot(&panel), (ThemeSelection::Dark, 20, true));

    panel.set_night_mode(false);

    assert_eq!(snapshot(&panel), (ThemeSelection::Light, 20, false));
    assert_eq!(panel.text_color(), BLACK);
}

#[test]
fn reset_from_automatic_night() {
    let mut panel = PreferencesPanel::new(FixedScheme::dark());
    panel.set_theme(ThemeSelection::Automatic);
    assert_eq!(snapshot(&panel), (ThemeSelection::Automatic, 16, true));

    panel.reset();

    assert_eq!(snapshot(&panel), (ThemeSelection::Light, 16, false));
    assert_eq!(*panel.preferences(), Preferences::default());
}

#[test]
fn night_mode_switch_ignores_prior_theme() {
    for start in ThemeSelection::all() {
        let mut panel = PreferencesPanel::new(FixedScheme::dark());
        panel.set_theme(start);
        panel.set_night_mode(true);
        assert_eq!(panel.theme(), ThemeSelection::Dark, "from {start}");

        let mut panel = PreferencesPanel::new(FixedScheme::dark());
        panel.set_theme(start);
        panel.set_night_mode(false);
        assert_eq!(panel.theme(), ThemeSelection::Light, "from {start}");
    }
}

#[test]
fn dispatch_matches_named_operations() {
    let mut via_ops = PreferencesPanel::new(FixedScheme::dark());
    via_ops.set_theme(ThemeSelection::Automatic);
    via_ops.set_font_size(22);
    via_ops.set_night_mode(false);

    let mut via_dispatch = PreferencesPanel::new(FixedScheme::dark());
    for action in [
        PreferenceAction::SetTheme(ThemeSelection::Automatic),
        PreferenceAction::SetFontSize(22),
        PreferenceAction::SetNightMode(false),
    ] {
        via_dispatch.dispatch(action);
    }

    assert_eq!(via_ops, via_dispatch);
    assert_eq!(via_dispatch.font_size(), FontSize::clamped(22));
}
