//! Property checks over arbitrary control sequences.

use nocturne_prefs::palette::{BLACK, WHITE};
use nocturne_prefs::{
    ColorScheme, FixedScheme, FontSize, PreferenceAction, PreferencesPanel, ThemeSelection,
    text_color,
};
use proptest::prelude::*;

fn theme_strategy() -> impl Strategy<Value = ThemeSelection> {
    prop_oneof![
        Just(ThemeSelection::Light),
        Just(ThemeSelection::Dark),
        Just(ThemeSelection::Automatic),
    ]
}

fn scheme_strategy() -> impl Strategy<Value = ColorScheme> {
    prop_oneof![
        Just(ColorScheme::Light),
        Just(ColorScheme::Dark),
        Just(ColorScheme::Unspecified),
    ]
}

fn action_strategy() -> impl Strategy<Value = PreferenceAction> {
    prop_oneof![
        theme_strategy().prop_map(PreferenceAction::SetTheme),
        (0u32..64).prop_map(PreferenceAction::SetFontSize),
        any::<bool>().prop_map(PreferenceAction::SetNightMode),
        Just(PreferenceAction::Reset),
        Just(PreferenceAction::RefreshAmbient),
    ]
}

proptest! {
    #[test]
    fn theme_sequences_keep_night_mode_consistent(
        scheme in scheme_strategy(),
        themes in prop::collection::vec(theme_strategy(), 1..32),
    ) {
        let mut panel = PreferencesPanel::new(FixedScheme(scheme));
        for theme in themes {
            panel.set_theme(theme);
            let expected = match theme {
                ThemeSelection::Light => false,
                ThemeSelection::Dark => true,
                ThemeSelection::Automatic => scheme.is_dark(),
            };
            prop_assert_eq!(panel.night_mode(), expected);
        }
    }

    #[test]
    fn any_action_sequence_preserves_invariants(
        scheme in scheme_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..48),
    ) {
        let mut panel = PreferencesPanel::new(FixedScheme(scheme));
        for action in actions {
            panel.dispatch(action);
            prop_assert!(panel.preferences().invariant_holds());
            let size = panel.font_size().get();
            prop_assert!((FontSize::MIN..=FontSize::MAX).contains(&size));
        }
    }

    #[test]
    fn in_range_font_sizes_are_stored_exactly(
        setup in prop::collection::vec(action_strategy(), 0..8),
        value in FontSize::MIN..=FontSize::MAX,
    ) {
        let mut panel = PreferencesPanel::new(FixedScheme::dark());
        for action in setup {
            panel.dispatch(action);
        }
        let (theme, night) = (panel.theme(), panel.night_mode());
        panel.set_font_size(value);
        prop_assert_eq!(panel.font_size().get(), value);
        prop_assert_eq!(panel.theme(), theme);
        prop_assert_eq!(panel.night_mode(), night);
    }

    #[test]
    fn reset_always_restores_defaults(
        actions in prop::collection::vec(action_strategy(), 0..16),
    ) {
        let mut panel = PreferencesPanel::new(FixedScheme::dark());
        for action in actions {
            panel.dispatch(action);
        }
        panel.reset();
        prop_assert_eq!(panel.theme(), ThemeSelection::Light);
        prop_assert_eq!(panel.font_size().get(), 16);
        prop_assert!(!panel.night_mode());
    }

    #[test]
    fn text_color_depends_on_theme_then_night(night in any::<bool>()) {
        prop_assert_eq!(text_color(ThemeSelection::Light, night), BLACK);
        prop_assert_eq!(text_color(ThemeSelection::Dark, night), WHITE);
        let auto = text_color(ThemeSelection::Automatic, night);
        prop_assert_eq!(auto, if night { WHITE } else { BLACK });
    }
}
