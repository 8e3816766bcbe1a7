//! Preferences panel view.
//!
//! # Design
//! - Render purely from the store's panel; all strings come from the view model.
//! - Every control emits a `PreferenceAction` through the store dispatch.

use crate::components::daisy::{Button, DaisySize, Range, Select, Toggle};
use crate::store::PanelStore;
use crate::view_model::{
    NIGHT_MODE_LABEL, PanelView, RESET_LABEL, THEME_LABEL, TITLE, theme_options,
};
use gloo::console;
use nocturne_prefs::{PreferenceAction, ThemeSelection};
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component(PreferencesPanelView)]
pub(crate) fn preferences_panel_view() -> Html {
    let (store, dispatch) = use_store::<PanelStore>();
    let view = PanelView::from_panel(&store.panel);
    let label_css = AttrValue::from(view.style.label_css());

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                dispatch.reduce_mut(|store| store.apply(PreferenceAction::RefreshAmbient));
                || ()
            },
            (),
        );
    }

    let on_theme = {
        let dispatch = dispatch.clone();
        Callback::from(move |value: AttrValue| match value.parse::<ThemeSelection>() {
            Ok(theme) => {
                dispatch.reduce_mut(|store| store.apply(PreferenceAction::SetTheme(theme)));
            }
            Err(err) => console::error!("theme selection rejected", err.to_string()),
        })
    };
    let on_font_size = {
        let dispatch = dispatch.clone();
        Callback::from(move |value: u32| {
            dispatch.reduce_mut(|store| store.apply(PreferenceAction::SetFontSize(value)));
        })
    };
    let on_night_mode = {
        let dispatch = dispatch.clone();
        Callback::from(move |flag: bool| {
            dispatch.reduce_mut(|store| store.apply(PreferenceAction::SetNightMode(flag)));
        })
    };
    let on_reset = Callback::from(move |_: MouseEvent| {
        dispatch.reduce_mut(|store| store.apply(PreferenceAction::Reset));
    });

    let options = theme_options()
        .into_iter()
        .map(|(value, label)| (AttrValue::from(value), AttrValue::from(label)))
        .collect::<Vec<_>>();

    html! {
        <main class="prefs-panel" style={view.style.panel_css()}>
            <h1 class="prefs-title font-bold" style={label_css.clone()}>{TITLE}</h1>

            <p class="prefs-label" style={label_css.clone()}>{THEME_LABEL}</p>
            <div class="prefs-picker" style={view.style.surface_css()}>
                <Select
                    options={options}
                    value={Some(AttrValue::from(view.selected_theme))}
                    onchange={on_theme}
                />
            </div>

            <p class="prefs-label" style={label_css.clone()}>{view.font_label.clone()}</p>
            <Range
                value={view.font_value}
                min={view.font_min}
                max={view.font_max}
                step={view.font_step}
                style={AttrValue::from(view.style.slider_css())}
                oninput={on_font_size}
            />

            <div class="prefs-switch">
                <span class="prefs-label" style={label_css.clone()}>{NIGHT_MODE_LABEL}</span>
                <Toggle
                    checked={view.night_mode}
                    style={AttrValue::from(view.style.switch_css())}
                    onchange={on_night_mode}
                />
                <span class="prefs-switch-state" style={label_css.clone()}>{view.night_state}</span>
            </div>

            <Button
                size={DaisySize::Lg}
                style={AttrValue::from(view.style.accent_css())}
                onclick={on_reset}
            >
                {RESET_LABEL}
            </Button>

            <section class="prefs-summary">
                {for view.summary.iter().map(|line| html! {
                    <p class="prefs-summary-line" style={label_css.clone()}>{line.clone()}</p>
                })}
            </section>
        </main>
    }
}
