//! Application shell: config bootstrap, body theming, and the wasm entrypoint.

use crate::components::preferences::PreferencesPanelView;
use crate::store::{PanelStore, config_from_document};
use gloo::console;
use gloo::utils::window;
use nocturne_prefs::PanelConfig;
use yew::prelude::*;
use yewdux::prelude::*;

/// Element holding the optional inline panel config.
const CONFIG_ELEMENT_ID: &str = "nocturne-config";

#[function_component(NocturneApp)]
fn nocturne_app() -> Html {
    let (store, _) = use_store::<PanelStore>();
    {
        let night_mode = store.panel.night_mode();
        use_effect_with_deps(
            move |night_mode| {
                apply_theme(*night_mode);
                || ()
            },
            night_mode,
        );
    }

    html! { <PreferencesPanelView /> }
}

fn apply_theme(night_mode: bool) {
    if let Some(document) = window().document() {
        if let Some(body) = document.body() {
            let theme = if night_mode { "dark" } else { "light" };
            let _ = body.set_attribute("data-theme", theme);
        }
    }
}

fn load_config() -> PanelConfig {
    let raw = window()
        .document()
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    match config_from_document(raw.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            console::error!("panel config rejected; using defaults", err.to_string());
            PanelConfig::default()
        }
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    Dispatch::<PanelStore>::new().set(PanelStore::with_config(load_config()));
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<NocturneApp>::with_root(root).render();
    } else {
        yew::Renderer::<NocturneApp>::new().render();
    }
}
