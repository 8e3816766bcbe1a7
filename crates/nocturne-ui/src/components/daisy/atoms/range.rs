use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RangeProps {
    pub value: u32,
    pub min: u32,
    pub max: u32,
    #[prop_or(1u32)]
    pub step: u32,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub oninput: Callback<u32>,
}

/// Stepped slider; emits on every drag step.
#[function_component(Range)]
pub(crate) fn range(props: &RangeProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                let raw = input.value_as_number();
                if raw.is_finite() && raw >= 0.0 {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let value = raw.round() as u32;
                    oninput.emit(value);
                }
            }
        })
    };

    html! {
        <input
            type="range"
            class={classes!("range", props.class.clone())}
            style={props.style.clone()}
            min={props.min.to_string()}
            max={props.max.to_string()}
            step={props.step.to_string()}
            value={props.value.to_string()}
            oninput={oninput}
        />
    }
}
