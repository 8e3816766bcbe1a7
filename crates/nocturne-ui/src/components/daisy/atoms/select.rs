use crate::components::daisy::foundations::DaisySize;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SelectProps {
    #[prop_or_default]
    pub options: Vec<(AttrValue, AttrValue)>,
    #[prop_or_default]
    pub value: Option<AttrValue>,
    #[prop_or(DaisySize::Md)]
    pub size: DaisySize,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onchange: Callback<AttrValue>,
}

#[function_component(Select)]
pub(crate) fn select(props: &SelectProps) -> Html {
    let size = props.size.with_prefix("select");
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                onchange.emit(target.value().into());
            }
        })
    };

    html! {
        <select
            class={classes!("select", size, props.class.clone())}
            style={props.style.clone()}
            value={props.value.clone()}
            onchange={onchange}
        >
            {for props.options.iter().map(|(value, label)| {
                let selected = props.value.as_ref().is_some_and(|v| v == value);
                html! { <option value={value.clone()} selected={selected}>{label.clone()}</option> }
            })}
        </select>
    }
}
