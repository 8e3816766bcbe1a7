use crate::components::daisy::foundations::DaisySize;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(DaisySize::Md)]
    pub size: DaisySize,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let size = props.size.with_prefix("btn");

    html! {
        <button
            class={classes!("btn", size, props.class.clone())}
            style={props.style.clone()}
            r#type="button"
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
