use yew::prelude::*;

use crate::router::{navigate, Route};

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub to: Route,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that navigates through the history API instead of reloading the page
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let onclick = {
        let to = props.to.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate(&to);
        })
    };

    html! {
        <a href={props.to.to_path()} class={props.class.clone()} {onclick}>
            {for props.children.iter()}
        </a>
    }
}
