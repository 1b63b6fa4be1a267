use yew::prelude::*;

use crate::state::Theme;

#[derive(Properties, PartialEq, Clone)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component]
pub fn ThemeToggle(props: &ThemeToggleProps) -> Html {
    let cb = props.on_toggle.clone();
    let onclick = Callback::from(move |_| cb.emit(()));
    html! {
        <button
            class="cursor-target"
            title="Toggle theme"
            style="position:fixed; top:16px; right:16px; z-index:2; background:none; border:none; font-size:18px; color:inherit;"
            {onclick}
        >
            { props.theme.toggle_label() }
        </button>
    }
}
