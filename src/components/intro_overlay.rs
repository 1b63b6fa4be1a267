use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IntroOverlayProps {
    pub show: bool,
    pub message: Option<String>,
}

#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    let Some(message) = props.message.clone().filter(|_| props.show) else {
        return html! {};
    };
    html! {
        <div style="position:absolute; top:55%; left:50%; transform:translate(-50%, -50%); pointer-events:none; font-size:13px; text-align:center; opacity:0.85;">
            <p style="margin:0 0 4px 0;">{ message }</p>
            <p style="margin:0; font-size:11px; opacity:0.6;">{"Space / ↑ to jump, ↓ to duck, or tap"}</p>
        </div>
    }
}
