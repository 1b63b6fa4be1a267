use crate::util::format_score;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub score: u32,
    pub message: Option<String>,
    pub restart: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    let message = props
        .message
        .clone()
        .unwrap_or_else(|| format!("Game Over! Score: {}", props.score));
    html! {
        <div style="position:absolute; top:55%; left:50%; transform:translate(-50%, -50%); text-align:center; font-size:13px;">
            <p style="margin:0 0 4px 0; font-weight:600;">{ message }</p>
            <p style="margin:0 0 8px 0; font-size:11px; opacity:0.6;">{ format_score(props.score) }</p>
            <button class="cursor-target" onclick={restart_btn}>{"Restart"}</button>
        </div>
    }
}
