use crate::util::format_score;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScorePanelProps {
    pub score: u32,
    pub high_score: u32,
}

#[function_component]
pub fn ScorePanel(props: &ScorePanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:6px;"; // label | value
    let label_style = "opacity:0.6;";
    let value_style = "font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="display:flex; justify-content:flex-end; gap:16px; font-size:12px; margin-bottom:4px;">
            <div style={row_style}>
                <span style={label_style}>{"HI"}</span>
                <span style={value_style}>{ format_score(props.high_score) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"SCORE"}</span>
                <span style={value_style}>{ format_score(props.score) }</span>
            </div>
        </div>
    }
}
