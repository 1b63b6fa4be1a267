use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::rng::JsRandom;
use crate::state::scramble::FRAME_MS;
use crate::state::scramble_text;

#[derive(Properties, PartialEq, Clone)]
pub struct DecryptTextProps {
    pub text: AttrValue,
}

/// Scrambles its text every frame while hovered and restores it on leave.
#[function_component(DecryptText)]
pub fn decrypt_text(props: &DecryptTextProps) -> Html {
    let shown = use_state(|| props.text.to_string());
    let interval = use_mut_ref(|| None::<(i32, Closure<dyn FnMut()>)>);

    let stop = {
        let interval = interval.clone();
        move || {
            if let Some((id, _tick)) = interval.borrow_mut().take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(id);
                }
            }
        }
    };
    {
        let stop = stop.clone();
        use_effect_with((), move |_| stop);
    }

    let onmouseenter = {
        let shown = shown.setter();
        let text = props.text.clone();
        let interval = interval.clone();
        let stop = stop.clone();
        Callback::from(move |_: MouseEvent| {
            stop();
            let Some(window) = web_sys::window() else {
                return;
            };
            let tick = {
                let shown = shown.clone();
                let text = text.clone();
                Closure::wrap(Box::new(move || {
                    shown.set(scramble_text(&text, &mut JsRandom));
                }) as Box<dyn FnMut()>)
            };
            if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                FRAME_MS as i32,
            ) {
                *interval.borrow_mut() = Some((id, tick));
            }
        })
    };
    let onmouseleave = {
        let shown = shown.setter();
        let text = props.text.clone();
        Callback::from(move |_: MouseEvent| {
            stop();
            shown.set(text.to_string());
        })
    };

    html! {
        <span class="cursor-target" {onmouseenter} {onmouseleave}>{ (*shown).clone() }</span>
    }
}
