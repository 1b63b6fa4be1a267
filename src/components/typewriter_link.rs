use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use super::app::WellHandle;
use crate::state::NameSwap;

#[derive(Properties, PartialEq, Clone)]
pub struct TypewriterLinkProps {
    pub original: AttrValue,
    pub alias: AttrValue,
    pub href: AttrValue,
}

type Timer = Rc<RefCell<Option<i32>>>;

/// Runs one frame of the swap, then re-arms itself until the transition ends.
fn schedule_step(swap: Rc<RefCell<NameSwap>>, text: UseStateSetter<String>, timer: Timer, delay_ms: u32) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let timer_cb = timer.clone();
    let step = Closure::once_into_js(move || {
        *timer_cb.borrow_mut() = None;
        let frame = swap.borrow_mut().step();
        if let Some((shown, next)) = frame {
            text.set(shown);
            if let Some(delay_ms) = next {
                schedule_step(swap, text, timer_cb, delay_ms);
            }
        }
    });
    if let Ok(id) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(step.unchecked_ref(), delay_ms as i32)
    {
        *timer.borrow_mut() = Some(id);
    }
}

#[function_component(TypewriterLink)]
pub fn typewriter_link(props: &TypewriterLinkProps) -> Html {
    let link_ref = use_node_ref();
    let text = use_state(|| props.original.to_string());
    let swap = use_mut_ref(|| NameSwap::new(&props.original, &props.alias));
    let timer: Timer = use_mut_ref(|| None);
    let well = use_context::<WellHandle>();

    // Cancel a pending frame on unmount
    {
        let timer = timer.clone();
        use_effect_with((), move |_| {
            move || {
                if let (Some(window), Some(id)) = (web_sys::window(), timer.borrow_mut().take()) {
                    window.clear_timeout_with_handle(id);
                }
            }
        });
    }

    let onmouseenter = {
        let link_ref = link_ref.clone();
        let swap = swap.clone();
        let setter = text.setter();
        let timer = timer.clone();
        let well = well.clone();
        Callback::from(move |_: MouseEvent| {
            if let (Some(well), Some(el)) = (&well, link_ref.cast::<Element>()) {
                let rect = el.get_bounding_client_rect();
                well.set(Some((rect.left() + rect.width() / 2.0, rect.top() + rect.height() / 2.0)));
            }
            let delay = {
                let mut s = swap.borrow_mut();
                if s.hover_start() { s.next_delay_ms() } else { None }
            };
            if let Some(delay) = delay {
                schedule_step(swap.clone(), setter.clone(), timer.clone(), delay);
            }
        })
    };
    let onmouseleave = {
        let swap = swap.clone();
        let setter = text.setter();
        let timer = timer.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(well) = &well {
                well.set(None);
            }
            let delay = {
                let mut s = swap.borrow_mut();
                if s.hover_end() { s.next_delay_ms() } else { None }
            };
            if let Some(delay) = delay {
                schedule_step(swap.clone(), setter.clone(), timer.clone(), delay);
            }
        })
    };

    html! {
        <a
            ref={link_ref}
            href={props.href.clone()}
            class="cursor-target"
            style="color:inherit; text-decoration:none;"
            {onmouseenter}
            {onmouseleave}
        >
            { (*text).clone() }
        </a>
    }
}
