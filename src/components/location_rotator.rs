use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::rng::JsRandom;
use crate::state::scramble::HOLD_MS;
use crate::state::LocationRotator as Rotator;

#[derive(Properties, PartialEq, Clone)]
pub struct LocationRotatorProps {
    pub locations: Vec<String>,
}

#[function_component(LocationRotator)]
pub fn location_rotator(props: &LocationRotatorProps) -> Html {
    let shown = use_state(|| props.locations.first().cloned().unwrap_or_default());

    {
        let setter = shown.setter();
        use_effect_with(props.locations.clone(), move |locations| {
            let rotator = Rc::new(RefCell::new(Rotator::new(locations.clone())));
            setter.set(rotator.borrow().current().to_string());
            let window = web_sys::window();
            let timer = Rc::new(RefCell::new(None::<i32>));
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                Rc::new(RefCell::new(None));
            if let Some(window) = window.clone() {
                let timer = timer.clone();
                let closure_cell_clone = closure_cell.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    let mut r = rotator.borrow_mut();
                    setter.set(r.step(&mut JsRandom));
                    let delay = r.delay_ms();
                    drop(r);
                    if let Some(cb) = closure_cell_clone.borrow().as_ref() {
                        if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                            cb.as_ref().unchecked_ref(),
                            delay as i32,
                        ) {
                            *timer.borrow_mut() = Some(id);
                        }
                    }
                }) as Box<dyn FnMut()>));
            }
            if let (Some(window), Some(cb)) = (&window, closure_cell.borrow().as_ref()) {
                if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    HOLD_MS as i32,
                ) {
                    *timer.borrow_mut() = Some(id);
                }
            }
            move || {
                if let (Some(window), Some(id)) = (&window, timer.borrow_mut().take()) {
                    window.clear_timeout_with_handle(id);
                }
                closure_cell.borrow_mut().take();
            }
        });
    }

    html! {
        <span class="location-decrypt">{ (*shown).clone() }</span>
    }
}
