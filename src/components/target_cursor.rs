use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, MouseEvent, Window};
use yew::prelude::*;

use crate::state::cursor::{corner_offsets, Bounds, CORNER_SIZE, TARGET_CLASS};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct CursorView {
    active: bool,
    mouse: (f64, f64),
    corners: [(f64, f64); 4],
}

enum CursorAction {
    Move((f64, f64)),
    Enter { mouse: (f64, f64), corners: [(f64, f64); 4] },
    Leave,
}

impl Reducible for CursorView {
    type Action = CursorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CursorAction::Move(mouse) if self.active => Rc::new(CursorView { mouse, ..*self }),
            CursorAction::Move(_) => self,
            CursorAction::Enter { mouse, corners } => Rc::new(CursorView { active: true, mouse, corners }),
            CursorAction::Leave if self.active => Rc::new(CursorView { active: false, ..*self }),
            CursorAction::Leave => self,
        }
    }
}

fn is_touch_device(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
        || window.navigator().max_touch_points() > 0
}

fn set_body_cursor(value: &str) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.style().set_property("cursor", value);
    }
}

/// Nearest `.cursor-target` at or above the event target.
fn hovered_target(e: &MouseEvent) -> Option<Element> {
    let el = e.target()?.dyn_into::<Element>().ok()?;
    el.closest(&format!(".{TARGET_CLASS}")).ok().flatten()
}

#[function_component(TargetCursor)]
pub fn target_cursor() -> Html {
    let view = use_reducer(CursorView::default);
    let enabled = use_state(|| false);

    {
        let view = view.clone();
        let enabled = enabled.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().filter(|w| !is_touch_device(w));
            let document = window.as_ref().and_then(|w| w.document());
            enabled.set(document.is_some());

            let mousemove_cb = {
                let view = view.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    view.dispatch(CursorAction::Move((e.client_x() as f64, e.client_y() as f64)));
                }) as Box<dyn FnMut(_)>)
            };
            let mouseover_cb = {
                let view = view.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    let mouse = (e.client_x() as f64, e.client_y() as f64);
                    match hovered_target(&e) {
                        Some(el) => {
                            let r = el.get_bounding_client_rect();
                            let bounds = Bounds { left: r.left(), top: r.top(), right: r.right(), bottom: r.bottom() };
                            set_body_cursor("none");
                            view.dispatch(CursorAction::Enter { mouse, corners: corner_offsets(bounds, mouse) });
                        }
                        None => {
                            set_body_cursor("");
                            view.dispatch(CursorAction::Leave);
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(document) = &document {
                document
                    .add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref())
                    .ok();
                document
                    .add_event_listener_with_callback("mouseover", mouseover_cb.as_ref().unchecked_ref())
                    .ok();
            }

            // Cleanup
            move || {
                if let Some(document) = &document {
                    let _ = document.remove_event_listener_with_callback(
                        "mousemove",
                        mousemove_cb.as_ref().unchecked_ref(),
                    );
                    let _ = document.remove_event_listener_with_callback(
                        "mouseover",
                        mouseover_cb.as_ref().unchecked_ref(),
                    );
                }
                set_body_cursor("");
            }
        });
    }

    if !*enabled {
        return html! {};
    }
    let (mx, my) = view.mouse;
    let opacity = if view.active { 1 } else { 0 };
    let corner_borders = [
        "border-top:2px solid currentColor; border-left:2px solid currentColor;",
        "border-top:2px solid currentColor; border-right:2px solid currentColor;",
        "border-bottom:2px solid currentColor; border-right:2px solid currentColor;",
        "border-bottom:2px solid currentColor; border-left:2px solid currentColor;",
    ];
    html! {
        <div style={format!("position:fixed; top:0; left:0; z-index:3; pointer-events:none; opacity:{}; transform:translate({}px, {}px);", opacity, mx, my)}>
            { for view.corners.iter().zip(corner_borders).map(|(&(x, y), border)| html! {
                <div style={format!("position:absolute; width:{s}px; height:{s}px; {border} transform:translate({x}px, {y}px); transition:transform 0.15s ease;", s = CORNER_SIZE)} />
            }) }
        </div>
    }
}
