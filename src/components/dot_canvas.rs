use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};
use yew::prelude::*;

use super::app::WellHandle;
use crate::state::dots::{DEFAULT_DOT_COLOR, DOT_RADIUS};
use crate::state::{DotGrid, Theme};

#[derive(Properties, PartialEq, Clone)]
pub struct DotCanvasProps {
    pub theme: Theme,
}

fn viewport(window: &Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
    (width, height)
}

/// `--dot-color` from the root element, as the stylesheet sets it per theme.
fn dot_color(window: &Window) -> String {
    window
        .document()
        .and_then(|d| d.document_element())
        .and_then(|root| window.get_computed_style(&root).ok().flatten())
        .and_then(|style| style.get_property_value("--dot-color").ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_DOT_COLOR.to_string())
}

#[function_component(DotCanvas)]
pub fn dot_canvas(props: &DotCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let well = use_context::<WellHandle>();
    let theme_ref = use_mut_ref(|| props.theme);
    {
        let theme_ref = theme_ref.clone();
        use_effect_with(props.theme, move |theme| {
            *theme_ref.borrow_mut() = *theme;
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let canvas = canvas_ref.cast::<HtmlCanvasElement>();
            let grid = Rc::new(RefCell::new(DotGrid::default()));

            let apply_size = {
                let window = window.clone();
                let canvas = canvas.clone();
                let grid = grid.clone();
                move || {
                    let (Some(window), Some(canvas)) = (&window, &canvas) else {
                        return;
                    };
                    let (w, h) = viewport(window);
                    canvas.set_width(w.max(0.0) as u32);
                    canvas.set_height(h.max(0.0) as u32);
                    grid.borrow_mut().resize(w, h);
                }
            };
            apply_size();

            let resize_cb = {
                let apply_size = apply_size.clone();
                Closure::wrap(Box::new(move || apply_size()) as Box<dyn FnMut()>)
            };

            let ctx = canvas
                .as_ref()
                .and_then(|c| c.get_context("2d").ok().flatten())
                .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());

            let raf_id = Rc::new(RefCell::new(None));
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                Rc::new(RefCell::new(None));
            if let (Some(window), Some(canvas), Some(ctx)) = (window.clone(), canvas.clone(), ctx) {
                let raf_id_clone = raf_id.clone();
                let closure_cell_clone = closure_cell.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    let mut g = grid.borrow_mut();
                    g.well = well.as_ref().and_then(WellHandle::get);
                    g.step();
                    let (w, h) = (canvas.width() as f64, canvas.height() as f64);
                    ctx.set_fill_style_str(theme_ref.borrow().page_background());
                    ctx.fill_rect(0.0, 0.0, w, h);
                    ctx.set_fill_style_str(&dot_color(&window));
                    for dot in &g.dots {
                        ctx.begin_path();
                        ctx.arc(dot.x, dot.y, DOT_RADIUS, 0.0, std::f64::consts::PI * 2.0).ok();
                        ctx.fill();
                    }
                    drop(g);
                    if let Some(cb) = closure_cell_clone.borrow().as_ref() {
                        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                            *raf_id_clone.borrow_mut() = Some(id);
                        }
                    }
                }) as Box<dyn FnMut()>));
            }
            if let Some(window) = &window {
                window
                    .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                    .ok();
                if let Some(cb) = closure_cell.borrow().as_ref() {
                    if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        *raf_id.borrow_mut() = Some(id);
                    }
                }
            }

            // Cleanup
            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        resize_cb.as_ref().unchecked_ref(),
                    );
                    if let Some(id) = *raf_id.borrow() {
                        let _ = window.cancel_animation_frame(id);
                    }
                }
                closure_cell.borrow_mut().take();
            }
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            style="position:fixed; inset:0; z-index:0; pointer-events:none;"
        />
    }
}
