use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};
use yew::prelude::*;

use super::{game_over_overlay::GameOverOverlay, intro_overlay::IntroOverlay, score_panel::ScorePanel};
use crate::model::{InputEvent, Phase, RunnerAction, RunnerState};
use crate::render::{draw_scene, Palette};
use crate::state::{FrameClock, Theme};

#[derive(Properties, PartialEq, Clone)]
pub struct RunnerViewProps {
    pub runner: UseReducerHandle<RunnerState>,
    pub theme: Theme,
}

const GAME_KEYS: [&str; 3] = ["Space", "ArrowUp", "ArrowDown"];

fn key_event(code: &str, down: bool) -> Option<InputEvent> {
    match (code, down) {
        ("Space" | "ArrowUp", true) => Some(InputEvent::Trigger),
        ("ArrowDown", true) => Some(InputEvent::DuckBegin),
        ("ArrowDown", false) => Some(InputEvent::DuckEnd),
        _ => None,
    }
}

#[function_component(RunnerView)]
pub fn runner_view(props: &RunnerViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let runner_ref = use_mut_ref(|| props.runner.clone());
    let palette_ref = use_mut_ref(|| Palette::for_theme(props.theme));

    // Keep the latest handle for long-lived closures
    {
        let runner_ref = runner_ref.clone();
        let handle = props.runner.clone();
        use_effect_with(props.runner.version, move |_| {
            *runner_ref.borrow_mut() = handle;
            || ()
        });
    }
    {
        let palette_ref = palette_ref.clone();
        use_effect_with(props.theme, move |theme| {
            *palette_ref.borrow_mut() = Palette::for_theme(*theme);
            || ()
        });
    }

    // Spawn timer: rebuilt for every session, dropped as soon as it is disarmed
    {
        let runner_ref = runner_ref.clone();
        let interval_ms = props.runner.config.spawn_interval_ms;
        let armed = props.runner.spawn_armed;
        let session = props.runner.session;
        use_effect_with((armed, session), move |&(armed, _)| {
            let mut timer = None;
            if armed {
                if let Some(window) = web_sys::window() {
                    let spawn_tick = Closure::wrap(Box::new(move || {
                        let handle = runner_ref.borrow().clone();
                        handle.dispatch(RunnerAction::Spawn);
                    }) as Box<dyn FnMut()>);
                    match window.set_interval_with_callback_and_timeout_and_arguments_0(
                        spawn_tick.as_ref().unchecked_ref(),
                        interval_ms as i32,
                    ) {
                        Ok(id) => timer = Some((window, id, spawn_tick)),
                        Err(e) => warn!("spawn timer not started: {e:?}"),
                    }
                }
            }
            move || {
                if let Some((window, id, _spawn_tick)) = timer {
                    window.clear_interval_with_handle(id);
                }
            }
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let runner_ref = runner_ref.clone();
        let palette_ref = palette_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let canvas = canvas_ref.cast::<HtmlCanvasElement>();
            let ctx = canvas
                .as_ref()
                .and_then(|c| c.get_context("2d").ok().flatten())
                .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
            if ctx.is_none() {
                warn!("runner canvas has no 2d context");
            }

            // RAF loop: fixed ticks, then draw the latest snapshot
            let raf_id = Rc::new(RefCell::new(None));
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                Rc::new(RefCell::new(None));
            if let Some(window) = window.clone() {
                let raf_id_clone = raf_id.clone();
                let closure_cell_clone = closure_cell.clone();
                let runner_ref = runner_ref.clone();
                let mut clock = FrameClock::default();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                    let handle = runner_ref.borrow().clone();
                    if handle.is_running() || handle.has_pending_input() {
                        for _ in 0..clock.advance(now) {
                            handle.dispatch(RunnerAction::Tick);
                        }
                    } else {
                        // idle frames must not count toward the next session
                        clock.reset();
                    }
                    if let Some(ctx) = &ctx {
                        draw_scene(ctx, &handle, &palette_ref.borrow());
                    }
                    if let Some(cb) = closure_cell_clone.borrow().as_ref() {
                        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                            *raf_id_clone.borrow_mut() = Some(id);
                        }
                    }
                })
                    as Box<dyn FnMut(f64)>));
            }
            if let (Some(window), Some(cb)) = (&window, closure_cell.borrow().as_ref()) {
                if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }

            let dispatch_input = {
                let runner_ref = runner_ref.clone();
                move |event: InputEvent| {
                    let handle = runner_ref.borrow().clone();
                    handle.dispatch(RunnerAction::Input(event));
                }
            };
            let key_cb = |down: bool| {
                let dispatch_input = dispatch_input.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    let code = e.code();
                    if !GAME_KEYS.contains(&code.as_str()) {
                        return;
                    }
                    // also keeps a focused button from activating on Space
                    e.prevent_default();
                    if e.repeat() {
                        return;
                    }
                    if let Some(event) = key_event(&code, down) {
                        dispatch_input(event);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let keydown_cb = key_cb(true);
            let keyup_cb = key_cb(false);
            let press_cb = {
                let dispatch_input = dispatch_input.clone();
                Closure::wrap(Box::new(move |e: web_sys::Event| {
                    e.prevent_default();
                    dispatch_input(InputEvent::Trigger);
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(window) = &window {
                window
                    .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                    .ok();
                window
                    .add_event_listener_with_callback("keyup", keyup_cb.as_ref().unchecked_ref())
                    .ok();
            }
            if let Some(canvas) = &canvas {
                canvas
                    .add_event_listener_with_callback("mousedown", press_cb.as_ref().unchecked_ref())
                    .ok();
                canvas
                    .add_event_listener_with_callback("touchstart", press_cb.as_ref().unchecked_ref())
                    .ok();
            }

            // Cleanup
            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                    let _ = window.remove_event_listener_with_callback(
                        "keyup",
                        keyup_cb.as_ref().unchecked_ref(),
                    );
                    if let Some(id) = *raf_id.borrow() {
                        let _ = window.cancel_animation_frame(id);
                    }
                }
                if let Some(canvas) = &canvas {
                    let _ = canvas.remove_event_listener_with_callback(
                        "mousedown",
                        press_cb.as_ref().unchecked_ref(),
                    );
                    let _ = canvas.remove_event_listener_with_callback(
                        "touchstart",
                        press_cb.as_ref().unchecked_ref(),
                    );
                }
                // break the closure's self-reference
                closure_cell.borrow_mut().take();
                let _keep_alive = (&keydown_cb, &keyup_cb, &press_cb);
            }
        });
    }

    let rs = &*props.runner;
    let restart = {
        let runner = props.runner.clone();
        Callback::from(move |_| runner.dispatch(RunnerAction::Input(InputEvent::Trigger)))
    };
    let cfg = &rs.config;
    html! {
        <section style="position:relative; width:100%; max-width:600px;">
            <ScorePanel score={rs.score} high_score={rs.high_score} />
            <canvas
                ref={canvas_ref}
                width={cfg.width.to_string()}
                height={cfg.height.to_string()}
                class="cursor-target"
                style="display:block; width:100%; image-rendering:pixelated; touch-action:none;"
            />
            <IntroOverlay show={rs.phase == Phase::Idle} message={rs.overlay_message()} />
            <GameOverOverlay show={rs.phase == Phase::GameOver} score={rs.score} message={rs.overlay_message()} restart={restart} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_edge_events() {
        assert_eq!(key_event("Space", true), Some(InputEvent::Trigger));
        assert_eq!(key_event("ArrowUp", true), Some(InputEvent::Trigger));
        assert_eq!(key_event("ArrowDown", true), Some(InputEvent::DuckBegin));
        assert_eq!(key_event("ArrowDown", false), Some(InputEvent::DuckEnd));
        assert_eq!(key_event("Space", false), None);
        assert_eq!(key_event("KeyA", true), None);
    }
}
