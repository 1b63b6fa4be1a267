use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;
use yew::prelude::*;

use super::{
    decrypt_text::DecryptText, dot_canvas::DotCanvas, location_rotator::LocationRotator,
    runner_view::RunnerView, target_cursor::TargetCursor, theme_toggle::ThemeToggle,
    typewriter_link::TypewriterLink,
};
use crate::config::PageConfig;
use crate::model::RunnerState;
use crate::rng::JsRandom;
use crate::state::Theme;
use crate::storage;

/// Shared gravity-well center for the dot background (client coordinates).
/// Written by hover effects, read every frame by `DotCanvas`.
#[derive(Clone)]
pub struct WellHandle(pub Rc<RefCell<Option<(f64, f64)>>>);

impl PartialEq for WellHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl WellHandle {
    pub fn set(&self, center: Option<(f64, f64)>) {
        *self.0.borrow_mut() = center;
    }

    pub fn get(&self) -> Option<(f64, f64)> {
        *self.0.borrow()
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let page = use_memo((), |_| PageConfig::load());
    let theme = use_state(|| {
        storage::load_theme().unwrap_or_else(|err| {
            warn!("theme not loaded: {err}");
            Theme::default()
        })
    });
    let runner = {
        let cfg = page.runner.clone();
        use_reducer(move || {
            let high_score = storage::load_high_score().unwrap_or_else(|err| {
                warn!("high score not loaded: {err}");
                0
            });
            RunnerState::new(cfg, high_score, JsRandom.seed())
        })
    };
    let well = use_mut_ref(|| None::<(f64, f64)>);

    // Apply + persist theme
    {
        use_effect_with(*theme, move |theme| {
            let root = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element());
            if let Some(root) = root {
                let classes = root.class_list();
                let applied = match theme {
                    Theme::Light => classes.add_1(Theme::LIGHT_CLASS),
                    Theme::Dark => classes.remove_1(Theme::LIGHT_CLASS),
                };
                if applied.is_err() {
                    warn!("could not update theme class");
                }
            }
            if let Err(err) = storage::save_theme(*theme) {
                warn!("theme not saved: {err}");
            }
            || ()
        });
    }
    // Persist high score whenever it is beaten
    {
        use_effect_with(runner.high_score, move |high| {
            if *high > 0 {
                if let Err(err) = storage::save_high_score(*high) {
                    warn!("high score not saved: {err}");
                }
            }
            || ()
        });
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.toggled()))
    };

    html! {
        <ContextProvider<WellHandle> context={WellHandle(well)}>
            <DotCanvas theme={*theme} />
            <TargetCursor />
            <ThemeToggle theme={*theme} on_toggle={toggle_theme} />
            <main style="position:relative; z-index:1; max-width:640px; margin:0 auto; padding:64px 20px; font-family:monospace;">
                <h1 style="margin:0 0 8px 0; font-size:32px;">
                    <TypewriterLink original={page.name.clone()} alias={page.alias.clone()} href="/" />
                </h1>
                <p style="margin:4px 0;"><DecryptText text={page.tagline.clone()} /></p>
                <p style="margin:4px 0 32px 0; opacity:0.75;"><LocationRotator locations={page.locations.clone()} /></p>
                <RunnerView runner={runner.clone()} theme={*theme} />
            </main>
        </ContextProvider<WellHandle>>
    }
}
