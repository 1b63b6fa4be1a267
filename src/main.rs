mod components;
mod config;
mod geometry;
mod logger;
mod model;
mod render;
mod rng;
mod spawn;
mod state;
mod storage;
mod util;

use components::app::App;

fn main() {
    if let Err(err) = logger::init() {
        web_sys::console::warn_1(&err.to_string().into());
    }
    yew::Renderer::<App>::new().render();
}
