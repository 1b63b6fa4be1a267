pub mod app;
pub mod decrypt_text;
pub mod dot_canvas;
pub mod game_over_overlay;
pub mod intro_overlay;
pub mod location_rotator;
pub mod runner_view;
pub mod score_panel;
pub mod target_cursor;
pub mod theme_toggle;
pub mod typewriter_link;
