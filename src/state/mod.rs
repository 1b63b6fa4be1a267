pub mod cursor;
pub mod dots;
pub mod frame_clock;
pub mod scramble;
pub mod theme;
pub mod typewriter;

pub use dots::DotGrid;
pub use frame_clock::FrameClock;
pub use scramble::{scramble_text, LocationRotator};
pub use theme::Theme;
pub use typewriter::NameSwap;
