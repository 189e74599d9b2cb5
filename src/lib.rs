//! Hero carousel controller: one active slide over a fixed set, driven by buttons,
//! indicators, swipes, keys, an autoplay timer and page visibility, with no
//! overlapping transitions.

pub mod config;
pub mod constants;
pub mod controller;
pub mod input;
pub mod scheduler;
pub mod slide;
pub mod state;
pub mod view;

pub use config::CarouselConfig;
pub use controller::{CarouselController, CarouselEvent};
pub use input::{InputAdapter, Key, PageEvent, Point};
pub use slide::SlideInfo;
pub use view::Frame;
