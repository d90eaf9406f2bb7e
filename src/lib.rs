//! Rotating hero image slider: auto-play, dot navigation, arrow keys,
//! swipe gestures, hover pause and pause while the window is hidden.
//!
//! The controller core is windowing-agnostic; the `window` feature adds a
//! raylib host that loads the images and feeds it input.

pub mod cli;
pub mod constants;
pub mod controller;
pub mod element;
pub mod event;
pub mod gesture;
pub mod layout;
pub mod signals;
pub mod source;
pub mod timer;

#[cfg(feature = "window")]
pub mod engine;
#[cfg(feature = "window")]
pub mod indicator;
#[cfg(feature = "window")]
pub mod slide;
#[cfg(feature = "window")]
pub mod texture_loader;

pub use controller::{Markup, Mounted, SliderController};
pub use element::{ActiveFlag, Element};
pub use event::{NavKey, SliderEvent, Visibility};
