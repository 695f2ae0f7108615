//! A headless slideshow carousel.
//!
//! The carousel owns navigation state, layout math, gesture interpretation,
//! autoplay timing and transition rendering, but draws nothing itself. The
//! host measures its content, feeds events in and paints the per-frame styles
//! the carousel hands back.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//!
//! use carousel::{Carousel, CarouselArgs, SlideExtent, Viewport};
//!
//! let args = CarouselArgs::default()
//!     .slides_to_show(2.0)
//!     .wrap_around(true);
//! let mut carousel = Carousel::new(args, 5);
//!
//! // Host-side measurement pass.
//! let slides = vec![SlideExtent { width: 300.0, height: 200.0 }; 5];
//! carousel.measure(Viewport { width: 600.0, height: 200.0 }, &slides);
//!
//! let now = Instant::now();
//! carousel.next_slide(now);
//!
//! // Per paint: drive timers, then apply the returned styles.
//! carousel.tick(now);
//! let frame = carousel.frame(now);
//! for slide in frame.slides.iter().filter(|s| !s.hidden) {
//!     println!("slide {} at ({}, {})", slide.index, slide.x, slide.y);
//! }
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod autoplay;
mod controller;
mod offset;
mod transitions;

pub mod animation;
pub mod args;
pub mod callback;
pub mod carousel;
pub mod controls;
pub mod events;
pub mod gesture;
pub mod layout;
pub mod style;

pub use animation::Easing;
pub use args::{
    CarouselArgs, CellAlign, HeightMode, ParseSlidesToScrollError, SlideAnimation, SlidesToScroll,
    TransitionMode,
};
pub use callback::{Callback, CallbackWith};
pub use carousel::Carousel;
pub use controls::{ControlPlacement, ControlProps};
pub use events::{KeyInput, SlideChange, SlideStatus};
pub use gesture::Point;
pub use layout::SlideGeometry;
pub use style::{CarouselFrame, ContainerStyle, SlideExtent, SlideStyle, Viewport};
