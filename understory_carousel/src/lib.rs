// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Carousel: headless state for rotating slide carousels.
//!
//! This crate holds the parts of a carousel that are not rendering: which slide is
//! current, how many slides fit the viewport, and when autoplay should move on.
//! It is renderer-agnostic and shared across UI stacks.
//!
//! The core pieces are:
//!
//! - [`BreakpointTable`]: parses a compact `threshold:count|...` string (for example
//!   `"768:2|1024:3"`) and resolves how many slides are visible for a viewport width.
//!   Malformed input never fails; it degrades to one slide per page.
//! - [`Navigator`]: the current slide index over a circular strip, with
//!   [`advance`](Navigator::advance), [`retreat`](Navigator::retreat),
//!   [`go_to`](Navigator::go_to) and [`recompute`](Navigator::recompute) transitions,
//!   plus iterators for a dots indicator and the visible window.
//! - [`Autoplay`]: a timer driven by host timestamps, paused on hover and
//!   cancelled unconditionally when the carousel empties or unmounts.
//! - [`Displayable`]: the predicate used to drop slides that have nothing to show
//!   before they reach the navigator.
//! - [`CarouselConfig`] and [`Carousel`]: authored settings with sensible defaults,
//!   and a controller that wires everything to host events.
//!
//! Host frameworks remain responsible for:
//!
//! - Owning the slide content and rendering the window reported by
//!   [`CarouselView::visible_indices`].
//! - Forwarding pointer, resize, and frame events with a monotonic timestamp in
//!   milliseconds.
//! - Calling [`Carousel::unmount`] when the widget goes away.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_carousel::{Carousel, CarouselConfig};
//!
//! let config = CarouselConfig {
//!     items_per_page: Some("300:1|768:2".into()),
//!     ..CarouselConfig::default()
//! };
//!
//! // Five slides on a 1000px wide viewport, mounted at t = 0ms.
//! let mut carousel = Carousel::new(&config, 5, 1000, 0);
//! assert_eq!(carousel.per_page().get(), 2);
//!
//! // Autoplay defaults to five seconds per slide.
//! assert!(!carousel.on_frame(4_999));
//! assert!(carousel.on_frame(5_000));
//!
//! let view = carousel.view().unwrap();
//! assert_eq!(view.state.current_index, 1);
//! assert_eq!(view.visible_indices().collect::<Vec<_>>(), [1, 2]);
//!
//! // An empty slide list renders nothing.
//! carousel.set_slide_count(0, 6_000);
//! assert!(carousel.view().is_none());
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`CarouselConfig`] and
//!   [`AutoplaySpeed`] using the page builder's camelCase prop names.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod autoplay;
mod breakpoints;
mod carousel;
mod config;
mod navigation;
mod slides;
mod util;

pub use autoplay::{Autoplay, AutoplayConfig, AutoplaySpeed};
pub use breakpoints::{Breakpoint, BreakpointTable};
pub use carousel::{Carousel, CarouselView};
pub use config::CarouselConfig;
pub use navigation::{Dot, NavigationError, NavigationState, Navigator};
pub use slides::{Displayable, count_displayable, displayable};
