// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A controller that ties breakpoints, navigation, and autoplay together.

use core::num::NonZeroUsize;

use crate::{
    Autoplay, BreakpointTable, CarouselConfig, Dot, NavigationError, NavigationState, Navigator,
};

/// Headless carousel: owns the slide index, the responsive page size, and the
/// autoplay timer for one mounted carousel.
///
/// The host forwards viewport, pointer, and frame events together with a monotonic
/// timestamp in milliseconds, then renders from [`Carousel::view`]. All mutation
/// goes through `&mut self`, so transitions are serialized by construction.
///
/// After [`Carousel::unmount`] the autoplay timer is gone for good: no later frame
/// can advance the carousel, even if the host keeps polling it.
#[derive(Clone, Debug)]
pub struct Carousel {
    breakpoints: BreakpointTable,
    viewport_width: u32,
    navigator: Navigator,
    autoplay: Autoplay,
    show_arrows: bool,
    show_dots: bool,
    height: u32,
    mobile_height: u32,
    mounted: bool,
}

impl Carousel {
    /// Mounts a carousel over `slide_count` displayable slides.
    ///
    /// Autoplay is armed right away when the configuration allows it, so the first
    /// tick lands one interval after `now`.
    #[must_use]
    pub fn new(config: &CarouselConfig, slide_count: usize, viewport_width: u32, now: u64) -> Self {
        let breakpoints = config.breakpoints();
        let per_page = breakpoints.resolve(viewport_width);
        let mut carousel = Self {
            breakpoints,
            viewport_width,
            navigator: Navigator::new(slide_count, per_page),
            autoplay: Autoplay::new(config.autoplay()),
            show_arrows: config.show_arrows,
            show_dots: config.show_dots,
            height: config.height,
            mobile_height: config.mobile_height,
            mounted: true,
        };
        carousel.autoplay.arm(now, slide_count);
        tracing::debug!(
            slide_count,
            viewport_width,
            per_page = per_page.get(),
            autoplay = carousel.autoplay.is_armed(),
            "carousel mounted"
        );
        carousel
    }

    /// Applies new authored settings, keeping the current slide where possible.
    pub fn set_config(&mut self, config: &CarouselConfig, now: u64) {
        self.breakpoints = config.breakpoints();
        self.show_arrows = config.show_arrows;
        self.show_dots = config.show_dots;
        self.height = config.height;
        self.mobile_height = config.mobile_height;
        self.recompute(self.navigator.len(), now);
        let len = self.navigator.len();
        self.autoplay.set_config(config.autoplay(), now, len);
        if self.mounted {
            self.autoplay.arm(now, len);
        }
    }

    /// Drives autoplay. Returns `true` if the carousel advanced.
    pub fn on_frame(&mut self, now: u64) -> bool {
        if !self.mounted || !self.autoplay.poll(now) {
            return false;
        }
        match self.navigator.advance() {
            Ok(_) => true,
            Err(_) => {
                self.autoplay.disarm();
                false
            }
        }
    }

    /// Shows the next slide (the "next" arrow).
    pub fn next(&mut self, now: u64) -> Result<usize, NavigationError> {
        let index = self.navigator.advance()?;
        self.autoplay.restart(now);
        Ok(index)
    }

    /// Shows the previous slide (the "previous" arrow).
    pub fn previous(&mut self, now: u64) -> Result<usize, NavigationError> {
        let index = self.navigator.retreat()?;
        self.autoplay.restart(now);
        Ok(index)
    }

    /// Jumps to slide `index` (a dot was selected).
    ///
    /// An index outside the slide list is rejected and leaves the carousel unchanged.
    pub fn select(&mut self, index: usize, now: u64) -> Result<usize, NavigationError> {
        let index = self.navigator.go_to(index)?;
        self.autoplay.restart(now);
        Ok(index)
    }

    /// The pointer entered the carousel.
    pub fn hover_start(&mut self) {
        self.autoplay.pause();
    }

    /// The pointer left the carousel; autoplay resumes one interval after `now`.
    pub fn hover_end(&mut self, now: u64) {
        if self.mounted {
            self.autoplay.resume(now, self.navigator.len());
        }
    }

    /// The viewport width changed.
    pub fn resize(&mut self, viewport_width: u32, now: u64) {
        self.viewport_width = viewport_width;
        self.recompute(self.navigator.len(), now);
    }

    /// The list of displayable slides changed length.
    pub fn set_slide_count(&mut self, slide_count: usize, now: u64) {
        self.recompute(slide_count, now);
    }

    fn recompute(&mut self, slide_count: usize, now: u64) {
        let per_page = self.breakpoints.resolve(self.viewport_width);
        if self.navigator.recompute(slide_count, per_page).is_none() {
            self.autoplay.disarm();
        } else if self.mounted {
            self.autoplay.arm(now, slide_count);
        }
    }

    /// Tears the carousel down, cancelling autoplay.
    ///
    /// Calling this more than once is harmless.
    pub fn unmount(&mut self) {
        if self.mounted {
            tracing::debug!("carousel unmounted");
        }
        self.mounted = false;
        self.autoplay.disarm();
    }

    /// Returns `false` once [`Carousel::unmount`] has been called.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns what to render, or `None` when there is nothing to show.
    #[must_use]
    pub fn view(&self) -> Option<CarouselView<'_>> {
        if !self.mounted {
            return None;
        }
        let state = self.navigator.state()?;
        Some(CarouselView {
            state,
            show_arrows: self.show_arrows,
            show_dots: self.show_dots,
            height: self.height,
            mobile_height: self.mobile_height,
            navigator: &self.navigator,
        })
    }

    /// Returns the items per page for the current viewport.
    #[must_use]
    pub const fn per_page(&self) -> NonZeroUsize {
        self.navigator.per_page()
    }

    /// Returns the parsed breakpoint table.
    #[must_use]
    pub const fn breakpoints(&self) -> &BreakpointTable {
        &self.breakpoints
    }

    /// Returns the autoplay scheduler.
    #[must_use]
    pub const fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }
}

/// Render-ready view of a non-empty carousel.
#[derive(Clone, Copy, Debug)]
pub struct CarouselView<'a> {
    /// Current index, page size, and slide count.
    pub state: NavigationState,
    /// Whether previous/next arrows are shown.
    pub show_arrows: bool,
    /// Whether the dots indicator is shown.
    pub show_dots: bool,
    /// Maximum slide height in pixels.
    pub height: u32,
    /// Maximum slide height in pixels on mobile devices.
    pub mobile_height: u32,
    navigator: &'a Navigator,
}

impl<'a> CarouselView<'a> {
    /// Iterates the dots indicator; one entry per slide, exactly one active.
    pub fn dots(self) -> impl ExactSizeIterator<Item = Dot> + 'a {
        self.navigator.dots()
    }

    /// Iterates the slide indices inside the viewport, starting at the current slide.
    pub fn visible_indices(self) -> impl ExactSizeIterator<Item = usize> + 'a {
        self.navigator.visible_indices()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::Carousel;
    use crate::{AutoplaySpeed, CarouselConfig, NavigationError};

    fn config(items_per_page: &str, seconds: f64) -> CarouselConfig {
        CarouselConfig {
            items_per_page: Some(items_per_page.into()),
            autoplay_speed: AutoplaySpeed::Seconds(seconds),
            ..CarouselConfig::default()
        }
    }

    #[test]
    fn autoplay_cycles_through_slides() {
        let mut carousel = Carousel::new(&config("", 1.0), 3, 1280, 0);
        let mut seen = Vec::new();
        for now in (0..=3000).step_by(250) {
            if carousel.on_frame(now) {
                seen.push(carousel.view().unwrap().state.current_index);
            }
        }
        assert_eq!(seen, [1, 2, 0]);
    }

    #[test]
    fn per_page_follows_the_viewport() {
        let mut carousel = Carousel::new(&config("300:1|768:2", 5.0), 6, 1000, 0);
        assert_eq!(carousel.per_page().get(), 2);
        carousel.resize(500, 10);
        assert_eq!(carousel.per_page().get(), 1);
        assert_eq!(carousel.view().unwrap().state.per_page.get(), 1);
    }

    #[test]
    fn resize_keeps_the_current_slide() {
        let mut carousel = Carousel::new(&config("0:1|900:3", 5.0), 5, 400, 0);
        carousel.select(3, 0).unwrap();
        carousel.resize(1200, 10);
        let view = carousel.view().unwrap();
        assert_eq!(view.state.current_index, 3);
        assert_eq!(view.visible_indices().collect::<Vec<_>>(), [3, 4, 0]);
    }

    #[test]
    fn hover_before_first_tick_defers_autoplay() {
        let mut carousel = Carousel::new(&config("", 1.0), 3, 800, 0);
        carousel.hover_start();
        assert!(!carousel.on_frame(1000));
        assert!(!carousel.on_frame(4000));
        assert_eq!(carousel.view().unwrap().state.current_index, 0);

        carousel.hover_end(4000);
        assert!(!carousel.on_frame(4999));
        assert!(carousel.on_frame(5000));
        assert_eq!(carousel.view().unwrap().state.current_index, 1);
    }

    #[test]
    fn manual_navigation_restarts_the_countdown() {
        let mut carousel = Carousel::new(&config("", 1.0), 4, 800, 0);
        assert_eq!(carousel.next(900), Ok(1));
        assert!(!carousel.on_frame(1000));
        assert!(carousel.on_frame(1900));
        assert_eq!(carousel.view().unwrap().state.current_index, 2);
        assert_eq!(carousel.previous(2000), Ok(1));
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut carousel = Carousel::new(&config("", 5.0), 3, 800, 0);
        carousel.select(1, 0).unwrap();
        assert_eq!(
            carousel.select(3, 0),
            Err(NavigationError::OutOfRange { index: 3, len: 3 })
        );
        let view = carousel.view().unwrap();
        assert_eq!(view.state.current_index, 1);
        let active: Vec<usize> = view.dots().filter(|d| d.active).map(|d| d.index).collect();
        assert_eq!(active, [1]);
    }

    #[test]
    fn empty_slide_list_renders_nothing_and_disarms() {
        let mut carousel = Carousel::new(&config("", 1.0), 3, 800, 0);
        assert!(carousel.autoplay().is_armed());

        carousel.set_slide_count(0, 100);
        assert!(carousel.view().is_none());
        assert!(!carousel.autoplay().is_armed());
        assert!(!carousel.on_frame(5000));
        assert_eq!(carousel.next(5000), Err(NavigationError::Empty));

        carousel.set_slide_count(2, 6000);
        assert!(carousel.autoplay().is_armed());
        assert!(carousel.on_frame(7000));
    }

    #[test]
    fn mounting_without_slides_never_arms() {
        let mut carousel = Carousel::new(&CarouselConfig::default(), 0, 800, 0);
        assert!(carousel.view().is_none());
        assert!(!carousel.autoplay().is_armed());
        carousel.hover_end(10);
        assert!(!carousel.autoplay().is_armed());
    }

    #[test]
    fn unmount_cancels_autoplay_for_good() {
        let mut carousel = Carousel::new(&config("", 1.0), 3, 800, 0);
        carousel.unmount();
        carousel.unmount();
        assert!(!carousel.is_mounted());
        assert!(carousel.view().is_none());
        assert!(!carousel.on_frame(10_000));

        carousel.hover_start();
        carousel.hover_end(10_000);
        carousel.set_slide_count(5, 10_000);
        assert!(!carousel.autoplay().is_armed());
        assert!(!carousel.on_frame(20_000));
    }

    #[test]
    fn disabled_autoplay_stays_still() {
        let config = CarouselConfig {
            autoplay: false,
            ..CarouselConfig::default()
        };
        let mut carousel = Carousel::new(&config, 3, 800, 0);
        assert!(!carousel.on_frame(60_000));
        assert_eq!(carousel.view().unwrap().state.current_index, 0);
    }

    #[test]
    fn new_config_applies_breakpoints_and_autoplay() {
        let mut carousel = Carousel::new(&config("", 5.0), 8, 1000, 0);
        carousel.select(6, 0).unwrap();

        let mut updated = config("768:4", 2.0);
        updated.show_dots = false;
        carousel.set_config(&updated, 1000);

        let view = carousel.view().unwrap();
        assert_eq!(view.state.per_page.get(), 4);
        assert_eq!(view.state.current_index, 6);
        assert!(!view.show_dots);
        assert_eq!(carousel.autoplay().deadline(), Some(3000));
    }

    #[test]
    fn heights_reach_the_view() {
        let mut carousel = Carousel::new(&CarouselConfig::default(), 2, 375, 0);
        let view = carousel.view().unwrap();
        assert_eq!((view.height, view.mobile_height), (420, 339));

        let updated = CarouselConfig {
            height: 500,
            mobile_height: 280,
            ..CarouselConfig::default()
        };
        carousel.set_config(&updated, 10);
        let view = carousel.view().unwrap();
        assert_eq!((view.height, view.mobile_height), (500, 280));
    }

    #[test]
    fn turning_off_pause_on_hover_resumes_a_hovered_carousel() {
        let mut carousel = Carousel::new(&config("", 1.0), 3, 800, 0);
        carousel.hover_start();
        assert!(!carousel.autoplay().is_armed());

        let mut updated = config("", 1.0);
        updated.pause_on_hover = false;
        carousel.set_config(&updated, 500);
        assert!(!carousel.autoplay().is_paused());
        assert_eq!(carousel.autoplay().deadline(), Some(1500));
        assert!(carousel.on_frame(1500));
        assert_eq!(carousel.view().unwrap().state.current_index, 1);
    }
}
