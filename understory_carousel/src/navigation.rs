// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide navigation: the current index over a circular strip of slides.

use core::num::NonZeroUsize;

use thiserror::Error;

/// Error returned by [`Navigator`] transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The navigator holds no slides, so there is nothing to move to.
    #[error("no slides to navigate")]
    Empty,
    /// A selection named a slide that does not exist.
    ///
    /// This means the caller (typically a dots indicator) is out of sync with the
    /// slide list.
    #[error("slide index {index} is out of range for {len} slides")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of slides at the time of the request.
        len: usize,
    },
}

/// Snapshot of navigation state handed to the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NavigationState {
    /// Index of the current slide, always `< slide_count`.
    pub current_index: usize,
    /// Number of slides visible at once.
    pub per_page: NonZeroUsize,
    /// Number of displayable slides; never zero in a snapshot.
    pub slide_count: usize,
}

/// One entry of a dots indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dot {
    /// Slide index this dot selects.
    pub index: usize,
    /// Whether this dot marks the current slide.
    pub active: bool,
}

/// Current-slide state over `len` slides shown `per_page` at a time.
///
/// The strip is circular: moving past the last slide wraps to the first and vice
/// versa. Stepping keeps its arithmetic anchored on the page size,
/// `((current + 1 - per_page) mod len) + per_page`, reduced once more into
/// `0..len`, so a loop around the strip always lands back on the page it started
/// from.
///
/// An empty navigator (`len == 0`) is valid and means "render nothing"; stepping it
/// reports [`NavigationError::Empty`] rather than touching the index.
///
/// ```
/// use core::num::NonZeroUsize;
/// use understory_carousel::Navigator;
///
/// let mut nav = Navigator::new(3, NonZeroUsize::MIN);
/// assert_eq!(nav.advance(), Ok(1));
/// assert_eq!(nav.advance(), Ok(2));
/// assert_eq!(nav.advance(), Ok(0));
/// assert_eq!(nav.retreat(), Ok(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    len: usize,
    per_page: NonZeroUsize,
}

impl Navigator {
    /// Creates a navigator over `len` slides, starting at index `0`.
    #[must_use]
    pub const fn new(len: usize, per_page: NonZeroUsize) -> Self {
        Self {
            current: 0,
            len,
            per_page,
        }
    }

    /// Returns the current index, or `None` when there are no slides.
    #[must_use]
    pub const fn current(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.current)
        }
    }

    /// Returns the number of slides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when there is nothing to render.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slides visible at once.
    #[must_use]
    pub const fn per_page(&self) -> NonZeroUsize {
        self.per_page
    }

    /// Returns a snapshot for rendering, or `None` when there are no slides.
    #[must_use]
    pub const fn state(&self) -> Option<NavigationState> {
        if self.len == 0 {
            return None;
        }
        Some(NavigationState {
            current_index: self.current,
            per_page: self.per_page,
            slide_count: self.len,
        })
    }

    /// Moves forward one slide, wrapping past the end. Returns the new index.
    pub fn advance(&mut self) -> Result<usize, NavigationError> {
        self.step(1)
    }

    /// Moves back one slide, wrapping past the start. Returns the new index.
    pub fn retreat(&mut self) -> Result<usize, NavigationError> {
        self.step(-1)
    }

    fn step(&mut self, delta: i128) -> Result<usize, NavigationError> {
        if self.len == 0 {
            return Err(NavigationError::Empty);
        }
        // Widen so `current + delta - per_page` can go negative without wrapping.
        let len = self.len as i128;
        let per_page = self.per_page.get() as i128;
        let anchored = (self.current as i128 + delta - per_page).rem_euclid(len) + per_page;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "rem_euclid by a usize length yields a value in 0..len"
        )]
        let next = anchored.rem_euclid(len) as usize;
        tracing::trace!(from = self.current, to = next, "slide step");
        self.current = next;
        Ok(next)
    }

    /// Jumps to slide `index`.
    ///
    /// Out-of-range indices are rejected and leave the state untouched; they are
    /// never clamped.
    pub fn go_to(&mut self, index: usize) -> Result<usize, NavigationError> {
        if self.len == 0 {
            return Err(NavigationError::Empty);
        }
        if index >= self.len {
            return Err(NavigationError::OutOfRange {
                index,
                len: self.len,
            });
        }
        tracing::trace!(from = self.current, to = index, "slide select");
        self.current = index;
        Ok(index)
    }

    /// Applies a new slide count and page size.
    ///
    /// The current index is clamped into the new range rather than reset, so a resize
    /// does not jump the carousel unless it has to. Returns the new snapshot, or
    /// `None` when the list became empty.
    pub fn recompute(&mut self, len: usize, per_page: NonZeroUsize) -> Option<NavigationState> {
        self.per_page = per_page;
        self.len = len;
        if len == 0 {
            tracing::debug!("slide list is empty; nothing to render");
            self.current = 0;
            return None;
        }
        if self.current >= len {
            tracing::debug!(from = self.current, to = len - 1, "clamping current slide");
            self.current = len - 1;
        }
        self.state()
    }

    /// Iterates the dots indicator, one entry per slide.
    pub fn dots(&self) -> impl ExactSizeIterator<Item = Dot> + '_ {
        (0..self.len).map(|index| Dot {
            index,
            active: index == self.current,
        })
    }

    /// Iterates the slide indices inside the viewport, starting at the current slide.
    ///
    /// Yields `min(per_page, len)` indices and wraps past the end of the strip.
    pub fn visible_indices(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        let shown = self.per_page.get().min(self.len);
        (0..shown).map(|offset| (self.current + offset) % self.len)
    }
}
