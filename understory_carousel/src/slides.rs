// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filtering raw slide records down to the ones that can be shown.

use alloc::vec::Vec;

/// Content that may or may not be renderable.
///
/// The carousel never looks inside slides; it only needs to know which of them
/// count. A banner without any image, for instance, is skipped.
pub trait Displayable {
    /// Returns `true` if this item has content to display.
    fn is_displayable(&self) -> bool;
}

impl<T: Displayable + ?Sized> Displayable for &T {
    fn is_displayable(&self) -> bool {
        (**self).is_displayable()
    }
}

impl<T: Displayable> Displayable for Option<T> {
    fn is_displayable(&self) -> bool {
        self.as_ref().is_some_and(T::is_displayable)
    }
}

/// Returns the displayable items of `items`, in order.
pub fn displayable<T: Displayable>(items: &[T]) -> Vec<&T> {
    items.iter().filter(|item| item.is_displayable()).collect()
}

/// Counts the displayable items of `items`.
pub fn count_displayable<T: Displayable>(items: &[T]) -> usize {
    items.iter().filter(|item| item.is_displayable()).count()
}
