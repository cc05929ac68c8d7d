// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Authored carousel settings, as a page builder stores them.

use alloc::string::String;

use crate::{AutoplayConfig, AutoplaySpeed, BreakpointTable};

/// Carousel settings as authored, before any interpretation.
///
/// Defaults match what a freshly placed carousel shows: autoplay every five
/// seconds, paused on hover, arrows and dots visible, one slide per page, 420px
/// tall (339px on mobile).
///
/// With the `serde` feature this deserializes from the page builder's props
/// (`autoplaySpeed`, `itemsPerPage`, `showArrows`, ...); missing fields keep their
/// defaults and `autoplaySpeed` may be a number or a string. An `autoplaySpeed` of
/// any other shape reads as [`AutoplaySpeed::Unset`], and a non-string
/// `itemsPerPage` as `None`, so a stray editor value never rejects the whole config.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CarouselConfig {
    /// Whether slides advance on their own.
    pub autoplay: bool,
    /// Seconds each slide stays before autoplay advances.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::autoplay_speed"))]
    pub autoplay_speed: AutoplaySpeed,
    /// Responsive page sizes in `threshold:count|...` form.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::items_per_page"))]
    pub items_per_page: Option<String>,
    /// Whether hovering pauses autoplay.
    pub pause_on_hover: bool,
    /// Whether previous/next arrows are shown.
    pub show_arrows: bool,
    /// Whether the dots indicator is shown.
    pub show_dots: bool,
    /// Maximum slide height in pixels.
    pub height: u32,
    /// Maximum slide height in pixels on mobile devices.
    pub mobile_height: u32,
}

impl CarouselConfig {
    /// Parses [`items_per_page`](Self::items_per_page) into a breakpoint table.
    #[must_use]
    pub fn breakpoints(&self) -> BreakpointTable {
        BreakpointTable::parse_optional(self.items_per_page.as_deref())
    }

    /// Interprets the autoplay fields, disabling autoplay when the speed is unusable.
    #[must_use]
    pub fn autoplay(&self) -> AutoplayConfig {
        AutoplayConfig {
            pause_on_hover: self.pause_on_hover,
            ..AutoplayConfig::from_speed(self.autoplay, &self.autoplay_speed)
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_speed: AutoplaySpeed::default(),
            items_per_page: None,
            pause_on_hover: true,
            show_arrows: true,
            show_dots: true,
            height: 420,
            mobile_height: 339,
        }
    }
}

#[cfg(feature = "serde")]
mod lenient {
    use alloc::string::String;

    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    use crate::AutoplaySpeed;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Authored<T> {
        Valid(T),
        Other(IgnoredAny),
    }

    pub(super) fn autoplay_speed<'de, D>(deserializer: D) -> Result<AutoplaySpeed, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Authored::deserialize(deserializer)? {
            Authored::Valid(speed) => speed,
            Authored::Other(_) => {
                tracing::debug!("unreadable autoplaySpeed; autoplay disabled");
                AutoplaySpeed::Unset
            }
        })
    }

    pub(super) fn items_per_page<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Authored::deserialize(deserializer)? {
            Authored::Valid(text) => Some(text),
            Authored::Other(_) => {
                tracing::debug!("unreadable itemsPerPage; using one item per page");
                None
            }
        })
    }
}
