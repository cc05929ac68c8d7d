// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Banner: content records for carousel banners.
//!
//! A banner is an image with an optional link. This crate models the parts of a
//! banner a host needs before it renders anything:
//!
//! - [`BannerImage`]: desktop and mobile image variants, with
//!   [`source_for`](BannerImage::source_for) picking the right one per [`Device`].
//! - [`BannerLink`] and [`LinkTarget`]: the authored link settings and where they
//!   actually point (an external URL, an internal path, an internal page with
//!   [`RouteParams`], or nothing).
//! - [`Banner`]: the record itself. It implements
//!   [`understory_carousel::Displayable`], so banners without any image are
//!   dropped before they reach a carousel.
//!
//! ## Example
//!
//! ```rust
//! use understory_banner::{Banner, BannerImage, BannerLink, Device, LinkTarget};
//! use understory_carousel::{Carousel, CarouselConfig, displayable};
//!
//! let banners = [
//!     Banner::new(BannerImage::new("sale.png"), BannerLink::external("https://example.com")),
//!     Banner::new(BannerImage::default(), BannerLink::default()),
//!     Banner::new(
//!         BannerImage::new("shoes.png").with_mobile("shoes-tall.png"),
//!         BannerLink::page("store.search", Some("term=shoes".into())),
//!     ),
//! ];
//!
//! // The banner without an image is skipped.
//! let slides = displayable(&banners);
//! assert_eq!(slides.len(), 2);
//!
//! let carousel = Carousel::new(&CarouselConfig::default(), slides.len(), 375, 0);
//! let view = carousel.view().unwrap();
//! let current = slides[view.state.current_index];
//! assert_eq!(current.image.source_for(Device::Mobile), Some("sale.png"));
//! assert_eq!(current.link.resolve(), LinkTarget::External { url: "https://example.com" });
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` with the page builder's flat prop
//!   names (`image`, `mobileImage`, `externalRoute`, `customInternalURL`, ...), and
//!   enables the same feature on `understory_carousel`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod image;
mod link;

use alloc::string::String;

use understory_carousel::Displayable;

pub use image::{BannerImage, Device};
pub use link::{BannerLink, LinkTarget, RouteParams, parse_params};

/// Default maximum banner height in pixels.
pub const DEFAULT_HEIGHT: u32 = 420;

/// Default maximum banner height in pixels on mobile devices.
pub const DEFAULT_MOBILE_HEIGHT: u32 = 339;

/// One banner: an image, its alternative text, and where it links to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Banner {
    /// Image variants.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub image: BannerImage,
    /// Alternative text for the image.
    pub description: String,
    /// Link settings.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub link: BannerLink,
    /// Maximum height in pixels.
    pub height: u32,
    /// Maximum height in pixels on mobile devices.
    #[cfg_attr(feature = "serde", serde(rename = "mobileHeight"))]
    pub mobile_height: u32,
}

impl Banner {
    /// Creates a banner with an empty description and the default height.
    #[must_use]
    pub fn new(image: BannerImage, link: BannerLink) -> Self {
        Self {
            image,
            link,
            ..Self::default()
        }
    }

    /// Sets the alternative text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the maximum height in pixels on `device`.
    #[must_use]
    pub const fn max_height(&self, device: Device) -> u32 {
        match device {
            Device::Desktop => self.height,
            Device::Mobile => self.mobile_height,
        }
    }

    /// Resolves where this banner links to.
    #[must_use]
    pub fn target(&self) -> LinkTarget<'_> {
        self.link.resolve()
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            image: BannerImage::default(),
            description: String::new(),
            link: BannerLink::default(),
            height: DEFAULT_HEIGHT,
            mobile_height: DEFAULT_MOBILE_HEIGHT,
        }
    }
}

impl Displayable for Banner {
    fn is_displayable(&self) -> bool {
        self.image.is_displayable()
    }
}
