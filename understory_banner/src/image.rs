// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Desktop and mobile image variants.

use alloc::string::String;

use understory_carousel::Displayable;

/// Class of device the page is rendered for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Device {
    /// Wide screens; prefers the desktop image.
    #[default]
    Desktop,
    /// Phones; prefers the mobile image when one is set.
    Mobile,
}

/// Image references of a banner.
///
/// Either variant may be missing; empty strings count as missing. A banner with
/// neither is not displayable and is skipped by the carousel.
///
/// With the `serde` feature this reads both stored shapes: flat `image` and
/// `mobileImage` strings, or `image` as a `{ desktop, mobile }` object. It always
/// writes the flat shape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "stored::StoredImage"))]
pub struct BannerImage {
    /// Image shown on desktop, and on mobile when no mobile image is set.
    #[cfg_attr(feature = "serde", serde(rename = "image", default))]
    pub desktop: Option<String>,
    /// Image shown on mobile devices.
    #[cfg_attr(feature = "serde", serde(rename = "mobileImage", default))]
    pub mobile: Option<String>,
}

impl BannerImage {
    /// Creates an image with only a desktop variant.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            desktop: Some(src.into()),
            mobile: None,
        }
    }

    /// Adds a mobile variant.
    #[must_use]
    pub fn with_mobile(mut self, src: impl Into<String>) -> Self {
        self.mobile = Some(src.into());
        self
    }

    /// Returns the image source to use on `device`.
    ///
    /// Mobile devices get the mobile image when there is one; everything else gets
    /// the desktop image, falling back to the mobile one.
    #[must_use]
    pub fn source_for(&self, device: Device) -> Option<&str> {
        let desktop = non_empty(self.desktop.as_deref());
        let mobile = non_empty(self.mobile.as_deref());
        match device {
            Device::Mobile => mobile.or(desktop),
            Device::Desktop => desktop.or(mobile),
        }
    }
}

impl Displayable for BannerImage {
    fn is_displayable(&self) -> bool {
        self.source_for(Device::Desktop).is_some()
    }
}

fn non_empty(src: Option<&str>) -> Option<&str> {
    src.filter(|s| !s.trim().is_empty())
}

#[cfg(feature = "serde")]
mod stored {
    use alloc::string::String;

    use serde::Deserialize;
    use serde::de::IgnoredAny;

    use super::BannerImage;

    #[derive(Deserialize)]
    pub(super) struct StoredImage {
        #[serde(default)]
        image: Option<ImageField>,
        #[serde(default, rename = "mobileImage")]
        mobile_image: Option<String>,
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ImageField {
        Src(String),
        Variants {
            #[serde(default)]
            desktop: Option<String>,
            #[serde(default)]
            mobile: Option<String>,
        },
        Other(IgnoredAny),
    }

    impl From<StoredImage> for BannerImage {
        fn from(stored: StoredImage) -> Self {
            let (desktop, mobile) = match stored.image {
                Some(ImageField::Src(src)) => (Some(src), None),
                Some(ImageField::Variants { desktop, mobile }) => (desktop, mobile),
                Some(ImageField::Other(_)) | None => (None, None),
            };
            Self {
                desktop,
                mobile: mobile.or(stored.mobile_image),
            }
        }
    }
}
