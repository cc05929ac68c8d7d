// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-builder props to a rendered carousel frame.
//!
//! This example shows how to combine:
//! - `serde_json` to read the props a page builder stores for a carousel,
//! - `understory_banner` to drop banners without images and resolve their links,
//! - `understory_carousel` to pick the slides visible on a phone and on a desktop.
//!
//! Run:
//! - `cargo run -p understory_demos --example banner_props`

use serde::Deserialize;
use understory_banner::{Banner, Device, LinkTarget};
use understory_carousel::{Carousel, CarouselConfig, displayable};

/// Props as stored by the page builder: carousel settings plus the banner list.
#[derive(Debug, Deserialize)]
struct CarouselProps {
    #[serde(flatten)]
    config: CarouselConfig,
    #[serde(default)]
    banners: Vec<Banner>,
}

const PROPS: &str = r#"{
    "autoplay": true,
    "autoplaySpeed": "4",
    "itemsPerPage": "0:1 | 1024:2",
    "showArrows": true,
    "showDots": true,
    "height": 440,
    "banners": [
        {
            "image": "https://example.com/banners-01.png",
            "mobileImage": "https://example.com/banners-01-m.png",
            "description": "Summer sale",
            "externalRoute": true,
            "url": "https://example.com/summer"
        },
        {
            "description": "Draft banner, no image yet"
        },
        {
            "image": "https://example.com/banners-03.png",
            "description": "Running shoes",
            "page": "store.search",
            "params": "term=running,map=ft"
        },
        {
            "image": "https://example.com/banners-04.png",
            "description": "Gift cards",
            "customInternalURL": "/gift-cards"
        }
    ]
}"#;

fn main() -> Result<(), serde_json::Error> {
    let props: CarouselProps = serde_json::from_str(PROPS)?;
    let slides = displayable(&props.banners);
    println!(
        "{} of {} banners are displayable; breakpoints {}",
        slides.len(),
        props.banners.len(),
        props.config.breakpoints(),
    );

    for (device, width) in [(Device::Mobile, 375), (Device::Desktop, 1440)] {
        let carousel = Carousel::new(&props.config, slides.len(), width, 0);
        let Some(view) = carousel.view() else {
            println!("{device:?}: nothing to render");
            continue;
        };
        println!("{device:?} at {width}px, {} per page:", view.state.per_page);
        for index in view.visible_indices() {
            let banner = slides[index];
            let src = banner.image.source_for(device).unwrap_or("-");
            let link = match banner.target() {
                LinkTarget::External { url } => format!("opens {url}"),
                LinkTarget::Path { to } => format!("goes to {to}"),
                LinkTarget::Page { page, params } => format!("page {page} {params:?}"),
                LinkTarget::None => "no link".to_owned(),
            };
            println!("  [{index}] {:<14} {src} ({link})", banner.description);
        }
    }
    Ok(())
}
