// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay, hover, and resize driven from a simulated host event loop.
//!
//! This example shows how a host:
//! - mounts an `understory_carousel::Carousel` with authored settings,
//! - feeds it frames, pointer hover, arrow clicks, and viewport resizes,
//! - renders from `Carousel::view` after every event.
//!
//! Run:
//! - `RUST_LOG=understory_carousel=trace cargo run -p understory_demos --example carousel_autoplay`

use tracing_subscriber::EnvFilter;
use understory_carousel::{AutoplaySpeed, Carousel, CarouselConfig};

/// Host-side events, timestamped in milliseconds.
#[derive(Clone, Copy, Debug)]
enum Event {
    Frame,
    HoverStart,
    HoverEnd,
    Next,
    Previous,
    Dot(usize),
    Resize(u32),
    SlideCount(usize),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = CarouselConfig {
        autoplay_speed: AutoplaySpeed::Seconds(1.0),
        items_per_page: Some("0:1|768:2|1280:3".into()),
        ..CarouselConfig::default()
    };
    let mut carousel = Carousel::new(&config, 6, 1024, 0);
    render(0, "mount", &carousel);

    let script = [
        (1_000, Event::Frame),
        (1_500, Event::HoverStart),
        (2_000, Event::Frame),
        (2_200, Event::Next),
        (2_400, Event::Dot(5)),
        (3_000, Event::HoverEnd),
        (3_500, Event::Frame),
        (4_000, Event::Frame),
        (4_100, Event::Resize(1440)),
        (4_200, Event::Previous),
        (5_200, Event::Frame),
        (5_300, Event::Resize(375)),
        (6_200, Event::Frame),
        (6_300, Event::SlideCount(0)),
        (7_300, Event::Frame),
        (7_400, Event::SlideCount(4)),
        (8_400, Event::Frame),
    ];

    for (now, event) in script {
        match event {
            Event::Frame => {
                if !carousel.on_frame(now) {
                    continue;
                }
            }
            Event::HoverStart => carousel.hover_start(),
            Event::HoverEnd => carousel.hover_end(now),
            Event::Next => report(carousel.next(now)),
            Event::Previous => report(carousel.previous(now)),
            Event::Dot(index) => report(carousel.select(index, now)),
            Event::Resize(width) => carousel.resize(width, now),
            Event::SlideCount(count) => carousel.set_slide_count(count, now),
        }
        render(now, &format!("{event:?}"), &carousel);
    }

    carousel.unmount();
    assert!(!carousel.on_frame(u64::MAX));
    println!("unmounted; autoplay armed: {}", carousel.autoplay().is_armed());
}

fn report<E: std::fmt::Display>(result: Result<usize, E>) {
    if let Err(err) = result {
        println!("  rejected: {err}");
    }
}

fn render(now: u64, label: &str, carousel: &Carousel) {
    let Some(view) = carousel.view() else {
        println!("{now:>5}ms {label:<14} (nothing to render)");
        return;
    };
    let window: Vec<String> = view.visible_indices().map(|i| i.to_string()).collect();
    let dots: String = view
        .dots()
        .map(|dot| if dot.active { '●' } else { '○' })
        .collect();
    println!(
        "{now:>5}ms {label:<14} slides [{}] of {}  {dots}",
        window.join(" "),
        view.state.slide_count,
    );
}
