// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay scheduling driven by host-supplied timestamps.
//!
//! [`Autoplay`] never reads a clock and never spawns anything. The host passes a
//! monotonic timestamp in milliseconds to every call that depends on time and polls
//! the scheduler from its own event loop:
//!
//! ```
//! use core::num::NonZeroU64;
//! use understory_carousel::{Autoplay, AutoplayConfig};
//!
//! let config = AutoplayConfig::with_interval(NonZeroU64::new(1000).unwrap());
//! let mut autoplay = Autoplay::new(config);
//! assert!(autoplay.arm(0, 3));
//!
//! assert!(!autoplay.poll(999));
//! assert!(autoplay.poll(1000));
//! // The next tick is one full interval after the last one.
//! assert_eq!(autoplay.deadline(), Some(2000));
//!
//! // Hovering pauses; leaving restarts the countdown from that moment.
//! autoplay.pause();
//! assert!(!autoplay.poll(5000));
//! autoplay.resume(5000, 3);
//! assert!(autoplay.poll(6000));
//! ```
//!
//! The timer is just a deadline owned by the scheduler, so disarming is idempotent
//! and dropping the scheduler cannot leave a callback behind.

use alloc::string::String;
use core::num::NonZeroU64;

use crate::util::leading_decimal;

/// How long each slide stays before autoplay moves on, as authored in configuration.
///
/// Page builders store this either as a number of seconds or as free-form text.
/// Text is read leniently: the leading decimal number counts and anything after it
/// is ignored, so `"4.5s"` is four and a half seconds.
///
/// With the `serde` feature, `null` reads as [`Unset`](Self::Unset).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AutoplaySpeed {
    /// A number of seconds.
    Seconds(f64),
    /// Text holding a number of seconds.
    Text(String),
    /// No usable value was authored; autoplay cannot run.
    Unset,
}

impl AutoplaySpeed {
    /// Converts the speed to a timer interval.
    ///
    /// Returns `None` for values that cannot drive a timer: unparseable text, NaN,
    /// infinities, zero or negative durations, and durations that round to zero
    /// milliseconds.
    #[must_use]
    pub fn interval(&self) -> Option<NonZeroU64> {
        let seconds = match self {
            Self::Seconds(s) => *s,
            Self::Text(text) => leading_decimal(text)?,
            Self::Unset => return None,
        };
        if !seconds.is_finite() || seconds <= 0.0 {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "value is finite and positive; `as` saturates at u64::MAX"
        )]
        let millis = (seconds * 1000.0 + 0.5) as u64;
        NonZeroU64::new(millis)
    }
}

impl Default for AutoplaySpeed {
    fn default() -> Self {
        Self::Seconds(5.0)
    }
}

impl From<f64> for AutoplaySpeed {
    fn from(seconds: f64) -> Self {
        Self::Seconds(seconds)
    }
}

impl From<&str> for AutoplaySpeed {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

/// Resolved autoplay settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoplayConfig {
    /// Whether slides advance on their own.
    pub enabled: bool,
    /// Time between automatic advances; `None` disables autoplay.
    pub interval: Option<NonZeroU64>,
    /// Whether hovering the carousel pauses autoplay.
    pub pause_on_hover: bool,
}

impl AutoplayConfig {
    /// Autoplay turned off.
    pub const DISABLED: Self = Self {
        enabled: false,
        interval: None,
        pause_on_hover: true,
    };

    /// Enabled autoplay with the given interval in milliseconds, pausing on hover.
    #[must_use]
    pub const fn with_interval(interval: NonZeroU64) -> Self {
        Self {
            enabled: true,
            interval: Some(interval),
            pause_on_hover: true,
        }
    }

    /// Builds settings from authored values.
    ///
    /// A speed that cannot drive a timer turns autoplay off instead of failing.
    #[must_use]
    pub fn from_speed(enabled: bool, speed: &AutoplaySpeed) -> Self {
        let interval = speed.interval();
        if enabled && interval.is_none() {
            tracing::debug!(?speed, "unusable autoplay speed; autoplay disabled");
        }
        Self {
            enabled,
            interval,
            pause_on_hover: true,
        }
    }

    /// Returns the interval when autoplay can actually run.
    #[must_use]
    pub const fn active_interval(&self) -> Option<NonZeroU64> {
        if self.enabled { self.interval } else { None }
    }
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self::from_speed(true, &AutoplaySpeed::default())
    }
}

/// Timer state for automatic slide advancement.
///
/// At most one deadline is live at a time. The scheduler is armed only when
/// autoplay is enabled, the interval is positive, there is at least one slide, and
/// the carousel is not hovered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Autoplay {
    config: AutoplayConfig,
    deadline: Option<u64>,
    paused: bool,
}

impl Autoplay {
    /// Creates a disarmed scheduler.
    #[must_use]
    pub const fn new(config: AutoplayConfig) -> Self {
        Self {
            config,
            deadline: None,
            paused: false,
        }
    }

    /// Returns the settings this scheduler runs with.
    #[must_use]
    pub const fn config(&self) -> &AutoplayConfig {
        &self.config
    }

    /// Replaces the settings.
    ///
    /// A running timer restarts from `now` with the new interval, or is disarmed when
    /// the new settings cannot run. Turning off pause on hover ends a hover pause.
    pub fn set_config(&mut self, config: AutoplayConfig, now: u64, slide_count: usize) {
        self.config = config;
        if !config.pause_on_hover {
            self.paused = false;
        }
        if self.deadline.is_some() {
            self.disarm();
            self.arm(now, slide_count);
        }
    }

    /// Arms the timer so the first tick lands one interval after `now`.
    ///
    /// Returns `true` if the timer is armed afterwards. Arming an already armed timer
    /// keeps the existing deadline.
    pub fn arm(&mut self, now: u64, slide_count: usize) -> bool {
        if self.deadline.is_some() {
            return true;
        }
        let Some(interval) = self.config.active_interval() else {
            return false;
        };
        if slide_count == 0 || self.paused {
            return false;
        }
        let deadline = now.saturating_add(interval.get());
        tracing::trace!(deadline, "autoplay armed");
        self.deadline = Some(deadline);
        true
    }

    /// Disarms the timer. Disarming an idle timer is a no-op.
    pub fn disarm(&mut self) {
        if self.deadline.take().is_some() {
            tracing::trace!("autoplay disarmed");
        }
    }

    /// Restarts the countdown from `now` if the timer is armed.
    ///
    /// Used after a manual navigation so a tick does not land right after it.
    pub fn restart(&mut self, now: u64) {
        if let (Some(deadline), Some(interval)) =
            (self.deadline.as_mut(), self.config.active_interval())
        {
            *deadline = now.saturating_add(interval.get());
        }
    }

    /// Pauses autoplay, for example while the pointer hovers the carousel.
    ///
    /// Does nothing when the settings do not pause on hover.
    pub fn pause(&mut self) {
        if !self.config.pause_on_hover {
            return;
        }
        self.paused = true;
        self.disarm();
    }

    /// Ends a pause and re-arms the timer so the next tick is one interval after `now`.
    ///
    /// Returns `true` if the timer is armed afterwards.
    pub fn resume(&mut self, now: u64, slide_count: usize) -> bool {
        self.paused = false;
        self.arm(now, slide_count)
    }

    /// Reports whether a tick is due at `now`.
    ///
    /// When it is, the next deadline becomes `now + interval`; a late poll fires once
    /// rather than catching up on missed ticks.
    pub fn poll(&mut self, now: u64) -> bool {
        let (Some(deadline), Some(interval)) = (self.deadline, self.config.active_interval())
        else {
            return false;
        };
        if now < deadline {
            return false;
        }
        self.deadline = Some(now.saturating_add(interval.get()));
        true
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` while paused by hover.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns the pending deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroU64;

    use super::{Autoplay, AutoplayConfig, AutoplaySpeed};

    fn every(ms: u64) -> AutoplayConfig {
        AutoplayConfig::with_interval(NonZeroU64::new(ms).unwrap())
    }

    #[test]
    fn seconds_become_milliseconds() {
        assert_eq!(AutoplaySpeed::Seconds(5.0).interval().unwrap().get(), 5000);
        assert_eq!(AutoplaySpeed::Seconds(0.25).interval().unwrap().get(), 250);
        assert_eq!(AutoplaySpeed::from("4").interval().unwrap().get(), 4000);
        assert_eq!(AutoplaySpeed::from(" 4.5s").interval().unwrap().get(), 4500);
    }

    #[test]
    fn unusable_speeds_disable_autoplay() {
        for speed in [
            AutoplaySpeed::Seconds(0.0),
            AutoplaySpeed::Seconds(-3.0),
            AutoplaySpeed::Seconds(f64::NAN),
            AutoplaySpeed::Seconds(f64::INFINITY),
            AutoplaySpeed::Seconds(0.0001),
            AutoplaySpeed::from("fast"),
            AutoplaySpeed::from(""),
            AutoplaySpeed::Unset,
        ] {
            assert_eq!(speed.interval(), None, "{speed:?}");
            let config = AutoplayConfig::from_speed(true, &speed);
            assert_eq!(config.active_interval(), None);
        }
    }

    #[test]
    fn default_config_runs_every_five_seconds() {
        let config = AutoplayConfig::default();
        assert!(config.enabled);
        assert!(config.pause_on_hover);
        assert_eq!(config.active_interval().unwrap().get(), 5000);
    }

    #[test]
    fn arming_requires_enabled_interval_and_slides() {
        let mut autoplay = Autoplay::new(AutoplayConfig::DISABLED);
        assert!(!autoplay.arm(0, 3));

        let mut off = every(1000);
        off.enabled = false;
        let mut autoplay = Autoplay::new(off);
        assert!(!autoplay.arm(0, 3));

        let mut autoplay = Autoplay::new(every(1000));
        assert!(!autoplay.arm(0, 0));
        assert!(autoplay.arm(0, 1));
        assert_eq!(autoplay.deadline(), Some(1000));
    }

    #[test]
    fn rearming_keeps_the_pending_deadline() {
        let mut autoplay = Autoplay::new(every(1000));
        autoplay.arm(0, 2);
        autoplay.arm(600, 2);
        assert_eq!(autoplay.deadline(), Some(1000));
    }

    #[test]
    fn ticks_repeat_every_interval() {
        let mut autoplay = Autoplay::new(every(1000));
        autoplay.arm(0, 3);
        let fired: usize = (0..=3500).step_by(100).filter(|&t| autoplay.poll(t)).count();
        assert_eq!(fired, 3);
    }

    #[test]
    fn late_poll_fires_once() {
        let mut autoplay = Autoplay::new(every(1000));
        autoplay.arm(0, 3);
        assert!(autoplay.poll(4200));
        assert!(!autoplay.poll(4300));
        assert_eq!(autoplay.deadline(), Some(5200));
    }

    #[test]
    fn hover_before_first_tick_holds_until_hover_ends() {
        let mut autoplay = Autoplay::new(every(1000));
        autoplay.arm(0, 3);

        autoplay.pause();
        assert!(autoplay.is_paused());
        assert!(!autoplay.is_armed());
        assert!(!autoplay.poll(1000));
        assert!(!autoplay.poll(10_000));

        // A paused scheduler refuses to arm.
        assert!(!autoplay.arm(10_000, 3));

        assert!(autoplay.resume(12_000, 3));
        assert!(!autoplay.poll(12_999));
        assert!(autoplay.poll(13_000));
    }

    #[test]
    fn dropping_pause_on_hover_ends_a_hover_pause() {
        let mut autoplay = Autoplay::new(every(1000));
        autoplay.arm(0, 3);
        autoplay.pause();
        assert!(!autoplay.is_armed());

        let mut config = every(1000);
        config.pause_on_hover = false;
        autoplay.set_config(config, 2000, 3);
        assert!(!autoplay.is_paused());
        // The carousel re-arms after applying settings.
        assert!(autoplay.arm(2000, 3));
        assert!(autoplay.poll(3000));
    }

    #[test]
    fn pause_is_ignored_without_pause_on_hover() {
        let mut config = every(1000);
        config.pause_on_hover = false;
        let mut autoplay = Autoplay::new(config);
        autoplay.arm(0, 3);
        autoplay.pause();
        assert!(autoplay.poll(1000));
    }

    #[test]
    fn disarm_is_idempotent() {
        let mut autoplay = Autoplay::new(every(1000));
        autoplay.disarm();
        autoplay.arm(0, 3);
        autoplay.disarm();
        autoplay.disarm();
        assert!(!autoplay.is_armed());
        assert!(!autoplay.poll(5000));
    }

    #[test]
    fn restart_pushes_the_deadline_out() {
        let mut autoplay = Autoplay::new(every(1000));
        autoplay.restart(500);
        assert_eq!(autoplay.deadline(), None);

        autoplay.arm(0, 3);
        autoplay.restart(900);
        assert_eq!(autoplay.deadline(), Some(1900));
    }

    #[test]
    fn new_config_restarts_or_disarms() {
        let mut autoplay = Autoplay::new(every(1000));
        autoplay.arm(0, 3);
        autoplay.set_config(every(250), 100, 3);
        assert_eq!(autoplay.deadline(), Some(350));

        autoplay.set_config(AutoplayConfig::DISABLED, 200, 3);
        assert!(!autoplay.is_armed());
    }
}
