//! Interval timer advanced by explicit polling from the application main loop.

pub mod types;

use crate::clock::Clock;
use types::*;

/// Notification target of a timer, called with the timer that fired.
///
/// The callback may read [`PollingTimer::id`] to tell timers sharing it apart,
/// and may reconfigure the timer it was handed.
pub type Callback<C> = fn(&mut PollingTimer<C>);

/// Cooperative timer that fires when its interval has elapsed on the clock.
///
/// Nothing happens between calls to [`poll`](Self::poll); the caller has to
/// poll at least as often as the interval for the timer to be punctual.
#[derive(Debug)]
pub struct PollingTimer<C>
where
    C: Clock,
{
    id: TimerId,
    clock: C,
    interval: u32,
    last_fired_at: u32,
    enabled: bool,
    callback: Option<Callback<C>>,
}

impl<C> PollingTimer<C>
where
    C: Clock,
{
    /// Creation, enabled. The countdown starts now.
    pub fn new(clock: C, id: TimerId, interval: u32, callback: Option<Callback<C>>) -> Self {
        Self::with_enabled(clock, id, interval, callback, true)
    }

    /// Creation with an explicit enabled state. The countdown starts now.
    pub fn with_enabled(
        clock: C,
        id: TimerId,
        interval: u32,
        callback: Option<Callback<C>>,
        enabled: bool,
    ) -> Self {
        let mut timer = Self { id, clock, interval, last_fired_at: 0, enabled, callback };
        timer.set_interval(interval);
        timer
    }

    /// Creation from stored options.
    pub fn from_config(clock: C, config: TimerConfig, callback: Option<Callback<C>>) -> Self {
        Self::with_enabled(clock, config.id, config.interval_ms, callback, config.enabled)
    }

    /// Get the logical purpose of this timer.
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Get the interval in milliseconds.
    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Get the clock reading of the last construction, interval change or fire.
    pub fn last_fired_at(&self) -> u32 {
        self.last_fired_at
    }

    /// Will a fire dispatch the callback?
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Is a callback assigned?
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Get the current options of this timer.
    pub fn config(&self) -> TimerConfig {
        TimerConfig { id: self.id, interval_ms: self.interval, enabled: self.enabled }
    }

    /// Replace the interval and restart the countdown from now.
    ///
    /// An interval that had already run out but was not yet polled is
    /// discarded.
    pub fn set_interval(&mut self, interval: u32) {
        self.interval = interval;
        self.last_fired_at = self.clock.now_ms();
        trace!("timer {} interval {} from {}", self.id, interval, self.last_fired_at);
    }

    /// Gate the callback. Elapsed intervals are still detected while disabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Replace the callback, or remove it with `None`.
    pub fn set_callback(&mut self, callback: Option<Callback<C>>) {
        self.callback = callback;
    }

    /// Milliseconds since the last construction, interval change or fire.
    ///
    /// Correct across a single wrap of the clock.
    pub fn elapsed(&self) -> u32 {
        self.clock.now_ms().wrapping_sub(self.last_fired_at)
    }

    /// Milliseconds until the next poll fires; zero if it would fire now.
    pub fn remaining(&self) -> u32 {
        self.interval.saturating_sub(self.elapsed())
    }

    /// Check whether the interval has elapsed and, if so, start the next one
    /// and dispatch the callback.
    ///
    /// Returns `true` on a fire even when the timer is disabled or has no
    /// callback. A gap spanning several intervals is reported as one fire.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now_ms();
        let elapsed = now.wrapping_sub(self.last_fired_at);
        if elapsed < self.interval {
            return false;
        }

        self.last_fired_at = now;
        trace!("timer {} fired after {}", self.id, elapsed);
        let callback = self.callback;
        match callback {
            Some(callback) if self.enabled => callback(self),
            Some(_) => {}
            None => debug!("timer {} fired without callback", self.id),
        }
        true
    }
}
