//! Main loop helper for a fixed set of timers.

use heapless::Vec;

use crate::clock::Clock;
use crate::timer::{types::TimerId, PollingTimer};

/// Poll every timer once, in slice order, and collect the ids of those that
/// fired.
///
/// Every timer is polled even when more than `N` fire; ids past the capacity
/// are dropped from the result.
pub fn poll_all<C, const N: usize>(timers: &mut [PollingTimer<C>]) -> Vec<TimerId, N>
where
    C: Clock,
{
    let mut fired = Vec::new();
    for timer in timers.iter_mut() {
        if timer.poll() && fired.push(timer.id()).is_err() {
            warn!("fired list full, dropping {}", timer.id());
        }
    }
    fired
}
