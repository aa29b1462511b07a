#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub(crate) mod fmt;

pub mod bank;
pub mod clock;
pub mod timer;

pub use bank::poll_all;
pub use clock::{Clock, FnClock};
pub use timer::types::{TimerConfig, TimerId};
pub use timer::{Callback, PollingTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum Error {
    UnknownTimerId(u8),
}
