//! Millisecond time source which must be implemented by calling code.

/// Free-running millisecond counter provided by the calling code.
///
/// Readings must never decrease, except for a single wrap from `u32::MAX`
/// back to zero, which the timers tolerate.
pub trait Clock {
    /// Milliseconds elapsed since program start.
    fn now_ms(&self) -> u32;
}

impl<T> Clock for &T
where
    T: Clock + ?Sized,
{
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Adapts a bare `millis()`-style function into a [`Clock`].
#[derive(Debug, Clone, Copy)]
pub struct FnClock(pub fn() -> u32);

impl Clock for FnClock {
    fn now_ms(&self) -> u32 {
        (self.0)()
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use core::cell::Cell;

    use super::Clock;

    /// Hand-cranked clock for tests.
    #[derive(Debug, Default)]
    pub(crate) struct MockClock {
        now: Cell<u32>,
    }

    impl MockClock {
        pub(crate) fn at(now: u32) -> Self {
            Self { now: Cell::new(now) }
        }

        pub(crate) fn set(&self, now: u32) {
            self.now.set(now);
        }

        pub(crate) fn advance(&self, millis: u32) {
            self.now.set(self.now.get().wrapping_add(millis));
        }
    }

    impl Clock for MockClock {
        fn now_ms(&self) -> u32 {
            self.now.get()
        }
    }
}
