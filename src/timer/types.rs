//! Identities and construction-time options of a polling timer.

use crate::Error;

/// Logical purpose of a timer, handed back to a shared callback so it can
/// tell which timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TimerId {
    /// Blinking and state machine clock, typically one second.
    Slow = 0,
    /// Flashing and current sensing, typically around 100 ms.
    Fast = 1,
}

impl From<TimerId> for u8 {
    fn from(id: TimerId) -> Self {
        id as u8
    }
}

impl TryFrom<u8> for TimerId {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TimerId::Slow),
            1 => Ok(TimerId::Fast),
            other => Err(Error::UnknownTimerId(other)),
        }
    }
}

/// Options a timer is built from, apart from its clock and callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerConfig {
    /// Logical purpose of the timer.
    pub id: TimerId,
    /// Firing period in milliseconds; zero fires on every poll.
    pub interval_ms: u32,
    /// Whether firing dispatches the callback.
    #[cfg_attr(feature = "serde", serde(default = "enabled_by_default"))]
    pub enabled: bool,
}

#[cfg(feature = "serde")]
fn enabled_by_default() -> bool {
    true
}

impl TimerConfig {
    /// Creation, enabled.
    pub fn new(id: TimerId, interval_ms: u32) -> Self {
        Self { id, interval_ms, enabled: true }
    }

    /// Same options, with the given enabled state.
    pub fn enabled(self, enabled: bool) -> Self {
        Self { enabled, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_id_from_raw() {
        assert_eq!(TimerId::try_from(0), Ok(TimerId::Slow));
        assert_eq!(TimerId::try_from(1), Ok(TimerId::Fast));
        assert_eq!(TimerId::try_from(2), Err(Error::UnknownTimerId(2)));
        assert_eq!(TimerId::try_from(0xff), Err(Error::UnknownTimerId(0xff)));
    }

    #[test]
    fn timer_id_to_raw() {
        assert_eq!(u8::from(TimerId::Slow), 0);
        assert_eq!(u8::from(TimerId::Fast), 1);
    }

    #[test]
    fn config_defaults_to_enabled() {
        let config = TimerConfig::new(TimerId::Fast, 100);
        assert!(config.enabled);
        assert_eq!(config.interval_ms, 100);

        let disabled = config.enabled(false);
        assert!(!disabled.enabled);
        assert_eq!(disabled.id, TimerId::Fast);
    }
}
