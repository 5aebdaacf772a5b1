//! Wall-clock time values and the daily active window predicate.
//!
//! The active window is a half-open interval `[start, end)` in
//! minutes-since-midnight.  It does not cross midnight — `start < end` is
//! enforced by `MeterConfig::validate()`, not here.

/// A wall-clock time of day.  Produced fresh each cycle by the RTC driver.
///
/// Fields are expected to be in range (hour 0–23, minute 0–59); the clock
/// driver is responsible for rejecting garbage register reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    /// 00:00 — the fallback used when the RTC has never produced a reading.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Minutes elapsed since 00:00.
    pub const fn minutes_since_midnight(self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

impl core::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// The daily interval during which sound-reactive rendering is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl ActiveWindow {
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// True iff `now` falls inside `[start, end)`.
    ///
    /// Exactly `start` is active; exactly `end` is not.
    pub fn contains(&self, now: TimeOfDay) -> bool {
        let now = now.minutes_since_midnight();
        self.start.minutes_since_midnight() <= now && now < self.end.minutes_since_midnight()
    }
}
