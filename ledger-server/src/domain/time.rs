//! Time-of-day handling.
//!
//! Departure times and query windows are given as "HH:MM" strings at
//! minute granularity. The ledger assumes every journey completes on the
//! day it starts, so no date is attached.

use std::fmt;

use chrono::{NaiveTime, Timelike};

/// Minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day at minute granularity.
///
/// Stored as minutes since midnight, always below [`MINUTES_PER_DAY`].
///
/// # Examples
///
/// ```
/// use ledger_server::domain::ClockTime;
///
/// let time = ClockTime::parse_hhmm("08:30").unwrap();
/// assert_eq!(time.minutes(), 510);
/// assert_eq!(time.to_string(), "08:30");
///
/// assert!(ClockTime::parse_hhmm("0830").is_err());
/// assert!(ClockTime::parse_hhmm("24:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Parse a time from "HH:MM" format.
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(TimeError::new("expected HH:MM format"));
        }
        // chrono also accepts one-digit fields and leading spaces
        if !bytes[..2].iter().chain(&bytes[3..]).all(u8::is_ascii_digit) {
            return Err(TimeError::new("expected two-digit hour and minute"));
        }

        NaiveTime::parse_from_str(s, "%H:%M")
            .map(Self::from_naive_time)
            .map_err(|_| TimeError::new("hour must be 0-23 and minute 0-59"))
    }

    /// Convert from a chrono time, dropping seconds and sub-seconds.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    /// Returns the hour (0-23).
    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    /// Returns the minute (0-59).
    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
