//! Wall-clock time of day on a 24-hour clock.

use anyhow::{Context, Result};
use chrono::{NaiveTime, Timelike};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::constants::{HOURS_PER_DAY, MINUTES_PER_DAY, MINUTES_PER_HOUR};

/// A normalized `{hours, minutes}` pair, `00:00` through `23:59`.
///
/// The value always describes a point on the 24-hour clock, whichever dial
/// layout produced it. Construction goes through [`Time::new`] or
/// [`Time::from_total_minutes`], so an instance can never hold `24:00` or a
/// minute value of 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Time {
    hours: u32,
    minutes: u32,
}

impl Time {
    pub const MIDNIGHT: Time = Time {
        hours: 0,
        minutes: 0,
    };
    pub const NOON: Time = Time {
        hours: 12,
        minutes: 0,
    };

    /// Create a time, returning `None` when either field is out of range.
    pub const fn new(hours: u32, minutes: u32) -> Option<Self> {
        if hours < HOURS_PER_DAY && minutes < MINUTES_PER_HOUR {
            Some(Self { hours, minutes })
        } else {
            None
        }
    }

    /// Build a time from minutes since midnight, wrapping at 1440 so that a
    /// value of exactly one day becomes `00:00`.
    pub const fn from_total_minutes(total: u32) -> Self {
        let total = total % MINUTES_PER_DAY;
        Self {
            hours: total / MINUTES_PER_HOUR,
            minutes: total % MINUTES_PER_HOUR,
        }
    }

    pub const fn hours(&self) -> u32 {
        self.hours
    }

    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Minutes since midnight, `0..1440`.
    pub const fn total_minutes(&self) -> u32 {
        self.hours * MINUTES_PER_HOUR + self.minutes
    }

    /// True for times from `12:00` onwards.
    pub const fn is_pm(&self) -> bool {
        self.hours >= 12
    }

    /// Same minute, shifted by whole hours around the 24-hour clock.
    pub(crate) const fn shifted_hours(self, hours: u32) -> Self {
        Self {
            hours: (self.hours + hours) % HOURS_PER_DAY,
            minutes: self.minutes,
        }
    }

    /// Format as `HH:MM`, optionally rendering hour 0 as 12 for a 12-hour face.
    pub fn format_clock(&self, twelve_hour_face: bool) -> String {
        let hours = if twelve_hour_face && self.hours == 0 {
            12
        } else {
            self.hours
        };
        format!("{:02}:{:02}", hours, self.minutes)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for Time {
    type Err = anyhow::Error;

    /// Parse `HH:MM` (24-hour clock).
    fn from_str(s: &str) -> Result<Self> {
        let parsed = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .with_context(|| format!("Invalid time '{s}', expected HH:MM"))?;
        Ok(Self::from(parsed))
    }
}

impl From<NaiveTime> for Time {
    /// Seconds and below are dropped.
    fn from(value: NaiveTime) -> Self {
        Self {
            hours: value.hour(),
            minutes: value.minute(),
        }
    }
}

impl From<Time> for NaiveTime {
    fn from(value: Time) -> Self {
        NaiveTime::from_hms_opt(value.hours, value.minutes, 0).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Time::new(23, 59).is_some());
        assert!(Time::new(24, 0).is_none());
        assert!(Time::new(0, 60).is_none());
    }

    #[test]
    fn test_from_total_minutes_wraps_midnight() {
        assert_eq!(Time::from_total_minutes(1440), Time::MIDNIGHT);
        assert_eq!(Time::from_total_minutes(1439), Time::new(23, 59).unwrap());
        assert_eq!(Time::from_total_minutes(125).total_minutes(), 125);
    }

    #[test]
    fn test_parse_and_display() {
        let time: Time = "09:05".parse().unwrap();
        assert_eq!(time, Time::new(9, 5).unwrap());
        assert_eq!(time.to_string(), "09:05");

        assert!("25:00".parse::<Time>().is_err());
        assert!("noon".parse::<Time>().is_err());
    }

    #[test]
    fn test_format_clock_twelve_hour_face() {
        assert_eq!(Time::MIDNIGHT.format_clock(true), "12:00");
        assert_eq!(Time::MIDNIGHT.format_clock(false), "00:00");
        assert_eq!(Time::new(3, 7).unwrap().format_clock(true), "03:07");
    }

    #[test]
    fn test_naive_time_conversion() {
        let naive = NaiveTime::from_hms_opt(18, 30, 45).unwrap();
        let time = Time::from(naive);
        assert_eq!(time, Time::new(18, 30).unwrap());
        assert_eq!(
            NaiveTime::from(time),
            NaiveTime::from_hms_opt(18, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_shifted_hours_wraps() {
        let time = Time::new(21, 15).unwrap();
        assert_eq!(time.shifted_hours(12), Time::new(9, 15).unwrap());
        assert!(time.is_pm());
    }
}
