//! Intervals and the AM/PM splitting of a single gesture.
//!
//! The 12-hour dial only ever reports a dial hour `0..11`. Whether a drag meant
//! the morning or the evening is decided here, by fanning the gesture out into
//! one interval per enabled band.

use serde::Serialize;

use crate::constants::{MINUTES_PER_DAY, MINUTES_PER_HALF_DAY};
use crate::layout::{Bands, LayoutMode};
use crate::time::Time;

/// A half-open `[start, end)` stretch of the day.
///
/// `end_time` is `None` while the gesture that produces it is still in
/// progress. An end before the start means the interval runs past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    pub start_time: Time,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Time>,
}

impl Interval {
    pub fn new(start_time: Time, end_time: Time) -> Self {
        Self {
            start_time,
            end_time: Some(end_time),
        }
    }

    /// A preview interval with only its start known.
    pub fn open(start_time: Time) -> Self {
        Self {
            start_time,
            end_time: None,
        }
    }

    pub fn is_committed(&self) -> bool {
        self.end_time.is_some()
    }

    /// Length in minutes, or `None` for a preview.
    pub fn duration_minutes(&self) -> Option<u32> {
        let end = self.end_time?;
        let start = self.start_time.total_minutes();
        let end = end.total_minutes();
        Some((end + MINUTES_PER_DAY - start) % MINUTES_PER_DAY)
    }

    /// Whether `time` falls in `[start, end)`. Previews contain nothing.
    pub fn contains(&self, time: Time) -> bool {
        let Some(end) = self.end_time else {
            return false;
        };
        let (start, end, t) = (
            self.start_time.total_minutes(),
            end.total_minutes(),
            time.total_minutes(),
        );
        if start <= end {
            start <= t && t < end
        } else {
            t >= start || t < end
        }
    }
}

/// Turn a snapped gesture into the intervals it selects.
///
/// On the 24-hour layout the pair is returned as is. On the 12-hour layout each
/// enabled band gets its own interval, AM first:
///
/// - AM keeps the dial start; the end moves into the afternoon when the drag
///   crossed 12 (dial end before dial start).
/// - PM shifts the start by 12 hours; the end is shifted too unless the drag
///   crossed 12, in which case it lands back in the morning.
///
/// With `end == None` one start-only interval per band is returned.
pub fn split(start: Time, end: Option<Time>, bands: Bands, layout: LayoutMode) -> Vec<Interval> {
    if !layout.is_twelve_hour() {
        return vec![Interval {
            start_time: start,
            end_time: end,
        }];
    }

    let dial_start = to_dial(start);
    let dial_end = end.map(to_dial);
    let wrapped = dial_end.is_some_and(|dial_end| dial_end < dial_start);

    let mut intervals = Vec::with_capacity(2);

    if bands.am() {
        let am_end = dial_end.map(|dial_end| {
            if wrapped {
                dial_end.shifted_hours(12)
            } else {
                dial_end
            }
        });
        intervals.push(Interval {
            start_time: dial_start,
            end_time: am_end,
        });
    }

    if bands.pm() {
        let pm_start = match dial_end {
            Some(_) => dial_start.shifted_hours(12),
            // Previews report the raw dial start for both bands.
            None => dial_start,
        };
        // -12 for the wrap and +12 for the band cancel out
        let pm_end = dial_end.map(|dial_end| {
            if wrapped {
                dial_end
            } else {
                dial_end.shifted_hours(12)
            }
        });
        intervals.push(Interval {
            start_time: pm_start,
            end_time: pm_end,
        });
    }

    intervals
}

/// Intervals covering every enabled band, used by the "select all" shortcut.
pub fn full_band_intervals(bands: Bands, layout: LayoutMode) -> Vec<Interval> {
    let last_minute = |start: u32, len: u32| Time::from_total_minutes(start + len - 1);

    if !layout.is_twelve_hour() {
        return vec![Interval::new(Time::MIDNIGHT, last_minute(0, MINUTES_PER_DAY))];
    }

    let mut intervals = Vec::with_capacity(2);
    if bands.am() {
        intervals.push(Interval::new(
            Time::MIDNIGHT,
            last_minute(0, MINUTES_PER_HALF_DAY),
        ));
    }
    if bands.pm() {
        intervals.push(Interval::new(
            Time::NOON,
            last_minute(MINUTES_PER_HALF_DAY, MINUTES_PER_HALF_DAY),
        ));
    }
    intervals
}

// Fold any hour onto the 12-hour dial (12 → 0, 14 → 2).
fn to_dial(time: Time) -> Time {
    Time::from_total_minutes(time.total_minutes() % MINUTES_PER_HALF_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hours: u32, minutes: u32) -> Time {
        Time::new(hours, minutes).unwrap()
    }

    #[test]
    fn test_twenty_four_hour_passthrough() {
        let intervals = split(t(22, 0), Some(t(3, 0)), Bands::BOTH, LayoutMode::TwentyFourHour);
        assert_eq!(intervals, vec![Interval::new(t(22, 0), t(3, 0))]);

        let preview = split(t(22, 0), None, Bands::BOTH, LayoutMode::TwentyFourHour);
        assert_eq!(preview, vec![Interval::open(t(22, 0))]);
    }

    #[test]
    fn test_drag_wrapping_past_twelve() {
        let intervals = split(t(9, 0), Some(t(2, 0)), Bands::BOTH, LayoutMode::TwelveHour);
        assert_eq!(
            intervals,
            vec![
                Interval::new(t(9, 0), t(14, 0)),
                Interval::new(t(21, 0), t(2, 0)),
            ]
        );
    }

    #[test]
    fn test_afternoon_end_folds_onto_dial() {
        let intervals = split(t(9, 0), Some(t(14, 0)), Bands::BOTH, LayoutMode::TwelveHour);
        assert_eq!(
            intervals,
            vec![
                Interval::new(t(9, 0), t(14, 0)),
                Interval::new(t(21, 0), t(2, 0)),
            ]
        );
    }

    #[test]
    fn test_drag_without_wrap() {
        let intervals = split(t(1, 30), Some(t(4, 45)), Bands::BOTH, LayoutMode::TwelveHour);
        assert_eq!(
            intervals,
            vec![
                Interval::new(t(1, 30), t(4, 45)),
                Interval::new(t(13, 30), t(16, 45)),
            ]
        );
    }

    #[test]
    fn test_same_hour_earlier_minutes_wraps() {
        let intervals = split(t(5, 40), Some(t(5, 10)), Bands::BOTH, LayoutMode::TwelveHour);
        assert_eq!(
            intervals,
            vec![
                Interval::new(t(5, 40), t(17, 10)),
                Interval::new(t(17, 40), t(5, 10)),
            ]
        );
    }

    #[test]
    fn test_single_band() {
        let am = split(t(9, 0), Some(t(2, 0)), Bands::AM_ONLY, LayoutMode::TwelveHour);
        assert_eq!(am, vec![Interval::new(t(9, 0), t(14, 0))]);

        let pm = split(t(9, 0), Some(t(11, 0)), Bands::PM_ONLY, LayoutMode::TwelveHour);
        assert_eq!(pm, vec![Interval::new(t(21, 0), t(23, 0))]);
    }

    #[test]
    fn test_hour_twelve_reads_as_zero() {
        let intervals = split(t(12, 0), Some(t(3, 0)), Bands::AM_ONLY, LayoutMode::TwelveHour);
        assert_eq!(intervals, vec![Interval::new(t(0, 0), t(3, 0))]);
    }

    #[test]
    fn test_preview_one_per_band() {
        let preview = split(t(7, 15), None, Bands::BOTH, LayoutMode::TwelveHour);
        assert_eq!(
            preview,
            vec![Interval::open(t(7, 15)), Interval::open(t(7, 15))]
        );
        assert!(preview.iter().all(|interval| !interval.is_committed()));

        let pm_preview = split(t(7, 15), None, Bands::PM_ONLY, LayoutMode::TwelveHour);
        assert_eq!(pm_preview.len(), 1);
    }

    #[test]
    fn test_full_band_intervals() {
        assert_eq!(
            full_band_intervals(Bands::PM_ONLY, LayoutMode::TwelveHour),
            vec![Interval::new(t(12, 0), t(23, 59))]
        );
        assert_eq!(
            full_band_intervals(Bands::BOTH, LayoutMode::TwelveHour),
            vec![
                Interval::new(t(0, 0), t(11, 59)),
                Interval::new(t(12, 0), t(23, 59)),
            ]
        );
        assert_eq!(
            full_band_intervals(Bands::AM_ONLY, LayoutMode::TwentyFourHour),
            vec![Interval::new(t(0, 0), t(23, 59))]
        );
    }

    #[test]
    fn test_contains_is_half_open() {
        let morning = Interval::new(t(9, 0), t(12, 0));
        assert!(morning.contains(t(9, 0)));
        assert!(morning.contains(t(11, 59)));
        assert!(!morning.contains(t(12, 0)));

        let overnight = Interval::new(t(21, 0), t(2, 0));
        assert!(overnight.contains(t(23, 30)));
        assert!(overnight.contains(t(1, 0)));
        assert!(!overnight.contains(t(2, 0)));
        assert!(!overnight.contains(t(12, 0)));

        assert!(!Interval::open(t(9, 0)).contains(t(9, 0)));
    }

    #[test]
    fn test_duration_minutes() {
        assert_eq!(Interval::new(t(9, 0), t(14, 0)).duration_minutes(), Some(300));
        assert_eq!(Interval::new(t(21, 0), t(2, 0)).duration_minutes(), Some(300));
        assert_eq!(Interval::open(t(9, 0)).duration_minutes(), None);
    }

    #[test]
    fn test_serializes_widget_payload_shape() {
        let json = serde_json::to_string(&Interval::new(t(9, 0), t(14, 30))).unwrap();
        assert_eq!(
            json,
            r#"{"startTime":{"hours":9,"minutes":0},"endTime":{"hours":14,"minutes":30}}"#
        );

        let preview = serde_json::to_string(&Interval::open(t(9, 0))).unwrap();
        assert_eq!(preview, r#"{"startTime":{"hours":9,"minutes":0}}"#);
    }
}
