//! Snapping raw times onto the configured tick grid.

use anyhow::Result;

use crate::constants::{MAXIMUM_TICK_MINUTES, MINIMUM_TICK_MINUTES, MINUTES_PER_DAY};
use crate::time::Time;

/// Ascending total-minute ticks covering `[0, 1440]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickGrid {
    ticks: Vec<u32>,
}

impl TickGrid {
    /// Ticks `0, g, 2g, …` up to a day.
    ///
    /// When `g` does not divide 1440 evenly the grid is closed with a final
    /// 1440 tick, so the last partial step still snaps somewhere.
    pub fn new(granularity_minutes: u32) -> Result<Self> {
        if !(MINIMUM_TICK_MINUTES..=MAXIMUM_TICK_MINUTES).contains(&granularity_minutes) {
            anyhow::bail!(
                "tick granularity ({} minutes) must be between {} and {} minutes",
                granularity_minutes,
                MINIMUM_TICK_MINUTES,
                MAXIMUM_TICK_MINUTES
            );
        }

        let mut ticks: Vec<u32> = (0..=MINUTES_PER_DAY)
            .step_by(granularity_minutes as usize)
            .collect();
        if ticks.last() != Some(&MINUTES_PER_DAY) {
            ticks.push(MINUTES_PER_DAY);
        }

        Ok(Self { ticks })
    }

    /// Use an explicit tick list. It must be strictly ascending, start at 0 and
    /// end at 1440.
    pub fn from_ticks(ticks: Vec<u32>) -> Result<Self> {
        if ticks.first() != Some(&0) || ticks.last() != Some(&MINUTES_PER_DAY) {
            anyhow::bail!("ticks must start at 0 and end at {} minutes", MINUTES_PER_DAY);
        }
        if ticks.windows(2).any(|pair| pair[0] >= pair[1]) {
            anyhow::bail!("ticks must be strictly ascending");
        }
        Ok(Self { ticks })
    }

    pub fn ticks(&self) -> &[u32] {
        &self.ticks
    }

    /// Whether `minute` (since midnight) is one of the ticks.
    pub fn covers(&self, minute: u32) -> bool {
        self.ticks.binary_search(&minute).is_ok()
    }

    /// Nearest tick to `time`. Equal distances go to the earlier tick.
    pub fn snap(&self, time: Time) -> Time {
        let total = time.total_minutes();

        // First tick at or after `total`; its predecessor brackets from below.
        let upper = self.ticks.partition_point(|&tick| tick < total);
        let snapped = match upper {
            0 => self.ticks[0],
            i if i >= self.ticks.len() => self.ticks[self.ticks.len() - 1],
            i => {
                let (t, t_next) = (self.ticks[i - 1], self.ticks[i]);
                if total - t <= t_next - total { t } else { t_next }
            }
        };

        // 1440 wraps back to midnight
        Time::from_total_minutes(snapped)
    }
}

/// Free-function form of [`TickGrid::snap`].
pub fn snap(time: Time, ticks: &TickGrid) -> Time {
    ticks.snap(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::test_constants::*;

    fn t(hours: u32, minutes: u32) -> Time {
        Time::new(hours, minutes).unwrap()
    }

    #[test]
    fn test_snap_rounds_down_below_midpoint() {
        let grid = TickGrid::new(TEST_TICK_MINUTES).unwrap();
        assert_eq!(grid.snap(t(0, 4)), t(0, 0));
    }

    #[test]
    fn test_snap_tie_prefers_earlier_tick() {
        let grid = TickGrid::new(TEST_TICK_MINUTES).unwrap();
        assert_eq!(grid.snap(t(0, 5)), t(0, 0));
        assert_eq!(grid.snap(t(13, 25)), t(13, 20));
    }

    #[test]
    fn test_snap_rounds_up_above_midpoint() {
        let grid = TickGrid::new(TEST_TICK_MINUTES).unwrap();
        assert_eq!(grid.snap(t(0, 6)), t(0, 10));
        assert_eq!(grid.snap(t(9, 58)), t(10, 0));
    }

    #[test]
    fn test_snap_exact_tick_unchanged() {
        let grid = TickGrid::new(TEST_COARSE_TICK_MINUTES).unwrap();
        assert_eq!(grid.snap(t(7, 45)), t(7, 45));
        assert_eq!(grid.snap(t(0, 0)), t(0, 0));
    }

    #[test]
    fn test_snap_wraps_to_midnight() {
        let grid = TickGrid::new(TEST_COARSE_TICK_MINUTES).unwrap();
        assert_eq!(grid.snap(t(23, 53)), Time::MIDNIGHT);
    }

    #[test]
    fn test_uneven_granularity_closes_grid() {
        let grid = TickGrid::new(TEST_UNEVEN_TICK_MINUTES).unwrap();
        assert_eq!(grid.ticks().first(), Some(&0));
        assert_eq!(grid.ticks().last(), Some(&1440));
        // 1435 is the last multiple of 7; 23:59 is closer to 1440
        assert_eq!(grid.snap(t(23, 59)), Time::MIDNIGHT);
        assert_eq!(grid.snap(t(23, 56)), t(23, 55));
    }

    #[test]
    fn test_minute_grid_is_identity() {
        let grid = TickGrid::new(1).unwrap();
        for total in 0..1440 {
            let time = Time::from_total_minutes(total);
            assert_eq!(grid.snap(time), time);
        }
    }

    #[test]
    fn test_noon_off_grid_for_half_day_misfits() {
        // 480 divides the day but not the 12-hour face
        let grid = TickGrid::new(480).unwrap();
        assert!(grid.covers(0) && grid.covers(1440));
        assert!(!grid.covers(720));
        assert_eq!(grid.snap(t(11, 59)), t(8, 0));

        assert!(TickGrid::new(TEST_COARSE_TICK_MINUTES).unwrap().covers(720));
    }

    #[test]
    fn test_invalid_granularity() {
        assert!(TickGrid::new(0).is_err());
        assert!(TickGrid::new(1441).is_err());
        assert!(TickGrid::new(1440).is_ok());
    }

    #[test]
    fn test_from_ticks_validation() {
        assert!(TickGrid::from_ticks(vec![0, 720, 1440]).is_ok());
        assert!(TickGrid::from_ticks(vec![]).is_err());
        assert!(TickGrid::from_ticks(vec![0, 720]).is_err());
        assert!(TickGrid::from_ticks(vec![10, 1440]).is_err());
        assert!(TickGrid::from_ticks(vec![0, 720, 720, 1440]).is_err());
    }

    #[test]
    fn test_free_snap_function() {
        let grid = TickGrid::from_ticks(vec![0, 600, 1440]).unwrap();
        assert_eq!(snap(t(4, 0), &grid), t(0, 0));
        assert_eq!(snap(t(6, 0), &grid), t(10, 0));
        assert_eq!(snap(t(20, 0), &grid), Time::MIDNIGHT);
    }
}
