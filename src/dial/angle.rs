//! Conversion between dial angles and wall-clock times.
//!
//! Angles are measured in radians clockwise from 12 o'clock. On the 24-hour
//! face one revolution is a day; on the 12-hour face it is half a day, so both
//! AM and PM times land on the same angle and [`angle_to_time`] can only ever
//! answer with a dial hour `0..11`.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::constants::{MINUTE_EPSILON, MINUTES_PER_HOUR};
use crate::layout::LayoutMode;
use crate::time::Time;

/// A bearing on the dial, normalized to `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    /// Wrap any finite radian value into `[0, 2π)`.
    pub fn new(radians: f64) -> Self {
        let wrapped = radians.rem_euclid(TAU);
        // rem_euclid can return TAU itself for tiny negative inputs
        if wrapped >= TAU {
            Self(0.0)
        } else {
            Self(wrapped)
        }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self::new(degrees.to_radians())
    }

    /// Bearing of a pointer offset from the dial centre.
    ///
    /// `dx`/`dy` are screen coordinates relative to the centre, with y growing
    /// downwards. `atan2` measures from the positive x axis, so a quarter turn
    /// is added to put 0 at 12 o'clock.
    pub fn from_pointer(dx: f64, dy: f64) -> Self {
        Self::new(dy.atan2(dx) + FRAC_PI_2)
    }

    pub fn radians(&self) -> f64 {
        self.0
    }

    pub fn degrees(&self) -> f64 {
        self.0.to_degrees()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

/// Time shown at `angle` on a dial with the given layout.
///
/// The whole-hour part becomes the hour and the remainder is truncated to the
/// minute. On the 12-hour face the hour is always `0..11`.
pub fn angle_to_time(angle: Angle, layout: LayoutMode) -> Time {
    let minutes_per_revolution = layout.minutes_per_revolution();
    let raw_minutes = angle.radians() / TAU * f64::from(minutes_per_revolution);
    let total = ((raw_minutes + MINUTE_EPSILON).floor() as u32) % minutes_per_revolution;
    Time::from_total_minutes(total)
}

/// Angle at which `time` is drawn on a dial with the given layout.
pub fn time_to_angle(time: Time, layout: LayoutMode) -> Angle {
    let minutes = match layout {
        LayoutMode::TwelveHour => (time.hours() % 12) * MINUTES_PER_HOUR + time.minutes(),
        LayoutMode::TwentyFourHour => time.total_minutes(),
    };
    let fraction = f64::from(minutes) / f64::from(layout.minutes_per_revolution());
    Angle::new(fraction * TAU)
}
