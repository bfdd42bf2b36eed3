//! Tick marks and hour labels of the clock face.

use crate::constants::{
    MAJOR_TICK_DEGREES_TWELVE_HOUR, MAJOR_TICK_DEGREES_TWENTY_FOUR_HOUR,
    MINOR_TICK_DEGREES_TWELVE_HOUR, MINOR_TICK_DEGREES_TWENTY_FOUR_HOUR,
};
use crate::layout::LayoutMode;

use super::angle::Angle;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceTick {
    pub angle: Angle,
    /// Hour mark rather than a minute mark.
    pub major: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourLabel {
    pub angle: Angle,
    pub text: &'static str,
}

/// Minor ticks followed by major ticks, each group clockwise from the top.
pub fn face_ticks(layout: LayoutMode) -> Vec<FaceTick> {
    let (minor_step, major_step) = match layout {
        LayoutMode::TwelveHour => (MINOR_TICK_DEGREES_TWELVE_HOUR, MAJOR_TICK_DEGREES_TWELVE_HOUR),
        LayoutMode::TwentyFourHour => (
            MINOR_TICK_DEGREES_TWENTY_FOUR_HOUR,
            MAJOR_TICK_DEGREES_TWENTY_FOUR_HOUR,
        ),
    };

    let ring = |step: f64, major: bool| {
        let count = (360.0 / step).round() as u32;
        (0..count).map(move |i| FaceTick {
            angle: Angle::from_degrees(f64::from(i) * step),
            major,
        })
    };

    ring(minor_step, false).chain(ring(major_step, true)).collect()
}

/// Labels at the four cardinal points, top first then clockwise.
pub fn hour_labels(layout: LayoutMode) -> [HourLabel; 4] {
    let texts = match layout {
        LayoutMode::TwelveHour => ["12", "3", "6", "9"],
        LayoutMode::TwentyFourHour => ["0", "6", "12", "18"],
    };
    let mut degrees = 0.0;
    texts.map(|text| {
        let label = HourLabel {
            angle: Angle::from_degrees(degrees),
            text,
        };
        degrees += 90.0;
        label
    })
}
