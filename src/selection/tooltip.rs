//! Hover text shown next to the pointer.

use crate::constants::{AM_LABEL, PM_LABEL};
use crate::layout::{Bands, LayoutMode};
use crate::time::Time;

/// Text for the pointer tooltip.
///
/// Without an anchor this is just the hovered time and band label. While
/// dragging it reads `anchor - hover`; when only one band is enabled the label
/// after the hover time flips between AM and PM once the drag has crossed 12.
pub fn tooltip_text(hover: Time, anchor: Option<Time>, bands: Bands, layout: LayoutMode) -> String {
    let twelve_hour = layout.is_twelve_hour();
    let mut label = if twelve_hour { bands.label() } else { "" };
    let mut text = String::new();

    if let Some(anchor) = anchor {
        text.push_str(&anchor.format_clock(twelve_hour));
        if !(bands.am() && bands.pm()) && !label.is_empty() {
            text.push(' ');
            text.push_str(label);
        }
        text.push_str(" - ");

        if anchor.hours() < 12 && (hover.is_pm() || hover < anchor) {
            label = match label {
                AM_LABEL => PM_LABEL,
                PM_LABEL => AM_LABEL,
                other => other,
            };
        }
    }

    text.push_str(&hover.format_clock(twelve_hour));
    if !label.is_empty() {
        text.push(' ');
        text.push_str(label);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hours: u32, minutes: u32) -> Time {
        Time::new(hours, minutes).unwrap()
    }

    #[test]
    fn test_hover_only() {
        assert_eq!(
            tooltip_text(t(3, 30), None, Bands::BOTH, LayoutMode::TwelveHour),
            "03:30 AM/PM"
        );
        assert_eq!(
            tooltip_text(t(0, 5), None, Bands::AM_ONLY, LayoutMode::TwelveHour),
            "12:05 AM"
        );
        assert_eq!(
            tooltip_text(t(0, 5), None, Bands::BOTH, LayoutMode::TwentyFourHour),
            "00:05"
        );
    }

    #[test]
    fn test_drag_with_both_bands() {
        assert_eq!(
            tooltip_text(t(4, 0), Some(t(2, 0)), Bands::BOTH, LayoutMode::TwelveHour),
            "02:00 - 04:00 AM/PM"
        );
    }

    #[test]
    fn test_single_band_flips_after_crossing_twelve() {
        assert_eq!(
            tooltip_text(t(11, 0), Some(t(9, 0)), Bands::AM_ONLY, LayoutMode::TwelveHour),
            "09:00 AM - 11:00 AM"
        );
        assert_eq!(
            tooltip_text(t(2, 0), Some(t(9, 0)), Bands::AM_ONLY, LayoutMode::TwelveHour),
            "09:00 AM - 02:00 PM"
        );
        assert_eq!(
            tooltip_text(t(2, 0), Some(t(9, 0)), Bands::PM_ONLY, LayoutMode::TwelveHour),
            "09:00 PM - 02:00 AM"
        );
    }

    #[test]
    fn test_twenty_four_hour_drag() {
        assert_eq!(
            tooltip_text(t(18, 0), Some(t(9, 0)), Bands::BOTH, LayoutMode::TwentyFourHour),
            "09:00 - 18:00"
        );
    }
}
