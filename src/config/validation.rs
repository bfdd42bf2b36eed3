//! Configuration validation.
//!
//! Rejects settings a dial cannot run with and warns about ones that work but
//! probably weren't intended.

use anyhow::Result;

use super::Config;
use crate::constants::*;
use crate::dial::TickGrid;
use crate::layout::LayoutMode;

/// Check a loaded configuration before it is turned into settings.
pub fn validate_config(config: &Config) -> Result<()> {
    let layout = config.layout.unwrap_or(DEFAULT_LAYOUT);

    if let Some(tick_minutes) = config.tick_minutes {
        if !(MINIMUM_TICK_MINUTES..=MAXIMUM_TICK_MINUTES).contains(&tick_minutes) {
            anyhow::bail!(
                "tick_minutes ({}) must be between {} and {} minutes",
                tick_minutes,
                MINIMUM_TICK_MINUTES,
                MAXIMUM_TICK_MINUTES
            );
        }

        if MINUTES_PER_DAY % tick_minutes != 0 {
            log_pipe!();
            log_warning!(
                "tick_minutes ({}) does not divide a day evenly",
                tick_minutes
            );
            log_indented!("The last step before midnight will be shorter than the others");
        } else if layout.is_twelve_hour()
            && !TickGrid::new(tick_minutes)?.covers(MINUTES_PER_HALF_DAY)
        {
            log_pipe!();
            log_warning!(
                "tick_minutes ({}) does not divide the 12-hour face evenly",
                tick_minutes
            );
            log_indented!("12 o'clock is not on the grid; times just before it snap backwards");
        }
    }

    let am = config.am_enabled.unwrap_or(DEFAULT_AM_ENABLED);
    let pm = config.pm_enabled.unwrap_or(DEFAULT_PM_ENABLED);

    match layout {
        LayoutMode::TwelveHour if !am && !pm => {
            anyhow::bail!(
                "The twelve_hour layout needs at least one of am_enabled and pm_enabled"
            );
        }
        LayoutMode::TwentyFourHour if !am || !pm => {
            log_pipe!();
            log_warning!("am_enabled and pm_enabled are ignored by the twenty_four_hour layout");
        }
        _ => {}
    }

    Ok(())
}
