//! Application-wide constants.
//!
//! Defaults, validation limits and the fixed arithmetic of the dial live here so
//! that configuration, geometry and tests all agree on the same numbers.

use crate::layout::LayoutMode;

// # Clock arithmetic

pub const HOURS_PER_DAY: u32 = 24;
pub const HOURS_PER_HALF_DAY: u32 = 12;
pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = MINUTES_PER_HOUR * HOURS_PER_DAY;
pub const MINUTES_PER_HALF_DAY: u32 = MINUTES_PER_HOUR * HOURS_PER_HALF_DAY;

/// Slack, in minutes, added before truncating an angle-derived time so that
/// values a rounding error below a minute boundary land on that minute.
pub const MINUTE_EPSILON: f64 = 1e-9;

// # Defaults

pub const DEFAULT_LAYOUT: LayoutMode = LayoutMode::TwelveHour;
pub const DEFAULT_AM_ENABLED: bool = true;
pub const DEFAULT_PM_ENABLED: bool = true;
pub const DEFAULT_TICK_MINUTES: u32 = 1;
pub const DEFAULT_MULTI_SELECTION: bool = true;

// # Validation limits

pub const MINIMUM_TICK_MINUTES: u32 = 1;
pub const MAXIMUM_TICK_MINUTES: u32 = MINUTES_PER_DAY;

// # Labels

pub const AM_LABEL: &str = "AM";
pub const PM_LABEL: &str = "PM";
pub const AM_PM_LABEL: &str = "AM/PM";

// # Dial face

pub const MINOR_TICK_DEGREES_TWELVE_HOUR: f64 = 6.0;
pub const MINOR_TICK_DEGREES_TWENTY_FOUR_HOUR: f64 = 3.0;
pub const MAJOR_TICK_DEGREES_TWELVE_HOUR: f64 = 30.0;
pub const MAJOR_TICK_DEGREES_TWENTY_FOUR_HOUR: f64 = 15.0;

// # Configuration files

pub const CONFIG_DIR_NAME: &str = "clockspan";
pub const CONFIG_FILE_NAME: &str = "clockspan.toml";
