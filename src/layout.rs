//! Dial layouts and the AM/PM bands of the 12-hour face.

use serde::{Deserialize, Serialize};

use crate::constants::{AM_LABEL, AM_PM_LABEL, PM_LABEL};

/// How many hours one revolution of the dial covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// One revolution is 12 hours; AM and PM fold onto the same face.
    TwelveHour,
    /// One revolution is a full day.
    TwentyFourHour,
}

impl LayoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::TwelveHour => "twelve_hour",
            LayoutMode::TwentyFourHour => "twenty_four_hour",
        }
    }

    /// Hours covered by one full revolution.
    pub fn hours_per_revolution(&self) -> u32 {
        match self {
            LayoutMode::TwelveHour => 12,
            LayoutMode::TwentyFourHour => 24,
        }
    }

    /// Minutes covered by one full revolution.
    pub fn minutes_per_revolution(&self) -> u32 {
        self.hours_per_revolution() * 60
    }

    pub fn is_twelve_hour(&self) -> bool {
        matches!(self, LayoutMode::TwelveHour)
    }
}

/// Which halves of the day a 12-hour dial selects into.
///
/// At least one band must be enabled; [`Bands::new`] enforces that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bands {
    am: bool,
    pm: bool,
}

impl Bands {
    pub const BOTH: Bands = Bands { am: true, pm: true };
    pub const AM_ONLY: Bands = Bands { am: true, pm: false };
    pub const PM_ONLY: Bands = Bands { am: false, pm: true };

    pub fn new(am: bool, pm: bool) -> anyhow::Result<Self> {
        if !am && !pm {
            anyhow::bail!("At least one of the AM and PM bands must be enabled");
        }
        Ok(Self { am, pm })
    }

    pub fn am(&self) -> bool {
        self.am
    }

    pub fn pm(&self) -> bool {
        self.pm
    }

    /// Label shown next to times on a 12-hour face.
    pub fn label(&self) -> &'static str {
        match (self.am, self.pm) {
            (true, true) => AM_PM_LABEL,
            (true, false) => AM_LABEL,
            _ => PM_LABEL,
        }
    }
}
