//! Dial configuration with validation and TOML file support.
//!
//! A host can build [`DialSettings`] directly, or load them from a
//! `clockspan.toml` file:
//!
//! ```toml
//! #[Layout]
//! layout = "twelve_hour"   # "twelve_hour" or "twenty_four_hour"
//! am_enabled = true        # Select into the morning band (12-hour layout)
//! pm_enabled = true        # Select into the evening band (12-hour layout)
//!
//! #[Selection]
//! tick_minutes = 1         # Snapping granularity in minutes (1-1440)
//! multi_selection = true   # Allow appending gestures with the modifier key
//! ```
//!
//! The file is searched at `$XDG_CONFIG_HOME/clockspan/clockspan.toml`. Every
//! field is optional; missing ones fall back to the defaults in
//! [`crate::constants`].

pub mod builder;
pub mod loading;
pub mod validation;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::layout::{Bands, LayoutMode};

pub use builder::create_default_config;
pub use loading::{get_config_path, load, load_from_path};

/// Resolved settings a [`crate::selection::SelectionSession`] runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialSettings {
    pub layout: LayoutMode,
    pub bands: Bands,
    pub tick_minutes: u32,
    pub multi_selection: bool,
}

impl Default for DialSettings {
    fn default() -> Self {
        Self {
            layout: DEFAULT_LAYOUT,
            bands: Bands::BOTH,
            tick_minutes: DEFAULT_TICK_MINUTES,
            multi_selection: DEFAULT_MULTI_SELECTION,
        }
    }
}

/// Contents of `clockspan.toml`. Unset fields use the defaults.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    pub layout: Option<LayoutMode>,
    pub am_enabled: Option<bool>,
    pub pm_enabled: Option<bool>,
    pub tick_minutes: Option<u32>, // minutes between snapping ticks (1-1440)
    pub multi_selection: Option<bool>,
}

impl Config {
    pub fn load() -> Result<Self> {
        loading::load()
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        loading::load_from_path(path)
    }

    pub fn get_config_path() -> Result<PathBuf> {
        loading::get_config_path()
    }

    pub fn create_default_config(path: &Path) -> Result<()> {
        builder::create_default_config(path)
    }

    /// Resolve defaults into the settings a session uses.
    ///
    /// The band flags only matter on the 12-hour face, so a 24-hour config
    /// with both bands switched off still resolves (to both bands).
    pub fn settings(&self) -> Result<DialSettings> {
        let layout = self.layout.unwrap_or(DEFAULT_LAYOUT);
        let am = self.am_enabled.unwrap_or(DEFAULT_AM_ENABLED);
        let pm = self.pm_enabled.unwrap_or(DEFAULT_PM_ENABLED);

        let bands = match layout {
            LayoutMode::TwelveHour => Bands::new(am, pm)?,
            LayoutMode::TwentyFourHour => Bands::new(am, pm).unwrap_or(Bands::BOTH),
        };

        Ok(DialSettings {
            layout,
            bands,
            tick_minutes: self.tick_minutes.unwrap_or(DEFAULT_TICK_MINUTES),
            multi_selection: self.multi_selection.unwrap_or(DEFAULT_MULTI_SELECTION),
        })
    }

    pub fn log_config(&self, source: &Path) {
        log_block_start!("Loaded configuration");
        log_indented!("Source: {}", source.display());

        let layout = self.layout.unwrap_or(DEFAULT_LAYOUT);
        log_indented!("Layout: {}", layout.as_str());
        if layout.is_twelve_hour() {
            log_indented!(
                "Bands: AM {}, PM {}",
                on_off(self.am_enabled.unwrap_or(DEFAULT_AM_ENABLED)),
                on_off(self.pm_enabled.unwrap_or(DEFAULT_PM_ENABLED))
            );
        }

        let tick_minutes = self.tick_minutes.unwrap_or(DEFAULT_TICK_MINUTES);
        log_indented!(
            "Tick granularity: {} {}",
            tick_minutes,
            if tick_minutes == 1 { "minute" } else { "minutes" }
        );
        log_indented!(
            "Multi-selection: {}",
            on_off(self.multi_selection.unwrap_or(DEFAULT_MULTI_SELECTION))
        );
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
