//! Default configuration file creation.
//!
//! Writes a commented `clockspan.toml` with every setting at its default, values
//! and comments aligned in columns.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::constants::*;

/// Write a default config file at `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    let content = default_config_content();
    fs::write(path, content)
        .with_context(|| format!("Failed to write default config to {}", path.display()))?;

    log_info!("Created default configuration at {}", path.display());
    Ok(())
}

/// Text of the default configuration file.
pub fn default_config_content() -> String {
    let mut content = ConfigBuilder::new()
        .add_section("Layout")
        .add_setting(
            "layout",
            &format!("\"{}\"", DEFAULT_LAYOUT.as_str()),
            "\"twelve_hour\" or \"twenty_four_hour\"",
        )
        .add_setting(
            "am_enabled",
            &DEFAULT_AM_ENABLED.to_string(),
            "Select into the morning band (12-hour layout)",
        )
        .add_setting(
            "pm_enabled",
            &DEFAULT_PM_ENABLED.to_string(),
            "Select into the evening band (12-hour layout)",
        )
        .add_section("Selection")
        .add_setting(
            "tick_minutes",
            &DEFAULT_TICK_MINUTES.to_string(),
            &format!(
                "Snapping granularity in minutes ({MINIMUM_TICK_MINUTES}-{MAXIMUM_TICK_MINUTES})"
            ),
        )
        .add_setting(
            "multi_selection",
            &DEFAULT_MULTI_SELECTION.to_string(),
            "Allow appending gestures with the modifier key",
        )
        .build();
    content.push('\n');
    content
}

struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

enum ConfigEntry {
    Section(String),
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry::Section(format!("#[{title}]")));
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("{key} = {value}"),
            comment: format!("# {comment}"),
        });
        self
    }

    fn build(self) -> String {
        // One space between the widest setting and its comment
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                ConfigEntry::Setting { line, .. } => Some(line.len()),
                ConfigEntry::Section(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut result = Vec::new();
        let mut first_section = true;

        for entry in self.entries {
            match entry {
                ConfigEntry::Section(title) => {
                    if !first_section {
                        result.push(String::new());
                    }
                    result.push(title);
                    first_section = false;
                }
                ConfigEntry::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{line}{padding}{comment}"));
                }
            }
        }

        result.join("\n")
    }
}
