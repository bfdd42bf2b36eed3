//! Notifications published by a selection session.

use anyhow::{Context, Result};
use serde::Serialize;

use super::interval::Interval;
use crate::layout::LayoutMode;

/// Active layout and band flags, as reported to hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutData {
    pub layout: LayoutMode,
    pub am_enabled: bool,
    pub pm_enabled: bool,
}

/// One notification, carrying the intervals relevant to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionEvent {
    /// Pointer pressed; start-only preview intervals per enabled band.
    SelectionStarted { intervals: Vec<Interval> },
    /// Gesture committed; only the intervals it added.
    SelectionEnded { intervals: Vec<Interval> },
    /// The whole committed selection after any change.
    SelectionChanged { intervals: Vec<Interval> },
    /// Layout or band flags changed.
    LayoutChanged(LayoutData),
}

impl SelectionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SelectionEvent::SelectionStarted { .. } => "selection_started",
            SelectionEvent::SelectionEnded { .. } => "selection_ended",
            SelectionEvent::SelectionChanged { .. } => "selection_changed",
            SelectionEvent::LayoutChanged(_) => "layout_changed",
        }
    }

    /// JSON payload for hosts that forward events to a web front end.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .with_context(|| format!("Failed to encode {} event", self.name()))
    }
}

/// Receiver of session notifications.
///
/// Observers run synchronously inside the session call that caused the event.
#[cfg_attr(test, mockall::automock)]
pub trait SelectionObserver {
    fn notify(&mut self, event: &SelectionEvent);
}
