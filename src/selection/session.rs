//! Gesture state machine for one dial.
//!
//! ```text
//! Idle ──pointer_down──▶ Dragging ──pointer_move──▶ Dragging
//!   ▲                       │
//!   └──pointer_up (commit)──┤
//!   └──pointer_leave (abandon)
//! ```
//!
//! Secondary clicks and layout changes are only acted on while idle; a layout
//! change during a drag abandons the drag first.

use anyhow::Result;

use super::events::{LayoutData, SelectionEvent, SelectionObserver};
use super::interval::{Interval, full_band_intervals, split};
use super::tooltip::tooltip_text;
use super::Selection;
use crate::config::{Config, DialSettings, validation::validate_config};
use crate::constants::MINUTES_PER_HALF_DAY;
use crate::dial::{Angle, DialShape, Sector, TickGrid, angle_to_time, time_to_angle};
use crate::layout::{Bands, LayoutMode};
use crate::time::Time;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy)]
struct Gesture {
    anchor_time: Time,
    anchor_angle: Angle,
    append: bool,
    // Press cleared a non-empty selection that nobody has been told about yet
    cleared: bool,
}

/// What the host should show for the current pointer position.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerFeedback {
    /// Hovered time, snapped to the tick grid.
    pub time: Time,
    /// Angle of the snapped time, for the indicator line.
    pub indicator: Angle,
    pub tooltip: String,
    /// Live sector from the anchor, while dragging.
    pub shape: Option<DialShape>,
    /// Start-only preview intervals, while dragging.
    pub preview: Vec<Interval>,
}

/// Owns the selection of one dial and turns pointer input into intervals.
pub struct SelectionSession {
    settings: DialSettings,
    ticks: TickGrid,
    selection: Selection,
    gesture: Option<Gesture>,
    observers: Vec<Box<dyn SelectionObserver>>,
}

impl SelectionSession {
    pub fn new(settings: DialSettings) -> Result<Self> {
        let ticks = TickGrid::new(settings.tick_minutes)?;
        Ok(Self {
            settings,
            ticks,
            selection: Selection::new(),
            gesture: None,
            observers: Vec::new(),
        })
    }

    /// Validate a loaded configuration and build a session from it.
    pub fn from_config(config: &Config) -> Result<Self> {
        validate_config(config)?;
        Self::new(config.settings()?)
    }

    pub fn subscribe(&mut self, observer: Box<dyn SelectionObserver>) {
        self.observers.push(observer);
    }

    pub fn settings(&self) -> &DialSettings {
        &self.settings
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn intervals(&self) -> &[Interval] {
        self.selection.intervals()
    }

    /// One shape per committed gesture, for redrawing the dial.
    pub fn shapes(&self) -> &[DialShape] {
        self.selection.shapes()
    }

    pub fn committed_count(&self) -> usize {
        self.selection.committed_count()
    }

    pub fn state(&self) -> SessionState {
        if self.gesture.is_some() {
            SessionState::Dragging
        } else {
            SessionState::Idle
        }
    }

    pub fn layout_data(&self) -> LayoutData {
        LayoutData {
            layout: self.settings.layout,
            am_enabled: self.settings.bands.am(),
            pm_enabled: self.settings.bands.pm(),
        }
    }

    /// Snapped time under `angle`. On the 12-hour face this is a dial time
    /// `00:00..11:59`.
    pub fn time_at(&self, angle: Angle) -> Time {
        let snapped = self.ticks.snap(angle_to_time(angle, self.settings.layout));
        match self.settings.layout {
            LayoutMode::TwelveHour => {
                Time::from_total_minutes(snapped.total_minutes() % MINUTES_PER_HALF_DAY)
            }
            LayoutMode::TwentyFourHour => snapped,
        }
    }

    /// Start a gesture. Returns the ray to draw until the pointer moves.
    pub fn pointer_down(&mut self, angle: Angle, append_modifier: bool) -> DialShape {
        if self.gesture.is_some() {
            log_debug!("Pointer pressed during a drag, abandoning the previous gesture");
            self.abandon();
        }

        let append = append_modifier && self.settings.multi_selection;
        let cleared = !append && !self.selection.is_empty();
        if cleared {
            self.selection.clear();
        }

        let anchor_time = self.time_at(angle);
        let anchor_angle = time_to_angle(anchor_time, self.settings.layout);
        self.gesture = Some(Gesture {
            anchor_time,
            anchor_angle,
            append,
            cleared,
        });

        log_debug!(
            "Gesture started at {} ({})",
            anchor_time,
            if append { "append" } else { "replace" }
        );

        let intervals = split(anchor_time, None, self.settings.bands, self.settings.layout);
        self.emit(SelectionEvent::SelectionStarted { intervals });

        DialShape::Ray {
            start: anchor_angle,
        }
    }

    /// Track the pointer. Works while idle too, for the hover tooltip.
    pub fn pointer_move(&self, angle: Angle) -> PointerFeedback {
        let time = self.time_at(angle);
        let indicator = time_to_angle(time, self.settings.layout);
        let anchor = self.gesture.map(|gesture| gesture.anchor_time);

        let (shape, preview) = match &self.gesture {
            Some(gesture) => (
                Some(DialShape::Sector(Sector::new(gesture.anchor_angle, indicator))),
                split(
                    gesture.anchor_time,
                    None,
                    self.settings.bands,
                    self.settings.layout,
                ),
            ),
            None => (None, Vec::new()),
        };

        PointerFeedback {
            time,
            indicator,
            tooltip: tooltip_text(time, anchor, self.settings.bands, self.settings.layout),
            shape,
            preview,
        }
    }

    /// Finish the gesture and commit it. Returns the intervals it added, or
    /// `None` when no gesture was in progress.
    pub fn pointer_up(&mut self, angle: Angle) -> Option<Vec<Interval>> {
        let gesture = self.gesture.take()?;

        let end_time = self.time_at(angle);
        let end_angle = time_to_angle(end_time, self.settings.layout);
        let intervals = split(
            gesture.anchor_time,
            Some(end_time),
            self.settings.bands,
            self.settings.layout,
        );

        self.selection.commit(
            &intervals,
            DialShape::Sector(Sector::new(gesture.anchor_angle, end_angle)),
        );

        log_debug!(
            "Gesture committed {} - {} ({} interval(s), {} total)",
            gesture.anchor_time,
            end_time,
            intervals.len(),
            self.selection.intervals().len()
        );

        self.emit(SelectionEvent::SelectionEnded {
            intervals: intervals.clone(),
        });
        self.emit_changed();

        Some(intervals)
    }

    /// Pointer left the widget. Abandons a drag in progress without
    /// committing anything; returns whether there was one.
    ///
    /// A replacing press has already dropped the old selection, so observers
    /// get a `SelectionChanged` with what is left.
    pub fn pointer_leave(&mut self) -> bool {
        self.abandon()
    }

    /// Secondary click: clears a non-empty selection, or selects every enabled
    /// band when there is nothing selected. Ignored while dragging.
    pub fn secondary_click(&mut self) -> Option<&[Interval]> {
        if self.gesture.is_some() {
            return None;
        }

        if self.selection.is_empty() {
            let intervals = full_band_intervals(self.settings.bands, self.settings.layout);
            self.selection.commit(&intervals, DialShape::FullCircle);
            log_debug!("Selected all ({} interval(s))", intervals.len());
        } else {
            self.selection.clear();
            log_debug!("Selection cleared by secondary click");
        }

        self.emit_changed();
        Some(self.selection.intervals())
    }

    /// Drop every committed interval.
    pub fn clear(&mut self) {
        self.gesture = None;
        if !self.selection.is_empty() {
            self.selection.clear();
            self.emit_changed();
        }
    }

    /// Change which bands a 12-hour drag selects into. Clears the selection.
    pub fn set_bands(&mut self, am_enabled: bool, pm_enabled: bool) -> Result<()> {
        let bands = Bands::new(am_enabled, pm_enabled)?;
        self.settings.bands = bands;
        self.reset_for_layout();
        Ok(())
    }

    /// Switch between the 12-hour and 24-hour face. Clears the selection.
    pub fn set_layout(&mut self, layout: LayoutMode) {
        self.settings.layout = layout;
        self.reset_for_layout();
    }

    fn reset_for_layout(&mut self) {
        self.pointer_leave();
        self.clear();
        log_debug!(
            "Layout is now {} (am: {}, pm: {})",
            self.settings.layout.as_str(),
            self.settings.bands.am(),
            self.settings.bands.pm()
        );
        self.emit(SelectionEvent::LayoutChanged(self.layout_data()));
    }

    fn abandon(&mut self) -> bool {
        let Some(gesture) = self.gesture.take() else {
            return false;
        };

        log_debug!(
            "Gesture from {} abandoned{}",
            gesture.anchor_time,
            if gesture.append { " (append)" } else { "" }
        );
        if gesture.cleared {
            self.emit_changed();
        }
        true
    }

    fn emit_changed(&mut self) {
        let intervals = self.selection.intervals().to_vec();
        self.emit(SelectionEvent::SelectionChanged { intervals });
    }

    fn emit(&mut self, event: SelectionEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}
