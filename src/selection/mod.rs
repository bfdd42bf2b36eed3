//! Selected intervals and the gesture state machine that builds them.
//!
//! ## Module Structure
//!
//! - [`interval`]: the interval type and AM/PM splitting
//! - [`session`]: press/move/release handling, append mode and "select all"
//! - [`events`]: notifications and the observer trait
//! - [`tooltip`]: hover text

pub mod events;
pub mod interval;
pub mod session;
pub mod tooltip;

pub use events::{LayoutData, SelectionEvent, SelectionObserver};
pub use interval::{Interval, full_band_intervals, split};
pub use session::{PointerFeedback, SelectionSession, SessionState};

use crate::dial::DialShape;

/// Committed intervals plus one rendered shape per committed gesture.
///
/// A gesture on a dual-band dial commits two intervals but draws a single
/// sector, so the two lists have different lengths. [`Selection::committed_count`]
/// counts gestures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    intervals: Vec<Interval>,
    shapes: Vec<DialShape>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn shapes(&self) -> &[DialShape] {
        &self.shapes
    }

    /// Number of gestures (or "select all" shortcuts) committed.
    pub fn committed_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub(crate) fn commit(&mut self, intervals: &[Interval], shape: DialShape) {
        self.intervals.extend_from_slice(intervals);
        self.shapes.push(shape);
    }

    pub(crate) fn clear(&mut self) {
        self.intervals.clear();
        self.shapes.clear();
    }
}
