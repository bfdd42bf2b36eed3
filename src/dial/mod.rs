//! Dial geometry: angles, ticks, arcs and the clock face.
//!
//! ## Module Structure
//!
//! - [`angle`]: angle ⇄ time conversion for both layouts
//! - [`ticks`]: snapping times onto the configured granularity
//! - [`geometry`]: sweep direction, cartesian points and renderable shapes
//! - [`face`]: tick marks and hour labels of the face itself

pub mod angle;
pub mod face;
pub mod geometry;
pub mod ticks;

pub use angle::{Angle, angle_to_time, time_to_angle};
pub use geometry::{DialShape, Point, Primitive, Sector, Sweep, cartesian, resolve_sweep};
pub use ticks::TickGrid;
