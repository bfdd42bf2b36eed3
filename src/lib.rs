//! # Clockspan
//!
//! Time-interval selection engine for circular clock-face pickers.
//!
//! The host widget draws the dial and forwards pointer input as angles; the
//! engine snaps them to a tick grid, turns each drag into time intervals and
//! reports what to draw.
//!
//! ## Architecture
//!
//! - **Time**: `time` and `layout` hold the value types (`Time`, `LayoutMode`, `Bands`)
//! - **Dial**: `dial` converts angles to times, snaps to ticks and resolves arc geometry
//! - **Selection**: `selection` owns the gesture state machine, the AM/PM
//!   splitting and the notifications sent to observers
//! - **Configuration**: `config` loads and validates `clockspan.toml`
//! - **Infrastructure**: `logger` and `constants`
//!
//! ```
//! use clockspan::{Angle, DialSettings, SelectionSession};
//!
//! let mut session = SelectionSession::new(DialSettings::default())?;
//! session.pointer_down(Angle::from_degrees(270.0), false);
//! session.pointer_move(Angle::from_degrees(60.0));
//! let intervals = session.pointer_up(Angle::from_degrees(60.0)).unwrap_or_default();
//! assert_eq!(intervals.len(), 2);
//! # Ok::<(), anyhow::Error>(())
//! ```

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod config;
pub mod constants;
pub mod dial;
pub mod layout;
pub mod selection;
pub mod time;

pub use config::{Config, DialSettings};
pub use dial::{Angle, DialShape, Primitive, TickGrid};
pub use layout::{Bands, LayoutMode};
pub use selection::{Interval, SelectionEvent, SelectionObserver, SelectionSession};
pub use time::Time;
