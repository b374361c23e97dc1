//! A headless recycling scroll engine.
//!
//! For presentation-level helpers (drag handling, elastic spring-back, stop detection), see the
//! `recycler-adapter` crate.
//!
//! Instead of creating one view per element, the engine keeps a small pool of reusable view
//! units bound to a contiguous window of the data and rebinds units as they leave one edge of
//! the viewport and are needed at the other. It also limits scrolling at the ends of the data,
//! tracks which unit sits closest to the viewport's center, and animates programmatic
//! navigation to an index.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the viewport size and the scroll axis
//! - content-offset change and drag notifications
//! - view units implementing [`ViewUnit`] (bind, measure, place)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod boundary;
mod error;
mod options;
mod pool;
mod recycler;
mod tween;
mod types;
mod unit;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use options::{
    DEFAULT_SPACING, DEFAULT_STOP_NAVIGATION_MS, Listener, Navigation, RecyclerOptions,
};
pub use pool::{Pool, Slot, SlotId, UnitFactory};
pub use recycler::Recycler;
pub use tween::{Easing, Tween};
pub use types::{
    Axis, ContentLayout, Directions, Limit, MovementMode, ScrollEvent, ScrollState, Viewport,
};
pub use unit::{DataSource, Lifecycle, ViewUnit};
