//! A headless carousel layout engine.
//!
//! For adapter-level utilities (smooth scrolling, snap-to-center), see the
//! `carousel-layout-adapter` crate.
//!
//! One item sits centered on the scroll axis; up to `max_visible_items` neighbours are laid out
//! on each side, pulled towards the center by a non-linear easing curve. Scrolling is either
//! clamped to the first/last item or circular (infinite in both directions).
//!
//! This crate focuses on the positioning math:
//! - scroll offset → continuous center position (with circular folding)
//! - center position → ordered layout slots with signed distances (center drawn last)
//! - distance → pixel offset and an optional scale/translation transform
//! - debounced center selection changes
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - item count and a fixed item size
//! - viewport size
//! - scroll deltas
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod controller;
mod error;
mod float;
mod offset;
mod options;
mod planner;
pub mod scroll_math;
mod selection;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use carousel::Carousel;
pub use controller::ScrollController;
pub use error::{Error, ErrorKind, Result};
pub use offset::{
    OffsetCurve, TransformFn, ZoomTransform, default_offset_curve, pixel_offset,
    pixel_offset_with,
};
pub use options::CarouselOptions;
pub use planner::{LayoutPlanner, plan};
pub use selection::{SelectionListener, SelectionListeners, SelectionTracker};
pub use state::{SavedState, ScrollState};
pub use types::{
    Axis, CenterSelection, ItemRect, LayoutOutcome, LayoutSlot, PlacedItem, ScrollDirection, Size,
    Transform, WrapMode,
};
