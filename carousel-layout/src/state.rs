use crate::{Axis, WrapMode};

/// The persistent scroll state of a carousel.
///
/// `offset` is always the canonical representative: within `[0, item_size * (item_count - 1)]`
/// for clamped carousels and within `[0, item_size * item_count)` for circular ones.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: u64,
    /// Uniform item extent along the scroll axis.
    pub item_size: u32,
    pub item_count: usize,
    pub axis: Axis,
    pub wrap_mode: WrapMode,
}

/// A versioned snapshot for restoring the selected item across sessions.
///
/// Framework-specific state (e.g. a parent widget's own snapshot) is composed by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedState {
    pub version: u32,
    pub center_selection_index: usize,
}

impl SavedState {
    pub const VERSION: u32 = 1;

    pub fn new(center_selection_index: usize) -> Self {
        Self {
            version: Self::VERSION,
            center_selection_index,
        }
    }
}
