use crate::scroll_math::{max_offset, period};
use crate::{Axis, Error, Result, SavedState, ScrollDirection, ScrollState, WrapMode};

/// Owns the scroll offset and applies scroll deltas to it.
#[derive(Clone, Copy, Debug)]
pub struct ScrollController {
    state: ScrollState,
    scroll_direction: Option<ScrollDirection>,
}

impl ScrollController {
    pub fn new(axis: Axis, wrap_mode: WrapMode, item_size: u32, item_count: usize) -> Self {
        Self {
            state: ScrollState {
                offset: 0,
                item_size,
                item_count,
                axis,
                wrap_mode,
            },
            scroll_direction: None,
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn offset(&self) -> u64 {
        self.state.offset
    }

    /// Direction of the last non-zero delta applied by [`Self::apply_delta`].
    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn can_scroll(&self) -> bool {
        self.state.item_count > 1 && self.state.item_size > 0
    }

    /// Applies a scroll delta and returns the delta that was actually applied.
    ///
    /// Clamped carousels stop at both ends, so the result may be smaller in magnitude than
    /// `requested` (never larger, never of the opposite sign). Circular carousels always apply the
    /// full delta.
    pub fn apply_delta(&mut self, requested: i64) -> i64 {
        if requested == 0 || !self.can_scroll() {
            return 0;
        }
        let applied = match self.state.wrap_mode {
            WrapMode::Clamped => {
                let max = max_offset(&self.state);
                let next = self.state.offset.saturating_add_signed(requested).min(max);
                let applied = next as i64 - self.state.offset as i64;
                self.state.offset = next;
                applied
            }
            WrapMode::Circular => {
                let period = period(&self.state) as i128;
                let next = (self.state.offset as i128 + requested as i128).rem_euclid(period);
                self.state.offset = next as u64;
                requested
            }
        };
        if applied != 0 {
            self.scroll_direction = Some(if applied > 0 {
                ScrollDirection::Forward
            } else {
                ScrollDirection::Backward
            });
        }
        ctrace!(requested, applied, offset = self.state.offset, "apply_delta");
        applied
    }

    /// Moves to `target` without going through [`Self::apply_delta`].
    ///
    /// Targets past the last item are clamped to it; negative targets are rejected.
    pub fn jump_to_index(&mut self, target: i64) -> Result<()> {
        if target < 0 {
            return Err(Error::NegativePosition(target));
        }
        self.set_center_index(target as u64);
        Ok(())
    }

    /// Re-derives the offset from a saved selection, clamped to the current item count.
    pub fn restore(&mut self, saved: SavedState) -> Result<()> {
        if saved.version != SavedState::VERSION {
            return Err(Error::UnsupportedStateVersion(saved.version));
        }
        self.set_center_index(saved.center_selection_index as u64);
        Ok(())
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.state.item_count = item_count;
        self.normalize_offset();
    }

    pub fn set_item_size(&mut self, item_size: u32) {
        self.state.item_size = item_size;
        self.normalize_offset();
    }

    pub fn set_axis(&mut self, axis: Axis) {
        self.state.axis = axis;
    }

    pub fn set_wrap_mode(&mut self, wrap_mode: WrapMode) {
        self.state.wrap_mode = wrap_mode;
        self.normalize_offset();
    }

    pub(crate) fn set_center_index(&mut self, index: u64) {
        let count = self.state.item_count as u64;
        if count == 0 {
            self.state.offset = 0;
            return;
        }
        if index >= count {
            cwarn!(index, count, "jump target past the last item, clamping");
        }
        let index = index.min(count - 1);
        self.state.offset = index.saturating_mul(self.state.item_size as u64);
    }

    fn normalize_offset(&mut self) {
        self.state.offset = match self.state.wrap_mode {
            WrapMode::Clamped => self.state.offset.min(max_offset(&self.state)),
            WrapMode::Circular => {
                let period = period(&self.state);
                if period == 0 || self.state.item_count <= 1 {
                    0
                } else {
                    self.state.offset % period
                }
            }
        };
    }
}
