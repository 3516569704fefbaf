use alloc::vec::Vec;

use crate::float::round_half_up;
use crate::scroll_math::normalize_to_range;
use crate::{LayoutSlot, WrapMode};

/// Plans the slots of one layout pass into a reusable buffer.
///
/// The buffer only reallocates when the number of slots grows past its capacity; slot values are
/// overwritten on every pass.
#[derive(Clone, Debug, Default)]
pub struct LayoutPlanner {
    slots: Vec<LayoutSlot>,
}

impl LayoutPlanner {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Returns the slots planned by the last call to [`Self::plan`].
    pub fn slots(&self) -> &[LayoutSlot] {
        &self.slots
    }

    /// Plans the slots for `center_position`, ordered by increasing draw priority.
    ///
    /// The item nearest to the center is always last. The items around it are ordered so that
    /// the ones closest to the center are drawn after (on top of) the ones further away.
    pub fn plan(
        &mut self,
        center_position: f32,
        item_count: usize,
        max_visible: usize,
        wrap_mode: WrapMode,
    ) -> &[LayoutSlot] {
        debug_assert!(max_visible > 0, "max_visible must be at least 1");
        if item_count == 0 {
            self.slots.clear();
            return &self.slots;
        }

        if wrap_mode == WrapMode::Circular && item_count > 1 {
            self.plan_circular(center_position, item_count, max_visible);
        } else {
            self.plan_clamped(center_position, item_count, max_visible);
        }
        &self.slots
    }

    fn plan_clamped(&mut self, position: f32, count: usize, max_visible: usize) {
        let last_index = count - 1;
        let center = (round_half_up(position).max(0.0) as usize).min(last_index);
        let first = center.saturating_sub(max_visible + 1);
        let last = center.saturating_add(max_visible + 1).min(last_index);
        let layout_count = last - first + 1;

        self.slots.resize(layout_count, LayoutSlot::default());
        for i in first..=last {
            let at = if i == center {
                layout_count - 1
            } else if i < center {
                i - first
            } else {
                layout_count - (i - center) - 1
            };
            self.slots[at] = LayoutSlot {
                index: i,
                distance: i as f32 - position,
            };
        }
    }

    fn plan_circular(&mut self, position: f32, count: usize, max_visible: usize) {
        let position = normalize_to_range(position, count);
        // Rounded into `0..count` by `normalize_to_range`.
        let center = round_half_up(position) as usize;
        let center_distance = center as f32 - position;

        // 1 (center) + 2 * max_visible + 1 extra on each side.
        let layout_count = max_visible.saturating_mul(2).saturating_add(3).min(count);
        let half = layout_count / 2;

        self.slots.resize(layout_count, LayoutSlot::default());
        for k in 1..=half {
            self.slots[half - k] = LayoutSlot {
                index: (center + count - k) % count,
                distance: center_distance - k as f32,
            };
        }
        for k in 1..(layout_count - half) {
            self.slots[layout_count - 1 - k] = LayoutSlot {
                index: (center + k) % count,
                distance: center_distance + k as f32,
            };
        }
        self.slots[layout_count - 1] = LayoutSlot {
            index: center,
            distance: center_distance,
        };
    }
}

/// Allocating convenience wrapper around [`LayoutPlanner::plan`].
pub fn plan(
    center_position: f32,
    item_count: usize,
    max_visible: usize,
    wrap_mode: WrapMode,
) -> Vec<LayoutSlot> {
    let mut planner = LayoutPlanner::new();
    planner.plan(center_position, item_count, max_visible, wrap_mode);
    planner.slots
}
