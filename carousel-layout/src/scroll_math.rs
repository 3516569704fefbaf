//! Pure scroll arithmetic: offsets, center positions, circular folding.

use crate::float::{abs, round_half_up, sign};
use crate::{ScrollDirection, ScrollState, WrapMode};

/// Maximum offset of a clamped carousel: `item_size * (item_count - 1)`.
pub fn max_offset(state: &ScrollState) -> u64 {
    if state.item_count <= 1 {
        return 0;
    }
    (state.item_size as u64).saturating_mul(state.item_count as u64 - 1)
}

/// Length of one full turn of a circular carousel.
pub fn period(state: &ScrollState) -> u64 {
    (state.item_size as u64).saturating_mul(state.item_count as u64)
}

/// Continuous position of the center line in item units.
///
/// For clamped carousels this is within `[0, item_count - 1]`. There is no scroll range for fewer
/// than two items, so the position is `0.0` then.
pub fn current_center_position(state: &ScrollState) -> f32 {
    if max_offset(state) == 0 {
        return 0.0;
    }
    state.offset as f32 / state.item_size as f32
}

/// Folds an unbounded position into `[0, count)`, judged by the rounded index.
///
/// A value like `count - 0.4` rounds to `count` and is therefore folded to `-0.4`; callers that
/// only care about the rounded index always get one in `0..count`.
pub fn normalize_to_range(position: f32, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let n = count as f32;
    // `%` is exact for floats, so any magnitude folds in one step into `(-n, n)`.
    let mut p = position % n;
    if p < 0.0 {
        p += n;
    }
    if round_half_up(p) >= n {
        p -= n;
    }
    p
}

/// Index of the item nearest to `position`, or `None` for an empty carousel.
pub fn center_index(position: f32, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let rounded = round_half_up(normalize_to_range(position, count));
    Some((rounded.max(0.0) as usize).min(count - 1))
}

/// Signed distance in items to scroll so that `target` ends up centered.
///
/// Circular carousels take the shorter way around; when both ways are equally long the direct
/// (non-wrapping) path wins.
pub fn distance_to_index(position: f32, target: usize, count: usize, wrap_mode: WrapMode) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let current = normalize_to_range(position, count);
    let direct = target as f32 - current;
    match wrap_mode {
        WrapMode::Clamped => direct,
        WrapMode::Circular => {
            let wrapped = direct - sign(direct) * count as f32;
            if abs(wrapped) < abs(direct) {
                wrapped
            } else {
                direct
            }
        }
    }
}

/// Direction to scroll in to center `target`, `None` if it is already centered.
pub fn direction_to_index(
    position: f32,
    target: usize,
    count: usize,
    wrap_mode: WrapMode,
) -> Option<ScrollDirection> {
    let d = distance_to_index(position, target, count, wrap_mode);
    if d > 0.0 {
        Some(ScrollDirection::Forward)
    } else if d < 0.0 {
        Some(ScrollDirection::Backward)
    } else {
        None
    }
}

/// Scroll delta in pixels that centers the item nearest to the current position.
pub fn offset_to_nearest_center(state: &ScrollState) -> i64 {
    if max_offset(state) == 0 {
        return 0;
    }
    let nearest = round_half_up(current_center_position(state)) as i64;
    nearest.saturating_mul(state.item_size as i64) - state.offset as i64
}
