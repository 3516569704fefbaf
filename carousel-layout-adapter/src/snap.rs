use carousel_layout::ScrollState;
use carousel_layout::scroll_math::offset_to_nearest_center;

/// Scroll phases reported by the host's scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPhase {
    #[default]
    Idle,
    /// The user is dragging the content.
    Dragging,
    /// The content keeps moving on its own (fling).
    Settling,
}

/// Snaps the nearest item back to the center once scrolling stops.
///
/// A snap is armed by a drag or a fling and fires on the next transition to [`ScrollPhase::Idle`].
/// Idle phases without scrolling in between never snap, so the snap scroll itself (driven by the
/// adapter, not reported as a drag) does not trigger another one.
#[derive(Clone, Copy, Debug, Default)]
pub struct CenterSnap {
    armed: bool,
}

impl CenterSnap {
    pub fn new() -> Self {
        Self { armed: false }
    }

    /// Whether the next idle phase will snap.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Feeds a phase change; returns the delta that centers the nearest item, if a snap is due.
    pub fn on_phase(&mut self, phase: ScrollPhase, state: &ScrollState) -> Option<i64> {
        match phase {
            ScrollPhase::Dragging | ScrollPhase::Settling => {
                self.armed = true;
                None
            }
            ScrollPhase::Idle => {
                if !core::mem::replace(&mut self.armed, false) {
                    return None;
                }
                let delta = offset_to_nearest_center(state);
                (delta != 0).then_some(delta)
            }
        }
    }
}
