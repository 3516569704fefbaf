use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::CenterSelection;
use crate::scroll_math::center_index;

/// A callback fired when the center selection changes.
pub type SelectionListener = Arc<dyn Fn(CenterSelection) + Send + Sync>;

/// Detects changes of the rounded center position between layout passes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionTracker {
    // `None` until the first pass has been reported.
    last: Option<CenterSelection>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// The last reported selection, none before the first pass.
    pub fn current(&self) -> CenterSelection {
        self.last.unwrap_or(CenterSelection::NONE)
    }

    /// Returns the new selection if it differs from the last reported one.
    ///
    /// The first call always reports, so an empty carousel reports "none" exactly once.
    pub fn update(&mut self, raw_center_position: f32, item_count: usize) -> Option<CenterSelection> {
        let selection = CenterSelection {
            index: center_index(raw_center_position, item_count),
        };
        if self.last == Some(selection) {
            return None;
        }
        self.last = Some(selection);
        Some(selection)
    }

    /// Forgets the last reported selection so the next update reports again.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Ordered selection listeners, multicast in registration order.
#[derive(Clone, Default)]
pub struct SelectionListeners {
    listeners: Vec<SelectionListener>,
}

impl SelectionListeners {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn add(&mut self, listener: SelectionListener) {
        self.listeners.push(listener);
    }

    /// Removes the first registration of `listener` (compared by identity).
    ///
    /// Returns `true` if a listener was removed.
    pub fn remove(&mut self, listener: &SelectionListener) -> bool {
        let Some(pos) = self.listeners.iter().position(|l| Arc::ptr_eq(l, listener)) else {
            return false;
        };
        self.listeners.remove(pos);
        true
    }

    pub fn notify(&self, selection: CenterSelection) {
        for listener in &self.listeners {
            listener(selection);
        }
    }
}

impl core::fmt::Debug for SelectionListeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectionListeners")
            .field("len", &self.listeners.len())
            .finish()
    }
}
