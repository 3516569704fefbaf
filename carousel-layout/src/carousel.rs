use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::controller::ScrollController;
use crate::float::round_half_up;
use crate::offset::pixel_offset_with;
use crate::planner::LayoutPlanner;
use crate::scroll_math::{
    center_index, current_center_position, direction_to_index, distance_to_index,
    offset_to_nearest_center,
};
use crate::selection::{SelectionListener, SelectionListeners, SelectionTracker};
use crate::{
    Axis, CarouselOptions, CenterSelection, Error, ItemRect, LayoutOutcome, LayoutSlot,
    PlacedItem, Result, SavedState, ScrollDirection, ScrollState, Size, Transform,
};

/// A headless carousel layout engine.
///
/// The engine holds no UI objects. Your adapter drives it by:
/// - keeping item count and item size up to date (`set_item_count`, `set_item_size`)
/// - forwarding scroll deltas (`apply_scroll_delta`)
/// - running a layout pass per frame (`layout`) and placing the returned items
/// - dispatching selection changes (`notify_selection`), now or on the next event loop turn
///
/// For smooth scrolling and snap-to-center, see the `carousel-layout-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    scroll: ScrollController,
    planner: LayoutPlanner,
    selection: SelectionTracker,
    listeners: SelectionListeners,
}

impl Carousel {
    /// Creates a new carousel centered on the first item.
    pub fn new(options: CarouselOptions) -> Result<Self> {
        options.validate()?;
        cdebug!(
            item_count = options.item_count,
            max_visible_items = options.max_visible_items,
            "Carousel::new"
        );
        let scroll = ScrollController::new(
            options.axis,
            options.wrap_mode,
            options.item_extent(),
            options.item_count,
        );
        Ok(Self {
            options,
            scroll,
            planner: LayoutPlanner::new(),
            selection: SelectionTracker::new(),
            listeners: SelectionListeners::new(),
        })
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Replaces the options, keeping the current center item where possible.
    ///
    /// Invalid options are rejected and leave the carousel untouched.
    pub fn set_options(&mut self, options: CarouselOptions) -> Result<()> {
        options.validate()?;
        let anchor = self.live_center_index();
        let prev_count = self.options.item_count;
        let prev_extent = self.options.item_extent();
        let prev_wrap = self.options.wrap_mode;
        self.options = options;
        cdebug!(
            item_count = self.options.item_count,
            max_visible_items = self.options.max_visible_items,
            "Carousel::set_options"
        );

        self.scroll.set_axis(self.options.axis);
        if self.options.wrap_mode != prev_wrap {
            self.scroll.set_wrap_mode(self.options.wrap_mode);
        }
        if self.options.item_count != prev_count || self.options.item_extent() != prev_extent {
            self.scroll.set_item_count(self.options.item_count);
            self.scroll.set_item_size(self.options.item_extent());
            self.reanchor(anchor);
        }
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) -> Result<()> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn axis(&self) -> Axis {
        self.options.axis
    }

    pub fn max_visible_items(&self) -> usize {
        self.options.max_visible_items
    }

    pub fn set_max_visible_items(&mut self, max_visible_items: usize) -> Result<()> {
        if max_visible_items == 0 {
            return Err(Error::InvalidMaxVisibleItems);
        }
        self.options.max_visible_items = max_visible_items;
        Ok(())
    }

    pub fn set_transform_fn(
        &mut self,
        f: Option<impl Fn(f32, Axis, Size) -> Option<Transform> + Send + Sync + 'static>,
    ) {
        self.options.transform_fn = f.map(|f| Arc::new(f) as _);
    }

    pub fn set_offset_curve(&mut self, f: impl Fn(f32, usize) -> f32 + Send + Sync + 'static) {
        self.options.offset_curve = Arc::new(f);
    }

    pub fn item_count(&self) -> usize {
        self.options.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.options.item_count == 0
    }

    /// Updates the item count.
    ///
    /// When the count changes, the offset is re-derived from the current center item (clamped
    /// to the new last item).
    pub fn set_item_count(&mut self, item_count: usize) {
        if self.options.item_count == item_count {
            return;
        }
        let anchor = self.live_center_index();
        self.options.item_count = item_count;
        self.scroll.set_item_count(item_count);
        self.reanchor(anchor);
        cdebug!(item_count, "set_item_count");
    }

    pub fn item_size(&self) -> Size {
        self.options.item_size
    }

    /// Updates the uniform item size (e.g. after re-measuring), keeping the center item.
    pub fn set_item_size(&mut self, item_size: Size) {
        if self.options.item_size == item_size {
            return;
        }
        let anchor = self.live_center_index();
        self.options.item_size = item_size;
        self.scroll.set_item_size(self.options.item_extent());
        self.reanchor(anchor);
        cdebug!(
            width = item_size.width,
            height = item_size.height,
            "set_item_size"
        );
    }

    // Read from the live offset: scrolls and jumps since the last layout pass count too.
    fn live_center_index(&self) -> Option<usize> {
        center_index(self.center_position(), self.options.item_count)
    }

    fn reanchor(&mut self, anchor: Option<usize>) {
        if let Some(index) = anchor {
            self.scroll.set_center_index(index as u64);
        }
    }

    /// Whether the carousel scrolls along `axis` at all.
    pub fn can_scroll(&self, axis: Axis) -> bool {
        self.options.item_count > 0 && self.options.axis == axis
    }

    pub fn scroll_state(&self) -> ScrollState {
        *self.scroll.state()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll.offset()
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll.scroll_direction()
    }

    /// Continuous center position in item units.
    ///
    /// The stored offset is canonical, so this stays below `item_count` for circular carousels.
    pub fn center_position(&self) -> f32 {
        current_center_position(self.scroll.state())
    }

    /// The selection reported by the last layout pass.
    pub fn center_selection(&self) -> CenterSelection {
        self.selection.current()
    }

    /// Applies a scroll delta along the carousel axis; returns the applied delta.
    pub fn apply_scroll_delta(&mut self, delta: i64) -> i64 {
        if self.options.item_count == 0 {
            return 0;
        }
        self.scroll.apply_delta(delta)
    }

    /// Applies a scroll delta reported for `axis`. Deltas along the cross axis are ignored.
    pub fn scroll_by(&mut self, axis: Axis, delta: i64) -> i64 {
        if axis != self.options.axis {
            return 0;
        }
        self.apply_scroll_delta(delta)
    }

    /// Centers `position` immediately (no animation).
    ///
    /// Positions past the last item are clamped to it; negative positions are rejected.
    pub fn scroll_to_position(&mut self, position: i64) -> Result<()> {
        ctrace!(position, "scroll_to_position");
        self.scroll.jump_to_index(position)
    }

    /// Pixel delta that would center `target`, taking the short way around when circular.
    pub fn delta_to_index(&self, target: usize) -> i64 {
        let count = self.options.item_count;
        if count == 0 {
            return 0;
        }
        let target = target.min(count - 1);
        let items = distance_to_index(
            self.center_position(),
            target,
            count,
            self.options.wrap_mode,
        );
        round_half_up(items * self.options.item_extent() as f32) as i64
    }

    pub fn direction_to_index(&self, target: usize) -> Option<ScrollDirection> {
        let count = self.options.item_count;
        if count == 0 {
            return None;
        }
        direction_to_index(
            self.center_position(),
            target.min(count - 1),
            count,
            self.options.wrap_mode,
        )
    }

    /// Pixel delta that centers the item nearest to the current position.
    pub fn offset_to_nearest_center(&self) -> i64 {
        offset_to_nearest_center(self.scroll.state())
    }

    /// Plans the current slots without computing geometry.
    pub fn plan(&mut self) -> &[LayoutSlot] {
        let position = self.center_position();
        self.planner.plan(
            position,
            self.options.item_count,
            self.options.max_visible_items,
            self.options.wrap_mode,
        )
    }

    /// Runs one layout pass inside `viewport`.
    ///
    /// `place` is called once per slot in draw order (the center item last). The returned outcome
    /// carries the new center selection if it changed since the previous pass; dispatch it with
    /// [`Self::notify_selection`] whenever it is safe for your UI to run listeners.
    pub fn layout(&mut self, viewport: Size, mut place: impl FnMut(PlacedItem)) -> LayoutOutcome {
        let axis = self.options.axis;
        let count = self.options.item_count;
        let max_visible = self.options.max_visible_items;
        let position = self.center_position();

        let item = self.options.item_size;
        let item_main = item.main(axis) as i32;
        let item_cross = item.cross(axis) as i32;
        let center_start = (viewport.main(axis) as i32 - item_main) / 2;
        let cross_start = (viewport.cross(axis) as i32 - item_cross) / 2;

        let curve = &self.options.offset_curve;
        let transform_fn = &self.options.transform_fn;
        let slots = self
            .planner
            .plan(position, count, max_visible, self.options.wrap_mode);

        for (draw_order, slot) in slots.iter().enumerate() {
            let offset = pixel_offset_with(
                |d, m| curve(d, m),
                slot.distance,
                max_visible,
                center_start,
            );
            let main_start = center_start.saturating_add(offset);
            let rect = match axis {
                Axis::Horizontal => ItemRect {
                    start: main_start,
                    top: cross_start,
                    end: main_start.saturating_add(item_main),
                    bottom: cross_start.saturating_add(item_cross),
                },
                Axis::Vertical => ItemRect {
                    start: cross_start,
                    top: main_start,
                    end: cross_start.saturating_add(item_cross),
                    bottom: main_start.saturating_add(item_main),
                },
            };
            let transform = transform_fn
                .as_ref()
                .and_then(|f| f(slot.distance, axis, item));
            place(PlacedItem {
                index: slot.index,
                distance: slot.distance,
                draw_order,
                rect,
                transform,
            });
        }
        let slot_count = slots.len();

        let selection_change = self.selection.update(position, count);
        ctrace!(
            position,
            slot_count,
            changed = selection_change.is_some(),
            "layout"
        );
        LayoutOutcome {
            slot_count,
            selection_change,
        }
    }

    /// Runs [`Self::layout`] and dispatches a changed selection right away.
    pub fn layout_and_notify(
        &mut self,
        viewport: Size,
        place: impl FnMut(PlacedItem),
    ) -> LayoutOutcome {
        let outcome = self.layout(viewport, place);
        if let Some(selection) = outcome.selection_change {
            self.notify_selection(selection);
        }
        outcome
    }

    /// Collects placed items into `out` (clears `out` first).
    ///
    /// This is a convenience wrapper around [`Self::layout`]. For maximum performance, prefer
    /// `layout` and place items directly.
    pub fn collect_items(&mut self, viewport: Size, out: &mut Vec<PlacedItem>) -> LayoutOutcome {
        out.clear();
        self.layout(viewport, |item| out.push(item))
    }

    pub fn add_selection_listener(&mut self, listener: SelectionListener) {
        self.listeners.add(listener);
    }

    /// Removes `listener` (compared by identity). Returns `true` if it was registered.
    pub fn remove_selection_listener(&mut self, listener: &SelectionListener) -> bool {
        self.listeners.remove(listener)
    }

    /// Calls every selection listener, in registration order.
    pub fn notify_selection(&self, selection: CenterSelection) {
        self.listeners.notify(selection);
    }

    pub fn save_state(&self) -> SavedState {
        SavedState::new(self.selection.current().index.unwrap_or(0))
    }

    /// Restores a saved center item, clamped to the current item count.
    pub fn restore_state(&mut self, saved: SavedState) -> Result<()> {
        cdebug!(
            center_selection_index = saved.center_selection_index,
            "restore_state"
        );
        self.scroll.restore(saved)
    }
}
