use carousel_layout::{Carousel, CarouselOptions, Error, Result};

use crate::{CenterSnap, Easing, ScrollPhase, Tween};

/// Which kind of item the user clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemClick {
    /// The centered item. The host handles it (open, activate, ...).
    Center,
    /// Any other item. The controller starts scrolling it to the center.
    Back,
}

/// A framework-neutral controller that wraps a [`Carousel`] and provides common adapter
/// workflows (smooth scrolling, snap-to-center, click routing).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` / `on_scroll_phase` when UI scroll events occur
/// - `on_item_click` when an item is clicked
/// - `tick(now_ms)` each frame/timer tick while [`Self::is_animating`]
#[derive(Clone, Debug)]
pub struct Controller {
    carousel: Carousel,
    tween: Option<Tween>,
    // Part of the active tween's distance already applied to the carousel.
    travelled: i64,
    snap: CenterSnap,
    snap_duration_ms: u64,
    snap_easing: Easing,
}

impl Controller {
    pub const DEFAULT_SNAP_DURATION_MS: u64 = 200;

    pub fn new(options: CarouselOptions) -> Result<Self> {
        Ok(Self::from_carousel(Carousel::new(options)?))
    }

    pub fn from_carousel(carousel: Carousel) -> Self {
        Self {
            carousel,
            tween: None,
            travelled: 0,
            snap: CenterSnap::new(),
            snap_duration_ms: Self::DEFAULT_SNAP_DURATION_MS,
            snap_easing: Easing::default(),
        }
    }

    /// Sets the animation used for snapping and for clicks on back items.
    pub fn with_snap_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.snap_duration_ms = duration_ms;
        self.snap_easing = easing;
        self
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn into_carousel(self) -> Carousel {
        self.carousel
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        if self.tween.take().is_some() {
            adebug!(travelled = self.travelled, "cancel_animation");
        }
        self.travelled = 0;
    }

    /// Call this when the user scrolls the content (wheel, drag). Returns the applied delta.
    ///
    /// This cancels any active tween.
    pub fn on_scroll(&mut self, delta: i64) -> i64 {
        self.cancel_animation();
        self.carousel.apply_scroll_delta(delta)
    }

    /// Call this when the host's scroll phase changes.
    ///
    /// Dragging cancels any active tween. Going idle after a drag or fling starts a snap tween
    /// and returns its distance.
    pub fn on_scroll_phase(&mut self, phase: ScrollPhase, now_ms: u64) -> Option<i64> {
        if phase == ScrollPhase::Dragging {
            self.cancel_animation();
        }
        let delta = self.snap.on_phase(phase, &self.carousel.scroll_state())?;
        adebug!(delta, "snap to center");
        self.start_tween(delta, now_ms, self.snap_duration_ms, self.snap_easing);
        Some(delta)
    }

    /// Starts a smooth scroll that centers `target`, taking the short way around when circular.
    ///
    /// Targets past the last item are clamped to it. Returns the distance of the scroll.
    pub fn smooth_scroll_to_index(
        &mut self,
        target: i64,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Result<i64> {
        if target < 0 {
            return Err(Error::NegativePosition(target));
        }
        let index = usize::try_from(target).unwrap_or(usize::MAX);
        let delta = self.carousel.delta_to_index(index);
        self.start_tween(delta, now_ms, duration_ms, easing);
        Ok(delta)
    }

    /// Starts a smooth scroll by `delta` pixels.
    pub fn smooth_scroll_by(&mut self, delta: i64, now_ms: u64, duration_ms: u64, easing: Easing) {
        self.start_tween(delta, now_ms, duration_ms, easing);
    }

    /// Routes a click on the item at `index`.
    pub fn on_item_click(&mut self, index: usize, now_ms: u64) -> ItemClick {
        if self.carousel.center_selection().index == Some(index) {
            return ItemClick::Center;
        }
        let delta = self.carousel.delta_to_index(index);
        self.start_tween(delta, now_ms, self.snap_duration_ms, self.snap_easing);
        ItemClick::Back
    }

    /// Advances the active tween.
    ///
    /// Returns the delta applied to the carousel during this tick, or `None` if nothing is
    /// animating.
    pub fn tick(&mut self, now_ms: u64) -> Option<i64> {
        let tween = self.tween?;
        let position = tween.sample(now_ms);
        let step = position - self.travelled;
        let applied = self.carousel.apply_scroll_delta(step);
        self.travelled = position;
        atrace!(now_ms, step, applied, "tick");

        // A short apply means the carousel hit an end (e.g. the item count shrank meanwhile).
        if tween.is_done(now_ms) || applied != step {
            self.tween = None;
            self.travelled = 0;
        }
        Some(applied)
    }

    fn start_tween(&mut self, delta: i64, now_ms: u64, duration_ms: u64, easing: Easing) {
        self.travelled = 0;
        if delta == 0 {
            self.tween = None;
            return;
        }
        self.tween = Some(Tween::new(delta, now_ms, duration_ms, easing));
        adebug!(delta, duration_ms, "start_tween");
    }
}
