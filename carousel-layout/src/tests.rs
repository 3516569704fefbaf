use crate::*;

use crate::float::{abs, round_half_up};
use crate::scroll_math::{center_index, current_center_position, normalize_to_range};

use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }

    fn gen_range_i64(&mut self, start: i64, end_exclusive: i64) -> i64 {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as i64
    }

    fn gen_f32(&mut self, start: f32, end: f32) -> f32 {
        let t = (self.next_u64() % 1_000_001) as f32 / 1_000_000.0;
        start + (end - start) * t
    }
}

fn approx(a: f32, b: f32) -> bool {
    abs(a - b) < 1e-4
}

fn carousel(item_count: usize, wrap_mode: WrapMode) -> Carousel {
    let opts = CarouselOptions::new(Axis::Horizontal, item_count, Size::new(100, 200))
        .with_wrap_mode(wrap_mode);
    Carousel::new(opts).unwrap()
}

fn indexes(slots: &[LayoutSlot]) -> Vec<usize> {
    slots.iter().map(|s| s.index).collect()
}

#[test]
fn jump_to_index_centers_item_and_plans_window() {
    let mut c = carousel(10, WrapMode::Clamped);
    c.scroll_to_position(5).unwrap();
    assert_eq!(c.center_position(), 5.0);

    let slots = c.plan();
    // window [5 - 2 - 1, 5 + 2 + 1]: before-center ascending, after-center descending, center last
    assert_eq!(indexes(slots), [2, 3, 4, 8, 7, 6, 5]);
    let last = slots.last().unwrap();
    assert_eq!(last.index, 5);
    assert_eq!(last.distance, 0.0);

    let mut sorted = indexes(slots);
    sorted.sort_unstable();
    assert_eq!(sorted, [2, 3, 4, 5, 6, 7, 8]);
    for s in slots {
        assert_eq!(s.distance, s.index as f32 - 5.0);
    }
}

#[test]
fn clamped_delta_stops_at_max_offset() {
    let mut c = carousel(10, WrapMode::Clamped);
    c.scroll_to_position(5).unwrap();
    assert_eq!(c.apply_scroll_delta(1000), 400);
    assert_eq!(c.scroll_offset(), 900);
    assert_eq!(c.center_position(), 9.0);

    assert_eq!(c.apply_scroll_delta(1), 0);
    assert_eq!(c.apply_scroll_delta(-5000), -900);
    assert_eq!(c.scroll_offset(), 0);
    assert_eq!(c.scroll_direction(), Some(ScrollDirection::Backward));
}

#[test]
fn circular_negative_delta_wraps_between_last_items() {
    let mut c = carousel(5, WrapMode::Circular);
    assert_eq!(c.apply_scroll_delta(-150), -150);
    assert_eq!(c.scroll_offset(), 350);
    let position = normalize_to_range(c.center_position(), 5);
    assert_eq!(position, 3.5);
    assert_eq!(center_index(position, 5), Some(4));
}

#[test]
fn empty_carousel_plans_nothing_and_reports_none_once() {
    assert!(plan(0.0, 0, 2, WrapMode::Clamped).is_empty());
    assert!(plan(3.0, 0, 2, WrapMode::Circular).is_empty());

    let mut tracker = SelectionTracker::new();
    assert_eq!(tracker.update(0.0, 0), Some(CenterSelection::NONE));
    assert_eq!(tracker.update(0.0, 0), None);
    assert_eq!(tracker.update(4.0, 0), None);

    let mut c = carousel(0, WrapMode::Clamped);
    let mut placed = 0;
    let outcome = c.layout(Size::new(500, 300), |_| placed += 1);
    assert_eq!(placed, 0);
    assert_eq!(outcome.slot_count, 0);
    assert_eq!(outcome.selection_change, Some(CenterSelection::NONE));
    assert_eq!(c.layout(Size::new(500, 300), |_| {}).selection_change, None);
    assert_eq!(c.apply_scroll_delta(100), 0);
    assert!(!c.can_scroll(Axis::Horizontal));
}

#[test]
fn pixel_offset_picks_curve_branch_by_threshold() {
    assert_eq!(pixel_offset(0.0, 2, 100), 0);
    // 2 > (1/2)^(1/3) ~= 0.79: sqrt(2 / 2) = 1
    assert_eq!(default_offset_curve(2.0, 2), 1.0);
    assert_eq!(pixel_offset(2.0, 2, 100), 100);
    // 0.5 <= 0.79: 0.5^2
    assert_eq!(pixel_offset(0.5, 2, 100), 25);
    // sqrt(1 / 2) * 100 = 70.7
    assert_eq!(pixel_offset(1.0, 2, 100), 71);
    assert_eq!(pixel_offset(-1.0, 2, 100), -71);
}

#[test]
fn pixel_offset_is_odd() {
    let mut rng = Lcg::new(7);
    for _ in 0..2000 {
        let d = rng.gen_f32(-6.0, 6.0);
        let m = rng.gen_range_usize(1, 8);
        let h = rng.gen_range_i64(0, 1000) as i32;
        assert_eq!(
            pixel_offset(d, m, h),
            -pixel_offset(-d, m, h),
            "d={d} m={m} h={h}"
        );
    }
    // exact .5 magnitudes must not break symmetry
    assert_eq!(pixel_offset(0.5, 2, 10), 3);
    assert_eq!(pixel_offset(-0.5, 2, 10), -3);
}

#[test]
fn custom_offset_curve_is_used() {
    let linear = |d: f32, m: usize| d / m as f32;
    assert_eq!(pixel_offset_with(linear, 1.0, 2, 100), 50);
    assert_eq!(pixel_offset_with(linear, -3.0, 2, 100), -150);

    let mut c = Carousel::new(
        CarouselOptions::new(Axis::Horizontal, 10, Size::new(100, 100)).with_offset_curve(linear),
    )
    .unwrap();
    c.scroll_to_position(5).unwrap();
    let mut items = Vec::new();
    let _ = c.collect_items(Size::new(500, 100), &mut items);
    let six = items.iter().find(|it| it.index == 6).unwrap();
    // half extent 200, linear 1 / 2
    assert_eq!(six.rect.start, 300);
}

#[test]
fn clamped_center_stays_in_range_under_random_deltas() {
    let mut rng = Lcg::new(42);
    for _ in 0..50 {
        let count = rng.gen_range_usize(2, 40);
        let mut c = carousel(count, WrapMode::Clamped);
        for _ in 0..100 {
            let requested = rng.gen_range_i64(-3000, 3000);
            let before = c.scroll_offset() as i64;
            let applied = c.apply_scroll_delta(requested);
            assert!(abs(applied as f32) <= abs(requested as f32));
            assert!(applied == 0 || (applied > 0) == (requested > 0));
            assert_eq!(c.scroll_offset() as i64, before + applied);

            let p = c.center_position();
            assert!((0.0..=(count - 1) as f32).contains(&p), "p={p} count={count}");
        }
    }
}

#[test]
fn circular_center_folds_into_range_under_random_deltas() {
    let mut rng = Lcg::new(1234);
    for _ in 0..50 {
        let count = rng.gen_range_usize(2, 30);
        let mut c = carousel(count, WrapMode::Circular);
        for _ in 0..100 {
            let requested = rng.gen_range_i64(-10_000, 10_000);
            assert_eq!(c.apply_scroll_delta(requested), requested);
            let normalized = normalize_to_range(c.center_position(), count);
            let rounded = round_half_up(normalized);
            assert!(rounded >= 0.0 && rounded < count as f32, "n={normalized}");
            assert!(c.center_position() < count as f32);

            let before = c.center_position();
            let turn = 100 * count as i64;
            c.apply_scroll_delta(turn);
            assert_eq!(c.center_position(), before);
            c.apply_scroll_delta(-turn);
            assert_eq!(c.center_position(), before);
        }
    }
}

#[test]
fn normalize_folds_by_rounded_index() {
    assert_eq!(normalize_to_range(-1.0, 5), 4.0);
    assert_eq!(normalize_to_range(-12.0, 5), 3.0);
    assert_eq!(normalize_to_range(7.0, 5), 2.0);
    assert_eq!(normalize_to_range(4.4, 5), 4.4);
    // 4.6 rounds to 5, which is folded back to just before item 0
    assert!(approx(normalize_to_range(4.6, 5), -0.4));
    assert_eq!(center_index(4.6, 5), Some(0));
    assert_eq!(normalize_to_range(3.0, 0), 0.0);
}

#[test]
fn normalize_folds_far_positions_in_one_step() {
    assert_eq!(normalize_to_range(1.0e8, 2), 0.0);
    assert_eq!(center_index(1.0e8, 2), Some(0));
    // 1e8 = 3 * 33333333 + 1
    assert_eq!(normalize_to_range(-1.0e8, 3), 2.0);
    assert_eq!(center_index(f32::MAX, 7).map(|i| i < 7), Some(true));
    assert_eq!(center_index(f32::INFINITY, 7).map(|i| i < 7), Some(true));

    let mut tracker = SelectionTracker::new();
    assert_eq!(tracker.update(3.0e7, 3), Some(CenterSelection::at(0)));
    assert_eq!(tracker.update(3.0e7, 3), None);

    assert_eq!(plan(1.0e8, 10, 2, WrapMode::Circular).last().unwrap().index, 0);

    let mut rng = Lcg::new(5);
    for _ in 0..2000 {
        let count = rng.gen_range_usize(1, 60);
        let position = rng.gen_f32(-1.0e9, 1.0e9);
        let rounded = round_half_up(normalize_to_range(position, count));
        assert!(
            rounded >= 0.0 && rounded < count as f32,
            "position={position} count={count}"
        );
    }
}

#[test]
fn center_index_rounds_half_up() {
    assert_eq!(center_index(4.5, 10), Some(5));
    assert_eq!(center_index(4.49, 10), Some(4));

    let mut c = carousel(10, WrapMode::Clamped);
    c.apply_scroll_delta(450);
    let outcome = c.layout(Size::new(500, 300), |_| {});
    assert_eq!(outcome.selection_change, Some(CenterSelection::at(5)));
    assert_eq!(c.plan().last().unwrap().index, 5);
}

#[test]
fn planning_is_idempotent() {
    let mut rng = Lcg::new(99);
    let mut planner = LayoutPlanner::new();
    for _ in 0..200 {
        let count = rng.gen_range_usize(0, 25);
        let m = rng.gen_range_usize(1, 5);
        let wrap = if rng.next_u64() & 1 == 0 {
            WrapMode::Clamped
        } else {
            WrapMode::Circular
        };
        let position = rng.gen_f32(0.0, count.saturating_sub(1) as f32);
        let first = planner.plan(position, count, m, wrap).to_vec();
        let second = planner.plan(position, count, m, wrap).to_vec();
        assert_eq!(first, second);
        assert_eq!(first, plan(position, count, m, wrap));
    }
}

#[test]
fn circular_plan_walks_both_ways_around() {
    let slots = plan(0.0, 10, 2, WrapMode::Circular);
    assert_eq!(indexes(&slots), [7, 8, 9, 3, 2, 1, 0]);
    let distances: Vec<f32> = slots.iter().map(|s| s.distance).collect();
    assert_eq!(distances, [-3.0, -2.0, -1.0, 3.0, 2.0, 1.0, 0.0]);

    // fewer items than slots: floor(4 / 2) before, ceil(4 / 2) - 1 after
    let slots = plan(0.0, 4, 2, WrapMode::Circular);
    assert_eq!(indexes(&slots), [2, 3, 1, 0]);

    let slots = plan(2.0, 2, 2, WrapMode::Circular);
    assert_eq!(indexes(&slots), [1, 0]);
}

#[test]
fn circular_plan_handles_fractional_wrap() {
    let slots = plan(9.6, 10, 1, WrapMode::Circular);
    // 5 slots: center 0 (rounded from 9.6), two before, two after
    assert_eq!(indexes(&slots), [8, 9, 2, 1, 0]);
    let center = slots[4];
    assert!(approx(center.distance, 0.4));
    assert!(approx(slots[1].distance, -0.6));
    assert!(approx(slots[3].distance, 1.4));
}

#[test]
fn clamped_plan_is_cut_at_both_ends() {
    assert_eq!(indexes(&plan(0.0, 10, 2, WrapMode::Clamped)), [3, 2, 1, 0]);
    assert_eq!(indexes(&plan(9.0, 10, 2, WrapMode::Clamped)), [6, 7, 8, 9]);
    // mid-scroll: center is the rounded position
    let slots = plan(1.25, 10, 1, WrapMode::Clamped);
    assert_eq!(indexes(&slots), [0, 3, 2, 1]);
    assert_eq!(slots[3].distance, -0.25);
}

#[test]
fn single_item_never_scrolls() {
    for wrap in [WrapMode::Clamped, WrapMode::Circular] {
        let mut c = carousel(1, wrap);
        assert_eq!(c.apply_scroll_delta(250), 0);
        assert_eq!(c.center_position(), 0.0);
        assert_eq!(indexes(c.plan()), [0]);
        assert_eq!(c.plan()[0].distance, 0.0);
    }
}

#[test]
fn negative_positions_are_rejected() {
    let mut c = carousel(10, WrapMode::Clamped);
    let err = c.scroll_to_position(-1).unwrap_err();
    assert_eq!(err, Error::NegativePosition(-1));
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert_eq!(c.scroll_offset(), 0);

    c.scroll_to_position(25).unwrap();
    assert_eq!(c.scroll_offset(), 900);
}

#[test]
fn invalid_configuration_fails_fast() {
    let opts =
        CarouselOptions::new(Axis::Vertical, 3, Size::new(10, 10)).with_max_visible_items(0);
    let err = Carousel::new(opts).unwrap_err();
    assert_eq!(err, Error::InvalidMaxVisibleItems);
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);

    assert_eq!(Axis::try_from(2), Err(Error::InvalidAxis(2)));
    assert_eq!(Axis::try_from(Axis::VERTICAL), Ok(Axis::Vertical));
    assert!(CarouselOptions::from_raw_axis(-1, 3, Size::new(10, 10)).is_err());

    let mut c = carousel(3, WrapMode::Clamped);
    assert!(c.set_max_visible_items(0).is_err());
    assert_eq!(c.max_visible_items(), 2);
    assert!(c.update_options(|o| o.max_visible_items = 0).is_err());
    assert_eq!(c.max_visible_items(), 2);
}

#[test]
fn selection_changes_are_debounced_and_multicast_in_order() {
    let log = Arc::new(Mutex::new(Vec::<(u8, Option<usize>)>::new()));
    let mut c = carousel(10, WrapMode::Clamped);

    let first_log = Arc::clone(&log);
    let first: SelectionListener =
        Arc::new(move |s: CenterSelection| first_log.lock().unwrap().push((1, s.index)));
    let second_log = Arc::clone(&log);
    let second: SelectionListener =
        Arc::new(move |s: CenterSelection| second_log.lock().unwrap().push((2, s.index)));
    c.add_selection_listener(Arc::clone(&first));
    c.add_selection_listener(Arc::clone(&second));

    let viewport = Size::new(500, 300);
    let _ = c.layout_and_notify(viewport, |_| {});
    let _ = c.layout_and_notify(viewport, |_| {});
    assert_eq!(*log.lock().unwrap(), [(1, Some(0)), (2, Some(0))]);

    // Less than half an item: same rounded center.
    c.apply_scroll_delta(40);
    let _ = c.layout_and_notify(viewport, |_| {});
    assert_eq!(log.lock().unwrap().len(), 2);

    c.apply_scroll_delta(60);
    let outcome = c.layout_and_notify(viewport, |_| {});
    assert_eq!(outcome.selection_change, Some(CenterSelection::at(1)));
    assert_eq!(log.lock().unwrap()[2..], [(1, Some(1)), (2, Some(1))]);

    assert!(c.remove_selection_listener(&first));
    assert!(!c.remove_selection_listener(&first));
    c.apply_scroll_delta(100);
    let _ = c.layout_and_notify(viewport, |_| {});
    assert_eq!(log.lock().unwrap()[4..], [(2, Some(2))]);
}

#[test]
fn deferred_notification_is_left_to_the_host() {
    let hits = Arc::new(Mutex::new(0));
    let mut c = carousel(3, WrapMode::Clamped);
    let h = Arc::clone(&hits);
    c.add_selection_listener(Arc::new(move |_: CenterSelection| *h.lock().unwrap() += 1));

    let outcome = c.layout(Size::new(300, 300), |_| {});
    assert_eq!(*hits.lock().unwrap(), 0);
    if let Some(selection) = outcome.selection_change {
        c.notify_selection(selection);
    }
    assert_eq!(*hits.lock().unwrap(), 1);
}

#[test]
fn horizontal_layout_places_items_around_center() {
    let mut c = carousel(10, WrapMode::Clamped);
    c.scroll_to_position(5).unwrap();
    let mut items = Vec::new();
    let outcome = c.collect_items(Size::new(500, 300), &mut items);
    assert_eq!(outcome.slot_count, 7);
    assert_eq!(items.len(), 7);

    let center = items.last().unwrap();
    assert_eq!(center.index, 5);
    assert_eq!(center.draw_order, 6);
    assert_eq!(
        center.rect,
        ItemRect {
            start: 200,
            top: 50,
            end: 300,
            bottom: 250,
        }
    );

    let start_of = |index: usize| items.iter().find(|it| it.index == index).unwrap().rect.start;
    // half extent 200: sqrt(1/2) -> 141, sqrt(2/2) -> 200, sqrt(3/2) -> 245
    assert_eq!(start_of(6), 341);
    assert_eq!(start_of(4), 59);
    assert_eq!(start_of(7), 400);
    assert_eq!(start_of(3), 0);
    assert_eq!(start_of(8), 445);
    assert!(items.iter().all(|it| it.transform.is_none()));
    assert!(items.iter().all(|it| it.layout_rect() == it.rect));
}

#[test]
fn vertical_layout_uses_heights() {
    let opts = CarouselOptions::new(Axis::Vertical, 5, Size::new(80, 100));
    let mut c = Carousel::new(opts).unwrap();
    assert_eq!(c.scroll_by(Axis::Horizontal, 100), 0);
    assert_eq!(c.scroll_by(Axis::Vertical, 100), 100);
    assert!(c.can_scroll(Axis::Vertical));
    assert!(!c.can_scroll(Axis::Horizontal));

    let mut items = Vec::new();
    let _ = c.collect_items(Size::new(200, 600), &mut items);
    let center = items.last().unwrap();
    assert_eq!(center.index, 1);
    assert_eq!(
        center.rect,
        ItemRect {
            start: 60,
            top: 250,
            end: 140,
            bottom: 350,
        }
    );
    let below = items.iter().find(|it| it.index == 2).unwrap();
    assert_eq!(below.rect.start, 60);
    assert!(below.rect.top > center.rect.top);
    assert_eq!(below.rect.height(), 100);
}

#[test]
fn zoom_transform_shrinks_and_anchors_outwards() {
    let zoom = ZoomTransform::default();
    assert_eq!(zoom.scale_multiplier, 0.17);

    let item = Size::new(100, 40);
    let t = zoom.transform(1.0, Axis::Horizontal, item);
    assert!(approx(t.scale_x, 0.83));
    assert!(approx(t.scale_y, 0.83));
    assert!(approx(t.translate_x, 8.5));
    assert_eq!(t.translate_y, 0.0);

    let t = zoom.transform(-2.0, Axis::Vertical, item);
    assert!(approx(t.scale_x, 0.66));
    assert_eq!(t.translate_x, 0.0);
    assert!(approx(t.translate_y, -40.0 * 0.34 / 2.0));

    assert_eq!(zoom.transform(0.0, Axis::Horizontal, item), Transform::IDENTITY);
}

#[test]
fn transform_fn_is_applied_per_slot() {
    let opts =
        CarouselOptions::new(Axis::Horizontal, 10, Size::new(100, 100)).with_zoom(0.1);
    let mut c = Carousel::new(opts).unwrap();
    c.scroll_to_position(5).unwrap();
    let mut items = Vec::new();
    let _ = c.collect_items(Size::new(500, 100), &mut items);

    for it in &items {
        let t = it.transform.unwrap();
        assert!(approx(t.scale_x, 1.0 - 0.1 * abs(it.distance)));
    }
    let seven = items.iter().find(|it| it.index == 7).unwrap();
    // distance 2: translate 100 * 0.2 / 2 = 10
    assert_eq!(seven.layout_rect().start, seven.rect.start + 10);

    c.set_transform_fn(None::<fn(f32, Axis, Size) -> Option<Transform>>);
    let _ = c.collect_items(Size::new(500, 100), &mut items);
    assert!(items.iter().all(|it| it.transform.is_none()));
}

#[test]
fn save_and_restore_clamps_to_current_count() {
    let mut c = carousel(10, WrapMode::Clamped);
    c.scroll_to_position(7).unwrap();
    let _ = c.layout(Size::new(500, 300), |_| {});
    let saved = c.save_state();
    assert_eq!(saved, SavedState::new(7));

    let mut smaller = carousel(5, WrapMode::Clamped);
    smaller.restore_state(saved).unwrap();
    assert_eq!(smaller.scroll_offset(), 400);

    let mut bigger = carousel(20, WrapMode::Circular);
    bigger.restore_state(saved).unwrap();
    assert_eq!(bigger.center_position(), 7.0);

    let stale = SavedState {
        version: 99,
        center_selection_index: 1,
    };
    let err = bigger.restore_state(stale).unwrap_err();
    assert_eq!(err, Error::UnsupportedStateVersion(99));
    assert_eq!(bigger.center_position(), 7.0);
}

#[cfg(feature = "serde")]
#[test]
fn saved_state_serializes_as_plain_record() {
    let json = serde_json::to_string(&SavedState::new(3)).unwrap();
    assert_eq!(json, r#"{"version":1,"center_selection_index":3}"#);
    let back: SavedState = serde_json::from_str(&json).unwrap();
    assert_eq!(back.center_selection_index, 3);
}

#[test]
fn item_count_change_reanchors_on_center_item() {
    let mut c = carousel(10, WrapMode::Clamped);
    c.scroll_to_position(7).unwrap();
    let _ = c.layout(Size::new(500, 300), |_| {});

    c.set_item_count(5);
    assert_eq!(c.scroll_offset(), 400);
    assert_eq!(
        c.layout(Size::new(500, 300), |_| {}).selection_change,
        Some(CenterSelection::at(4))
    );

    c.set_item_count(0);
    assert_eq!(c.scroll_offset(), 0);
    assert_eq!(
        c.layout(Size::new(500, 300), |_| {}).selection_change,
        Some(CenterSelection::NONE)
    );
}

#[test]
fn geometry_change_keeps_scrolls_made_since_last_layout() {
    let viewport = Size::new(500, 300);

    let mut c = carousel(10, WrapMode::Clamped);
    let _ = c.layout(viewport, |_| {});
    c.apply_scroll_delta(500);
    c.set_item_count(11);
    assert_eq!(c.scroll_offset(), 500);
    assert_eq!(
        c.layout(viewport, |_| {}).selection_change,
        Some(CenterSelection::at(5))
    );

    let mut c = carousel(10, WrapMode::Clamped);
    let _ = c.layout(viewport, |_| {});
    c.scroll_to_position(6).unwrap();
    c.set_item_count(12);
    assert_eq!(c.scroll_offset(), 600);

    let mut c = carousel(10, WrapMode::Circular);
    let _ = c.layout(viewport, |_| {});
    c.apply_scroll_delta(-300);
    c.set_item_size(Size::new(50, 200));
    assert_eq!(c.scroll_offset(), 350);

    let mut c = carousel(10, WrapMode::Clamped);
    c.scroll_to_position(8).unwrap();
    c.update_options(|o| o.item_count = 20).unwrap();
    assert_eq!(c.scroll_offset(), 800);
    c.update_options(|o| o.item_count = 4).unwrap();
    assert_eq!(c.scroll_offset(), 300);
}

#[test]
fn item_size_change_keeps_center_item() {
    let mut c = carousel(10, WrapMode::Circular);
    c.scroll_to_position(3).unwrap();
    c.apply_scroll_delta(20);
    let _ = c.layout(Size::new(500, 300), |_| {});

    c.set_item_size(Size::new(50, 200));
    assert_eq!(c.scroll_offset(), 150);
    assert_eq!(c.scroll_state().item_size, 50);
}

#[test]
fn delta_to_index_takes_short_way_when_circular() {
    let mut c = carousel(10, WrapMode::Circular);
    assert_eq!(c.delta_to_index(8), -200);
    assert_eq!(c.direction_to_index(8), Some(ScrollDirection::Backward));
    assert_eq!(c.delta_to_index(2), 200);
    // antipodal: the direct path wins
    assert_eq!(c.delta_to_index(5), 500);
    assert_eq!(c.direction_to_index(0), None);

    c.apply_scroll_delta(950);
    // position 9.5 rounds to 10 -> folded to -0.5
    assert_eq!(c.delta_to_index(0), 50);
    assert_eq!(c.delta_to_index(9), -50);

    let c = carousel(10, WrapMode::Clamped);
    assert_eq!(c.delta_to_index(8), 800);
    assert_eq!(c.delta_to_index(50), 900);
}

#[test]
fn offset_to_nearest_center_snaps_both_ways() {
    let mut c = carousel(10, WrapMode::Clamped);
    c.apply_scroll_delta(130);
    assert_eq!(c.offset_to_nearest_center(), -30);
    c.apply_scroll_delta(30);
    assert_eq!(c.offset_to_nearest_center(), 40);
    c.apply_scroll_delta(40);
    assert_eq!(c.offset_to_nearest_center(), 0);
}

#[test]
fn wrap_mode_switch_keeps_offset_canonical() {
    let mut c = carousel(4, WrapMode::Circular);
    c.apply_scroll_delta(-50);
    assert_eq!(c.scroll_offset(), 350);
    c.update_options(|o| o.wrap_mode = WrapMode::Clamped).unwrap();
    assert_eq!(c.scroll_offset(), 300);
    assert_eq!(current_center_position(&c.scroll_state()), 3.0);
}

#[test]
fn planner_buffer_follows_slot_count() {
    let mut planner = LayoutPlanner::new();
    assert_eq!(planner.plan(0.0, 20, 3, WrapMode::Circular).len(), 9);
    assert_eq!(planner.plan(10.0, 20, 1, WrapMode::Clamped).len(), 5);
    assert_eq!(planner.slots().len(), 5);
    assert_eq!(planner.plan(0.0, 0, 1, WrapMode::Clamped).len(), 0);
}
