// Example: clamped carousel, jump to an item and print one layout pass.
use carousel_layout::{Axis, Carousel, CarouselOptions, Size};

fn main() {
    let opts = CarouselOptions::new(Axis::Horizontal, 10, Size::new(100, 160));
    let mut c = Carousel::new(opts).expect("valid options");
    c.scroll_to_position(5).expect("non-negative position");

    let viewport = Size::new(640, 240);
    let mut items = Vec::new();
    let outcome = c.collect_items(viewport, &mut items);
    println!(
        "center_position={} slots={} selection={:?}",
        c.center_position(),
        outcome.slot_count,
        outcome.selection_change
    );
    for it in &items {
        println!(
            "draw#{} index={} distance={:+.2} rect={:?}",
            it.draw_order, it.index, it.distance, it.rect
        );
    }

    // Past the end: only part of the delta is applied.
    let applied = c.apply_scroll_delta(1_000);
    println!(
        "requested=1000 applied={applied} offset={} center_position={}",
        c.scroll_offset(),
        c.center_position()
    );
}
