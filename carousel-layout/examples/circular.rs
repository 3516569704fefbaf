// Example: circular carousel with zoom and a selection listener.
use std::sync::Arc;

use carousel_layout::{Axis, Carousel, CarouselOptions, CenterSelection, Size, ZoomTransform};

fn main() {
    let opts = CarouselOptions::new(Axis::Vertical, 5, Size::new(200, 80))
        .with_circular(true)
        .with_max_visible_items(1)
        .with_zoom(ZoomTransform::DEFAULT_SCALE_MULTIPLIER);
    let mut c = Carousel::new(opts).expect("valid options");
    c.add_selection_listener(Arc::new(|s: CenterSelection| {
        println!("  selected {:?}", s.index);
    }));

    let viewport = Size::new(240, 400);
    // Scroll backwards past the first item, 30px per frame.
    for frame in 0..8 {
        let offset = c.scroll_offset();
        let _ = c.layout_and_notify(viewport, |it| {
            if it.draw_order == 0 || it.distance.abs() < 0.5 {
                println!(
                    "frame={frame} offset={offset} index={} distance={:+.2} rect={:?}",
                    it.index,
                    it.distance,
                    it.layout_rect()
                );
            }
        });
        c.apply_scroll_delta(-30);
    }

    println!(
        "position={:.2} delta_to_index(0)={} direction={:?}",
        c.center_position(),
        c.delta_to_index(0),
        c.direction_to_index(0)
    );
}
