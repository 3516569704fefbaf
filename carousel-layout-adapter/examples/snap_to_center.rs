use carousel_layout::{Axis, CarouselOptions, Size, WrapMode};
use carousel_layout_adapter::{Controller, Easing, ItemClick, ScrollPhase};

fn main() {
    // Example: a controller driving a circular carousel without holding any UI objects.
    //
    // An adapter would:
    // - forward drag deltas and scroll phases from its scroll container
    // - call tick(now_ms) in a frame loop while the controller is animating
    // - run a layout pass per frame and draw the placed items
    let opts = CarouselOptions::new(Axis::Horizontal, 8, Size::new(120, 90))
        .with_wrap_mode(WrapMode::Circular)
        .with_zoom(0.15);
    let mut c = Controller::new(opts)
        .expect("valid options")
        .with_snap_animation(180, Easing::EaseOutQuad);
    let viewport = Size::new(480, 120);

    // The user drags a bit more than one item backwards and lets go.
    let mut now_ms = 0u64;
    c.on_scroll_phase(ScrollPhase::Dragging, now_ms);
    for _ in 0..5 {
        now_ms += 16;
        c.on_scroll(-35);
    }
    if let Some(delta) = c.on_scroll_phase(ScrollPhase::Idle, now_ms) {
        println!("snap by {delta}px");
    }
    run_frames(&mut c, viewport, &mut now_ms);

    // Clicking a back item scrolls it to the center; clicking the center item is the host's.
    let clicked = (c.carousel().center_selection().index.unwrap_or(0) + 2) % 8;
    match c.on_item_click(clicked, now_ms) {
        ItemClick::Center => println!("center item {clicked} clicked"),
        ItemClick::Back => println!("scrolling item {clicked} to the center"),
    }
    run_frames(&mut c, viewport, &mut now_ms);
}

fn run_frames(c: &mut Controller, viewport: Size, now_ms: &mut u64) {
    while c.is_animating() {
        *now_ms += 16;
        let applied = c.tick(*now_ms).unwrap_or(0);
        let outcome = c.carousel_mut().layout(viewport, |_| {});
        println!(
            "t={now_ms} applied={applied} position={:.2}",
            c.carousel().center_position()
        );
        if let Some(selection) = outcome.selection_change {
            println!("  center -> {:?}", selection.index);
        }
    }
}
