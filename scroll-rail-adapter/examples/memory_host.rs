use scroll_rail::{ControlsMode, NavKey, PageDirection, RailOptions};
use scroll_rail_adapter::{Easing, MemoryHost, RailController, pump};

fn main() {
    // Example: drive a controller against the in-memory host the way a UI adapter would:
    // - mount once the container exists
    // - forward control clicks and key presses
    // - advance smooth scrolling from a frame loop and pump host notifications
    // - unmount to release every subscription
    let mut host = MemoryHost::with_container(1000.0, 3200.0)
        .with_pointer_fine(true)
        .with_smooth_scroll(240, Easing::SmoothStep);
    let mut c = RailController::new(
        RailOptions::new()
            .with_items((1..=12).map(|i| format!("Item {i}")))
            .with_show_controls(ControlsMode::Auto),
    );

    c.mount(&mut host);
    let listeners = host.listener_count();
    println!("mounted: {:?} listeners={listeners}", c.rail().state());

    c.activate(&mut host, PageDirection::Forward);
    let mut now_ms = 0u64;
    while host.is_animating() {
        now_ms += 16;
        host.tick(now_ms);
        pump(&mut host, &mut c);
    }
    let state = c.rail().state();
    println!("t={now_ms} offset={:?} {state:?}", host.offset());

    // Keyboard paging ignores the forward flag.
    for _ in 0..3 {
        c.key_down(&mut host, NavKey::ArrowRight);
        host.settle();
        pump(&mut host, &mut c);
    }
    let state = c.rail().state();
    println!("end: offset={:?} {state:?}", host.offset());

    // A touch screen takes over; auto mode hides the controls.
    host.set_pointer_fine(false);
    pump(&mut host, &mut c);
    println!("touch: controls={}", c.rail().view().controls.is_some());

    c.unmount(&mut host);
    println!("unmounted: listeners={}", host.listener_count());
}
