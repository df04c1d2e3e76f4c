// Example: re-render only when the derived state changes.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use scroll_rail::{ControlsMode, Rail, RailOptions, ScrollMetrics};

fn main() {
    let renders = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&renders);

    let mut rail = Rail::new(
        RailOptions::new()
            .with_items(["a", "b", "c"])
            .with_show_controls(ControlsMode::Auto)
            .with_on_change(Some(move |r: &Rail<&'static str>| {
                counter.fetch_add(1, Ordering::Relaxed);
                println!("render: {:?}", r.state());
            })),
    );

    // Scroll events arrive many times per frame; most change nothing.
    for offset in [0.0, 10.0, 20.0, 400.0, 999.0, 1000.0] {
        rail.observe(ScrollMetrics::new(offset, 2000.0, 1000.0));
    }

    // A pointer answer plus an observation, reported once.
    rail.batch_update(|r| {
        r.set_capability(Some(true));
        r.observe(ScrollMetrics::new(0.0, 2000.0, 1000.0));
    });

    println!("renders={}", renders.load(Ordering::Relaxed));
}
