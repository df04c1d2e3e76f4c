// Example: observe a container, page forward, and render the markup.
use scroll_rail::{ControlsMode, Markup, PageDirection, Rail, RailOptions, ScrollMetrics};

fn main() {
    let items = (1..=6).map(|i| Markup(format!("<img alt=\"Cover {i}\">")));
    let mut rail = Rail::new(
        RailOptions::new()
            .with_items(items)
            .with_aria_label("Trending")
            .with_show_controls(ControlsMode::Always)
            .with_gap_class_name("gap-4"),
    );

    rail.observe(ScrollMetrics::new(0.0, 2000.0, 1000.0));
    println!("state={:?}", rail.state());

    let live = rail.metrics();
    if let Some(req) = rail.activate(PageDirection::Forward, live) {
        println!("scroll_by delta={} behavior={:?}", req.delta, req.behavior);
    }
    // Backward is disabled at the start edge.
    let backward = rail.activate(PageDirection::Backward, live);
    println!("backward={backward:?}");

    rail.observe(ScrollMetrics::new(900.0, 2000.0, 1000.0));
    println!("after scroll: {:?}", rail.paging_state());
    match rail.view().to_html() {
        Ok(html) => println!("{html}"),
        Err(err) => eprintln!("render failed: {err}"),
    }
}
