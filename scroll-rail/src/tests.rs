use crate::*;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

fn overflowing(offset: f64) -> ScrollMetrics {
    ScrollMetrics::new(offset, 2000.0, 1000.0)
}

fn cards(n: usize) -> Vec<String> {
    (0..n).map(|i| alloc::format!("Card {i}")).collect()
}

fn rail_with(mode: ControlsMode) -> Rail<String> {
    Rail::new(
        RailOptions::new()
            .with_items(cards(2))
            .with_show_controls(mode),
    )
}

#[test]
fn page_step_rounds_half_up() {
    assert_eq!(page_step(1000.0, 0.9), 900);
    assert_eq!(page_step(1001.0, 0.5), 501);
    assert_eq!(page_step(5.0, 0.5), 3);
    assert_eq!(page_step(333.0, 1.0), 333);
    assert_eq!(page_step(0.0, 0.9), 0);
}

#[test]
fn page_request_is_smooth_and_signed() {
    let m = overflowing(0.0);
    let fwd = page_request(PageDirection::Forward, m, 0.9);
    assert_eq!(fwd.delta, 900);
    assert_eq!(fwd.behavior, ScrollBehavior::Smooth);
    assert_eq!(fwd.direction(), Some(PageDirection::Forward));

    let back = page_request(PageDirection::Backward, m, 0.5);
    assert_eq!(back.delta, -500);
    assert_eq!(back.direction(), Some(PageDirection::Backward));
}

#[test]
fn arrow_keys_map_to_directions() {
    assert_eq!(NavKey::from_key_name("ArrowLeft"), NavKey::ArrowLeft);
    assert_eq!(NavKey::from_key_name("ArrowRight"), NavKey::ArrowRight);
    assert_eq!(NavKey::from_key_name("ArrowUp"), NavKey::Other);
    assert_eq!(
        key_direction(NavKey::ArrowLeft),
        Some(PageDirection::Backward)
    );
    assert_eq!(
        key_direction(NavKey::ArrowRight),
        Some(PageDirection::Forward)
    );
    assert_eq!(key_direction(NavKey::Other), None);
}

#[test]
fn paging_state_at_start_of_overflowing_container() {
    let s = PagingState::from_metrics(overflowing(0.0), 1.0);
    assert!(!s.can_page_backward);
    assert!(s.can_page_forward);
}

#[test]
fn paging_state_treats_near_end_as_end() {
    // max offset is 1000; with tolerance 1 anything at or past 999 is the end.
    let s = PagingState::from_metrics(overflowing(999.5), 1.0);
    assert!(s.can_page_backward);
    assert!(!s.can_page_forward);

    let s = PagingState::from_metrics(overflowing(998.5), 1.0);
    assert!(s.can_page_forward);

    let s = PagingState::from_metrics(overflowing(999.5), 0.0);
    assert!(s.can_page_forward);
}

#[test]
fn paging_state_without_overflow_disables_both() {
    let s = PagingState::from_metrics(ScrollMetrics::new(0.0, 800.0, 1000.0), 1.0);
    assert_eq!(s, PagingState::default());
}

#[test]
fn explicit_items_win_over_children() {
    let items = ["a", "b"];
    let children = [Child::node("c")];
    let resolved = resolve_content(Some(&items[..]), Some(&children[..]));
    assert_eq!(resolved, vec!["a", "b"]);

    let empty: [&str; 0] = [];
    let resolved = resolve_content(Some(&empty[..]), Some(&children[..]));
    assert!(resolved.is_empty());
}

#[test]
fn nested_children_flatten_in_order() {
    let children = [
        Child::node(1),
        Child::fragment([
            Child::node(2),
            Child::Empty,
            Child::fragment([Child::node(3)]),
        ]),
        Child::optional(None),
        Child::optional(Some(4)),
    ];
    assert_eq!(flatten_children(&children), vec![1, 2, 3, 4]);
    let resolved = resolve_content::<i32>(None, Some(&children[..]));
    assert_eq!(resolved, vec![1, 2, 3, 4]);
    assert!(resolve_content::<i32>(None, None).is_empty());
}

#[test]
fn rail_renders_children_when_no_items() {
    let rail = Rail::new(
        RailOptions::new()
            .with_children([Child::node("One"), Child::fragment([Child::node("Two")])])
            .with_show_controls(ControlsMode::Never),
    );
    assert_eq!(rail.content(), &["One", "Two"]);
    let html = rail.view().to_html().unwrap();
    assert!(html.contains(">One</div>"));
    assert!(html.contains(">Two</div>"));
}

#[test]
fn concrete_forward_page_after_mount() {
    let mut rail = rail_with(ControlsMode::Always);
    rail.observe(overflowing(0.0));

    assert!(!rail.can_page(PageDirection::Backward));
    assert!(rail.can_page(PageDirection::Forward));

    let req = rail
        .activate(PageDirection::Forward, Some(overflowing(0.0)))
        .unwrap();
    assert_eq!(req.delta, 900);
    assert_eq!(req.behavior, ScrollBehavior::Smooth);
}

#[test]
fn activation_before_first_observation_is_a_no_op() {
    let mut rail = rail_with(ControlsMode::Always);
    let live = Some(overflowing(0.0));

    assert_eq!(rail.activate(PageDirection::Forward, live), None);

    rail.observe(overflowing(0.0));
    assert!(rail.activate(PageDirection::Forward, live).is_some());
}

#[test]
fn disabled_control_requests_nothing() {
    let mut rail = rail_with(ControlsMode::Always);
    rail.observe(overflowing(0.0));
    assert_eq!(
        rail.activate(PageDirection::Backward, Some(overflowing(0.0))),
        None
    );

    let view = rail.view();
    assert!(view.control(PageDirection::Backward).unwrap().disabled);
    assert!(!view.control(PageDirection::Forward).unwrap().disabled);
}

#[test]
fn activation_without_container_is_a_no_op() {
    let mut rail = rail_with(ControlsMode::Always);
    rail.observe(overflowing(0.0));
    assert_eq!(rail.activate(PageDirection::Forward, None), None);
}

#[test]
fn hidden_controls_cannot_be_activated() {
    let mut rail = rail_with(ControlsMode::Never);
    rail.observe(overflowing(0.0));
    assert!(rail.can_page(PageDirection::Forward));
    assert_eq!(
        rail.activate(PageDirection::Forward, Some(overflowing(0.0))),
        None
    );
}

#[test]
fn keyboard_paging_ignores_flags() {
    let mut rail = rail_with(ControlsMode::Never);
    let at_end = overflowing(1000.0);
    rail.observe(at_end);
    assert!(!rail.can_page(PageDirection::Forward));

    let out = rail.key_down(NavKey::ArrowRight, Some(at_end));
    assert!(out.prevent_default);
    assert_eq!(out.request.map(|r| r.delta), Some(900));

    // Before any observation the flags are false, keys still page.
    let fresh = rail_with(ControlsMode::Never);
    let out = fresh.key_down(NavKey::ArrowLeft, Some(overflowing(0.0)));
    assert!(out.prevent_default);
    assert_eq!(out.request.map(|r| r.delta), Some(-900));
}

#[test]
fn other_keys_and_missing_container_are_ignored() {
    let rail = rail_with(ControlsMode::Never);
    assert_eq!(
        rail.key_down(NavKey::Other, Some(overflowing(0.0))),
        KeyOutcome::ignored()
    );
    let outcome = rail.key_down(NavKey::ArrowRight, None);
    assert_eq!(outcome, KeyOutcome::ignored());
}

#[test]
fn fixed_modes_ignore_capability() {
    let mut never = rail_with(ControlsMode::Never);
    never.set_capability(Some(true));
    assert!(!never.controls_visible());
    assert!(never.view().controls.is_none());

    let mut always = rail_with(ControlsMode::Always);
    always.set_capability(Some(false));
    assert!(always.controls_visible());
    assert!(always.view().controls.is_some());
}

#[test]
fn auto_mode_follows_capability_answer() {
    let mut rail = rail_with(ControlsMode::Auto);
    assert!(!rail.controls_visible());

    rail.set_capability(Some(true));
    assert!(rail.controls_visible());
    assert_eq!(rail.view().controls.as_ref().map(|c| c.len()), Some(2));

    rail.set_capability(Some(false));
    assert!(rail.view().controls.is_none());

    rail.set_capability(None);
    assert!(!rail.controls_visible());
}

#[test]
fn leaving_auto_drops_stale_capability() {
    let mut rail = rail_with(ControlsMode::Auto);
    rail.set_capability(Some(true));

    rail.update_options(|o| o.show_controls = ControlsMode::Never);
    assert!(!rail.controls_visible());
    assert_eq!(rail.capability(), None);

    rail.update_options(|o| o.show_controls = ControlsMode::Always);
    assert!(rail.controls_visible());

    rail.update_options(|o| o.show_controls = ControlsMode::Auto);
    assert!(!rail.controls_visible());
}

#[test]
fn repeated_observation_notifies_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut rail = Rail::new(
        RailOptions::new()
            .with_items(cards(3))
            .with_show_controls(ControlsMode::Always)
            .with_on_change(Some({
                let calls = Arc::clone(&calls);
                move |_: &Rail<String>| {
                    calls.fetch_add(1, Ordering::Relaxed);
                }
            })),
    );
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    rail.observe(overflowing(0.0));
    let first = rail.state();
    rail.observe(overflowing(0.0));
    rail.observe(overflowing(0.0));
    assert_eq!(rail.state(), first);
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    // Leaving the start flips the backward flag once; further moves change nothing.
    rail.observe(overflowing(100.0));
    rail.observe(overflowing(200.0));
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn batch_update_coalesces_notifications() {
    let calls = Arc::new(AtomicUsize::new(0));
    let on_change = {
        let calls = Arc::clone(&calls);
        move |r: &Rail<String>| {
            assert!(r.controls_visible());
            calls.fetch_add(1, Ordering::Relaxed);
        }
    };
    let options = RailOptions::new()
        .with_items(cards(3))
        .with_on_change(Some(on_change));
    let mut rail = Rail::new(options);

    rail.batch_update(|r| {
        r.observe(overflowing(0.0));
        r.set_capability(Some(true));
    });
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    assert_eq!(
        rail.state(),
        RailState {
            can_page_backward: false,
            can_page_forward: true,
            controls_visible: true,
        }
    );
}

#[test]
fn detach_disables_both_directions() {
    let mut rail = rail_with(ControlsMode::Always);
    rail.observe(overflowing(500.0));
    assert!(rail.can_page(PageDirection::Backward));
    rail.detach();
    assert!(!rail.is_attached());
    assert_eq!(rail.paging_state(), PagingState::default());
}

#[test]
fn generated_region_id_is_stable_and_unique() {
    let mut a = rail_with(ControlsMode::Always);
    let b = rail_with(ControlsMode::Always);
    let id = a.region_id().to_string();
    assert!(id.starts_with("rsr-"));
    assert_ne!(id, b.region_id());

    a.update_options(|o| o.snap = false);
    assert_eq!(a.region_id(), id);

    a.update_options(|o| o.id = Some("deals".into()));
    assert_eq!(a.region_id(), "deals");
    a.update_options(|o| o.id = None);
    assert_eq!(a.region_id(), id);
}

#[test]
fn controls_reference_region_id() {
    let rail = Rail::new(
        RailOptions::new()
            .with_items(cards(1))
            .with_id("row-1")
            .with_show_controls(ControlsMode::Always),
    );
    let view = rail.view();
    assert_eq!(view.scroller.id, "row-1");
    for control in view.controls.as_ref().unwrap() {
        assert_eq!(control.aria_controls, "row-1");
    }
    let back = view.control(PageDirection::Backward).unwrap();
    assert_eq!(back.aria_label, "Scroll left");
    let fwd = view.control(PageDirection::Forward).unwrap();
    assert_eq!(fwd.aria_label, "Scroll right");
}

#[test]
fn validate_rejects_bad_values() {
    let o = RailOptions::<String>::new();
    assert_eq!(o.validate(), Ok(()));

    let o = RailOptions::<String>::new().with_page_factor(0.0);
    assert_eq!(o.validate(), Err(OptionsError::InvalidPageFactor(0.0)));

    let o = RailOptions::<String>::new().with_edge_tolerance(-1.0);
    assert_eq!(o.validate(), Err(OptionsError::InvalidEdgeTolerance(-1.0)));

    let o = RailOptions::<String>::new().with_id("");
    assert_eq!(o.validate(), Err(OptionsError::EmptyRegionId));
    assert_eq!(
        OptionsError::EmptyRegionId.to_string(),
        "region id must not be empty"
    );
}

#[test]
fn invalid_options_fall_back_to_defaults() {
    let mut rail = Rail::new(
        RailOptions::new()
            .with_items(cards(2))
            .with_page_factor(f64::NAN)
            .with_edge_tolerance(f64::INFINITY)
            .with_id("")
            .with_show_controls(ControlsMode::Always),
    );
    assert_eq!(rail.options().page_factor, DEFAULT_PAGE_FACTOR);
    assert_eq!(rail.options().edge_tolerance, DEFAULT_EDGE_TOLERANCE);
    assert!(rail.region_id().starts_with("rsr-"));

    rail.observe(overflowing(0.0));
    let req = rail.activate(PageDirection::Forward, Some(overflowing(0.0)));
    assert_eq!(req.map(|r| r.delta), Some(900));
}

#[test]
fn controls_mode_parses_and_displays() {
    assert_eq!("auto".parse::<ControlsMode>(), Ok(ControlsMode::Auto));
    assert_eq!("always".parse::<ControlsMode>(), Ok(ControlsMode::Always));
    assert_eq!("never".parse::<ControlsMode>(), Ok(ControlsMode::Never));
    assert_eq!(
        "sometimes".parse::<ControlsMode>(),
        Err(ParseControlsModeError("sometimes".into()))
    );
    assert_eq!(ControlsMode::Always.to_string(), "always");
    assert_eq!(ControlsMode::default(), ControlsMode::Auto);
}

#[test]
fn defaults_match_embedding_contract() {
    let o = RailOptions::<String>::new();
    assert_eq!(o.aria_label, "Scrollable content");
    assert!(o.snap);
    assert_eq!(o.page_factor, 0.9);
    assert_eq!(o.show_controls, ControlsMode::Auto);
    assert_eq!(o.edge_tolerance, 1.0);
}

#[test]
fn class_hooks_compose_after_structural_classes() {
    let rail = Rail::new(
        RailOptions::new()
            .with_items(cards(2))
            .with_class_name("outer")
            .with_gap_class_name("gap-4")
            .with_class_names(RailClassNames {
                root: Some("root-hook".into()),
                scroller: Some("scroller-hook".into()),
                item: Some("item-hook".into()),
                control_button: Some("btn".into()),
                prev_button: None,
                next_button: Some("btn-next".into()),
            })
            .with_show_controls(ControlsMode::Always),
    );
    let view = rail.view();
    assert_eq!(view.root_class, "rsr-root outer root-hook");
    assert_eq!(
        view.scroller.class,
        "rsr-scroller rsr-snap gap-4 scroller-hook"
    );
    assert_eq!(view.items[1].class, "rsr-item rsr-snap-item item-hook");
    assert_eq!(
        view.control(PageDirection::Backward).unwrap().class,
        "rsr-control rsr-control--custom rsr-prev btn"
    );
    assert_eq!(
        view.control(PageDirection::Forward).unwrap().class,
        "rsr-control rsr-control--custom rsr-next btn btn-next"
    );
}

#[test]
fn snap_off_and_no_hooks_keep_plain_classes() {
    let rail = Rail::new(
        RailOptions::new()
            .with_items(cards(1))
            .with_snap(false)
            .with_show_controls(ControlsMode::Always),
    );
    let view = rail.view();
    assert_eq!(view.root_class, "rsr-root");
    assert_eq!(view.scroller.class, "rsr-scroller");
    assert_eq!(view.items[0].class, "rsr-item");
    assert_eq!(
        view.control(PageDirection::Backward).unwrap().class,
        "rsr-control rsr-prev"
    );
}

#[test]
fn cx_skips_missing_and_empty_parts() {
    assert_eq!(class::cx([Some("a"), None, Some(""), Some("b")]), "a b");
    assert_eq!(class::cx([None, None]), "");
}

#[test]
fn scroller_style_merges_onto_baseline() {
    let overrides = InlineStyle::new()
        .with("scrollbar-gutter", "auto")
        .with("padding-inline", "1rem");
    let rail = Rail::new(
        RailOptions::new()
            .with_items(cards(1))
            .with_scroller_style(overrides),
    );
    let style = &rail.view().scroller.style;
    assert_eq!(style.get("-webkit-overflow-scrolling"), Some("touch"));
    assert_eq!(style.get("scrollbar-gutter"), Some("auto"));
    assert_eq!(
        style.to_string(),
        "-webkit-overflow-scrolling: touch; scrollbar-gutter: auto; padding-inline: 1rem;"
    );
}

#[test]
fn inline_style_set_and_remove() {
    let mut s = InlineStyle::new().with("a", "1").with("b", "2");
    s.set("a", "3");
    assert_eq!(s.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
    assert_eq!(s.remove("a"), Some("3".into()));
    assert_eq!(s.remove("a"), None);
    assert_eq!(s.len(), 1);
}

#[test]
fn empty_rail_renders_disabled_region() {
    let mut rail: Rail<String> =
        Rail::new(RailOptions::new().with_show_controls(ControlsMode::Always));
    rail.observe(ScrollMetrics::new(0.0, 1000.0, 1000.0));

    let view = rail.view();
    assert!(view.items.is_empty());
    let controls = view.controls.as_ref().unwrap();
    assert!(controls.iter().all(|c| c.disabled));
}

#[test]
fn html_output_carries_accessibility_attributes() {
    let mut rail = Rail::new(
        RailOptions::new()
            .with_items(["<b>A</b>", "B & C"])
            .with_aria_label("Deals \"today\"")
            .with_id("deals")
            .with_show_controls(ControlsMode::Always),
    );
    rail.observe(overflowing(0.0));
    let html = rail.view().to_html().unwrap();

    assert!(html.starts_with("<div class=\"rsr-root\">"));
    assert!(html.contains(
        "<div role=\"region\" aria-label=\"Deals &quot;today&quot;\" tabindex=\"0\" \
         class=\"rsr-scroller rsr-snap\""
    ));
    assert!(html.contains(
        "style=\"-webkit-overflow-scrolling: touch; scrollbar-gutter: stable both-edges;\""
    ));
    assert!(html.contains("id=\"deals\">"));
    assert!(html.contains("&lt;b&gt;A&lt;/b&gt;"));
    assert!(html.contains("B &amp; C"));
    assert!(html.contains(
        "<button type=\"button\" disabled aria-controls=\"deals\" aria-label=\"Scroll left\""
    ));
    let next = "<button type=\"button\" aria-controls=\"deals\" aria-label=\"Scroll right\"";
    assert!(html.contains(next));
    assert!(html.ends_with("</button></div>"));
}

#[test]
fn markup_nodes_are_written_verbatim() {
    let rail = Rail::new(
        RailOptions::new()
            .with_items([Markup("<article>Tile</article>".into())])
            .with_show_controls(ControlsMode::Never),
    );
    let html = rail.view().to_html().unwrap();
    let item = "<div class=\"rsr-item rsr-snap-item\"><article>Tile</article></div>";
    assert!(html.contains(item));
    assert!(!html.contains("<button"));
}

#[derive(Clone)]
struct Broken;

impl Node for Broken {
    fn write_html(&self, _out: &mut dyn core::fmt::Write) -> core::fmt::Result {
        Err(core::fmt::Error)
    }
}

#[test]
fn failing_node_fails_the_whole_render() {
    let rail = Rail::new(RailOptions::new().with_items([Broken]));
    assert_eq!(rail.view().to_html(), Err(core::fmt::Error));
}

#[test]
fn cloned_rail_gets_its_own_region_id() {
    let a = rail_with(ControlsMode::Always);
    let b = a.clone();
    assert_ne!(a.region_id(), b.region_id());
    assert_eq!(a.content(), b.content());

    for rail in [&a, &b] {
        let html = rail.view().to_html().unwrap();
        let controls = alloc::format!("aria-controls=\"{}\"", rail.region_id());
        assert!(html.contains(&controls));
    }

    // A caller-supplied id belongs to the options and is shared.
    let c = Rail::new(RailOptions::new().with_items(cards(1)).with_id("deals"));
    assert_eq!(c.clone().region_id(), "deals");
}
