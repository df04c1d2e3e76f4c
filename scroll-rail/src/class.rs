//! Structural class names and class-hook composition.

use alloc::string::String;

pub const ROOT: &str = "rsr-root";
pub const SCROLLER: &str = "rsr-scroller";
pub const SNAP: &str = "rsr-snap";
pub const ITEM: &str = "rsr-item";
pub const SNAP_ITEM: &str = "rsr-snap-item";
pub const CONTROL: &str = "rsr-control";
pub const CONTROL_CUSTOM: &str = "rsr-control--custom";
pub const PREV: &str = "rsr-prev";
pub const NEXT: &str = "rsr-next";

/// Joins the present, non-empty class parts with single spaces.
pub fn cx<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let mut out = String::new();
    for part in parts.into_iter().flatten() {
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}
