//! A headless horizontal scroll rail for card and tile lists.
//!
//! For host bindings and subscription lifecycles, see the `scroll-rail-adapter` crate.
//!
//! This crate owns the logic of the control: normalizing content, tracking whether the rail
//! can page backward/forward, deciding whether directional controls are shown, and computing
//! page-sized smooth scroll requests for control clicks and arrow keys.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - container geometry (scroll offset, scroll width, client width)
//! - the pointer capability answer (hover + fine pointer)
//! - a smooth relative scroll primitive to perform the returned [`ScrollRequest`]s
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod class;
mod content;
mod error;
mod id;
mod options;
mod paging;
mod rail;
mod state;
mod style;
mod types;
mod view;

#[cfg(test)]
mod tests;

pub use content::{Child, flatten_children, resolve_content};
pub use error::{OptionsError, ParseControlsModeError};
pub use options::{
    DEFAULT_ARIA_LABEL, DEFAULT_EDGE_TOLERANCE, OnChangeCallback, RailClassNames, RailOptions,
};
pub use paging::{DEFAULT_PAGE_FACTOR, key_direction, page_request, page_step};
pub use rail::Rail;
pub use state::{PagingState, RailState};
pub use style::{BASELINE_CSS, InlineStyle};
pub use types::{
    ControlsMode, KeyOutcome, NavKey, PageDirection, ScrollBehavior, ScrollMetrics, ScrollRequest,
};
pub use view::{ControlView, ItemView, Markup, Node, RailView, ScrollerView};
