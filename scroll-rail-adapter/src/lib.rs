//! Host bindings and lifecycle driving for the `scroll-rail` crate.
//!
//! The `scroll-rail` crate is UI-agnostic and only computes state and scroll requests. This
//! crate provides the small, framework-neutral pieces an embedding needs around it:
//!
//! - A host abstraction ([`RailHost`], [`MediaQuery`]) for the scroll container, the window
//!   and `matchMedia`
//! - A capability shim that subscribes to media query changes through either the modern or the
//!   legacy listener pair ([`CapabilityWatch`])
//! - A controller that owns the rail's subscriptions from mount to unmount ([`RailController`])
//! - An in-memory host with eased, composable smooth scrolling for tests and demos ([`MemoryHost`])
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod capability;
mod controller;
mod host;
mod memory;
mod smooth;


pub use capability::{CapabilityWatch, POINTER_CAPABILITY_QUERY, Subscription};
pub use controller::RailController;
pub use host::{HostEvent, ListenTarget, ListenerId, MediaQuery, RailHost};
pub use memory::{DEFAULT_SMOOTH_DURATION_MS, MediaSupport, MemoryHost, pump};
pub use smooth::{Easing, SmoothScroll};
