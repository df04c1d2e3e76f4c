use alloc::boxed::Box;

use scroll_rail::{ScrollMetrics, ScrollRequest};

/// Handle of a listener registered with a host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(pub u64);

/// Notification sources the controller subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListenTarget {
    /// Native scroll notifications of the rail's scroll container.
    ContainerScroll,
    /// Viewport resize notifications of the window.
    WindowResize,
}

/// A notification delivered by the host to the listener that registered for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostEvent {
    Scroll(ListenerId),
    Resize(ListenerId),
    CapabilityChange(ListenerId),
}

impl HostEvent {
    pub fn listener(&self) -> ListenerId {
        match *self {
            Self::Scroll(id) | Self::Resize(id) | Self::CapabilityChange(id) => id,
        }
    }
}

/// A live media query (`window.matchMedia`).
///
/// Hosts expose change subscriptions in one of two shapes: the modern change-listener pair or
/// the legacy `addListener`/`removeListener` pair. A shape the host lacks returns `None`.
pub trait MediaQuery {
    fn media(&self) -> &str;

    /// The query's current answer.
    fn matches(&self) -> bool;

    fn add_change_listener(&mut self) -> Option<ListenerId> {
        None
    }

    fn remove_change_listener(&mut self, _id: ListenerId) {}

    fn add_listener(&mut self) -> Option<ListenerId> {
        None
    }

    fn remove_listener(&mut self, _id: ListenerId) {}
}

/// The environment a rail is embedded in: its scroll container and window.
///
/// All calls happen on the host's event loop; nothing here needs to be thread-safe.
pub trait RailHost {
    /// Geometry of the scroll container, or `None` while it is not available.
    fn container_metrics(&self) -> Option<ScrollMetrics>;

    /// Performs a relative scroll of the container. Smooth requests return immediately.
    fn scroll_by(&mut self, request: ScrollRequest);

    /// Registers a listener. `None` when the target cannot be observed.
    fn listen(&mut self, target: ListenTarget) -> Option<ListenerId>;

    fn unlisten(&mut self, id: ListenerId);

    /// Evaluates a media query. `None` when the host has no media query support.
    fn match_media(&mut self, query: &str) -> Option<Box<dyn MediaQuery>>;
}
