use scroll_rail::{
    ControlsMode, KeyOutcome, NavKey, PageDirection, Rail, RailOptions, ScrollRequest,
};

use crate::{
    CapabilityWatch, HostEvent, ListenTarget, ListenerId, POINTER_CAPABILITY_QUERY, RailHost,
};

/// A framework-neutral controller that wraps a `scroll_rail::Rail` and owns its host
/// subscriptions.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `mount` / `unmount` around the rail's lifetime in the document
/// - `on_event` for every notification the host delivers to a registered listener
/// - `activate` / `key_down` for control clicks and key presses on the focused region
///
/// Every subscription made while mounted is released by `unmount`. Dropping a mounted
/// controller without unmounting leaks its host listeners.
#[derive(Debug)]
pub struct RailController<N> {
    rail: Rail<N>,
    mounted: bool,
    tracking: bool,
    scroll_listener: Option<ListenerId>,
    resize_listener: Option<ListenerId>,
    capability: Option<CapabilityWatch>,
}

impl<N: Clone> RailController<N> {
    pub fn new(options: RailOptions<N>) -> Self {
        Self::from_rail(Rail::new(options))
    }

    pub fn from_rail(rail: Rail<N>) -> Self {
        Self {
            rail,
            mounted: false,
            tracking: false,
            scroll_listener: None,
            resize_listener: None,
            capability: None,
        }
    }

    pub fn rail(&self) -> &Rail<N> {
        &self.rail
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of live host subscriptions (container scroll, window resize, capability query).
    pub fn listener_count(&self) -> usize {
        usize::from(self.scroll_listener.is_some())
            + usize::from(self.resize_listener.is_some())
            + self
                .capability
                .as_ref()
                .map_or(0, |w| usize::from(w.subscription().listener().is_some()))
    }

    /// Mounts the rail: observes the container, subscribes to scroll and resize, and in
    /// `ControlsMode::Auto` subscribes to the pointer capability query.
    pub fn mount<H: RailHost + ?Sized>(&mut self, host: &mut H) {
        if self.mounted {
            awarn!(region_id = self.rail.region_id(), "mount called twice");
            return;
        }
        adebug!(region_id = self.rail.region_id(), "RailController::mount");
        self.mounted = true;

        let Self {
            rail,
            tracking,
            scroll_listener,
            resize_listener,
            capability,
            ..
        } = self;
        // One notification for the initial observation and capability answer together.
        rail.batch_update(|rail| {
            *tracking = track_container(rail, host, scroll_listener, resize_listener);
            *capability = sync_capability(rail, host, capability.take(), true);
        });
    }

    /// Starts tracking the container once it becomes available.
    ///
    /// `mount` does this itself when the container already exists. Calling it again while
    /// tracking, or while unmounted, does nothing.
    pub fn attach_container<H: RailHost + ?Sized>(&mut self, host: &mut H) {
        if !self.mounted || self.tracking {
            return;
        }
        self.tracking = track_container(
            &mut self.rail,
            host,
            &mut self.scroll_listener,
            &mut self.resize_listener,
        );
    }

    /// Releases every subscription and forgets the container.
    pub fn unmount<H: RailHost + ?Sized>(&mut self, host: &mut H) {
        if !self.mounted {
            return;
        }
        adebug!(region_id = self.rail.region_id(), "RailController::unmount");
        if let Some(id) = self.scroll_listener.take() {
            host.unlisten(id);
        }
        if let Some(id) = self.resize_listener.take() {
            host.unlisten(id);
        }
        if let Some(watch) = self.capability.take() {
            watch.unsubscribe();
        }
        self.tracking = false;
        self.mounted = false;
        self.rail.batch_update(|rail| {
            rail.detach();
            rail.set_capability(None);
        });
    }

    /// Re-renders with `options`, re-subscribing the capability query when the controls
    /// mode enters or leaves `ControlsMode::Auto`.
    pub fn set_options<H: RailHost + ?Sized>(&mut self, host: &mut H, options: RailOptions<N>) {
        let watch = self.capability.take();
        let mounted = self.mounted;
        let mut capability = None;
        self.rail.batch_update(|rail| {
            rail.set_options(options);
            capability = sync_capability(rail, host, watch, mounted);
        });
        self.capability = capability;
    }

    /// Dispatches a host notification. Returns `false` for listeners this controller does
    /// not hold (stale or foreign).
    pub fn on_event<H: RailHost + ?Sized>(&mut self, host: &mut H, event: HostEvent) -> bool {
        match event {
            HostEvent::Scroll(id) if self.scroll_listener == Some(id) => {
                observe(&mut self.rail, host);
                true
            }
            HostEvent::Resize(id) if self.resize_listener == Some(id) => {
                observe(&mut self.rail, host);
                true
            }
            HostEvent::CapabilityChange(id) => {
                let Some(watch) = self.capability.as_ref().filter(|w| w.owns(id)) else {
                    atrace!(?event, "ignoring capability change");
                    return false;
                };
                let matches = watch.matches();
                self.rail.set_capability(Some(matches));
                true
            }
            _ => {
                atrace!(?event, "ignoring host event");
                false
            }
        }
    }

    /// Activates the backward/forward control. Returns whether a scroll was requested.
    pub fn activate<H: RailHost + ?Sized>(&self, host: &mut H, direction: PageDirection) -> bool {
        match self.rail.activate(direction, host.container_metrics()) {
            Some(request) => {
                issue(host, request);
                true
            }
            None => false,
        }
    }

    /// Handles a key press on the focused scroll region.
    ///
    /// The caller suppresses the host's default handling when `prevent_default` is set.
    pub fn key_down<H: RailHost + ?Sized>(&self, host: &mut H, key: NavKey) -> KeyOutcome {
        let outcome = self.rail.key_down(key, host.container_metrics());
        if let Some(request) = outcome.request {
            issue(host, request);
        }
        outcome
    }
}

fn issue<H: RailHost + ?Sized>(host: &mut H, request: ScrollRequest) {
    atrace!(delta = request.delta, "scroll_by");
    host.scroll_by(request);
}

fn observe<N, H: RailHost + ?Sized>(rail: &mut Rail<N>, host: &H) {
    // A vanished container keeps the last state until it is observed again.
    if let Some(metrics) = host.container_metrics() {
        rail.observe(metrics);
    }
}

fn track_container<N, H: RailHost + ?Sized>(
    rail: &mut Rail<N>,
    host: &mut H,
    scroll_listener: &mut Option<ListenerId>,
    resize_listener: &mut Option<ListenerId>,
) -> bool {
    let Some(metrics) = host.container_metrics() else {
        atrace!("container not available yet");
        return false;
    };
    rail.observe(metrics);
    *scroll_listener = host.listen(ListenTarget::ContainerScroll);
    *resize_listener = host.listen(ListenTarget::WindowResize);
    true
}

/// Keeps exactly one capability subscription while mounted in `ControlsMode::Auto`, and none
/// otherwise.
fn sync_capability<N, H: RailHost + ?Sized>(
    rail: &mut Rail<N>,
    host: &mut H,
    current: Option<CapabilityWatch>,
    mounted: bool,
) -> Option<CapabilityWatch> {
    let wanted = mounted && rail.controls_mode() == ControlsMode::Auto;
    match (wanted, current) {
        (true, Some(watch)) => Some(watch),
        (true, None) => {
            let watch = host
                .match_media(POINTER_CAPABILITY_QUERY)
                .map(CapabilityWatch::subscribe);
            rail.set_capability(watch.as_ref().map(CapabilityWatch::matches));
            watch
        }
        (false, Some(watch)) => {
            watch.unsubscribe();
            None
        }
        (false, None) => None,
    }
}
