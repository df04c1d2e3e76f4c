use alloc::boxed::Box;
use alloc::collections::{BTreeMap, VecDeque};
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use scroll_rail::{ScrollBehavior, ScrollMetrics, ScrollRequest};

use crate::{
    Easing, HostEvent, ListenTarget, ListenerId, MediaQuery, POINTER_CAPABILITY_QUERY,
    RailController, RailHost, SmoothScroll,
};
use crate::smooth::clamp_offset;

pub const DEFAULT_SMOOTH_DURATION_MS: u64 = 300;

/// Which `matchMedia` surface a [`MemoryHost`] exposes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MediaSupport {
    /// Both the change-listener pair and the legacy pair.
    #[default]
    Modern,
    /// Only `addListener` / `removeListener`.
    Legacy,
    /// Queries evaluate but cannot be subscribed to.
    Unsubscribable,
    /// No `matchMedia` at all.
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListenerForm {
    Modern,
    Legacy,
}

#[derive(Debug)]
struct MediaListener {
    id: ListenerId,
    form: ListenerForm,
    media: String,
}

#[derive(Debug, Default)]
struct Shared {
    next_id: u64,
    pointer_fine: bool,
    support: MediaSupport,
    media_listeners: Vec<MediaListener>,
}

impl Shared {
    fn allocate(&mut self) -> ListenerId {
        self.next_id = self.next_id.saturating_add(1);
        ListenerId(self.next_id)
    }

    fn evaluate(&self, media: &str) -> bool {
        self.pointer_fine && media == POINTER_CAPABILITY_QUERY
    }

    fn add_media_listener(&mut self, form: ListenerForm, media: &str) -> ListenerId {
        let id = self.allocate();
        self.media_listeners.push(MediaListener {
            id,
            form,
            media: media.into(),
        });
        id
    }

    fn remove_media_listener(&mut self, form: ListenerForm, id: ListenerId) {
        self.media_listeners
            .retain(|l| !(l.id == id && l.form == form));
    }
}

struct MemoryMediaQuery {
    media: String,
    shared: Rc<RefCell<Shared>>,
}

impl MediaQuery for MemoryMediaQuery {
    fn media(&self) -> &str {
        &self.media
    }

    fn matches(&self) -> bool {
        self.shared.borrow().evaluate(&self.media)
    }

    fn add_change_listener(&mut self) -> Option<ListenerId> {
        let mut shared = self.shared.borrow_mut();
        if shared.support != MediaSupport::Modern {
            return None;
        }
        Some(shared.add_media_listener(ListenerForm::Modern, &self.media))
    }

    fn remove_change_listener(&mut self, id: ListenerId) {
        self.shared
            .borrow_mut()
            .remove_media_listener(ListenerForm::Modern, id);
    }

    fn add_listener(&mut self) -> Option<ListenerId> {
        let mut shared = self.shared.borrow_mut();
        match shared.support {
            MediaSupport::Modern | MediaSupport::Legacy => {
                Some(shared.add_media_listener(ListenerForm::Legacy, &self.media))
            }
            MediaSupport::Unsubscribable | MediaSupport::Unavailable => None,
        }
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.shared
            .borrow_mut()
            .remove_media_listener(ListenerForm::Legacy, id);
    }
}

/// An in-memory host with one scroll container, a window and a pointer.
///
/// Notifications are queued rather than delivered; drain them with [`pump`] (or
/// [`MemoryHost::next_event`]). Smooth scroll requests animate as a [`SmoothScroll`] advanced
/// by [`MemoryHost::tick`].
#[derive(Debug)]
pub struct MemoryHost {
    container: Option<ScrollMetrics>,
    listeners: BTreeMap<ListenerId, ListenTarget>,
    shared: Rc<RefCell<Shared>>,
    queue: VecDeque<HostEvent>,
    requests: Vec<ScrollRequest>,
    scroll: Option<SmoothScroll>,
    now_ms: u64,
    smooth_duration_ms: u64,
    easing: Easing,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    /// A host whose container is not attached yet.
    pub fn new() -> Self {
        Self {
            container: None,
            listeners: BTreeMap::new(),
            shared: Rc::new(RefCell::new(Shared::default())),
            queue: VecDeque::new(),
            requests: Vec::new(),
            scroll: None,
            now_ms: 0,
            smooth_duration_ms: DEFAULT_SMOOTH_DURATION_MS,
            easing: Easing::default(),
        }
    }

    /// A host with an attached container scrolled to the start.
    pub fn with_container(viewport_extent: f64, scroll_extent: f64) -> Self {
        let mut host = Self::new();
        host.attach_container(viewport_extent, scroll_extent);
        host
    }

    pub fn with_media_support(self, support: MediaSupport) -> Self {
        self.shared.borrow_mut().support = support;
        self
    }

    pub fn with_pointer_fine(self, fine: bool) -> Self {
        self.shared.borrow_mut().pointer_fine = fine;
        self
    }

    pub fn with_smooth_scroll(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.smooth_duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn attach_container(&mut self, viewport_extent: f64, scroll_extent: f64) {
        self.container = Some(ScrollMetrics::new(0.0, scroll_extent, viewport_extent));
    }

    pub fn detach_container(&mut self) {
        self.container = None;
        self.scroll = None;
    }

    pub fn offset(&self) -> Option<f64> {
        self.container.map(|m| m.offset)
    }

    /// A user scroll (wheel, drag, touch momentum). Cancels any running animation.
    pub fn set_offset(&mut self, offset: f64) {
        self.scroll = None;
        if self.apply_offset(offset) {
            self.notify(ListenTarget::ContainerScroll);
        }
    }

    /// Resizes the viewport and notifies window resize listeners.
    pub fn resize(&mut self, viewport_extent: f64) {
        let Some(m) = self.container.as_mut() else {
            self.notify(ListenTarget::WindowResize);
            return;
        };
        m.viewport_extent = viewport_extent;
        let offset = m.offset;
        let clamped = self.apply_offset(offset);
        self.notify(ListenTarget::WindowResize);
        if clamped {
            self.notify(ListenTarget::ContainerScroll);
        }
    }

    /// Changes the scrollable width, as when items are added or removed.
    pub fn set_scroll_extent(&mut self, scroll_extent: f64) {
        let Some(m) = self.container.as_mut() else {
            return;
        };
        m.scroll_extent = scroll_extent;
        let offset = m.offset;
        if self.apply_offset(offset) {
            self.notify(ListenTarget::ContainerScroll);
        }
    }

    /// Switches the pointer between a fine hovering device and coarse touch input.
    pub fn set_pointer_fine(&mut self, fine: bool) {
        let changed: Vec<ListenerId> = {
            let mut shared = self.shared.borrow_mut();
            if shared.pointer_fine == fine {
                return;
            }
            shared.pointer_fine = fine;
            shared
                .media_listeners
                .iter()
                .filter(|l| l.media == POINTER_CAPABILITY_QUERY)
                .map(|l| l.id)
                .collect()
        };
        self.queue
            .extend(changed.into_iter().map(HostEvent::CapabilityChange));
    }

    pub fn is_animating(&self) -> bool {
        self.scroll.is_some()
    }

    /// Advances the smooth scroll animation to `now_ms`.
    ///
    /// Returns whether an animation is still running.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.now_ms = self.now_ms.max(now_ms);
        let Some(scroll) = self.scroll else {
            return false;
        };
        if self.apply_offset(scroll.position(self.now_ms)) {
            self.notify(ListenTarget::ContainerScroll);
        }
        if scroll.is_finished(self.now_ms) {
            self.scroll = None;
            return false;
        }
        true
    }

    /// Runs the current animation to completion.
    pub fn settle(&mut self) {
        if let Some(scroll) = self.scroll {
            self.tick(scroll.finish_ms());
        }
    }

    /// Every scroll request received, in order.
    pub fn requests(&self) -> &[ScrollRequest] {
        &self.requests
    }

    pub fn take_requests(&mut self) -> Vec<ScrollRequest> {
        core::mem::take(&mut self.requests)
    }

    /// Live listeners across the container, the window and media queries.
    pub fn listener_count(&self) -> usize {
        self.listeners.len() + self.shared.borrow().media_listeners.len()
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    pub fn next_event(&mut self) -> Option<HostEvent> {
        self.queue.pop_front()
    }

    fn apply_offset(&mut self, offset: f64) -> bool {
        let Some(m) = self.container.as_mut() else {
            return false;
        };
        let clamped = clamp_offset(offset, m.max_offset());
        if clamped == m.offset {
            return false;
        }
        m.offset = clamped;
        true
    }

    fn notify(&mut self, target: ListenTarget) {
        for (&id, &t) in &self.listeners {
            if t != target {
                continue;
            }
            self.queue.push_back(match target {
                ListenTarget::ContainerScroll => HostEvent::Scroll(id),
                ListenTarget::WindowResize => HostEvent::Resize(id),
            });
        }
    }
}

impl RailHost for MemoryHost {
    fn container_metrics(&self) -> Option<ScrollMetrics> {
        self.container
    }

    fn scroll_by(&mut self, request: ScrollRequest) {
        self.requests.push(request);
        let Some(m) = self.container else {
            return;
        };
        let delta = request.delta as f64;
        let max_offset = m.max_offset();
        match (request.behavior, self.scroll.as_mut()) {
            (ScrollBehavior::Instant, in_flight) => {
                let base = in_flight.map_or(m.offset, |s| s.destination());
                self.scroll = None;
                if self.apply_offset(base + delta) {
                    self.notify(ListenTarget::ContainerScroll);
                }
            }
            (ScrollBehavior::Smooth, Some(scroll)) => {
                scroll.compose(self.now_ms, delta, max_offset, self.smooth_duration_ms);
            }
            (ScrollBehavior::Smooth, None) => {
                self.scroll = Some(SmoothScroll::start(
                    m.offset,
                    delta,
                    max_offset,
                    self.now_ms,
                    self.smooth_duration_ms,
                    self.easing,
                ));
            }
        }
    }

    fn listen(&mut self, target: ListenTarget) -> Option<ListenerId> {
        if target == ListenTarget::ContainerScroll && self.container.is_none() {
            return None;
        }
        let id = self.shared.borrow_mut().allocate();
        self.listeners.insert(id, target);
        Some(id)
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }

    fn match_media(&mut self, query: &str) -> Option<Box<dyn MediaQuery>> {
        if self.shared.borrow().support == MediaSupport::Unavailable {
            return None;
        }
        Some(Box::new(MemoryMediaQuery {
            media: query.into(),
            shared: Rc::clone(&self.shared),
        }))
    }
}

/// Delivers every queued notification to `controller`. Returns how many were delivered.
pub fn pump<N: Clone>(host: &mut MemoryHost, controller: &mut RailController<N>) -> usize {
    let mut delivered = 0usize;
    while let Some(event) = host.next_event() {
        controller.on_event(host, event);
        delivered = delivered.saturating_add(1);
    }
    delivered
}
