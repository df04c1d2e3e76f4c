use alloc::string::String;
use alloc::vec::Vec;

use crate::id::next_region_id;
use crate::paging::{key_direction, page_request};
use crate::view::RailView;
use crate::{
    ControlsMode, KeyOutcome, NavKey, PageDirection, PagingState, RailOptions, RailState,
    ScrollMetrics, ScrollRequest,
};

/// A headless horizontal scroll rail.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects and never scrolls anything itself.
/// - Your adapter feeds it container geometry (`observe`) and pointer capability answers
///   (`set_capability`), and performs the [`ScrollRequest`]s it returns.
/// - Rendering is exposed as a plain render model via [`Rail::view`].
///
/// For subscription lifecycles against a concrete host, see the `scroll-rail-adapter` crate.
///
/// A clone is a new instance: it gets its own generated region id.
pub struct Rail<N> {
    options: RailOptions<N>,
    content: Vec<N>,
    auto_id: String,

    /// Last observed container geometry. `None` while no container is attached.
    metrics: Option<ScrollMetrics>,
    /// Answer of the pointer capability query. Only meaningful in `ControlsMode::Auto`.
    capability: Option<bool>,

    notified: RailState,
    notify_depth: usize,
    notify_pending: bool,
}

impl<N: Clone> Rail<N> {
    /// Creates a rail for a first render pass.
    ///
    /// Invalid numeric options are replaced by their defaults (see [`RailOptions::validate`]).
    pub fn new(options: RailOptions<N>) -> Self {
        let options = options.sanitized();
        let content = options.content();
        rdebug!(
            items = content.len(),
            mode = options.show_controls.as_str(),
            snap = options.snap,
            "Rail::new"
        );
        let mut rail = Self {
            options,
            content,
            auto_id: next_region_id(),
            metrics: None,
            capability: None,
            notified: RailState::default(),
            notify_depth: 0,
            notify_pending: false,
        };
        rail.notified = rail.state();
        rail
    }

    /// Starts a new render pass with `options`.
    ///
    /// Content is re-resolved and the generated region id is kept. Leaving
    /// `ControlsMode::Auto` drops the capability answer so it cannot leak into a later pass.
    pub fn set_options(&mut self, options: RailOptions<N>) {
        let options = options.sanitized();
        if options.show_controls != ControlsMode::Auto {
            self.capability = None;
        }
        self.content = options.content();
        self.options = options;
        rtrace!(
            items = self.content.len(),
            mode = self.options.show_controls.as_str(),
            "Rail::set_options"
        );
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut RailOptions<N>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }
}

impl<N> Rail<N> {
    pub fn options(&self) -> &RailOptions<N> {
        &self.options
    }

    /// Items of the current render pass, in order.
    pub fn content(&self) -> &[N] {
        &self.content
    }

    /// The id tying the controls to the scroll region.
    ///
    /// The caller-supplied id when present, otherwise an id generated once for this rail.
    pub fn region_id(&self) -> &str {
        self.options.id.as_deref().unwrap_or(&self.auto_id)
    }

    pub fn controls_mode(&self) -> ControlsMode {
        self.options.show_controls
    }

    pub fn is_attached(&self) -> bool {
        self.metrics.is_some()
    }

    pub fn metrics(&self) -> Option<ScrollMetrics> {
        self.metrics
    }

    pub fn capability(&self) -> Option<bool> {
        self.capability
    }

    /// Records the container's current geometry.
    ///
    /// Call this on mount, on every container scroll and on every viewport resize. Repeating
    /// an observation with unchanged geometry leaves the state untouched.
    pub fn observe(&mut self, metrics: ScrollMetrics) {
        rtrace!(
            offset = metrics.offset,
            scroll_extent = metrics.scroll_extent,
            viewport_extent = metrics.viewport_extent,
            "Rail::observe"
        );
        self.metrics = Some(metrics);
        self.notify();
    }

    /// Forgets the container (unmounted or not yet available). Both paging flags read `false`.
    pub fn detach(&mut self) {
        if self.metrics.take().is_some() {
            rtrace!("Rail::detach");
        }
        self.notify();
    }

    /// Records the pointer capability answer (`None` when no query is available).
    ///
    /// Ignored outside `ControlsMode::Auto`.
    pub fn set_capability(&mut self, matches: Option<bool>) {
        if self.options.show_controls != ControlsMode::Auto {
            rtrace!(?matches, "Rail::set_capability ignored in fixed mode");
            return;
        }
        self.capability = matches;
        self.notify();
    }

    pub fn paging_state(&self) -> PagingState {
        match self.metrics {
            Some(metrics) => PagingState::from_metrics(metrics, self.options.edge_tolerance),
            None => PagingState::default(),
        }
    }

    pub fn can_page(&self, direction: PageDirection) -> bool {
        self.paging_state().can_page(direction)
    }

    pub fn controls_visible(&self) -> bool {
        self.options
            .show_controls
            .fixed_visibility()
            .unwrap_or(self.capability == Some(true))
    }

    pub fn state(&self) -> RailState {
        let paging = self.paging_state();
        RailState {
            can_page_backward: paging.can_page_backward,
            can_page_forward: paging.can_page_forward,
            controls_visible: self.controls_visible(),
        }
    }

    /// Activates the control for `direction`.
    ///
    /// Returns `None` when the control is not rendered, is disabled, or no container is
    /// available. `live` is the container geometry at activation time; the page step is
    /// computed from its viewport width.
    pub fn activate(
        &self,
        direction: PageDirection,
        live: Option<ScrollMetrics>,
    ) -> Option<ScrollRequest> {
        if !self.controls_visible() {
            rtrace!(?direction, "Rail::activate: controls hidden");
            return None;
        }
        if !self.can_page(direction) {
            rtrace!(?direction, "Rail::activate: control disabled");
            return None;
        }
        let live = live?;
        Some(page_request(direction, live, self.options.page_factor))
    }

    /// Handles a key press on the focused scroll region.
    ///
    /// Arrow keys page without consulting the paging flags; the host clamps at the edges.
    pub fn key_down(&self, key: NavKey, live: Option<ScrollMetrics>) -> KeyOutcome {
        let Some(live) = live else {
            return KeyOutcome::ignored();
        };
        match key_direction(key) {
            Some(direction) => KeyOutcome {
                request: Some(page_request(direction, live, self.options.page_factor)),
                prevent_default: true,
            },
            None => KeyOutcome::ignored(),
        }
    }

    /// Builds the render model for the current pass.
    pub fn view(&self) -> RailView<'_, N> {
        RailView::build(self)
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Adapters typically observe geometry and set the capability answer together on mount.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.notify_depth = self.notify_depth.saturating_add(1);

        f(self);

        debug_assert!(self.notify_depth > 0, "notify_depth underflow");
        self.notify_depth = self.notify_depth.saturating_sub(1);

        if self.notify_depth == 0 && core::mem::take(&mut self.notify_pending) {
            self.notify_now();
        }
    }

    fn notify(&mut self) {
        if self.notify_depth > 0 {
            self.notify_pending = true;
            return;
        }
        self.notify_now();
    }

    fn notify_now(&mut self) {
        let next = self.state();
        if next == self.notified {
            return;
        }
        rdebug!(
            can_page_backward = next.can_page_backward,
            can_page_forward = next.can_page_forward,
            controls_visible = next.controls_visible,
            "Rail state changed"
        );
        self.notified = next;
        if let Some(cb) = self.options.on_change.clone() {
            cb(self);
        }
    }
}

impl<N: Clone> Clone for Rail<N> {
    fn clone(&self) -> Self {
        Self {
            options: self.options.clone(),
            content: self.content.clone(),
            auto_id: next_region_id(),
            metrics: self.metrics,
            capability: self.capability,
            notified: self.notified,
            notify_depth: 0,
            notify_pending: false,
        }
    }
}

impl<N> core::fmt::Debug for Rail<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rail")
            .field("options", &self.options)
            .field("items", &self.content.len())
            .field("region_id", &self.region_id())
            .field("metrics", &self.metrics)
            .field("capability", &self.capability)
            .finish_non_exhaustive()
    }
}
