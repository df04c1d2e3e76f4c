use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::content::{Child, resolve_content};
use crate::paging::DEFAULT_PAGE_FACTOR;
use crate::rail::Rail;
use crate::{ControlsMode, InlineStyle, OptionsError};

/// Accessible label used when the caller provides none.
pub const DEFAULT_ARIA_LABEL: &str = "Scrollable content";

/// Default distance from the end that still counts as "at the end".
pub const DEFAULT_EDGE_TOLERANCE: f64 = 1.0;

/// A callback fired when the rail's derived state changes.
///
/// Recomputations that produce the same [`crate::RailState`] do not fire it.
pub type OnChangeCallback<N> = Arc<dyn Fn(&Rail<N>) + Send + Sync>;

/// Optional class hooks, appended after the structural classes of each element.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RailClassNames {
    /// Outer wrapper around the scroller and controls.
    pub root: Option<String>,
    /// The horizontal scroller.
    pub scroller: Option<String>,
    /// Wrapper around each item (the snap target).
    pub item: Option<String>,
    /// Shared by both controls.
    pub control_button: Option<String>,
    pub prev_button: Option<String>,
    pub next_button: Option<String>,
}

impl RailClassNames {
    /// Whether any control hook is supplied; such controls opt out of the default chrome.
    pub fn has_custom_controls(&self) -> bool {
        self.control_button.is_some() || self.prev_button.is_some() || self.next_button.is_some()
    }
}

/// Configuration for [`crate::Rail`].
///
/// One value describes one render pass. Pass a new one to `Rail::set_options` to re-render.
pub struct RailOptions<N> {
    /// Explicit item list. Takes precedence over `children` when present.
    pub items: Option<Vec<N>>,
    /// Nested child content, flattened when `items` is absent.
    pub children: Option<Vec<Child<N>>>,

    pub aria_label: String,

    /// Enables scroll snapping to item boundaries.
    pub snap: bool,

    /// Fraction of the visible width moved by one page. Must be finite and greater than zero.
    pub page_factor: f64,

    pub show_controls: ControlsMode,

    /// Stable region id for `aria-controls`. Generated per instance when absent.
    pub id: Option<String>,

    /// Extra class on the outer wrapper.
    pub class_name: Option<String>,

    /// Spacing hook applied to the scroller. Not tied to any CSS framework.
    pub gap_class_name: Option<String>,

    pub class_names: RailClassNames,

    /// Inline declarations merged onto the scroller's baseline style.
    pub scroller_style: InlineStyle,

    /// Offsets within this distance of the end count as "at the end".
    pub edge_tolerance: f64,

    pub on_change: Option<OnChangeCallback<N>>,
}

impl<N: Clone> Clone for RailOptions<N> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            children: self.children.clone(),
            aria_label: self.aria_label.clone(),
            snap: self.snap,
            page_factor: self.page_factor,
            show_controls: self.show_controls,
            id: self.id.clone(),
            class_name: self.class_name.clone(),
            gap_class_name: self.gap_class_name.clone(),
            class_names: self.class_names.clone(),
            scroller_style: self.scroller_style.clone(),
            edge_tolerance: self.edge_tolerance,
            on_change: self.on_change.clone(),
        }
    }
}

impl<N> Default for RailOptions<N> {
    fn default() -> Self {
        Self {
            items: None,
            children: None,
            aria_label: String::from(DEFAULT_ARIA_LABEL),
            snap: true,
            page_factor: DEFAULT_PAGE_FACTOR,
            show_controls: ControlsMode::Auto,
            id: None,
            class_name: None,
            gap_class_name: None,
            class_names: RailClassNames::default(),
            scroller_style: InlineStyle::default(),
            edge_tolerance: DEFAULT_EDGE_TOLERANCE,
            on_change: None,
        }
    }
}

impl<N> RailOptions<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options rendering an explicit item list.
    pub fn with_items(mut self, items: impl IntoIterator<Item = N>) -> Self {
        self.items = Some(items.into_iter().collect());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Child<N>>) -> Self {
        self.children = Some(children.into_iter().collect());
        self
    }

    pub fn with_aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = aria_label.into();
        self
    }

    pub fn with_snap(mut self, snap: bool) -> Self {
        self.snap = snap;
        self
    }

    pub fn with_page_factor(mut self, page_factor: f64) -> Self {
        self.page_factor = page_factor;
        self
    }

    pub fn with_show_controls(mut self, show_controls: ControlsMode) -> Self {
        self.show_controls = show_controls;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_gap_class_name(mut self, gap_class_name: impl Into<String>) -> Self {
        self.gap_class_name = Some(gap_class_name.into());
        self
    }

    pub fn with_class_names(mut self, class_names: RailClassNames) -> Self {
        self.class_names = class_names;
        self
    }

    pub fn with_scroller_style(mut self, scroller_style: InlineStyle) -> Self {
        self.scroller_style = scroller_style;
        self
    }

    pub fn with_edge_tolerance(mut self, edge_tolerance: f64) -> Self {
        self.edge_tolerance = edge_tolerance;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Rail<N>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// Checks the numeric knobs and the caller id.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.page_factor.is_finite() || self.page_factor <= 0.0 {
            return Err(OptionsError::InvalidPageFactor(self.page_factor));
        }
        if !self.edge_tolerance.is_finite() || self.edge_tolerance < 0.0 {
            return Err(OptionsError::InvalidEdgeTolerance(self.edge_tolerance));
        }
        if self.id.as_deref() == Some("") {
            return Err(OptionsError::EmptyRegionId);
        }
        Ok(())
    }

    /// Replaces every rejected value with its default so a render pass never fails.
    pub(crate) fn sanitized(mut self) -> Self {
        while let Err(err) = self.validate() {
            rwarn!(error = %err, "RailOptions: falling back to default");
            match err {
                OptionsError::InvalidPageFactor(_) => self.page_factor = DEFAULT_PAGE_FACTOR,
                OptionsError::InvalidEdgeTolerance(_) => {
                    self.edge_tolerance = DEFAULT_EDGE_TOLERANCE
                }
                OptionsError::EmptyRegionId => self.id = None,
            }
        }
        self
    }
}

impl<N: Clone> RailOptions<N> {
    /// The ordered items this configuration renders.
    pub fn content(&self) -> Vec<N> {
        resolve_content(self.items.as_deref(), self.children.as_deref())
    }
}

impl<N> core::fmt::Debug for RailOptions<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RailOptions")
            .field("items", &self.items.as_ref().map(Vec::len))
            .field("children", &self.children.as_ref().map(Vec::len))
            .field("aria_label", &self.aria_label)
            .field("snap", &self.snap)
            .field("page_factor", &self.page_factor)
            .field("show_controls", &self.show_controls)
            .field("id", &self.id)
            .field("class_name", &self.class_name)
            .field("gap_class_name", &self.gap_class_name)
            .field("class_names", &self.class_names)
            .field("scroller_style", &self.scroller_style)
            .field("edge_tolerance", &self.edge_tolerance)
            .finish_non_exhaustive()
    }
}
