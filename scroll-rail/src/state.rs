use crate::{PageDirection, ScrollMetrics};

/// Which paging directions are currently available.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagingState {
    pub can_page_backward: bool,
    pub can_page_forward: bool,
}

impl PagingState {
    /// Projects the paging flags from live container geometry.
    ///
    /// `tolerance` treats offsets within that distance of the end as "at the end", absorbing
    /// subpixel rounding of `scroll_extent - viewport_extent`.
    pub fn from_metrics(metrics: ScrollMetrics, tolerance: f64) -> Self {
        let max = metrics.scroll_extent - metrics.viewport_extent - tolerance;
        Self {
            can_page_backward: metrics.offset > 0.0,
            can_page_forward: metrics.offset < max,
        }
    }

    pub fn can_page(&self, direction: PageDirection) -> bool {
        match direction {
            PageDirection::Backward => self.can_page_backward,
            PageDirection::Forward => self.can_page_forward,
        }
    }
}

/// A snapshot of the rail's derived runtime state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RailState {
    pub can_page_backward: bool,
    pub can_page_forward: bool,
    pub controls_visible: bool,
}
