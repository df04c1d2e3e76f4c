use crate::{NavKey, PageDirection, ScrollBehavior, ScrollMetrics, ScrollRequest};

/// Default fraction of the visible width moved per page.
pub const DEFAULT_PAGE_FACTOR: f64 = 0.9;

/// Rounds half-way values up (`floor(x + 0.5)`), like the host's `Math.round`.
pub(crate) fn round_half_up(value: f64) -> i64 {
    let shifted = value + 0.5;
    let truncated = shifted as i64;
    if (truncated as f64) > shifted {
        truncated - 1
    } else {
        truncated
    }
}

/// Distance of one page: `round(viewport_extent * page_factor)`.
pub fn page_step(viewport_extent: f64, page_factor: f64) -> i64 {
    round_half_up(viewport_extent * page_factor)
}

/// Builds the smooth relative scroll for one page in `direction`.
pub fn page_request(
    direction: PageDirection,
    metrics: ScrollMetrics,
    page_factor: f64,
) -> ScrollRequest {
    let step = page_step(metrics.viewport_extent, page_factor);
    ScrollRequest {
        delta: direction.sign() * step,
        behavior: ScrollBehavior::Smooth,
    }
}

/// The paging direction bound to a key, if any.
pub fn key_direction(key: NavKey) -> Option<PageDirection> {
    match key {
        NavKey::ArrowLeft => Some(PageDirection::Backward),
        NavKey::ArrowRight => Some(PageDirection::Forward),
        NavKey::Other => None,
    }
}
