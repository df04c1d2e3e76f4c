use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::ParseControlsModeError;

/// Paging direction along the rail's horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageDirection {
    Backward,
    Forward,
}

impl PageDirection {
    pub fn sign(self) -> i64 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }

    /// The accessible label of the control paging in this direction.
    pub fn label(self) -> &'static str {
        match self {
            Self::Backward => "Scroll left",
            Self::Forward => "Scroll right",
        }
    }
}

/// When the backward/forward controls are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ControlsMode {
    /// Follow the pointer capability query (hover + fine pointer).
    #[default]
    Auto,
    Always,
    Never,
}

impl ControlsMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }

    /// Fixed modes resolve without consulting the host.
    pub fn fixed_visibility(self) -> Option<bool> {
        match self {
            Self::Auto => None,
            Self::Always => Some(true),
            Self::Never => Some(false),
        }
    }
}

impl fmt::Display for ControlsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlsMode {
    type Err = ParseControlsModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(ParseControlsModeError(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Live geometry of the scroll container, in host units.
///
/// Mirrors `scrollLeft` / `scrollWidth` / `clientWidth` of a DOM scroller.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub offset: f64,
    pub scroll_extent: f64,
    pub viewport_extent: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, scroll_extent: f64, viewport_extent: f64) -> Self {
        Self {
            offset,
            scroll_extent,
            viewport_extent,
        }
    }

    /// The largest offset the container can rest at.
    pub fn max_offset(&self) -> f64 {
        (self.scroll_extent - self.viewport_extent).max(0.0)
    }
}

/// A relative scroll the host should perform on the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRequest {
    pub delta: i64,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    pub fn direction(&self) -> Option<PageDirection> {
        match self.delta {
            0 => None,
            d if d < 0 => Some(PageDirection::Backward),
            _ => Some(PageDirection::Forward),
        }
    }
}

/// Keys the rail reacts to while its scroll region is focused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl NavKey {
    /// Maps a host key name (`KeyboardEvent.key`) to a [`NavKey`].
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// Result of a key press delivered to the scroll region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    pub request: Option<ScrollRequest>,
    /// Whether the host should suppress its native handling of the key.
    pub prevent_default: bool,
}

impl KeyOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }
}
