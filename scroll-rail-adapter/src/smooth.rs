/// Progress curve of a smooth scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the curve.
    pub fn apply(self, p: f64) -> f64 {
        match self {
            Self::Linear => p,
            Self::SmoothStep => 3.0 * p * p - 2.0 * p * p * p,
            Self::EaseInOutCubic => {
                let q = 1.0 - p;
                if p < 0.5 {
                    4.0 * p * p * p
                } else {
                    1.0 - 4.0 * q * q * q
                }
            }
        }
    }
}

/// An in-flight smooth scroll of a container offset.
///
/// Relative requests that arrive while it runs are added to the destination rather than to the
/// current position, and the motion restarts from wherever the container is at that moment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothScroll {
    origin: f64,
    destination: f64,
    started_ms: u64,
    duration_ms: u64,
    easing: Easing,
}

impl SmoothScroll {
    /// Starts moving from `origin` by `delta`, keeping the destination within `[0, max_offset]`.
    pub fn start(
        origin: f64,
        delta: f64,
        max_offset: f64,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Self {
        Self {
            origin,
            destination: clamp_offset(origin + delta, max_offset),
            started_ms: now_ms,
            duration_ms,
            easing,
        }
    }

    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// Where the container comes to rest.
    pub fn destination(&self) -> f64 {
        self.destination
    }

    /// When the motion ends if nothing else is composed onto it.
    pub fn finish_ms(&self) -> u64 {
        self.started_ms.saturating_add(self.duration_ms)
    }

    /// Elapsed fraction of the motion, in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.started_ms) as f64;
        (elapsed / self.duration_ms as f64).min(1.0)
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Offset of the container at `now_ms`. Exactly the destination once finished.
    pub fn position(&self, now_ms: u64) -> f64 {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            return self.destination;
        }
        self.origin + (self.destination - self.origin) * self.easing.apply(p)
    }

    /// Adds another relative request on top of the pending destination.
    ///
    /// Returns the new destination.
    pub fn compose(&mut self, now_ms: u64, delta: f64, max_offset: f64, duration_ms: u64) -> f64 {
        self.origin = self.position(now_ms);
        self.destination = clamp_offset(self.destination + delta, max_offset);
        self.started_ms = now_ms;
        self.duration_ms = duration_ms;
        self.destination
    }
}

pub(crate) fn clamp_offset(offset: f64, max_offset: f64) -> f64 {
    offset.min(max_offset).max(0.0)
}
