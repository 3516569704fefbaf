/// A small tween over a scroll distance, sampled by the adapter each tick.
///
/// The tween knows nothing about the carousel offset: it only tells how far along the way to
/// `distance` the scroll should be at a given time. Circular offsets wrap, so a travelled
/// distance composes better than absolute from/to offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    /// Signed total distance in pixels.
    pub distance: i64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(distance: i64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            distance,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Distance travelled at `now_ms`, between `0` and `distance` (inclusive).
    ///
    /// Once the tween is done this is exactly `distance`.
    pub fn sample(&self, now_ms: u64) -> i64 {
        if self.is_done(now_ms) {
            return self.distance;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = self.easing.sample(t).clamp(0.0, 1.0);
        // Truncates towards zero, so partial samples never overshoot.
        (self.distance as f64 * eased as f64) as i64
    }

    /// Restarts at `now_ms` towards `remaining`, measured from wherever the scroll is now.
    pub fn retarget(&mut self, now_ms: u64, remaining: i64, duration_ms: u64) {
        *self = Self::new(remaining, now_ms, duration_ms, self.easing);
    }
}

/// Progress curves for [`Tween`]. The eased curves decelerate, like a fling coming to rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// The usual choice for snapping.
    #[default]
    EaseOutQuad,
    /// Leaves faster and settles longer; suits scrolling over several items.
    EaseOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        let rest = 1.0 - t;
        match self {
            Self::Linear => t,
            Self::EaseOutQuad => 1.0 - rest * rest,
            Self::EaseOutCubic => 1.0 - rest * rest * rest,
        }
    }
}
