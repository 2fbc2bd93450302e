//! Heat fades per frame; coverage fades by wall-clock time.

use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub struct FrameDecay {
    pub factor: f32,
    pub epsilon: f32,
    pub enabled: bool,
}

impl FrameDecay {
    pub fn new(factor: f32, epsilon: f32, enabled: bool) -> Self {
        Self {
            factor,
            epsilon,
            enabled,
        }
    }

    /// Value after one frame; anything below `epsilon` becomes exactly zero.
    #[inline]
    pub fn step(&self, value: f32) -> f32 {
        if !self.enabled {
            return value;
        }
        let next = value * self.factor;
        if next < self.epsilon {
            0.0
        } else {
            next
        }
    }

    /// Upper bound on the frames needed for `value` to reach zero.
    ///
    /// `None` when decay is disabled or the factor never shrinks anything.
    pub fn frames_to_zero(&self, value: f32) -> Option<u32> {
        if value <= 0.0 {
            return Some(0);
        }
        if !self.enabled || self.factor >= 1.0 || self.factor <= 0.0 || self.epsilon <= 0.0 {
            return None;
        }
        if value < self.epsilon {
            return Some(1);
        }
        let n = ((self.epsilon / value).ln() / self.factor.ln()).ceil();
        Some(n.max(1.0) as u32 + 1)
    }
}

/// `later - earlier`, or zero if the clock went backwards.
#[inline]
pub fn elapsed_between(earlier: Instant, later: Instant) -> Duration {
    if later > earlier {
        later.duration_since(earlier)
    } else {
        Duration::ZERO
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TimeFade {
    pub window: Duration,
    pub enabled: bool,
}

impl TimeFade {
    pub fn new(window: Duration, enabled: bool) -> Self {
        Self { window, enabled }
    }

    /// Opacity of a mark made at `touched`, seen at `now`, in 0..1.
    pub fn opacity(&self, touched: Instant, now: Instant) -> f32 {
        if !self.enabled {
            return 1.0;
        }
        let window = self.window.as_secs_f32();
        if window <= 0.0 {
            return 0.0;
        }
        let age = elapsed_between(touched, now).as_secs_f32();
        (1.0 - age / window).clamp(0.0, 1.0)
    }
}
