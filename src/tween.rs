//! Renderer-side smoothing between successive engine targets.
//!
//! The engine only ever reports where the layer should end up. Renderers that
//! want eased motion instead of snapping feed each new target into a
//! [`TransformTween`] and sample it once per painted frame.

use crate::ease::TransitionSpec;
use crate::engine::TransformState;
use crate::error::ParallaxResult;

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolates each component of two transforms with clamped parameter `t`.
pub fn lerp_transform(a: TransformState, b: TransformState, t: f64) -> TransformState {
    let t = t.clamp(0.0, 1.0);
    TransformState {
        scale: lerp(a.scale, b.scale, t),
        rotate_x: lerp(a.rotate_x, b.rotate_x, t),
        rotate_y: lerp(a.rotate_y, b.rotate_y, t),
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TransformTween {
    spec: TransitionSpec,
    from: TransformState,
    to: TransformState,
    started_at: f64,
}

impl TransformTween {
    /// A settled tween resting at `initial`. Times are host seconds.
    pub fn new(spec: TransitionSpec, initial: TransformState) -> ParallaxResult<Self> {
        spec.validate()?;
        Ok(Self {
            spec,
            from: initial,
            to: initial,
            started_at: f64::NEG_INFINITY,
        })
    }

    /// Starts moving from whatever is displayed at `now` toward `target`.
    pub fn retarget(&mut self, target: TransformState, now: f64) {
        if target == self.to {
            return;
        }
        self.from = self.sample(now);
        self.to = target;
        self.started_at = now;
    }

    pub fn sample(&self, now: f64) -> TransformState {
        if self.is_settled(now) {
            return self.to;
        }
        lerp_transform(self.from, self.to, self.spec.progress(now - self.started_at))
    }

    pub fn is_settled(&self, now: f64) -> bool {
        now - self.started_at >= self.spec.duration_secs
    }

    pub fn target(&self) -> TransformState {
        self.to
    }
}
