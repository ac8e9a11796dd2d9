//! The parallax transform engine.
//!
//! Two independent inputs feed the engine: scroll progress of the container
//! through the viewport, and the pointer position inside the container. Each
//! input updates its own scale component; [`ParallaxEngine::compute_transform`]
//! combines them according to the configured [`AnimationMode`].

use crate::config::{AnimationMode, EngineConfig};
use crate::core::{Point, PointerSample, Rect, ScrollSample};
use crate::error::ParallaxResult;
use crate::geometry::ScrollGeometry;

/// Zoom added at the container center when hovering.
pub const HOVER_ZOOM_GAIN: f64 = 0.15;
/// Share of the hover offset that survives in [`AnimationMode::Both`].
pub const HOVER_BLEND: f64 = 0.3;
/// Degrees of tilt per unit of pointer offset from center.
pub const ROTATION_GAIN_DEG: f64 = 1.5;

/// Target transform for the background layer. Rotations are in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformState {
    pub scale: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl TransformState {
    pub fn identity_at(scale: f64) -> Self {
        Self {
            scale,
            rotate_x: 0.0,
            rotate_y: 0.0,
        }
    }
}

/// Scroll progress of `container` through a viewport of `viewport_height`.
///
/// Zero-size containers and non-positive or non-finite viewports yield `0`.
pub fn scroll_progress(container: Rect, viewport_height: f64) -> ScrollSample {
    if !has_area(container) || !is_positive(viewport_height) {
        return ScrollSample::default();
    }
    ScrollSample::new((viewport_height - container.y0) / (viewport_height + container.height()))
}

/// Maps client coordinates into the container's unit square.
///
/// Returns `None` when the container has no area. The result is clamped into
/// `[0, 1]` so edge rounding cannot push the transform past its bounds.
pub fn normalize_pointer(client: Point, container: Rect) -> Option<PointerSample> {
    if !has_area(container) {
        return None;
    }
    let x = (client.x - container.x0) / container.width();
    let y = (client.y - container.y0) / container.height();
    if !(x.is_finite() && y.is_finite()) {
        return None;
    }
    Some(PointerSample::clamped(x, y))
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn has_area(r: Rect) -> bool {
    is_positive(r.width()) && is_positive(r.height())
}

#[derive(Clone, Debug)]
pub struct ParallaxEngine {
    config: EngineConfig,
    scroll_scale: f64,
    hover_scale: f64,
    pointer: PointerSample,
}

impl ParallaxEngine {
    pub fn new(config: EngineConfig) -> ParallaxResult<Self> {
        if let Err(err) = config.validate() {
            tracing::debug!(%err, "rejected engine config");
            return Err(err);
        }
        Ok(Self {
            config,
            scroll_scale: config.base_scale,
            hover_scale: config.base_scale,
            pointer: PointerSample::CENTER,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn scroll_scale(&self) -> f64 {
        self.scroll_scale
    }

    pub fn hover_scale(&self) -> f64 {
        self.hover_scale
    }

    pub fn pointer(&self) -> PointerSample {
        self.pointer
    }

    /// Reads the layout once and updates the scroll-derived scale.
    ///
    /// Pointer state is left untouched. Returns the progress that was applied.
    pub fn on_scroll<G: ScrollGeometry + ?Sized>(&mut self, geometry: &G) -> ScrollSample {
        let sample = scroll_progress(geometry.container_rect(), geometry.viewport_height());
        self.apply_scroll(sample);
        sample
    }

    /// Updates the scroll-derived scale from an already computed progress.
    pub fn apply_scroll(&mut self, sample: ScrollSample) {
        let cfg = &self.config;
        let zoom = cfg.base_scale + sample.progress * cfg.zoom_range * cfg.sensitivity;
        self.scroll_scale = cfg.clamp_scale(zoom);
        tracing::trace!(
            progress = sample.progress,
            scroll_scale = self.scroll_scale,
            "scroll recomputed"
        );
    }

    /// Pointer moved to `client` over a container occupying `container`.
    ///
    /// Ignored unless the mode tracks the pointer, or when the container has no area.
    pub fn on_pointer_move(&mut self, client: Point, container: Rect) {
        if !self.config.animation_mode.tracks_pointer() {
            return;
        }
        let Some(sample) = normalize_pointer(client, container) else {
            tracing::trace!(?container, "pointer ignored: degenerate container");
            return;
        };
        self.hover_scale = self.hover_scale_at(sample);
        self.pointer = sample;
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover_scale = self.config.base_scale;
        self.pointer = PointerSample::CENTER;
    }

    /// Hover scale for a pointer at `sample`, largest at the center.
    pub fn hover_scale_at(&self, sample: PointerSample) -> f64 {
        let zoom = self.config.base_scale + HOVER_ZOOM_GAIN * (1.0 - sample.distance_from_center());
        self.config.clamp_scale(zoom)
    }

    pub fn compute_transform(&self) -> TransformState {
        let cfg = &self.config;
        let scale = match cfg.animation_mode {
            AnimationMode::ScrollOnly => self.scroll_scale,
            AnimationMode::HoverOnly => self.hover_scale,
            AnimationMode::Both => cfg.clamp_scale(
                self.scroll_scale + (self.hover_scale - cfg.base_scale) * HOVER_BLEND,
            ),
            AnimationMode::Static => cfg.base_scale,
        };

        if !(cfg.rotation_enabled && cfg.animation_mode.tracks_pointer()) {
            return TransformState::identity_at(scale);
        }
        TransformState {
            scale,
            rotate_x: (self.pointer.y - 0.5) * ROTATION_GAIN_DEG,
            rotate_y: (self.pointer.x - 0.5) * ROTATION_GAIN_DEG,
        }
    }
}
