use crate::error::{ParallaxError, ParallaxResult};

/// Which input signals drive the transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationMode {
    /// Scroll progress alone sets the scale.
    #[serde(rename = "scroll")]
    ScrollOnly,
    /// Pointer position alone sets the scale and rotation.
    #[serde(rename = "hover")]
    HoverOnly,
    /// Scroll dominates, the pointer adds a damped accent and rotation.
    #[default]
    Both,
    /// Neither input is active; the layer rests at `base_scale`.
    ///
    /// Unrecognized mode names deserialize to this variant.
    #[serde(other)]
    Static,
}

impl AnimationMode {
    pub fn tracks_pointer(self) -> bool {
        matches!(self, Self::HoverOnly | Self::Both)
    }
}

/// Engine parameters, fixed for the lifetime of an engine.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum additional scale attributable to scroll progress.
    pub zoom_range: f64,
    /// Multiplier applied to the scroll-driven zoom.
    pub sensitivity: f64,
    pub animation_mode: AnimationMode,
    pub base_scale: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub rotation_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            zoom_range: 0.2,
            sensitivity: 0.6,
            animation_mode: AnimationMode::Both,
            base_scale: 1.0,
            min_scale: 0.8,
            max_scale: 1.4,
            rotation_enabled: true,
        }
    }
}

impl EngineConfig {
    pub fn with_mode(mut self, mode: AnimationMode) -> Self {
        self.animation_mode = mode;
        self
    }

    pub fn with_rotation(mut self, enabled: bool) -> Self {
        self.rotation_enabled = enabled;
        self
    }

    pub fn validate(&self) -> ParallaxResult<()> {
        for (name, v) in [
            ("zoom_range", self.zoom_range),
            ("sensitivity", self.sensitivity),
            ("base_scale", self.base_scale),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
        ] {
            if !v.is_finite() {
                return Err(ParallaxError::validation(format!("{name} must be finite")));
            }
        }
        if self.min_scale > self.base_scale || self.base_scale > self.max_scale {
            return Err(ParallaxError::validation(format!(
                "scale bounds must satisfy min_scale <= base_scale <= max_scale (got {} <= {} <= {})",
                self.min_scale, self.base_scale, self.max_scale
            )));
        }
        Ok(())
    }

    /// Parses a (possibly partial) JSON config; absent fields take their defaults.
    pub fn from_json_str(s: &str) -> ParallaxResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub(crate) fn clamp_scale(&self, v: f64) -> f64 {
        v.clamp(self.min_scale, self.max_scale)
    }
}
