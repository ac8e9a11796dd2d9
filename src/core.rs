pub use kurbo::{Point, Rect, Size, Vec2};

/// Normalized pointer position inside the container, `(0, 0)` top-left, `(1, 1)` bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    /// Builds a sample with both coordinates clamped into `[0, 1]`.
    pub fn clamped(x: f64, y: f64) -> Self {
        Self {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        }
    }

    /// Euclidean distance from the container center, in `[0, sqrt(0.5)]` for clamped samples.
    pub fn distance_from_center(self) -> f64 {
        (Vec2::new(self.x, self.y) - Vec2::new(0.5, 0.5)).hypot()
    }
}

impl Default for PointerSample {
    fn default() -> Self {
        Self::CENTER
    }
}

/// How far the container has travelled through the viewport.
///
/// `0` means the container sits fully below the viewport, `1` means it has been
/// scrolled fully past the top.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct ScrollSample {
    pub progress: f64,
}

impl ScrollSample {
    pub fn new(progress: f64) -> Self {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { progress }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_clamps_into_unit_square() {
        let p = PointerSample::clamped(-0.01, 1.02);
        assert_eq!(p, PointerSample { x: 0.0, y: 1.0 });
    }

    #[test]
    fn corner_distance_is_half_diagonal() {
        let d = PointerSample { x: 0.0, y: 0.0 }.distance_from_center();
        assert!((d - 0.5f64.sqrt()).abs() < 1e-12);
        assert_eq!(PointerSample::CENTER.distance_from_center(), 0.0);
    }

    #[test]
    fn scroll_sample_rejects_non_finite() {
        assert_eq!(ScrollSample::new(f64::NAN).progress, 0.0);
        assert_eq!(ScrollSample::new(f64::INFINITY).progress, 0.0);
        assert_eq!(ScrollSample::new(1.7).progress, 1.0);
        assert_eq!(ScrollSample::new(-3.0).progress, 0.0);
    }
}
