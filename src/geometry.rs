//! Environment queries the engine performs at event time.

use crate::core::Rect;

/// Layout information supplied by the host on demand.
///
/// Every call is a "layout read" in the host; the throttle exists to keep the
/// number of reads per frame at one.
pub trait ScrollGeometry {
    /// The container's bounding box in viewport (client) coordinates.
    fn container_rect(&self) -> Rect;

    /// Current viewport height in the same units as [`ScrollGeometry::container_rect`].
    fn viewport_height(&self) -> f64;
}

impl<G: ScrollGeometry + ?Sized> ScrollGeometry for &G {
    fn container_rect(&self) -> Rect {
        (**self).container_rect()
    }

    fn viewport_height(&self) -> f64 {
        (**self).viewport_height()
    }
}

/// A fixed layout snapshot, handy for hosts that already hold the numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSnapshot {
    pub container: Rect,
    pub viewport_height: f64,
}

impl ScrollGeometry for LayoutSnapshot {
    fn container_rect(&self) -> Rect {
        self.container
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }
}
