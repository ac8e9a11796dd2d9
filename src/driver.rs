//! Binds a [`ParallaxEngine`] to a host's layout and frame loop.

use crate::config::EngineConfig;
use crate::core::Point;
use crate::engine::{ParallaxEngine, TransformState};
use crate::error::ParallaxResult;
use crate::geometry::ScrollGeometry;
use crate::throttle::FrameThrottle;

/// Work counters, useful to confirm that scroll bursts coalesce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DriverStats {
    /// Scroll events received.
    pub scroll_events: u64,
    /// Frame callbacks the host was asked to schedule.
    pub frames_requested: u64,
    /// Layout reads performed (scroll and pointer).
    pub geometry_reads: u64,
    /// Scroll-derived scale recomputations.
    pub scroll_recomputes: u64,
}

/// A mounted parallax layer.
///
/// Scroll events go through a per-frame throttle; pointer events are applied
/// immediately.
#[derive(Debug)]
pub struct ParallaxDriver<G> {
    engine: ParallaxEngine,
    geometry: G,
    throttle: FrameThrottle,
    stats: DriverStats,
}

impl<G: ScrollGeometry> ParallaxDriver<G> {
    /// Validates `config` and syncs scroll state against the initial layout.
    pub fn mount(config: EngineConfig, geometry: G) -> ParallaxResult<Self> {
        let engine = ParallaxEngine::new(config)?;
        let mut driver = Self {
            engine,
            geometry,
            throttle: FrameThrottle::new(),
            stats: DriverStats::default(),
        };
        driver.sync_scroll();
        tracing::debug!(mode = ?config.animation_mode, "parallax driver mounted");
        Ok(driver)
    }

    /// Replaces the configuration, resetting both inputs and re-reading the layout.
    pub fn reconfigure(&mut self, config: EngineConfig) -> ParallaxResult<()> {
        self.engine = ParallaxEngine::new(config)?;
        self.throttle = FrameThrottle::new();
        self.sync_scroll();
        tracing::debug!(mode = ?config.animation_mode, "parallax driver reconfigured");
        Ok(())
    }

    /// Records a scroll event. `true` means the host must schedule a frame callback.
    pub fn scroll_event(&mut self) -> bool {
        self.stats.scroll_events += 1;
        let schedule = self.throttle.request();
        if schedule {
            self.stats.frames_requested += 1;
        }
        schedule
    }

    /// The frame callback. Returns the new transform when a scroll was pending.
    pub fn frame(&mut self) -> Option<TransformState> {
        if !self.throttle.take() {
            return None;
        }
        self.sync_scroll();
        Some(self.engine.compute_transform())
    }

    pub fn pointer_move(&mut self, client: Point) -> TransformState {
        self.stats.geometry_reads += 1;
        let container = self.geometry.container_rect();
        self.engine.on_pointer_move(client, container);
        self.engine.compute_transform()
    }

    pub fn pointer_leave(&mut self) -> TransformState {
        self.engine.on_pointer_leave();
        self.engine.compute_transform()
    }

    pub fn transform(&self) -> TransformState {
        self.engine.compute_transform()
    }

    pub fn engine(&self) -> &ParallaxEngine {
        &self.engine
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Mutable access for hosts that simulate their own layout.
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    pub fn stats(&self) -> DriverStats {
        self.stats
    }

    pub fn has_pending_frame(&self) -> bool {
        self.throttle.is_pending()
    }

    /// Detaches from the host, handing the geometry source back.
    pub fn unmount(self) -> G {
        tracing::debug!(stats = ?self.stats, "parallax driver unmounted");
        self.geometry
    }

    fn sync_scroll(&mut self) {
        self.stats.geometry_reads += 1;
        self.engine.on_scroll(&self.geometry);
        self.stats.scroll_recomputes += 1;
    }
}
