//! JSON event scripts for replaying a parallax session without a host.

use std::path::Path;

use anyhow::Context as _;

use crate::config::EngineConfig;
use crate::core::{Point, Rect, Size};
use crate::driver::{DriverStats, ParallaxDriver};
use crate::engine::TransformState;
use crate::error::{ParallaxError, ParallaxResult};
use crate::geometry::ScrollGeometry;

/// Container box in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContainerBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerBox {
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(Point::new(self.left, self.top), Size::new(self.width, self.height))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// The page scrolled; the container now starts at `top`.
    Scroll { top: f64 },
    /// The host ran its frame callback.
    Frame,
    /// Pointer moved to client coordinates `(x, y)`.
    PointerMove { x: f64, y: f64 },
    PointerLeave,
    /// The viewport changed height. Takes effect on the next layout read.
    Resize { viewport_height: f64 },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Script {
    #[serde(default)]
    pub config: EngineConfig,
    pub viewport_height: f64,
    pub container: ContainerBox,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    pub fn from_json_str(s: &str) -> ParallaxResult<Self> {
        let script: Self = serde_json::from_str(s)?;
        script.validate()?;
        Ok(script)
    }

    pub fn from_path(path: &Path) -> ParallaxResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read script '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> ParallaxResult<()> {
        self.config.validate()?;
        let c = &self.container;
        let finite = [self.viewport_height, c.left, c.top, c.width, c.height]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(ParallaxError::validation(
                "script geometry must be finite numbers",
            ));
        }
        if c.width < 0.0 || c.height < 0.0 {
            return Err(ParallaxError::validation(format!(
                "container size must be >= 0 (got {}x{})",
                c.width, c.height
            )));
        }
        if self.viewport_height <= 0.0 {
            return Err(ParallaxError::validation(format!(
                "viewport_height must be > 0 (got {})",
                self.viewport_height
            )));
        }
        for (i, ev) in self.events.iter().enumerate() {
            let ok = match *ev {
                ScriptEvent::Scroll { top } => top.is_finite(),
                ScriptEvent::PointerMove { x, y } => x.is_finite() && y.is_finite(),
                ScriptEvent::Resize { viewport_height } => {
                    viewport_height.is_finite() && viewport_height > 0.0
                }
                ScriptEvent::Frame | ScriptEvent::PointerLeave => true,
            };
            if !ok {
                return Err(ParallaxError::validation(format!(
                    "event {i} has non-finite coordinates or a non-positive viewport"
                )));
            }
        }
        Ok(())
    }
}

/// Layout that only changes when a script says so.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulatedLayout {
    pub container: ContainerBox,
    pub viewport_height: f64,
}

impl ScrollGeometry for SimulatedLayout {
    fn container_rect(&self) -> Rect {
        self.container.rect()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReplayStep {
    pub index: usize,
    pub event: ScriptEvent,
    /// A scroll event asked the host for a frame callback.
    pub frame_scheduled: bool,
    pub transform: TransformState,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Replay {
    pub initial: TransformState,
    pub steps: Vec<ReplayStep>,
    pub stats: DriverStats,
}

#[tracing::instrument(skip(script), fields(events = script.events.len()))]
pub fn replay(script: &Script) -> ParallaxResult<Replay> {
    script.validate()?;
    let layout = SimulatedLayout {
        container: script.container,
        viewport_height: script.viewport_height,
    };
    let mut driver = ParallaxDriver::mount(script.config, layout)?;
    let initial = driver.transform();

    let mut steps = Vec::with_capacity(script.events.len());
    for (index, event) in script.events.iter().copied().enumerate() {
        let mut frame_scheduled = false;
        let transform = match event {
            ScriptEvent::Scroll { top } => {
                driver.geometry_mut().container.top = top;
                frame_scheduled = driver.scroll_event();
                driver.transform()
            }
            ScriptEvent::Frame => driver.frame().unwrap_or_else(|| driver.transform()),
            ScriptEvent::PointerMove { x, y } => driver.pointer_move(Point::new(x, y)),
            ScriptEvent::PointerLeave => driver.pointer_leave(),
            ScriptEvent::Resize { viewport_height } => {
                driver.geometry_mut().viewport_height = viewport_height;
                driver.transform()
            }
        };
        steps.push(ReplayStep {
            index,
            event,
            frame_scheduled,
            transform,
        });
    }

    let stats = driver.stats();
    driver.unmount();
    Ok(Replay {
        initial,
        steps,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"{
        "config": { "animation_mode": "scroll" },
        "viewport_height": 1000.0,
        "container": { "left": 0.0, "top": 1000.0, "width": 800.0, "height": 500.0 },
        "events": [
            { "type": "scroll", "top": 800.0 },
            { "type": "scroll", "top": 600.0 },
            { "type": "scroll", "top": 250.0 },
            { "type": "frame" },
            { "type": "pointer_move", "x": 400.0, "y": 500.0 },
            { "type": "frame" }
        ]
    }"#;

    #[test]
    fn parses_and_replays() {
        let script = Script::from_json_str(SCRIPT).unwrap();
        let r = replay(&script).unwrap();
        assert_eq!(r.initial.scale, 1.0);
        assert_eq!(r.steps.len(), 6);
        assert!(r.steps[0].frame_scheduled);
        assert!(!r.steps[1].frame_scheduled);
        assert!(!r.steps[2].frame_scheduled);
        // Nothing changes until the frame runs.
        assert_eq!(r.steps[2].transform.scale, 1.0);
        assert!((r.steps[3].transform.scale - 1.06).abs() < 1e-9);
        // Scroll-only ignores the pointer.
        assert_eq!(r.steps[4].transform, r.steps[3].transform);
        assert_eq!(r.stats.scroll_events, 3);
        assert_eq!(r.stats.frames_requested, 1);
        assert_eq!(r.stats.scroll_recomputes, 2);
    }

    #[test]
    fn replay_is_deterministic() {
        let script = Script::from_json_str(SCRIPT).unwrap();
        assert_eq!(replay(&script).unwrap(), replay(&script).unwrap());
    }

    #[test]
    fn rejects_non_finite_events() {
        let mut script = Script::from_json_str(SCRIPT).unwrap();
        script.events.push(ScriptEvent::PointerMove {
            x: f64::NAN,
            y: 0.0,
        });
        let err = replay(&script).unwrap_err();
        assert!(err.to_string().contains("event 6"));
    }

    #[test]
    fn rejects_negative_geometry() {
        let err = Script::from_json_str(
            r#"{"viewport_height":1000,"container":{"left":0,"top":250,"width":800,"height":-500}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("container size must be >= 0"));

        let err = Script::from_json_str(
            r#"{"viewport_height":-500,"container":{"left":0,"top":250,"width":800,"height":500}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("viewport_height must be > 0"));

        let mut script = Script::from_json_str(SCRIPT).unwrap();
        script.events.push(ScriptEvent::Resize {
            viewport_height: 0.0,
        });
        let err = replay(&script).unwrap_err();
        assert!(matches!(err, ParallaxError::Validation(_)));
        assert!(err.to_string().contains("event 6"));
    }

    #[test]
    fn zero_size_container_replays_as_neutral() {
        let script = Script::from_json_str(
            r#"{"viewport_height":800,"container":{"left":0,"top":0,"width":0,"height":0},
                "events":[{"type":"scroll","top":-100},{"type":"frame"}]}"#,
        )
        .unwrap();
        let r = replay(&script).unwrap();
        assert_eq!(r.steps[1].transform.scale, 1.0);
    }

    #[test]
    fn missing_file_is_other_error() {
        let err = Script::from_path(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ParallaxError::Other(_)));
    }
}
