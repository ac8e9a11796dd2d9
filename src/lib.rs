//! Parallax is a small engine that turns scroll and pointer input into a bounded
//! transform for a background layer.
//!
//! # Pipeline overview
//!
//! 1. **Layout**: the host exposes container and viewport geometry through [`ScrollGeometry`].
//! 2. **Throttle**: scroll events coalesce into at most one layout read per frame ([`FrameThrottle`]).
//! 3. **Engine**: [`ParallaxEngine`] keeps a scroll scale and a hover scale and combines them
//!    according to [`AnimationMode`] into a [`TransformState`].
//! 4. **Render** (optional): [`TransformTween`] eases the displayed layer toward each new target.
//!
//! [`ParallaxDriver`] wires steps 1 to 3 together for hosts with a frame callback.
#![forbid(unsafe_code)]

pub mod config;
pub mod core;
pub mod driver;
pub mod ease;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod script;
pub mod throttle;
pub mod tween;

pub use config::{AnimationMode, EngineConfig};
pub use crate::core::{Point, PointerSample, Rect, ScrollSample, Size, Vec2};
pub use driver::{DriverStats, ParallaxDriver};
pub use ease::{Ease, TransitionSpec};
pub use engine::{ParallaxEngine, TransformState, normalize_pointer, scroll_progress};
pub use error::{ParallaxError, ParallaxResult};
pub use geometry::{LayoutSnapshot, ScrollGeometry};
pub use script::{ContainerBox, Replay, ReplayStep, Script, ScriptEvent, SimulatedLayout, replay};
pub use throttle::FrameThrottle;
pub use tween::{TransformTween, lerp_transform};
