use crate::error::{ParallaxError, ParallaxResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing curve.
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Ease {
    /// Decelerating curve used for parallax transitions.
    pub const PARALLAX: Self = Self::CubicBezier {
        x1: 0.22,
        y1: 0.55,
        x2: 0.25,
        y2: 0.95,
    };

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let u = solve_bezier_param(t, x1.clamp(0.0, 1.0), x2.clamp(0.0, 1.0));
                bezier(u, y1, y2)
            }
        }
    }
}

// One coordinate of a cubic bezier anchored at 0 and 1.
fn bezier(u: f64, p1: f64, p2: f64) -> f64 {
    let v = 1.0 - u;
    3.0 * v * v * u * p1 + 3.0 * v * u * u * p2 + u * u * u
}

fn bezier_slope(u: f64, p1: f64, p2: f64) -> f64 {
    let v = 1.0 - u;
    3.0 * v * v * p1 + 6.0 * v * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}

// Finds u with bezier_x(u) == x. Control x values in [0, 1] keep bezier_x monotonic.
fn solve_bezier_param(x: f64, x1: f64, x2: f64) -> f64 {
    const EPS: f64 = 1e-7;

    let mut u = x;
    for _ in 0..8 {
        let err = bezier(u, x1, x2) - x;
        if err.abs() < EPS {
            return u;
        }
        let slope = bezier_slope(u, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        u = (u - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    u = x;
    while hi - lo > EPS {
        let val = bezier(u, x1, x2);
        if (val - x).abs() < EPS {
            break;
        }
        if val < x {
            lo = u;
        } else {
            hi = u;
        }
        u = 0.5 * (lo + hi);
    }
    u
}

/// How a renderer should move from one transform target to the next.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionSpec {
    pub duration_secs: f64,
    pub ease: Ease,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            duration_secs: 0.3,
            ease: Ease::PARALLAX,
        }
    }
}

impl TransitionSpec {
    pub fn validate(&self) -> ParallaxResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(ParallaxError::validation(
                "transition duration must be finite and >= 0",
            ));
        }
        if let Ease::CubicBezier { x1, y1, x2, y2 } = self.ease {
            if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
                return Err(ParallaxError::validation(
                    "cubic bezier control points must be finite",
                ));
            }
        }
        Ok(())
    }

    /// Eased progress `elapsed_secs` into the transition.
    pub fn progress(&self, elapsed_secs: f64) -> f64 {
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        self.ease.apply(elapsed_secs / self.duration_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::PARALLAX,
    ];

    #[test]
    fn endpoints_are_stable() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn monotonic_spot_check() {
        for ease in ALL {
            let a = ease.apply(0.25);
            let b = ease.apply(0.5);
            let c = ease.apply(0.75);
            assert!(a < b);
            assert!(b < c);
        }
    }

    #[test]
    fn diagonal_bezier_is_linear() {
        let ease = Ease::CubicBezier {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
        };
        for i in 1..10 {
            let t = f64::from(i) / 10.0;
            assert!((ease.apply(t) - t).abs() < 1e-5, "{t}");
        }
    }

    #[test]
    fn parallax_curve_decelerates() {
        let half = Ease::PARALLAX.apply(0.5);
        assert!(half > 0.5, "{half}");
        assert!(Ease::PARALLAX.apply(0.9) > 0.95);
    }

    #[test]
    fn transition_defaults_and_validation() {
        let spec = TransitionSpec::default();
        spec.validate().unwrap();
        assert_eq!(spec.duration_secs, 0.3);
        assert_eq!(spec.progress(0.3), 1.0);
        assert_eq!(spec.progress(10.0), 1.0);

        let snap = TransitionSpec {
            duration_secs: 0.0,
            ease: Ease::Linear,
        };
        assert_eq!(snap.progress(0.0), 1.0);

        let bad = TransitionSpec {
            duration_secs: -1.0,
            ease: Ease::Linear,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_control_points() {
        let spec = TransitionSpec {
            duration_secs: 0.3,
            ease: Ease::CubicBezier {
                x1: f64::NAN,
                y1: 0.5,
                x2: 0.5,
                y2: f64::INFINITY,
            },
        };
        let err = spec.validate().unwrap_err();
        assert!(err.to_string().contains("control points must be finite"));
    }
}
