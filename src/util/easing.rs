//! Easing curves for tile transitions.
//!
//! Curves are expressed as CSS timing functions: renderers consume
//! [`Easing::css_value`] verbatim, while non-CSS hosts and tests can
//! sample the same curve through [`Easing::evaluate`]. The named curves
//! mirror the classic jQuery easing set as cubic beziers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A transition timing curve.
///
/// Deserialization never fails on a curve *name*: unrecognized names
/// fall back to [`Easing::Ease`], matching the permissive handling of
/// hand-written config values.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// CSS `ease`; also the fallback for unknown curve names.
    #[default]
    Ease,
    /// CSS `ease-in`.
    EaseIn,
    /// CSS `ease-out`.
    EaseOut,
    /// CSS `ease-in-out`.
    EaseInOut,
    /// Quadratic ease-in.
    EaseInQuad,
    /// Quadratic ease-out.
    EaseOutQuad,
    /// Quadratic ease-in-out.
    EaseInOutQuad,
    /// Cubic ease-in.
    EaseInCubic,
    /// Cubic ease-out.
    EaseOutCubic,
    /// Cubic ease-in-out.
    EaseInOutCubic,
    /// Quartic ease-in.
    EaseInQuart,
    /// Quartic ease-out.
    EaseOutQuart,
    /// Quartic ease-in-out.
    EaseInOutQuart,
    /// Quintic ease-in.
    EaseInQuint,
    /// Quintic ease-out.
    EaseOutQuint,
    /// Quintic ease-in-out.
    EaseInOutQuint,
    /// Sinusoidal ease-in.
    EaseInSine,
    /// Sinusoidal ease-out.
    EaseOutSine,
    /// Sinusoidal ease-in-out.
    EaseInOutSine,
    /// Exponential ease-in.
    EaseInExpo,
    /// Exponential ease-out.
    EaseOutExpo,
    /// Exponential ease-in-out.
    EaseInOutExpo,
    /// Circular ease-in.
    EaseInCirc,
    /// Circular ease-out.
    EaseOutCirc,
    /// Circular ease-in-out.
    EaseInOutCirc,
    /// Overshooting ease-in.
    EaseInBack,
    /// Overshooting ease-out.
    EaseOutBack,
    /// Overshooting ease-in-out.
    EaseInOutBack,
    /// Custom cubic-bezier control points.
    CubicBezier {
        /// First control point x, in [0, 1].
        x1: f32,
        /// First control point y.
        y1: f32,
        /// Second control point x, in [0, 1].
        x2: f32,
        /// Second control point y.
        y2: f32,
    },
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Name(String),
            Tagged(Tagged),
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        enum Tagged {
            CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Name(name) => Ok(Self::from_name(&name)),
            Repr::Tagged(Tagged::CubicBezier { x1, y1, x2, y2 }) => {
                Ok(Self::CubicBezier { x1, y1, x2, y2 })
            }
        }
    }
}

impl Easing {
    /// Look up a curve by its config name. Empty and unknown names fall
    /// back to [`Easing::Ease`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "linear" => Self::Linear,
            "" | "ease" => Self::Ease,
            "easeIn" => Self::EaseIn,
            "easeOut" => Self::EaseOut,
            "easeInOut" => Self::EaseInOut,
            "easeInQuad" => Self::EaseInQuad,
            "easeOutQuad" => Self::EaseOutQuad,
            "easeInOutQuad" => Self::EaseInOutQuad,
            "easeInCubic" => Self::EaseInCubic,
            "easeOutCubic" => Self::EaseOutCubic,
            "easeInOutCubic" => Self::EaseInOutCubic,
            "easeInQuart" => Self::EaseInQuart,
            "easeOutQuart" => Self::EaseOutQuart,
            "easeInOutQuart" => Self::EaseInOutQuart,
            "easeInQuint" => Self::EaseInQuint,
            "easeOutQuint" => Self::EaseOutQuint,
            "easeInOutQuint" => Self::EaseInOutQuint,
            "easeInSine" => Self::EaseInSine,
            "easeOutSine" => Self::EaseOutSine,
            "easeInOutSine" => Self::EaseInOutSine,
            "easeInExpo" => Self::EaseInExpo,
            "easeOutExpo" => Self::EaseOutExpo,
            "easeInOutExpo" => Self::EaseInOutExpo,
            "easeInCirc" => Self::EaseInCirc,
            "easeOutCirc" => Self::EaseOutCirc,
            "easeInOutCirc" => Self::EaseInOutCirc,
            "easeInBack" => Self::EaseInBack,
            "easeOutBack" => Self::EaseOutBack,
            "easeInOutBack" => Self::EaseInOutBack,
            other => {
                log::debug!(
                    "unknown easing {other:?}, falling back to ease"
                );
                Self::Ease
            }
        }
    }

    /// Bezier control points for this curve; `None` for linear.
    #[must_use]
    pub const fn control_points(self) -> Option<(f32, f32, f32, f32)> {
        match self {
            Self::Linear => None,
            Self::Ease => Some((0.25, 0.1, 0.25, 1.0)),
            Self::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Self::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Self::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Self::EaseInQuad => Some((0.55, 0.085, 0.68, 0.53)),
            Self::EaseOutQuad => Some((0.25, 0.46, 0.45, 0.94)),
            Self::EaseInOutQuad => Some((0.455, 0.03, 0.515, 0.955)),
            Self::EaseInCubic => Some((0.55, 0.055, 0.675, 0.19)),
            Self::EaseOutCubic => Some((0.215, 0.61, 0.355, 1.0)),
            Self::EaseInOutCubic => Some((0.645, 0.045, 0.355, 1.0)),
            Self::EaseInQuart => Some((0.895, 0.03, 0.685, 0.22)),
            Self::EaseOutQuart => Some((0.165, 0.84, 0.44, 1.0)),
            Self::EaseInOutQuart => Some((0.77, 0.0, 0.175, 1.0)),
            Self::EaseInQuint => Some((0.755, 0.05, 0.855, 0.06)),
            Self::EaseOutQuint => Some((0.23, 1.0, 0.32, 1.0)),
            Self::EaseInOutQuint => Some((0.86, 0.0, 0.07, 1.0)),
            Self::EaseInSine => Some((0.47, 0.0, 0.745, 0.715)),
            Self::EaseOutSine => Some((0.39, 0.575, 0.565, 1.0)),
            Self::EaseInOutSine => Some((0.445, 0.05, 0.55, 0.95)),
            Self::EaseInExpo => Some((0.95, 0.05, 0.795, 0.035)),
            Self::EaseOutExpo => Some((0.19, 1.0, 0.22, 1.0)),
            Self::EaseInOutExpo => Some((1.0, 0.0, 0.0, 1.0)),
            Self::EaseInCirc => Some((0.6, 0.04, 0.98, 0.335)),
            Self::EaseOutCirc => Some((0.075, 0.82, 0.165, 1.0)),
            Self::EaseInOutCirc => Some((0.785, 0.135, 0.15, 0.86)),
            Self::EaseInBack => Some((0.6, -0.28, 0.735, 0.045)),
            Self::EaseOutBack => Some((0.175, 0.885, 0.32, 1.275)),
            Self::EaseInOutBack => Some((0.68, -0.55, 0.265, 1.55)),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                Some((x1, y1, x2, y2))
            }
        }
    }

    /// CSS timing-function value for this curve.
    #[must_use]
    pub fn css_value(self) -> String {
        match self {
            Self::Linear => "linear".into(),
            Self::Ease => "ease".into(),
            Self::EaseIn => "ease-in".into(),
            Self::EaseOut => "ease-out".into(),
            Self::EaseInOut => "ease-in-out".into(),
            other => match other.control_points() {
                Some((x1, y1, x2, y2)) => {
                    format!("cubic-bezier({x1},{y1},{x2},{y2})")
                }
                None => "linear".into(),
            },
        }
    }

    /// Sample the curve at progress `t` in [0, 1].
    ///
    /// Solves the bezier x-polynomial for the parameter via Newton
    /// iteration with a bisection fallback, then evaluates y. Linear
    /// curves short-circuit.
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let Some((x1, y1, x2, y2)) = self.control_points() else {
            return t;
        };

        let s = solve_bezier_x(t, x1, x2);
        bezier(s, y1, y2)
    }
}

/// One-dimensional cubic bezier with endpoints 0 and 1.
fn bezier(s: f32, c1: f32, c2: f32) -> f32 {
    let oms = 1.0 - s;
    3.0 * c1 * s * oms * oms + 3.0 * c2 * s * s * oms + s * s * s
}

fn bezier_dx(s: f32, c1: f32, c2: f32) -> f32 {
    let oms = 1.0 - s;
    3.0 * c1 * oms * (1.0 - 3.0 * s) + 3.0 * c2 * s * (2.0 - 3.0 * s)
        + 3.0 * s * s
}

/// Find `s` with `bezier(s, x1, x2) == x`.
fn solve_bezier_x(x: f32, x1: f32, x2: f32) -> f32 {
    // Newton-Raphson: converges in a few steps for well-behaved curves.
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < 1e-5 {
            return s;
        }
        let d = bezier_dx(s, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }

    // Bisection fallback for flat derivatives.
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    for _ in 0..32 {
        let mid = (lo + hi) / 2.0;
        if bezier(mid, x1, x2) < x {
            lo = mid;
        } else {
            hi = mid;
        }
        s = mid;
    }
    s
}
