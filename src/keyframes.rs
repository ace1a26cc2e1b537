//! Depth keyframe tracks for 3D passes.
//!
//! During a flip or rotate the tile would clip through its neighbours at
//! the halfway point unless the whole tile simultaneously recedes along
//! the z axis. These tracks sample that recession as percent-keyed
//! translate-z keyframes; the renderer installs them once per pass and
//! runs the resulting animation alongside each tile's transition.
//!
//! Sample values never rise above zero: a track either holds a tile in
//! place or pushes it away from the viewer.

use std::f32::consts::{FRAC_PI_2, PI};

use crate::direction::Direction;
use crate::effect::EffectKind;
use crate::grid::Grid;
use crate::resolve::PassParams;
use crate::util::round_to;

/// One sample of a depth track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Position within the animation, 0 to 100.
    pub percent: f32,
    /// Depth translation at this position, in pixels (always <= 0).
    pub translate_z: f32,
}

/// A percent-keyed translate-z animation shared by every tile of a pass.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTrack {
    /// Samples in ascending percent order.
    pub frames: Vec<Keyframe>,
}

impl KeyframeTrack {
    /// Three-point pulse to a fixed depth: 0 at the ends, `-depth` at
    /// the midpoint. Used when an explicit travel depth is configured.
    #[must_use]
    pub fn depth_pulse(depth: f32) -> Self {
        let frames = [(0.0, 0.0), (50.0, 1.0), (100.0, 0.0)]
            .iter()
            .map(|&(percent, weight)| Keyframe {
                percent,
                translate_z: (0.0_f32).min(-weight * depth),
            })
            .collect();
        Self { frames }
    }

    /// Flip recession: a half sine over the animation, deep enough that
    /// a plane of size `axis_dim` clears its neighbours mid-turn.
    #[must_use]
    pub fn flip(axis_dim: f32) -> Self {
        let size = axis_dim / 2.0;
        let steps = 20_u32;
        let frames = (0..=steps)
            .map(|i| {
                let radian =
                    PI - PI * i as f32 / steps as f32;
                let sine = round_to(radian.sin(), 5);
                Keyframe {
                    percent: (i as f32 / steps as f32 * 100.0).round(),
                    translate_z: (0.0_f32).min(-sine * size),
                }
            })
            .collect();
        Self { frames }
    }

    /// Rotate recession: a cosine arc from 45 degrees down to 0 and back,
    /// matching the corner sweep of a cuboid turning on its edge.
    #[must_use]
    pub fn rotate(depth: f32) -> Self {
        let offset = depth / 2.0;
        let size = offset / (FRAC_PI_2 / 2.0).cos();
        let steps = 45_u32;
        let mut radian = FRAC_PI_2 / 2.0;
        let mut step = radian / (steps as f32 / 2.0);
        let mut frames = Vec::with_capacity(steps as usize + 1);
        for i in 0..=steps {
            let cosine = round_to(radian.cos(), 5);
            frames.push(Keyframe {
                percent: (i as f32 / steps as f32 * 100.0).round(),
                translate_z: (0.0_f32).min(offset - cosine * size),
            });
            radian -= step;
            if radian <= 0.0 {
                step = -step;
            }
        }
        Self { frames }
    }

    /// The track for a resolved pass, or `None` when the pass runs
    /// without 3D depth animation.
    ///
    /// A configured depth overrides the per-effect tracks; otherwise
    /// flip recedes by half its turning dimension and rotate by its
    /// corner sweep.
    #[must_use]
    pub fn for_pass(
        params: &PassParams,
        grid: &Grid,
        configured_depth: Option<f32>,
    ) -> Option<Self> {
        if !params.is_3d {
            return None;
        }
        if let Some(depth) = configured_depth {
            return Some(Self::depth_pulse(depth));
        }
        match params.effect {
            EffectKind::Flip => {
                let dim = if matches!(
                    params.direction,
                    Direction::Up | Direction::Down
                ) {
                    grid.tile_height()
                } else {
                    grid.tile_width()
                };
                Some(Self::flip(dim))
            }
            EffectKind::Rotate => Some(Self::rotate(params.depth)),
            _ => None,
        }
    }
}
