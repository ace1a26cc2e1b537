//! Named transition effects.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// A named per-tile transition pattern.
///
/// `Random` is not an effect of its own: the sequencer substitutes a
/// concrete (effect, direction, order) preset compatible with the
/// current grid shape before a pass starts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// New slide slides in over the old one.
    Cover,
    /// Tiles scale up from nothing.
    Expand,
    /// Tiles cross-fade.
    #[default]
    Fade,
    /// 3D: tiles flip 180 degrees to their back face.
    Flip,
    /// Tiles fly in from outside the container.
    Move,
    /// New slide pushes the old one out of each tile.
    Push,
    /// 3D: tiles rotate 90 degrees around a cuboid edge.
    Rotate,
    /// Push with the direction pre-inverted; always auto-reverses.
    Slide,
    /// Old slide zooms and fades away (or the new one zooms in).
    Zoom,
    /// Pick a compatible preset at random.
    Random,
}

impl EffectKind {
    /// Whether the effect needs perspective transforms and cuboid tiles.
    #[must_use]
    pub const fn is_3d(self) -> bool {
        matches!(self, Self::Flip | Self::Rotate)
    }

    /// Whether peripheral slide content is hidden while the pass runs.
    /// These effects reveal the container behind the slides mid-flight.
    #[must_use]
    pub const fn hides_slides(self) -> bool {
        matches!(
            self,
            Self::Flip | Self::Push | Self::Rotate | Self::Slide | Self::Zoom
        )
    }

    /// Base directions a random per-tile direction is drawn from.
    /// Rotation is restricted to the vertical pair; the horizontal
    /// cuboid edges read poorly on wide tiles.
    #[must_use]
    pub const fn random_directions(self) -> &'static [Direction] {
        match self {
            Self::Rotate => &[Direction::Up, Direction::Down],
            _ => &Direction::BASE,
        }
    }

    /// Whether the per-tile motion depends on a direction at all.
    /// Fade, zoom and expand resolve identically for every direction.
    #[must_use]
    pub const fn is_directional(self) -> bool {
        !matches!(self, Self::Fade | Self::Zoom | Self::Expand)
    }
}
