//! Tile movement directions and axes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Screen axis a tile's content moves or rotates along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

/// The geometric direction a tile's content moves or rotates during its
/// own transition.
///
/// `Out` only applies to the zoom effect; `Random` assigns each tile an
/// independent uniform pick from the effect's base directions. Anything
/// a config leaves unspecified resolves to [`Direction::Right`].
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
pub enum Direction {
    /// Content moves toward the top edge.
    Up,
    /// Content moves toward the bottom edge.
    Down,
    /// Content moves toward the left edge.
    Left,
    /// Content moves toward the right edge.
    #[default]
    Right,
    /// Zoom-specific: the previous slide shrinks away instead of the new
    /// one growing in.
    Out,
    /// Each tile independently picks one of the effect's base directions.
    Random,
}

impl Direction {
    /// The four concrete movement directions.
    pub const BASE: [Self; 4] =
        [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Logical inverse. `Out` and `Random` map to themselves, so the
    /// mapping is an involution over the whole enum.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Out | Self::Random => self,
        }
    }

    /// Axis of travel for the four base directions; `None` otherwise.
    #[must_use]
    pub const fn axis(self) -> Option<Axis> {
        match self {
            Self::Left | Self::Right => Some(Axis::X),
            Self::Up | Self::Down => Some(Axis::Y),
            Self::Out | Self::Random => None,
        }
    }

    /// Whether the direction points toward the positive end of its axis
    /// (down or right). Drives from/to and face-role swapping in the
    /// resolver.
    #[must_use]
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Down | Self::Right)
    }
}
