//! Effect parameter resolution: mapping a named effect plus direction
//! and alternation flags to per-tile from/to style pairs and face roles.
//!
//! Dispatch is an exhaustive match over `(effect, direction)` - no
//! reflective method lookup. A direction an effect cannot express falls
//! back to the pass's base direction, then to `Right`.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::direction::{Axis, Direction};
use crate::effect::EffectKind;
use crate::grid::Grid;
use crate::options::TransitionOptions;
use crate::order::TileOrder;
use crate::presets;
use crate::tile::Face;

/// A typed set of style properties applied to a tile node. Translations
/// are pixels, rotations degrees; opacity is kept within [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TileStyle {
    /// Horizontal translation.
    pub translate_x: Option<f32>,
    /// Vertical translation.
    pub translate_y: Option<f32>,
    /// Depth translation (3D passes).
    pub translate_z: Option<f32>,
    /// Rotation around an axis, in degrees.
    pub rotate: Option<(Axis, f32)>,
    /// Uniform scale factor.
    pub scale: Option<f32>,
    /// Opacity in [0, 1].
    pub opacity: Option<f32>,
}

impl TileStyle {
    /// A translation along one axis.
    #[must_use]
    pub const fn translate(axis: Axis, px: f32) -> Self {
        let mut style = Self {
            translate_x: None,
            translate_y: None,
            translate_z: None,
            rotate: None,
            scale: None,
            opacity: None,
        };
        match axis {
            Axis::X => style.translate_x = Some(px),
            Axis::Y => style.translate_y = Some(px),
        }
        style
    }
}

/// Which node of the tile a transition animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTarget {
    /// The tile root element.
    Tile,
    /// The inner shape (plane or cuboid).
    Shape,
    /// The back face layer only (zoom).
    BackFace,
}

/// Face role assignment for a tile's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRoles {
    /// Face showing the incoming slide.
    pub active: Face,
    /// Face showing the outgoing slide, when the effect composites one.
    pub prev: Option<Face>,
    /// Previous side present but invisible (cover).
    pub prev_hidden: bool,
    /// Back layer removed entirely (move, fade, expand).
    pub back_hidden: bool,
    /// Back face pre-spun 180 degrees (X-axis flips).
    pub back_inverted: bool,
}

impl FaceRoles {
    const fn front_only() -> Self {
        Self {
            active: Face::Front,
            prev: None,
            prev_hidden: false,
            back_hidden: true,
            back_inverted: false,
        }
    }
}

/// A tile's fully resolved animation: starting styles, target styles,
/// the node they apply to, and face roles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileMotion {
    /// Styles staged before the reveal.
    pub from: TileStyle,
    /// Styles transitioned to during the reveal.
    pub to: TileStyle,
    /// Node the from/to styles apply to.
    pub target: StyleTarget,
    /// Face role assignment.
    pub roles: FaceRoles,
    /// Axis along which the shape is extended to hold both sides
    /// (push-family effects).
    pub extend_axis: Option<Axis>,
}

/// Resolved pass-level parameters: the concrete effect after random
/// preset substitution and capability fallback, adjusted direction and
/// order, and derived flags.
#[derive(Debug, Clone, PartialEq)]
pub struct PassParams {
    /// Concrete effect (never `Random`).
    pub effect: EffectKind,
    /// Base direction after backward/slide inversion.
    pub direction: Direction,
    /// Reveal order after backward inversion.
    pub order: TileOrder,
    /// Split tiles into two opposite direction groups by index parity.
    pub alternate: bool,
    /// Whether the pass runs with cuboid tiles and perspective.
    pub is_3d: bool,
    /// Whether the canonical order sequence is flipped end-to-end. Seeds
    /// from the order's own reverse flag; the move effect toggles it.
    pub is_reverse: bool,
    /// Whether peripheral slide content is hidden during the pass.
    pub hide_slides: bool,
    /// Per-tile cuboid depth in pixels (0 for 2D).
    pub depth: f32,
}

impl PassParams {
    /// Resolve pass parameters from per-slide options.
    ///
    /// Applies, in order: random preset substitution, the 3D capability
    /// fallback (flip/rotate downgrade to push when `supports_3d` is
    /// false), backward auto-reversal of direction and order, the slide
    /// effect's direction pre-inversion, and the move effect's order
    /// reverse toggle.
    pub fn new<R: Rng + ?Sized>(
        options: &TransitionOptions,
        grid: &Grid,
        backward: bool,
        supports_3d: bool,
        rng: &mut R,
    ) -> Self {
        let mut effect = options.effect;
        let mut direction = options.direction;
        let mut order = options.order;

        if effect == EffectKind::Random {
            let preset = presets::random_preset(grid.kind(), rng);
            effect = preset.effect;
            direction = preset.direction;
            order = preset.order;
            log::debug!(
                "random preset for {:?}: {effect:?}/{direction:?}/{order:?}",
                grid.kind()
            );
        }

        let mut is_3d = effect.is_3d();
        if is_3d && !supports_3d {
            log::debug!("3D unsupported, downgrading {effect:?} to push");
            effect = EffectKind::Push;
            is_3d = false;
        }

        // Out only means something to zoom.
        if effect.is_directional() && direction == Direction::Out {
            direction = Direction::Right;
        }

        let auto_reverse =
            options.auto_reverse || effect == EffectKind::Slide;
        if backward && auto_reverse {
            direction = direction.opposite();
            order = order.opposite();
        }
        if effect == EffectKind::Slide {
            direction = direction.opposite();
        }

        let mut is_reverse = order.is_reverse();
        if effect == EffectKind::Move {
            is_reverse = !is_reverse;
        }

        let depth = match effect {
            EffectKind::Rotate => {
                if matches!(direction, Direction::Left | Direction::Right)
                {
                    grid.tile_width()
                } else {
                    grid.tile_height()
                }
            }
            EffectKind::Flip => options.shape_depth.max(0.0),
            _ => 0.0,
        };

        Self {
            effect,
            direction,
            order,
            alternate: options.alternate,
            is_3d,
            is_reverse,
            hide_slides: effect.hides_slides(),
            depth,
        }
    }
}

/// Resolves per-tile motions for a pass.
#[derive(Debug, Clone, Copy)]
pub struct MotionResolver<'a> {
    params: &'a PassParams,
    grid: &'a Grid,
}

impl<'a> MotionResolver<'a> {
    /// Bind a resolver to pass parameters and grid geometry.
    #[must_use]
    pub const fn new(params: &'a PassParams, grid: &'a Grid) -> Self {
        Self { params, grid }
    }

    /// Resolve one motion per tile, in tile-index order.
    ///
    /// Directionless effects resolve uniformly. For directional ones,
    /// `Random` assigns each tile an independent uniform pick from the
    /// effect's base set, and alternate mode gives even-index tiles the
    /// base direction and odd-index tiles its opposite. Move ignores
    /// alternation; its per-tile travel already varies by position.
    #[must_use]
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Vec<TileMotion> {
        let len = self.grid.len();
        let params = self.params;

        if !params.effect.is_directional() {
            return vec![self.motion_for(params.direction); len];
        }

        if params.direction == Direction::Random {
            let choices = params.effect.random_directions();
            return (0..len)
                .map(|_| {
                    let dir = choices
                        .choose(rng)
                        .copied()
                        .unwrap_or(Direction::Right);
                    self.motion_for(dir)
                })
                .collect();
        }

        if params.alternate && params.effect != EffectKind::Move {
            return (0..len)
                .map(|i| {
                    if i % 2 == 0 {
                        self.motion_for(params.direction)
                    } else {
                        self.motion_for(params.direction.opposite())
                    }
                })
                .collect();
        }

        vec![self.motion_for(params.direction); len]
    }

    /// Motion for a single tile moving in `dir`. The dispatch table of
    /// the engine: effects that cannot express `dir` fall back to the
    /// pass direction, then `Right`.
    #[must_use]
    pub fn motion_for(&self, dir: Direction) -> TileMotion {
        let dir = self.normalize(dir);
        match self.params.effect {
            EffectKind::Push | EffectKind::Slide => self.push(dir, true),
            EffectKind::Cover => self.push(dir, false),
            EffectKind::Move => self.fly_in(dir),
            EffectKind::Rotate => self.rotate(dir),
            EffectKind::Flip => self.flip(dir),
            EffectKind::Zoom => self.zoom(),
            // Random never survives preset substitution; degrade to the
            // simplest motion rather than panic.
            EffectKind::Fade | EffectKind::Expand | EffectKind::Random => {
                if self.params.effect == EffectKind::Expand {
                    Self::expand()
                } else {
                    Self::fade()
                }
            }
        }
    }

    fn normalize(&self, dir: Direction) -> Direction {
        if dir.axis().is_some() {
            return dir;
        }
        if self.params.direction.axis().is_some() {
            return self.params.direction;
        }
        Direction::Right
    }

    /// Push-family motion: the double-size shape slides one tile length
    /// along its axis. Forward directions enter with the front face
    /// active; reverse directions swap from/to and the face roles.
    fn push(&self, dir: Direction, prev_visible: bool) -> TileMotion {
        let axis = dir.axis().unwrap_or(Axis::X);
        let dim = match axis {
            Axis::X => self.grid.tile_width(),
            Axis::Y => self.grid.tile_height(),
        };
        let offset = TileStyle::translate(axis, -dim);
        let zero = TileStyle::translate(axis, 0.0);

        let (from, to, active, prev) = if dir.is_forward() {
            (offset, zero, Face::Front, Face::Back)
        } else {
            (zero, offset, Face::Back, Face::Front)
        };

        TileMotion {
            from,
            to,
            target: StyleTarget::Shape,
            roles: FaceRoles {
                active,
                prev: Some(prev),
                prev_hidden: !prev_visible,
                back_hidden: false,
                back_inverted: false,
            },
            extend_axis: Some(axis),
        }
    }

    /// Move motion: the whole tile flies in from outside the container.
    fn fly_in(&self, dir: Direction) -> TileMotion {
        let (axis, dist) = match dir {
            Direction::Up => (Axis::Y, self.grid.container_height()),
            Direction::Down => (Axis::Y, -self.grid.container_height()),
            Direction::Left => (Axis::X, self.grid.container_width()),
            _ => (Axis::X, -self.grid.container_width()),
        };

        TileMotion {
            from: TileStyle::translate(axis, dist),
            to: TileStyle::translate(axis, 0.0),
            target: StyleTarget::Tile,
            roles: FaceRoles::front_only(),
            extend_axis: None,
        }
    }

    /// Rotate motion: the cuboid turns 90 degrees around an edge,
    /// bringing a side face to the front.
    fn rotate(&self, dir: Direction) -> TileMotion {
        let axis = match dir {
            Direction::Up | Direction::Down => Axis::X,
            _ => Axis::Y,
        };
        let positive =
            matches!(dir, Direction::Up | Direction::Right);
        let active = match (axis, positive) {
            (Axis::X, true) => Face::Bottom,
            (Axis::X, false) => Face::Top,
            (Axis::Y, true) => Face::Left,
            (Axis::Y, false) => Face::Right,
        };
        let tz = -self.params.depth / 2.0;
        let angle = if positive { 90.0 } else { -90.0 };

        TileMotion {
            from: TileStyle {
                translate_z: Some(tz),
                rotate: Some((axis, 0.0)),
                ..TileStyle::default()
            },
            to: TileStyle {
                translate_z: Some(tz),
                rotate: Some((axis, angle)),
                ..TileStyle::default()
            },
            target: StyleTarget::Shape,
            roles: FaceRoles {
                active,
                prev: Some(Face::Front),
                prev_hidden: false,
                back_hidden: false,
                back_inverted: false,
            },
            extend_axis: None,
        }
    }

    /// Flip motion: the plane turns 180 degrees to its back face.
    fn flip(&self, dir: Direction) -> TileMotion {
        let axis = match dir {
            Direction::Up | Direction::Down => Axis::X,
            _ => Axis::Y,
        };
        let positive =
            matches!(dir, Direction::Up | Direction::Right);
        let tz = -self.params.depth / 2.0;
        let angle = if positive { 180.0 } else { -180.0 };

        TileMotion {
            from: TileStyle {
                translate_z: Some(tz),
                rotate: Some((axis, 0.0)),
                ..TileStyle::default()
            },
            to: TileStyle {
                translate_z: Some(tz),
                rotate: Some((axis, angle)),
                ..TileStyle::default()
            },
            target: StyleTarget::Shape,
            roles: FaceRoles {
                active: Face::Back,
                prev: Some(Face::Front),
                prev_hidden: false,
                back_hidden: false,
                back_inverted: axis == Axis::X,
            },
            extend_axis: None,
        }
    }

    fn fade() -> TileMotion {
        TileMotion {
            from: TileStyle {
                opacity: Some(0.0),
                ..TileStyle::default()
            },
            to: TileStyle {
                opacity: Some(1.0),
                ..TileStyle::default()
            },
            target: StyleTarget::Shape,
            roles: FaceRoles::front_only(),
            extend_axis: None,
        }
    }

    /// Zoom animates the previous-side layer over a static new slide;
    /// direction `Out` swaps which side grows and which holds still.
    fn zoom(&self) -> TileMotion {
        let still = TileStyle {
            opacity: Some(1.0),
            scale: Some(1.0),
            ..TileStyle::default()
        };
        let grown = TileStyle {
            opacity: Some(0.0),
            scale: Some(2.0),
            ..TileStyle::default()
        };

        let (from, to, active, prev) =
            if self.params.direction == Direction::Out {
                (grown, still, Face::Back, Face::Front)
            } else {
                (still, grown, Face::Front, Face::Back)
            };

        TileMotion {
            from,
            to,
            target: StyleTarget::BackFace,
            roles: FaceRoles {
                active,
                prev: Some(prev),
                prev_hidden: false,
                back_hidden: false,
                back_inverted: false,
            },
            extend_axis: None,
        }
    }

    fn expand() -> TileMotion {
        TileMotion {
            from: TileStyle {
                scale: Some(0.0),
                ..TileStyle::default()
            },
            to: TileStyle {
                scale: Some(1.0),
                ..TileStyle::default()
            },
            target: StyleTarget::Shape,
            roles: FaceRoles::front_only(),
            extend_axis: None,
        }
    }
}
