//! Compatibility presets for random effect selection.
//!
//! Not every (effect, direction, order) triple reads well on every grid
//! shape: a spiral order is meaningless on a single row, and a move
//! effect only looks coherent when its direction matches the reveal
//! order. These tables enumerate the combinations that do work, per
//! grid shape; when a pass requests the `random` effect, one entry is
//! drawn uniformly from the matching table.

use std::sync::OnceLock;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::direction::Direction;
use crate::effect::EffectKind;
use crate::grid::GridKind;
use crate::order::TileOrder;

/// A concrete (effect, direction, order) combination registered for a
/// grid shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Concrete effect (never `Random`).
    pub effect: EffectKind,
    /// Tile movement direction.
    pub direction: Direction,
    /// Tile reveal order.
    pub order: TileOrder,
}

const X_DIRS: [Direction; 2] = [Direction::Left, Direction::Right];
const Y_DIRS: [Direction; 2] = [Direction::Up, Direction::Down];
const X_ORDERS: [TileOrder; 2] = [TileOrder::Left, TileOrder::Right];
const Y_ORDERS: [TileOrder; 2] = [TileOrder::Up, TileOrder::Down];
/// Orders that only make sense on a full 2D grid.
const GRID_ORDERS: [TileOrder; 10] = [
    TileOrder::DownLeft,
    TileOrder::UpRight,
    TileOrder::DownRight,
    TileOrder::UpLeft,
    TileOrder::SpiralIn,
    TileOrder::SpiralOut,
    TileOrder::ZigZagDown,
    TileOrder::ZigZagUp,
    TileOrder::ZigZagRight,
    TileOrder::ZigZagLeft,
];

/// Cross product of effects, directions and orders.
fn add_presets(
    presets: &mut Vec<Preset>,
    effects: &[EffectKind],
    directions: &[Direction],
    orders: &[TileOrder],
) {
    for &effect in effects {
        for &direction in directions {
            for &order in orders {
                presets.push(Preset {
                    effect,
                    direction,
                    order,
                });
            }
        }
    }
}

fn build_none() -> Vec<Preset> {
    let mut presets = Vec::new();
    add_presets(
        &mut presets,
        &[
            EffectKind::Cover,
            EffectKind::Flip,
            EffectKind::Push,
            EffectKind::Rotate,
        ],
        &[
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ],
        &[TileOrder::Right],
    );
    add_presets(
        &mut presets,
        &[EffectKind::Fade, EffectKind::Zoom],
        &[Direction::Right],
        &[TileOrder::Right],
    );
    presets
}

fn build_column() -> Vec<Preset> {
    let mut presets = Vec::new();
    add_presets(
        &mut presets,
        &[EffectKind::Fade, EffectKind::Zoom],
        &[Direction::Right],
        &X_ORDERS,
    );
    add_presets(
        &mut presets,
        &[EffectKind::Push, EffectKind::Rotate],
        &Y_DIRS,
        &X_ORDERS,
    );
    // Cover, flip and move only read coherently when the tile direction
    // matches the column sweep.
    for (direction, order) in X_DIRS.iter().zip(X_ORDERS.iter()) {
        add_presets(
            &mut presets,
            &[EffectKind::Cover, EffectKind::Flip, EffectKind::Move],
            &[*direction],
            &[*order],
        );
    }
    presets
}

fn build_row() -> Vec<Preset> {
    let mut presets = Vec::new();
    add_presets(
        &mut presets,
        &[EffectKind::Fade, EffectKind::Zoom],
        &[Direction::Right],
        &Y_ORDERS,
    );
    add_presets(
        &mut presets,
        &[EffectKind::Push, EffectKind::Rotate],
        &X_DIRS,
        &Y_ORDERS,
    );
    for (direction, order) in Y_DIRS.iter().zip(Y_ORDERS.iter()) {
        add_presets(
            &mut presets,
            &[EffectKind::Cover, EffectKind::Flip, EffectKind::Move],
            &[*direction],
            &[*order],
        );
    }
    presets
}

fn build_grid() -> Vec<Preset> {
    let mut presets = Vec::new();
    add_presets(
        &mut presets,
        &[EffectKind::Expand, EffectKind::Fade, EffectKind::Zoom],
        &[Direction::Right],
        &GRID_ORDERS,
    );
    add_presets(
        &mut presets,
        &[
            EffectKind::Cover,
            EffectKind::Flip,
            EffectKind::Move,
            EffectKind::Push,
        ],
        &[Direction::Random],
        &GRID_ORDERS,
    );
    presets
}

/// All presets registered for a grid shape.
#[must_use]
pub fn presets_for(kind: GridKind) -> &'static [Preset] {
    static TABLES: OnceLock<[Vec<Preset>; 4]> = OnceLock::new();
    let tables = TABLES.get_or_init(|| {
        [build_none(), build_column(), build_row(), build_grid()]
    });
    match kind {
        GridKind::None => &tables[0],
        GridKind::Column => &tables[1],
        GridKind::Row => &tables[2],
        GridKind::Grid => &tables[3],
    }
}

/// Draw a uniform random preset for a grid shape.
#[must_use]
pub fn random_preset<R: Rng + ?Sized>(
    kind: GridKind,
    rng: &mut R,
) -> Preset {
    let table = presets_for(kind);
    // Tables are statically non-empty; the fallback is unreachable.
    table.choose(rng).copied().unwrap_or(Preset {
        effect: EffectKind::Fade,
        direction: Direction::Right,
        order: TileOrder::Right,
    })
}
