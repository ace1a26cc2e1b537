//! Tile traversal orders: the sequence in which tiles are revealed.
//!
//! Every order except [`TileOrder::Random`] is generated canonically and
//! then reversed when the order belongs to the "reverse" half of the
//! opposite table (up is the reverse of down, `SpiralOut` of `SpiralIn`,
//! and so on). All sequences are permutations of `0..rows*columns`.

use rand::seq::SliceRandom;
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// A tile reveal order over an R x C grid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TileOrder {
    /// Row-major, last row first.
    Up,
    /// Row-major.
    Down,
    /// Column wave, last column first.
    Left,
    /// Column wave (outer loop over columns).
    #[default]
    Right,
    /// Anti-diagonal wave toward the top-left corner.
    UpLeft,
    /// Anti-diagonal wave toward the top-right corner.
    UpRight,
    /// Anti-diagonal wave toward the bottom-left corner.
    DownLeft,
    /// Anti-diagonal wave toward the bottom-right corner.
    DownRight,
    /// Layer-peeling spiral from the outside in.
    SpiralIn,
    /// Layer-peeling spiral from the center out.
    SpiralOut,
    /// Boustrophedon over columns within rows, bottom row first.
    ZigZagUp,
    /// Boustrophedon over columns within rows.
    ZigZagDown,
    /// Boustrophedon over rows within columns, last column first.
    ZigZagLeft,
    /// Boustrophedon over rows within columns.
    ZigZagRight,
    /// Fisher-Yates shuffle; a fresh uniform permutation per pass.
    Random,
}

impl TileOrder {
    /// Every order, `Random` included.
    pub const ALL: [Self; 15] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
        Self::DownRight,
        Self::SpiralIn,
        Self::SpiralOut,
        Self::ZigZagUp,
        Self::ZigZagDown,
        Self::ZigZagLeft,
        Self::ZigZagRight,
        Self::Random,
    ];

    /// Logical inverse of an order. `Random` maps to itself, making the
    /// mapping an involution over the whole enum.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::UpLeft => Self::DownRight,
            Self::DownRight => Self::UpLeft,
            Self::UpRight => Self::DownLeft,
            Self::DownLeft => Self::UpRight,
            Self::SpiralIn => Self::SpiralOut,
            Self::SpiralOut => Self::SpiralIn,
            Self::ZigZagUp => Self::ZigZagDown,
            Self::ZigZagDown => Self::ZigZagUp,
            Self::ZigZagLeft => Self::ZigZagRight,
            Self::ZigZagRight => Self::ZigZagLeft,
            Self::Random => Self::Random,
        }
    }

    /// Whether this order is the reversed member of its opposite pair.
    /// Canonical sequences are flipped end-to-end for these.
    #[must_use]
    pub const fn is_reverse(self) -> bool {
        matches!(
            self,
            Self::Up
                | Self::Left
                | Self::UpRight
                | Self::UpLeft
                | Self::SpiralOut
                | Self::ZigZagUp
                | Self::ZigZagLeft
        )
    }

    /// Ordered tile indices for a pass over `grid`.
    ///
    /// Returns a permutation of `0..grid.len()`. The reverse flag
    /// implied by [`is_reverse`](Self::is_reverse) is already applied;
    /// `rng` is only consulted for [`TileOrder::Random`].
    #[must_use]
    pub fn sequence<R: Rng + ?Sized>(
        self,
        grid: &Grid,
        rng: &mut R,
    ) -> Vec<usize> {
        let mut seq = match self {
            Self::Up | Self::Down | Self::Left | Self::Right => {
                directional(self, grid)
            }
            Self::UpLeft
            | Self::UpRight
            | Self::DownLeft
            | Self::DownRight => diagonal(self, grid),
            Self::SpiralIn | Self::SpiralOut => spiral(grid),
            Self::ZigZagUp
            | Self::ZigZagDown
            | Self::ZigZagLeft
            | Self::ZigZagRight => zig_zag(self, grid),
            Self::Random => {
                let mut seq: Vec<usize> = (0..grid.len()).collect();
                seq.shuffle(rng);
                return seq;
            }
        };

        if self.is_reverse() {
            seq.reverse();
        }
        seq
    }
}

/// Row-major for up/down; column-major wave for left/right.
fn directional(order: TileOrder, grid: &Grid) -> Vec<usize> {
    if matches!(order, TileOrder::Left | TileOrder::Right) {
        let mut seq = Vec::with_capacity(grid.len());
        for col in 0..grid.columns() {
            for row in 0..grid.rows() {
                seq.push(grid.index(row, col));
            }
        }
        seq
    } else {
        (0..grid.len()).collect()
    }
}

/// Anti-diagonal traversal. Within each diagonal `d = row + col`, rows
/// run from `min(rows - 1, d)` down to 0; the matching column is either
/// `d - row` or its horizontal mirror for the "right-leaning" variants,
/// breaking out as soon as the column leaves the grid.
fn diagonal(order: TileOrder, grid: &Grid) -> Vec<usize> {
    let rows = grid.rows() as i64;
    let columns = grid.columns() as i64;
    let flip =
        matches!(order, TileOrder::DownLeft | TileOrder::UpRight);
    let mut seq = Vec::with_capacity(grid.len());

    for d in 0..(rows - 1) + (columns - 1) + 1 {
        let mut row = rows.min(d + 1) - 1;
        while row >= 0 {
            let col = if flip {
                let col = (columns - 1) - (d - row);
                if col < 0 {
                    break;
                }
                col
            } else {
                let col = d - row;
                if col >= columns {
                    break;
                }
                col
            };
            seq.push(grid.index(row as u32, col as u32));
            row -= 1;
        }
    }

    seq
}

/// Boustrophedon traversal, flipping walk direction at every edge.
fn zig_zag(order: TileOrder, grid: &Grid) -> Vec<usize> {
    let rows = grid.rows() as i64;
    let columns = grid.columns() as i64;
    let mut row: i64 = 0;
    let mut col: i64 = 0;
    let mut fwd = true;
    let mut seq = Vec::with_capacity(grid.len());

    if matches!(order, TileOrder::ZigZagUp | TileOrder::ZigZagDown) {
        for _ in 0..grid.len() {
            seq.push(grid.index(row as u32, col as u32));
            col += if fwd { 1 } else { -1 };
            if col == columns || col < 0 {
                fwd = !fwd;
                col = if fwd { 0 } else { columns - 1 };
                row += 1;
            }
        }
    } else {
        for _ in 0..grid.len() {
            seq.push(grid.index(row as u32, col as u32));
            row += if fwd { 1 } else { -1 };
            if row == rows || row < 0 {
                fwd = !fwd;
                row = if fwd { 0 } else { rows - 1 };
                col += 1;
            }
        }
    }

    seq
}

/// Classic layer-peeling spiral from (0, 0), cycling right, down, left,
/// up and shrinking the active sub-rectangle after each side.
fn spiral(grid: &Grid) -> Vec<usize> {
    let mut row: i64 = 0;
    let mut col: i64 = 0;
    let mut row_count = grid.rows() as i64 - 1;
    let mut col_count = grid.columns() as i64 - 1;
    let mut dir = 0_u8;
    let mut limit = col_count;
    let mut seq = Vec::with_capacity(grid.len());

    while row_count >= 0 && col_count >= 0 {
        let mut count = 0;
        loop {
            seq.push(grid.index(row as u32, col as u32));
            count += 1;
            if count > limit {
                break;
            }
            match dir {
                0 => col += 1,
                1 => row += 1,
                2 => col -= 1,
                _ => row -= 1,
            }
        }
        match dir {
            0 => {
                dir = 1;
                row_count -= 1;
                limit = row_count;
                row += 1;
            }
            1 => {
                dir = 2;
                col_count -= 1;
                limit = col_count;
                col -= 1;
            }
            2 => {
                dir = 3;
                row_count -= 1;
                limit = row_count;
                row -= 1;
            }
            _ => {
                dir = 0;
                col_count -= 1;
                limit = col_count;
                col += 1;
            }
        }
    }

    seq
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn seq(order: TileOrder, rows: u32, columns: u32) -> Vec<usize> {
        let grid = Grid::new(rows, columns, 100.0, 100.0);
        let mut rng = StdRng::seed_from_u64(7);
        order.sequence(&grid, &mut rng)
    }

    fn assert_permutation(seq: &[usize], len: usize) {
        assert_eq!(seq.len(), len);
        let mut seen = vec![false; len];
        for &idx in seq {
            assert!(idx < len, "index {idx} out of range");
            assert!(!seen[idx], "index {idx} repeated");
            seen[idx] = true;
        }
    }

    #[test]
    fn test_every_order_yields_a_permutation() {
        for order in TileOrder::ALL {
            for (rows, columns) in
                [(1, 1), (1, 5), (5, 1), (2, 3), (3, 3), (4, 7), (6, 2)]
            {
                let seq = seq(order, rows, columns);
                assert_permutation(&seq, (rows * columns) as usize);
            }
        }
    }

    #[test]
    fn test_opposite_is_involution() {
        for order in TileOrder::ALL {
            assert_eq!(order.opposite().opposite(), order);
        }
    }

    #[test]
    fn test_opposite_pairs_are_mutual_reverses() {
        for order in TileOrder::ALL {
            if order == TileOrder::Random {
                continue;
            }
            let forward = seq(order, 3, 4);
            let mut backward = seq(order.opposite(), 3, 4);
            backward.reverse();
            assert_eq!(forward, backward, "{order:?} vs its opposite");
        }
    }

    #[test]
    fn test_right_is_a_column_wave() {
        // 2x3: columns swept left to right, rows within each column.
        assert_eq!(seq(TileOrder::Right, 2, 3), vec![0, 3, 1, 4, 2, 5]);
        assert_eq!(seq(TileOrder::Down, 2, 3), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_diagonal_down_right_endpoints() {
        let seq = seq(TileOrder::DownRight, 3, 3);
        assert_eq!(seq.len(), 9);
        assert_eq!(seq[0], 0, "starts at (0,0)");
        assert_eq!(seq[8], 8, "ends at (2,2)");
    }

    #[test]
    fn test_diagonal_down_right_wavefront() {
        // 2x3 anti-diagonals: {0}, {3,1}, {4,2}, {5}
        assert_eq!(
            seq(TileOrder::DownRight, 2, 3),
            vec![0, 3, 1, 4, 2, 5]
        );
    }

    #[test]
    fn test_diagonal_down_left_is_mirrored() {
        // 2x3 mirrored diagonals: {2}, {5,1}, {4,0}, {3}
        assert_eq!(
            seq(TileOrder::DownLeft, 2, 3),
            vec![2, 5, 1, 4, 0, 3]
        );
    }

    #[test]
    fn test_spiral_degrades_to_linear_on_single_row_or_column() {
        assert_eq!(seq(TileOrder::SpiralIn, 1, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(seq(TileOrder::SpiralIn, 5, 1), vec![0, 1, 2, 3, 4]);
        assert_eq!(seq(TileOrder::SpiralIn, 1, 1), vec![0]);
    }

    #[test]
    fn test_spiral_peels_layers() {
        assert_eq!(
            seq(TileOrder::SpiralIn, 3, 3),
            vec![0, 1, 2, 5, 8, 7, 6, 3, 4]
        );
        // SpiralOut is the exact reverse.
        assert_eq!(
            seq(TileOrder::SpiralOut, 3, 3),
            vec![4, 3, 6, 7, 8, 5, 2, 1, 0]
        );
    }

    #[test]
    fn test_zig_zag_alternates_row_direction() {
        // ZigZagDown on 2x3: row 0 left-to-right, row 1 right-to-left.
        assert_eq!(
            seq(TileOrder::ZigZagDown, 2, 3),
            vec![0, 1, 2, 5, 4, 3]
        );
        // ZigZagRight walks rows within columns instead.
        assert_eq!(
            seq(TileOrder::ZigZagRight, 2, 3),
            vec![0, 3, 4, 1, 2, 5]
        );
    }

    #[test]
    fn test_single_tile_grids_never_hang() {
        for order in TileOrder::ALL {
            assert_eq!(seq(order, 1, 1), vec![0]);
        }
    }

    #[test]
    fn test_random_covers_all_permutations_roughly_uniformly() {
        let grid = Grid::new(2, 2, 100.0, 100.0);
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<Vec<usize>, u32> = HashMap::new();
        let trials = 2400;

        for _ in 0..trials {
            let seq = TileOrder::Random.sequence(&grid, &mut rng);
            *counts.entry(seq).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 24, "all 4! permutations observed");
        // Expected 100 per permutation; allow a wide statistical band.
        for (perm, count) in &counts {
            assert!(
                (40..=200).contains(count),
                "permutation {perm:?} count {count} outside loose \
                 uniformity band"
            );
        }
    }
}
