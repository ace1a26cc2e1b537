//! Grid geometry: partitioning a slide container into rows and columns
//! of tiles.

use crate::tile::TileRect;

/// Coarse shape of a grid, used to select compatible effect presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridKind {
    /// Single tile (1x1).
    None,
    /// One row, many columns.
    Column,
    /// Many rows, one column.
    Row,
    /// Many rows and many columns.
    Grid,
}

/// An R x C tile grid over a container of known pixel size.
///
/// Rows and columns are clamped to at least 1 on construction, so the
/// ordering and geometry code never sees a degenerate 0-sized grid.
/// Tiles are indexed `row * columns + col`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: u32,
    columns: u32,
    container_width: f32,
    container_height: f32,
    tile_width: f32,
    tile_height: f32,
}

impl Grid {
    /// Create a grid over a container. `rows`/`columns` of 0 clamp to 1.
    #[must_use]
    pub fn new(
        rows: u32,
        columns: u32,
        container_width: f32,
        container_height: f32,
    ) -> Self {
        let rows = rows.max(1);
        let columns = columns.max(1);
        Self {
            rows,
            columns,
            container_width,
            container_height,
            tile_width: (container_width / columns as f32).ceil(),
            tile_height: (container_height / rows as f32).ceil(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Total tile count (`rows * columns`).
    #[must_use]
    pub const fn len(&self) -> usize {
        (self.rows * self.columns) as usize
    }

    /// Always false; a grid holds at least one tile.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Nominal tile width (`ceil(container_width / columns)`).
    #[must_use]
    pub const fn tile_width(&self) -> f32 {
        self.tile_width
    }

    /// Nominal tile height (`ceil(container_height / rows)`).
    #[must_use]
    pub const fn tile_height(&self) -> f32 {
        self.tile_height
    }

    /// Container width in pixels.
    #[must_use]
    pub const fn container_width(&self) -> f32 {
        self.container_width
    }

    /// Container height in pixels.
    #[must_use]
    pub const fn container_height(&self) -> f32 {
        self.container_height
    }

    /// Flat index of the tile at (`row`, `col`).
    #[must_use]
    pub const fn index(&self, row: u32, col: u32) -> usize {
        (row * self.columns + col) as usize
    }

    /// Row of a flat tile index.
    #[must_use]
    pub const fn row_of(&self, index: usize) -> u32 {
        index as u32 / self.columns
    }

    /// Column of a flat tile index.
    #[must_use]
    pub const fn col_of(&self, index: usize) -> u32 {
        index as u32 % self.columns
    }

    /// Pixel rectangle of a tile, clipped so edge tiles never extend
    /// past the container (the ceil'd nominal size can overshoot).
    #[must_use]
    pub fn tile_rect(&self, index: usize) -> TileRect {
        let row = self.row_of(index);
        let col = self.col_of(index);
        let top = row as f32 * self.tile_height;
        let left = col as f32 * self.tile_width;
        TileRect {
            top,
            left,
            width: self
                .tile_width
                .min(self.container_width - left)
                .max(0.0),
            height: self
                .tile_height
                .min(self.container_height - top)
                .max(0.0),
        }
    }

    /// Coarse grid shape for preset selection.
    #[must_use]
    pub const fn kind(&self) -> GridKind {
        if self.rows > 1 {
            if self.columns > 1 {
                GridKind::Grid
            } else {
                GridKind::Row
            }
        } else if self.columns > 1 {
            GridKind::Column
        } else {
            GridKind::None
        }
    }
}
