//! Tile descriptors and shape (plane/cuboid) geometry.
//!
//! Tiles are created fresh for every pass and destroyed on `clear()` or
//! the next `start()`. Each tile composites a cropped slice of the
//! previous and current slide images onto the faces of its shape.

use crate::direction::Axis;
use crate::grid::Grid;
use crate::host::SlideImage;

/// Pixel rectangle of a tile within its container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TileRect {
    /// Offset from the container top.
    pub top: f32,
    /// Offset from the container left.
    pub left: f32,
    /// Clipped tile width.
    pub width: f32,
    /// Clipped tile height.
    pub height: f32,
}

/// Whether tiles carry a flat two-sided plane or a six-faced cuboid.
/// Cuboids are only built for 3D passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeMode {
    /// Two stacked faces (front/back).
    Plane,
    /// Six faces with depth.
    Cuboid,
}

/// A face of a tile shape. Planes only use `Front` and `Back`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Face toward the viewer.
    Front,
    /// Face away from the viewer.
    Back,
    /// Cuboid left side.
    Left,
    /// Cuboid right side.
    Right,
    /// Cuboid top side.
    Top,
    /// Cuboid bottom side.
    Bottom,
}

/// One cell of the effect grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Flat index (`row * columns + col`).
    pub index: usize,
    /// Grid row.
    pub row: u32,
    /// Grid column.
    pub col: u32,
    /// Pixel rectangle within the container.
    pub rect: TileRect,
    /// Cuboid depth in pixels; 0 for 2D passes.
    pub depth: f32,
}

/// Build the full tile set for a grid. `depth` applies uniformly; the
/// per-tile value exists so renderers can lay out cuboid faces without
/// reaching back into pass state.
#[must_use]
pub fn build_tiles(grid: &Grid, depth: f32) -> Vec<Tile> {
    (0..grid.len())
        .map(|index| Tile {
            index,
            row: grid.row_of(index),
            col: grid.col_of(index),
            rect: grid.tile_rect(index),
            depth,
        })
        .collect()
}

/// Crop offset placing a slide image inside a tile so the tile shows
/// exactly its slice: the image's screen position minus the tile's.
#[must_use]
pub fn image_offset(image: &SlideImage, rect: &TileRect) -> (f32, f32) {
    (image.left - rect.left, image.top - rect.top)
}

/// Static layout of one cuboid face: sizing overrides, in-plane offset,
/// an out-of-plane rotation, and the final z translation that pushes the
/// face onto the cuboid surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLayout {
    /// Which face this layout positions.
    pub face: Face,
    /// Override width (side faces are `depth` wide).
    pub width: Option<f32>,
    /// Override height (top/bottom faces are `depth` tall).
    pub height: Option<f32>,
    /// Horizontal centering offset for side faces.
    pub left: Option<f32>,
    /// Vertical centering offset for top/bottom faces.
    pub top: Option<f32>,
    /// Out-of-plane rotation in degrees around the given axis.
    pub rotate: Option<(Axis, f32)>,
    /// Extra in-plane spin in degrees (the back face is pre-spun 180 for
    /// X-axis flips so its content reads upright mid-flip).
    pub spin: f32,
    /// Z translation in pixels.
    pub translate_z: f32,
}

/// Face layouts for a cuboid of the given dimensions. `back_inverted`
/// pre-spins the back face for X-axis flips.
#[must_use]
pub fn cuboid_faces(
    width: f32,
    height: f32,
    depth: f32,
    back_inverted: bool,
) -> [FaceLayout; 6] {
    let side_left = (width - depth) / 2.0;
    let side_top = (height - depth) / 2.0;
    let flat = FaceLayout {
        face: Face::Front,
        width: None,
        height: None,
        left: None,
        top: None,
        rotate: None,
        spin: 0.0,
        translate_z: depth / 2.0,
    };

    [
        flat,
        FaceLayout {
            face: Face::Back,
            rotate: Some((Axis::Y, 180.0)),
            spin: if back_inverted { 180.0 } else { 0.0 },
            ..flat
        },
        FaceLayout {
            face: Face::Left,
            width: Some(depth),
            left: Some(side_left),
            rotate: Some((Axis::Y, -90.0)),
            translate_z: width / 2.0,
            ..flat
        },
        FaceLayout {
            face: Face::Right,
            width: Some(depth),
            left: Some(side_left),
            rotate: Some((Axis::Y, 90.0)),
            translate_z: width / 2.0,
            ..flat
        },
        FaceLayout {
            face: Face::Top,
            height: Some(depth),
            top: Some(side_top),
            rotate: Some((Axis::X, 90.0)),
            translate_z: height / 2.0,
            ..flat
        },
        FaceLayout {
            face: Face::Bottom,
            height: Some(depth),
            top: Some(side_top),
            rotate: Some((Axis::X, -90.0)),
            translate_z: height / 2.0,
            ..flat
        },
    ]
}
