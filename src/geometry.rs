//! Geometry primitives shared across the layout engine.

use serde::{Deserialize, Serialize};

/// Width/height pair in layout points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// Create a size from its extents.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle with the origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from origin and extents.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// The rectangle's extents, origin discarded.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// True when the two rectangles overlap with positive area.
    /// Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Logical packing position of a cell: the row within its section and the
/// column the cell starts at. Distinct from the flat item index: several
/// items share a row, and a spanning item consumes several columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridIndex {
    /// Row within the section, counted from the section's first row.
    pub row: u32,
    /// First column the cell occupies, in `[0, columns)`.
    pub column: u32,
}

impl GridIndex {
    /// Create a grid index from row and starting column.
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}
