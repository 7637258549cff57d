//! Grid geometry for multi-icon images.
//!
//! Icons are placed row-major, left to right and top to bottom, in exactly
//! the order they were requested. The first icon of every row and column is
//! inset by `padding`, and neighbouring icons are `cell_size + padding`
//! apart, so a 23-icon grid at 10 per line with 48px icons and 4px padding
//! is 520x156 and its eleventh icon sits at (4, 56).
//!
//! The pitch is `cell_size + padding`, not `cell_size + 2 * padding`: the
//! canvas carries no trailing padding, so the last column and the last row
//! sit flush against the right and bottom edges of the (rounded) canvas.

/// Pixel size of one icon inside a grid cell.
pub const GRID_ICON_SIZE: u32 = 48;

/// Padding around each icon in a grid cell.
pub const GRID_ICON_PADDING: u32 = 4;

/// Corner radius of the grid background.
pub const GRID_BORDER_RADIUS: u32 = 8;

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Creates a square size.
    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// Top-left offset of an icon, in pixels from the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointPx {
    pub x: u32,
    pub y: u32,
}

impl PointPx {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Computed grid geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: u32,
    pub cols: u32,
    pub width: u32,
    pub height: u32,
    /// Icon offsets, one per requested icon, in request order.
    pub positions: Vec<PointPx>,
}

impl GridLayout {
    /// Returns the canvas dimensions.
    pub fn size(&self) -> SizePx {
        SizePx::new(self.width, self.height)
    }

    /// Number of laid-out icons.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Lays out `count` icons, at most `per_line` per row.
///
/// A `per_line` of zero is treated as one so the result is always a
/// well-defined grid; request validation keeps it within `5..=10` anyway.
pub fn layout(count: usize, per_line: u32, cell_size: u32, padding: u32) -> GridLayout {
    let per_line = per_line.max(1);
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    let pitch = cell_size.saturating_add(padding);

    let cols = count.min(per_line);
    let rows = count.div_ceil(per_line);

    let positions = (0..count)
        .map(|k| {
            let row = k / per_line;
            let col = k % per_line;
            PointPx::new(
                col.saturating_mul(pitch).saturating_add(padding),
                row.saturating_mul(pitch).saturating_add(padding),
            )
        })
        .collect();

    GridLayout {
        rows,
        cols,
        width: cols.saturating_mul(pitch),
        height: rows.saturating_mul(pitch),
        positions,
    }
}

/// Lays out `count` icons with the standard grid cell size and padding.
pub fn standard_layout(count: usize, per_line: u32) -> GridLayout {
    layout(count, per_line, GRID_ICON_SIZE, GRID_ICON_PADDING)
}

// ============================================================================
// Tests
// ============================================================================
