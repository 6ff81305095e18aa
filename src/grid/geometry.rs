//! Geometry mapper: screen coordinates to grid cells and back.
//!
//! The grid is `DAY_COUNT` equal-width columns by `SLOT_COUNT` rows of fixed
//! height. Columns stretch with the container; rows do not.

use crate::models::block::SlotSpan;

/// Day columns, Sunday through Saturday
pub const DAY_COUNT: usize = 7;
/// Half-hour rows from 6:00 to 22:00
pub const SLOT_COUNT: usize = 32;
pub const FIRST_SLOT_HOUR: u32 = 6;
pub const SLOT_MINUTES: u32 = 30;
pub const DEFAULT_SLOT_HEIGHT: f32 = 40.0;

pub const DAY_NAMES: [&str; DAY_COUNT] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A pointer position in screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridPoint {
    pub x: f32,
    pub y: f32,
}

impl GridPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Screen-space rectangle of the grid container (or of something drawn in it).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl GridBounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// A `(day column, slot row)` pair known to lie inside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub column: usize,
    pub row: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    slot_height: f32,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            slot_height: DEFAULT_SLOT_HEIGHT,
        }
    }
}

impl GridGeometry {
    /// A slot height that is not a positive finite number falls back to
    /// `DEFAULT_SLOT_HEIGHT`.
    pub fn new(slot_height: f32) -> Self {
        if slot_height.is_finite() && slot_height > 0.0 {
            Self { slot_height }
        } else {
            Self::default()
        }
    }

    pub fn slot_height(&self) -> f32 {
        self.slot_height
    }

    pub fn grid_height(&self) -> f32 {
        self.slot_height * SLOT_COUNT as f32
    }

    pub fn column_width(&self, bounds: GridBounds) -> f32 {
        bounds.width / DAY_COUNT as f32
    }

    /// Map a pointer position to the cell beneath it.
    ///
    /// `None` is an ordinary answer (pointer outside the grid, or a container
    /// with no width) and callers treat it as "nothing to do".
    pub fn cell_at(&self, point: GridPoint, bounds: GridBounds) -> Option<CellIndex> {
        let col_width = self.column_width(bounds);
        if col_width.is_nan() || col_width <= 0.0 {
            return None;
        }

        let column = ((point.x - bounds.left) / col_width).floor();
        let row = ((point.y - bounds.top) / self.slot_height).floor();

        if !(0.0..DAY_COUNT as f32).contains(&column) || !(0.0..SLOT_COUNT as f32).contains(&row) {
            return None;
        }

        Some(CellIndex {
            column: column as usize,
            row: row as usize,
        })
    }

    /// Y coordinate of the top edge of `row`.
    pub fn slot_top(&self, bounds: GridBounds, row: usize) -> f32 {
        bounds.top + row as f32 * self.slot_height
    }

    /// Screen rectangle covered by a block spanning `span` in `day`.
    pub fn span_rect(&self, bounds: GridBounds, day: usize, span: SlotSpan) -> GridBounds {
        let col_width = self.column_width(bounds);
        GridBounds {
            left: bounds.left + day as f32 * col_width,
            top: self.slot_top(bounds, span.top),
            width: col_width,
            height: span.slot_count() as f32 * self.slot_height,
        }
    }
}
