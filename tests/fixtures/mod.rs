// Test fixtures - reusable grid geometry and gesture helpers
// Provides a consistent grid layout across all test files

#![allow(dead_code)]

use availability_grid::grid::{GestureOutcome, GridBounds, GridInteraction, GridPoint, PointerTarget};
use availability_grid::models::block::BlockId;

/// Grid container placed at (80, 120), 700px wide: 100px columns, 40px rows
pub fn grid_bounds() -> GridBounds {
    GridBounds::new(80.0, 120.0, 700.0, 1280.0)
}

/// Center of the cell at (`column`, `row`) in screen coordinates
pub fn cell_center(column: usize, row: usize) -> GridPoint {
    let bounds = grid_bounds();
    GridPoint::new(
        bounds.left + column as f32 * 100.0 + 50.0,
        bounds.top + row as f32 * 40.0 + 20.0,
    )
}

/// Press on empty grid, move to `to_row` in the same column, release.
pub fn drag_block(
    grid: &mut GridInteraction,
    column: usize,
    from_row: usize,
    to_row: usize,
) -> BlockId {
    grid.pointer_down(PointerTarget::Grid, cell_center(column, from_row), grid_bounds());
    grid.pointer_move(cell_center(column, to_row), grid_bounds());
    match grid.pointer_up() {
        GestureOutcome::Committed(id) => id,
        other => panic!("drag did not commit a block: {:?}", other),
    }
}
