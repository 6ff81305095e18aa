// Property-based tests for gesture handling
// Drives the grid with random pointer sequences and checks the invariants
// that must hold after every event

#[path = "../fixtures/mod.rs"]
mod fixtures;

use availability_grid::grid::geometry::{DAY_COUNT, SLOT_COUNT};
use availability_grid::grid::{
    GestureOutcome, GestureState, GridInteraction, GridPoint, PointerTarget, ResizeEdge,
};
use availability_grid::models::block::TimeBlock;
use fixtures::{cell_center, drag_block, grid_bounds};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    PressGrid(usize, usize),
    PressEdge(usize, bool, usize),
    PressBody(usize),
    /// Raw coordinates, may fall outside the grid
    Move(f32, f32),
    Release,
    Delete(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..DAY_COUNT, 0..SLOT_COUNT).prop_map(|(c, r)| Op::PressGrid(c, r)),
        (0..8usize, any::<bool>(), 0..SLOT_COUNT).prop_map(|(i, top, r)| Op::PressEdge(i, top, r)),
        (0..8usize).prop_map(Op::PressBody),
        (0.0f32..900.0, 0.0f32..1500.0).prop_map(|(x, y)| Op::Move(x, y)),
        Just(Op::Release),
        (0..8usize).prop_map(Op::Delete),
    ]
}

/// Pick an existing id by position, or an id that was never handed out
fn pick_id(grid: &GridInteraction, index: usize) -> u64 {
    grid.blocks()
        .get(index)
        .map(|block| block.id)
        .unwrap_or(10_000 + index as u64)
}

fn assert_block_in_grid(block: &TimeBlock) {
    assert!(block.day_index < DAY_COUNT);
    assert!(block.start_index <= block.end_index);
    assert!(block.end_index < SLOT_COUNT);
}

proptest! {
    /// Property: a completed drag stores exactly one block covering both rows
    #[test]
    fn prop_drag_commits_normalized_block(
        column in 0..DAY_COUNT,
        r1 in 0..SLOT_COUNT,
        r2 in 0..SLOT_COUNT,
    ) {
        let mut grid = GridInteraction::default();
        let id = drag_block(&mut grid, column, r1, r2);

        prop_assert_eq!(grid.blocks().len(), 1);
        let block = grid.store().get(id).unwrap();
        prop_assert_eq!(block.day_index, column);
        prop_assert_eq!(block.start_index, r1.min(r2));
        prop_assert_eq!(block.end_index, r1.max(r2));
    }

    /// Property: moves into other columns never change the draft's day
    #[test]
    fn prop_draft_stays_in_its_column(
        column in 0..DAY_COUNT,
        row in 0..SLOT_COUNT,
        moves in prop::collection::vec((0..DAY_COUNT, 0..SLOT_COUNT), 1..20),
    ) {
        let mut grid = GridInteraction::default();
        grid.pointer_down(PointerTarget::Grid, cell_center(column, row), grid_bounds());
        for (c, r) in moves {
            grid.pointer_move(cell_center(c, r), grid_bounds());
            prop_assert_eq!(grid.draft().map(|d| d.day_index), Some(column));
        }
    }

    /// Property: a resize keeps both edges at least one slot apart
    #[test]
    fn prop_resize_never_inverts_block(
        r1 in 0..SLOT_COUNT,
        r2 in 0..SLOT_COUNT,
        top in any::<bool>(),
        targets in prop::collection::vec(0..SLOT_COUNT, 1..20),
    ) {
        let mut grid = GridInteraction::default();
        let id = drag_block(&mut grid, 2, r1, r2);
        let edge = if top { ResizeEdge::Top } else { ResizeEdge::Bottom };
        grid.pointer_down(PointerTarget::EdgeHandle(id, edge), cell_center(2, r1), grid_bounds());

        for row in targets {
            let outcome = grid.pointer_move(cell_center(2, row), grid_bounds());
            let block = grid.store().get(id).unwrap();
            if outcome == GestureOutcome::Resized {
                prop_assert!(block.start_index < block.end_index);
            }
            assert_block_in_grid(block);
        }
    }

    /// Property: deleting a block removes it and nothing else
    #[test]
    fn prop_delete_removes_only_target(
        drags in prop::collection::vec((0..DAY_COUNT, 0..SLOT_COUNT, 0..SLOT_COUNT), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut grid = GridInteraction::default();
        for (c, a, b) in drags {
            drag_block(&mut grid, c, a, b);
        }
        let victim = grid.blocks()[pick.index(grid.blocks().len())].id;
        let expected: Vec<TimeBlock> =
            grid.blocks().iter().filter(|b| b.id != victim).cloned().collect();

        prop_assert_eq!(grid.delete_block(victim), GestureOutcome::Deleted(victim));
        prop_assert_eq!(grid.blocks(), expected.as_slice());
    }

    /// Property: random event streams never break the grid's invariants
    #[test]
    fn prop_random_events_keep_invariants(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut grid = GridInteraction::default();
        let bounds = grid_bounds();

        for op in ops {
            let draft_day = grid.draft().map(|d| d.day_index);
            let outcome = match op {
                Op::PressGrid(c, r) => grid.pointer_down(PointerTarget::Grid, cell_center(c, r), bounds),
                Op::PressEdge(i, top, r) => {
                    let edge = if top { ResizeEdge::Top } else { ResizeEdge::Bottom };
                    let id = pick_id(&grid, i);
                    grid.pointer_down(PointerTarget::EdgeHandle(id, edge), cell_center(0, r), bounds)
                }
                Op::PressBody(i) => {
                    let id = pick_id(&grid, i);
                    grid.pointer_down(PointerTarget::Block(id), cell_center(0, 0), bounds)
                }
                Op::Move(x, y) => grid.pointer_move(GridPoint::new(x, y), bounds),
                Op::Release => grid.pointer_up(),
                Op::Delete(i) => {
                    let id = pick_id(&grid, i);
                    grid.delete_block(id)
                }
            };

            match grid.state() {
                GestureState::Idle => {
                    prop_assert!(grid.draft().is_none());
                    prop_assert!(grid.resizing().is_none());
                }
                GestureState::Drafting(draft) => {
                    prop_assert!(grid.resizing().is_none());
                    if let Some(day) = draft_day {
                        prop_assert_eq!(draft.day_index, day);
                    }
                }
                GestureState::Resizing(_) => prop_assert!(grid.draft().is_none()),
            }

            if let GestureOutcome::Committed(id) = outcome {
                prop_assert!(grid.is_idle());
                prop_assert!(grid.store().get(id).is_some());
            }

            for block in grid.blocks() {
                assert_block_in_grid(block);
            }
            let mut ids: Vec<_> = grid.blocks().iter().map(|b| b.id).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), grid.blocks().len());
        }
    }
}
