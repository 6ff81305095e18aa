//! Gesture state machine for the availability grid.
//!
//! One `GridInteraction` per mounted grid. It owns the block store, the
//! in-progress gesture and the one-shot press guard armed by deletions. All
//! handlers are safe to call in any state: a call that has nothing to act on
//! returns `GestureOutcome::Ignored`.

use super::geometry::{GridBounds, GridGeometry, GridPoint, SLOT_COUNT};
use crate::models::block::{BlockId, DraftBlock, TimeBlock};
use crate::services::block_store::BlockStore;

/// Which edge of a committed block is being dragged
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    /// Top edge - moves the start slot
    Top,
    /// Bottom edge - moves the end slot
    Bottom,
}

/// The block being resized. Refers to the block by id only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeTarget {
    pub block_id: BlockId,
    pub edge: ResizeEdge,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    Drafting(DraftBlock),
    Resizing(ResizeTarget),
}

/// What the pointer landed on when a press started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty grid background
    Grid,
    /// Body of a committed block
    Block(BlockId),
    /// Top or bottom strip of a committed block
    EdgeHandle(BlockId, ResizeEdge),
}

/// Result of feeding one event to the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    Ignored,
    /// Press swallowed by the guard armed by a preceding delete
    Suppressed,
    DraftStarted,
    DraftExtended,
    Committed(BlockId),
    ResizeStarted,
    Resized,
    ResizeEnded,
    Deleted(BlockId),
}

/// One-shot flag: armed by a delete, cleared by the next press that reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SuppressGuard {
    armed: bool,
}

impl SuppressGuard {
    pub fn arm(&mut self) {
        self.armed = true;
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Return whether the guard was armed and disarm it.
    pub fn consume(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }
}

#[derive(Debug, Default)]
pub struct GridInteraction {
    geometry: GridGeometry,
    store: BlockStore,
    state: GestureState,
    guard: SuppressGuard,
}

impl GridInteraction {
    pub fn new(geometry: GridGeometry) -> Self {
        Self {
            geometry,
            ..Default::default()
        }
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == GestureState::Idle
    }

    pub fn draft(&self) -> Option<&DraftBlock> {
        match &self.state {
            GestureState::Drafting(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn resizing(&self) -> Option<ResizeTarget> {
        match self.state {
            GestureState::Resizing(target) => Some(target),
            _ => None,
        }
    }

    pub fn blocks(&self) -> &[TimeBlock] {
        self.store.as_slice()
    }

    pub fn store(&self) -> &BlockStore {
        &self.store
    }

    #[cfg(test)]
    pub fn guard(&self) -> SuppressGuard {
        self.guard
    }

    /// Primary button pressed over the grid.
    pub fn pointer_down(
        &mut self,
        target: PointerTarget,
        point: GridPoint,
        bounds: GridBounds,
    ) -> GestureOutcome {
        if self.guard.consume() {
            log::debug!("Press swallowed after delete");
            return GestureOutcome::Suppressed;
        }
        if !self.is_idle() {
            return GestureOutcome::Ignored;
        }

        match target {
            PointerTarget::Grid => {
                let Some(cell) = self.geometry.cell_at(point, bounds) else {
                    return GestureOutcome::Ignored;
                };
                self.state = GestureState::Drafting(DraftBlock::new(cell.column, cell.row));
                GestureOutcome::DraftStarted
            }
            PointerTarget::Block(_) => GestureOutcome::Ignored,
            PointerTarget::EdgeHandle(block_id, edge) => {
                if !self.store.contains(block_id) {
                    return GestureOutcome::Ignored;
                }
                log::debug!("Resizing block {} from {:?} edge", block_id, edge);
                self.state = GestureState::Resizing(ResizeTarget { block_id, edge });
                GestureOutcome::ResizeStarted
            }
        }
    }

    /// Pointer moved. The position is re-mapped against the current bounds
    /// every time since the container may have scrolled or resized.
    pub fn pointer_move(&mut self, point: GridPoint, bounds: GridBounds) -> GestureOutcome {
        let Some(cell) = self.geometry.cell_at(point, bounds) else {
            return GestureOutcome::Ignored;
        };

        match &mut self.state {
            GestureState::Idle => GestureOutcome::Ignored,
            GestureState::Drafting(draft) => {
                // Drafts stay in the column they started in
                if cell.column != draft.day_index || cell.row == draft.end_index {
                    return GestureOutcome::Ignored;
                }
                draft.end_index = cell.row;
                GestureOutcome::DraftExtended
            }
            GestureState::Resizing(target) => {
                let target = *target;
                self.resize_to(target, cell.row)
            }
        }
    }

    /// Primary button released anywhere. Always ends the active gesture.
    pub fn pointer_up(&mut self) -> GestureOutcome {
        match std::mem::take(&mut self.state) {
            GestureState::Idle => GestureOutcome::Ignored,
            GestureState::Drafting(draft) => {
                let id = self.store.append(draft.day_index, draft.span());
                log::debug!(
                    "Committed block {} on day {} covering {:?}",
                    id,
                    draft.day_index,
                    draft.span()
                );
                GestureOutcome::Committed(id)
            }
            GestureState::Resizing(target) => {
                log::debug!("Finished resizing block {}", target.block_id);
                GestureOutcome::ResizeEnded
            }
        }
    }

    /// Remove a block through its delete control. Allowed in any state.
    ///
    /// The press that activated the control also reaches the grid beneath it,
    /// so the guard is armed to swallow that press instead of starting a
    /// draft at the same spot.
    pub fn delete_block(&mut self, id: BlockId) -> GestureOutcome {
        self.guard.arm();
        if self.store.remove(id) {
            log::debug!("Deleted block {}", id);
            GestureOutcome::Deleted(id)
        } else {
            GestureOutcome::Ignored
        }
    }

    fn resize_to(&mut self, target: ResizeTarget, row: usize) -> GestureOutcome {
        let Some(block) = self.store.get(target.block_id) else {
            return GestureOutcome::Ignored;
        };
        let (start, end) = (block.start_index, block.end_index);

        // Each edge stays at least one slot away from the opposite edge. When
        // that would push it off the grid the move is dropped.
        let (new_start, new_end) = match target.edge {
            ResizeEdge::Top => match end.checked_sub(1) {
                Some(limit) => (row.min(limit), end),
                None => return GestureOutcome::Ignored,
            },
            ResizeEdge::Bottom => {
                let limit = start + 1;
                if limit >= SLOT_COUNT {
                    return GestureOutcome::Ignored;
                }
                (start, row.max(limit))
            }
        };

        if (new_start, new_end) == (start, end) {
            return GestureOutcome::Ignored;
        }
        self.store.update_bounds(target.block_id, new_start, new_end);
        GestureOutcome::Resized
    }
}
