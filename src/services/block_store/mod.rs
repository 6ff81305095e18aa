// Block store
//
// Ordered collection of committed blocks. Insertion order is render order.
// Operations on an id that is no longer stored do nothing and report `false`.

use crate::models::block::{BlockId, SlotSpan, TimeBlock};

#[derive(Debug)]
pub struct BlockStore {
    blocks: Vec<TimeBlock>,
    next_id: BlockId,
}

impl Default for BlockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockStore {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a block at the end and return its freshly assigned id.
    pub fn append(&mut self, day_index: usize, span: SlotSpan) -> BlockId {
        let id = self.next_id;
        self.next_id += 1;
        self.blocks.push(TimeBlock {
            id,
            day_index,
            start_index: span.top,
            end_index: span.bottom,
        });
        id
    }

    /// Remove the block with `id`. Returns false if it was already gone.
    pub fn remove(&mut self, id: BlockId) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|block| block.id != id);
        self.blocks.len() != before
    }

    /// Overwrite the slot bounds of a block, leaving id and day untouched.
    pub fn update_bounds(&mut self, id: BlockId, start_index: usize, end_index: usize) -> bool {
        match self.blocks.iter_mut().find(|block| block.id == id) {
            Some(block) => {
                block.start_index = start_index;
                block.end_index = end_index;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: BlockId) -> Option<&TimeBlock> {
        self.blocks.iter().find(|block| block.id == id)
    }

    pub fn contains(&self, id: BlockId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeBlock> {
        self.blocks.iter()
    }

    pub fn as_slice(&self) -> &[TimeBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
