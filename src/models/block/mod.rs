// Time block models
//
// A block sits in one day column and covers an inclusive range of half-hour
// slots. Start and end keep the order the user dragged them in; read the
// covered range through `SlotSpan`.

/// Identifier handed out by the block store. Never reused.
pub type BlockId = u64;

/// Normalized, inclusive slot range `[top, bottom]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotSpan {
    pub top: usize,
    pub bottom: usize,
}

impl SlotSpan {
    /// Build a span from two slot indices in either order.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            top: a.min(b),
            bottom: a.max(b),
        }
    }

    /// Number of slots covered, always at least one.
    pub fn slot_count(&self) -> usize {
        self.bottom - self.top + 1
    }
}

/// A committed block owned by the block store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBlock {
    pub id: BlockId,
    /// Day column, 0 = Sunday
    pub day_index: usize,
    pub start_index: usize,
    pub end_index: usize,
}

impl TimeBlock {
    pub fn span(&self) -> SlotSpan {
        SlotSpan::new(self.start_index, self.end_index)
    }
}

/// The in-progress block of a drag gesture.
///
/// `start_index` is where the press landed and stays fixed; `end_index`
/// follows the pointer and may end up above the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftBlock {
    pub day_index: usize,
    pub start_index: usize,
    pub end_index: usize,
}

impl DraftBlock {
    pub fn new(day_index: usize, row: usize) -> Self {
        Self {
            day_index,
            start_index: row,
            end_index: row,
        }
    }

    pub fn span(&self) -> SlotSpan {
        SlotSpan::new(self.start_index, self.end_index)
    }
}
