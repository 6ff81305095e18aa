// Block edge handles and delete control
//
// Hit areas layered over a committed block:
// - Top/Bottom strips start a resize of the start/end slot
// - A small square in the top-right corner deletes the block

use egui::{Color32, Pos2, Rect, Vec2};

use crate::grid::ResizeEdge;

/// Height of the resize strip at each edge
pub const HANDLE_SIZE: f32 = 8.0;
/// Visual size of the handle bar
pub const HANDLE_VISUAL_SIZE: f32 = 3.0;
/// Side length of the delete control
pub const DELETE_SIZE: f32 = 16.0;

pub fn cursor_icon(edge: ResizeEdge) -> egui::CursorIcon {
    match edge {
        ResizeEdge::Top | ResizeEdge::Bottom => egui::CursorIcon::ResizeVertical,
    }
}

/// Hit areas of one committed block
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleRects {
    pub top: Rect,
    pub bottom: Rect,
    pub delete: Rect,
}

impl HandleRects {
    pub fn for_block(block_rect: Rect) -> Self {
        // Single-slot blocks at small row heights split their height between
        // the two strips instead of overlapping them
        let strip = HANDLE_SIZE.min(block_rect.height() / 2.0);

        Self {
            top: Rect::from_min_size(
                block_rect.left_top(),
                Vec2::new(block_rect.width(), strip),
            ),
            bottom: Rect::from_min_size(
                Pos2::new(block_rect.left(), block_rect.bottom() - strip),
                Vec2::new(block_rect.width(), strip),
            ),
            delete: Rect::from_min_size(
                Pos2::new(block_rect.right() - DELETE_SIZE, block_rect.top()),
                Vec2::splat(DELETE_SIZE),
            ),
        }
    }

    /// Which edge strip contains `pos`, if any. The delete control is
    /// checked separately since it sits on top of the top strip.
    pub fn hit_test(&self, pos: Pos2) -> Option<ResizeEdge> {
        if self.top.contains(pos) {
            Some(ResizeEdge::Top)
        } else if self.bottom.contains(pos) {
            Some(ResizeEdge::Bottom)
        } else {
            None
        }
    }

    pub fn hits_delete(&self, pos: Pos2) -> bool {
        self.delete.contains(pos)
    }

    pub fn get(&self, edge: ResizeEdge) -> Rect {
        match edge {
            ResizeEdge::Top => self.top,
            ResizeEdge::Bottom => self.bottom,
        }
    }
}

/// Draw the edge bars of a block. Only called for hovered or resizing blocks.
pub fn draw_handles(
    painter: &egui::Painter,
    handles: &HandleRects,
    active_edge: Option<ResizeEdge>,
    color: Color32,
) {
    for edge in [ResizeEdge::Top, ResizeEdge::Bottom] {
        let rect = handles.get(edge);
        let is_active = active_edge == Some(edge);
        let bar_width = (rect.width() * 0.3).min(30.0);
        let height = if is_active {
            HANDLE_VISUAL_SIZE + 1.0
        } else {
            HANDLE_VISUAL_SIZE
        };
        let bar = Rect::from_center_size(rect.center(), Vec2::new(bar_width, height));
        let fill = if is_active {
            Color32::WHITE
        } else {
            color.linear_multiply(0.8)
        };
        painter.rect_filled(bar, egui::Rounding::same(height / 2.0), fill);
    }
}
