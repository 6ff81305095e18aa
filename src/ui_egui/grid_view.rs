//! Time grid rendering for the availability view.
//!
//! Paints the weekday header, the half-hour rows, committed blocks and the
//! in-progress draft, and turns egui pointer events into calls on
//! `GridInteraction`. All gesture rules live in `crate::grid`; this module
//! only decides what the pointer is over.

use egui::{Align2, CursorIcon, FontId, PointerButton, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use super::resize::{cursor_icon, draw_handles, HandleRects};
use super::theme::GridTheme;
use crate::grid::geometry::{DAY_COUNT, DAY_NAMES, SLOT_COUNT};
use crate::grid::{GestureOutcome, GridBounds, GridInteraction, GridPoint, PointerTarget};
use crate::models::block::{BlockId, SlotSpan};
use crate::utils::time::{slot_label, span_label};

/// Width of the row label column left of the grid
pub const TIME_LABEL_WIDTH: f32 = 56.0;
pub const HEADER_HEIGHT: f32 = 32.0;
const BLOCK_INSET: f32 = 1.0;
const BLOCK_ROUNDING: f32 = 6.0;
const BLOCK_PADDING: Vec2 = Vec2::new(8.0, 6.0);
const BLOCK_TITLE: &str = "(No title)";

pub fn to_grid_point(pos: Pos2) -> GridPoint {
    GridPoint::new(pos.x, pos.y)
}

pub fn to_grid_bounds(rect: Rect) -> GridBounds {
    GridBounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub fn to_rect(bounds: GridBounds) -> Rect {
    Rect::from_min_size(
        Pos2::new(bounds.left, bounds.top),
        Vec2::new(bounds.width, bounds.height),
    )
}

/// Screen placement of one committed block for this frame
#[derive(Clone, Copy, Debug)]
struct BlockLayout {
    id: BlockId,
    span: SlotSpan,
    rect: Rect,
    handles: HandleRects,
}

fn block_rect(interaction: &GridInteraction, bounds: GridBounds, day: usize, span: SlotSpan) -> Rect {
    let rect = to_rect(interaction.geometry().span_rect(bounds, day, span));
    rect.shrink2(Vec2::new(BLOCK_INSET * 2.0, BLOCK_INSET))
}

fn layout_blocks(interaction: &GridInteraction, bounds: GridBounds) -> Vec<BlockLayout> {
    interaction
        .blocks()
        .iter()
        .map(|block| {
            let span = block.span();
            let rect = block_rect(interaction, bounds, block.day_index, span);
            BlockLayout {
                id: block.id,
                span,
                rect,
                handles: HandleRects::for_block(rect),
            }
        })
        .collect()
}

/// Resolve what a press at `pos` lands on.
///
/// Later blocks are painted on top, so they are tested first. Returns the
/// block whose delete control was hit (if any) alongside the target the
/// press is delivered to afterwards.
fn hit_test(layouts: &[BlockLayout], pos: Pos2) -> (Option<BlockId>, PointerTarget) {
    for layout in layouts.iter().rev() {
        if layout.handles.hits_delete(pos) {
            return (Some(layout.id), PointerTarget::Grid);
        }
        if let Some(edge) = layout.handles.hit_test(pos) {
            return (None, PointerTarget::EdgeHandle(layout.id, edge));
        }
        if layout.rect.contains(pos) {
            return (None, PointerTarget::Block(layout.id));
        }
    }
    (None, PointerTarget::Grid)
}

/// Weekday names aligned with the grid columns below.
pub fn render_weekday_header(ui: &mut egui::Ui, theme: &GridTheme) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, HEADER_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    let col_width = (width - TIME_LABEL_WIDTH) / DAY_COUNT as f32;

    for (day, name) in DAY_NAMES.iter().enumerate() {
        let center = Pos2::new(
            rect.left() + TIME_LABEL_WIDTH + (day as f32 + 0.5) * col_width,
            rect.center().y,
        );
        painter.text(
            center,
            Align2::CENTER_CENTER,
            *name,
            FontId::proportional(13.0),
            theme.text_primary,
        );
    }

    painter.line_segment(
        [
            Pos2::new(rect.left() + TIME_LABEL_WIDTH, rect.bottom() - 0.5),
            Pos2::new(rect.right(), rect.bottom() - 0.5),
        ],
        Stroke::new(1.0, theme.grid_line),
    );
}

/// Render the label column and the grid, and apply this frame's pointer input.
pub fn render_time_grid(ui: &mut egui::Ui, interaction: &mut GridInteraction, theme: &GridTheme) {
    let geometry = *interaction.geometry();
    let width = ui.available_width();
    let (outer_rect, _) =
        ui.allocate_exact_size(Vec2::new(width, geometry.grid_height()), Sense::hover());

    let label_rect = Rect::from_min_max(
        outer_rect.min,
        Pos2::new(outer_rect.left() + TIME_LABEL_WIDTH, outer_rect.bottom()),
    );
    let grid_rect = Rect::from_min_max(Pos2::new(label_rect.right(), outer_rect.top()), outer_rect.max);

    // Claim drags over the grid so the surrounding scroll area leaves them alone
    let response = ui.interact(grid_rect, ui.id().with("availability_grid"), Sense::drag());
    let bounds = to_grid_bounds(grid_rect);

    let painter = ui.painter_at(outer_rect);
    paint_time_labels(&painter, label_rect, geometry.slot_height(), theme);
    paint_cells(&painter, grid_rect, geometry.slot_height(), theme);

    route_pointer(ui, &response, interaction, bounds);

    let layouts = layout_blocks(interaction, bounds);
    let hover_pos = response.hover_pos();
    paint_blocks(&painter, interaction, &layouts, hover_pos, theme);

    if let Some(draft) = interaction.draft() {
        let rect = block_rect(interaction, bounds, draft.day_index, draft.span());
        paint_block_body(&painter, rect, draft.span(), theme.draft_fill, theme);
    }

    update_cursor(ui, interaction, &layouts, hover_pos);
}

/// Feed this frame's pointer events to the state machine in arrival order.
///
/// A press, several moves and a release can all land in one frame, so the
/// aggregated pointer state is not enough: a draft must anchor where the
/// button went down, not where the pointer ended up.
fn route_pointer(
    ui: &egui::Ui,
    response: &egui::Response,
    interaction: &mut GridInteraction,
    bounds: GridBounds,
) {
    let (events, primary_down) = ui.input(|i| (i.events.clone(), i.pointer.primary_down()));
    let press_area = response.rect.intersect(ui.clip_rect());

    for event in &events {
        match event {
            egui::Event::PointerMoved(pos) => {
                if !interaction.is_idle() {
                    interaction.pointer_move(to_grid_point(*pos), bounds);
                }
            }
            egui::Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                ..
            } => {
                if press_area.contains(*pos) && is_topmost_at(ui, *pos) {
                    press(interaction, bounds, *pos);
                }
            }
            egui::Event::PointerButton {
                button: PointerButton::Primary,
                pressed: false,
                ..
            } => {
                let outcome = interaction.pointer_up();
                if outcome != GestureOutcome::Ignored {
                    log::debug!("Release: {:?}", outcome);
                }
            }
            _ => {}
        }
    }

    // The release never arrived, e.g. the button went up outside the window
    if !primary_down && !interaction.is_idle() {
        interaction.pointer_up();
    }

    if response.dragged() || !interaction.is_idle() {
        ui.ctx().request_repaint();
    }
}

/// Popups (e.g. the duration combo) drawn over the grid take the press.
fn is_topmost_at(ui: &egui::Ui, pos: Pos2) -> bool {
    ui.ctx()
        .layer_id_at(pos)
        .map_or(true, |layer| layer == ui.layer_id())
}

fn press(interaction: &mut GridInteraction, bounds: GridBounds, pos: Pos2) {
    // Blocks may have changed earlier in this frame
    let layouts = layout_blocks(interaction, bounds);
    let (delete, target) = hit_test(&layouts, pos);
    // The delete control sits inside the grid container, so its press
    // reaches the grid too; the guard armed by the delete absorbs it.
    if let Some(id) = delete {
        interaction.delete_block(id);
    }
    let outcome = interaction.pointer_down(target, to_grid_point(pos), bounds);
    if outcome != GestureOutcome::Ignored {
        log::debug!("Press on {:?}: {:?}", target, outcome);
    }
}

fn paint_time_labels(painter: &egui::Painter, label_rect: Rect, slot_height: f32, theme: &GridTheme) {
    for row in (0..SLOT_COUNT).step_by(2) {
        let y = label_rect.top() + row as f32 * slot_height + 2.0;
        painter.text(
            Pos2::new(label_rect.right() - 8.0, y),
            Align2::RIGHT_TOP,
            slot_label(row),
            FontId::proportional(11.0),
            theme.text_secondary,
        );
    }
}

fn paint_cells(painter: &egui::Painter, grid_rect: Rect, slot_height: f32, theme: &GridTheme) {
    let stroke = Stroke::new(1.0, theme.grid_line);
    painter.rect_filled(grid_rect, Rounding::ZERO, theme.grid_background);

    for row in 0..=SLOT_COUNT {
        let y = grid_rect.top() + row as f32 * slot_height;
        painter.line_segment(
            [Pos2::new(grid_rect.left(), y), Pos2::new(grid_rect.right(), y)],
            stroke,
        );
    }

    let col_width = grid_rect.width() / DAY_COUNT as f32;
    for col in 0..=DAY_COUNT {
        let x = grid_rect.left() + col as f32 * col_width;
        painter.line_segment(
            [Pos2::new(x, grid_rect.top()), Pos2::new(x, grid_rect.bottom())],
            stroke,
        );
    }
}

fn paint_blocks(
    painter: &egui::Painter,
    interaction: &GridInteraction,
    layouts: &[BlockLayout],
    hover_pos: Option<Pos2>,
    theme: &GridTheme,
) {
    let resizing = interaction.resizing();

    for layout in layouts {
        paint_block_body(painter, layout.rect, layout.span, theme.block_fill, theme);

        let active_edge = resizing
            .filter(|target| target.block_id == layout.id)
            .map(|target| target.edge);
        let hovered = hover_pos.map_or(false, |pos| layout.rect.contains(pos));
        if hovered || active_edge.is_some() {
            draw_handles(painter, &layout.handles, active_edge, theme.block_text);
        }

        let delete_hovered = hover_pos.map_or(false, |pos| layout.handles.hits_delete(pos));
        let delete_rect = layout.handles.delete;
        painter.rect_filled(
            delete_rect,
            Rounding::same(2.0),
            if delete_hovered {
                theme.delete_hover
            } else {
                theme.delete_fill
            },
        );
        painter.text(
            delete_rect.center(),
            Align2::CENTER_CENTER,
            "×",
            FontId::proportional(12.0),
            theme.block_text,
        );
    }
}

fn paint_block_body(
    painter: &egui::Painter,
    rect: Rect,
    span: SlotSpan,
    fill: egui::Color32,
    theme: &GridTheme,
) {
    painter.rect_filled(rect, Rounding::same(BLOCK_ROUNDING), fill);

    let text_painter = painter.with_clip_rect(rect.intersect(painter.clip_rect()));
    let text_pos = rect.left_top() + BLOCK_PADDING;
    text_painter.text(
        text_pos,
        Align2::LEFT_TOP,
        BLOCK_TITLE,
        FontId::proportional(13.0),
        theme.block_text,
    );
    text_painter.text(
        text_pos + Vec2::new(0.0, 16.0),
        Align2::LEFT_TOP,
        span_label(span),
        FontId::proportional(11.0),
        theme.block_text,
    );
}

fn update_cursor(
    ui: &egui::Ui,
    interaction: &GridInteraction,
    layouts: &[BlockLayout],
    hover_pos: Option<Pos2>,
) {
    let icon = if let Some(target) = interaction.resizing() {
        Some(cursor_icon(target.edge))
    } else {
        hover_pos.and_then(|pos| match hit_test(layouts, pos) {
            (Some(_), _) => Some(CursorIcon::PointingHand),
            (None, PointerTarget::EdgeHandle(_, edge)) => Some(cursor_icon(edge)),
            _ => None,
        })
    };

    if let Some(icon) = icon {
        ui.output_mut(|out| out.cursor_icon = icon);
    }
}
