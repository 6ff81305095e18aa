//! Interaction core of the availability grid.
//!
//! Nothing in here depends on egui: pointer positions and container bounds are
//! plain screen-space floats so gestures can be driven from tests.

pub mod geometry;
pub mod selection;

pub use geometry::{CellIndex, GridBounds, GridGeometry, GridPoint};
pub use selection::{
    GestureOutcome, GestureState, GridInteraction, PointerTarget, ResizeEdge, ResizeTarget,
    SuppressGuard,
};
