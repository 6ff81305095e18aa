mod app;
mod footer;
pub mod grid_view;
pub mod resize;
pub mod theme;

pub use app::AvailabilityApp;
pub use footer::{FooterState, NavigationSignal};
