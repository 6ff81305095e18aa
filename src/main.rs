// Availability Grid Application
// Main entry point

use availability_grid::services::settings::{load_settings_or_default, SettingsService};
use availability_grid::ui_egui::AvailabilityApp;

const MIN_WINDOW_WIDTH: f32 = 800.0;
const MIN_WINDOW_HEIGHT: f32 = 600.0;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Availability Grid");

    let settings_service = SettingsService::new(SettingsService::default_path());
    let settings = load_settings_or_default(&settings_service);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Availability Grid")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Availability Grid",
        options,
        Box::new(move |cc| Ok(Box::new(AvailabilityApp::new(cc, &settings)))),
    )
}
