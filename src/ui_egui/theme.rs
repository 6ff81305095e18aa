//! Theme module for the availability grid
//!
//! Defines the GridTheme structure and resolves the theme preference stored
//! in settings ("light", "dark" or "system").

use egui::Color32;

/// All colors used to paint the grid and its chrome
#[derive(Debug, Clone, PartialEq)]
pub struct GridTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Grid cell background color
    pub grid_background: Color32,

    /// Cell border color
    pub grid_line: Color32,

    /// Primary text color (title, weekday header)
    pub text_primary: Color32,

    /// Secondary text color (row time labels)
    pub text_secondary: Color32,

    /// Committed block fill
    pub block_fill: Color32,

    /// In-progress draft fill (translucent)
    pub draft_fill: Color32,

    /// Text drawn on top of blocks
    pub block_text: Color32,

    /// Delete control background
    pub delete_fill: Color32,

    /// Delete control background while hovered
    pub delete_hover: Color32,

    /// "Next" button fill
    pub accent: Color32,
}

impl GridTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(255, 255, 255),
            grid_background: Color32::from_rgb(255, 255, 255),
            grid_line: Color32::from_rgba_unmultiplied(229, 231, 235, 128),
            text_primary: Color32::from_rgb(55, 65, 81),
            text_secondary: Color32::from_rgb(107, 114, 128),
            block_fill: Color32::from_rgb(55, 65, 81),
            draft_fill: Color32::from_rgba_unmultiplied(107, 114, 128, 204),
            block_text: Color32::WHITE,
            delete_fill: Color32::from_rgb(31, 41, 55),
            delete_hover: Color32::from_rgb(220, 38, 38),
            accent: Color32::from_rgb(37, 99, 235),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            grid_background: Color32::from_rgb(40, 40, 40),
            grid_line: Color32::from_rgba_unmultiplied(90, 90, 90, 128),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            block_fill: Color32::from_rgb(100, 150, 200),
            draft_fill: Color32::from_rgba_unmultiplied(100, 150, 200, 140),
            block_text: Color32::WHITE,
            delete_fill: Color32::from_rgb(50, 60, 80),
            delete_hover: Color32::from_rgb(220, 38, 38),
            accent: Color32::from_rgb(100, 150, 255),
        }
    }

    /// Resolve a theme preference; "system" follows the OS setting.
    pub fn from_preference(preference: &str) -> Self {
        let resolved = if preference.eq_ignore_ascii_case("system") {
            match dark_light::detect() {
                dark_light::Mode::Dark => "dark",
                dark_light::Mode::Light | dark_light::Mode::Default => "light",
            }
        } else {
            preference
        };

        if resolved.eq_ignore_ascii_case("dark") {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
