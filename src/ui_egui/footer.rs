//! Bottom bar: meeting duration, location and the "Next" button.
//!
//! Duration and location are collected for the following step only; they are
//! never attached to the drawn blocks.

use egui::{Color32, RichText, TextEdit};

use super::theme::GridTheme;
use crate::models::settings::DURATION_OPTIONS;
use crate::utils::time::duration_label;

/// Emitted when the user leaves the grid. Carries no block data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationSignal {
    NextStep,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterState {
    pub duration_minutes: u32,
    pub location: String,
}

impl FooterState {
    pub fn new(duration_minutes: u32) -> Self {
        let duration_minutes = if DURATION_OPTIONS.contains(&duration_minutes) {
            duration_minutes
        } else {
            DURATION_OPTIONS[0]
        };
        Self {
            duration_minutes,
            location: String::new(),
        }
    }
}

pub fn render_footer(
    ui: &mut egui::Ui,
    state: &mut FooterState,
    theme: &GridTheme,
) -> Option<NavigationSignal> {
    let mut signal = None;

    ui.horizontal(|ui| {
        ui.label("Duration:");
        egui::ComboBox::from_id_source("meeting_duration")
            .selected_text(duration_label(state.duration_minutes))
            .show_ui(ui, |ui| {
                for minutes in DURATION_OPTIONS {
                    ui.selectable_value(
                        &mut state.duration_minutes,
                        minutes,
                        duration_label(minutes),
                    );
                }
            });

        ui.add_space(16.0);
        ui.label("Location:");
        ui.add(
            TextEdit::singleline(&mut state.location)
                .hint_text("e.g. Zoom or Café")
                .desired_width(256.0),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let next = egui::Button::new(RichText::new("Next →").color(Color32::WHITE))
                .fill(theme.accent);
            if ui.add(next).clicked() {
                signal = Some(NavigationSignal::NextStep);
            }
        });
    });

    signal
}
