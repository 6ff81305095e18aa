use super::footer::{render_footer, FooterState, NavigationSignal};
use super::grid_view::{render_time_grid, render_weekday_header};
use super::theme::GridTheme;
use crate::grid::{GridGeometry, GridInteraction};
use crate::models::settings::GridSettings;

pub struct AvailabilityApp {
    /// Blocks and the gesture in progress; dropped with the app
    interaction: GridInteraction,
    footer: FooterState,
    /// Currently applied theme colors
    active_theme: GridTheme,
}

impl eframe::App for AvailabilityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title_bar")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.add_space(16.0);
                ui.heading(egui::RichText::new("Select Your Availability").strong());
                ui.add_space(8.0);
            });

        let mut signal = None;
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(12.0);
            signal = render_footer(ui, &mut self.footer, &self.active_theme);
            ui.add_space(12.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            render_weekday_header(ui, &self.active_theme);
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .drag_to_scroll(false)
                .show(ui, |ui| {
                    render_time_grid(ui, &mut self.interaction, &self.active_theme);
                });
        });

        if let Some(signal) = signal {
            self.handle_navigation(ctx, signal);
        }
    }
}

impl AvailabilityApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &GridSettings) -> Self {
        let app = Self::from_settings(settings);
        app.active_theme.apply_to_context(&cc.egui_ctx);
        app
    }

    /// Build the app state without touching an egui context.
    pub fn from_settings(settings: &GridSettings) -> Self {
        log::info!(
            "Loaded settings: theme={}, slot_height={}, default_duration={}",
            settings.theme,
            settings.slot_height,
            settings.default_duration_minutes
        );

        Self {
            interaction: GridInteraction::new(GridGeometry::new(settings.slot_height)),
            footer: FooterState::new(settings.default_duration_minutes),
            active_theme: GridTheme::from_preference(&settings.theme),
        }
    }

    pub fn interaction(&self) -> &GridInteraction {
        &self.interaction
    }

    pub fn footer(&self) -> &FooterState {
        &self.footer
    }

    fn handle_navigation(&mut self, ctx: &egui::Context, signal: NavigationSignal) {
        match signal {
            NavigationSignal::NextStep => {
                log::info!(
                    "Proceeding to next step ({} block(s) drawn, not forwarded)",
                    self.interaction.blocks().len()
                );
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}
