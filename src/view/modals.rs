// Modal rendering functions (Rename confirmation, Help)

use crate::app::Henkan;
use crate::state::AppMode;
use crate::style;
use eframe::egui;

impl Henkan {
    pub(crate) fn render_confirm_modal(&mut self, ctx: &egui::Context) {
        let AppMode::ConfirmRename(rule) = &self.mode else {
            return;
        };
        let folder = self
            .session
            .root
            .as_ref()
            .map(|root| root.display().to_string())
            .unwrap_or_default();
        let question = format!(
            "Rename \"{}\" to \"{}\" in {} item(s) under {}?",
            rule.search, rule.replace, self.session.preview.matched, folder
        );

        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new("Confirm")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                ui.label(question);
                if !self.session.exclusions.is_empty() {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} excluded item(s) will be skipped.",
                            self.session.exclusions.len()
                        ))
                        .weak(),
                    );
                }
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Yes (y)").clicked() {
                        confirmed = true;
                    }
                    if ui.button("No (n)").clicked() {
                        cancelled = true;
                    }
                });
            });

        if confirmed {
            self.perform_rename();
        } else if cancelled {
            self.mode = AppMode::Normal;
        }
    }

    pub(crate) fn render_help_modal(&mut self, ctx: &egui::Context) {
        if self.mode != AppMode::Help {
            return;
        }
        egui::Window::new("Help")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                ui.heading("Key Bindings");
                ui.separator();
                egui::Grid::new("help_grid").striped(true).show(ui, |ui| {
                    ui.label("Ctrl+Enter");
                    ui.label("Rename All");
                    ui.end_row();
                    ui.label("Ctrl+Shift+N");
                    ui.label("New Folder");
                    ui.end_row();
                    ui.label("F5");
                    ui.label("Reload Folder");
                    ui.end_row();
                    ui.label("Click name / icon");
                    ui.label("Exclude / Include");
                    ui.end_row();
                    ui.label("F1");
                    ui.label("Toggle Help");
                    ui.end_row();
                });
                ui.add_space(10.0);
                if ui.button("Close").clicked() {
                    self.mode = AppMode::Normal;
                }
            });
    }
}
