// Input handling for Henkan
// Keyboard shortcuts; text fields are handled by their widgets

use crate::app::Henkan;
use crate::state::AppMode;
use eframe::egui;

impl Henkan {
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        // 1. Rename confirmation
        if matches!(self.mode, AppMode::ConfirmRename(_)) {
            if ctx.input(|i| i.key_pressed(egui::Key::Y) || i.key_pressed(egui::Key::Enter)) {
                self.perform_rename();
            }
            if ctx.input(|i| i.key_pressed(egui::Key::N) || i.key_pressed(egui::Key::Escape)) {
                self.mode = AppMode::Normal;
            }
            return;
        }

        // 2. Help
        if self.mode == AppMode::Help {
            if ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::F1)) {
                self.mode = AppMode::Normal;
            }
            return;
        }

        // 3. Normal mode shortcuts
        if ctx.input(|i| i.key_pressed(egui::Key::Enter) && i.modifiers.command) {
            self.request_rename();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::N) && i.modifiers.command && i.modifiers.shift) {
            self.create_new_folder();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            self.refresh();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::F1)) {
            self.mode = AppMode::Help;
        }
    }
}
