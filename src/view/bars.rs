// Top rule fields and bottom action bar

use crate::app::Henkan;
use crate::style;
use eframe::egui;

const GUIDE_TEXT: &str = "● Blue rows will be renamed.  ● Grey rows are excluded and left alone.\n\
● Click a name or icon in either pane to exclude or include it.\n\
● Only the part before the extension is rewritten; extensions never change.";

impl Henkan {
    pub(crate) fn render_rule_fields(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        egui::Grid::new("rule_fields")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .min_col_width(style::FIELD_LABEL_WIDTH)
            .show(ui, |ui| {
                ui.label("Folder:");
                ui.horizontal(|ui| {
                    let browse_width = 80.0;
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.ui.root_input)
                            .desired_width(ui.available_width() - browse_width),
                    );
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        let path = std::path::PathBuf::from(self.ui.root_input.trim());
                        self.load_root(&path);
                    }
                    if ui.button("Browse…").clicked() {
                        self.browse_for_root();
                    }
                });
                ui.end_row();

                ui.label("Find:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.ui.search_input)
                        .desired_width(f32::INFINITY),
                );
                if self.ui.focus_search {
                    response.request_focus();
                    self.ui.focus_search = false;
                }
                if response.changed() {
                    self.on_rule_edited();
                }
                ui.end_row();

                ui.label("Replace with:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.ui.replace_input)
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    self.on_rule_edited();
                }
                ui.end_row();
            });
        ui.add_space(6.0);
    }

    pub(crate) fn render_action_bar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        egui::CollapsingHeader::new("Guide")
            .default_open(true)
            .show(ui, |ui| {
                ui.label(egui::RichText::new(GUIDE_TEXT).small().weak());
            });

        ui.horizontal(|ui| {
            let preview = &self.session.preview;
            ui.label(format!(
                "{} to rename, {} excluded",
                preview.matched, preview.excluded
            ));
            ui.separator();
            if let Some((msg, _)) = &self.ui.error_message {
                let color = ui.visuals().error_fg_color;
                ui.colored_label(color, msg);
            } else if let Some((msg, _)) = &self.ui.info_message {
                ui.label(msg);
            }
        });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("New folder").clicked() {
                self.create_new_folder();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Rename all").clicked() {
                    self.request_rename();
                }
            });
        });
        ui.add_space(6.0);
    }
}
