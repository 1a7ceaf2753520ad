// Dual-pane before/after tree
//
// Both panes are columns of one table over the same preview rows, so they
// always scroll and expand together.

use crate::app::{Henkan, PaneAction};
use crate::preview::{Label, Pane, PreviewRow, PreviewState};
use crate::style::{self, Theme};
use eframe::egui;
use eframe::egui::text::LayoutJob;
use std::cell::RefCell;

impl Henkan {
    pub(crate) fn render_panes(&self, ui: &mut egui::Ui, action: &RefCell<Option<PaneAction>>) {
        if self.session.snapshot.is_none() {
            ui.centered_and_justified(|ui| {
                ui.label("Choose a folder to start.");
            });
            return;
        }

        let preview = &self.session.preview;
        let visible = preview.visible_rows(&self.session.tree);
        let theme = self.ui.theme;
        let labels = &self.config.labels;

        use egui_extras::{Column, TableBuilder};
        TableBuilder::new(ui)
            .striped(false)
            .resizable(false)
            .auto_shrink([false, false])
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder().clip(true))
            .column(Column::remainder().clip(true))
            .header(style::HEADER_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("[Before]");
                });
                header.col(|ui| {
                    ui.strong("[After]");
                });
            })
            .body(|body| {
                body.rows(style::ROW_HEIGHT, visible.len(), |mut row| {
                    let entry = &preview.rows[visible[row.index()]];
                    for pane in [Pane::Before, Pane::After] {
                        row.col(|ui| {
                            let expanded = self.session.tree.is_expanded(&entry.path);
                            render_cell(
                                ui,
                                entry,
                                pane,
                                expanded,
                                theme,
                                (labels.highlight_open.as_str(), labels.highlight_close.as_str()),
                                action,
                            );
                        });
                    }
                });
            });
    }
}

fn render_cell(
    ui: &mut egui::Ui,
    entry: &PreviewRow,
    pane: Pane,
    expanded: bool,
    theme: Theme,
    markers: (&str, &str),
    action: &RefCell<Option<PaneAction>>,
) {
    let row_bg = match entry.state {
        PreviewState::Matched => Some(theme.matched_bg()),
        PreviewState::Excluded => Some(theme.excluded_bg()),
        PreviewState::Normal => None,
    };
    if let Some(color) = row_bg {
        ui.painter().rect_filled(ui.max_rect(), 0.0, color);
    }

    ui.add_space(entry.depth as f32 * style::INDENT_WIDTH);

    if entry.is_dir && entry.has_children {
        let arrow = if expanded { "⏷" } else { "⏵" };
        let response = ui.add_sized(
            [style::EXPANDER_WIDTH, style::ROW_HEIGHT],
            egui::Label::new(arrow).sense(egui::Sense::click()),
        );
        if response.clicked() {
            *action.borrow_mut() = Some(PaneAction::ToggleExpanded(entry.path.clone()));
        }
    } else {
        ui.add_space(style::EXPANDER_WIDTH + ui.spacing().item_spacing.x);
    }

    let label = match pane {
        Pane::Before => &entry.before,
        Pane::After => &entry.after,
    };
    let text_color = match entry.state {
        PreviewState::Excluded => theme.excluded_fg(),
        _ => ui.visuals().text_color(),
    };

    let icon_response = ui.add(
        egui::Label::new(egui::RichText::new(entry.icon()).size(style::ICON_SIZE))
            .sense(egui::Sense::click()),
    );
    let job = label_job(ui, label, text_color, theme.highlight_bg(), markers);
    let name_response = style::truncated_label_with_sense(ui, job, egui::Sense::click());

    // The root is never renamed, so it cannot be excluded either
    if entry.depth > 0 && (icon_response.clicked() || name_response.clicked()) {
        *action.borrow_mut() = Some(PaneAction::ToggleExclusion(entry.path.clone()));
    }
    let (open, close) = markers;
    name_response.on_hover_text(format!(
        "{}\n→ {}",
        entry.path.display(),
        entry.after.render(open, close)
    ));
}

fn label_job(
    ui: &egui::Ui,
    label: &Label,
    color: egui::Color32,
    highlight: egui::Color32,
    (open, close): (&str, &str),
) -> LayoutJob {
    let font_id = egui::TextStyle::Body.resolve(ui.style());
    let mut job = LayoutJob::default();
    for segment in &label.segments {
        if segment.highlighted {
            let format = egui::TextFormat {
                font_id: font_id.clone(),
                color,
                background: highlight,
                ..Default::default()
            };
            job.append(&format!("{}{}{}", open, segment.text, close), 0.0, format);
        } else {
            let format = egui::TextFormat {
                font_id: font_id.clone(),
                color,
                ..Default::default()
            };
            job.append(&segment.text, 0.0, format);
        }
    }
    job
}
