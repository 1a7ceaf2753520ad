use crate::config::Config;
use crate::io::RenameError;
use crate::state::{AppMode, Session, UIState};
use crate::style::{self, Theme};
use eframe::egui;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

pub struct Henkan {
    pub config: Config,
    pub session: Session,
    pub mode: AppMode,
    pub ui: UIState,
}

impl Henkan {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config, start_path: Option<PathBuf>) -> Self {
        let theme = if config.is_dark() { Theme::Dark } else { Theme::Light };

        style::configure_fonts(&cc.egui_ctx);
        cc.egui_ctx.set_visuals(theme.visuals());
        let font_size = config.font.font_size;
        cc.egui_ctx.style_mut(|style| {
            for text_style in [egui::TextStyle::Body, egui::TextStyle::Button] {
                if let Some(font_id) = style.text_styles.get_mut(&text_style) {
                    font_id.size = font_size;
                }
            }
        });

        let mut app = Self {
            session: Session::new(config.labels.excluded_marker.clone()),
            mode: AppMode::Normal,
            ui: UIState::new(theme),
            config,
        };

        if let Some(path) = start_path {
            app.ui.root_input = path.display().to_string();
            app.load_root(&path);
        }
        app
    }

    pub fn load_root(&mut self, path: &Path) {
        match self.session.set_root(path) {
            Ok(()) => {
                if let Some(root) = &self.session.root {
                    self.ui.root_input = root.display().to_string();
                }
                // Rule fields may already hold text
                self.on_rule_edited();
            }
            Err(e) => self.ui.set_error(e.to_string()),
        }
    }

    pub fn browse_for_root(&mut self) {
        let start = self
            .session
            .root
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_default();

        match native_dialog::FileDialog::new()
            .set_location(&start)
            .show_open_single_dir()
        {
            Ok(Some(dir)) => {
                self.ui.root_input = dir.display().to_string();
                self.load_root(&dir);
            }
            Ok(None) => {}
            Err(e) => self.ui.set_error(format!("Browse failed: {}", e)),
        }
    }

    pub fn on_rule_edited(&mut self) {
        let (search, replace) = (self.ui.search_input.clone(), self.ui.replace_input.clone());
        self.session.set_rule(&search, &replace);
    }

    pub fn toggle_exclusion(&mut self, path: &Path) {
        let excluded = self.session.toggle_exclusion(path);
        tracing::debug!(
            "{} {}",
            if excluded { "Excluded" } else { "Included" },
            path.display()
        );
    }

    pub fn refresh(&mut self) {
        if self.session.root.is_some() {
            self.session.rebuild();
        }
    }

    /// Validate the inputs and ask for confirmation before renaming.
    pub fn request_rename(&mut self) {
        if let Err(e) = self.session.check_ready(&self.ui.root_input) {
            self.ui.set_error(e.to_string());
            return;
        }

        // Pick up edits that did not go through the change handler
        self.on_rule_edited();
        let rule = self.session.rule.clone();
        if !rule.is_complete() {
            self.ui.set_error(RenameError::EmptyRule.to_string());
            return;
        }
        self.mode = AppMode::ConfirmRename(rule);
    }

    pub fn perform_rename(&mut self) {
        let AppMode::ConfirmRename(rule) = std::mem::replace(&mut self.mode, AppMode::Normal) else {
            return;
        };
        match self.session.execute(&rule) {
            Ok(count) => self.ui.set_info(format!("Renamed {} item(s)", count)),
            Err(e) => self.ui.set_error(e.to_string()),
        }
    }

    pub fn create_new_folder(&mut self) {
        let base = self.config.labels.new_folder_name.clone();
        match self.session.create_folder(&base) {
            Ok(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                self.ui.set_info(format!("Created folder: {}", name));
            }
            Err(e) => self.ui.set_error(e.to_string()),
        }
    }
}

impl eframe::App for Henkan {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.ui.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);

        egui::TopBottomPanel::top("rule_panel").show(ctx, |ui| {
            self.render_rule_fields(ui);
        });

        egui::TopBottomPanel::bottom("action_panel").show(ctx, |ui| {
            self.render_action_bar(ui);
        });

        let pane_action: RefCell<Option<PaneAction>> = RefCell::new(None);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_panes(ui, &pane_action);
        });
        match pane_action.into_inner() {
            Some(PaneAction::ToggleExclusion(path)) => self.toggle_exclusion(&path),
            Some(PaneAction::ToggleExpanded(path)) => self.session.tree.toggle_expanded(&path),
            None => {}
        }

        self.render_confirm_modal(ctx);
        self.render_help_modal(ctx);

        // Messages expire on a timer
        if self.ui.error_message.is_some() || self.ui.info_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }
}

/// Row click deferred until the table has finished borrowing the preview.
pub enum PaneAction {
    ToggleExclusion(PathBuf),
    ToggleExpanded(PathBuf),
}
