use eframe::egui;
use std::fs;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn visuals(&self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }

    /// Row background for entries that will be renamed.
    pub fn matched_bg(&self) -> egui::Color32 {
        match self {
            Theme::Light => egui::Color32::from_rgb(0xE1, 0xF5, 0xFE),
            Theme::Dark => egui::Color32::from_rgb(0x1E, 0x3A, 0x4C),
        }
    }

    pub fn excluded_bg(&self) -> egui::Color32 {
        match self {
            Theme::Light => egui::Color32::from_gray(0xF0),
            Theme::Dark => egui::Color32::from_gray(0x30),
        }
    }

    pub fn excluded_fg(&self) -> egui::Color32 {
        egui::Color32::from_gray(0x88)
    }

    /// Background behind the bracketed search/replacement text.
    pub fn highlight_bg(&self) -> egui::Color32 {
        match self {
            Theme::Light => egui::Color32::from_rgb(0xFF, 0xE0, 0x82),
            Theme::Dark => egui::Color32::from_rgb(0x8A, 0x6D, 0x1F),
        }
    }
}

// --- Sizing ---
pub const ICON_SIZE: f32 = 14.0;
pub const ROW_HEIGHT: f32 = 22.0;
pub const HEADER_HEIGHT: f32 = 20.0;
pub const INDENT_WIDTH: f32 = 16.0;
pub const EXPANDER_WIDTH: f32 = 14.0;
pub const FIELD_LABEL_WIDTH: f32 = 90.0;

// --- Modals ---
pub const MODAL_MIN_WIDTH: f32 = 300.0;
pub const MODAL_MAX_WIDTH: f32 = 500.0;
pub const MODAL_WIDTH_RATIO: f32 = 0.6;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

pub fn modal_width(ctx: &egui::Context) -> f32 {
    let width = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.width())
            .unwrap_or(800.0)
    });
    (width * MODAL_WIDTH_RATIO).clamp(MODAL_MIN_WIDTH, MODAL_MAX_WIDTH)
}

pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}

/// Register a system CJK font ahead of egui's defaults so Japanese file
/// names render instead of tofu.
pub fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();

    match load_cjk_font_bytes() {
        Some(bytes) => {
            let font_name = "cjk_ui".to_string();
            fonts
                .font_data
                .insert(font_name.clone(), Arc::new(egui::FontData::from_owned(bytes)));
            if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
                family.insert(0, font_name.clone());
            }
            if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Monospace) {
                family.push(font_name);
            }
        }
        None => tracing::warn!("No CJK font found; Japanese names may not render"),
    }

    ctx.set_fonts(fonts);
}

fn load_cjk_font_bytes() -> Option<Vec<u8>> {
    let mut candidates: Vec<&str> = Vec::new();

    #[cfg(windows)]
    {
        candidates.extend([
            r"C:\Windows\Fonts\YuGothR.ttc",
            r"C:\Windows\Fonts\meiryo.ttc",
            r"C:\Windows\Fonts\msgothic.ttc",
        ]);
    }

    #[cfg(target_os = "macos")]
    {
        candidates.extend([
            "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
            "/System/Library/Fonts/Hiragino Sans GB.ttc",
        ]);
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        candidates.extend([
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/opentype/noto/NotoSansJP-Regular.otf",
        ]);
    }

    candidates.into_iter().find_map(|path| fs::read(path).ok())
}
