pub mod i18n;
pub mod input;
pub mod ui;

use anyhow::anyhow;
use eframe::egui;
use traintime_core::TrainingConfig;

use crate::gui::i18n::{t, Language};

/// Single-screen calculator. Each launch starts from the default configuration.
#[derive(Default)]
pub struct CalculatorApp {
    pub language: Language,
    pub config: TrainingConfig,
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.heading(t(self.language, "app_title"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.language.display_name()).clicked() {
                        self.language = self.language.toggle();
                        tracing::info!("[GUI] Language: {}", self.language.display_name());
                    }
                });
            });
            ui.label(egui::RichText::new(t(self.language, "app_subtitle")).weak());
            ui.add_space(5.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::ui::render_calculator(self, ui);
        });
    }
}

pub fn run() -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 820.0])
            .with_title("Training Time Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "traintime",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            setup_custom_fonts(&cc.egui_ctx);
            Box::new(CalculatorApp::default())
        }),
    )
    .map_err(|e| anyhow!("Failed to open calculator window: {}", e))
}

/// Chinese labels need a CJK font; the egui defaults only cover Latin and emoji.
fn setup_custom_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();

    let candidates = [
        "C:\\Windows\\Fonts\\msyh.ttc",   // Microsoft YaHei
        "C:\\Windows\\Fonts\\simhei.ttf", // SimHei
        "/System/Library/Fonts/PingFang.ttc",
        "/System/Library/Fonts/STHeiti Medium.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    ];

    let mut loaded = false;
    for path in candidates {
        if !std::path::Path::new(path).exists() {
            continue;
        }
        if let Ok(data) = std::fs::read(path) {
            tracing::info!("[GUI] Loading system font: {}", path);
            fonts
                .font_data
                .insert("cjk_font".to_owned(), egui::FontData::from_owned(data));

            // Append as fallback so Latin text keeps the default face
            fonts
                .families
                .entry(egui::FontFamily::Proportional)
                .or_default()
                .push("cjk_font".to_owned());

            fonts
                .families
                .entry(egui::FontFamily::Monospace)
                .or_default()
                .push("cjk_font".to_owned());

            loaded = true;
            break;
        }
    }

    if !loaded {
        tracing::warn!("[GUI] No CJK system font found, Chinese labels will not render.");
    }

    ctx.set_fonts(fonts);
    tracing::info!("[GUI] Fonts initialized.");
}
