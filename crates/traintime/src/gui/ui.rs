//! UI Rendering - Calculator screen
//!
//! Inputs on the left, results on the right, references underneath. The estimate is
//! recomputed after the inputs are drawn so the results never lag a frame behind.

use eframe::egui;
use traintime_core::{formula_text, GpuPreset, TrainingConfig, TrainingEstimate, REFERENCES};

use crate::gui::i18n::{t, Language};
use crate::gui::input::{number_input, InputSpec};
use crate::gui::CalculatorApp;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(79, 70, 229); // Indigo
const PANEL_BG: egui::Color32 = egui::Color32::from_rgb(15, 23, 42); // Slate-900
const PANEL_MUTED: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
const WARNING: egui::Color32 = egui::Color32::from_rgb(254, 202, 202);

pub fn render_calculator(app: &mut CalculatorApp, ui: &mut egui::Ui) {
    let lang = app.language;
    let config = &mut app.config;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.columns(2, |columns| {
            show_model_group(&mut columns[0], config, lang);
            columns[0].add_space(10.0);
            show_compute_group(&mut columns[0], config, lang);

            let estimate = TrainingEstimate::from_config(config);
            show_results(&mut columns[1], config, &estimate, lang);
        });

        ui.add_space(10.0);
        show_references(ui, lang);
    });
}

fn show_model_group(ui: &mut egui::Ui, config: &mut TrainingConfig, lang: Language) {
    ui.group(|ui| {
        ui.heading(t(lang, "model_data"));
        ui.separator();

        egui::Grid::new("model_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                let params = InputSpec::new(t(lang, "params"))
                    .unit(t(lang, "billions"))
                    .step(0.1)
                    .description(t(lang, "params_desc"));
                number_input(ui, &params, &mut config.params_b);
                ui.end_row();

                let tokens = InputSpec::new(t(lang, "tokens"))
                    .unit(t(lang, "billions"))
                    .description(t(lang, "tokens_desc"));
                number_input(ui, &tokens, &mut config.tokens_b);
                ui.end_row();
            });

        ui.add_space(8.0);
        let mut moe = config.is_moe;
        if ui
            .checkbox(&mut moe, t(lang, "moe_title"))
            .on_hover_text(t(lang, "moe_hint"))
            .changed()
        {
            on_moe_changed(config, moe);
        }
        ui.label(egui::RichText::new(t(lang, "moe_hint")).small().weak());
    });
}

/// Checkbox handler. Returns true when the toggle re-seeded the utilization.
pub(crate) fn on_moe_changed(config: &mut TrainingConfig, enabled: bool) -> bool {
    let seeded = config.set_moe(enabled);
    if seeded {
        tracing::info!("[GUI] MoE {}, MFU seeded to {}%", enabled, config.mfu_percent);
    }
    seeded
}

pub(crate) fn on_preset_clicked(config: &mut TrainingConfig, preset: &GpuPreset) {
    config.apply_preset(preset);
    tracing::info!("[GUI] GPU preset {} ({} TFLOPS)", preset.name, preset.flops);
}

fn show_compute_group(ui: &mut egui::Ui, config: &mut TrainingConfig, lang: Language) {
    ui.group(|ui| {
        ui.heading(t(lang, "compute_resources"));
        ui.separator();

        egui::Grid::new("compute_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                let gpus = InputSpec::new(t(lang, "gpu_count"))
                    .unit(t(lang, "cards"))
                    .min(1.0);
                number_input(ui, &gpus, &mut config.gpu_count);
                ui.end_row();

                let flops = InputSpec::new(t(lang, "gpu_flops")).unit("TFLOPS");
                number_input(ui, &flops, &mut config.gpu_flops);
                ui.end_row();

                // Quick select
                ui.label("");
                ui.horizontal_wrapped(|ui| {
                    for preset in GpuPreset::all() {
                        let active = preset.is_active(config.gpu_flops);
                        if ui
                            .selectable_label(active, preset.name)
                            .on_hover_text(preset.description)
                            .clicked()
                        {
                            on_preset_clicked(config, preset);
                        }
                    }
                });
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.separator();
        show_mfu_slider(ui, config, lang);
    });
}

fn show_mfu_slider(ui: &mut egui::Ui, config: &mut TrainingConfig, lang: Language) {
    ui.horizontal(|ui| {
        ui.label(t(lang, "mfu"));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if config.is_moe_default_mfu() {
                ui.label(egui::RichText::new(t(lang, "moe_default")).small().weak());
            }
            ui.label(
                egui::RichText::new(format!("{}%", config.mfu_percent))
                    .size(18.0)
                    .strong()
                    .color(ACCENT),
            );
        });
    });

    // The 0-50 range is a UI convention; the estimator accepts anything
    ui.spacing_mut().slider_width = ui.available_width();
    ui.add(
        egui::Slider::new(&mut config.mfu_percent, 0.0..=50.0)
            .integer()
            .show_value(false),
    );

    let ticks = [
        ("tick_zero", false),
        ("tick_moe", config.is_moe),
        ("tick_dense", !config.is_moe),
        ("tick_max", false),
    ];
    ui.horizontal(|ui| {
        let width = (ui.available_width() - 3.0 * ui.spacing().item_spacing.x) / 4.0;
        for (key, emphasized) in ticks {
            let text = egui::RichText::new(t(lang, key)).small();
            let text = if emphasized {
                text.strong().color(ACCENT)
            } else {
                text.weak()
            };
            ui.add_sized([width, 16.0], egui::Label::new(text));
        }
    });
}

fn show_results(
    ui: &mut egui::Ui,
    config: &TrainingConfig,
    estimate: &TrainingEstimate,
    lang: Language,
) {
    egui::Frame::none()
        .fill(PANEL_BG)
        .rounding(16.0)
        .inner_margin(20.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            ui.label(egui::RichText::new(t(lang, "estimated_time")).color(PANEL_MUTED));
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new(format!("{:.2}", estimate.training_days))
                    .size(56.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            );
            ui.label(egui::RichText::new(t(lang, "days")).size(18.0).color(PANEL_MUTED));
            ui.label(
                egui::RichText::new(format!(
                    "{}: {:.2}",
                    t(lang, "tgs"),
                    estimate.tokens_per_gpu_per_second
                ))
                .small()
                .color(PANEL_MUTED),
            );

            if estimate.exceeds_advisory_threshold() {
                ui.add_space(10.0);
                egui::Frame::none()
                    .fill(egui::Color32::from_rgb(69, 26, 26))
                    .rounding(6.0)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(t(lang, "advisory")).color(WARNING));
                    });
            }

            ui.add_space(16.0);
            ui.separator();
            ui.label(egui::RichText::new(t(lang, "formula_ref")).color(PANEL_MUTED));
            egui::Frame::none()
                .fill(egui::Color32::from_rgb(30, 41, 59))
                .rounding(6.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(formula_text(config))
                            .monospace()
                            .color(PANEL_MUTED),
                    );
                });
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(format!(
                    "⚡ {}: {:.2} ZettaFLOPs",
                    t(lang, "total_compute"),
                    estimate.total_compute_zetta_flops
                ))
                .small()
                .color(PANEL_MUTED),
            );
        });
}

fn show_references(ui: &mut egui::Ui, lang: Language) {
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.heading(t(lang, "references_title"));
        ui.label(t(lang, "references_intro"));
        ui.add_space(6.0);

        for reference in REFERENCES {
            match reference.quote {
                Some(quote) => {
                    ui.label(egui::RichText::new(format!("“{}”", quote)).italics());
                }
                None => {
                    ui.label(t(lang, "references_note"));
                }
            }
            ui.hyperlink_to(reference.title, reference.url);
            ui.add_space(6.0);
        }
    });
}
