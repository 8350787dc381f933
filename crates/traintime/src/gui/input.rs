//! Numeric input row: a label cell plus a drag-value cell, for use inside an `egui::Grid`.

use eframe::egui;

/// Decoration for one numeric field. Only the label is required.
#[derive(Debug, Clone, Copy)]
pub struct InputSpec<'a> {
    pub label: &'a str,
    /// Unit suffix drawn after the value
    pub unit: Option<&'a str>,
    /// Drag speed (value change per pixel)
    pub step: f64,
    /// Lower bound the widget enforces while editing
    pub min: f64,
    pub max: f64,
    /// Hover text on the label
    pub description: Option<&'a str>,
}

impl<'a> InputSpec<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            unit: None,
            step: 1.0,
            min: 0.0,
            max: 1.0e9,
            description: None,
        }
    }

    pub fn unit(mut self, unit: &'a str) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }
}

/// Adds two grid cells; the caller ends the row.
pub fn number_input<N: egui::emath::Numeric>(
    ui: &mut egui::Ui,
    spec: &InputSpec,
    value: &mut N,
) -> egui::Response {
    let label = ui.label(spec.label);
    if let Some(description) = spec.description {
        let _ = label.on_hover_text(description);
    }

    let mut drag = egui::DragValue::new(value)
        .speed(spec.step)
        .clamp_range(spec.min..=spec.max);
    if let Some(unit) = spec.unit {
        drag = drag.suffix(format!(" {}", unit));
    }
    ui.add(drag)
}
