//! Command-line estimation
//!
//! Builds a `TrainingConfig` from defaults, an optional JSON file and flags,
//! then prints the same numbers the calculator window shows.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;
use traintime_core::{formula_text, GpuPreset, TrainingConfig, TrainingEstimate};

pub const ADVISORY_MESSAGE: &str =
    "Training takes too long. Consider adding GPUs or reducing the data volume.";

#[derive(Args, Debug, Clone, Default)]
pub struct EstimateArgs {
    /// JSON file with a (partial) training config; missing fields use the defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Activated parameters, in billions
    #[arg(long, allow_negative_numbers = true)]
    pub params_b: Option<f64>,

    /// Training tokens, in billions
    #[arg(long, allow_negative_numbers = true)]
    pub tokens_b: Option<f64>,

    #[arg(long)]
    pub gpu_count: Option<u32>,

    /// Per-GPU throughput in TFLOPS (FP16/BF16)
    #[arg(long, conflicts_with = "preset", allow_negative_numbers = true)]
    pub gpu_flops: Option<f64>,

    /// Take the throughput from a GPU preset (see `presets`)
    #[arg(long)]
    pub preset: Option<String>,

    /// Mixture-of-Experts model: seeds MFU with 10% unless --mfu is given
    #[arg(long, action)]
    pub moe: bool,

    /// Model FLOPs utilization, percent
    #[arg(long, allow_negative_numbers = true)]
    pub mfu: Option<f64>,

    /// Print a JSON report instead of text
    #[arg(long, action)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
pub struct EstimateReport {
    pub config: TrainingConfig,
    pub estimate: TrainingEstimate,
    pub formula: String,
    pub gpu_preset: Option<&'static str>,
    pub advisory: Option<&'static str>,
}

impl EstimateReport {
    pub fn new(config: TrainingConfig) -> Self {
        let estimate = TrainingEstimate::from_config(&config);
        Self {
            config,
            estimate,
            formula: formula_text(&config),
            gpu_preset: config.active_preset().map(|p| p.name),
            advisory: estimate
                .exceeds_advisory_threshold()
                .then_some(ADVISORY_MESSAGE),
        }
    }

    pub fn render_text(&self) -> String {
        let config = &self.config;
        let gpu = match self.gpu_preset {
            Some(name) => format!("{} × {} ({} TFLOPS)", config.gpu_count, name, config.gpu_flops),
            None => format!("{} × {} TFLOPS", config.gpu_count, config.gpu_flops),
        };
        let moe = if config.is_moe { " (MoE)" } else { "" };

        let mut out = String::new();
        let _ = writeln!(
            out,
            "📐 Model:    {}B params, {}B tokens{}",
            config.params_b, config.tokens_b, moe
        );
        let _ = writeln!(out, "🖥  Fleet:    {} @ {}% MFU", gpu, config.mfu_percent);
        let _ = writeln!(out, "⏱  Time:     {:.2} days", self.estimate.training_days);
        let _ = writeln!(
            out,
            "⚡ TGS:      {:.2} tokens/GPU/s",
            self.estimate.tokens_per_gpu_per_second
        );
        let _ = writeln!(
            out,
            "🔢 Compute:  {:.2} ZettaFLOPs",
            self.estimate.total_compute_zetta_flops
        );
        let _ = writeln!(out, "   {}", self.formula);
        if let Some(advisory) = self.advisory {
            let _ = writeln!(out, "⚠️  {}", advisory);
        }
        out
    }
}

pub fn load_config(path: &Path) -> Result<TrainingConfig> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let config = serde_json::from_str(&data)
        .with_context(|| format!("Invalid training config in {:?}", path))?;
    info!("📂 Loaded config from {:?}", path);
    Ok(config)
}

/// Defaults (or the config file), then preset, then explicit fields, then the
/// MoE toggle, then `--mfu`. The toggle only seeds MFU, so an explicit `--mfu`
/// always wins.
pub fn resolve_config(args: &EstimateArgs) -> Result<TrainingConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => TrainingConfig::default(),
    };

    if let Some(name) = &args.preset {
        let preset = GpuPreset::find(name).with_context(|| {
            format!("Unknown GPU preset '{}'. Known presets: {}", name, GpuPreset::names())
        })?;
        info!("GPU preset {} ({} TFLOPS)", preset.name, preset.flops);
        config.apply_preset(preset);
    }

    if let Some(params_b) = args.params_b {
        config.params_b = params_b;
    }
    if let Some(tokens_b) = args.tokens_b {
        config.tokens_b = tokens_b;
    }
    if let Some(gpu_count) = args.gpu_count {
        config.gpu_count = gpu_count;
    }
    if let Some(gpu_flops) = args.gpu_flops {
        config.gpu_flops = gpu_flops;
    }

    if args.moe && config.set_moe(true) {
        info!("MoE enabled, MFU seeded to {}%", config.mfu_percent);
    }
    if let Some(mfu) = args.mfu {
        config.mfu_percent = mfu;
    }

    Ok(config)
}

pub fn run(args: EstimateArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let report = EstimateReport::new(config);

    info!(
        days = report.estimate.training_days,
        tgs = report.estimate.tokens_per_gpu_per_second,
        "Estimate computed"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

pub fn list_presets() -> Result<()> {
    println!("🔍 GPU presets (BF16 dense TFLOPS):");
    for preset in GpuPreset::all() {
        println!("  {:<6} {:>6} TFLOPS  {}", preset.name, preset.flops, preset.description);
    }
    Ok(())
}
