//! Estimator - Training time from the 6·N·D compute rule
//!
//! Total training compute is approximated as `6 * params * tokens` FLOPs (forward
//! plus backward pass). Dividing by the fleet's effective throughput gives
//! wall-clock time.
//!
//! Inputs arrive in convenient units (billions of params/tokens, TFLOPS), so the
//! 10^9 * 10^9 / 10^12 unit factors collapse into a single 10^6 and the raw
//! 10^20-scale FLOP counts never materialize.

use serde::Serialize;
use tracing::trace;

use crate::config::TrainingConfig;

/// Forward + backward FLOPs per parameter per token
const FLOPS_PER_PARAM_TOKEN: f64 = 6.0;
/// 10^9 (params) * 10^9 (tokens) / 10^12 (TFLOPS)
const UNIT_SCALE: f64 = 1_000_000.0;
const TOKENS_PER_BILLION: f64 = 1_000_000_000.0;
const SECONDS_PER_DAY: f64 = 24.0 * 3600.0;

/// Dense models usually reach ~20% MFU, MoE routing overhead drags it to ~10%
const DENSE_DEFAULT_MFU: f64 = 20.0;
const MOE_DEFAULT_MFU: f64 = 10.0;

/// Runs longer than this get a soft "add GPUs or cut data" advisory
pub const ADVISORY_THRESHOLD_DAYS: f64 = 365.0;

/// Estimated wall-clock days. Returns 0 while the run is not computable
/// (no GPUs, no throughput or no utilization).
pub fn compute_training_days(config: &TrainingConfig) -> f64 {
    if config.gpu_count == 0 || config.gpu_flops <= 0.0 || config.mfu_percent <= 0.0 {
        trace!(?config, "Degenerate fleet, training days pinned to 0");
        return 0.0;
    }

    let numerator = FLOPS_PER_PARAM_TOKEN * config.params_b * config.tokens_b * UNIT_SCALE;
    let denominator = config.gpu_count as f64 * config.gpu_flops * (config.mfu_percent / 100.0);

    let seconds = numerator / denominator;
    seconds / SECONDS_PER_DAY
}

/// Tokens processed per GPU per second (TGS), derived from `days`.
///
/// `days` must come from `compute_training_days` for the same config.
pub fn compute_tokens_per_gpu_per_second(config: &TrainingConfig, days: f64) -> f64 {
    if days <= 0.0 || config.gpu_count == 0 {
        return 0.0;
    }
    let total_tokens = config.tokens_b * TOKENS_PER_BILLION;
    let total_seconds = days * SECONDS_PER_DAY;
    total_tokens / (total_seconds * config.gpu_count as f64)
}

/// Total training compute in ZettaFLOPs (10^21). No guards.
pub fn compute_total_compute_zetta_flops(config: &TrainingConfig) -> f64 {
    (FLOPS_PER_PARAM_TOKEN * config.params_b * config.tokens_b) / 1000.0
}

/// Utilization a fresh MoE toggle seeds into the config
pub fn resolve_default_mfu(is_moe: bool) -> f64 {
    if is_moe {
        MOE_DEFAULT_MFU
    } else {
        DENSE_DEFAULT_MFU
    }
}

/// Human-readable formula with the live values substituted
pub fn formula_text(config: &TrainingConfig) -> String {
    format!(
        "Time = (6 × {}B × {}B) / ({} × {} TFLOPS × {}%)",
        config.params_b, config.tokens_b, config.gpu_count, config.gpu_flops, config.mfu_percent
    )
}

/// All derived outputs for one configuration
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct TrainingEstimate {
    pub training_days: f64,
    pub tokens_per_gpu_per_second: f64,
    pub total_compute_zetta_flops: f64,
}

impl TrainingEstimate {
    /// Days are computed once and fed into TGS, so the two never diverge.
    pub fn from_config(config: &TrainingConfig) -> Self {
        let training_days = compute_training_days(config);
        Self {
            training_days,
            tokens_per_gpu_per_second: compute_tokens_per_gpu_per_second(config, training_days),
            total_compute_zetta_flops: compute_total_compute_zetta_flops(config),
        }
    }

    pub fn is_computable(&self) -> bool {
        self.training_days > 0.0
    }

    pub fn exceeds_advisory_threshold(&self) -> bool {
        self.training_days > ADVISORY_THRESHOLD_DAYS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(params_b: f64, tokens_b: f64, gpu_count: u32, gpu_flops: f64, mfu: f64) -> TrainingConfig {
        TrainingConfig {
            params_b,
            tokens_b,
            gpu_count,
            gpu_flops,
            mfu_percent: mfu,
            is_moe: false,
        }
    }

    #[test]
    fn test_default_run() {
        // 6 * 7 * 20 * 1e6 / (8 * 312 * 0.2) seconds = 1_682_692.3 s
        let days = compute_training_days(&TrainingConfig::default());
        assert!((days - 19.4756).abs() < 1e-3, "got {}", days);
    }

    #[test]
    fn test_full_utilization_scale() {
        // Same run at 100% MFU: ~3.90 days
        let days = compute_training_days(&config(7.0, 20.0, 8, 312.0, 100.0));
        assert!((days - 3.8951).abs() < 1e-3, "got {}", days);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(compute_training_days(&config(7.0, 20.0, 0, 312.0, 20.0)), 0.0);
        assert_eq!(compute_training_days(&config(7.0, 20.0, 8, 0.0, 20.0)), 0.0);
        assert_eq!(compute_training_days(&config(7.0, 20.0, 8, 312.0, 0.0)), 0.0);
        assert_eq!(compute_training_days(&config(7.0, 20.0, 8, -1.0, 20.0)), 0.0);
        assert_eq!(compute_training_days(&config(7.0, 20.0, 8, 312.0, -5.0)), 0.0);
    }

    #[test]
    fn test_negative_params_pass_through() {
        let days = compute_training_days(&config(-7.0, 20.0, 8, 312.0, 20.0));
        assert!(days < 0.0);
        // TGS refuses a non-positive duration
        assert_eq!(compute_tokens_per_gpu_per_second(&config(-7.0, 20.0, 8, 312.0, 20.0), days), 0.0);
    }

    #[test]
    fn test_total_compute() {
        let zflops = compute_total_compute_zetta_flops(&TrainingConfig::default());
        assert!((zflops - 0.84).abs() < 1e-12);
        assert_eq!(compute_total_compute_zetta_flops(&config(0.0, 20.0, 0, 0.0, 0.0)), 0.0);
        assert!(compute_total_compute_zetta_flops(&config(-1.0, 10.0, 8, 312.0, 20.0)) < 0.0);
    }

    #[test]
    fn test_tgs() {
        let cfg = TrainingConfig::default();
        let days = compute_training_days(&cfg);
        let tgs = compute_tokens_per_gpu_per_second(&cfg, days);
        let expected = 20.0e9 / (days * 86400.0 * 8.0);
        assert_eq!(tgs, expected);
        assert!((tgs - 1485.71).abs() < 0.01, "got {}", tgs);

        assert_eq!(compute_tokens_per_gpu_per_second(&cfg, 0.0), 0.0);
        assert_eq!(compute_tokens_per_gpu_per_second(&config(7.0, 20.0, 0, 312.0, 20.0), 1.0), 0.0);
    }

    #[test]
    fn test_resolve_default_mfu() {
        assert_eq!(resolve_default_mfu(true), 10.0);
        assert_eq!(resolve_default_mfu(false), 20.0);
    }

    #[test]
    fn test_mfu_above_ui_range_is_accepted() {
        let at_50 = compute_training_days(&config(7.0, 20.0, 8, 312.0, 50.0));
        let at_80 = compute_training_days(&config(7.0, 20.0, 8, 312.0, 80.0));
        assert!(at_80 > 0.0 && at_80 < at_50);
    }

    #[test]
    fn test_advisory_threshold() {
        let short = TrainingEstimate::from_config(&TrainingConfig::default());
        assert!(short.is_computable());
        assert!(!short.exceeds_advisory_threshold());

        // 70B params on 2T tokens with a single node takes years
        let long = TrainingEstimate::from_config(&config(70.0, 2000.0, 8, 312.0, 20.0));
        assert!(long.exceeds_advisory_threshold());

        let none = TrainingEstimate::from_config(&config(7.0, 20.0, 0, 312.0, 20.0));
        assert!(!none.is_computable());
        assert_eq!(none.tokens_per_gpu_per_second, 0.0);
        assert!((none.total_compute_zetta_flops - 0.84).abs() < 1e-12);
    }

    #[test]
    fn test_formula_text() {
        assert_eq!(
            formula_text(&TrainingConfig::default()),
            "Time = (6 × 7B × 20B) / (8 × 312 TFLOPS × 20%)"
        );
        assert_eq!(
            formula_text(&config(1.5, 300.0, 64, 990.0, 12.5)),
            "Time = (6 × 1.5B × 300B) / (64 × 990 TFLOPS × 12.5%)"
        );
    }
}
